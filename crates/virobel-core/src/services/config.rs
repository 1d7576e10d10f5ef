/// Configuration service - loads config from environment variables
use crate::error::ConsultError;
use crate::models::{ApiKey, AppConfig, ProviderKind};

/// Environment variable-based configuration provider
pub struct EnvConfigProvider {
    config: AppConfig,
}

impl EnvConfigProvider {
    pub fn new() -> Result<Self, ConsultError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Unset or empty variables fall back to defaults; the result is
    /// validated before it is returned.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConsultError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = AppConfig::default();

        if let Some(provider) = var("EMAIL_PROVIDER") {
            config.provider = provider
                .parse::<ProviderKind>()
                .map_err(ConsultError::Config)?;
        }
        if let Some(from) = var("MAIL_FROM") {
            config.mail_from = from;
        }
        if let Some(to) = var("NOTIFICATION_TO") {
            config.notification_to = to;
        }
        config.resend.api_key = var("RESEND_API_KEY").map(ApiKey::new);
        if let Some(url) = var("RESEND_API_URL") {
            config.resend.api_url = url.trim_end_matches('/').to_string();
        }
        if let Some(max) = var("RATE_LIMIT_MAX_REQUESTS") {
            config.rate_limit.max_requests = max.trim().parse().map_err(|e| {
                ConsultError::Config(format!("Invalid RATE_LIMIT_MAX_REQUESTS: {}", e))
            })?;
        }
        if let Some(window) = var("RATE_LIMIT_WINDOW_SECONDS") {
            config.rate_limit.window_seconds = window.trim().parse().map_err(|e| {
                ConsultError::Config(format!("Invalid RATE_LIMIT_WINDOW_SECONDS: {}", e))
            })?;
        }
        if let Some(addr) = var("BIND_ADDR") {
            config.bind_addr = addr;
        }

        config
            .validate()
            .map_err(|e| ConsultError::Config(format!("Invalid configuration: {}", e)))?;

        tracing::info!(
            provider = ?config.provider,
            max_requests = config.rate_limit.max_requests,
            window_seconds = config.rate_limit.window_seconds,
            "Configuration validated successfully"
        );

        Ok(Self { config })
    }

    pub fn into_config(self) -> AppConfig {
        self.config
    }
}
