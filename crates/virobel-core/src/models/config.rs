/// Configuration models
use crate::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_MAIL_FROM, DEFAULT_NOTIFICATION_TO, DEFAULT_RESEND_API_URL,
    RATE_LIMIT_MAX_REQUESTS, RATE_LIMIT_WINDOW_SECONDS,
};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Endpoint configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Sender identity for both emails
    pub mail_from: String,
    /// Firm inbox receiving consultation notifications
    pub notification_to: String,
    pub provider: ProviderKind,
    pub resend: ResendConfig,
    pub rate_limit: RateLimitConfig,
    /// Listen address for the standalone server
    pub bind_addr: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mail_from: DEFAULT_MAIL_FROM.to_string(),
            notification_to: DEFAULT_NOTIFICATION_TO.to_string(),
            provider: ProviderKind::Resend,
            resend: ResendConfig::default(),
            rate_limit: RateLimitConfig::default(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl AppConfig {
    /// Validates configuration is usable
    pub fn validate(&self) -> Result<(), String> {
        if self.mail_from.trim().is_empty() {
            return Err("Sender address (MAIL_FROM) is empty".to_string());
        }

        if !self.notification_to.contains('@') {
            return Err(format!(
                "Invalid notification address: {}",
                self.notification_to
            ));
        }

        if self.provider == ProviderKind::Resend {
            if self.resend.api_key.as_ref().is_none_or(|k| k.is_empty()) {
                return Err("RESEND_API_KEY is required for the resend provider".to_string());
            }
            if !self.resend.api_url.starts_with("http") {
                return Err(format!("Invalid Resend API URL: {}", self.resend.api_url));
            }
        }

        if self.rate_limit.max_requests == 0 {
            return Err("Rate limit max requests must be > 0".to_string());
        }

        if self.rate_limit.window_seconds == 0 {
            return Err("Rate limit window must be > 0".to_string());
        }

        Ok(())
    }
}

/// Email provider backing the endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Resend,
    Ses,
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "resend" => Ok(Self::Resend),
            "ses" => Ok(Self::Ses),
            other => Err(format!("Unknown email provider: {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResendConfig {
    pub api_key: Option<ApiKey>,
    pub api_url: String,
}

impl Default for ResendConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_RESEND_API_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window_seconds: u64,
}

impl RateLimitConfig {
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_seconds)
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: RATE_LIMIT_MAX_REQUESTS,
            window_seconds: RATE_LIMIT_WINDOW_SECONDS,
        }
    }
}

/// Provider API key; never printed
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
