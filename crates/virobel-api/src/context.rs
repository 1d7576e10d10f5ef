/// API Context - shared state for the handler
use anyhow::Context;
use std::sync::Arc;
use virobel_core::ConsultationService;
use virobel_core::models::{AppConfig, ProviderKind};
use virobel_core::services::{
    EmailProvider, EnvConfigProvider, InMemoryRateLimiter, RateLimiter, ResendEmailProvider,
    SesEmailProvider,
};

/// API Context contains shared resources for the handler
pub struct ApiContext {
    /// Validated configuration
    pub config: AppConfig,

    /// Submission pipeline with its rate limiter and email provider
    pub service: ConsultationService,
}

impl ApiContext {
    /// Create a new API context from the environment
    pub async fn new() -> anyhow::Result<Arc<Self>> {
        let config = EnvConfigProvider::new()
            .context("Failed to load configuration")?
            .into_config();

        let provider: Arc<dyn EmailProvider> = match config.provider {
            ProviderKind::Resend => Arc::new(
                ResendEmailProvider::from_config(&config.resend)
                    .context("Failed to create Resend provider")?,
            ),
            ProviderKind::Ses => {
                let aws_config = aws_config::load_from_env().await;
                Arc::new(SesEmailProvider::new(aws_sdk_ses::Client::new(&aws_config)))
            }
        };

        Ok(Self::from_parts(
            config,
            provider,
            Arc::new(InMemoryRateLimiter::new()),
        ))
    }

    /// Create a context from explicit collaborators
    pub fn from_parts(
        config: AppConfig,
        provider: Arc<dyn EmailProvider>,
        rate_limiter: Arc<dyn RateLimiter>,
    ) -> Arc<Self> {
        let service = ConsultationService::from_config(&config, provider, rate_limiter);
        Arc::new(Self { config, service })
    }
}
