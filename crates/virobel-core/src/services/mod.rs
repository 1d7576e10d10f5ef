/// Service modules
pub mod config;
pub mod consultation;
pub mod email;
pub mod rate_limiter;
pub mod resend;
pub mod ses;

pub use config::EnvConfigProvider;
pub use consultation::ConsultationService;
pub use email::{DeliveryReceipt, EmailProvider, OutboundEmail};
#[cfg(any(test, feature = "test-util"))]
pub use email::RecordingEmailProvider;
pub use rate_limiter::{InMemoryRateLimiter, MockRateLimiter, RateLimiter};
pub use resend::ResendEmailProvider;
pub use ses::SesEmailProvider;
