/// Virobel Core - consultation request handling
///
/// This crate contains the request model, validation, HTML escaping,
/// email templates, rate limiting and email provider integrations used by
/// the website's consultation endpoint.
pub mod constants;
pub mod email;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::ConsultError;
pub use services::consultation::ConsultationService;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
