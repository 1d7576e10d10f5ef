/// Utility modules
pub mod client_ip;
pub mod logging;
pub mod sanitization;
pub mod validation;

pub use client_ip::*;
pub use logging::*;
pub use sanitization::*;
pub use validation::*;
