/// Data models
pub mod config;
pub mod consultation;

pub use config::*;
pub use consultation::*;
