/// API endpoint modules
pub mod consultation;
