/// Email rendering modules
pub mod composer;
pub mod consultation;
pub mod template;

pub use consultation::ConsultationMailer;
pub use template::{SafeHtml, Slot, Template};
