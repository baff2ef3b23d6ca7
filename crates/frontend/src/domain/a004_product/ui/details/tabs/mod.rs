//! Tab components for Product details form

mod general;
mod variants;

pub use general::GeneralTab;
pub use variants::VariantsTab;
