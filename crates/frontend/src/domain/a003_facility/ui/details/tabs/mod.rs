//! Tab components for Facility details form

mod contacts;
mod general;
mod location;

pub use contacts::ContactsTab;
pub use general::GeneralTab;
pub use location::LocationTab;
