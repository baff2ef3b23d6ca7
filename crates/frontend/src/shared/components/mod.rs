pub mod number_format;
pub mod pagination_controls;
