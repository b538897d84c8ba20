pub mod footer;
pub mod placeholder;
