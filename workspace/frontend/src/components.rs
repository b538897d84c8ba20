pub mod cards;
pub mod dashboard;
pub mod layout;
pub mod three;
