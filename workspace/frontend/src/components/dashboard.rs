pub mod content;
pub mod scroll;
pub mod view;

pub use view::Dashboard;
