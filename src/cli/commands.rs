pub mod fixtures;
pub mod serve;

pub use fixtures::{fixtures, FixtureFormat};
pub use serve::serve;
