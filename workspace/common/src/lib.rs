//! Dashboard logic shared by the WASM client and the native tooling.
//!
//! Nothing in here touches the DOM: the registry, the selection state machine
//! and the view model are plain values so they can be exercised natively.

pub mod cards;
pub mod error;
pub mod finance;
pub mod money;
pub mod selection;
pub mod view;

pub use cards::{default_registry, CardDescriptor, CardRegistry, DashboardCard};
pub use error::DashboardError;
pub use money::{format_currency, format_signed, AmountTone};
pub use selection::{CardSelection, Transition};
pub use view::{CardButton, CardPanel, DashboardView, BRAND_TITLE};
