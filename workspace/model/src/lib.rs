//! Data model for the NextBanking dashboard.
//!
//! Every record here is plain static data. The [`DashboardData`] trait is the
//! only way the rest of the workspace reads it; [`MockDataProvider`] is the
//! fixture-backed implementation used by the client and the CLI.

pub mod mock;
pub mod provider;
pub mod records;
pub mod transaction;
pub mod user;

pub use mock::MockDataProvider;
pub use provider::{DashboardData, DashboardSnapshot};
pub use records::{Bill, Debt, Medication, SavingsGoal, SpendingPoint, Subscription, WalletSummary};
pub use transaction::Transaction;
pub use user::User;

// Re-export tracing for use in this crate
pub use tracing;
