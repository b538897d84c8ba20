use serde::{Deserialize, Serialize};

use crate::records::{Bill, Debt, Medication, SavingsGoal, SpendingPoint, Subscription, WalletSummary};
use crate::transaction::Transaction;
use crate::user::User;

/// Read-only access to the data the dashboard renders.
///
/// Implementations never fail: every collection is always present, possibly
/// empty. Collection order is display order.
pub trait DashboardData {
    /// The user greeted when the dashboard is given no explicit user.
    fn default_user(&self) -> User;

    fn wallet(&self) -> WalletSummary;

    fn transactions(&self) -> Vec<Transaction>;

    fn bills(&self) -> Vec<Bill>;

    fn subscriptions(&self) -> Vec<Subscription>;

    fn medications(&self) -> Vec<Medication>;

    fn debts(&self) -> Vec<Debt>;

    fn savings_goals(&self) -> Vec<SavingsGoal>;

    fn spending(&self) -> Vec<SpendingPoint>;

    /// Collects every collection into one immutable value.
    fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            user: self.default_user(),
            wallet: self.wallet(),
            transactions: self.transactions(),
            bills: self.bills(),
            subscriptions: self.subscriptions(),
            medications: self.medications(),
            debts: self.debts(),
            savings_goals: self.savings_goals(),
            spending: self.spending(),
        }
    }
}

/// Every fixture collection in one value, handed to the UI once at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub user: User,
    pub wallet: WalletSummary,
    pub transactions: Vec<Transaction>,
    pub bills: Vec<Bill>,
    pub subscriptions: Vec<Subscription>,
    pub medications: Vec<Medication>,
    pub debts: Vec<Debt>,
    pub savings_goals: Vec<SavingsGoal>,
    pub spending: Vec<SpendingPoint>,
}
