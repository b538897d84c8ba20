pub mod debt_payoff;
pub mod medications;
pub mod recent_transactions;
pub mod savings_goal;
pub mod shell;
pub mod spending_chart;
pub mod subscriptions;
pub mod upcoming_bills;
pub mod wallet;

pub use debt_payoff::DebtPayoffTool;
pub use medications::MedicationCard;
pub use recent_transactions::RecentTransactionsCard;
pub use savings_goal::SavingsGoalCard;
pub use spending_chart::SpendingChart;
pub use subscriptions::SubscriptionCard;
pub use upcoming_bills::UpcomingBills;
pub use wallet::Wallet;
