//! Static fixtures standing in for a real backend.

use std::sync::LazyLock;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::provider::{DashboardData, DashboardSnapshot};
use crate::records::{Bill, Debt, Medication, SavingsGoal, SpendingPoint, Subscription, WalletSummary};
use crate::transaction::Transaction;
use crate::user::User;

static FIXTURES: LazyLock<DashboardSnapshot> = LazyLock::new(|| {
    debug!("Building dashboard fixtures");
    build_fixtures()
});

/// Fixture-backed [`DashboardData`].
///
/// The fixtures are built on first access and shared for the rest of the
/// process; nothing ever mutates them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MockDataProvider;

impl MockDataProvider {
    pub fn new() -> Self {
        Self
    }

    /// Borrow the shared fixtures without cloning.
    pub fn fixtures(&self) -> &'static DashboardSnapshot {
        &FIXTURES
    }
}

impl DashboardData for MockDataProvider {
    fn default_user(&self) -> User {
        FIXTURES.user.clone()
    }

    fn wallet(&self) -> WalletSummary {
        FIXTURES.wallet.clone()
    }

    fn transactions(&self) -> Vec<Transaction> {
        FIXTURES.transactions.clone()
    }

    fn bills(&self) -> Vec<Bill> {
        FIXTURES.bills.clone()
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        FIXTURES.subscriptions.clone()
    }

    fn medications(&self) -> Vec<Medication> {
        FIXTURES.medications.clone()
    }

    fn debts(&self) -> Vec<Debt> {
        FIXTURES.debts.clone()
    }

    fn savings_goals(&self) -> Vec<SavingsGoal> {
        FIXTURES.savings_goals.clone()
    }

    fn spending(&self) -> Vec<SpendingPoint> {
        FIXTURES.spending.clone()
    }

    fn snapshot(&self) -> DashboardSnapshot {
        FIXTURES.clone()
    }
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

fn build_fixtures() -> DashboardSnapshot {
    let user = User::new("Alex Morgan").with_email("alex.morgan@example.com");

    let wallet = WalletSummary {
        holder: "Alex Morgan".to_string(),
        card_brand: "Visa Platinum".to_string(),
        last_four: "4821".to_string(),
        balance: cents(1_254_075),
        available_credit: cents(842_050),
    };

    let transactions = vec![
        Transaction::new(1, "Grocery Store", day(2025, 5, 2), cents(-4250)),
        Transaction::new(2, "Salary Deposit", day(2025, 5, 1), cents(320_000)),
        Transaction::new(3, "Electric Company", day(2025, 4, 29), cents(-8999)),
        Transaction::new(4, "Coffee Shop", day(2025, 4, 28), cents(-575)),
        Transaction::new(5, "Refund: Online Store", day(2025, 4, 27), cents(10_000)),
        Transaction::new(6, "Gas Station", day(2025, 4, 25), cents(-6120)),
    ];

    let bills = vec![
        Bill {
            id: 1,
            name: "Rent".to_string(),
            due_date: day(2025, 6, 1),
            amount: cents(180_000),
            autopay: true,
        },
        Bill {
            id: 2,
            name: "Electricity".to_string(),
            due_date: day(2025, 5, 15),
            amount: cents(8999),
            autopay: false,
        },
        Bill {
            id: 3,
            name: "Internet".to_string(),
            due_date: day(2025, 5, 20),
            amount: cents(6500),
            autopay: true,
        },
        Bill {
            id: 4,
            name: "Car Insurance".to_string(),
            due_date: day(2025, 5, 28),
            amount: cents(13_450),
            autopay: false,
        },
    ];

    let subscriptions = vec![
        Subscription {
            id: 1,
            name: "Netflix".to_string(),
            monthly_cost: cents(1549),
            renews_on: day(2025, 5, 12),
        },
        Subscription {
            id: 2,
            name: "Spotify".to_string(),
            monthly_cost: cents(1099),
            renews_on: day(2025, 5, 18),
        },
        Subscription {
            id: 3,
            name: "Cloud Storage".to_string(),
            monthly_cost: cents(299),
            renews_on: day(2025, 5, 21),
        },
        Subscription {
            id: 4,
            name: "Gym Membership".to_string(),
            monthly_cost: cents(4500),
            renews_on: day(2025, 6, 1),
        },
    ];

    let medications = vec![
        Medication {
            id: 1,
            name: "Lisinopril".to_string(),
            dosage: "10 mg".to_string(),
            schedule: "Once daily, morning".to_string(),
            refill_on: day(2025, 5, 14),
        },
        Medication {
            id: 2,
            name: "Metformin".to_string(),
            dosage: "500 mg".to_string(),
            schedule: "Twice daily, with meals".to_string(),
            refill_on: day(2025, 5, 22),
        },
        Medication {
            id: 3,
            name: "Vitamin D3".to_string(),
            dosage: "2000 IU".to_string(),
            schedule: "Once daily".to_string(),
            refill_on: day(2025, 6, 3),
        },
    ];

    let debts = vec![
        Debt {
            id: 1,
            lender: "Credit Card".to_string(),
            balance: cents(345_000),
            apr: cents(1999),
            minimum_payment: cents(15_000),
        },
        Debt {
            id: 2,
            lender: "Student Loan".to_string(),
            balance: cents(1_820_000),
            apr: cents(499),
            minimum_payment: cents(21_000),
        },
        Debt {
            id: 3,
            lender: "Car Loan".to_string(),
            balance: cents(960_000),
            apr: cents(689),
            minimum_payment: cents(32_500),
        },
    ];

    let savings_goals = vec![
        SavingsGoal {
            id: 1,
            name: "Emergency Fund".to_string(),
            saved: cents(650_000),
            target: cents(1_000_000),
            deadline: day(2025, 12, 31),
        },
        SavingsGoal {
            id: 2,
            name: "Vacation".to_string(),
            saved: cents(120_000),
            target: cents(300_000),
            deadline: day(2025, 8, 15),
        },
    ];

    let spending = [
        ("January", 400),
        ("February", 300),
        ("March", 450),
        ("April", 200),
        ("May", 350),
    ]
    .into_iter()
    .map(|(month, amount)| SpendingPoint {
        month: month.to_string(),
        amount: Decimal::from(amount),
    })
    .collect();

    DashboardSnapshot {
        user,
        wallet,
        transactions,
        bills,
        subscriptions,
        medications,
        debts,
        savings_goals,
        spending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_user() {
        let provider = MockDataProvider::new();
        assert_eq!(provider.default_user().name, "Alex Morgan");
    }

    #[test]
    fn test_spending_series_is_fixed() {
        let spending = MockDataProvider::new().spending();
        let months: Vec<_> = spending.iter().map(|p| p.month.as_str()).collect();
        let amounts: Vec<_> = spending.iter().map(|p| p.amount).collect();

        assert_eq!(months, ["January", "February", "March", "April", "May"]);
        assert_eq!(
            amounts,
            [400, 300, 450, 200, 350].map(Decimal::from).to_vec()
        );
    }

    #[test]
    fn test_snapshot_matches_individual_accessors() {
        let provider = MockDataProvider::new();
        let snapshot = provider.snapshot();

        assert_eq!(snapshot.user, provider.default_user());
        assert_eq!(snapshot.wallet, provider.wallet());
        assert_eq!(snapshot.transactions, provider.transactions());
        assert_eq!(snapshot.bills, provider.bills());
        assert_eq!(snapshot.subscriptions, provider.subscriptions());
        assert_eq!(snapshot.medications, provider.medications());
        assert_eq!(snapshot.debts, provider.debts());
        assert_eq!(snapshot.savings_goals, provider.savings_goals());
        assert_eq!(snapshot.spending, provider.spending());
    }

    #[test]
    fn test_fixtures_are_shared() {
        let a = MockDataProvider::new().fixtures();
        let b = MockDataProvider::new().fixtures();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_fixture_dates_are_valid() {
        let snapshot = MockDataProvider::new().snapshot();
        let epoch = NaiveDate::default();

        assert!(snapshot.transactions.iter().all(|t| t.date() != epoch));
        assert!(snapshot.bills.iter().all(|b| b.due_date != epoch));
        assert!(snapshot.subscriptions.iter().all(|s| s.renews_on != epoch));
        assert!(snapshot.medications.iter().all(|m| m.refill_on != epoch));
        assert!(snapshot.savings_goals.iter().all(|g| g.deadline != epoch));
    }

    #[test]
    fn test_transaction_ids_are_unique() {
        let transactions = MockDataProvider::new().transactions();
        let mut ids: Vec<_> = transactions.iter().map(|t| t.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), transactions.len());
    }

    #[test]
    fn test_wallet_masked_number() {
        assert_eq!(MockDataProvider::new().wallet().masked_number(), "•••• 4821");
    }
}
