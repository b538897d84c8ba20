//! Fixture record shapes backing the dashboard cards.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Summary of the primary payment card shown in the wallet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletSummary {
    pub holder: String,
    pub card_brand: String,
    pub last_four: String,
    pub balance: Decimal,
    pub available_credit: Decimal,
}

impl WalletSummary {
    /// Card number as printed on the mesh overlay, e.g. `•••• 4821`.
    pub fn masked_number(&self) -> String {
        format!("•••• {}", self.last_four)
    }
}

/// A bill that has not been paid yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bill {
    pub id: u32,
    pub name: String,
    pub due_date: NaiveDate,
    pub amount: Decimal,
    pub autopay: bool,
}

/// A recurring monthly subscription.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subscription {
    pub id: u32,
    pub name: String,
    pub monthly_cost: Decimal,
    pub renews_on: NaiveDate,
}

/// A medication with its refill date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Medication {
    pub id: u32,
    pub name: String,
    pub dosage: String,
    pub schedule: String,
    pub refill_on: NaiveDate,
}

/// An outstanding debt.
///
/// `apr` is the annual percentage rate as a percentage, e.g. `19.99`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Debt {
    pub id: u32,
    pub lender: String,
    pub balance: Decimal,
    pub apr: Decimal,
    pub minimum_payment: Decimal,
}

/// A savings target and how much has been put aside so far.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavingsGoal {
    pub id: u32,
    pub name: String,
    pub saved: Decimal,
    pub target: Decimal,
    pub deadline: NaiveDate,
}

/// One point of the monthly spending series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpendingPoint {
    pub month: String,
    pub amount: Decimal,
}
