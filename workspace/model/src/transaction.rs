use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single posted account movement.
///
/// The sign of `amount` carries the direction: positive amounts are credits
/// (money in), zero and negative amounts are debits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    id: u32,
    description: String,
    date: NaiveDate,
    amount: Decimal,
}

impl Transaction {
    /// Creates a new Transaction.
    pub fn new(id: u32, description: impl Into<String>, date: NaiveDate, amount: Decimal) -> Self {
        Self {
            id,
            description: description.into(),
            date,
            amount,
        }
    }

    /// Gets the identifier of the transaction.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Gets the description shown to the user.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Gets the posting date of the transaction.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Gets the signed amount of the transaction.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Checks if the transaction moved money into the account.
    pub fn is_credit(&self) -> bool {
        self.amount > Decimal::ZERO
    }
}
