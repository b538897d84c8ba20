//! Small derived figures shown on the cards.

use chrono::NaiveDate;
use model::{Bill, Debt, SavingsGoal, Subscription};
use rust_decimal::{Decimal, RoundingStrategy};

/// Longest payoff horizon we bother simulating, in months.
const MAX_PAYOFF_MONTHS: u32 = 600;

/// Share of `target` already covered by `saved`, in percent, clamped to 0..=100.
pub fn progress_percent(saved: Decimal, target: Decimal) -> Decimal {
    if target <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let percent = saved / target * Decimal::ONE_HUNDRED;
    percent
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

pub fn goal_progress(goal: &SavingsGoal) -> Decimal {
    progress_percent(goal.saved, goal.target)
}

/// Amount still missing to reach the goal, never negative.
pub fn goal_remaining(goal: &SavingsGoal) -> Decimal {
    (goal.target - goal.saved).max(Decimal::ZERO)
}

/// Months needed to repay `balance` with a fixed monthly `payment` when
/// interest at `apr` percent a year compounds monthly.
///
/// Returns `None` when the payment never outgrows the interest.
pub fn payoff_months(balance: Decimal, apr: Decimal, payment: Decimal) -> Option<u32> {
    if balance <= Decimal::ZERO {
        return Some(0);
    }
    if payment <= Decimal::ZERO {
        return None;
    }

    let monthly_rate = apr / Decimal::ONE_HUNDRED / Decimal::from(12);
    if payment <= balance * monthly_rate {
        return None;
    }

    let mut remaining = balance;
    let mut months = 0;
    while remaining > Decimal::ZERO {
        if months == MAX_PAYOFF_MONTHS {
            return None;
        }
        remaining += remaining * monthly_rate;
        remaining -= payment;
        months += 1;
    }
    Some(months)
}

pub fn debt_payoff_months(debt: &Debt) -> Option<u32> {
    payoff_months(debt.balance, debt.apr, debt.minimum_payment)
}

pub fn total_debt(debts: &[Debt]) -> Decimal {
    debts.iter().map(|d| d.balance).sum()
}

pub fn bills_total(bills: &[Bill]) -> Decimal {
    bills.iter().map(|b| b.amount).sum()
}

pub fn monthly_subscription_total(subscriptions: &[Subscription]) -> Decimal {
    subscriptions.iter().map(|s| s.monthly_cost).sum()
}

/// Human label for how far away `date` is from `today`.
pub fn due_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Due today".to_string(),
        1 => "Due tomorrow".to_string(),
        days if days > 1 => format!("Due in {} days", days),
        -1 => "Overdue by 1 day".to_string(),
        days => format!("Overdue by {} days", -days),
    }
}
