//! Currency display helpers.

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{iso, Money};

/// Direction of a signed amount, as it should be coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountTone {
    Credit,
    Debit,
}

impl AmountTone {
    /// Only strictly positive amounts are credits.
    pub fn of(amount: Decimal) -> Self {
        if amount > Decimal::ZERO {
            AmountTone::Credit
        } else {
            AmountTone::Debit
        }
    }

    pub fn sign(&self) -> char {
        match self {
            AmountTone::Credit => '+',
            AmountTone::Debit => '-',
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            AmountTone::Credit => "text-green-600",
            AmountTone::Debit => "text-red-600",
        }
    }
}

/// `$1,234.50` style display of the magnitude of `amount`.
pub fn format_currency(amount: Decimal) -> String {
    let mut value = amount
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    value.rescale(2);
    Money::from_decimal(value, iso::USD).to_string()
}

/// Signed display used for transactions: `+$100.00`, `-$42.50`.
pub fn format_signed(amount: Decimal) -> String {
    format!("{}{}", AmountTone::of(amount).sign(), format_currency(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_amount() {
        let amount = Decimal::new(-4250, 2);
        assert_eq!(format_signed(amount), "-$42.50");
        assert_eq!(AmountTone::of(amount), AmountTone::Debit);
        assert_eq!(AmountTone::of(amount).text_class(), "text-red-600");
    }

    #[test]
    fn test_positive_whole_amount() {
        let amount = Decimal::from(100);
        assert_eq!(format_signed(amount), "+$100.00");
        assert_eq!(AmountTone::of(amount), AmountTone::Credit);
        assert_eq!(AmountTone::of(amount).text_class(), "text-green-600");
    }

    #[test]
    fn test_zero_is_debit() {
        assert_eq!(AmountTone::of(Decimal::ZERO), AmountTone::Debit);
        assert_eq!(format_signed(Decimal::ZERO), "-$0.00");
    }

    #[test]
    fn test_rounds_to_cents() {
        assert_eq!(format_currency(Decimal::new(12_345, 3)), "$12.35");
    }

    #[test]
    fn test_unsigned_display_drops_sign() {
        assert_eq!(format_currency(Decimal::new(-575, 2)), "$5.75");
    }
}
