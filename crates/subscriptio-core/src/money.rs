//! Money type for prices, cart totals and invoice amounts.
//!
//! The storefront's endpoints report amounts as decimal dollars (`12.5`
//! meaning twelve dollars fifty). They are converted to integer cents once at
//! the edge so totals never accumulate floating-point error.
//!
//! Arithmetic is checked: amounts come from the network, and a product of
//! price and quantity that does not fit is reported as `None` rather than
//! wrapping or panicking.

use std::fmt;

/// A USD amount in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    pub amount_cents: i64,
}

impl Money {
    pub const ZERO: Money = Money { amount_cents: 0 };

    pub fn from_cents(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Convert a decimal dollar amount, rounding to the nearest cent.
    ///
    /// Out-of-range values saturate; `NaN` becomes zero.
    ///
    /// ```
    /// use subscriptio_core::money::Money;
    /// assert_eq!(Money::usd(19.99).amount_cents, 1999);
    /// ```
    pub fn usd(amount: f64) -> Self {
        Self::from_cents((amount * 100.0).round() as i64)
    }

    /// Sum of two amounts, `None` on overflow.
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.amount_cents.checked_add(other.amount_cents).map(Self::from_cents)
    }

    /// Amount times a quantity, `None` on overflow.
    pub fn checked_mul(self, quantity: u32) -> Option<Money> {
        self.amount_cents
            .checked_mul(i64::from(quantity))
            .map(Self::from_cents)
    }

    /// Total of `amounts`, `None` if any step overflows. Empty input is zero.
    pub fn checked_sum(amounts: impl IntoIterator<Item = Money>) -> Option<Money> {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, |acc, m| acc.checked_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let cents = self.amount_cents.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, cents / 100, cents % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::usd(49.99).amount_cents, 4999);
        assert_eq!(Money::usd(12.5).amount_cents, 1250);
        assert_eq!(Money::usd(f64::NAN), Money::ZERO);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::usd(12.5).to_string(), "$12.50");
        assert_eq!(Money::usd(0.0).to_string(), "$0.00");
        assert_eq!(Money::from_cents(-505).to_string(), "-$5.05");
        assert_eq!(Money::from_cents(i64::MIN).to_string(), "-$92233720368547758.08");
    }

    #[test]
    fn test_money_sum_and_multiply() {
        let lines = [Money::usd(9.99).checked_mul(2).unwrap(), Money::usd(5.0)];
        let total = Money::checked_sum(lines).unwrap();
        assert_eq!(total.amount_cents, 2498);
        assert_eq!(total.to_string(), "$24.98");
    }

    #[test]
    fn test_money_sum_empty_is_zero() {
        assert_eq!(Money::checked_sum(std::iter::empty()), Some(Money::ZERO));
    }

    #[test]
    fn test_money_overflow_is_none() {
        let huge = Money::usd(1.0e10);
        assert_eq!(huge.checked_mul(4_000_000_000), None);
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
        assert_eq!(
            Money::checked_sum([Money::from_cents(i64::MAX), Money::from_cents(1)]),
            None
        );
    }
}
