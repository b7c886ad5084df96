//! Amount and Balance types
//!
//! Domain primitives for money with validation at construction time,
//! ensuring invalid values cannot exist in the system.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Smallest accepted transaction amount (one cent)
const MIN_AMOUNT: &str = "0.01";

/// Maximum allowed balance, keeps Decimal arithmetic far from overflow
const MAX_AMOUNT: &str = "1000000000000";

/// Amount represents a validated transaction value.
///
/// # Invariants
/// - Value is at least 0.01
/// - Value never exceeds the maximum balance bound
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use teller::Amount;
///
/// let amount = Amount::new(Decimal::new(100, 0)).unwrap();
/// assert_eq!(amount.value(), Decimal::new(100, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount(Decimal);

/// Errors that can occur when creating an Amount or Balance
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("Amount must be at least {MIN_AMOUNT} (got {0})")]
    BelowMinimum(Decimal),

    #[error("Balance cannot be negative (got {0})")]
    Negative(Decimal),

    #[error("Value exceeds maximum allowed ({MAX_AMOUNT})")]
    Overflow,

    #[error("Invalid amount format: {0}")]
    ParseError(String),
}

impl Amount {
    /// Create a new Amount with validation.
    ///
    /// # Errors
    /// - `AmountError::BelowMinimum` if value < 0.01
    /// - `AmountError::Overflow` if value exceeds the maximum
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        let min = Decimal::from_str(MIN_AMOUNT).expect("Invalid MIN_AMOUNT constant");
        if value < min {
            return Err(AmountError::BelowMinimum(value));
        }

        let max = Decimal::from_str(MAX_AMOUNT).expect("Invalid MAX_AMOUNT constant");
        if value > max {
            return Err(AmountError::Overflow);
        }

        Ok(Self(value))
    }

    /// Get the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s).map_err(|e| AmountError::ParseError(e.to_string()))?;
        Amount::new(decimal)
    }
}

impl TryFrom<String> for Amount {
    type Error = AmountError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Amount::from_str(&value)
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        format!("{:.2}", amount.0)
    }
}

/// Balance represents an account balance. Unlike Amount, Balance can be zero,
/// and it is never negative: debits are validated before they happen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance(Decimal);

impl Balance {
    /// Create a new balance (zero or positive)
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value < Decimal::ZERO {
            return Err(AmountError::Negative(value));
        }

        let max = Decimal::from_str(MAX_AMOUNT).expect("Invalid MAX_AMOUNT constant");
        if value > max {
            return Err(AmountError::Overflow);
        }

        Ok(Self(value))
    }

    /// Create a zero balance
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying value
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Check if balance covers a withdrawal of `amount`
    pub fn is_sufficient_for(&self, amount: &Amount) -> bool {
        self.0 >= amount.value()
    }

    /// Add a transaction amount to the balance
    pub fn credit(&self, amount: &Amount) -> Result<Balance, AmountError> {
        Balance::new(self.0 + amount.value())
    }

    /// Subtract a transaction amount from the balance
    pub fn debit(&self, amount: &Amount) -> Result<Balance, AmountError> {
        Balance::new(self.0 - amount.value())
    }

    /// Add accrued interest to the balance. Interest is not a transaction
    /// amount and may be below the 0.01 minimum (including zero).
    pub fn accrue(&self, interest: Decimal) -> Result<Balance, AmountError> {
        Balance::new(self.0 + interest)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Default for Balance {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_at_minimum() {
        let amount = Amount::new(dec!(0.01));
        assert!(amount.is_ok());
        assert_eq!(amount.unwrap().value(), dec!(0.01));
    }

    #[test]
    fn test_amount_below_minimum_rejected() {
        assert!(matches!(
            Amount::new(dec!(0.009)),
            Err(AmountError::BelowMinimum(_))
        ));
        assert!(matches!(
            Amount::new(Decimal::ZERO),
            Err(AmountError::BelowMinimum(_))
        ));
        assert!(matches!(
            Amount::new(dec!(-5)),
            Err(AmountError::BelowMinimum(_))
        ));
    }

    #[test]
    fn test_amount_overflow() {
        let amount = Amount::new(dec!(1000000000001));
        assert!(matches!(amount, Err(AmountError::Overflow)));
    }

    #[test]
    fn test_amount_max_value_ok() {
        let amount = Amount::new(dec!(1000000000000));
        assert!(amount.is_ok());
    }

    #[test]
    fn test_amount_from_str() {
        let amount: Result<Amount, _> = "123.456".parse();
        assert!(amount.is_ok());
        assert_eq!(amount.unwrap().value(), dec!(123.456));

        let bad: Result<Amount, _> = "12.3.4".parse();
        assert!(matches!(bad, Err(AmountError::ParseError(_))));
    }

    #[test]
    fn test_balance_negative_rejected() {
        assert!(matches!(
            Balance::new(dec!(-0.01)),
            Err(AmountError::Negative(_))
        ));
    }

    #[test]
    fn test_balance_credit_debit() {
        let balance = Balance::zero();
        let amount = Amount::new(dec!(100)).unwrap();

        let balance = balance.credit(&amount).unwrap();
        assert_eq!(balance.value(), dec!(100));

        let withdraw = Amount::new(dec!(30)).unwrap();
        let balance = balance.debit(&withdraw).unwrap();
        assert_eq!(balance.value(), dec!(70));
    }

    #[test]
    fn test_balance_debit_below_zero() {
        let balance = Balance::new(dec!(50)).unwrap();
        let amount = Amount::new(dec!(100)).unwrap();

        assert!(!balance.is_sufficient_for(&amount));
        assert!(matches!(
            balance.debit(&amount),
            Err(AmountError::Negative(_))
        ));
    }

    #[test]
    fn test_balance_accrue_tiny_interest() {
        let balance = Balance::new(dec!(1)).unwrap();
        // 0.5% of 1.00 is below the transaction minimum but fine as interest
        let balance = balance.accrue(dec!(0.005)).unwrap();
        assert_eq!(balance.value(), dec!(1.005));

        let balance = Balance::zero().accrue(Decimal::ZERO).unwrap();
        assert_eq!(balance.value(), Decimal::ZERO);
    }

    #[test]
    fn test_amount_serde_round_trip() {
        let amount = Amount::new(dec!(12.34)).unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"12.34\"");

        let back: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amount);

        let bad: Result<Amount, _> = serde_json::from_str("\"0.001\"");
        assert!(bad.is_err());
    }
}
