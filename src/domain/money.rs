use std::fmt;

use rust_decimal::Decimal;

/// Amounts are arbitrary-precision decimals so balances never pick up
/// binary rounding error. Scale is whatever the caller supplied.
pub type Amount = Decimal;

/// Check that an amount can be deposited or withdrawn.
/// Zero and negative values are rejected.
pub fn validate_amount(amount: Amount) -> Result<Amount, InvalidAmountError> {
    if amount <= Decimal::ZERO {
        return Err(InvalidAmountError { amount });
    }
    Ok(amount)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidAmountError {
    pub amount: Amount,
}

impl fmt::Display for InvalidAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "amount must be positive (got {})", self.amount)
    }
}

impl std::error::Error for InvalidAmountError {}
