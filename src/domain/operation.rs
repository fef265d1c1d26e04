use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Money paid into the account
    Deposit,
    /// Money taken out of the account
    Withdrawal,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Deposit => "deposit",
            OperationKind::Withdrawal => "withdrawal",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "deposit" => Some(OperationKind::Deposit),
            "withdrawal" => Some(OperationKind::Withdrawal),
            _ => None,
        }
    }

    /// Balance after applying an operation of this kind with a positive `amount`.
    /// Withdrawals are allowed to take the balance below zero.
    pub fn apply(
        &self,
        last_balance: Decimal,
        amount: Decimal,
    ) -> Result<Decimal, BalanceOverflowError> {
        let balance = match self {
            OperationKind::Deposit => last_balance.checked_add(amount),
            OperationKind::Withdrawal => last_balance.checked_sub(amount),
        };
        balance.ok_or(BalanceOverflowError {
            kind: *self,
            last_balance,
            amount,
        })
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The new balance does not fit in a `Decimal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceOverflowError {
    pub kind: OperationKind,
    pub last_balance: Decimal,
    pub amount: Decimal,
}

impl std::fmt::Display for BalanceOverflowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} of {} would overflow balance {}",
            self.kind, self.amount, self.last_balance
        )
    }
}

impl std::error::Error for BalanceOverflowError {}

/// A single entry in an account's history.
///
/// `amount` is always the positive magnitude moved; the sign lives in `kind`.
/// `balance` is the account balance right after this entry was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    kind: OperationKind,
    date: NaiveDate,
    amount: Decimal,
    balance: Decimal,
}

impl Operation {
    pub fn new(kind: OperationKind, date: NaiveDate, amount: Decimal, balance: Decimal) -> Self {
        Self {
            kind,
            date,
            amount,
            balance,
        }
    }

    /// Build the entry that follows `last_balance`, computing the new balance.
    pub fn following(
        kind: OperationKind,
        date: NaiveDate,
        amount: Decimal,
        last_balance: Decimal,
    ) -> Result<Self, BalanceOverflowError> {
        let balance = kind.apply(last_balance, amount)?;
        Ok(Self::new(kind, date, amount, balance))
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }
}
