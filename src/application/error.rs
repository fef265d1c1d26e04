use thiserror::Error;

use crate::domain::{AccountId, BalanceOverflowError, InvalidAmountError, UserId};

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("amount must be positive")]
    InvalidAmount(#[from] InvalidAmountError),

    #[error("balance overflow: {0}")]
    BalanceOverflow(#[from] BalanceOverflowError),

    #[error("account not found")]
    AccountNotFound {
        user_id: UserId,
        account_id: AccountId,
    },

    #[error("store error: {0}")]
    Store(#[from] anyhow::Error),
}

/// Coarse classification of an [`AccountError`] for callers that only need
/// to branch on what went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidAmount,
    BalanceOverflow,
    AccountNotFound,
    Store,
}

impl ErrorKind {
    /// True for failures caused by the request itself rather than the store.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            ErrorKind::InvalidAmount | ErrorKind::BalanceOverflow | ErrorKind::AccountNotFound
        )
    }
}

impl AccountError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::InvalidAmount(_) => ErrorKind::InvalidAmount,
            AccountError::BalanceOverflow(_) => ErrorKind::BalanceOverflow,
            AccountError::AccountNotFound { .. } => ErrorKind::AccountNotFound,
            AccountError::Store(_) => ErrorKind::Store,
        }
    }
}
