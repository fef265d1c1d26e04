use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Operation;

pub type UserId = Uuid;
pub type AccountId = Uuid;

/// The (user, account) pair that identifies an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountKey {
    pub user_id: UserId,
    pub account_id: AccountId,
}

impl AccountKey {
    pub fn new(user_id: UserId, account_id: AccountId) -> Self {
        Self {
            user_id,
            account_id,
        }
    }
}

impl std::fmt::Display for AccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.user_id, self.account_id)
    }
}

/// Snapshot of an account: its identity and the full, append-only history.
///
/// Snapshots are values. Recording a new operation consumes the snapshot and
/// returns the next one, so whatever a store handed out is never changed
/// behind its back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    user_id: UserId,
    account_id: AccountId,
    operations: Vec<Operation>,
}

impl Account {
    /// A freshly provisioned account with no history.
    pub fn new(user_id: UserId, account_id: AccountId) -> Self {
        Self::with_operations(user_id, account_id, Vec::new())
    }

    /// Rebuild an account from stored history. `operations` must already be
    /// in chronological order.
    pub fn with_operations(
        user_id: UserId,
        account_id: AccountId,
        operations: Vec<Operation>,
    ) -> Self {
        Self {
            user_id,
            account_id,
            operations,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn key(&self) -> AccountKey {
        AccountKey::new(self.user_id, self.account_id)
    }

    /// Balance after the most recent operation, zero for an empty history.
    pub fn last_balance(&self) -> Decimal {
        self.operations
            .last()
            .map(Operation::balance)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn into_operations(self) -> Vec<Operation> {
        self.operations
    }

    /// Next snapshot with `operation` appended at the end.
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }
}
