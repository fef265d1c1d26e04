use tracing::{debug, warn};

use crate::domain::{
    validate_amount, Account, AccountId, AccountKey, Amount, Clock, Operation, OperationKind,
    UserId,
};
use crate::storage::AccountStore;

use super::AccountError;

/// Application service for a bank account ledger.
/// This is the primary interface for any client (CLI, API, TUI, etc.).
///
/// Every mutating call is one store lookup, a pure balance computation and
/// one store save. The service itself keeps no state besides the injected
/// store and clock.
pub struct AccountService<S, C> {
    store: S,
    clock: C,
}

impl<S: AccountStore, C: Clock> AccountService<S, C> {
    /// Create a new account service over the given store and clock.
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Pay `amount` into the account.
    pub fn deposit(
        &self,
        user_id: UserId,
        account_id: AccountId,
        amount: Amount,
    ) -> Result<(), AccountError> {
        self.record(user_id, account_id, amount, OperationKind::Deposit)
    }

    /// Take `amount` out of the account. There is no overdraft check; the
    /// resulting balance may be negative.
    pub fn withdrawal(
        &self,
        user_id: UserId,
        account_id: AccountId,
        amount: Amount,
    ) -> Result<(), AccountError> {
        self.record(user_id, account_id, amount, OperationKind::Withdrawal)
    }

    /// All operations recorded on the account, oldest first.
    pub fn account_history(
        &self,
        user_id: UserId,
        account_id: AccountId,
    ) -> Result<Vec<Operation>, AccountError> {
        let account = self.find_account(user_id, account_id)?;
        Ok(account.into_operations())
    }

    fn record(
        &self,
        user_id: UserId,
        account_id: AccountId,
        amount: Amount,
        kind: OperationKind,
    ) -> Result<(), AccountError> {
        let key = AccountKey::new(user_id, account_id);
        let amount = validate_amount(amount).inspect_err(|err| {
            warn!(account = %key, %kind, %err, "rejected operation");
        })?;

        let account = self.find_account(user_id, account_id)?;
        let operation =
            Operation::following(kind, self.clock.today(), amount, account.last_balance())
                .inspect_err(|err| {
                    warn!(account = %key, %kind, %err, "rejected operation");
                })?;
        let account = account.with_operation(operation);

        self.store.save(&account)?;

        debug!(
            account = %key,
            %kind,
            %amount,
            balance = %account.last_balance(),
            "recorded operation"
        );
        Ok(())
    }

    fn find_account(
        &self,
        user_id: UserId,
        account_id: AccountId,
    ) -> Result<Account, AccountError> {
        self.store
            .lookup(user_id, account_id)?
            .ok_or_else(|| {
                warn!(account = %AccountKey::new(user_id, account_id), "account not found");
                AccountError::AccountNotFound {
                    user_id,
                    account_id,
                }
            })
    }
}
