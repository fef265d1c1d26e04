use std::sync::Arc;

use anyhow::Result;

use crate::domain::{Account, AccountId, UserId};

/// Persistence contract the account service is written against.
///
/// Implementations own the storage layout; the only requirement is that an
/// account passed to [`save`](AccountStore::save) comes back from
/// [`lookup`](AccountStore::lookup) with the same identifiers and the same
/// operations in the same order.
///
/// The service performs one `lookup` followed by at most one `save` per call
/// and takes no locks. A store shared between concurrent callers must make
/// that read-modify-write safe per account itself (a per-key lock held
/// across the pair, or a version check on `save` that fails on conflict).
/// Without that, two concurrent deposits can overwrite each other.
pub trait AccountStore {
    /// Current state of the account, or `None` if the user has no such account.
    /// Must never create an account as a side effect.
    fn lookup(&self, user_id: UserId, account_id: AccountId) -> Result<Option<Account>>;

    /// Replace the stored state for `account.key()` with `account`.
    /// Either the whole snapshot is stored or nothing is.
    fn save(&self, account: &Account) -> Result<()>;
}

impl<S: AccountStore + ?Sized> AccountStore for &S {
    fn lookup(&self, user_id: UserId, account_id: AccountId) -> Result<Option<Account>> {
        (**self).lookup(user_id, account_id)
    }

    fn save(&self, account: &Account) -> Result<()> {
        (**self).save(account)
    }
}

impl<S: AccountStore + ?Sized> AccountStore for Box<S> {
    fn lookup(&self, user_id: UserId, account_id: AccountId) -> Result<Option<Account>> {
        (**self).lookup(user_id, account_id)
    }

    fn save(&self, account: &Account) -> Result<()> {
        (**self).save(account)
    }
}

impl<S: AccountStore + ?Sized> AccountStore for Arc<S> {
    fn lookup(&self, user_id: UserId, account_id: AccountId) -> Result<Option<Account>> {
        (**self).lookup(user_id, account_id)
    }

    fn save(&self, account: &Account) -> Result<()> {
        (**self).save(account)
    }
}
