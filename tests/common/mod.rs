// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use bank_ledger::{Account, AccountId, AccountKey, AccountService, AccountStore, FixedClock, UserId};
use chrono::NaiveDate;
use uuid::Uuid;

/// In-memory store that remembers every save, so tests can assert on what
/// was (or was not) written.
#[derive(Default)]
pub struct RecordingStore {
    accounts: RefCell<HashMap<AccountKey, Account>>,
    saves: Cell<usize>,
    last_saved: RefCell<Option<Account>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provision an empty account and return its identifiers.
    pub fn open_account(&self) -> (UserId, AccountId) {
        let account = Account::new(Uuid::new_v4(), Uuid::new_v4());
        let ids = (account.user_id(), account.account_id());
        self.accounts.borrow_mut().insert(account.key(), account);
        ids
    }

    /// Put an account in place without counting it as a save.
    pub fn seed(&self, account: Account) {
        self.accounts.borrow_mut().insert(account.key(), account);
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    pub fn last_saved(&self) -> Option<Account> {
        self.last_saved.borrow().clone()
    }

    pub fn stored(&self, user_id: UserId, account_id: AccountId) -> Option<Account> {
        self.accounts
            .borrow()
            .get(&AccountKey::new(user_id, account_id))
            .cloned()
    }
}

impl AccountStore for RecordingStore {
    fn lookup(&self, user_id: UserId, account_id: AccountId) -> Result<Option<Account>> {
        Ok(self.stored(user_id, account_id))
    }

    fn save(&self, account: &Account) -> Result<()> {
        self.saves.set(self.saves.get() + 1);
        self.accounts
            .borrow_mut()
            .insert(account.key(), account.clone());
        *self.last_saved.borrow_mut() = Some(account.clone());
        Ok(())
    }
}

/// Store whose reads succeed but whose writes always fail.
pub struct ReadOnlyStore {
    pub inner: RecordingStore,
}

impl AccountStore for ReadOnlyStore {
    fn lookup(&self, user_id: UserId, account_id: AccountId) -> Result<Option<Account>> {
        self.inner.lookup(user_id, account_id)
    }

    fn save(&self, _account: &Account) -> Result<()> {
        bail!("store is read-only")
    }
}

/// Store that cannot be reached at all. Failures are annotated the way a
/// real backend would annotate its driver errors.
pub struct UnreachableStore;

impl UnreachableStore {
    fn connect(&self) -> std::io::Result<()> {
        Err(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ))
    }
}

impl AccountStore for UnreachableStore {
    fn lookup(&self, user_id: UserId, account_id: AccountId) -> Result<Option<Account>> {
        self.connect().with_context(|| {
            format!("Failed to fetch account {}", AccountKey::new(user_id, account_id))
        })?;
        Ok(None)
    }

    fn save(&self, account: &Account) -> Result<()> {
        self.connect()
            .with_context(|| format!("Failed to save account {}", account.key()))
    }
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()
}

/// Helper to build a service over a borrowed store with a fixed date.
pub fn test_service<S: AccountStore>(store: &S) -> AccountService<&S, FixedClock> {
    AccountService::new(store, FixedClock(today()))
}
