pub mod application;
pub mod domain;
pub mod storage;

pub use application::{AccountError, AccountService, ErrorKind};
pub use domain::*;
pub use storage::AccountStore;
