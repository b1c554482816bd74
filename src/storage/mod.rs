pub mod json_backend;
pub mod transaction_store;

use crate::errors::StoreError;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Abstraction over string-keyed persistence backends. This is the opaque
/// on-device storage service the transaction store is built on.
pub trait KeyValueStore {
    /// Returns the raw value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

pub use json_backend::JsonFileStore;
pub use transaction_store::{TransactionStore, TRANSACTIONS_KEY};
