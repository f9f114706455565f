//! The key-value slot port.

use crate::error::StorageResult;

/// A named slot holding at most one string value per key.
///
/// This is the seam that makes session state testable: production code hands
/// a [`crate::JsonFileStore`] to the cart, tests hand a [`crate::MemoryStore`].
/// Implementations take `&self`; interior mutability is their concern.
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if the key has never been written.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete the value under `key`; absent keys are not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
}
