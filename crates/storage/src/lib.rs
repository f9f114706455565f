//! `selvedge-storage` — the key-value persistence slot behind the cart and
//! session state.
//!
//! The contract is deliberately small: one string value per named key. The
//! in-memory store is the test fake; the JSON file store is what a desktop
//! session actually persists to.

pub mod error;
pub mod file;
pub mod kv;
pub mod memory;

pub use error::{StorageError, StorageResult};
pub use file::JsonFileStore;
pub use kv::KeyValueStore;
pub use memory::MemoryStore;
