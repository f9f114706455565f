//! Token-presence session check.

use selvedge_storage::KeyValueStore;

/// Fixed slot key for the login token.
pub const TOKEN_KEY: &str = "token";

/// The current session's login state, backed by a storage slot.
#[derive(Debug)]
pub struct Session<S: KeyValueStore> {
    slot: S,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    /// Store the opaque token. Whatever string the login flow produced is
    /// taken at face value.
    pub fn log_in(&self, token: &str) {
        if let Err(err) = self.slot.put(TOKEN_KEY, token) {
            tracing::error!(%err, "failed to store login token");
        }
    }

    pub fn log_out(&self) {
        if let Err(err) = self.slot.remove(TOKEN_KEY) {
            tracing::error!(%err, "failed to clear login token");
        }
    }

    /// Token present means logged in. A failing slot degrades to logged-out.
    pub fn is_logged_in(&self) -> bool {
        match self.slot.get(TOKEN_KEY) {
            Ok(token) => token.is_some_and(|t| !t.is_empty()),
            Err(err) => {
                tracing::warn!(%err, "session slot unreadable; treating as logged out");
                false
            }
        }
    }
}
