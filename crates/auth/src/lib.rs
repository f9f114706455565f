//! `selvedge-auth` — the login simulation.
//!
//! A capability check, not authentication: the session is "logged in" when an
//! opaque token string is present in the storage slot. Nothing verifies the
//! token. The cart and catalog never consult this crate; presentation code
//! gates on it.

pub mod session;

pub use session::{Session, TOKEN_KEY};
