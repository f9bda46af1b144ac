//! # Core Traits (Ports)
//!
//! Any plugin must implement these traits to be used by the binary.
//! All operations are synchronous: the app is single-threaded and every
//! mutation runs to completion before the next user action is processed.

use crate::error::Result;
use crate::models::User;

/// Persistence contract over a key/value store of opaque text.
///
/// Serialization format is the caller's business; the store never
/// inspects values. `load` must degrade to `None` on any failure
/// (missing key, unreadable backend, undecodable bytes) so a broken
/// store can never block startup.
pub trait KvStore: Send + Sync {
    /// Returns the stored text for `key`, or `None` if absent or
    /// unreadable. Never errors.
    fn load(&self, key: &str) -> Option<String>;

    /// Overwrites the full value for `key`.
    fn save(&self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Removes `key`. Removing an absent key is a success.
    fn remove(&self, key: &str) -> anyhow::Result<()>;
}

/// Identity contract behind the admin gate.
///
/// The shipped implementation checks a hardcoded literal pair — a
/// cosmetic gate, not a security boundary. The trait exists so a real
/// provider could be substituted without touching the view controller.
pub trait AuthProvider: Send + Sync {
    /// Verifies the credential pair and yields the session user.
    /// Failure is a generic `Unauthorized` that does not reveal which
    /// field was wrong.
    fn authenticate(&self, username: &str, password: &str) -> Result<User>;
}
