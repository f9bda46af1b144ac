//! # Session Gate
//!
//! Holds at most one authenticated user and keeps the store in sync so a
//! session survives a restart. Credential checking is delegated to the
//! `AuthProvider` port; this gate only manages the session lifecycle.

use std::sync::Arc;

use nb_core::error::Result;
use nb_core::models::User;
use nb_core::seed::AUTH_KEY;
use nb_core::traits::{AuthProvider, KvStore};

pub struct SessionGate {
    store: Arc<dyn KvStore>,
    auth: Box<dyn AuthProvider>,
    user: Option<User>,
}

impl SessionGate {
    /// Restores a persisted session if one exists and decodes; malformed
    /// data is treated as absent (anonymous visitor).
    pub fn restore(store: Arc<dyn KvStore>, auth: Box<dyn AuthProvider>) -> Self {
        let user = store
            .load(AUTH_KEY)
            .and_then(|text| match serde_json::from_str::<User>(&text) {
                Ok(user) => Some(user),
                Err(e) => {
                    log::warn!("session entry malformed, treating as logged out: {e}");
                    None
                }
            });
        Self { store, auth, user }
    }

    pub fn current(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Runs the credential check and, on success, installs and persists
    /// the session. Failure leaves the gate unchanged.
    pub fn login(&mut self, username: &str, password: &str) -> Result<User> {
        let user = self.auth.authenticate(username, password)?;
        match serde_json::to_string(&user) {
            Ok(json) => {
                if let Err(e) = self.store.save(AUTH_KEY, &json) {
                    log::warn!("failed to persist session: {e}");
                }
            }
            Err(e) => log::warn!("failed to encode session: {e}"),
        }
        self.user = Some(user.clone());
        Ok(user)
    }

    /// Clears the in-memory user and the persisted entry.
    pub fn logout(&mut self) {
        self.user = None;
        if let Err(e) = self.store.remove(AUTH_KEY) {
            log::warn!("failed to clear persisted session: {e}");
        }
    }
}
