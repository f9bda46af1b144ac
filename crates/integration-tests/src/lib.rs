//! Shared fixtures for the cross-crate tests in `tests/`.

use std::sync::Arc;

use nb_app::BoardApp;
use nb_auth_fixed::FixedAuthProvider;
use nb_store_memory::MemoryStore;

/// A fresh app over an empty in-memory store: seed data, no session.
pub fn fresh_app() -> BoardApp {
    app_over(Arc::new(MemoryStore::new()))
}

/// An app assembled over a specific store, for restart-style tests.
pub fn app_over(store: Arc<MemoryStore>) -> BoardApp {
    BoardApp::new(store, Box::new(FixedAuthProvider::builtin()))
}

/// Drives the login form through the controller with the built-in pair.
pub fn login_as_admin(app: &mut BoardApp) {
    app.open_login();
    app.login_form_mut().username = "admin".to_string();
    app.login_form_mut().password = "admin123".to_string();
    app.submit_login().expect("builtin credentials must log in");
}
