//! # nb-auth-fixed
//!
//! Fixed-credential implementation of `AuthProvider`.
//!
//! This is the placeholder gate the product ships with: one literal
//! username/password pair, no hashing, no expiry, no rate limiting. It is
//! a cosmetic boundary for a single-admin internal board, not a security
//! mechanism. Anything stronger should arrive as a different plugin
//! behind the same trait.

use nb_core::error::{AppError, Result};
use nb_core::models::User;
use nb_core::traits::AuthProvider;

const LOGIN_FAILED: &str = "账号或密码错误";

pub struct FixedAuthProvider {
    username: String,
    password: String,
    /// Display name of the resulting session user (not the login name).
    display_name: String,
}

impl FixedAuthProvider {
    pub fn new(username: &str, password: &str, display_name: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            display_name: display_name.to_string(),
        }
    }

    /// The shipped account: admin / admin123, displayed as "系统管理员".
    pub fn builtin() -> Self {
        Self::new("admin", "admin123", "系统管理员")
    }
}

impl AuthProvider for FixedAuthProvider {
    fn authenticate(&self, username: &str, password: &str) -> Result<User> {
        if username == self.username && password == self.password {
            Ok(User {
                username: self.display_name.clone(),
                is_admin: true,
            })
        } else {
            // One generic message for both wrong-user and wrong-password.
            Err(AppError::Unauthorized(LOGIN_FAILED.to_string()))
        }
    }
}
