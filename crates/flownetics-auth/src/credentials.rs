//! Admin login credentials.

use crate::AuthError;

/// The single admin account: a username and the bcrypt hash of its password.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password_hash: String,
}

impl AdminCredentials {
    /// Create credentials from a username and a bcrypt hash
    /// (as produced by [`hash_password`]).
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    /// The admin username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Check a login attempt. A malformed stored hash counts as a mismatch.
    pub fn verify(&self, username: &str, password: &str) -> Result<(), AuthError> {
        if username != self.username {
            return Err(AuthError::InvalidCredentials);
        }
        match bcrypt::verify(password, &self.password_hash) {
            Ok(true) => Ok(()),
            Ok(false) => Err(AuthError::InvalidCredentials),
            Err(e) => {
                log::error!("Stored admin password hash is unusable: {e}");
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// Hash a password with bcrypt's default cost.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    hash_password_with_cost(password, bcrypt::DEFAULT_COST)
}

/// Hash a password with an explicit bcrypt cost (4..=31).
pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, AuthError> {
    bcrypt::hash(password, cost).map_err(|e| AuthError::Hash(e.to_string()))
}
