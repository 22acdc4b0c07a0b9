//! Admin authentication for the Flownetics site backend.
//!
//! Provides:
//! - [`AdminCredentials`]: username plus bcrypt hash, checked at login
//! - [`JwtAuthority`]: issues and validates HS256 session tokens
//! - [`TokenValidator`]: trait the middleware validates bearer tokens through
//! - [`AuthLayer`] / [`AuthService`]: Tower middleware parameterised over `TokenValidator`
//! - [`AuthenticatedUser`]: identity injected into request extensions
//! - [`AuthError`]: auth-specific error types

mod credentials;
mod error;
mod jwt;
mod middleware;
mod user;

pub use credentials::{AdminCredentials, hash_password, hash_password_with_cost};
pub use error::AuthError;
pub use jwt::{Claims, DEFAULT_TOKEN_TTL_SECS, JwtAuthority};
pub use middleware::{AuthLayer, AuthService};
pub use user::{ANONYMOUS_ADMIN, AuthenticatedUser, actor_name, admin_from_extensions};

/// Audience claim stamped on admin session tokens.
pub const ADMIN_AUDIENCE: &str = "flownetics-admin";

/// Configuration for the auth middleware.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// Whether authentication is enabled. When false, all requests pass through.
    pub enabled: bool,
    /// Expected `aud` claim.
    pub audience: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            audience: ADMIN_AUDIENCE.to_string(),
        }
    }
}

/// Trait for validating tokens and extracting user identity.
///
/// The middleware calls `validate()` with the bearer token and returns
/// the authenticated user on success.
pub trait TokenValidator: Send + Sync + 'static {
    /// Validate a token and return the authenticated user.
    fn validate(
        &self,
        token: &str,
        config: &AuthConfig,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<AuthenticatedUser, AuthError>> + Send + '_>,
    >;
}
