//! The admin identity attached to guarded requests.

use http::Extensions;

/// Name recorded for admin actions when the guard is disabled.
pub const ANONYMOUS_ADMIN: &str = "anonymous";

/// An admin whose session token was accepted.
///
/// The auth middleware inserts one into the request extensions; handlers
/// read it with axum's `Extension` extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The token's `sub` claim
    pub username: String,
    /// Token expiry, Unix seconds
    pub expires_at: i64,
}

/// The admin attached to a request, if the guard admitted one.
pub fn admin_from_extensions(extensions: &Extensions) -> Option<&AuthenticatedUser> {
    extensions.get::<AuthenticatedUser>()
}

/// Name to log for an admin action.
pub fn actor_name(user: Option<&AuthenticatedUser>) -> &str {
    user.map_or(ANONYMOUS_ADMIN, |u| u.username.as_str())
}
