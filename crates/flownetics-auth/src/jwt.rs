//! Signed admin session tokens.

use std::future::Future;
use std::pin::Pin;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{ADMIN_AUDIENCE, AuthConfig, AuthError, AuthenticatedUser, TokenValidator};

/// Session lifetime when none is configured (8 hours).
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 8 * 60 * 60;

/// Claims carried by an admin session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Admin username
    pub sub: String,
    /// Audience
    pub aud: String,
    /// Issued-at, Unix seconds
    pub iat: i64,
    /// Expiry, Unix seconds
    pub exp: i64,
}

/// Issues and validates HS256 admin session tokens with a shared secret.
pub struct JwtAuthority {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl JwtAuthority {
    /// Create an authority signing with `secret`.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }

    /// Override the token lifetime.
    pub fn with_ttl_secs(mut self, ttl_secs: i64) -> Self {
        self.ttl_secs = ttl_secs;
        self
    }

    /// Token lifetime in seconds.
    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Issue a token for `username`, valid from now.
    pub fn issue(&self, username: &str) -> Result<String, AuthError> {
        self.issue_at(username, Utc::now().timestamp())
    }

    /// Issue a token for `username` as if the current time were `now`.
    pub fn issue_at(&self, username: &str, now: i64) -> Result<String, AuthError> {
        let claims = Claims {
            sub: username.to_string(),
            aud: ADMIN_AUDIENCE.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::Issue(e.to_string()))
    }

    /// Decode and check a token against `audience`.
    pub fn verify(&self, token: &str, audience: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[audience]);
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);
        validation.leeway = 0;
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        Ok(data.claims)
    }
}

impl TokenValidator for JwtAuthority {
    fn validate(
        &self,
        token: &str,
        config: &AuthConfig,
    ) -> Pin<Box<dyn Future<Output = Result<AuthenticatedUser, AuthError>> + Send + '_>> {
        let result = self.verify(token, &config.audience).map(|claims| AuthenticatedUser {
            username: claims.sub,
            expires_at: claims.exp,
        });
        Box::pin(async move { result })
    }
}
