//! Bearer-token guard for admin routes.
//!
//! [`AuthLayer`] wraps the admin router. Requests without a valid session
//! token are answered with a 401 before they reach a handler; accepted
//! requests carry an [`AuthenticatedUser`] in their extensions.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::response::{IntoResponse, Response};
use http::{HeaderMap, Request, StatusCode, header};
use tower::{Layer, Service};

use crate::{AuthConfig, AuthenticatedUser, TokenValidator};

/// Layer that puts [`AuthService`] in front of a service.
pub struct AuthLayer<V: TokenValidator> {
    validator: Arc<V>,
    config: AuthConfig,
}

// Manual impl: `V` itself need not be `Clone` behind the `Arc`.
impl<V: TokenValidator> Clone for AuthLayer<V> {
    fn clone(&self) -> Self {
        Self {
            validator: Arc::clone(&self.validator),
            config: self.config.clone(),
        }
    }
}

impl<V: TokenValidator> AuthLayer<V> {
    /// Guard with `validator`, checking tokens against `config`.
    pub fn new(validator: Arc<V>, config: AuthConfig) -> Self {
        Self { validator, config }
    }
}

impl<V: TokenValidator, S> Layer<S> for AuthLayer<V> {
    type Service = AuthService<V, S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthService {
            inner,
            validator: Arc::clone(&self.validator),
            config: self.config.clone(),
        }
    }
}

/// Service that admits only requests with a valid bearer token.
pub struct AuthService<V: TokenValidator, S> {
    inner: S,
    validator: Arc<V>,
    config: AuthConfig,
}

impl<V: TokenValidator, S: Clone> Clone for AuthService<V, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            validator: Arc::clone(&self.validator),
            config: self.config.clone(),
        }
    }
}

impl<V, S> Service<Request<Body>> for AuthService<V, S>
where
    V: TokenValidator,
    S: Service<Request<Body>, Error = Infallible> + Clone + Send + 'static,
    S::Response: IntoResponse,
    S::Future: Send,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Response, Infallible>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        // The ready clone stays behind for the next call.
        let fresh = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, fresh);
        let validator = Arc::clone(&self.validator);
        let config = self.config.clone();

        Box::pin(async move {
            if config.enabled {
                let verdict = authorize(validator.as_ref(), &config, req.headers()).await;
                match verdict {
                    Ok(user) => {
                        log::debug!("admin request from '{}'", user.username);
                        req.extensions_mut().insert(user);
                    }
                    Err(rejection) => return Ok(rejection),
                }
            }

            let Ok(resp) = inner.call(req).await;
            Ok(resp.into_response())
        })
    }
}

/// Validate the request's bearer token, or build the 401 to send instead.
async fn authorize<V: TokenValidator>(
    validator: &V,
    config: &AuthConfig,
    headers: &HeaderMap,
) -> Result<AuthenticatedUser, Response> {
    let Some(token) = bearer_token(headers) else {
        log::debug!("admin request without a bearer token");
        return Err(unauthorized("Unauthorized"));
    };

    validator.validate(token, config).await.map_err(|e| {
        log::warn!("admin token rejected: {e}");
        unauthorized(&e.to_string())
    })
}

/// The token from an `Authorization: Bearer <token>` header, if any.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then_some(token)
}

/// `401` with `{ "error": message }` and a bearer challenge.
fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Bearer")],
        axum::Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}
