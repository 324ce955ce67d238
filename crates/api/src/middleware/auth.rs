//! API key authentication middleware for protected routes.

use axum::{
    Json,
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::warn;

use crate::AppState;
use centavo_core::auth::{AuthError, Authorizer};
use centavo_shared::types::AccountId;

/// Header carrying the caller's API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Authentication middleware that resolves API keys.
///
/// This middleware:
/// 1. Reads the `X-API-Key` header (a missing header counts as an empty key)
/// 2. Resolves the key to an account through the store-backed authorizer
/// 3. Stores the account id in request extensions for handlers to access
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let api_key = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default();

    let authorizer = Authorizer::new(state.store.clone());

    match authorizer.resolve(api_key).await {
        Ok(account_id) => {
            request.extensions_mut().insert(account_id);
            next.run(request).await
        }
        Err(e) => {
            warn!(error = %e, "Rejected request credential");
            auth_error_response(&e)
        }
    }
}

/// Maps authentication errors to HTTP responses.
fn auth_error_response(e: &AuthError) -> Response {
    let status =
        StatusCode::from_u16(e.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({ "error": e.error_code(), "message": e.to_string() })),
    )
        .into_response()
}

/// Extractor for the authenticated account.
///
/// Use this in handlers to get the caller's account id:
///
/// ```ignore
/// async fn handler(auth: AuthUser) -> impl IntoResponse {
///     let account_id = auth.account_id();
///     // ...
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub AccountId);

impl AuthUser {
    /// Returns the authenticated account id.
    #[must_use]
    pub const fn account_id(&self) -> AccountId {
        self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AccountId>()
            .copied()
            .map(AuthUser)
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({
                        "error": "unauthorized",
                        "message": "Authentication required"
                    })),
                )
            })
    }
}
