//! API route definitions.

use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{AppState, middleware::auth::auth_middleware};
use centavo_core::ledger::LedgerError;

pub mod balance;
pub mod health;
pub mod refund;
pub mod statement;
pub mod transfer;

/// Creates the API router with protected routes that need state for middleware.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    // Ledger routes all sit behind the API key middleware
    Router::new()
        .merge(balance::routes())
        .merge(transfer::routes())
        .merge(refund::routes())
        .merge(statement::routes())
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Maps ledger errors to HTTP responses.
pub(crate) fn map_ledger_error(e: &LedgerError) -> Response {
    let status =
        StatusCode::from_u16(e.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({ "error": e.error_code(), "message": e.to_string() })),
    )
        .into_response()
}
