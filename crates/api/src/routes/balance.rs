//! Account balance routes.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde_json::json;
use tracing::error;

use crate::routes::map_ledger_error;
use crate::{AppState, middleware::AuthUser};
use centavo_core::ledger::LedgerError;

/// Creates the balance routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/balance", get(get_balance))
}

/// GET /balance - Current balance of the authenticated account.
async fn get_balance(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    match state.store.balance_of(auth.account_id()).await {
        Ok(balance) => (
            StatusCode::OK,
            Json(json!({
                "user_id": auth.account_id(),
                "balance": balance
            })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, account_id = %auth.account_id(), "Failed to read balance");
            map_ledger_error(&LedgerError::Store(e))
        }
    }
}
