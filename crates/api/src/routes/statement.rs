//! Account statement routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use serde_json::json;

use crate::routes::map_ledger_error;
use crate::{AppState, middleware::AuthUser};
use centavo_core::ledger::StatementReporter;
use centavo_shared::types::AccountId;

/// Creates the statement routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/statement", get(get_statement))
}

/// Query parameters for a statement.
#[derive(Debug, Deserialize)]
pub struct StatementQuery {
    /// Account whose outbound transactions to list.
    pub account_id: Option<AccountId>,
}

/// GET /statement - Outbound transactions of the selected account.
///
/// The account is chosen by the `account_id` query parameter, not by the
/// caller's identity.
async fn get_statement(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<StatementQuery>,
) -> impl IntoResponse {
    let Some(account_id) = query.account_id else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "missing_account_id",
                "message": "account_id required"
            })),
        )
            .into_response();
    };

    let reporter = StatementReporter::new(state.store.clone());

    match reporter.statement(account_id).await {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(e) => map_ledger_error(&e),
    }
}
