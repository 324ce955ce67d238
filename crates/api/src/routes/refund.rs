//! Refund routes.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::routes::map_ledger_error;
use crate::{AppState, middleware::AuthUser};
use centavo_core::ledger::RefundEngine;
use centavo_shared::types::TransactionId;

/// Creates the refund routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/refund", post(create_refund))
}

/// Request body for a refund.
#[derive(Debug, Deserialize)]
pub struct RefundRequest {
    /// Id of the transaction to reverse.
    pub transaction_id: TransactionId,
}

/// POST /refund - Reverse a transaction the caller sent.
async fn create_refund(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<RefundRequest>,
) -> impl IntoResponse {
    let engine = RefundEngine::new(state.store.clone());

    match engine
        .refund(auth.account_id(), payload.transaction_id)
        .await
    {
        Ok(receipt) => {
            info!(
                requester = %auth.account_id(),
                transaction_id = %receipt.transaction_id,
                amount = %receipt.amount,
                "Refund accepted"
            );
            (StatusCode::OK, Json(json!({ "status": "refunded" }))).into_response()
        }
        Err(e) => map_ledger_error(&e),
    }
}
