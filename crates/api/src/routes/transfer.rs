//! Peer-to-peer transfer routes.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::routes::map_ledger_error;
use crate::{AppState, middleware::AuthUser};
use centavo_core::ledger::TransferEngine;
use centavo_shared::types::{AccountId, Cents};

/// Creates the transfer routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/transfer", post(create_transfer))
}

/// Request body for a transfer.
#[derive(Debug, Deserialize)]
pub struct TransferRequest {
    /// Destination account id.
    pub to_user: AccountId,
    /// Amount to move, in cents.
    pub amount: Cents,
}

/// POST /transfer - Move money from the authenticated account.
async fn create_transfer(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<TransferRequest>,
) -> impl IntoResponse {
    let engine = TransferEngine::new(state.store.clone(), state.compliance_hold);

    match engine
        .transfer(auth.account_id(), payload.to_user, payload.amount)
        .await
    {
        Ok(receipt) => {
            info!(
                sender = %auth.account_id(),
                recipient = %payload.to_user,
                amount = %payload.amount,
                transaction_id = ?receipt.transaction_id,
                "Transfer accepted"
            );
            (StatusCode::OK, Json(json!({ "status": "success" }))).into_response()
        }
        Err(e) => map_ledger_error(&e),
    }
}
