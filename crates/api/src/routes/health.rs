//! Service liveness endpoint.
//!
//! The probe never touches the store, so it keeps answering even when the
//! ledger routes are failing.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::AppState;

/// Liveness probe body.
#[derive(Debug, Clone, Copy, Serialize)]
struct Liveness {
    /// Fixed marker consumed by deploy tooling.
    status: &'static str,
    /// Version of the running binary.
    version: &'static str,
}

const LIVENESS: Liveness = Liveness {
    status: "healthy",
    version: env!("CARGO_PKG_VERSION"),
};

/// Reports the service as reachable.
async fn liveness() -> Json<Liveness> {
    Json(LIVENESS)
}

/// Routes served outside the authenticated API prefix.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(liveness))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_body_shape() {
        let body = serde_json::to_value(LIVENESS).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
