use axum::Json;
use serde_json::{json, Value};

use crate::structuring::taxonomy::TAXONOMY_VERSION;

/// GET /health
/// Returns a simple status object with service and taxonomy versions.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-api",
        "taxonomy_version": TAXONOMY_VERSION
    }))
}
