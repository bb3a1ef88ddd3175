use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tradeval_core::{TradeViolation, ValidationResult};
use tradeval_engine::{BatchItem, RuleDescriptor, validate_isolated};
use uuid::Uuid;

use crate::presentation::rest::{ApiError, dto::*};

use super::AppState;

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {})
}

/// GET /rules
pub async fn rules(State(state): State<Arc<AppState>>) -> Json<Vec<RuleDescriptor>> {
    Json(state.engine.rules().describe())
}

/// POST /validate
pub async fn validate(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ValidationResult>, ApiError> {
    let Json(body) = body?;

    let result = match decode_trade(body) {
        BatchItem::Trade(trade) => validate_isolated(&state.engine, &trade),
        BatchItem::Malformed(reason) => {
            warn!("Rejecting malformed trade: {}", reason);
            ValidationResult::rejected(TradeViolation::Malformed { reason })
        }
    };

    debug!(
        "Validated trade: {:?} {:?}",
        result.status(),
        result.messages()
    );
    Ok(Json(result))
}

/// POST /validateBatch
pub async fn validate_batch(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Vec<ValidationResult>>, ApiError> {
    let Json(body) = body?;
    let elements = batch_elements(body).ok_or_else(ApiError::invalid_batch)?;

    let request_id = Uuid::new_v4();
    let items: Vec<BatchItem> = elements.into_iter().map(decode_trade).collect();
    info!("Batch {}: validating {} trades", request_id, items.len());

    // Rule evaluation is CPU-bound; keep it off the async workers
    let coordinator = state.coordinator.clone();
    let results = tokio::task::spawn_blocking(move || coordinator.validate_items(&items))
        .await
        .map_err(|e| ApiError::internal(format!("Batch {} failed: {}", request_id, e)))?;

    Ok(Json(results))
}
