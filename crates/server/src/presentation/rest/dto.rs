use serde::Serialize;
use serde_json::Value;
use tradeval_core::TradeRecord;
use tradeval_engine::BatchItem;

/// Decode one element of a request into a trade
///
/// Decoding failures are kept as `Malformed` so that they are reported in
/// the element's own result instead of failing the whole request.
pub fn decode_trade(value: Value) -> BatchItem {
    match serde_json::from_value::<TradeRecord>(value) {
        Ok(trade) => BatchItem::Trade(trade),
        Err(e) => BatchItem::Malformed(e.to_string()),
    }
}

/// Split a batch body into its elements
///
/// Accepts a bare array or `{"trades": [...]}`.
pub fn batch_elements(body: Value) -> Option<Vec<Value>> {
    match body {
        Value::Array(elements) => Some(elements),
        Value::Object(mut object) => match object.remove("trades") {
            Some(Value::Array(elements)) => Some(elements),
            _ => None,
        },
        _ => None,
    }
}

/// Health response (empty)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {}

/// Error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: i32,
    pub msg: String,
}

impl ErrorResponse {
    pub fn new(code: i32, msg: impl Into<String>) -> Self {
        ErrorResponse {
            code,
            msg: msg.into(),
        }
    }
}
