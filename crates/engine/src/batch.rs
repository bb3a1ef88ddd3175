use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use log::{info, warn};
use rayon::prelude::*;
use tradeval_core::{TradeRecord, TradeViolation, ValidationResult};

use crate::engine::ValidationEngine;

/// One element of a batch as received from a client
#[derive(Debug, Clone)]
pub enum BatchItem {
    /// A trade that decoded cleanly
    Trade(TradeRecord),
    /// An element that could not be read as a trade, with the reason
    Malformed(String),
}

impl From<TradeRecord> for BatchItem {
    fn from(trade: TradeRecord) -> Self {
        BatchItem::Trade(trade)
    }
}

/// Validates many trades independently
///
/// Trades are evaluated in parallel on the rayon pool; results come back in
/// input order. A trade whose evaluation faults becomes an ERROR result at its
/// own index and never affects its siblings.
#[derive(Clone)]
pub struct BatchCoordinator {
    engine: Arc<ValidationEngine>,
}

impl BatchCoordinator {
    pub fn new(engine: Arc<ValidationEngine>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &Arc<ValidationEngine> {
        &self.engine
    }

    /// Validate each trade; `result[i]` is the verdict for `trades[i]`
    pub fn validate_batch(&self, trades: &[TradeRecord]) -> Vec<ValidationResult> {
        let results: Vec<ValidationResult> = trades
            .par_iter()
            .map(|trade| validate_isolated(&self.engine, trade))
            .collect();

        log_summary(&results);
        results
    }

    /// Validate a batch in which some elements may already be known to be
    /// malformed
    pub fn validate_items(&self, items: &[BatchItem]) -> Vec<ValidationResult> {
        let results: Vec<ValidationResult> = items
            .par_iter()
            .map(|item| match item {
                BatchItem::Trade(trade) => validate_isolated(&self.engine, trade),
                BatchItem::Malformed(reason) => {
                    ValidationResult::rejected(TradeViolation::Malformed {
                        reason: reason.clone(),
                    })
                }
            })
            .collect();

        log_summary(&results);
        results
    }
}

/// Validate one trade, converting a fault inside a rule into an ERROR result
pub fn validate_isolated(engine: &ValidationEngine, trade: &TradeRecord) -> ValidationResult {
    match panic::catch_unwind(AssertUnwindSafe(|| engine.validate(trade))) {
        Ok(result) => result,
        Err(payload) => {
            let reason = panic_reason(payload.as_ref());
            warn!("Fault while validating trade: {}", reason);
            ValidationResult::rejected(TradeViolation::InternalFault { reason })
        }
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown fault".to_string()
    }
}

fn log_summary(results: &[ValidationResult]) {
    let rejected = results.iter().filter(|r| !r.is_success()).count();
    info!(
        "Validated batch of {} trades ({} rejected)",
        results.len(),
        rejected
    );
}
