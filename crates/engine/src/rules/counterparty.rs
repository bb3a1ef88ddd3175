use tradeval_core::{TradeRecord, TradeViolation};

use super::{RuleContext, ValidationRule};

/// Counterparty must be onboarded
pub struct CounterpartySupported;

impl ValidationRule for CounterpartySupported {
    fn name(&self) -> &'static str {
        "counterparty-supported"
    }

    fn check(&self, trade: &TradeRecord, ctx: &RuleContext<'_>) -> Vec<TradeViolation> {
        let supported = trade
            .counterparty
            .as_deref()
            .is_some_and(|counterparty| ctx.reference.is_supported_counterparty(counterparty));

        if supported {
            return Vec::new();
        }

        vec![TradeViolation::UnsupportedCounterparty {
            counterparty: trade.counterparty.clone(),
            supported: ctx.reference.supported_counterparties(),
        }]
    }
}
