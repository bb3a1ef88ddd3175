use tradeval_core::{TradeRecord, TradeViolation};

use super::{RuleContext, ValidationRule};

/// Currency pair must be one of the tradable pairs
pub struct CurrencyPairValid;

impl ValidationRule for CurrencyPairValid {
    fn name(&self) -> &'static str {
        "currency-pair-valid"
    }

    fn check(&self, trade: &TradeRecord, ctx: &RuleContext<'_>) -> Vec<TradeViolation> {
        let supported = trade
            .currency_pair
            .as_ref()
            .is_some_and(|pair| ctx.reference.is_supported_currency_pair(pair));

        if supported {
            return Vec::new();
        }

        vec![TradeViolation::InvalidCurrencyPair {
            pair: trade.currency_pair.as_ref().map(ToString::to_string),
        }]
    }
}
