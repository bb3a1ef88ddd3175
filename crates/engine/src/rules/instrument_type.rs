use tradeval_core::{TradeRecord, TradeViolation};

use super::{RuleContext, ValidationRule};

/// A trade must say what kind of instrument it is
///
/// Without an instrument type the conditional rules cannot be selected, so the
/// trade is rejected as malformed rather than silently treated as a spot.
pub struct InstrumentTypeRequired;

impl ValidationRule for InstrumentTypeRequired {
    fn name(&self) -> &'static str {
        "instrument-type-required"
    }

    fn check(&self, trade: &TradeRecord, _ctx: &RuleContext<'_>) -> Vec<TradeViolation> {
        match trade.instrument_type {
            Some(_) => Vec::new(),
            None => vec![TradeViolation::MissingField {
                field: "Instrument type",
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::*;

    #[test]
    fn test_missing_instrument_type() {
        let (calendar, reference) = (calendar(), reference());
        let ctx = RuleContext::new(&calendar, &reference);

        assert!(InstrumentTypeRequired.check(&valid_spot(), &ctx).is_empty());

        let trade = valid_spot().with_instrument_type(None);
        assert_eq!(
            InstrumentTypeRequired.check(&trade, &ctx)[0].to_string(),
            "Instrument type is required"
        );
    }
}
