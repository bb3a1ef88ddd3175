use std::sync::Arc;

use log::debug;
use tradeval_core::{TradeRecord, TradeViolation, ValidationResult};
use tradeval_ports::{CalendarProvider, ReferenceDataProvider};

use crate::rule_set::RuleSet;
use crate::rules::RuleContext;

/// Runs the rule set against one trade
///
/// Stateless apart from its read-only collaborators, so one engine can be
/// shared by every request and every batch worker.
pub struct ValidationEngine {
    rules: RuleSet,
    calendar: Arc<dyn CalendarProvider>,
    reference: Arc<dyn ReferenceDataProvider>,
}

impl ValidationEngine {
    pub fn new(
        rules: RuleSet,
        calendar: Arc<dyn CalendarProvider>,
        reference: Arc<dyn ReferenceDataProvider>,
    ) -> Self {
        Self {
            rules,
            calendar,
            reference,
        }
    }

    /// Engine with the standard rule set
    pub fn standard(
        calendar: Arc<dyn CalendarProvider>,
        reference: Arc<dyn ReferenceDataProvider>,
    ) -> Self {
        Self::new(RuleSet::standard(), calendar, reference)
    }

    /// Validate a trade, accumulating the violations of every applicable rule
    pub fn validate(&self, trade: &TradeRecord) -> ValidationResult {
        ValidationResult::from_violations(&self.violations(trade))
    }

    /// Violations in rule declaration order
    pub fn violations(&self, trade: &TradeRecord) -> Vec<TradeViolation> {
        let ctx = RuleContext::new(self.calendar.as_ref(), self.reference.as_ref());

        self.rules
            .applicable(trade)
            .flat_map(|rule| {
                let violations = rule.check(trade, &ctx);
                for violation in &violations {
                    debug!("Rule {} rejected trade: {}", rule.name(), violation);
                }
                violations
            })
            .collect()
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::*;
    use tradeval_core::{InstrumentType, OptionStyle, ValidationStatus};

    fn engine() -> ValidationEngine {
        ValidationEngine::standard(Arc::new(calendar()), Arc::new(reference()))
    }

    #[test]
    fn test_valid_trades_succeed() {
        let engine = engine();

        for trade in [valid_spot(), valid_option()] {
            let result = engine.validate(&trade);
            assert_eq!(result.status(), ValidationStatus::Success);
            assert!(result.messages().is_empty());
        }
    }

    #[test]
    fn test_violations_accumulate_in_rule_order() {
        let trade = valid_spot()
            .with_value_date(Some(date(2016, 8, 6))) // Saturday, before trade date
            .with_counterparty("PLUTO9")
            .with_currency_pair("EURXYZ");

        let result = engine().validate(&trade);
        let messages = result.messages();

        assert_eq!(messages.len(), 4);
        assert!(messages[0].contains("cannot be null and it has to be after trade date"));
        assert!(messages[1].contains("cannot fall on Saturday/Sunday"));
        assert!(messages[2].contains("PLUTO9 is not supported"));
        assert!(messages[3].contains("Invalid currency pair"));
    }

    #[test]
    fn test_option_violations_after_common_ones() {
        let trade = valid_option()
            .with_option_style(Some(OptionStyle::Other("ASIAN".to_string())))
            .with_expiry_date(Some(date(2016, 8, 23)))
            .with_premium_date(Some(date(2016, 8, 22)));

        let messages = engine().validate(&trade).messages().to_vec();

        assert_eq!(messages.len(), 3);
        assert!(messages[0].contains("Valid option styles are: [AMERICAN, EUROPEAN]"));
        assert!(messages[1].starts_with("Expiry date has to be before delivery date"));
        assert!(messages[2].starts_with("Premium date has to be before delivery date"));
    }

    #[test]
    fn test_spot_ignores_option_fields() {
        let mut trade = valid_spot();
        trade.option_style = Some(OptionStyle::Other("ASIAN".to_string()));
        trade.expiry_date = Some(date(2016, 9, 30));

        assert!(engine().validate(&trade).is_success());
    }

    #[test]
    fn test_non_option_types_skip_option_rules() {
        let engine = engine();
        let forward = TradeRecord::forward("PLUTO1", "EURUSD", date(2016, 8, 11), date(2016, 8, 22));
        let other = forward
            .clone()
            .with_instrument_type(Some(InstrumentType::Other("NDF".to_string())));

        for trade in [forward, other] {
            let trade = trade
                .with_option_style(Some(OptionStyle::Other("ASIAN".to_string())))
                .with_expiry_date(Some(date(2016, 9, 30)))
                .with_premium_date(Some(date(2016, 9, 30)))
                .with_delivery_date(Some(date(2016, 8, 12)));

            assert_eq!(engine.rules().applicable(&trade).count(), 5);
            assert!(engine.validate(&trade).is_success(), "{:?}", trade.instrument_type);

            // Rules for every instrument still fire
            let weekend = trade.clone().with_value_date(Some(date(2016, 8, 20)));
            assert_eq!(
                engine.validate(&weekend).messages(),
                ["Value date 2016-08-20 cannot fall on Saturday/Sunday or a holiday"]
            );

            let unknown = trade.with_counterparty("PLUTO9");
            assert!(engine.validate(&unknown).messages()[0].starts_with("PLUTO9 is not supported"));
        }
    }

    #[test]
    fn test_missing_instrument_type_is_reported() {
        let trade = valid_spot().with_instrument_type(None);
        let result = engine().validate(&trade);

        assert_eq!(result.messages(), ["Instrument type is required"]);
    }

    #[test]
    fn test_validation_does_not_mutate_trade() {
        let trade = valid_option().with_counterparty("NOBODY");
        let before = trade.clone();

        let _ = engine().validate(&trade);
        assert_eq!(trade, before);
    }
}
