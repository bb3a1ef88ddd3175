use serde::Serialize;
use tradeval_core::TradeRecord;

use crate::rules::{
    CounterpartySupported, CurrencyPairValid, ExerciseStartWithinTerm, ExpiryBeforeDelivery,
    InstrumentTypeRequired, OptionStyleValid, PremiumBeforeDelivery, RuleScope, ValidationRule,
    ValueDateAfterTradeDate, ValueDateNotHoliday,
};

/// Catalogue entry for one rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleDescriptor {
    pub name: &'static str,
    pub scope: RuleScope,
}

/// Ordered collection of rules
///
/// Declaration order is reporting order: violations from an earlier rule
/// always precede those of a later one.
#[derive(Default)]
pub struct RuleSet {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The production rule set
    pub fn standard() -> Self {
        Self::new()
            .with_rule(ValueDateAfterTradeDate)
            .with_rule(ValueDateNotHoliday)
            .with_rule(CounterpartySupported)
            .with_rule(CurrencyPairValid)
            .with_rule(OptionStyleValid)
            .with_rule(ExpiryBeforeDelivery)
            .with_rule(PremiumBeforeDelivery)
            .with_rule(ExerciseStartWithinTerm)
            .with_rule(InstrumentTypeRequired)
    }

    /// Append a rule after the existing ones
    pub fn with_rule(mut self, rule: impl ValidationRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn ValidationRule> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    /// Rules whose scope covers this trade, in declaration order
    pub fn applicable<'a>(
        &'a self,
        trade: &'a TradeRecord,
    ) -> impl Iterator<Item = &'a dyn ValidationRule> {
        self.iter().filter(move |rule| rule.scope().applies_to(trade))
    }

    pub fn describe(&self) -> Vec<RuleDescriptor> {
        self.iter()
            .map(|rule| RuleDescriptor {
                name: rule.name(),
                scope: rule.scope(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|rule| rule.name()))
            .finish()
    }
}
