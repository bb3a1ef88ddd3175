use tradeval_core::{TradeDate, TradeRecord, TradeViolation};

use super::{RuleContext, RuleScope, ValidationRule};

/// Option style must be AMERICAN or EUROPEAN
pub struct OptionStyleValid;

impl ValidationRule for OptionStyleValid {
    fn name(&self) -> &'static str {
        "option-style-valid"
    }

    fn scope(&self) -> RuleScope {
        RuleScope::Options
    }

    fn check(&self, trade: &TradeRecord, _ctx: &RuleContext<'_>) -> Vec<TradeViolation> {
        match &trade.option_style {
            Some(style) if style.is_supported() => Vec::new(),
            style => vec![TradeViolation::InvalidOptionStyle {
                style: style.as_ref().map(ToString::to_string),
            }],
        }
    }
}

/// Expiry date must fall strictly before the delivery date
pub struct ExpiryBeforeDelivery;

impl ValidationRule for ExpiryBeforeDelivery {
    fn name(&self) -> &'static str {
        "expiry-before-delivery"
    }

    fn scope(&self) -> RuleScope {
        RuleScope::Options
    }

    fn check(&self, trade: &TradeRecord, _ctx: &RuleContext<'_>) -> Vec<TradeViolation> {
        before_delivery("Expiry date", trade.expiry_date, trade.delivery_date)
    }
}

/// Premium date must fall strictly before the delivery date
pub struct PremiumBeforeDelivery;

impl ValidationRule for PremiumBeforeDelivery {
    fn name(&self) -> &'static str {
        "premium-before-delivery"
    }

    fn scope(&self) -> RuleScope {
        RuleScope::Options
    }

    fn check(&self, trade: &TradeRecord, _ctx: &RuleContext<'_>) -> Vec<TradeViolation> {
        before_delivery("Premium date", trade.premium_date, trade.delivery_date)
    }
}

fn before_delivery(
    field: &'static str,
    date: Option<TradeDate>,
    delivery_date: Option<TradeDate>,
) -> Vec<TradeViolation> {
    match (date, delivery_date) {
        (Some(date), Some(delivery)) if date < delivery => Vec::new(),
        _ => vec![TradeViolation::NotBeforeDeliveryDate {
            field,
            date,
            delivery_date,
        }],
    }
}

/// An American option's exercise window has to open after the trade date and
/// before expiry
///
/// Only checked when the trade carries an exercise start date.
pub struct ExerciseStartWithinTerm;

impl ValidationRule for ExerciseStartWithinTerm {
    fn name(&self) -> &'static str {
        "exercise-start-within-term"
    }

    fn scope(&self) -> RuleScope {
        RuleScope::AmericanOptions
    }

    fn check(&self, trade: &TradeRecord, _ctx: &RuleContext<'_>) -> Vec<TradeViolation> {
        let Some(exercise_start_date) = trade.exercise_start_date else {
            return Vec::new();
        };

        let too_early = trade
            .trade_date
            .is_some_and(|trade_date| exercise_start_date <= trade_date);
        let too_late = trade
            .expiry_date
            .is_some_and(|expiry| exercise_start_date >= expiry);

        if too_early || too_late {
            vec![TradeViolation::ExerciseStartDateOutOfRange {
                exercise_start_date,
                trade_date: trade.trade_date,
                expiry_date: trade.expiry_date,
            }]
        } else {
            Vec::new()
        }
    }
}
