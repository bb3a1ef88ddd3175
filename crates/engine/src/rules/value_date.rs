use tradeval_core::{TradeRecord, TradeViolation};

use super::{RuleContext, ValidationRule};

/// Value date must be present and strictly after the trade date
pub struct ValueDateAfterTradeDate;

impl ValidationRule for ValueDateAfterTradeDate {
    fn name(&self) -> &'static str {
        "value-date-after-trade-date"
    }

    fn check(&self, trade: &TradeRecord, _ctx: &RuleContext<'_>) -> Vec<TradeViolation> {
        let after_trade_date = match (trade.trade_date, trade.value_date) {
            (Some(trade_date), Some(value_date)) => value_date > trade_date,
            _ => false,
        };

        if after_trade_date {
            return Vec::new();
        }

        vec![TradeViolation::ValueDateNotAfterTradeDate {
            trade_date: trade.trade_date,
            value_date: trade.value_date,
        }]
    }
}

/// Value date must be a business day (no weekend, no configured holiday)
///
/// A missing value date is left to [`ValueDateAfterTradeDate`].
pub struct ValueDateNotHoliday;

impl ValidationRule for ValueDateNotHoliday {
    fn name(&self) -> &'static str {
        "value-date-not-holiday"
    }

    fn check(&self, trade: &TradeRecord, ctx: &RuleContext<'_>) -> Vec<TradeViolation> {
        let Some(value_date) = trade.value_date else {
            return Vec::new();
        };

        let closed = match &trade.currency_pair {
            Some(pair) => ctx.calendar.is_non_business_day_for_pair(value_date, pair),
            None => ctx.calendar.is_non_business_day(value_date),
        };

        if closed {
            vec![TradeViolation::ValueDateNotBusinessDay { value_date }]
        } else {
            Vec::new()
        }
    }
}
