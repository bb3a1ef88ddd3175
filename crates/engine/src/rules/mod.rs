//! Business rules applied to a trade
//!
//! Each rule is a pure function of the trade and the two read-only
//! providers. Rules never see each other's output; the rule set decides the
//! order their violations are reported in.

mod counterparty;
mod currency_pair;
mod instrument_type;
mod option;
mod value_date;

pub use counterparty::CounterpartySupported;
pub use currency_pair::CurrencyPairValid;
pub use instrument_type::InstrumentTypeRequired;
pub use option::{
    ExerciseStartWithinTerm, ExpiryBeforeDelivery, OptionStyleValid, PremiumBeforeDelivery,
};
pub use value_date::{ValueDateAfterTradeDate, ValueDateNotHoliday};

use serde::Serialize;
use tradeval_core::{OptionStyle, TradeRecord, TradeViolation};
use tradeval_ports::{CalendarProvider, ReferenceDataProvider};

/// Read-only collaborators handed to every rule
#[derive(Clone, Copy)]
pub struct RuleContext<'a> {
    pub calendar: &'a dyn CalendarProvider,
    pub reference: &'a dyn ReferenceDataProvider,
}

impl<'a> RuleContext<'a> {
    pub fn new(
        calendar: &'a dyn CalendarProvider,
        reference: &'a dyn ReferenceDataProvider,
    ) -> Self {
        Self {
            calendar,
            reference,
        }
    }
}

/// Which trades a rule runs for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleScope {
    AllInstruments,
    Options,
    AmericanOptions,
}

impl RuleScope {
    pub fn applies_to(&self, trade: &TradeRecord) -> bool {
        match self {
            RuleScope::AllInstruments => true,
            RuleScope::Options => trade.is_option(),
            RuleScope::AmericanOptions => {
                trade.is_option() && trade.option_style == Some(OptionStyle::American)
            }
        }
    }
}

/// A single business rule
pub trait ValidationRule: Send + Sync {
    /// Stable identifier used in logs and the rule catalogue
    fn name(&self) -> &'static str;

    fn scope(&self) -> RuleScope {
        RuleScope::AllInstruments
    }

    /// Violations this trade commits against the rule (empty if it passes)
    fn check(&self, trade: &TradeRecord, ctx: &RuleContext<'_>) -> Vec<TradeViolation>;
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::NaiveDate;
    use tradeval_calendar::HolidayCalendar;
    use tradeval_core::{OptionStyle, TradeDate, TradeRecord};
    use tradeval_reference::StaticReferenceData;

    pub fn date(y: i32, m: u32, d: u32) -> TradeDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub fn calendar() -> HolidayCalendar {
        HolidayCalendar::new("TEST").with_holiday(date(2016, 8, 17))
    }

    pub fn reference() -> StaticReferenceData {
        StaticReferenceData::with_defaults()
    }

    /// Spot trade that passes every rule (Thursday trade, Monday value date)
    pub fn valid_spot() -> TradeRecord {
        TradeRecord::spot("PLUTO1", "EURUSD", date(2016, 8, 11), date(2016, 8, 15))
    }

    /// European option that passes every rule
    pub fn valid_option() -> TradeRecord {
        TradeRecord::vanilla_option(
            "PLUTO2",
            "EURUSD",
            OptionStyle::European,
            date(2016, 8, 11),
            date(2016, 8, 15),
            date(2016, 8, 19),
            date(2016, 8, 12),
            date(2016, 8, 22),
        )
    }
}
