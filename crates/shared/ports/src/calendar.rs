use chrono::{Datelike, Weekday};
use tradeval_core::{CurrencyPair, TradeDate};

/// Port for business-day lookups
///
/// Implementations hold read-only holiday data and must answer from many
/// threads at once without coordination.
pub trait CalendarProvider: Send + Sync {
    /// Whether `date` is a weekend day or a configured holiday
    fn is_non_business_day(&self, date: TradeDate) -> bool;

    /// Same question for a trade in a given currency pair
    ///
    /// Defaults to the global answer; market-aware calendars override it to
    /// also consult the holidays of each leg.
    fn is_non_business_day_for_pair(&self, date: TradeDate, _pair: &CurrencyPair) -> bool {
        self.is_non_business_day(date)
    }

    /// Get the calendar's name/identifier for debugging
    fn name(&self) -> &str {
        "Calendar"
    }
}

/// Saturday and Sunday are never business days
pub fn is_weekend(date: TradeDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
