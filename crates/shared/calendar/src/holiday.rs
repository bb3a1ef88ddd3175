use std::collections::HashSet;

use tradeval_core::TradeDate;
use tradeval_ports::{CalendarProvider, is_weekend};

/// Single global holiday calendar
///
/// Weekends are always non-business days; any other date is a business day
/// unless it appears in the holiday set.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    name: String,
    holidays: HashSet<TradeDate>,
}

impl HolidayCalendar {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: HashSet::new(),
        }
    }

    /// Calendar with no holidays (weekends still count)
    pub fn weekends_only() -> Self {
        Self::new("WEEKENDS")
    }

    pub fn with_holiday(mut self, date: TradeDate) -> Self {
        self.holidays.insert(date);
        self
    }

    pub fn with_holidays(mut self, dates: impl IntoIterator<Item = TradeDate>) -> Self {
        self.holidays.extend(dates);
        self
    }

    pub fn is_holiday(&self, date: TradeDate) -> bool {
        self.holidays.contains(&date)
    }

    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }
}

impl CalendarProvider for HolidayCalendar {
    fn is_non_business_day(&self, date: TradeDate) -> bool {
        is_weekend(date) || self.is_holiday(date)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
