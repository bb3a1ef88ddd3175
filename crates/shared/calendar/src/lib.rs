//! Trade Validation Calendars
//!
//! Business-day lookups used by the value-date rules:
//!
//! ## Calendar Choice
//!
//! ```text
//! HolidayCalendar  (one global holiday set)
//!     weekend OR global holiday
//!
//! MarketCalendar   (global set + one set per currency)
//!     weekend OR global holiday OR holiday of either leg of the pair
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use tradeval_calendar::{HolidayCalendar, MarketCalendar, CalendarProvider};
//!
//! let global = HolidayCalendar::new("GLOBAL").with_holiday(christmas);
//! assert!(global.is_non_business_day(christmas));
//!
//! let markets = MarketCalendar::new("MARKETS").with_currency_holiday("USD", independence_day);
//! assert!(markets.is_non_business_day_for_pair(independence_day, &"EURUSD".into()));
//! ```

mod holiday;
mod market;

pub use holiday::HolidayCalendar;
pub use market::MarketCalendar;

// Re-export the CalendarProvider trait for convenience
pub use tradeval_ports::{CalendarProvider, is_weekend};
