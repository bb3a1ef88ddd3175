//! Trade Validation Ports
//!
//! Port definitions (traits) for the trade validation service.
//! These define the boundaries between the rule set and the reference data
//! it consults.

mod calendar;
mod reference_data;

pub use calendar::{CalendarProvider, is_weekend};
pub use reference_data::{PairMatching, ReferenceDataProvider};
