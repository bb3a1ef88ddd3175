//! Trade Validation Core Domain
//!
//! Pure domain types for the trade validation service.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    Direction, InstrumentType, OptionStyle, TradeRecord, TradeViolation, ValidationResult,
    ValidationStatus,
};
pub use values::{Amount, CurrencyPair, TradeDate};
