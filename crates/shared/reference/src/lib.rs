//! Trade Validation Reference Data
//!
//! Allow-lists loaded once at start-up and shared read-only by every
//! validation.

mod static_data;

pub use static_data::{DEFAULT_COUNTERPARTIES, DEFAULT_CURRENCY_PAIRS, StaticReferenceData};

// Re-export the port for convenience
pub use tradeval_ports::{PairMatching, ReferenceDataProvider};
