//! Trade Validation Engine
//!
//! Evaluates trades against an ordered rule set:
//! - **Rule Set**: independent validators declared in a fixed order
//! - **Validation Engine**: runs every applicable rule and accumulates violations
//! - **Batch Coordinator**: validates many trades in parallel, index-aligned,
//!   isolating faults per trade
//!
//! The engine is stateless; the calendar and reference data it consults are
//! passed in at construction and only ever read.

pub mod batch;
pub mod engine;
pub mod rule_set;
pub mod rules;

pub use batch::{BatchCoordinator, BatchItem, validate_isolated};
pub use engine::ValidationEngine;
pub use rule_set::{RuleDescriptor, RuleSet};
pub use rules::{RuleContext, RuleScope, ValidationRule};
