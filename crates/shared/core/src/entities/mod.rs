mod direction;
mod instrument_type;
mod option_style;
mod trade_record;
mod validation;
mod violation;

pub use direction::Direction;
pub use instrument_type::InstrumentType;
pub use option_style::OptionStyle;
pub use trade_record::TradeRecord;
pub use validation::{ValidationResult, ValidationStatus};
pub use violation::TradeViolation;
