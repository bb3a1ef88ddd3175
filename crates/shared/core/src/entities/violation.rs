use thiserror::Error;

use super::OptionStyle;
use crate::values::TradeDate;

/// A business rule a trade failed
///
/// The `Display` rendering is the message reported to the caller. Clients
/// match on substrings of these messages, so the wording is part of the
/// contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TradeViolation {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error(
        "Value date cannot be null and it has to be after trade date (trade date: {}, value date: {})",
        display_date(.trade_date),
        display_date(.value_date)
    )]
    ValueDateNotAfterTradeDate {
        trade_date: Option<TradeDate>,
        value_date: Option<TradeDate>,
    },

    #[error("Value date {value_date} cannot fall on Saturday/Sunday or a holiday")]
    ValueDateNotBusinessDay { value_date: TradeDate },

    #[error(
        "{} is not supported. Supported counterparties: [[{}]]",
        display_text(.counterparty),
        display_list(.supported)
    )]
    UnsupportedCounterparty {
        counterparty: Option<String>,
        supported: Vec<String>,
    },

    #[error("Invalid currency pair: {}", display_text(.pair))]
    InvalidCurrencyPair { pair: Option<String> },

    #[error(
        "Option style {} is not supported. Valid option styles are: [{}]",
        display_text(.style),
        supported_styles()
    )]
    InvalidOptionStyle { style: Option<String> },

    #[error(
        "{field} has to be before delivery date ({field_lower}: {}, delivery date: {})",
        display_date(.date),
        display_date(.delivery_date),
        field_lower = lowercase(.field)
    )]
    NotBeforeDeliveryDate {
        field: &'static str,
        date: Option<TradeDate>,
        delivery_date: Option<TradeDate>,
    },

    #[error(
        "Exercise start date {exercise_start_date} has to be after trade date and before expiry date (trade date: {}, expiry date: {})",
        display_date(.trade_date),
        display_date(.expiry_date)
    )]
    ExerciseStartDateOutOfRange {
        exercise_start_date: TradeDate,
        trade_date: Option<TradeDate>,
        expiry_date: Option<TradeDate>,
    },

    #[error("Malformed trade: {reason}")]
    Malformed { reason: String },

    #[error("Internal error while validating trade: {reason}")]
    InternalFault { reason: String },
}

const MISSING: &str = "<missing>";

fn display_date(date: &Option<TradeDate>) -> String {
    date.map(|d| d.to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

fn display_text(text: &Option<String>) -> &str {
    text.as_deref().unwrap_or(MISSING)
}

fn display_list(items: &[String]) -> String {
    items.join(", ")
}

fn lowercase(field: &str) -> String {
    field.to_lowercase()
}

fn supported_styles() -> String {
    OptionStyle::SUPPORTED
        .iter()
        .map(OptionStyle::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
