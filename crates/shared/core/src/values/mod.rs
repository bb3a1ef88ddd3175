use chrono::NaiveDate;
use rust_decimal::Decimal;

mod currency_pair;

pub use currency_pair::CurrencyPair;

/// Calendar date of a trade event (trade, value, expiry, ...)
pub type TradeDate = NaiveDate;

/// Commercial amount - uses Decimal for precision
pub type Amount = Decimal;
