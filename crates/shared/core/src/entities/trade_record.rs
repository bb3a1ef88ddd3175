use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use super::{Direction, InstrumentType, OptionStyle};
use crate::values::{Amount, CurrencyPair, TradeDate};

/// A single trade submitted for validation
///
/// Every field a rule reasons about is optional: a missing field is reported
/// as a violation by the rule set instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    /// Counterparty code
    #[serde(rename = "customer", alias = "counterparty")]
    pub counterparty: Option<String>,
    #[serde(rename = "ccyPair", alias = "currencyPair")]
    pub currency_pair: Option<CurrencyPair>,
    #[serde(rename = "type", alias = "instrumentType")]
    pub instrument_type: Option<InstrumentType>,
    #[serde(rename = "style", alias = "optionStyle")]
    pub option_style: Option<OptionStyle>,
    #[serde(default, deserialize_with = "lenient")]
    pub direction: Option<Direction>,

    pub trade_date: Option<TradeDate>,
    pub value_date: Option<TradeDate>,

    // Option dates
    pub expiry_date: Option<TradeDate>,
    pub premium_date: Option<TradeDate>,
    pub delivery_date: Option<TradeDate>,
    #[serde(rename = "excerciseStartDate", alias = "exerciseStartDate")]
    pub exercise_start_date: Option<TradeDate>,

    // Commercial fields, carried but not validated. An unreadable value is
    // dropped instead of rejecting the trade.
    #[serde(default, deserialize_with = "lenient")]
    pub amount1: Option<Amount>,
    #[serde(default, deserialize_with = "lenient")]
    pub amount2: Option<Amount>,
    #[serde(default, deserialize_with = "lenient")]
    pub rate: Option<Amount>,
    #[serde(default, deserialize_with = "lenient")]
    pub premium: Option<Amount>,
    #[serde(default, deserialize_with = "lenient")]
    pub pay_ccy: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub premium_ccy: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub premium_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub strategy: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub legal_entity: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub trader: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Unreadable(IgnoredAny),
}

/// Read an optional field no rule depends on, mapping unreadable values to `None`
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<Lenient<T>>::deserialize(deserializer)? {
        Some(Lenient::Value(value)) => Ok(Some(value)),
        Some(Lenient::Unreadable(_)) | None => Ok(None),
    }
}

impl TradeRecord {
    /// Create a spot trade with the fields the rule set looks at
    pub fn spot(
        counterparty: impl Into<String>,
        currency_pair: impl Into<CurrencyPair>,
        trade_date: TradeDate,
        value_date: TradeDate,
    ) -> Self {
        Self {
            counterparty: Some(counterparty.into()),
            currency_pair: Some(currency_pair.into()),
            instrument_type: Some(InstrumentType::Spot),
            direction: Some(Direction::Buy),
            trade_date: Some(trade_date),
            value_date: Some(value_date),
            ..Default::default()
        }
    }

    /// Create a forward trade
    pub fn forward(
        counterparty: impl Into<String>,
        currency_pair: impl Into<CurrencyPair>,
        trade_date: TradeDate,
        value_date: TradeDate,
    ) -> Self {
        Self {
            instrument_type: Some(InstrumentType::Forward),
            ..Self::spot(counterparty, currency_pair, trade_date, value_date)
        }
    }

    /// Create a vanilla option trade
    #[allow(clippy::too_many_arguments)]
    pub fn vanilla_option(
        counterparty: impl Into<String>,
        currency_pair: impl Into<CurrencyPair>,
        style: OptionStyle,
        trade_date: TradeDate,
        value_date: TradeDate,
        expiry_date: TradeDate,
        premium_date: TradeDate,
        delivery_date: TradeDate,
    ) -> Self {
        Self {
            instrument_type: Some(InstrumentType::Option),
            option_style: Some(style),
            expiry_date: Some(expiry_date),
            premium_date: Some(premium_date),
            delivery_date: Some(delivery_date),
            ..Self::spot(counterparty, currency_pair, trade_date, value_date)
        }
    }

    pub fn with_counterparty(mut self, counterparty: impl Into<String>) -> Self {
        self.counterparty = Some(counterparty.into());
        self
    }

    pub fn with_currency_pair(mut self, pair: impl Into<CurrencyPair>) -> Self {
        self.currency_pair = Some(pair.into());
        self
    }

    pub fn with_instrument_type(mut self, instrument_type: Option<InstrumentType>) -> Self {
        self.instrument_type = instrument_type;
        self
    }

    pub fn with_option_style(mut self, style: Option<OptionStyle>) -> Self {
        self.option_style = style;
        self
    }

    pub fn with_trade_date(mut self, date: Option<TradeDate>) -> Self {
        self.trade_date = date;
        self
    }

    pub fn with_value_date(mut self, date: Option<TradeDate>) -> Self {
        self.value_date = date;
        self
    }

    pub fn with_expiry_date(mut self, date: Option<TradeDate>) -> Self {
        self.expiry_date = date;
        self
    }

    pub fn with_premium_date(mut self, date: Option<TradeDate>) -> Self {
        self.premium_date = date;
        self
    }

    pub fn with_delivery_date(mut self, date: Option<TradeDate>) -> Self {
        self.delivery_date = date;
        self
    }

    pub fn with_exercise_start_date(mut self, date: Option<TradeDate>) -> Self {
        self.exercise_start_date = date;
        self
    }

    pub fn with_amounts(mut self, amount1: Amount, amount2: Amount, rate: Amount) -> Self {
        self.amount1 = Some(amount1);
        self.amount2 = Some(amount2);
        self.rate = Some(rate);
        self
    }

    pub fn is_option(&self) -> bool {
        self.instrument_type
            .as_ref()
            .is_some_and(InstrumentType::is_option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> TradeDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_deserialize_spot_payload() {
        let json = r#"{
            "customer": "PLUTO1",
            "ccyPair": "EURUSD",
            "type": "Spot",
            "direction": "BUY",
            "tradeDate": "2016-08-11",
            "amount1": 1000000.00,
            "amount2": 1120000.00,
            "rate": 1.12,
            "valueDate": "2016-08-15",
            "legalEntity": "CS Zurich",
            "trader": "Johann Baumfiddler"
        }"#;

        let trade: TradeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(trade.counterparty.as_deref(), Some("PLUTO1"));
        assert_eq!(trade.currency_pair, Some(CurrencyPair::new("EURUSD")));
        assert_eq!(trade.instrument_type, Some(InstrumentType::Spot));
        assert_eq!(trade.direction, Some(Direction::Buy));
        assert_eq!(trade.trade_date, Some(date(2016, 8, 11)));
        assert_eq!(trade.value_date, Some(date(2016, 8, 15)));
        assert_eq!(trade.rate, Some(dec!(1.12)));
        assert!(!trade.is_option());
    }

    #[test]
    fn test_deserialize_option_payload() {
        let json = r#"{
            "customer": "PLUTO2",
            "ccyPair": "EURUSD",
            "type": "VanillaOption",
            "style": "EUROPEAN",
            "direction": "SELL",
            "strategy": "CALL",
            "tradeDate": "2016-08-11",
            "deliveryDate": "2016-08-22",
            "expiryDate": "2016-08-19",
            "payCcy": "USD",
            "premium": 0.20,
            "premiumCcy": "USD",
            "premiumType": "%USD",
            "premiumDate": "2016-08-12",
            "excerciseStartDate": "2016-08-12"
        }"#;

        let trade: TradeRecord = serde_json::from_str(json).unwrap();
        assert!(trade.is_option());
        assert_eq!(trade.option_style, Some(OptionStyle::European));
        assert_eq!(trade.expiry_date, Some(date(2016, 8, 19)));
        assert_eq!(trade.premium_date, Some(date(2016, 8, 12)));
        assert_eq!(trade.delivery_date, Some(date(2016, 8, 22)));
        assert_eq!(trade.exercise_start_date, Some(date(2016, 8, 12)));
        assert!(trade.value_date.is_none());
    }

    #[test]
    fn test_deserialize_accepts_long_field_names() {
        let json = r#"{
            "counterparty": "PLUTO1",
            "currencyPair": "EUR/USD",
            "instrumentType": "OPTION",
            "optionStyle": "bermudan"
        }"#;

        let trade: TradeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(trade.counterparty.as_deref(), Some("PLUTO1"));
        assert!(trade.is_option());
        assert_eq!(
            trade.option_style,
            Some(OptionStyle::Other("bermudan".to_string()))
        );
    }

    #[test]
    fn test_unreadable_commercial_fields_are_dropped() {
        let json = r#"{
            "customer": "PLUTO1",
            "ccyPair": "EURUSD",
            "type": "Spot",
            "direction": "HOLD",
            "tradeDate": "2016-08-11",
            "valueDate": "2016-08-10",
            "amount1": 1e30,
            "amount2": "lots",
            "rate": 1.12,
            "premium": null,
            "payCcy": 840,
            "trader": ["Johann", "Baumfiddler"]
        }"#;

        let trade: TradeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(trade.amount1, None);
        assert_eq!(trade.amount2, None);
        assert_eq!(trade.rate, Some(dec!(1.12)));
        assert_eq!(trade.premium, None);
        assert_eq!(trade.direction, None);
        assert_eq!(trade.pay_ccy, None);
        assert_eq!(trade.trader, None);

        // Rule-relevant fields are untouched
        assert_eq!(trade.counterparty.as_deref(), Some("PLUTO1"));
        assert_eq!(trade.trade_date, Some(date(2016, 8, 11)));
        assert_eq!(trade.value_date, Some(date(2016, 8, 10)));
    }

    #[test]
    fn test_unreadable_rule_field_still_fails() {
        let json = r#"{"customer": "PLUTO1", "tradeDate": "11/08/2016"}"#;
        assert!(serde_json::from_str::<TradeRecord>(json).is_err());
    }

    #[test]
    fn test_missing_fields_are_none() {
        let trade: TradeRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(trade, TradeRecord::default());
    }
}
