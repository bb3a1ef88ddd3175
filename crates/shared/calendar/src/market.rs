use std::collections::{HashMap, HashSet};

use log::trace;
use tradeval_core::{CurrencyPair, TradeDate};
use tradeval_ports::{CalendarProvider, is_weekend};

/// Holiday calendar keyed by currency
///
/// A value date is a non-business day for a pair when it is a weekend, a
/// global holiday, or a holiday in the market of either leg.
#[derive(Debug, Clone, Default)]
pub struct MarketCalendar {
    name: String,
    global: HashSet<TradeDate>,
    by_currency: HashMap<String, HashSet<TradeDate>>,
}

impl MarketCalendar {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_global_holidays(mut self, dates: impl IntoIterator<Item = TradeDate>) -> Self {
        self.global.extend(dates);
        self
    }

    pub fn with_currency_holiday(mut self, currency: &str, date: TradeDate) -> Self {
        self.by_currency
            .entry(currency.to_uppercase())
            .or_default()
            .insert(date);
        self
    }

    pub fn with_currency_holidays(
        mut self,
        currency: &str,
        dates: impl IntoIterator<Item = TradeDate>,
    ) -> Self {
        self.by_currency
            .entry(currency.to_uppercase())
            .or_default()
            .extend(dates);
        self
    }

    /// Whether `currency`'s market is closed on `date` (weekends excluded)
    pub fn is_currency_holiday(&self, currency: &str, date: TradeDate) -> bool {
        self.by_currency
            .get(&currency.to_uppercase())
            .is_some_and(|dates| dates.contains(&date))
    }

    pub fn currencies(&self) -> impl Iterator<Item = &str> {
        self.by_currency.keys().map(String::as_str)
    }
}

impl CalendarProvider for MarketCalendar {
    fn is_non_business_day(&self, date: TradeDate) -> bool {
        is_weekend(date) || self.global.contains(&date)
    }

    fn is_non_business_day_for_pair(&self, date: TradeDate, pair: &CurrencyPair) -> bool {
        if self.is_non_business_day(date) {
            return true;
        }

        match pair.legs() {
            Some((base, quote)) => {
                let closed =
                    self.is_currency_holiday(base, date) || self.is_currency_holiday(quote, date);
                if closed {
                    trace!("{} is a market holiday for {}", date, pair);
                }
                closed
            }
            None => false,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> TradeDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calendar() -> MarketCalendar {
        MarketCalendar::new("MARKETS")
            .with_global_holidays([date(2016, 12, 26)])
            .with_currency_holiday("usd", date(2016, 7, 4))
            .with_currency_holidays("JPY", [date(2016, 5, 3), date(2016, 5, 4)])
    }

    #[test]
    fn test_currency_holiday_applies_to_either_leg() {
        let calendar = calendar();
        let independence_day = date(2016, 7, 4);

        assert!(calendar.is_non_business_day_for_pair(independence_day, &"EURUSD".into()));
        assert!(calendar.is_non_business_day_for_pair(independence_day, &"USDJPY".into()));
        assert!(!calendar.is_non_business_day_for_pair(independence_day, &"EURGBP".into()));
    }

    #[test]
    fn test_global_and_weekend_still_apply() {
        let calendar = calendar();

        assert!(calendar.is_non_business_day_for_pair(date(2016, 12, 26), &"EURGBP".into()));
        assert!(calendar.is_non_business_day_for_pair(date(2016, 8, 13), &"EURGBP".into()));
        assert!(!calendar.is_non_business_day(date(2016, 7, 4)));
    }

    #[test]
    fn test_pair_without_legs_uses_global_only() {
        let calendar = calendar();
        assert!(!calendar.is_non_business_day_for_pair(date(2016, 7, 4), &"XYZ".into()));
    }

    #[test]
    fn test_currency_lookup_ignores_case() {
        let calendar = calendar();
        let independence_day = date(2016, 7, 4);

        assert!(calendar.is_currency_holiday("usd", independence_day));
        assert!(calendar.is_currency_holiday("USD", independence_day));
        assert!(calendar.is_currency_holiday("jpy", date(2016, 5, 3)));
        assert!(!calendar.is_currency_holiday("eur", independence_day));
    }

    #[test]
    fn test_currencies_listed() {
        let mut currencies: Vec<_> = calendar().currencies().map(String::from).collect();
        currencies.sort();
        assert_eq!(currencies, vec!["JPY", "USD"]);
    }
}
