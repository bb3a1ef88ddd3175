use std::collections::HashSet;

use indexmap::IndexSet;
use log::warn;
use tradeval_core::CurrencyPair;
use tradeval_ports::{PairMatching, ReferenceDataProvider};

/// Counterparties onboarded out of the box, in reporting order
pub const DEFAULT_COUNTERPARTIES: [&str; 2] = ["PLUTO2", "PLUTO1"];

/// Currency pairs tradable out of the box
pub const DEFAULT_CURRENCY_PAIRS: [&str; 10] = [
    "EURUSD", "GBPUSD", "USDJPY", "USDCHF", "AUDUSD", "USDCAD", "NZDUSD", "EURGBP", "EURJPY",
    "EURCHF",
];

/// Fixed allow-lists of counterparties and currency pairs
///
/// Counterparties keep their configured order because rejection messages list
/// them. Pairs are stored in separator-free form so EUR/USD and EURUSD are the
/// same entry.
#[derive(Debug, Clone)]
pub struct StaticReferenceData {
    counterparties: IndexSet<String>,
    currency_pairs: HashSet<String>,
    pair_matching: PairMatching,
}

impl StaticReferenceData {
    pub fn new<C, P>(counterparties: C, currency_pairs: P, pair_matching: PairMatching) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<CurrencyPair>,
    {
        let counterparties = counterparties
            .into_iter()
            .map(|c| Into::<String>::into(c).trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();

        let currency_pairs = currency_pairs
            .into_iter()
            .map(Into::into)
            .filter_map(|pair: CurrencyPair| {
                let canonical = pair.canonical();
                if canonical.is_none() {
                    warn!("Ignoring malformed currency pair in reference data: {}", pair);
                }
                canonical
            })
            .collect();

        Self {
            counterparties,
            currency_pairs,
            pair_matching,
        }
    }

    /// Reference data with the default allow-lists
    pub fn with_defaults() -> Self {
        Self::new(
            DEFAULT_COUNTERPARTIES,
            DEFAULT_CURRENCY_PAIRS,
            PairMatching::default(),
        )
    }

    /// Reference data that rejects every counterparty and pair
    pub fn empty() -> Self {
        Self::new(
            Vec::<String>::new(),
            Vec::<CurrencyPair>::new(),
            PairMatching::default(),
        )
    }

    pub fn currency_pair_count(&self) -> usize {
        self.currency_pairs.len()
    }
}

impl Default for StaticReferenceData {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ReferenceDataProvider for StaticReferenceData {
    fn is_supported_counterparty(&self, counterparty: &str) -> bool {
        self.counterparties.contains(counterparty.trim())
    }

    fn is_supported_currency_pair(&self, pair: &CurrencyPair) -> bool {
        let Some(canonical) = pair.canonical() else {
            return false;
        };

        if self.currency_pairs.contains(&canonical) {
            return true;
        }

        match self.pair_matching {
            PairMatching::Exact => false,
            PairMatching::EitherDirection => pair
                .inverse()
                .and_then(|inverse| inverse.canonical())
                .is_some_and(|inverse| self.currency_pairs.contains(&inverse)),
        }
    }

    fn supported_counterparties(&self) -> Vec<String> {
        self.counterparties.iter().cloned().collect()
    }
}
