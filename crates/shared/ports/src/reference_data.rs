use serde::{Deserialize, Serialize};
use tradeval_core::CurrencyPair;

/// How a submitted currency pair is compared against the supported list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PairMatching {
    /// EURUSD only matches EURUSD
    #[default]
    Exact,
    /// EURUSD also matches a configured USDEUR
    EitherDirection,
}

/// Port for static reference data (onboarded counterparties, tradable pairs)
///
/// Read-only after construction; shared across threads.
pub trait ReferenceDataProvider: Send + Sync {
    fn is_supported_counterparty(&self, counterparty: &str) -> bool;

    fn is_supported_currency_pair(&self, pair: &CurrencyPair) -> bool;

    /// Supported counterparties in their configured order
    fn supported_counterparties(&self) -> Vec<String>;
}
