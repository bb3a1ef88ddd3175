use serde::{Deserialize, Serialize};

/// Trade direction from the client's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    #[serde(alias = "Buy", alias = "buy")]
    Buy,
    #[serde(alias = "Sell", alias = "sell")]
    Sell,
}
