use serde::{Deserialize, Serialize};

/// Product type of a trade
///
/// Unrecognised names are preserved in `Other` so they still reach the rule
/// set (only the rules that apply to every instrument run for them).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InstrumentType {
    Spot,
    Forward,
    Option,
    Other(String),
}

impl InstrumentType {
    pub fn is_option(&self) -> bool {
        matches!(self, InstrumentType::Option)
    }

    pub fn as_str(&self) -> &str {
        match self {
            InstrumentType::Spot => "SPOT",
            InstrumentType::Forward => "FORWARD",
            InstrumentType::Option => "OPTION",
            InstrumentType::Other(name) => name,
        }
    }
}

impl From<&str> for InstrumentType {
    fn from(name: &str) -> Self {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-' && *c != ' ')
            .collect::<String>()
            .to_uppercase();

        match normalized.as_str() {
            "SPOT" => InstrumentType::Spot,
            "FORWARD" => InstrumentType::Forward,
            "OPTION" | "VANILLAOPTION" => InstrumentType::Option,
            _ => InstrumentType::Other(name.trim().to_string()),
        }
    }
}

impl From<String> for InstrumentType {
    fn from(name: String) -> Self {
        InstrumentType::from(name.as_str())
    }
}

impl From<InstrumentType> for String {
    fn from(instrument_type: InstrumentType) -> Self {
        instrument_type.as_str().to_string()
    }
}

impl std::fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        assert_eq!(InstrumentType::from("Spot"), InstrumentType::Spot);
        assert_eq!(InstrumentType::from("FORWARD"), InstrumentType::Forward);
        assert_eq!(InstrumentType::from("VanillaOption"), InstrumentType::Option);
        assert_eq!(InstrumentType::from("vanilla_option"), InstrumentType::Option);
        assert!(InstrumentType::from("option").is_option());
    }

    #[test]
    fn test_unknown_type_is_preserved() {
        let swap = InstrumentType::from(" Swap ");
        assert_eq!(swap, InstrumentType::Other("Swap".to_string()));
        assert_eq!(swap.to_string(), "Swap");
        assert!(!swap.is_option());
    }
}
