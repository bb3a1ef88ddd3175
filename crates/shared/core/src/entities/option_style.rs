use serde::{Deserialize, Serialize};

/// Option exercise style
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OptionStyle {
    /// Can exercise any time before expiry
    American,
    /// Can only exercise at expiry
    European,
    /// Anything else a client sent
    Other(String),
}

impl OptionStyle {
    /// Styles accepted on an option trade, in the order they are reported
    pub const SUPPORTED: [OptionStyle; 2] = [OptionStyle::American, OptionStyle::European];

    pub fn is_supported(&self) -> bool {
        !matches!(self, OptionStyle::Other(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            OptionStyle::American => "AMERICAN",
            OptionStyle::European => "EUROPEAN",
            OptionStyle::Other(name) => name,
        }
    }
}

impl From<&str> for OptionStyle {
    fn from(name: &str) -> Self {
        match name.trim().to_uppercase().as_str() {
            "AMERICAN" => OptionStyle::American,
            "EUROPEAN" => OptionStyle::European,
            _ => OptionStyle::Other(name.trim().to_string()),
        }
    }
}

impl From<String> for OptionStyle {
    fn from(name: String) -> Self {
        OptionStyle::from(name.as_str())
    }
}

impl From<OptionStyle> for String {
    fn from(style: OptionStyle) -> Self {
        style.as_str().to_string()
    }
}

impl std::fmt::Display for OptionStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
