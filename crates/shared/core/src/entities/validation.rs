use serde::Serialize;

use super::TradeViolation;

/// Overall verdict for one trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValidationStatus {
    Success,
    Error,
}

/// Outcome of validating one trade
///
/// `status` is `Error` exactly when `messages` is non-empty; the fields are
/// private so that only the constructors below can build a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    status: ValidationStatus,
    messages: Vec<String>,
}

impl ValidationResult {
    pub fn success() -> Self {
        Self {
            status: ValidationStatus::Success,
            messages: Vec::new(),
        }
    }

    /// Build a result from the violations in the order the rules reported them
    pub fn from_violations(violations: &[TradeViolation]) -> Self {
        if violations.is_empty() {
            return Self::success();
        }

        Self {
            status: ValidationStatus::Error,
            messages: violations.iter().map(ToString::to_string).collect(),
        }
    }

    /// Shorthand for a result carrying a single violation
    pub fn rejected(violation: TradeViolation) -> Self {
        Self::from_violations(std::slice::from_ref(&violation))
    }

    pub fn status(&self) -> ValidationStatus {
        self.status
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_success(&self) -> bool {
        self.status == ValidationStatus::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_violations_is_success() {
        let result = ValidationResult::from_violations(&[]);
        assert!(result.is_success());
        assert!(result.messages().is_empty());
    }

    #[test]
    fn test_violations_keep_order() {
        let result = ValidationResult::from_violations(&[
            TradeViolation::MissingField {
                field: "Trade date",
            },
            TradeViolation::InvalidCurrencyPair {
                pair: Some("EURXXX".to_string()),
            },
        ]);

        assert_eq!(result.status(), ValidationStatus::Error);
        assert_eq!(
            result.messages(),
            ["Trade date is required", "Invalid currency pair: EURXXX"]
        );
    }

    #[test]
    fn test_serialized_shape() {
        let result = ValidationResult::rejected(TradeViolation::Malformed {
            reason: "expected a JSON object".to_string(),
        });
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["status"], "ERROR");
        assert_eq!(json["messages"][0], "Malformed trade: expected a JSON object");
        assert_eq!(
            serde_json::to_value(ValidationResult::success()).unwrap(),
            serde_json::json!({"status": "SUCCESS", "messages": []})
        );
    }
}
