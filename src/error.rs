//! Setup-time error types for the simulator

use thiserror::Error;

/// Errors that can occur while validating parameters and constructing the
/// simulation. Once setup succeeds, stepping the automaton cannot fail.
#[derive(Debug, Error, PartialEq)]
pub enum SetupError {
    /// Grid dimension or generation count outside its valid domain
    #[error("invalid {parameter}: {value} (must be a positive integer)")]
    InvalidDimension { parameter: &'static str, value: i64 },

    /// Initial-alive probability outside [0, 1]
    #[error("invalid probability: {value} (must be in [0, 1])")]
    InvalidProbability { value: f64 },

    /// Rule string does not match the B<digits>/S<digits> grammar
    #[error("invalid rule \"{spec}\": {reason} (expected B<digits>/S<digits> with digits 0-8)")]
    InvalidRule { spec: String, reason: String },
}

impl SetupError {
    pub fn invalid_rule(spec: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRule {
            spec: spec.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_parameter() {
        let err = SetupError::InvalidDimension {
            parameter: "grid size",
            value: 0,
        };
        assert!(err.to_string().contains("grid size"));
        assert!(err.to_string().contains("positive integer"));

        let err = SetupError::InvalidProbability { value: 1.5 };
        assert!(err.to_string().contains("1.5"));
        assert!(err.to_string().contains("[0, 1]"));

        let err = SetupError::invalid_rule("B3S23", "missing '/' separator");
        assert!(err.to_string().contains("B3S23"));
        assert!(err.to_string().contains("missing '/'"));
    }
}
