//! Error types for the ILR Qualifying Period Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the failure conditions of rule set loading and input conversion.
//!
//! An assessment that is missing its route selection is not an error: the
//! evaluator reports it as [`AssessmentResult::Incomplete`](crate::models::AssessmentResult).

use thiserror::Error;

/// The main error type for the ILR Qualifying Period Engine.
///
/// # Example
///
/// ```
/// use ilr_engine::error::EngineError;
///
/// let error = EngineError::RulesNotFound {
///     path: "/missing/rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Rule set file not found: /missing/rules.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Rule set file was not found at the specified path.
    #[error("Rule set file not found: {path}")]
    RulesNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Rule set file could not be parsed.
    #[error("Failed to parse rule set file '{path}': {message}")]
    RulesParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Rule set parsed but its values are inconsistent.
    #[error("Invalid rule set: {message}")]
    InvalidRuleSet {
        /// What made the rule set invalid.
        message: String,
    },

    /// A caller-supplied answer violated an input precondition.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_not_found_displays_path() {
        let error = EngineError::RulesNotFound {
            path: "/missing/rules.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Rule set file not found: /missing/rules.yaml"
        );
    }

    #[test]
    fn test_rules_parse_error_displays_path_and_message() {
        let error = EngineError::RulesParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse rule set file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_rule_set_displays_message() {
        let error = EngineError::InvalidRuleSet {
            message: "lower threshold exceeds upper threshold".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid rule set: lower threshold exceeds upper threshold"
        );
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::InvalidInput {
            field: "salary".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid input field 'salary': must not be negative"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_rules_not_found() -> EngineResult<()> {
            Err(EngineError::RulesNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_rules_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
