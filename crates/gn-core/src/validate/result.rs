//! Outcome of a validation pass.

use gn_common::Error;
use serde::Serialize;

/// Errors, warnings and suggestions collected by a validator.
///
/// `is_valid` always equals `errors().is_empty()`: adding an error marks the
/// result invalid, warnings and suggestions never change validity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
    suggestions: Vec<String>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

impl ValidationResult {
    /// An empty, valid result.
    pub fn success() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// A valid result carrying notes.
    pub fn success_with(warnings: Vec<String>, suggestions: Vec<String>) -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings,
            suggestions,
        }
    }

    /// A result built from collected findings. Valid only if `errors` is empty.
    pub fn failure(errors: Vec<String>, warnings: Vec<String>, suggestions: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            suggestions,
        }
    }

    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    pub fn add_suggestion(&mut self, suggestion: impl Into<String>) {
        self.suggestions.push(suggestion.into());
    }

    /// Append another result's findings after this one's.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.suggestions.extend(other.suggestions);
        self.is_valid = self.errors.is_empty();
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// `Ok` when valid, otherwise `Error::ValidationFailed` with the error count.
    pub fn ensure_valid(&self) -> gn_common::Result<()> {
        if self.is_valid {
            Ok(())
        } else {
            Err(Error::ValidationFailed {
                count: self.errors.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_is_valid() {
        let result = ValidationResult::success();
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
        assert!(result.ensure_valid().is_ok());
    }

    #[test]
    fn test_add_error_flips_validity() {
        let mut result = ValidationResult::success();
        result.add_warning("careful");
        result.add_suggestion("try this");
        assert!(result.is_valid());

        result.add_error("broken");
        assert!(!result.is_valid());
        assert_eq!(result.errors(), ["broken"]);
        assert!(matches!(
            result.ensure_valid(),
            Err(Error::ValidationFailed { count: 1 })
        ));
    }

    #[test]
    fn test_failure_factory_tracks_errors() {
        let result = ValidationResult::failure(vec!["bad".into()], vec![], vec!["fix".into()]);
        assert!(!result.is_valid());
        assert_eq!(result.suggestions(), ["fix"]);

        let empty = ValidationResult::failure(vec![], vec!["w".into()], vec![]);
        assert!(empty.is_valid());
    }

    #[test]
    fn test_merge_preserves_order() {
        let mut first = ValidationResult::success_with(vec!["w1".into()], vec![]);
        let mut second = ValidationResult::success();
        second.add_error("e1");
        second.add_warning("w2");

        first.merge(second);
        assert!(!first.is_valid());
        assert_eq!(first.errors(), ["e1"]);
        assert_eq!(first.warnings(), ["w1", "w2"]);

        first.merge(ValidationResult::success());
        assert!(!first.is_valid());
    }

    #[test]
    fn test_serializes_all_fields() {
        let mut result = ValidationResult::success();
        result.add_error("e");
        let value = serde_json::to_value(&result).expect("serialize");
        assert_eq!(value["is_valid"], false);
        assert_eq!(value["errors"][0], "e");
        assert!(value["warnings"].as_array().expect("array").is_empty());
    }
}
