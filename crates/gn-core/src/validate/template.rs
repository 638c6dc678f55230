//! Template key validation.

use serde_json::Value;

use super::result::ValidationResult;
use crate::catalog::{self, TemplateInfo, DEFAULT_TEMPLATE, TEMPLATES};

/// Keyword fallbacks for `find_similar`, checked in order.
const KEYWORD_HINTS: &[(&[&str], &str)] = &[
    (&["api"], "api-only"),
    (&["frontend", "ui"], "frontend-only"),
    (&["saas"], "saas-basic"),
    (&["shop", "store"], "e-commerce"),
    (&["blog"], "blog"),
    (&["ai"], "ai-ready"),
    (&["simple", "basic"], "minimal"),
];

/// Validates template keys against the official catalog.
pub struct TemplateValidator;

impl TemplateValidator {
    pub fn validate(template: &str) -> ValidationResult {
        let mut result = ValidationResult::success();

        if template.is_empty() {
            result.add_error("Template is required");
            result.add_suggestion(format!("Use '{DEFAULT_TEMPLATE}' to get started"));
            return result;
        }

        if catalog::template(template).is_none() {
            let available: Vec<&str> = catalog::template_keys().collect();
            result.add_error(format!(
                "Template '{template}' not found. Available templates: {}",
                available.join(", ")
            ));
            if let Some(similar) = Self::find_similar(template) {
                result.add_suggestion(format!("Did you mean '{similar}'?"));
            }
        }

        result
    }

    /// Validate an untyped value, as found in a JSON project description.
    pub fn validate_value(value: &Value) -> ValidationResult {
        match value {
            Value::String(template) => Self::validate(template),
            Value::Null => Self::validate(""),
            _ => ValidationResult::failure(
                vec!["Template must be a string".to_string()],
                Vec::new(),
                Vec::new(),
            ),
        }
    }

    /// Best-effort "did you mean" for an unknown key.
    ///
    /// The first catalog key that contains the input, or is contained in it,
    /// wins. Otherwise a keyword table maps common words to a template.
    pub fn find_similar(input: &str) -> Option<&'static str> {
        let lowered = input.to_lowercase();

        if let Some(key) = catalog::template_keys()
            .find(|key| key.contains(lowered.as_str()) || lowered.contains(key))
        {
            return Some(key);
        }

        KEYWORD_HINTS
            .iter()
            .find(|(words, _)| words.iter().any(|w| lowered.contains(w)))
            .map(|(_, key)| *key)
    }

    pub fn get_info(template: &str) -> Option<&'static TemplateInfo> {
        catalog::template(template)
    }

    pub fn list_all() -> &'static [TemplateInfo] {
        TEMPLATES
    }
}
