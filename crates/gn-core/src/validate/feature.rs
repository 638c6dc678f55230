//! Feature selection validation and dependency resolution.
//!
//! Requested features are checked against the catalog, then closed under
//! the declared dependency relation. Dependencies the caller left out are
//! added automatically and reported as a warning, never as an error.

use std::collections::BTreeSet;

use serde_json::Value;
use tracing::trace;

use super::result::ValidationResult;
use crate::catalog::{self, FeatureInfo, FEATURES};

/// Pairs that must hold after resolution: if the first is requested, the
/// second has to be in the resolved set.
const REQUIRED_COMBINATIONS: &[(&str, &str)] = &[("ai", "database"), ("payments", "authentication")];

/// Validates feature selections against the catalog.
pub struct FeatureValidator;

impl FeatureValidator {
    pub fn validate<S: AsRef<str>>(features: &[S]) -> ValidationResult {
        let mut result = ValidationResult::success();
        let requested: Vec<&str> = features.iter().map(AsRef::as_ref).collect();

        let mut unknown: Vec<&str> = Vec::new();
        for &key in &requested {
            if catalog::feature(key).is_none() && !unknown.contains(&key) {
                unknown.push(key);
            }
        }
        if !unknown.is_empty() {
            let valid: Vec<&str> = catalog::feature_keys().collect();
            result.add_error(format!("Unknown features: {}", unknown.join(", ")));
            result.add_suggestion(format!("Valid features: {}", valid.join(", ")));
        }

        let added = Self::added_dependencies(requested.as_slice());
        if !added.is_empty() {
            result.add_warning(format!(
                "Automatically added dependencies: {}",
                added.join(", ")
            ));
        }

        let resolved = Self::resolve_dependencies(requested.as_slice());
        for (feature, needs) in REQUIRED_COMBINATIONS {
            if requested.contains(feature) && !resolved.contains(*needs) {
                result.add_error(format!("Feature '{feature}' requires '{needs}'"));
            }
        }

        result
    }

    /// Validate an untyped value, as found in a JSON project description.
    ///
    /// Non-string elements are reported as unknown features.
    pub fn validate_value(value: &Value) -> ValidationResult {
        let Value::Array(items) = value else {
            return ValidationResult::failure(
                vec!["Features must be a list".to_string()],
                Vec::new(),
                Vec::new(),
            );
        };
        let keys: Vec<String> = items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect();
        Self::validate(keys.as_slice())
    }

    /// Transitive closure of `features` under declared dependencies.
    ///
    /// Unknown keys are kept in the set but contribute no dependencies.
    pub fn resolve_dependencies<S: AsRef<str>>(features: &[S]) -> BTreeSet<String> {
        closure(features, |key| {
            catalog::feature(key).map_or(&[][..], |entry| entry.dependencies)
        })
    }

    /// Features added by resolution that were not requested, in catalog order.
    pub fn added_dependencies<S: AsRef<str>>(features: &[S]) -> Vec<&'static str> {
        let resolved = Self::resolve_dependencies(features);
        catalog::feature_keys()
            .filter(|key| resolved.contains(*key))
            .filter(|key| !features.iter().any(|f| f.as_ref() == *key))
            .collect()
    }

    /// Resolved catalog features in declaration order. Unknown keys are dropped.
    pub fn resolve_in_catalog_order<S: AsRef<str>>(features: &[S]) -> Vec<&'static str> {
        let resolved = Self::resolve_dependencies(features);
        catalog::feature_keys()
            .filter(|key| resolved.contains(*key))
            .collect()
    }

    pub fn get_info(feature: &str) -> Option<&'static FeatureInfo> {
        catalog::feature(feature)
    }

    pub fn list_all() -> &'static [FeatureInfo] {
        FEATURES
    }
}

/// Fixed-point closure of `features`, where `lookup` yields the direct
/// dependencies of one key.
fn closure<'a, S, F>(features: &[S], lookup: F) -> BTreeSet<String>
where
    S: AsRef<str>,
    F: Fn(&str) -> &'a [&'a str],
{
    let mut resolved: BTreeSet<String> = features.iter().map(|f| f.as_ref().to_string()).collect();
    let mut pending: Vec<String> = resolved.iter().cloned().collect();

    while let Some(key) = pending.pop() {
        for dep in lookup(&key) {
            if resolved.insert((*dep).to_string()) {
                trace!(feature = %key, dependency = *dep, "added dependency");
                pending.push((*dep).to_string());
            }
        }
    }

    resolved
}
