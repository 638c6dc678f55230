//! Whole-project validation.
//!
//! Runs each validator for the parts that are present and merges the
//! findings in a fixed order: name, template, features, directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::directory::validate_directory;
use super::feature::FeatureValidator;
use super::name::NameValidator;
use super::result::ValidationResult;
use super::template::TemplateValidator;

/// Typed project description. Absent parts are not validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSpec {
    pub name: Option<String>,
    pub template: Option<String>,
    pub features: Option<Vec<String>>,
    #[serde(alias = "output_path")]
    pub output_dir: Option<PathBuf>,
    pub force: bool,
}

pub fn validate_project(spec: &ProjectSpec) -> ValidationResult {
    let mut result = ValidationResult::success();

    if let Some(name) = &spec.name {
        result.merge(NameValidator::validate(name));
    }
    if let Some(template) = &spec.template {
        result.merge(TemplateValidator::validate(template));
    }
    if let Some(features) = &spec.features {
        result.merge(FeatureValidator::validate(features.as_slice()));
    }
    if let (Some(name), Some(output_dir)) = (&spec.name, &spec.output_dir) {
        result.merge(validate_directory(output_dir, name, spec.force));
    }

    result
}

/// Validate an untyped JSON project description.
///
/// Recognized keys are `name`, `template`, `features`, `output_path` and
/// `force`. Values of the wrong JSON type become validation errors rather
/// than being rejected up front.
pub fn validate_project_config(config: &Value) -> ValidationResult {
    let Some(map) = config.as_object() else {
        return ValidationResult::failure(
            vec!["Project configuration must be a JSON object".to_string()],
            Vec::new(),
            Vec::new(),
        );
    };

    let mut result = ValidationResult::success();

    if let Some(name) = map.get("name") {
        result.merge(NameValidator::validate_value(name));
    }
    if let Some(template) = map.get("template") {
        result.merge(TemplateValidator::validate_value(template));
    }
    if let Some(features) = map.get("features") {
        result.merge(FeatureValidator::validate_value(features));
    }

    if let (Some(name), Some(output)) = (map.get("name"), map.get("output_path")) {
        match (name.as_str(), output.as_str()) {
            (Some(name), Some(output)) => {
                let force = map.get("force").and_then(Value::as_bool).unwrap_or(false);
                result.merge(validate_directory(Path::new(output), name, force));
            }
            // A non-string name has already been reported.
            (Some(_), None) => result.add_error("Output path must be a string"),
            (None, _) => {}
        }
    }

    result
}
