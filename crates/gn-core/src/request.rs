//! Project creation requests.
//!
//! A `ProjectRequest` is the hand-off to the external project orchestrator.
//! It is only built from input that passed validation, and it carries the
//! resolved feature set rather than what the user typed.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use gn_common::RequestId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::validate::{validate_project, FeatureValidator, ProjectSpec, ValidationResult};

/// User input for a new project, after defaults are filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDraft {
    pub name: String,
    pub template: String,
    pub description: Option<String>,
    pub features: Vec<String>,
    pub output_dir: PathBuf,
    pub force: bool,
    pub interactive: bool,
}

impl RequestDraft {
    fn to_spec(&self) -> ProjectSpec {
        ProjectSpec {
            name: Some(self.name.clone()),
            template: Some(self.template.clone()),
            features: Some(self.features.clone()),
            output_dir: Some(self.output_dir.clone()),
            force: self.force,
        }
    }

    /// Run every validator over this draft.
    pub fn validate(&self) -> ValidationResult {
        validate_project(&self.to_spec())
    }

    /// Turn a validated draft into a request.
    ///
    /// Fails with `ValidationFailed` when `validation` has errors.
    pub fn into_request(self, validation: &ValidationResult) -> gn_common::Result<ProjectRequest> {
        validation.ensure_valid()?;

        let features = FeatureValidator::resolve_in_catalog_order(self.features.as_slice())
            .into_iter()
            .map(str::to_string)
            .collect();
        let project_path = self.output_dir.join(&self.name);
        let request = ProjectRequest {
            request_id: RequestId::new().0,
            name: self.name,
            template: self.template,
            description: self.description,
            features,
            output_dir: self.output_dir,
            project_path,
            force: self.force,
            interactive: self.interactive,
            created_at: Utc::now(),
        };
        debug!(request_id = %request.request_id, name = %request.name, "built project request");
        Ok(request)
    }
}

/// Validated request for the project orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectRequest {
    /// `req-<yyyymmdd>-<hhmmss>-<6 hex>`.
    pub request_id: String,
    pub name: String,
    pub template: String,
    pub description: Option<String>,
    /// Requested features plus their dependencies, in catalog order.
    pub features: Vec<String>,
    pub output_dir: PathBuf,
    /// `output_dir` joined with `name`.
    pub project_path: PathBuf,
    /// Overwrite an existing project directory.
    pub force: bool,
    pub interactive: bool,
    pub created_at: DateTime<Utc>,
}

impl ProjectRequest {
    /// Validate `draft` and build a request from it.
    pub fn build(draft: RequestDraft) -> gn_common::Result<Self> {
        let validation = draft.validate();
        draft.into_request(&validation)
    }
}

/// JSON Schema of `ProjectRequest`.
pub fn request_schema() -> Result<Value, serde_json::Error> {
    serde_json::to_value(schemars::schema_for!(ProjectRequest))
}

/// Expand a leading `~` to the home directory.
pub fn expand_home(raw: &str) -> PathBuf {
    let rest = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(raw),
    };
    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(Path::new(rest)),
        None => PathBuf::from(raw),
    }
}
