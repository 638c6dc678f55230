//! Input validation.
//!
//! Validators are total: they never fail, they return a `ValidationResult`
//! that collects every finding. Callers decide what a failed result means
//! (the CLI prints it and exits non-zero).
//!
//! - `NameValidator`: project name syntax, length, reserved words, style
//! - `TemplateValidator`: template key against the catalog, with hints
//! - `FeatureValidator`: feature keys, dependency closure
//! - `DirectoryValidator`: target location checks
//! - `validate_project`: all of the above for one project description

pub mod directory;
pub mod feature;
pub mod name;
pub mod project;
pub mod result;
pub mod template;

pub use directory::{validate_directory, DirectoryValidator, MIN_FREE_SPACE_BYTES};
pub use feature::FeatureValidator;
pub use name::{NameValidator, MAX_NAME_LEN, MIN_NAME_LEN, RESERVED_NAMES};
pub use project::{validate_project, validate_project_config, ProjectSpec};
pub use result::ValidationResult;
pub use template::TemplateValidator;
