//! Genesis CLI core.
//!
//! This crate provides:
//! - Static template and feature catalogs
//! - Validators for project names, templates, features and output directories
//! - `ProjectRequest`, the validated hand-off to the project orchestrator
//! - Exit codes, logging setup and the `genesis` command-line front end

pub mod catalog;
pub mod cli;
pub mod exit_codes;
pub mod logging;
pub mod request;
pub mod validate;

pub use exit_codes::ExitCode;
pub use request::{ProjectRequest, RequestDraft};
pub use validate::{
    validate_project, DirectoryValidator, FeatureValidator, NameValidator, ProjectSpec,
    TemplateValidator, ValidationResult,
};
