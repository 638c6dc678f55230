//! `genesis validate` subcommands.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use serde_json::{json, Value};
use tracing::debug;

use super::{report_validation, CliContext};
use crate::exit_codes::ExitCode;
use crate::validate::{
    validate_directory, validate_project_config, FeatureValidator, NameValidator,
    TemplateValidator,
};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(subcommand)]
    pub command: ValidateCommands,
}

#[derive(Subcommand, Debug)]
pub enum ValidateCommands {
    /// Check a project name
    Name {
        name: String,
    },
    /// Check a template key
    Template {
        key: String,
    },
    /// Check a feature selection and show its dependency closure
    Features {
        /// Feature keys (repeat or separate with commas)
        #[arg(value_delimiter = ',')]
        features: Vec<String>,
    },
    /// Check where a project directory would be created
    Dir {
        /// Parent directory
        parent: PathBuf,
        /// Project name
        name: String,
        /// Allow overwriting an existing project directory
        #[arg(long)]
        force: bool,
    },
    /// Check a JSON project description (`-` reads stdin)
    Project {
        file: PathBuf,
    },
}

pub fn run_validate(ctx: &mut CliContext, args: &ValidateArgs) -> ExitCode {
    let format = ctx.format;
    match &args.command {
        ValidateCommands::Name { name } => report_validation(
            format,
            "validate name",
            &NameValidator::validate(name),
            json!({ "name": name }),
        ),
        ValidateCommands::Template { key } => report_validation(
            format,
            "validate template",
            &TemplateValidator::validate(key),
            json!({ "template": key }),
        ),
        ValidateCommands::Features { features } => {
            let result = FeatureValidator::validate(features.as_slice());
            let resolved = FeatureValidator::resolve_in_catalog_order(features.as_slice());
            if !format.is_json() && !resolved.is_empty() {
                println!("Resolved features: {}", resolved.join(", "));
            }
            report_validation(
                format,
                "validate features",
                &result,
                json!({ "requested": features, "resolved": resolved }),
            )
        }
        ValidateCommands::Dir {
            parent,
            name,
            force,
        } => report_validation(
            format,
            "validate dir",
            &validate_directory(parent, name, *force),
            json!({ "parent": parent, "name": name, "force": force }),
        ),
        ValidateCommands::Project { file } => run_validate_project(ctx, file),
    }
}

fn run_validate_project(ctx: &CliContext, file: &Path) -> ExitCode {
    let text = match read_input(file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Cannot read {}: {e}", file.display());
            return ExitCode::IoError;
        }
    };
    let config: Value = match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Invalid JSON in {}: {e}", file.display());
            return ExitCode::ArgsError;
        }
    };
    debug!(path = %file.display(), "validating project description");

    report_validation(
        ctx.format,
        "validate project",
        &validate_project_config(&config),
        json!({ "source": file }),
    )
}

fn read_input(file: &Path) -> std::io::Result<String> {
    if file.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(file)
    }
}
