//! `genesis schema`: JSON Schemas for the config file and project requests.

use clap::{Args, ValueEnum};
use gn_common::OutputFormat;
use serde_json::json;

use super::{emit_json, print_json};
use crate::exit_codes::ExitCode;
use crate::request::request_schema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemaTarget {
    /// The preference file (~/.genesis-cli/config.json)
    Config,
    /// The request handed to the project orchestrator
    Request,
}

#[derive(Args, Debug)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub target: SchemaTarget,
}

pub fn run_schema(format: OutputFormat, args: &SchemaArgs) -> ExitCode {
    let schema = match args.target {
        SchemaTarget::Config => gn_config::config_schema(),
        SchemaTarget::Request => request_schema(),
    };
    let schema = match schema {
        Ok(schema) => schema,
        Err(e) => {
            eprintln!("failed to generate schema: {e}");
            return ExitCode::InternalError;
        }
    };

    // Human output is the bare schema so it can be redirected to a file.
    match format {
        OutputFormat::Json => emit_json(
            "schema",
            json!({ "target": format!("{:?}", args.target).to_lowercase(), "schema": schema }),
            ExitCode::Clean,
        ),
        OutputFormat::Human => print_json(&schema),
    }
}
