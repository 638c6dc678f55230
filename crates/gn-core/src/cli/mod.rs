//! Command-line front end.
//!
//! Each subcommand module exposes `Args`/`Subcommand` types and a `run_*`
//! function returning an `ExitCode`. Output goes to stdout either as plain
//! text or as a JSON envelope carrying `schema_version`, `request_id`,
//! `generated_at` and `command`.

pub mod config;
pub mod features;
pub mod init;
pub mod schema;
pub mod templates;
pub mod validate;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use gn_common::{OutputFormat, RequestId, SCHEMA_VERSION};
use gn_config::{CliConfig, ConfigStore, EnvSource};
use serde_json::{json, Map, Value};

use crate::exit_codes::ExitCode;
use crate::logging::LogFormat;
use crate::validate::ValidationResult;

/// Genesis project bootstrapper.
#[derive(Parser, Debug)]
#[command(name = "genesis", version, about = "Validate and prepare new Genesis projects")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags accepted by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Config file (default: ~/.genesis-cli/config.json, or $GENESIS_CLI_CONFIG)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log line format on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a new project and print the orchestrator request
    Init(init::InitArgs),
    /// Run a single validator
    Validate(validate::ValidateArgs),
    /// Browse the template catalog
    Templates(templates::TemplatesArgs),
    /// Browse the feature catalog
    Features(features::FeaturesArgs),
    /// Inspect and change CLI preferences
    Config(config::ConfigArgs),
    /// Print JSON Schemas
    Schema(schema::SchemaArgs),
}

/// State shared by command handlers for one invocation.
pub struct CliContext {
    pub format: OutputFormat,
    pub store: ConfigStore,
    pub env: Box<dyn EnvSource>,
}

impl CliContext {
    pub fn new(format: OutputFormat, store: ConfigStore, env: Box<dyn EnvSource>) -> Self {
        Self { format, store, env }
    }

    /// Defaults, then file, then environment.
    pub fn effective_config(&mut self) -> CliConfig {
        self.store.load_with_env(self.env.as_ref())
    }
}

/// Dispatch a parsed command.
pub fn run(ctx: &mut CliContext, command: &Commands) -> ExitCode {
    match command {
        Commands::Init(args) => init::run_init(ctx, args),
        Commands::Validate(args) => validate::run_validate(ctx, args),
        Commands::Templates(args) => templates::run_templates(ctx.format, args),
        Commands::Features(args) => features::run_features(ctx.format, args),
        Commands::Config(args) => config::run_config(ctx, args),
        Commands::Schema(args) => schema::run_schema(ctx.format, args),
    }
}

/// Wrap `body` fields in the standard output envelope.
pub(crate) fn envelope(command: &str, body: Value) -> Value {
    let mut map = Map::new();
    map.insert("schema_version".into(), json!(SCHEMA_VERSION));
    map.insert("request_id".into(), json!(RequestId::new().0));
    map.insert("generated_at".into(), json!(chrono::Utc::now().to_rfc3339()));
    map.insert("command".into(), json!(command));
    match body {
        Value::Object(fields) => map.extend(fields),
        other => {
            map.insert("result".into(), other);
        }
    }
    Value::Object(map)
}

/// Pretty-print JSON to stdout.
pub(crate) fn print_json(value: &Value) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{text}");
            ExitCode::Clean
        }
        Err(e) => {
            eprintln!("failed to serialize output: {e}");
            ExitCode::InternalError
        }
    }
}

/// Emit an envelope, keeping `code` unless serialization fails.
pub(crate) fn emit_json(command: &str, body: Value, code: ExitCode) -> ExitCode {
    match print_json(&envelope(command, body)) {
        ExitCode::Clean => code,
        failed => failed,
    }
}

/// Human rendering of a validation result.
pub(crate) fn print_validation(result: &ValidationResult) {
    print_section("Errors", result.errors());
    print_section("Warnings", result.warnings());
    print_section("Suggestions", result.suggestions());
    if result.is_valid() {
        println!("OK");
    } else {
        println!("FAILED ({} error(s))", result.errors().len());
    }
}

fn print_section(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{title}:");
    for item in items {
        println!("  - {item}");
    }
}

/// Exit code for a finished validation.
pub(crate) fn validation_exit(result: &ValidationResult) -> ExitCode {
    if result.is_valid() {
        ExitCode::Clean
    } else {
        ExitCode::ValidationFailed
    }
}

/// Print a validation result in the selected format.
pub(crate) fn report_validation(
    format: OutputFormat,
    command: &str,
    result: &ValidationResult,
    extra: Value,
) -> ExitCode {
    let code = validation_exit(result);
    match format {
        OutputFormat::Json => {
            let mut body = json!({ "validation": result });
            if let (Value::Object(body_map), Value::Object(extra_map)) = (&mut body, extra) {
                body_map.extend(extra_map);
            }
            emit_json(command, body, code)
        }
        OutputFormat::Human => {
            print_validation(result);
            code
        }
    }
}
