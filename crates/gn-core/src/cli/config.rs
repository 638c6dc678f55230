//! `genesis config` subcommands.

use clap::{Args, Subcommand};
use gn_common::OutputFormat;
use gn_config::{apply_env_overrides, CliConfig, ConfigError, Section};
use serde_json::{json, Value};

use super::{emit_json, CliContext};
use crate::exit_codes::ExitCode;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show {
        /// Ignore GENESIS_CLI_* environment overrides
        #[arg(long)]
        no_env: bool,
    },
    /// Print one field
    Get {
        key: String,
    },
    /// Set one field and save
    Set {
        key: String,
        /// New value; booleans accept true/false, yes/no, on/off, 1/0
        value: String,
    },
    /// Restore and save the defaults
    Reset,
    /// Print the config file location
    Path,
}

pub fn run_config(ctx: &mut CliContext, args: &ConfigArgs) -> ExitCode {
    match &args.command {
        ConfigCommands::Show { no_env } => run_config_show(ctx, *no_env),
        ConfigCommands::Get { key } => run_config_get(ctx, key),
        ConfigCommands::Set { key, value } => run_config_set(ctx, key, value),
        ConfigCommands::Reset => run_config_reset(ctx),
        ConfigCommands::Path => run_config_path(ctx),
    }
}

fn run_config_show(ctx: &mut CliContext, no_env: bool) -> ExitCode {
    let mut config = ctx.store.load();
    let overrides = if no_env {
        Vec::new()
    } else {
        apply_env_overrides(&mut config, ctx.env.as_ref())
    };
    match ctx.format {
        OutputFormat::Json => emit_json(
            "config show",
            json!({
                "path": ctx.store.path(),
                "config": config.to_nested_value(),
                "env_overrides": overrides,
            }),
            ExitCode::Clean,
        ),
        OutputFormat::Human => {
            println!("# Config ({})", ctx.store.path().display());
            for section in Section::ALL {
                println!();
                println!("[{section}]");
                for spec in CliConfig::FIELDS.iter().filter(|spec| spec.section == section) {
                    if let Some(value) = config.get_field(spec.name) {
                        println!("  {} = {value}", spec.name);
                    }
                }
            }
            if !overrides.is_empty() {
                println!();
                println!("Environment overrides: {}", overrides.join(", "));
            }
            ExitCode::Clean
        }
    }
}

fn run_config_get(ctx: &mut CliContext, key: &str) -> ExitCode {
    let config = ctx.effective_config();
    let Some(value) = config.get_field(key) else {
        return unknown_key(key);
    };

    match ctx.format {
        OutputFormat::Json => emit_json(
            "config get",
            json!({ "key": key, "value": value }),
            ExitCode::Clean,
        ),
        OutputFormat::Human => {
            match &value {
                Value::String(s) => println!("{s}"),
                other => println!("{other}"),
            }
            ExitCode::Clean
        }
    }
}

fn run_config_set(ctx: &mut CliContext, key: &str, raw: &str) -> ExitCode {
    // Parse against a scratch record so the store only sees typed values.
    let mut scratch = CliConfig::default();
    if let Err(e) = scratch.set_field_from_str(key, raw) {
        return match e {
            ConfigError::UnknownField(_) => unknown_key(key),
            other => {
                eprintln!("{}", gn_common::Error::from(other));
                ExitCode::ArgsError
            }
        };
    }
    let value = scratch.get_field(key).unwrap_or(Value::Null);

    let outcome = ctx.store.update([(key, value.clone())]);
    let code = if outcome.persisted {
        ExitCode::Clean
    } else {
        eprintln!(
            "warning: could not write {}; the change only applies to this run",
            ctx.store.path().display()
        );
        ExitCode::IoError
    };

    match ctx.format {
        OutputFormat::Json => emit_json(
            "config set",
            json!({ "key": key, "value": value, "persisted": outcome.persisted }),
            code,
        ),
        OutputFormat::Human => {
            if outcome.persisted {
                println!("{key} = {value}");
            }
            code
        }
    }
}

fn run_config_reset(ctx: &mut CliContext) -> ExitCode {
    let persisted = ctx.store.reset();
    let code = if persisted {
        ExitCode::Clean
    } else {
        eprintln!("warning: could not write {}", ctx.store.path().display());
        ExitCode::IoError
    };

    match ctx.format {
        OutputFormat::Json => emit_json(
            "config reset",
            json!({ "path": ctx.store.path(), "persisted": persisted }),
            code,
        ),
        OutputFormat::Human => {
            if persisted {
                println!("Configuration reset to defaults");
            }
            code
        }
    }
}

fn run_config_path(ctx: &CliContext) -> ExitCode {
    match ctx.format {
        OutputFormat::Json => emit_json(
            "config path",
            json!({ "path": ctx.store.path(), "exists": ctx.store.path().exists() }),
            ExitCode::Clean,
        ),
        OutputFormat::Human => {
            println!("{}", ctx.store.path().display());
            ExitCode::Clean
        }
    }
}

fn unknown_key(key: &str) -> ExitCode {
    let err = gn_common::Error::UnknownConfigKey {
        key: key.to_string(),
    };
    eprintln!("{err}");
    let names: Vec<&str> = CliConfig::field_names().collect();
    eprintln!("Known keys: {}", names.join(", "));
    ExitCode::from(&err)
}
