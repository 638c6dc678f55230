//! `genesis features` subcommands.

use clap::{Args, Subcommand};
use gn_common::OutputFormat;
use serde_json::json;

use super::{emit_json, report_validation};
use crate::exit_codes::ExitCode;
use crate::validate::FeatureValidator;

#[derive(Args, Debug)]
pub struct FeaturesArgs {
    #[command(subcommand)]
    pub command: FeaturesCommands,
}

#[derive(Subcommand, Debug)]
pub enum FeaturesCommands {
    /// List all features with their dependencies
    List,
    /// Show one feature
    Show {
        /// Feature key
        key: String,
    },
    /// Show the dependency closure of a feature set
    Resolve {
        /// Feature keys (repeat or separate with commas)
        #[arg(required = true, value_delimiter = ',')]
        features: Vec<String>,
    },
}

pub fn run_features(format: OutputFormat, args: &FeaturesArgs) -> ExitCode {
    match &args.command {
        FeaturesCommands::List => run_features_list(format),
        FeaturesCommands::Show { key } => run_features_show(format, key),
        FeaturesCommands::Resolve { features } => run_features_resolve(format, features),
    }
}

fn run_features_list(format: OutputFormat) -> ExitCode {
    let features = FeatureValidator::list_all();
    match format {
        OutputFormat::Json => emit_json(
            "features list",
            json!({ "features": features, "count": features.len() }),
            ExitCode::Clean,
        ),
        OutputFormat::Human => {
            println!("# Features ({} total)", features.len());
            println!();
            for f in features {
                if f.dependencies.is_empty() {
                    println!("  {:<14} {}", f.key, f.description);
                } else {
                    println!(
                        "  {:<14} {} (needs {})",
                        f.key,
                        f.description,
                        f.dependencies.join(", ")
                    );
                }
            }
            ExitCode::Clean
        }
    }
}

fn run_features_show(format: OutputFormat, key: &str) -> ExitCode {
    let Some(feature) = FeatureValidator::get_info(key) else {
        let err = gn_common::Error::UnknownFeature(key.to_string());
        eprintln!("{err}");
        return ExitCode::from(&err);
    };
    let closure = FeatureValidator::added_dependencies(&[key]);

    match format {
        OutputFormat::Json => emit_json(
            "features show",
            json!({ "feature": feature, "transitive_dependencies": closure }),
            ExitCode::Clean,
        ),
        OutputFormat::Human => {
            println!("# Feature: {} ({})", feature.name, feature.key);
            println!();
            println!("  Description: {}", feature.description);
            if closure.is_empty() {
                println!("  Depends on:  (nothing)");
            } else {
                println!("  Depends on:  {}", closure.join(", "));
            }
            ExitCode::Clean
        }
    }
}

fn run_features_resolve(format: OutputFormat, features: &[String]) -> ExitCode {
    let validation = FeatureValidator::validate(features);
    let resolved = FeatureValidator::resolve_in_catalog_order(features);
    let added = FeatureValidator::added_dependencies(features);

    if format == OutputFormat::Human && validation.is_valid() {
        println!("Resolved: {}", resolved.join(", "));
        if !added.is_empty() {
            println!("Added:    {}", added.join(", "));
        }
        return ExitCode::Clean;
    }
    report_validation(
        format,
        "features resolve",
        &validation,
        json!({ "resolved": resolved, "added": added }),
    )
}
