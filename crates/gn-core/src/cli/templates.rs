//! `genesis templates` subcommands.

use clap::{Args, Subcommand};
use gn_common::OutputFormat;
use serde_json::json;

use super::emit_json;
use crate::catalog::TemplateInfo;
use crate::exit_codes::ExitCode;
use crate::validate::{FeatureValidator, TemplateValidator};

#[derive(Args, Debug)]
pub struct TemplatesArgs {
    #[command(subcommand)]
    pub command: TemplatesCommands,
}

#[derive(Subcommand, Debug)]
pub enum TemplatesCommands {
    /// List all official templates
    List,
    /// Show one template
    Show {
        /// Template key
        key: String,
    },
}

pub fn run_templates(format: OutputFormat, args: &TemplatesArgs) -> ExitCode {
    match &args.command {
        TemplatesCommands::List => run_templates_list(format),
        TemplatesCommands::Show { key } => run_templates_show(format, key),
    }
}

fn run_templates_list(format: OutputFormat) -> ExitCode {
    let templates = TemplateValidator::list_all();
    match format {
        OutputFormat::Json => emit_json(
            "templates list",
            json!({ "templates": templates, "count": templates.len() }),
            ExitCode::Clean,
        ),
        OutputFormat::Human => {
            println!("# Templates ({} total)", templates.len());
            println!();
            for t in templates {
                println!("  {:<14} {:<7} {}", t.key, t.complexity, t.description);
            }
            ExitCode::Clean
        }
    }
}

fn run_templates_show(format: OutputFormat, key: &str) -> ExitCode {
    let Some(template) = TemplateValidator::get_info(key) else {
        let err = gn_common::Error::UnknownTemplate(key.to_string());
        eprintln!("{err}");
        if let Some(similar) = TemplateValidator::find_similar(key) {
            eprintln!("Did you mean '{similar}'?");
        }
        return ExitCode::from(&err);
    };

    let resolved = FeatureValidator::resolve_in_catalog_order(template.features);
    match format {
        OutputFormat::Json => emit_json(
            "templates show",
            json!({ "template": template, "resolved_features": resolved }),
            ExitCode::Clean,
        ),
        OutputFormat::Human => {
            print_template(template, &resolved);
            ExitCode::Clean
        }
    }
}

fn print_template(template: &TemplateInfo, resolved: &[&str]) {
    println!("# Template: {} ({})", template.name, template.key);
    println!();
    println!("  Description: {}", template.description);
    println!("  Complexity:  {}", template.complexity);
    println!("  Features:    {}", template.features.join(", "));
    if resolved.len() != template.features.len() {
        println!("  Resolved:    {}", resolved.join(", "));
    }
}
