//! `genesis init`: validate a new project and emit its request.
//!
//! Missing options are filled from the effective config: the template from
//! `default_template`, the parent directory from `default_output_dir`, and
//! the features from the chosen template. Nothing is generated here; the
//! request is printed for the orchestrator.

use std::path::PathBuf;

use clap::Args;
use gn_common::OutputFormat;
use gn_config::CliConfig;
use serde_json::json;
use tracing::info;

use super::{emit_json, print_validation, CliContext};
use crate::catalog;
use crate::exit_codes::ExitCode;
use crate::request::{expand_home, ProjectRequest, RequestDraft};

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project name
    pub name: String,

    /// Template key (default: configured default_template)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Feature to enable; repeat or separate with commas (default: the template's features)
    #[arg(short = 'f', long = "feature", value_name = "FEATURE", value_delimiter = ',')]
    pub features: Vec<String>,

    /// Parent directory (default: configured default_output_dir)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Overwrite an existing project directory
    #[arg(long)]
    pub force: bool,

    /// Short project description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Never prompt
    #[arg(long)]
    pub no_interactive: bool,
}

/// Fill unset options from `config`.
pub fn build_draft(args: &InitArgs, config: &CliConfig) -> RequestDraft {
    let template = args
        .template
        .clone()
        .unwrap_or_else(|| config.default_template.clone());

    let features = if args.features.is_empty() {
        catalog::template(&template)
            .map(|t| t.features.iter().map(|f| f.to_string()).collect())
            .unwrap_or_default()
    } else {
        args.features.clone()
    };

    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| expand_home(&config.default_output_dir));

    RequestDraft {
        name: args.name.clone(),
        template,
        description: args.description.clone(),
        features,
        output_dir,
        force: args.force,
        interactive: config.interactive_mode && !args.no_interactive,
    }
}

pub fn run_init(ctx: &mut CliContext, args: &InitArgs) -> ExitCode {
    let config = ctx.effective_config();
    let draft = build_draft(args, &config);
    let validation = draft.validate();

    let request = match draft.into_request(&validation) {
        Ok(request) => request,
        Err(e) => {
            return match ctx.format {
                OutputFormat::Json => emit_json(
                    "init",
                    json!({ "validation": validation, "request": null }),
                    ExitCode::from(&e),
                ),
                OutputFormat::Human => {
                    print_validation(&validation);
                    ExitCode::from(&e)
                }
            };
        }
    };

    info!(request_id = %request.request_id, template = %request.template, "project request ready");
    match ctx.format {
        OutputFormat::Json => emit_json(
            "init",
            json!({ "validation": validation, "request": request }),
            ExitCode::Clean,
        ),
        OutputFormat::Human => {
            print_validation(&validation);
            print_request(&request, config.verbose_output);
            ExitCode::Clean
        }
    }
}

fn print_request(request: &ProjectRequest, verbose: bool) {
    println!();
    println!("# Project request {}", request.request_id);
    println!();
    println!("  Name:      {}", request.name);
    println!("  Template:  {}", request.template);
    if let Some(description) = &request.description {
        println!("  About:     {description}");
    }
    println!("  Features:  {}", request.features.join(", "));
    println!("  Location:  {}", request.project_path.display());
    if verbose {
        println!("  Force:       {}", request.force);
        println!("  Interactive: {}", request.interactive);
        println!("  Created:     {}", request.created_at.to_rfc3339());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        init: InitArgs,
    }

    fn parse(args: &[&str]) -> InitArgs {
        let mut argv = vec!["init"];
        argv.extend_from_slice(args);
        Harness::try_parse_from(argv).expect("parse").init
    }

    #[test]
    fn test_defaults_from_config() {
        let mut config = CliConfig::default();
        config.default_template = "minimal".to_string();
        config.default_output_dir = "/srv/projects".to_string();

        let draft = build_draft(&parse(&["my-app"]), &config);
        assert_eq!(draft.template, "minimal");
        assert_eq!(draft.features, vec!["api", "docker"]);
        assert_eq!(draft.output_dir, PathBuf::from("/srv/projects"));
        assert!(draft.interactive);
    }

    #[test]
    fn test_explicit_options_win() {
        let config = CliConfig::default();
        let draft = build_draft(
            &parse(&[
                "my-app",
                "--template",
                "blog",
                "-f",
                "search,testing",
                "--feature",
                "caching",
                "--output",
                "/tmp",
                "--no-interactive",
            ]),
            &config,
        );
        assert_eq!(draft.template, "blog");
        assert_eq!(draft.features, vec!["search", "testing", "caching"]);
        assert_eq!(draft.output_dir, PathBuf::from("/tmp"));
        assert!(!draft.interactive);
    }

    #[test]
    fn test_unknown_template_has_no_default_features() {
        let config = CliConfig::default();
        let draft = build_draft(&parse(&["my-app", "-t", "nope"]), &config);
        assert!(draft.features.is_empty());
        assert!(!draft.validate().is_valid());
    }
}
