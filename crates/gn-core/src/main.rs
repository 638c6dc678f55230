//! `genesis` command-line entry point.

use clap::Parser;
use gn_config::{resolve_config_path, ConfigStore, ProcessEnv};
use gn_core::cli::{self, Cli, CliContext};
use gn_core::logging::{init_logging, LogConfig};
use tracing::debug;

fn main() {
    let cli = Cli::parse();

    let env = ProcessEnv;
    let config_path = resolve_config_path(cli.global.config.as_deref(), &env);
    let mut store = ConfigStore::new(config_path);
    let effective = store.load_from_environment();

    let log_config = LogConfig::from_cli(&effective, cli.global.verbose, cli.global.log_format);
    if let Err(e) = init_logging(&log_config) {
        eprintln!("warning: {e}");
    }
    debug!(path = %store.path().display(), "using config file");

    let mut ctx = CliContext::new(cli.global.format, store, Box::new(env));
    let code = cli::run(&mut ctx, &cli.command);
    std::process::exit(code.as_i32());
}
