//! AI Bridge CLI Binary
//!
//! Command-line front end for the capability resolver and the local synthesis engine.

use ai_bridge::cli::{map_error, Cli, RunContext};
use ai_bridge::config::ConfigLoader;
use ai_bridge::logging::{init_logging, LoggingConfig};
use clap::Parser;
use std::path::Path;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();
    let base_dir = std::env::current_dir().unwrap_or_else(|_| Path::new(".").to_path_buf());

    let logging_config = build_logging_config(&cli, &base_dir);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("AI Bridge CLI starting");

    let context = match RunContext::new(&base_dir, cli.config.clone(), cli.seed, cli.json) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error loading configuration: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from the config file, then CLI flags on top
fn build_logging_config(cli: &Cli, base_dir: &Path) -> LoggingConfig {
    let mut config = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path).map(|c| c.logging),
        None => ConfigLoader::load(base_dir).map(|c| c.logging),
    }
    .unwrap_or_default();

    if cli.quiet {
        config.enabled = false;
        return config;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
