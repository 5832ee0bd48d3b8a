//! weathercast CLI
//!
//! Fetch-and-save, report generation and one-shot weather lookups.

#![allow(clippy::print_stderr)]

use std::io;

use anyhow::Context;
use clap::Parser;
use infrastructure::{AppConfig, build_services, init_tracing_with_writer};
use presentation_cli::{Cli, Commands, cli::join_city, commands, log_filter_from_verbosity};

#[tokio::main]
async fn main() {
    if let Err(e) = run(Cli::parse()).await {
        eprintln!("✗ {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config =
        AppConfig::load_from(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(level) = log_filter_from_verbosity(cli.verbose) {
        config.logging.level = level.to_string();
    }
    init_tracing_with_writer(&config.logging, io::stderr)?;

    let services = build_services(&config)?;
    let city = join_city(cli.command.city_words(), &config.weather.default_city);
    let mut stdout = io::stdout();

    match cli.command {
        Commands::Fetch { .. } => {
            commands::fetch(&services.weather, &city, &mut stdout).await?;
        },
        Commands::Report { input, output, .. } => {
            commands::report(
                &services.weather,
                &city,
                input.as_deref(),
                output.as_deref(),
                &mut stdout,
            )
            .await?;
        },
        Commands::Weather { .. } => {
            commands::weather(&services.weather, &city, &mut stdout).await?;
        },
    }

    Ok(())
}
