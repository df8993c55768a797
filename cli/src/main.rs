mod cli;
mod commands;
mod output;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use medbook_core::{ApiClient, ClientConfig};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use output::print_error;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut config = ClientConfig::new(&cli.api_url);
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    tracing::debug!(base_url = %config.base_url, timeout = ?config.timeout, "client configured");
    let api = ApiClient::new(&config);

    match &cli.command {
        Commands::Doctors(args) => commands::doctors(&api, args),
        Commands::Book(args) => commands::book(&api, args),
        Commands::Register(args) => commands::register(&api, args),
        Commands::Login(args) => commands::login(&api, args),
    }
}
