//! dev-cli - project scaffolding from the command line
//!
//! This is the main entry point for the dev-cli command-line interface.

mod cli;
mod commands;
mod output;
mod prompt;

use anyhow::{Context as _, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use devcli_core::{ConfigStore, ShellRunner};
use devcli_projects::github::GitHubClient;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;
use commands::Context;
use prompt::DialoguerPrompter;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize rustls crypto provider (required for rustls 0.23+)
    // This must be done before any TLS operations
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return cli::report_parse_error(&e),
    };

    init_tracing(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let store = ConfigStore::new().context("Failed to locate the config directory")?;
    let config = store.load();

    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let cwd = Utf8PathBuf::from_path_buf(cwd)
        .map_err(|p| anyhow::anyhow!("Current directory is not valid UTF-8: {}", p.display()))?;

    let mut prompter = DialoguerPrompter::new();
    let mut ctx = Context {
        cwd,
        config,
        store,
        prompter: &mut prompter,
        runner: Arc::new(ShellRunner::new()),
        github: GitHubClient::new(),
    };

    commands::run(cli.command, &mut ctx).await
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            // Warnings and API failures only; commands print their own progress
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
