//! Airfoil CLI - create, develop and deploy RunPod projects
//!
//! This is the main entry point for the Airfoil command-line interface.

mod cli;
mod commands;
mod output;
mod prompts;
mod terminal;
mod utils;
mod version;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Install the rustls crypto provider before any TLS operations
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    // Read once for every command; only the API commands require it to load
    let config = utils::load_config(cli.config.as_deref());
    if !matches!(cli.command, Commands::Dev(_)) {
        utils::warn_on_config_error(&config);
    }

    let result = match cli.command {
        Commands::Create(args) => commands::create::run(args),
        Commands::Dev(args) => commands::dev::run(args, config).await,
        Commands::Deploy(args) => commands::deploy::run(args),
        Commands::Build(args) => commands::build::run(args),
        Commands::Version(args) => commands::version::run(args),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = &result {
        output::error(&format!("{:#}", e));
        std::process::exit(1);
    }
    result
}

/// Initialize tracing with appropriate verbosity
///
/// Logs go to stderr so they never interleave with the wizard on stdout.
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
