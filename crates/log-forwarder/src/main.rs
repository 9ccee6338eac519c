use anyhow::Result;
use clap::Parser;

mod cli;
mod synthesize_cmd;
mod validate_cmd;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .ok();

    let cli = Cli::parse();
    match cli.command {
        Commands::Synthesize {
            service,
            stage,
            format,
        } => synthesize_cmd::run(&service, stage.as_deref(), format),
        Commands::Validate { service } => validate_cmd::run(&service),
    }
}
