use clap::{Parser, Subcommand};
use std::path::PathBuf;

use logfwd_core::OutputFormat;

#[derive(Parser)]
#[command(name = "logfwd")]
#[command(about = "Synthesize CloudWatch log-forwarding resources for a serverless service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Synthesize declarations and print the merged resource template
    Synthesize {
        /// Path to the service description file
        #[arg(long, default_value = "serverless.yml")]
        service: PathBuf,

        /// Deployment stage; overrides the provider default
        #[arg(short, long)]
        stage: Option<String>,

        /// Output format (yaml or json)
        #[arg(long, default_value = "yaml")]
        format: OutputFormat,
    },

    /// Resolve the log-forwarding settings and print them
    Validate {
        /// Path to the service description file
        #[arg(long, default_value = "serverless.yml")]
        service: PathBuf,
    },
}
