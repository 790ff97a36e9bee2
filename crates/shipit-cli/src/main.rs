//! shipit CLI tool.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "shipit")]
#[command(about = "Synthesize CI/CD stack resource graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a stack configuration
    Validate {
        /// Path to the configuration file
        #[arg(default_value = "shipit.kdl", env = "SHIPIT_CONFIG")]
        path: String,
    },
    /// Synthesize the resource graph from a stack configuration
    Synth {
        /// Path to the configuration file
        #[arg(default_value = "shipit.kdl", env = "SHIPIT_CONFIG")]
        path: String,
        /// Write the graph to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs on stderr; `synth` writes the graph to stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { path } => commands::validate(&path),
        Commands::Synth { path, output } => commands::synth(&path, output.as_deref()),
    }
}
