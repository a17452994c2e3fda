use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use districtview::cli::{Cli, Commands};
use districtview::commands::{cities, export, inspect, table};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Cities => cities::run(&cli),
        Commands::Export(args) => export::run(&cli, args),
        Commands::Inspect(args) => inspect::run(&cli, args),
        Commands::Table(args) => table::run(&cli, args),
    }
}
