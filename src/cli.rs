use clap::{Args, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

/// Police-district demographics viewer (argument schema only)
#[derive(Parser, Debug)]
#[command(name = "districtview", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Local data root containing results/<state>/<city>.geojson
    #[arg(long, global = true, default_value = "public", value_hint = ValueHint::DirPath)]
    pub data_dir: PathBuf,

    /// Fetch results from <URL>/results/... instead of the local data root
    #[cfg(feature = "download")]
    #[arg(long, global = true, value_hint = ValueHint::Url)]
    pub base_url: Option<String>,

    /// JSON city registry replacing the built-in one
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub registry: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available cities
    Cities,

    /// Export a city's district statistics as CSV
    Export(ExportArgs),

    /// Show viewport, district styles and the detail panel for a city
    Inspect(InspectArgs),

    /// Print the district table for a city
    Table(TableArgs),
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// City id, e.g. raleigh-nc
    pub city: String,

    /// Output directory
    #[arg(short, long, default_value = ".", value_hint = ValueHint::DirPath)]
    pub out: PathBuf,

    /// Overwrite if the file already exists (off by default)
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// City id, e.g. raleigh-nc
    pub city: String,

    /// Select the first district with this label
    #[arg(short, long)]
    pub district: Option<String>,

    /// Active metric: TOTAL, WHITE_PCT, BLACK_PCT, ...
    #[arg(short, long, default_value = "TOTAL")]
    pub metric: String,

    /// Color fills by the active metric
    #[arg(long)]
    pub scaled: bool,
}

#[derive(Args, Debug)]
pub struct TableArgs {
    /// City id, e.g. raleigh-nc
    pub city: String,
}
