use std::path::PathBuf;

/// Migration flow map CLI
#[derive(clap::Parser, Debug)]
#[command(name = "migramap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Render the choropleth and flow arcs to an SVG file
    Render(RenderArgs),
}

/// Fill rule for states missing from the migration data.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default)]
pub enum Unmatched {
    /// Same color as net outbound states
    #[default]
    Outbound,
    /// Gray
    Neutral,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// GeoJSON state boundaries (path or http(s) URL)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub boundaries: String,

    /// Migration counts JSON keyed by state name (path or http(s) URL)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub migration: String,

    /// Output SVG file, defaults to "./map.svg"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Region the flow arcs start from or end at
    #[arg(long, default_value = migramap::DEFAULT_REFERENCE)]
    pub reference: String,

    /// Projection scale
    #[arg(long)]
    pub scale: Option<f64>,

    /// Canvas width in pixels
    #[arg(long)]
    pub width: Option<f64>,

    /// Canvas height in pixels
    #[arg(long)]
    pub height: Option<f64>,

    /// How to fill states with no migration record
    #[arg(long, value_enum, default_value_t)]
    pub unmatched: Unmatched,
}
