use std::path::PathBuf;

use board::{config::load_sheet_url, location::Location};
use clap::Parser;
use process::models::{DEFAULT_LOCATION, Options, Source};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Page URL whose `filters` parameter seeds the selection
    #[arg(long, default_value = DEFAULT_LOCATION)]
    location: Location,

    /// Tech area to flip, may be repeated
    #[arg(long = "toggle")]
    toggles: Vec<String>,

    /// Saved values response to read instead of fetching
    #[arg(long)]
    file: Option<PathBuf>,

    /// Write the fetched response here
    #[arg(long)]
    save: Option<PathBuf>,

    /// Print jobs per tech area
    #[arg(long)]
    counts: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let source = match args.file {
        Some(path) => Source::File(path),
        None => Source::Remote(load_sheet_url()?),
    };

    let options = Options {
        source,
        location: args.location,
        toggles: args.toggles,
        save: args.save,
    };

    process::run(options, args.counts).await
}
