//! Bookmark merger CLI entry point.

mod merge_cmd;
mod output;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Merge browser bookmark exports into one deduplicated file.
#[derive(Parser)]
#[command(
    name = "bookmerge",
    version,
    about = "Merge browser bookmark exports into one deduplicated file"
)]
struct Cli {
    /// Bookmark export files to merge (.html)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Where to write the merged document
    #[arg(short, long, default_value = bookmerge::DEFAULT_EXPORT_NAME)]
    output: PathBuf,

    /// Skip the confirmation prompt
    #[arg(long)]
    yes: bool,

    /// Print a JSON summary instead of status lines
    #[arg(long)]
    json: bool,

    /// Suppress status output
    #[arg(short, long)]
    quiet: bool,

    /// Show each merged URL in the group summary
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet {
        std::env::set_var("BOOKMERGE_QUIET", "1");
    }
    if cli.verbose {
        std::env::set_var("BOOKMERGE_VERBOSE", "1");
    }
    if cli.json {
        std::env::set_var("BOOKMERGE_JSON", "1");
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bookmerge=warn".parse().unwrap()),
        )
        .init();

    merge_cmd::run(&cli.files, &cli.output, cli.yes).await
}
