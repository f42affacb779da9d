//! Command implementations for the case map CLI.
//!
//! Every subcommand loads the case feed (over HTTP, or from a saved feed
//! body with `--input`), builds the dataset and reports on it.

use clap::Subcommand;

pub mod export;
pub mod inspect;
pub mod snapshot;
pub mod source;

pub use source::FeedArgs;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the feed and write the map's point layer (GeoJSON + paint) as JSON
    Snapshot {
        /// Output path for the point layer JSON
        #[arg(short = 'o', long)]
        output: String,

        #[command(flatten)]
        feed: FeedArgs,
    },

    /// Print the case range and latest update of the current feed
    Stats {
        #[command(flatten)]
        feed: FeedArgs,
    },

    /// Export the point features as CSV
    Export {
        /// Output path for the points CSV
        #[arg(short = 'o', long)]
        output: String,

        #[command(flatten)]
        feed: FeedArgs,
    },

    /// Show the tooltip a feature would get when hovered
    Inspect {
        /// Feature identity (position in the feed)
        #[arg(long)]
        id: usize,

        /// Pointer longitude, for a hover on a wrapped world copy
        #[arg(long, allow_hyphen_values = true)]
        pointer_lng: Option<f64>,

        #[command(flatten)]
        feed: FeedArgs,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Snapshot { output, feed } => snapshot::run_snapshot(&feed, &output).await,
        Command::Stats { feed } => snapshot::run_stats(&feed).await,
        Command::Export { output, feed } => export::run_export(&feed, &output).await,
        Command::Inspect {
            id,
            pointer_lng,
            feed,
        } => inspect::run_inspect(&feed, id, pointer_lng).await,
    }
}
