use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tenki", about = "JMA multi-day forecast desk")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every known region name
    Regions,
    /// Find regions by keyword (substring match; --fuzzy for best-match ranking)
    Search {
        keyword: String,
        #[arg(long)]
        fuzzy: bool,
    },
    /// Show the multi-day forecast for a region (network first, stored snapshot fallback)
    Forecast {
        region: String,
    },
    /// Add a region to favorites (no-op if already present)
    FavAdd {
        region: String,
    },
    /// Remove a region from favorites
    FavRemove {
        region: String,
    },
    /// List favorite regions in the order they were added
    Favs,
    /// Show stored snapshots for a region, newest fetch first
    History {
        region: String,
        #[arg(long, default_value = "10")]
        limit: usize,
    },
    /// Delete snapshots fetched before the retention cutoff
    Purge {
        #[arg(long, default_value = "30")]
        days: i64,
    },
    /// Show store statistics
    Stats,
}
