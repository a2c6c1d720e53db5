use clap::Parser;
use tenki::application::fetch::ForecastOrigin;
use tenki::cli::commands::{Cli, Commands};
use tenki::WeatherDesk;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let db_path = std::env::var("TENKI_DB").unwrap_or_else(|_| "./tenki.db".into());
    let cache_path = std::env::var("TENKI_REGISTRY_CACHE").unwrap_or_else(|_| "./area.json".into());

    let desk = match WeatherDesk::open(&db_path, &cache_path).await {
        Ok(desk) => desk,
        Err(e) => {
            eprintln!("Error initializing: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(desk, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(desk: WeatherDesk, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Regions => {
            for name in desk.regions() {
                println!("{name}");
            }
        }
        Commands::Search { keyword, fuzzy } => {
            let matches = if fuzzy {
                desk.search_fuzzy(&keyword)
            } else {
                desk.search(&keyword)
            };
            for name in &matches {
                println!("{name}");
            }
        }
        Commands::Forecast { region } => match desk.forecast(&region).await {
            Ok(outcome) => {
                match outcome.origin {
                    ForecastOrigin::Online => println!("# {region} (online)"),
                    ForecastOrigin::Session => println!("# {region} (session cache)"),
                    ForecastOrigin::Cached(fetched_at) => {
                        println!("# {region} (stored snapshot from {fetched_at})")
                    }
                }
                println!("{}", serde_json::to_string_pretty(&outcome.subregions)?);
            }
            Err(e) if e.is_no_data() => {
                eprintln!("No data available for {region}. Connect to the internet and retry.");
                std::process::exit(1);
            }
            Err(e) => return Err(e.into()),
        },
        Commands::FavAdd { region } => {
            if desk.region_code(&region).is_none() {
                tracing::warn!(%region, "adding a favorite the registry does not know");
            }
            desk.add_favorite(&region)?;
            println!("Added {region}");
        }
        Commands::FavRemove { region } => {
            desk.remove_favorite(&region)?;
            println!("Removed {region}");
        }
        Commands::Favs => {
            for fav in desk.favorites()? {
                println!("{}", fav.name);
            }
        }
        Commands::History { region, limit } => {
            let snapshots = desk.history(&region, limit)?;
            if snapshots.is_empty() {
                println!("No stored snapshots for {region}");
            } else {
                println!("{}", serde_json::to_string_pretty(&snapshots)?);
            }
        }
        Commands::Purge { days } => {
            let deleted = desk.purge(days)?;
            println!("Deleted {deleted} snapshots older than {days} days");
        }
        Commands::Stats => {
            let stats = desk.stats()?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }
    Ok(())
}
