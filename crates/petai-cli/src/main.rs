mod analytics;
mod places;

use clap::{Parser, Subcommand};
use petai_core::EventKind;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "petai-cli")]
#[command(about = "PetAI nearby search and interaction analytics")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search pet businesses near a coordinate, nearest first
    Nearby {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        /// Category key (e.g. veterinary, grooming, cafe); unknown keys search all
        #[arg(long, default_value = "all")]
        category: String,
        /// Search radius in meters (defaults to `PETAI_SEARCH_RADIUS_M`)
        #[arg(long)]
        radius: Option<u32>,
    },
    /// Show full detail for one place
    Place {
        place_id: String,
    },
    /// Record one interaction event in the analytics log
    Track {
        /// Event kind (e.g. `business_click`)
        #[arg(long)]
        kind: EventKind,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        business_name: Option<String>,
        #[arg(long, default_value = "cli")]
        source: String,
    },
    /// Summarize the analytics log
    Stats {
        /// Print the raw stats as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("petai-cli ready; run with --help for commands");
        return Ok(());
    };

    let config = petai_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match command {
        Commands::Nearby {
            lat,
            lng,
            category,
            radius,
        } => places::run_nearby(&config, lat, lng, &category, radius).await,
        Commands::Place { place_id } => places::run_place(&config, &place_id).await,
        Commands::Track {
            kind,
            category,
            business_name,
            source,
        } => {
            let event = petai_core::NewEvent {
                kind,
                category,
                business_name,
                source,
            };
            analytics::run_track(&config, event).await
        }
        Commands::Stats { json } => analytics::run_stats(&config, json).await,
    }
}

#[cfg(test)]
mod tests;
