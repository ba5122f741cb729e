//! country-router entry point.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use country_router_core::Strategy;
use tracing_subscriber::EnvFilter;

use country_router_cli::config::Settings;
use country_router_cli::dataset::Dataset;
use country_router_cli::listing::{list_countries, SortKey};
use country_router_cli::neighborhood::country_view;
use country_router_cli::route::plan_route;
use country_router_cli::status::StatusReport;
use country_router_cli::util::resolve_country;

/// Browse country borders and find the shortest route across them.
#[derive(Parser, Debug)]
#[command(name = "country-router", version, about)]
struct Cli {
    /// TOML settings file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Country dataset (REST Countries v2 JSON). Overrides the settings file.
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List countries.
    List {
        /// name, population, or area.
        #[arg(long, default_value = "name")]
        sort: String,
        /// Only countries with English as an official language.
        #[arg(long)]
        english: bool,
    },
    /// Show a country and its neighbours.
    Show {
        /// Three-letter code or numeric code.
        country: String,
    },
    /// Shortest route between two countries.
    Route {
        from: String,
        to: String,
        /// branch-and-bound or breadth-first.
        #[arg(long)]
        strategy: Option<Strategy>,
        /// Abort the search after this many milliseconds (0 = no limit).
        #[arg(long)]
        deadline_ms: Option<u64>,
    },
    /// Dataset summary.
    Status,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    let (strategy, deadline_ms) = match &cli.command {
        Commands::Route {
            strategy,
            deadline_ms,
            ..
        } => (*strategy, *deadline_ms),
        _ => (None, None),
    };
    settings.apply_overrides(cli.dataset.clone(), strategy, deadline_ms);
    settings.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .map_err(|e| anyhow!("invalid log_filter '{}': {}", settings.log_filter, e))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let dataset = Dataset::load(&settings.dataset)?;

    match cli.command {
        Commands::List { sort, english } => {
            for record in list_countries(&dataset, SortKey::from_key(&sort), english) {
                println!("{:>4}  {}  {}", record.numeric_id, record.code3, record.name);
            }
        }
        Commands::Show { country } => {
            let view = resolve_country(&dataset.graph, &country)
                .and_then(|id| country_view(&dataset, id))
                .ok_or_else(|| anyhow!("country '{}' not found", country))?;
            print!("{}", view);
        }
        Commands::Route { from, to, .. } => {
            let view = plan_route(&dataset, &settings, &from, Some(&to))?;
            println!("{}", view.render(&settings.separator));
        }
        Commands::Status => {
            print!("{}", StatusReport::new(&settings.dataset, &dataset));
        }
    }

    Ok(())
}
