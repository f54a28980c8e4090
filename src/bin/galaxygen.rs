use clap::Parser;
use galaxygen::config::{self, GalaxyExtent, GalaxySettings};
use galaxygen::{GalaxyGenerator, GalaxyResult, TerritoryGrid};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

mod cli {
    pub mod cli_utils;
}

use cli::cli_utils::*;

#[derive(Parser, Clone)]
#[command(name = "galaxygen")]
#[command(about = "Generate a seeded 2D galaxy with factions, planets and asteroids")]
struct Args {
    /// Random seed for reproducible generation
    #[arg(long)]
    seed: Option<u64>,

    /// Number of stars, including the origin star
    #[arg(long)]
    stars: Option<u32>,

    /// Galaxy size in world units (format: WIDTHxHEIGHT)
    #[arg(long)]
    size: Option<String>,

    /// Number of factions (1-8); faction 0 is the player
    #[arg(long)]
    factions: Option<u32>,

    /// Number of asteroids
    #[arg(long)]
    asteroids: Option<u32>,

    /// Settings file to load instead of the user config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the ASCII territory map
    #[arg(long)]
    territory: bool,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

/// Command line values take precedence over the loaded settings
fn apply_overrides(args: &Args, mut settings: GalaxySettings) -> GalaxyResult<GalaxySettings> {
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if let Some(stars) = args.stars {
        settings.star_count = stars;
    }
    if let Some(size) = &args.size {
        let (width, height) = parse_size(size)?;
        settings.extent = GalaxyExtent::new(width, height);
    }
    if let Some(factions) = args.factions {
        settings.faction_count = factions;
    }
    if let Some(asteroids) = args.asteroids {
        settings.asteroid_count = asteroids;
    }

    settings.validated()
}

fn main() -> GalaxyResult<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let loaded = match &args.config {
        Some(path) => config::load_settings_from(path)?,
        None => config::load_settings(),
    };
    let settings = apply_overrides(&args, loaded)?;

    if args.save_config {
        let path = config::save_settings(&settings, args.config.as_deref())?;
        info!("Saved settings to {}", path.display());
    }

    let galaxy = GalaxyGenerator::new(settings.clone()).generate()?;
    print!("{}", galaxy_summary(&galaxy));

    if args.territory {
        let map = TerritoryGrid::from_settings(&settings).compute(&galaxy.stars, &galaxy.ownership);
        println!();
        print!("{}", territory_report(&map));
    }

    Ok(())
}
