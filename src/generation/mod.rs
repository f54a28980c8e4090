pub mod asteroids;
pub mod homeworlds;
pub mod names;
pub mod planets;
pub mod random;
pub mod sampling;
pub mod spectral;
pub mod stars;

use crate::config::{GalaxySettings, MAX_SEED};
use crate::errors::{GalaxyError, GalaxyResult};
use crate::galaxy::{
    AsteroidRecord, Galaxy, MAX_FACTIONS, OwnershipMap, PlanetRecord, StarId, StarRecord,
};
use asteroids::AsteroidFieldGenerator;
use bevy_math::Vec2;
use homeworlds::HomeworldAssignor;
use planets::{DefaultPopulator, PlanetPopulator};
use random::{RandomSource, galaxy_rng};
use stars::StarFieldGenerator;
use std::collections::BTreeMap;
use tracing::info;

pub use planets::populate_planets;

/// Place `count` stars with the default separation and attempt budget
pub fn generate_stars<R: RandomSource + ?Sized>(
    rng: &mut R,
    count: u32,
    extent: Vec2,
    faction_count: u32,
    min_separation: f32,
) -> Vec<StarRecord> {
    StarFieldGenerator::new(min_separation)
        .generate(rng, count, extent, faction_count)
        .into_stars()
}

pub fn assign_homeworlds(
    stars: &[StarRecord],
    faction_count: u32,
    extent: Vec2,
    min_homeworld_separation: f32,
) -> OwnershipMap {
    HomeworldAssignor::new(extent, min_homeworld_separation).assign(stars, faction_count)
}

pub fn generate_asteroids<R: RandomSource + ?Sized>(
    rng: &mut R,
    count: u32,
    extent: Vec2,
    stars: &[StarRecord],
    min_distance_from_stars: f32,
) -> Vec<AsteroidRecord> {
    AsteroidFieldGenerator::new(min_distance_from_stars)
        .generate(rng, count, extent, stars)
        .into_asteroids()
}

/// Runs the full pipeline on one random stream:
/// stars, homeworlds, planets, then asteroids
pub struct GalaxyGenerator {
    settings: GalaxySettings,
    populator: Option<Box<dyn PlanetPopulator>>,
}

impl GalaxyGenerator {
    pub fn new(settings: GalaxySettings) -> Self {
        let populator = DefaultPopulator::new(settings.planets_per_star);
        Self {
            settings,
            populator: Some(Box::new(populator)),
        }
    }

    pub fn with_populator(mut self, populator: Box<dyn PlanetPopulator>) -> Self {
        self.populator = Some(populator);
        self
    }

    pub fn without_populator(mut self) -> Self {
        self.populator = None;
        self
    }

    pub fn settings(&self) -> &GalaxySettings {
        &self.settings
    }

    pub fn generate(&self) -> GalaxyResult<Galaxy> {
        let settings = &self.settings;
        if settings.faction_count as usize > MAX_FACTIONS {
            return Err(GalaxyError::InvalidSettings {
                reason: format!(
                    "faction_count {} exceeds the roster of {} factions",
                    settings.faction_count, MAX_FACTIONS
                ),
            });
        }

        // Drawn seeds stay storable in a settings file
        let seed = settings
            .seed
            .unwrap_or_else(|| rand::random::<u64>() & MAX_SEED);
        let mut rng = galaxy_rng(seed);
        let extent = settings.extent.as_vec2();

        info!(
            "Generating galaxy (seed {}, {} stars, {} factions, {}x{})",
            seed, settings.star_count, settings.faction_count, extent.x, extent.y
        );

        let star_field = StarFieldGenerator::new(settings.min_star_separation.get()).generate(
            &mut rng,
            settings.star_count,
            extent,
            settings.faction_count,
        );
        let stars = star_field.stars;

        let ownership = assign_homeworlds(
            &stars,
            settings.faction_count,
            extent,
            settings.min_homeworld_separation.get(),
        );

        let planets: BTreeMap<StarId, Vec<PlanetRecord>> =
            populate_planets(&stars, &ownership, self.populator.as_deref(), &mut rng)?;

        let asteroid_field = AsteroidFieldGenerator::new(settings.min_asteroid_distance.get())
            .generate(&mut rng, settings.asteroid_count, extent, &stars);

        info!("Galaxy generation complete");

        Ok(Galaxy {
            seed,
            extent,
            faction_count: settings.faction_count,
            stars,
            ownership,
            planets,
            asteroids: asteroid_field.asteroids,
            star_stats: star_field.stats,
            asteroid_stats: asteroid_field.stats,
        })
    }
}
