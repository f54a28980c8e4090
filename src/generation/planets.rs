use super::names::body_name;
use super::random::RandomSource;
use super::spectral::SpectralClass;
use crate::config::PlanetsPerStar;
use crate::errors::{GalaxyError, GalaxyResult};
use crate::galaxy::{
    FactionId, OwnershipMap, PlanetModifier, PlanetRecord, PlanetType, ResourceYield, StarId,
    StarRecord, clamp_habitability,
};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

/// Planet sizes are drawn from [10, 25)
const PLANET_SIZE_RANGE: (i32, i32) = (10, 25);
/// Uniform habitability jitter in [-10, 10]
const HABITABILITY_JITTER: i32 = 10;
/// Habitability a planet must exceed to count as a prime world
const PRIME_WORLD_THRESHOLD: u8 = 90;
/// Forced habitability band for the origin star's prime world, [99, 100]
const PRIME_WORLD_RANGE: (i32, i32) = (99, 101);
/// Each resource yield is drawn from [0, 6)
const RESOURCE_RANGE: (i32, i32) = (0, 6);

const ANCIENT_RUINS_CHANCE: f32 = 0.2;
const TECTONIC_INSTABILITY_CHANCE: f32 = 0.1;

/// Strategy that fills a star system with planets
pub trait PlanetPopulator {
    /// Generate the planets of `star`. `owner` is stamped onto every planet.
    fn populate(
        &self,
        star: &StarRecord,
        owner: Option<FactionId>,
        rng: &mut dyn RandomSource,
    ) -> Vec<PlanetRecord>;
}

/// Star-class weighted population with per-type habitability
#[derive(Debug, Clone)]
pub struct DefaultPopulator {
    pub planets_per_star: PlanetsPerStar,
}

impl DefaultPopulator {
    pub fn new(planets_per_star: PlanetsPerStar) -> Self {
        Self { planets_per_star }
    }
}

impl Default for DefaultPopulator {
    fn default() -> Self {
        Self::new(PlanetsPerStar::default())
    }
}

impl PlanetPopulator for DefaultPopulator {
    fn populate(
        &self,
        star: &StarRecord,
        owner: Option<FactionId>,
        rng: &mut dyn RandomSource,
    ) -> Vec<PlanetRecord> {
        // The star's planet-count hint is not consulted here
        let count = rng.range_int(
            self.planets_per_star.min as i32,
            self.planets_per_star.max as i32 + 1,
        ) as u32;

        let mut planets = Vec::with_capacity(count as usize);
        let mut has_prime_world = false;

        for index in 0..count {
            let planet_type = select_planet_type(star.spectral_class, rng);
            let size = rng.range_int(PLANET_SIZE_RANGE.0, PLANET_SIZE_RANGE.1) as u32;

            let jitter = rng.range_int(-HABITABILITY_JITTER, HABITABILITY_JITTER + 1);
            let mut habitability = clamp_habitability(planet_type.base_habitability() as i32 + jitter);

            if star.is_origin() {
                if habitability > PRIME_WORLD_THRESHOLD {
                    has_prime_world = true;
                } else if index + 1 == count && !has_prime_world {
                    habitability = clamp_habitability(
                        rng.range_int(PRIME_WORLD_RANGE.0, PRIME_WORLD_RANGE.1),
                    );
                    has_prime_world = true;
                    debug!("Forced a prime world at {} ({})", star.name, habitability);
                }
            }

            let resources = ResourceYield {
                energy: rng.range_int(RESOURCE_RANGE.0, RESOURCE_RANGE.1) as u8,
                minerals: rng.range_int(RESOURCE_RANGE.0, RESOURCE_RANGE.1) as u8,
                food: rng.range_int(RESOURCE_RANGE.0, RESOURCE_RANGE.1) as u8,
            };
            let modifiers = roll_modifiers(rng);
            let name = body_name(rng);

            planets.push(PlanetRecord {
                id: PlanetRecord::planet_id(star.id, index),
                name,
                planet_type,
                size,
                habitability,
                resources,
                modifiers,
                owner,
            });
        }

        planets
    }
}

/// O and B stars only host gas giants; G and K stars host temperate worlds;
/// everything else draws from the full type list
pub fn select_planet_type<R: RandomSource + ?Sized>(
    spectral_class: SpectralClass,
    rng: &mut R,
) -> PlanetType {
    match spectral_class {
        SpectralClass::O | SpectralClass::B => PlanetType::GasGiant,
        SpectralClass::G | SpectralClass::K => {
            let index = rng.range_int(0, PlanetType::TEMPERATE.len() as i32) as usize;
            PlanetType::TEMPERATE[index]
        }
        SpectralClass::A | SpectralClass::F | SpectralClass::M => {
            let index = rng.range_int(0, PlanetType::ALL.len() as i32) as usize;
            PlanetType::ALL[index]
        }
    }
}

/// Independent rolls for the two naturally occurring modifiers
pub fn roll_modifiers<R: RandomSource + ?Sized>(rng: &mut R) -> BTreeSet<PlanetModifier> {
    let mut modifiers = BTreeSet::new();
    if rng.chance(ANCIENT_RUINS_CHANCE) {
        modifiers.insert(PlanetModifier::AncientRuins);
    }
    if rng.chance(TECTONIC_INSTABILITY_CHANCE) {
        modifiers.insert(PlanetModifier::TectonicInstability);
    }
    modifiers
}

/// Populate every star in id order. Fails when no population strategy is
/// available, so an empty system always means a star with no planets.
pub fn populate_planets<R: RandomSource>(
    stars: &[StarRecord],
    ownership: &OwnershipMap,
    populator: Option<&dyn PlanetPopulator>,
    rng: &mut R,
) -> GalaxyResult<BTreeMap<StarId, Vec<PlanetRecord>>> {
    let populator = populator.ok_or(GalaxyError::MissingPopulator)?;

    let mut systems = BTreeMap::new();
    for star in stars {
        let planets = populator.populate(star, ownership.owner_of(star.id), &mut *rng);
        systems.insert(star.id, planets);
    }

    info!(
        "Populated {} star systems with {} planets",
        systems.len(),
        systems.values().map(Vec::len).sum::<usize>()
    );
    Ok(systems)
}
