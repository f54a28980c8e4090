use super::names::body_name;
use super::random::RandomSource;
use super::sampling::{
    Bounds, EDGE_MARGIN, MAX_PLACEMENT_ATTEMPTS, PlacementStats, is_clear_of, sample_position,
};
use super::spectral::random_spectral_class;
use crate::galaxy::{ORIGIN_STAR_ID, StarId, StarRecord};
use bevy_math::Vec2;
use tracing::{debug, info, warn};

/// Planet-count hints are drawn from [1, 10)
const PLANET_HINT_RANGE: (i32, i32) = (1, 10);

/// Stars plus diagnostics for the placements that produced them
#[derive(Debug, Clone, PartialEq)]
pub struct StarField {
    pub stars: Vec<StarRecord>,
    pub stats: PlacementStats,
    /// Stars accepted after the attempt budget ran out
    pub crowded: Vec<StarId>,
}

impl StarField {
    pub fn into_stars(self) -> Vec<StarRecord> {
        self.stars
    }
}

/// Vertical band of the galaxy reserved for `band` out of `faction_count`,
/// spanning the full height
pub fn faction_band(extent: Vec2, faction_count: u32, band: u32) -> Bounds {
    let galaxy = Bounds::centered(extent);
    let band_width = extent.x / faction_count.max(1) as f32;
    let start = galaxy.min.x + band as f32 * band_width;

    Bounds::new(
        Vec2::new(start, galaxy.min.y),
        Vec2::new(start + band_width, galaxy.max.y),
    )
}

/// Midpoint of a faction's band on the horizontal axis (y = 0)
pub fn band_center(extent: Vec2, faction_count: u32, band: u32) -> Vec2 {
    let bounds = faction_band(extent, faction_count, band);
    Vec2::new(bounds.center().x, 0.0)
}

/// Band a star index is placed in. Bands fill in generation order,
/// so stars spread evenly across factions rather than at random.
pub fn target_band(index: u32, star_count: u32, faction_count: u32) -> u32 {
    if star_count == 0 {
        return 0;
    }
    (index as u64 * faction_count as u64 / star_count as u64) as u32
}

/// Places stars into per-faction bands with a minimum separation
#[derive(Debug, Clone)]
pub struct StarFieldGenerator {
    pub min_separation: f32,
    pub edge_margin: f32,
    pub max_attempts: u32,
}

impl StarFieldGenerator {
    pub fn new(min_separation: f32) -> Self {
        Self {
            min_separation,
            edge_margin: EDGE_MARGIN,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Generate `star_count` stars. Star 0 sits at the origin; star `i`
    /// is placed in band `target_band(i, ..)`.
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        star_count: u32,
        extent: Vec2,
        faction_count: u32,
    ) -> StarField {
        info!(
            "Generating {} stars across {} faction bands",
            star_count, faction_count
        );

        let mut stars: Vec<StarRecord> = Vec::with_capacity(star_count as usize);
        let mut stats = PlacementStats::default();
        let mut crowded = Vec::new();

        if star_count == 0 {
            return StarField {
                stars,
                stats,
                crowded,
            };
        }

        stars.push(Self::create_star(rng, ORIGIN_STAR_ID, Vec2::ZERO));

        for index in 1..star_count {
            let band = target_band(index, star_count, faction_count);
            let bounds = faction_band(extent, faction_count, band).inset(self.edge_margin);

            let placement = sample_position(rng, &bounds, self.max_attempts, |candidate| {
                is_clear_of(
                    candidate,
                    stars.iter().map(|s| s.position),
                    self.min_separation,
                )
            });
            stats.record(&placement);

            if placement.exhausted {
                debug!(
                    "Star {} accepted at {:?} after {} attempts without clearance",
                    index, placement.position, placement.attempts
                );
                crowded.push(index);
            }

            stars.push(Self::create_star(rng, index, placement.position));
        }

        if !crowded.is_empty() {
            warn!(
                "{} of {} stars could not keep {} units of separation",
                crowded.len(),
                star_count,
                self.min_separation
            );
        }
        info!("Generated {} stars", stars.len());

        StarField {
            stars,
            stats,
            crowded,
        }
    }

    fn create_star<R: RandomSource + ?Sized>(rng: &mut R, id: StarId, position: Vec2) -> StarRecord {
        let spectral_class = random_spectral_class(rng);
        let name = body_name(rng);
        let planet_count_hint = rng.range_int(PLANET_HINT_RANGE.0, PLANET_HINT_RANGE.1) as u32;
        StarRecord::new(id, name, spectral_class, planet_count_hint, position)
    }
}
