use super::names::asteroid_name;
use super::random::RandomSource;
use super::sampling::{
    Bounds, EDGE_MARGIN, MAX_PLACEMENT_ATTEMPTS, PlacementStats, is_clear_of, sample_position,
};
use crate::galaxy::{AsteroidRecord, StarRecord};
use bevy_math::Vec2;
use tracing::{info, warn};

/// Asteroid sizes are drawn from [20, 100)
const ASTEROID_SIZE_RANGE: (f32, f32) = (20.0, 100.0);

#[derive(Debug, Clone, PartialEq)]
pub struct AsteroidField {
    pub asteroids: Vec<AsteroidRecord>,
    pub stats: PlacementStats,
}

impl AsteroidField {
    pub fn into_asteroids(self) -> Vec<AsteroidRecord> {
        self.asteroids
    }
}

/// Scatters asteroids over the whole galaxy, away from stars.
/// Asteroids are never checked against each other.
#[derive(Debug, Clone)]
pub struct AsteroidFieldGenerator {
    pub min_distance_from_stars: f32,
    pub edge_margin: f32,
    pub max_attempts: u32,
}

impl AsteroidFieldGenerator {
    pub fn new(min_distance_from_stars: f32) -> Self {
        Self {
            min_distance_from_stars,
            edge_margin: EDGE_MARGIN,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        count: u32,
        extent: Vec2,
        stars: &[StarRecord],
    ) -> AsteroidField {
        let bounds = Bounds::centered(extent).inset(self.edge_margin);
        let mut asteroids = Vec::with_capacity(count as usize);
        let mut stats = PlacementStats::default();

        for id in 0..count {
            let placement = sample_position(rng, &bounds, self.max_attempts, |candidate| {
                is_clear_of(
                    candidate,
                    stars.iter().map(|s| s.position),
                    self.min_distance_from_stars,
                )
            });
            stats.record(&placement);

            let name = asteroid_name(rng);
            let size = rng.range_float(ASTEROID_SIZE_RANGE.0, ASTEROID_SIZE_RANGE.1);

            asteroids.push(AsteroidRecord {
                id,
                name,
                position: placement.position,
                size,
            });
        }

        if !stats.all_satisfied() {
            warn!(
                "{} of {} asteroids landed within {} units of a star",
                stats.exhausted, count, self.min_distance_from_stars
            );
        }
        info!("Generated {} asteroids", asteroids.len());

        AsteroidField { asteroids, stats }
    }
}
