use super::random::RandomSource;
use bevy_math::Vec2;

/// Inset from every edge of a placement region
pub const EDGE_MARGIN: f32 = 20.0;

/// Draws per placement before the last candidate is accepted anyway
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100;

/// Axis-aligned rectangle positions are drawn from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle of size `extent` centered on the origin
    pub fn centered(extent: Vec2) -> Self {
        let half = extent / 2.0;
        Self::new(-half, half)
    }

    pub fn inset(self, margin: f32) -> Self {
        Self::new(self.min + Vec2::splat(margin), self.max - Vec2::splat(margin))
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Uniform point inside the rectangle; x is drawn before y
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec2 {
        let x = rng.range_float(self.min.x, self.max.x);
        let y = rng.range_float(self.min.y, self.max.y);
        Vec2::new(x, y)
    }
}

/// Outcome of one rejection-sampled placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vec2,
    pub attempts: u32,
    /// The attempt budget ran out and `position` violates the constraint
    pub exhausted: bool,
}

/// Draw candidates from `bounds` until `is_valid` accepts one or
/// `max_attempts` draws were made; the last draw is kept either way
pub fn sample_position<R, F>(rng: &mut R, bounds: &Bounds, max_attempts: u32, mut is_valid: F) -> Placement
where
    R: RandomSource + ?Sized,
    F: FnMut(Vec2) -> bool,
{
    let max_attempts = max_attempts.max(1);
    let mut attempts = 0;

    loop {
        let position = bounds.sample(rng);
        attempts += 1;

        if is_valid(position) {
            return Placement {
                position,
                attempts,
                exhausted: false,
            };
        }
        if attempts >= max_attempts {
            return Placement {
                position,
                attempts,
                exhausted: true,
            };
        }
    }
}

/// True when `position` is at least `min_distance` from every point
pub fn is_clear_of<I>(position: Vec2, points: I, min_distance: f32) -> bool
where
    I: IntoIterator<Item = Vec2>,
{
    points
        .into_iter()
        .all(|point| point.distance(position) >= min_distance)
}

/// Aggregate placement diagnostics for a batch of records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementStats {
    pub placed: usize,
    pub exhausted: usize,
    pub total_attempts: u64,
}

impl PlacementStats {
    pub fn record(&mut self, placement: &Placement) {
        self.placed += 1;
        self.total_attempts += placement.attempts as u64;
        if placement.exhausted {
            self.exhausted += 1;
        }
    }

    /// Every placement satisfied its constraint
    pub fn all_satisfied(&self) -> bool {
        self.exhausted == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::random::galaxy_rng;

    #[test]
    fn test_centered_bounds_and_inset() {
        let bounds = Bounds::centered(Vec2::new(100.0, 60.0)).inset(EDGE_MARGIN);
        assert_eq!(bounds.min, Vec2::new(-30.0, -10.0));
        assert_eq!(bounds.max, Vec2::new(30.0, 10.0));
        assert_eq!(bounds.center(), Vec2::ZERO);
    }

    #[test]
    fn test_samples_stay_inside_bounds() {
        let mut rng = galaxy_rng(11);
        let bounds = Bounds::new(Vec2::new(10.0, -5.0), Vec2::new(20.0, 5.0));
        for _ in 0..500 {
            assert!(bounds.contains(bounds.sample(&mut rng)));
        }
    }

    #[test]
    fn test_accepts_first_valid_candidate() {
        let mut rng = galaxy_rng(12);
        let bounds = Bounds::centered(Vec2::splat(100.0));
        let placement = sample_position(&mut rng, &bounds, 10, |_| true);
        assert_eq!(placement.attempts, 1);
        assert!(!placement.exhausted);
    }

    #[test]
    fn test_gives_up_after_budget() {
        let mut rng = galaxy_rng(13);
        let bounds = Bounds::centered(Vec2::splat(100.0));
        let placement = sample_position(&mut rng, &bounds, 25, |_| false);
        assert_eq!(placement.attempts, 25);
        assert!(placement.exhausted);
        assert!(bounds.contains(placement.position));
    }

    #[test]
    fn test_zero_budget_still_draws_once() {
        let mut rng = galaxy_rng(14);
        let bounds = Bounds::centered(Vec2::splat(10.0));
        let placement = sample_position(&mut rng, &bounds, 0, |_| false);
        assert_eq!(placement.attempts, 1);
        assert!(placement.exhausted);
    }

    #[test]
    fn test_retries_until_constraint_met() {
        let mut rng = galaxy_rng(15);
        let bounds = Bounds::centered(Vec2::splat(100.0));
        let placement = sample_position(&mut rng, &bounds, 1000, |p| p.x > 40.0);
        assert!(!placement.exhausted);
        assert!(placement.position.x > 40.0);
    }

    #[test]
    fn test_is_clear_of() {
        let points = [Vec2::ZERO, Vec2::new(10.0, 0.0)];
        assert!(is_clear_of(Vec2::new(5.0, 0.0), points, 5.0));
        assert!(!is_clear_of(Vec2::new(5.0, 0.0), points, 5.1));
        assert!(is_clear_of(Vec2::ZERO, Vec::<Vec2>::new(), 100.0));
    }

    #[test]
    fn test_stats_record() {
        let mut stats = PlacementStats::default();
        stats.record(&Placement {
            position: Vec2::ZERO,
            attempts: 3,
            exhausted: false,
        });
        assert!(stats.all_satisfied());
        stats.record(&Placement {
            position: Vec2::ZERO,
            attempts: 100,
            exhausted: true,
        });
        assert_eq!(stats.placed, 2);
        assert_eq!(stats.exhausted, 1);
        assert_eq!(stats.total_attempts, 103);
        assert!(!stats.all_satisfied());
    }
}
