use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Minimum distance between two stars, constrained to [0.0, 100000.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct StarSeparation(f32);

impl StarSeparation {
    const MIN: f32 = 0.0;
    const MAX: f32 = 100_000.0;

    pub fn new(value: f32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for StarSeparation {
    fn default() -> Self {
        Self::new(200.0)
    }
}

/// Minimum distance between faction homeworlds, constrained to [0.0, 1000000.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct HomeworldSeparation(f32);

impl HomeworldSeparation {
    const MIN: f32 = 0.0;
    const MAX: f32 = 1_000_000.0;

    pub fn new(value: f32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for HomeworldSeparation {
    fn default() -> Self {
        Self::new(5000.0)
    }
}

/// Minimum asteroid-to-star distance, constrained to [0.0, 100000.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct AsteroidClearance(f32);

impl AsteroidClearance {
    const MIN: f32 = 0.0;
    const MAX: f32 = 100_000.0;

    pub fn new(value: f32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for AsteroidClearance {
    fn default() -> Self {
        Self::new(300.0)
    }
}

/// Territory influence cutoff radius, constrained to [1.0, 1000000.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct TerritoryRadius(f32);

impl TerritoryRadius {
    const MIN: f32 = 1.0;
    const MAX: f32 = 1_000_000.0;

    pub fn new(value: f32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for TerritoryRadius {
    fn default() -> Self {
        Self::new(1500.0)
    }
}
