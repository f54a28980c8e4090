pub mod config;
pub mod errors;
pub mod galaxy;
pub mod generation;
pub mod territory;

// Selective re-exports for external consumers

// Errors and settings
pub use config::GalaxySettings;
pub use errors::{GalaxyError, GalaxyResult};

// Core records
pub use galaxy::{
    AsteroidRecord, FactionId, Galaxy, OwnershipMap, PlanetRecord, StarRecord, UNCLAIMED,
};

// Generation entry points
pub use generation::planets::{DefaultPopulator, PlanetPopulator};
pub use generation::random::{RandomSource, galaxy_rng};
pub use generation::{
    GalaxyGenerator, assign_homeworlds, generate_asteroids, generate_stars, populate_planets,
};

// Territory queries
pub use territory::{TerritoryGrid, TerritoryMap, territory_owner_at};
