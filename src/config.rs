pub mod range_types;

use crate::errors::{GalaxyError, GalaxyResult};
use bevy_math::Vec2;
use range_types::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use validator::Validate;

/// Largest seed a settings file can hold (TOML integers are signed 64-bit)
pub const MAX_SEED: u64 = i64::MAX as u64;

/// Horizontal and vertical size of the galaxy, centered on the origin
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Validate)]
pub struct GalaxyExtent {
    #[validate(range(exclusive_min = 0.0))]
    pub width: f32,
    #[validate(range(exclusive_min = 0.0))]
    pub height: f32,
}

impl GalaxyExtent {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl Default for GalaxyExtent {
    fn default() -> Self {
        Self::new(20_000.0, 12_000.0)
    }
}

/// Inclusive range of planets generated per star
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Validate)]
pub struct PlanetsPerStar {
    #[validate(range(min = 1, max = 99))]
    pub min: u32,
    #[validate(range(min = 1, max = 99))]
    pub max: u32,
}

impl PlanetsPerStar {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

impl Default for PlanetsPerStar {
    fn default() -> Self {
        Self::new(1, 5)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Validate)]
#[serde(default)]
// NOTE: Table-valued fields stay at the end so the TOML output keeps plain keys first
pub struct GalaxySettings {
    /// Seed for the shared random stream; a random seed is drawn when absent.
    /// At most [`MAX_SEED`] so it survives a TOML round trip.
    pub seed: Option<u64>,

    // Stars
    #[validate(range(min = 1, max = 100_000))]
    pub star_count: u32,
    pub min_star_separation: StarSeparation,

    // Factions (upper bound is the size of the faction roster)
    #[validate(range(min = 1, max = 8))]
    pub faction_count: u32,
    pub min_homeworld_separation: HomeworldSeparation,

    // Asteroids
    pub asteroid_count: u32,
    pub min_asteroid_distance: AsteroidClearance,

    // Territory
    #[validate(range(min = 1, max = 1024))]
    pub territory_resolution: u32,
    pub territory_cutoff: TerritoryRadius,

    #[validate(nested)]
    pub extent: GalaxyExtent,
    // Planet ids are star_id * 100 + index, so a star holds at most 99 planets
    #[validate(nested)]
    pub planets_per_star: PlanetsPerStar,
}

impl Default for GalaxySettings {
    fn default() -> Self {
        Self {
            seed: None,

            star_count: 60,
            min_star_separation: StarSeparation::new(200.0),

            faction_count: 4,
            min_homeworld_separation: HomeworldSeparation::new(5000.0),

            asteroid_count: 40,
            min_asteroid_distance: AsteroidClearance::new(300.0),

            territory_resolution: 60,
            territory_cutoff: TerritoryRadius::new(1500.0),

            extent: GalaxyExtent::default(),
            planets_per_star: PlanetsPerStar::default(),
        }
    }
}

impl GalaxySettings {
    /// Validate the settings, reporting every failing field
    pub fn validated(self) -> GalaxyResult<Self> {
        self.validate().map_err(|validation_errors| {
            let error_details = validation_errors
                .field_errors()
                .iter()
                .map(|(field, errors)| {
                    let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                    format!("{field}: {}", error_msgs.join(", "))
                })
                .collect::<Vec<String>>()
                .join("; ");

            GalaxyError::InvalidSettings {
                reason: if error_details.is_empty() {
                    validation_errors.to_string()
                } else {
                    error_details
                },
            }
        })?;

        if let Some(seed) = self.seed.filter(|seed| *seed > MAX_SEED) {
            return Err(GalaxyError::InvalidSettings {
                reason: format!("seed: {seed} exceeds the largest storable seed {MAX_SEED}"),
            });
        }

        Ok(self)
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().and_then(|mut path| {
        path.push("galaxygen");
        fs::create_dir_all(&path).ok()?;
        path.push("config.toml");
        Some(path)
    })
}

/// Load settings from the user config directory, falling back to defaults
pub fn load_settings() -> GalaxySettings {
    if let Some(config_path) = get_config_path() {
        if let Ok(contents) = fs::read_to_string(&config_path) {
            if let Ok(settings) = toml::from_str::<GalaxySettings>(&contents) {
                return settings;
            }
        }
    }
    GalaxySettings::default()
}

/// Load and validate settings from an explicit file
pub fn load_settings_from(path: &Path) -> GalaxyResult<GalaxySettings> {
    if !path.exists() {
        return Err(GalaxyError::ConfigFileNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path)?;
    parse_settings(&contents)
}

pub fn parse_settings(contents: &str) -> GalaxyResult<GalaxySettings> {
    toml::from_str::<GalaxySettings>(contents)?.validated()
}

/// Save settings to `path`, or to the user config directory when no path is given
pub fn save_settings(settings: &GalaxySettings, path: Option<&Path>) -> GalaxyResult<PathBuf> {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => get_config_path().ok_or(GalaxyError::ConfigDirNotFound)?,
    };

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let contents = toml::to_string_pretty(settings)?;
    fs::write(&config_path, contents)?;
    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = GalaxySettings::default().validated().unwrap();
        assert_eq!(settings.star_count, 60);
        assert_eq!(settings.faction_count, 4);
        assert_eq!(settings.min_star_separation.get(), 200.0);
        assert_eq!(settings.territory_resolution, 60);
    }

    #[test]
    fn test_zero_star_count_rejected() {
        let settings = GalaxySettings {
            star_count: 0,
            ..Default::default()
        };
        let err = settings.validated().unwrap_err();
        assert!(err.to_string().contains("star_count"));
    }

    #[test]
    fn test_too_many_factions_rejected() {
        let settings = GalaxySettings {
            faction_count: 9,
            ..Default::default()
        };
        assert!(matches!(
            settings.validated(),
            Err(GalaxyError::InvalidSettings { .. })
        ));
    }

    #[test]
    fn test_non_positive_extent_rejected() {
        let settings = GalaxySettings {
            extent: GalaxyExtent::new(0.0, 100.0),
            ..Default::default()
        };
        assert!(settings.validated().is_err());
    }

    #[test]
    fn test_parse_partial_settings() {
        let settings = parse_settings(
            r#"
            seed = 42
            star_count = 12
            faction_count = 2

            [extent]
            width = 5000.0
            height = 3000.0
            "#,
        )
        .unwrap();

        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.star_count, 12);
        assert_eq!(settings.faction_count, 2);
        assert_eq!(settings.extent, GalaxyExtent::new(5000.0, 3000.0));
        // Unspecified fields keep their defaults
        assert_eq!(settings.asteroid_count, 40);
        assert_eq!(settings.planets_per_star, PlanetsPerStar::new(1, 5));
    }

    #[test]
    fn test_parse_invalid_toml() {
        assert!(matches!(
            parse_settings("star_count = \"many\""),
            Err(GalaxyError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join(format!("galaxygen-config-test-{}", std::process::id()));
        let path = dir.join("config.toml");

        let settings = GalaxySettings {
            seed: Some(7),
            star_count: 25,
            ..Default::default()
        };
        let written = save_settings(&settings, Some(&path)).unwrap();
        assert_eq!(written, path);

        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded, settings);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_seed_must_fit_settings_file() {
        let settings = GalaxySettings {
            seed: Some(MAX_SEED + 1),
            ..Default::default()
        };
        let err = settings.validated().unwrap_err();
        assert!(err.to_string().contains("seed"));

        let dir = std::env::temp_dir().join(format!("galaxygen-seed-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let settings = GalaxySettings {
            seed: Some(MAX_SEED),
            ..Default::default()
        }
        .validated()
        .unwrap();
        save_settings(&settings, Some(&path)).unwrap();
        assert_eq!(load_settings_from(&path).unwrap().seed, Some(MAX_SEED));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_file_reported() {
        let path = Path::new("definitely/not/here/config.toml");
        assert!(matches!(
            load_settings_from(path),
            Err(GalaxyError::ConfigFileNotFound { .. })
        ));
    }
}
