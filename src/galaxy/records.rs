use crate::galaxy::factions::FactionId;
use crate::generation::spectral::SpectralClass;
use bevy_color::Srgba;
use bevy_math::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

pub type StarId = u32;
pub type PlanetId = u32;
pub type AsteroidId = u32;

/// Id of the star fixed at the galaxy origin
pub const ORIGIN_STAR_ID: StarId = 0;

/// Planet ids are unique within a star only: `star_id * 100 + local_index`
pub const PLANET_ID_STRIDE: u32 = 100;

pub const MIN_HABITABILITY: u8 = 0;
pub const MAX_HABITABILITY: u8 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarRecord {
    pub id: StarId,
    pub name: String,
    pub spectral_class: SpectralClass,
    /// Always `spectral_class.color()`
    pub color: Srgba,
    /// Informational only; planet population draws its own count
    pub planet_count_hint: u32,
    pub position: Vec2,
}

impl StarRecord {
    pub fn new(
        id: StarId,
        name: String,
        spectral_class: SpectralClass,
        planet_count_hint: u32,
        position: Vec2,
    ) -> Self {
        Self {
            id,
            name,
            spectral_class,
            color: spectral_class.color(),
            planet_count_hint,
            position,
        }
    }

    pub fn is_origin(&self) -> bool {
        self.id == ORIGIN_STAR_ID
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlanetType {
    Continental,
    Desert,
    Ocean,
    GasGiant,
    Arctic,
    Lava,
    DryTerran,
}

struct PlanetTypeInfo {
    base_habitability: u8,
    palette: [Srgba; 2],
}

// Indexed by `PlanetType as usize`
const PLANET_TYPE_TABLE: [PlanetTypeInfo; 7] = [
    // Continental
    PlanetTypeInfo {
        base_habitability: 90,
        palette: [Srgba::new(0.36, 0.67, 0.36, 1.0), Srgba::new(0.22, 0.44, 0.22, 1.0)],
    },
    // Desert
    PlanetTypeInfo {
        base_habitability: 60,
        palette: [Srgba::new(0.93, 0.80, 0.45, 1.0), Srgba::new(0.85, 0.65, 0.13, 1.0)],
    },
    // Ocean
    PlanetTypeInfo {
        base_habitability: 80,
        palette: [Srgba::new(0.22, 0.44, 0.67, 1.0), Srgba::new(0.13, 0.27, 0.53, 1.0)],
    },
    // GasGiant
    PlanetTypeInfo {
        base_habitability: 0,
        palette: [Srgba::new(0.24, 0.13, 0.15, 1.0), Srgba::new(0.94, 0.71, 0.25, 1.0)],
    },
    // Arctic
    PlanetTypeInfo {
        base_habitability: 40,
        palette: [Srgba::new(0.90, 0.98, 1.0, 1.0), Srgba::new(0.56, 0.83, 0.94, 1.0)],
    },
    // Lava
    PlanetTypeInfo {
        base_habitability: 10,
        palette: [Srgba::new(0.98, 0.54, 0.20, 1.0), Srgba::new(0.67, 0.18, 0.18, 1.0)],
    },
    // DryTerran
    PlanetTypeInfo {
        base_habitability: 55,
        palette: [Srgba::new(0.87, 0.54, 0.20, 1.0), Srgba::new(0.53, 0.33, 0.18, 1.0)],
    },
];

impl PlanetType {
    pub const ALL: [PlanetType; 7] = [
        PlanetType::Continental,
        PlanetType::Desert,
        PlanetType::Ocean,
        PlanetType::GasGiant,
        PlanetType::Arctic,
        PlanetType::Lava,
        PlanetType::DryTerran,
    ];

    /// Types that G and K class stars draw from
    pub const TEMPERATE: [PlanetType; 3] =
        [PlanetType::Continental, PlanetType::Desert, PlanetType::Ocean];

    fn info(self) -> &'static PlanetTypeInfo {
        &PLANET_TYPE_TABLE[self as usize]
    }

    pub fn base_habitability(self) -> u8 {
        self.info().base_habitability
    }

    /// Primary and secondary surface colors
    pub fn palette(self) -> [Srgba; 2] {
        self.info().palette
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            PlanetType::Continental => "Continental",
            PlanetType::Desert => "Desert",
            PlanetType::Ocean => "Ocean",
            PlanetType::GasGiant => "Gas Giant",
            PlanetType::Arctic => "Arctic",
            PlanetType::Lava => "Lava",
            PlanetType::DryTerran => "Dry Terran",
        };
        write!(f, "{}", str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlanetModifier {
    AncientRuins,
    TectonicInstability,
    Storms,
    Wildlife,
    UnusualGeology,
}

impl fmt::Display for PlanetModifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            PlanetModifier::AncientRuins => "Ancient Ruins",
            PlanetModifier::TectonicInstability => "Tectonic Instability",
            PlanetModifier::Storms => "Storms",
            PlanetModifier::Wildlife => "Wildlife",
            PlanetModifier::UnusualGeology => "Unusual Geology",
        };
        write!(f, "{}", str)
    }
}

/// Per-turn output of a planet; each value in [0, 6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceYield {
    pub energy: u8,
    pub minerals: u8,
    pub food: u8,
}

impl fmt::Display for ResourceYield {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Energy: {}, Minerals: {}, Food: {}",
            self.energy, self.minerals, self.food
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetRecord {
    pub id: PlanetId,
    pub name: String,
    pub planet_type: PlanetType,
    pub size: u32,
    /// Always within [0, 100]
    pub habitability: u8,
    pub resources: ResourceYield,
    pub modifiers: BTreeSet<PlanetModifier>,
    /// Owner of the star when the planet was generated
    pub owner: Option<FactionId>,
}

impl PlanetRecord {
    pub fn planet_id(star: StarId, local_index: u32) -> PlanetId {
        star * PLANET_ID_STRIDE + local_index
    }

    pub fn star_id(&self) -> StarId {
        self.id / PLANET_ID_STRIDE
    }

    pub fn palette(&self) -> [Srgba; 2] {
        self.planet_type.palette()
    }

    pub fn modifiers_label(&self) -> String {
        if self.modifiers.is_empty() {
            return "None".to_string();
        }
        self.modifiers
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Clamp a raw habitability score into [0, 100]
pub fn clamp_habitability(value: i32) -> u8 {
    value.clamp(MIN_HABITABILITY as i32, MAX_HABITABILITY as i32) as u8
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidRecord {
    pub id: AsteroidId,
    pub name: String,
    pub position: Vec2,
    pub size: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_habitability_table() {
        assert_eq!(PlanetType::GasGiant.base_habitability(), 0);
        assert_eq!(PlanetType::Lava.base_habitability(), 10);
        assert_eq!(PlanetType::Arctic.base_habitability(), 40);
        assert_eq!(PlanetType::DryTerran.base_habitability(), 55);
        assert_eq!(PlanetType::Desert.base_habitability(), 60);
        assert_eq!(PlanetType::Ocean.base_habitability(), 80);
        assert_eq!(PlanetType::Continental.base_habitability(), 90);
    }

    #[test]
    fn test_all_types_are_indexed_in_order() {
        for (index, planet_type) in PlanetType::ALL.iter().enumerate() {
            assert_eq!(*planet_type as usize, index);
        }
    }

    #[test]
    fn test_palette_lookup() {
        let [primary, _] = PlanetType::Ocean.palette();
        assert_eq!(primary, Srgba::new(0.22, 0.44, 0.67, 1.0));
    }

    #[test]
    fn test_clamp_habitability() {
        assert_eq!(clamp_habitability(-10), 0);
        assert_eq!(clamp_habitability(55), 55);
        assert_eq!(clamp_habitability(107), 100);
    }

    #[test]
    fn test_planet_id_encoding() {
        let id = PlanetRecord::planet_id(7, 3);
        assert_eq!(id, 703);

        let planet = PlanetRecord {
            id,
            name: "Zorvel".to_string(),
            planet_type: PlanetType::Desert,
            size: 12,
            habitability: 60,
            resources: ResourceYield::default(),
            modifiers: BTreeSet::new(),
            owner: None,
        };
        assert_eq!(planet.star_id(), 7);
        assert_eq!(planet.modifiers_label(), "None");
    }

    #[test]
    fn test_resource_display() {
        let resources = ResourceYield {
            energy: 1,
            minerals: 4,
            food: 0,
        };
        assert_eq!(resources.to_string(), "Energy: 1, Minerals: 4, Food: 0");
    }

    #[test]
    fn test_modifiers_label() {
        let planet = PlanetRecord {
            id: 0,
            name: "Kelth".to_string(),
            planet_type: PlanetType::Lava,
            size: 20,
            habitability: 5,
            resources: ResourceYield::default(),
            modifiers: [PlanetModifier::TectonicInstability, PlanetModifier::AncientRuins]
                .into_iter()
                .collect(),
            owner: Some(FactionId::PLAYER),
        };
        assert_eq!(
            planet.modifiers_label(),
            "Ancient Ruins, Tectonic Instability"
        );
    }
}
