pub mod factions;
pub mod records;

pub use factions::*;
pub use records::*;

use crate::generation::sampling::PlacementStats;
use bevy_math::Vec2;
use std::collections::BTreeMap;

/// Everything one generation pass produced
#[derive(Debug, Clone, PartialEq)]
pub struct Galaxy {
    pub seed: u64,
    pub extent: Vec2,
    pub faction_count: u32,
    pub stars: Vec<StarRecord>,
    pub ownership: OwnershipMap,
    pub planets: BTreeMap<StarId, Vec<PlanetRecord>>,
    pub asteroids: Vec<AsteroidRecord>,
    pub star_stats: PlacementStats,
    pub asteroid_stats: PlacementStats,
}

impl Galaxy {
    pub fn star(&self, id: StarId) -> Option<&StarRecord> {
        self.stars.get(id as usize)
    }

    pub fn origin_star(&self) -> Option<&StarRecord> {
        self.star(ORIGIN_STAR_ID)
    }

    /// Planets of a star; empty for unknown ids
    pub fn planets_of(&self, star: StarId) -> &[PlanetRecord] {
        self.planets.get(&star).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn planet(&self, id: PlanetId) -> Option<&PlanetRecord> {
        self.planets_of(id / PLANET_ID_STRIDE)
            .iter()
            .find(|p| p.id == id)
    }

    pub fn planet_count(&self) -> usize {
        self.planets.values().map(Vec::len).sum()
    }

    pub fn owner_name(&self, star: StarId) -> &'static str {
        owner_label(self.ownership.owner_of(star))
    }

    /// Best planet at the player's home system
    pub fn prime_world(&self) -> Option<&PlanetRecord> {
        self.planets_of(ORIGIN_STAR_ID)
            .iter()
            .max_by_key(|p| p.habitability)
    }

    pub fn describe_star(&self, id: StarId) -> Option<String> {
        let star = self.star(id)?;
        Some(format!(
            "Name: {}\nSpectral Class: {}\nPosition: ({:.1}, {:.1})\nEmpire: {}\nPlanets: {}",
            star.name,
            star.spectral_class,
            star.position.x,
            star.position.y,
            self.owner_name(id),
            self.planets_of(id).len()
        ))
    }

    pub fn describe_planet(&self, id: PlanetId) -> Option<String> {
        let planet = self.planet(id)?;
        Some(format!(
            "Name: {}\nType: {}\nSize: {}\nHabitability: {}\nEmpire: {}\nResources: {}\nModifiers: {}",
            planet.name,
            planet.planet_type,
            planet.size,
            planet.habitability,
            owner_label(planet.owner),
            planet.resources,
            planet.modifiers_label()
        ))
    }

    pub fn describe_asteroid(&self, id: AsteroidId) -> Option<String> {
        let asteroid = self.asteroids.get(id as usize)?;
        Some(format!(
            "Name: {}\nSize: {:.1}\nPosition: ({:.1}, {:.1})",
            asteroid.name, asteroid.size, asteroid.position.x, asteroid.position.y
        ))
    }
}

/// Display name of an owner, "Unclaimed" for `None`
pub fn owner_label(owner: Option<FactionId>) -> &'static str {
    match owner {
        Some(faction) => faction.name(),
        None => "Unclaimed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::spectral::SpectralClass;
    use std::collections::BTreeSet;

    fn small_galaxy() -> Galaxy {
        let stars = vec![
            StarRecord::new(0, "Solara".to_string(), SpectralClass::G, 4, Vec2::ZERO),
            StarRecord::new(1, "Vexmor".to_string(), SpectralClass::M, 2, Vec2::new(120.0, -40.5)),
        ];
        let mut ownership = OwnershipMap::new();
        ownership.claim(0, FactionId::PLAYER);
        ownership.close_over(&stars);

        let home = PlanetRecord {
            id: 0,
            name: "Kelora".to_string(),
            planet_type: PlanetType::Continental,
            size: 18,
            habitability: 99,
            resources: ResourceYield {
                energy: 2,
                minerals: 3,
                food: 5,
            },
            modifiers: BTreeSet::from([PlanetModifier::AncientRuins]),
            owner: Some(FactionId::PLAYER),
        };
        let rock = PlanetRecord {
            id: 1,
            name: "Duran".to_string(),
            planet_type: PlanetType::Lava,
            size: 11,
            habitability: 4,
            resources: ResourceYield::default(),
            modifiers: BTreeSet::new(),
            owner: Some(FactionId::PLAYER),
        };

        Galaxy {
            seed: 1,
            extent: Vec2::new(1_000.0, 1_000.0),
            faction_count: 1,
            stars,
            ownership,
            planets: BTreeMap::from([(0, vec![home, rock]), (1, Vec::new())]),
            asteroids: vec![AsteroidRecord {
                id: 0,
                name: "Zarku-Ast".to_string(),
                position: Vec2::new(300.0, 300.0),
                size: 42.5,
            }],
            star_stats: PlacementStats::default(),
            asteroid_stats: PlacementStats::default(),
        }
    }

    #[test]
    fn test_lookups() {
        let galaxy = small_galaxy();
        assert_eq!(galaxy.origin_star().map(|s| s.name.as_str()), Some("Solara"));
        assert_eq!(galaxy.planet_count(), 2);
        assert_eq!(galaxy.planet(1).map(|p| p.name.as_str()), Some("Duran"));
        assert!(galaxy.planet(100).is_none());
        assert!(galaxy.planets_of(9).is_empty());
        assert_eq!(galaxy.prime_world().map(|p| p.habitability), Some(99));
        assert_eq!(galaxy.owner_name(1), "Unclaimed");
    }

    #[test]
    fn test_star_description() {
        let galaxy = small_galaxy();
        let text = galaxy.describe_star(1).unwrap();
        assert_eq!(
            text,
            "Name: Vexmor\nSpectral Class: M\nPosition: (120.0, -40.5)\nEmpire: Unclaimed\nPlanets: 0"
        );
        assert!(galaxy.describe_star(5).is_none());
    }

    #[test]
    fn test_planet_description() {
        let galaxy = small_galaxy();
        let text = galaxy.describe_planet(0).unwrap();
        assert!(text.contains("Type: Continental"));
        assert!(text.contains("Empire: Terran Concord"));
        assert!(text.contains("Resources: Energy: 2, Minerals: 3, Food: 5"));
        assert!(text.ends_with("Modifiers: Ancient Ruins"));
    }

    #[test]
    fn test_asteroid_description() {
        let galaxy = small_galaxy();
        assert_eq!(
            galaxy.describe_asteroid(0).unwrap(),
            "Name: Zarku-Ast\nSize: 42.5\nPosition: (300.0, 300.0)"
        );
    }
}
