use crate::galaxy::records::{StarId, StarRecord};
use bevy_color::Srgba;
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Raw value used by display collaborators for a star nobody owns
pub const UNCLAIMED: i32 = -1;

/// A playable or AI-controlled owner with a reserved band of the galaxy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Faction {
    pub name: &'static str,
    pub color: Srgba,
}

/// Fixed, ordered faction roster. Index 0 is always the player.
pub const FACTIONS: [Faction; 8] = [
    Faction {
        name: "Terran Concord",
        color: Srgba::new(0.25, 0.55, 1.0, 1.0),
    },
    Faction {
        name: "Vexari Dominion",
        color: Srgba::new(0.9, 0.2, 0.25, 1.0),
    },
    Faction {
        name: "Sylari Collective",
        color: Srgba::new(0.3, 0.85, 0.4, 1.0),
    },
    Faction {
        name: "Korthan Hegemony",
        color: Srgba::new(0.95, 0.7, 0.15, 1.0),
    },
    Faction {
        name: "Nura Syndicate",
        color: Srgba::new(0.7, 0.35, 0.9, 1.0),
    },
    Faction {
        name: "Drelix Swarm",
        color: Srgba::new(0.55, 0.4, 0.2, 1.0),
    },
    Faction {
        name: "Oryn Free Worlds",
        color: Srgba::new(0.2, 0.85, 0.85, 1.0),
    },
    Faction {
        name: "Thalon Remnant",
        color: Srgba::new(0.85, 0.85, 0.85, 1.0),
    },
];

pub const MAX_FACTIONS: usize = FACTIONS.len();

/// Index into [`FACTIONS`]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Serialize, Deserialize,
)]
pub struct FactionId(u8);

impl FactionId {
    pub const PLAYER: FactionId = FactionId(0);

    pub fn new(index: u8) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn is_player(self) -> bool {
        self == Self::PLAYER
    }

    /// Roster entry for this faction, if the id is in range
    pub fn faction(self) -> Option<&'static Faction> {
        FACTIONS.get(self.index())
    }

    pub fn name(self) -> &'static str {
        self.faction().map_or("Unknown", |f| f.name)
    }
}

/// Star ownership after homeworld assignment. Every star id has an entry once
/// [`OwnershipMap::close_over`] has run; unclaimed stars map to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OwnershipMap {
    owners: BTreeMap<StarId, Option<FactionId>>,
}

impl OwnershipMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(&mut self, star: StarId, faction: FactionId) {
        self.owners.insert(star, Some(faction));
    }

    /// Record every star without an entry as unclaimed
    pub fn close_over(&mut self, stars: &[StarRecord]) {
        for star in stars {
            self.owners.entry(star.id).or_insert(None);
        }
    }

    pub fn contains(&self, star: StarId) -> bool {
        self.owners.contains_key(&star)
    }

    pub fn owner_of(&self, star: StarId) -> Option<FactionId> {
        self.owners.get(&star).copied().flatten()
    }

    /// Owner as the raw integer collaborators display: faction index or [`UNCLAIMED`].
    /// `None` only for ids the map has never seen.
    pub fn raw(&self, star: StarId) -> Option<i32> {
        self.owners
            .get(&star)
            .map(|owner| owner.map_or(UNCLAIMED, |f| f.index() as i32))
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StarId, Option<FactionId>)> + '_ {
        self.owners.iter().map(|(id, owner)| (*id, *owner))
    }

    pub fn stars_of(&self, faction: FactionId) -> Vec<StarId> {
        self.iter()
            .filter(|(_, owner)| *owner == Some(faction))
            .map(|(id, _)| id)
            .collect()
    }

    /// Distinct factions holding at least one star
    pub fn factions(&self) -> BTreeSet<FactionId> {
        self.owners.values().filter_map(|owner| *owner).collect()
    }

    pub fn unclaimed_count(&self) -> usize {
        self.owners.values().filter(|owner| owner.is_none()).count()
    }
}
