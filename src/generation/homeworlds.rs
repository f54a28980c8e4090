use super::stars::band_center;
use crate::galaxy::{FactionId, MAX_FACTIONS, ORIGIN_STAR_ID, OwnershipMap, StarId, StarRecord};
use bevy_math::Vec2;
use tracing::{debug, info, warn};

/// Gives every faction a starting foothold: a homeworld near its band center,
/// kept away from other factions' stars, plus the nearest unclaimed neighbour.
#[derive(Debug, Clone)]
pub struct HomeworldAssignor {
    pub extent: Vec2,
    pub min_homeworld_separation: f32,
}

impl HomeworldAssignor {
    pub fn new(extent: Vec2, min_homeworld_separation: f32) -> Self {
        Self {
            extent,
            min_homeworld_separation,
        }
    }

    /// Assign starting stars for `faction_count` factions. The returned map
    /// has an entry for every star; stars nobody received are unclaimed.
    /// Counts beyond the faction roster are capped at its size.
    pub fn assign(&self, stars: &[StarRecord], faction_count: u32) -> OwnershipMap {
        let mut ownership = OwnershipMap::new();

        let roster_size = MAX_FACTIONS as u32;
        if faction_count > roster_size {
            warn!(
                "Requested {} factions but the roster holds {}; extra factions are ignored",
                faction_count, roster_size
            );
        }
        let faction_count = faction_count.min(roster_size);

        if stars.is_empty() || faction_count == 0 {
            ownership.close_over(stars);
            return ownership;
        }

        let mut unclaimed: Vec<StarId> = stars
            .iter()
            .map(|s| s.id)
            .filter(|id| *id != ORIGIN_STAR_ID)
            .collect();
        // Every claimed star keeps later homeworlds at a distance
        let mut anchors: Vec<Vec2> = Vec::new();

        for index in 0..faction_count {
            let faction = FactionId::new(index as u8);
            let region_center = band_center(self.extent, faction_count, index);

            let (reference, mut held) = if faction.is_player() {
                ownership.claim(ORIGIN_STAR_ID, faction);
                anchors.push(stars[ORIGIN_STAR_ID as usize].position);
                (Some(stars[ORIGIN_STAR_ID as usize].position), 1)
            } else {
                match self.select_homeworld(stars, &unclaimed, &anchors, region_center) {
                    Some(id) => {
                        let position = stars[id as usize].position;
                        ownership.claim(id, faction);
                        anchors.push(position);
                        unclaimed.retain(|s| *s != id);
                        debug!("{} homeworld: star {}", faction.name(), id);
                        (Some(position), 1)
                    }
                    None => {
                        warn!(
                            "No star in the galaxy keeps {} units from other factions; {} starts without a homeworld",
                            self.min_homeworld_separation,
                            faction.name()
                        );
                        (None, 0)
                    }
                }
            };

            if held < 2 {
                // Factions without a homeworld fall back to their region center
                let reference = reference.unwrap_or(region_center);
                if let Some(id) = nearest_star(stars, &unclaimed, reference) {
                    ownership.claim(id, faction);
                    anchors.push(stars[id as usize].position);
                    unclaimed.retain(|s| *s != id);
                    held += 1;
                }
            }

            debug!("{} holds {} starting stars", faction.name(), held);
        }

        ownership.close_over(stars);
        info!(
            "Assigned homeworlds for {} factions ({} stars unclaimed)",
            faction_count,
            ownership.unclaimed_count()
        );
        ownership
    }

    /// Closest unclaimed star to `region_center` that keeps the minimum
    /// separation from every anchor
    fn select_homeworld(
        &self,
        stars: &[StarRecord],
        unclaimed: &[StarId],
        anchors: &[Vec2],
        region_center: Vec2,
    ) -> Option<StarId> {
        let mut best: Option<(StarId, f32)> = None;

        for &id in unclaimed {
            let position = stars[id as usize].position;
            let far_enough = anchors
                .iter()
                .all(|anchor| anchor.distance(position) >= self.min_homeworld_separation);
            if !far_enough {
                continue;
            }

            let distance = position.distance(region_center);
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((id, distance));
            }
        }

        best.map(|(id, _)| id)
    }
}

/// Nearest star to `reference` among `candidates`; ties go to the earlier id
pub fn nearest_star(stars: &[StarRecord], candidates: &[StarId], reference: Vec2) -> Option<StarId> {
    let mut best: Option<(StarId, f32)> = None;

    for &id in candidates {
        let distance = stars[id as usize].position.distance(reference);
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((id, distance));
        }
    }

    best.map(|(id, _)| id)
}
