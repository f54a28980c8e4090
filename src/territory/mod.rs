pub mod coordinates;

use crate::config::GalaxySettings;
use crate::galaxy::{FactionId, Galaxy, OwnershipMap, StarRecord};
use bevy_math::Vec2;
use coordinates::{GridCoord, cell_center, world_to_cell};
use std::collections::BTreeMap;
use tracing::debug;

/// Nearest owned star to `point`, as long as it is within `cutoff_radius`.
/// Unclaimed stars never project influence. Ties go to the lower star id.
pub fn nearest_owner(
    point: Vec2,
    stars: &[StarRecord],
    ownership: &OwnershipMap,
    cutoff_radius: f32,
) -> Option<FactionId> {
    let mut best: Option<(FactionId, f32)> = None;

    for star in stars {
        let Some(owner) = ownership.owner_of(star.id) else {
            continue;
        };
        let distance = star.position.distance(point);
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((owner, distance));
        }
    }

    best.filter(|(_, distance)| *distance <= cutoff_radius)
        .map(|(owner, _)| owner)
}

/// Discretized nearest-owner influence over the galaxy bounds.
/// Holds no state between queries; every call rescans the stars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerritoryGrid {
    pub extent: Vec2,
    /// Cells per axis
    pub resolution: u32,
    pub cutoff_radius: f32,
}

impl TerritoryGrid {
    pub fn new(extent: Vec2, resolution: u32, cutoff_radius: f32) -> Self {
        Self {
            extent,
            resolution: resolution.max(1),
            cutoff_radius,
        }
    }

    pub fn from_settings(settings: &GalaxySettings) -> Self {
        Self::new(
            settings.extent.as_vec2(),
            settings.territory_resolution,
            settings.territory_cutoff.get(),
        )
    }

    pub fn cell_count(&self) -> usize {
        let resolution = self.resolution as usize;
        resolution * resolution
    }

    /// Cell containing `point`; `None` outside the galaxy bounds
    pub fn cell_of(&self, point: Vec2) -> Option<GridCoord> {
        world_to_cell(self.extent, self.resolution, point)
    }

    pub fn cell_center(&self, cell: GridCoord) -> Vec2 {
        cell_center(self.extent, self.resolution, cell)
    }

    pub fn owner_of_cell(
        &self,
        cell: GridCoord,
        stars: &[StarRecord],
        ownership: &OwnershipMap,
    ) -> Option<FactionId> {
        if !cell.is_valid_for(self.resolution) {
            return None;
        }
        nearest_owner(self.cell_center(cell), stars, ownership, self.cutoff_radius)
    }

    /// Owner of the cell `point` falls in. The answer is the same for
    /// every point of a cell, since the query runs at the cell center.
    pub fn owner_at(
        &self,
        point: Vec2,
        stars: &[StarRecord],
        ownership: &OwnershipMap,
    ) -> Option<FactionId> {
        let cell = self.cell_of(point)?;
        self.owner_of_cell(cell, stars, ownership)
    }

    /// Resolve every cell from scratch
    pub fn compute(&self, stars: &[StarRecord], ownership: &OwnershipMap) -> TerritoryMap {
        let mut cells = Vec::with_capacity(self.cell_count());
        for y in 0..self.resolution {
            for x in 0..self.resolution {
                cells.push(self.owner_of_cell(GridCoord::new(x, y), stars, ownership));
            }
        }

        let map = TerritoryMap {
            resolution: self.resolution,
            cells,
        };
        debug!(
            "Territory pass over {} cells: {} unowned",
            map.cells.len(),
            map.unowned_count()
        );
        map
    }
}

/// Point query against a finished galaxy
pub fn territory_owner_at(galaxy: &Galaxy, grid: &TerritoryGrid, point: Vec2) -> Option<FactionId> {
    grid.owner_at(point, &galaxy.stars, &galaxy.ownership)
}

/// Snapshot of one territory pass, row-major from the minimum corner
#[derive(Debug, Clone, PartialEq)]
pub struct TerritoryMap {
    resolution: u32,
    cells: Vec<Option<FactionId>>,
}

impl TerritoryMap {
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn get(&self, cell: GridCoord) -> Option<FactionId> {
        if !cell.is_valid_for(self.resolution) {
            return None;
        }
        self.cells[cell.index(self.resolution)]
    }

    pub fn coverage(&self, faction: FactionId) -> usize {
        self.cells.iter().filter(|c| **c == Some(faction)).count()
    }

    /// Cell counts for every faction holding territory
    pub fn coverage_by_faction(&self) -> BTreeMap<FactionId, usize> {
        let mut counts = BTreeMap::new();
        for owner in self.cells.iter().flatten() {
            *counts.entry(*owner).or_insert(0) += 1;
        }
        counts
    }

    pub fn unowned_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// One character per cell: the faction index, or '.' when unowned.
    /// The top line is the galaxy's maximum y.
    pub fn render_ascii(&self) -> String {
        let width = self.resolution as usize;
        let mut out = String::with_capacity(self.cells.len() + width);

        for row in self.cells.chunks(width).rev() {
            for cell in row {
                let glyph = cell
                    .and_then(|f| char::from_digit(f.index() as u32, 36))
                    .unwrap_or('.');
                out.push(glyph);
            }
            out.push('\n');
        }
        out
    }
}
