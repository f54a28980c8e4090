use bevy_math::Vec2;

/// Cell coordinates on the territory grid, (0, 0) at the galaxy's minimum corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    pub x: u32,
    pub y: u32,
}

impl GridCoord {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    pub fn is_valid_for(&self, resolution: u32) -> bool {
        self.x < resolution && self.y < resolution
    }

    /// Row-major index into a `resolution` x `resolution` grid
    pub fn index(&self, resolution: u32) -> usize {
        self.y as usize * resolution as usize + self.x as usize
    }
}

/// World units covered by one cell on each axis
pub fn cell_size(extent: Vec2, resolution: u32) -> Vec2 {
    extent / resolution.max(1) as f32
}

/// Convert a galaxy position to fractional grid coordinates, accounting for
/// the galaxy being centered on the origin
pub fn world_to_grid(extent: Vec2, resolution: u32, world: Vec2) -> Vec2 {
    (world + extent / 2.0) / cell_size(extent, resolution)
}

/// Convert fractional grid coordinates back to a galaxy position
pub fn grid_to_world(extent: Vec2, resolution: u32, grid: Vec2) -> Vec2 {
    grid * cell_size(extent, resolution) - extent / 2.0
}

pub fn is_valid_grid(resolution: u32, grid: Vec2) -> bool {
    grid.x >= 0.0 && grid.y >= 0.0 && grid.x < resolution as f32 && grid.y < resolution as f32
}

/// Cell containing `world`. Points on the far galaxy edge belong to the last cell.
pub fn world_to_cell(extent: Vec2, resolution: u32, world: Vec2) -> Option<GridCoord> {
    let grid = world_to_grid(extent, resolution, world);
    let last = resolution.saturating_sub(1) as f32;
    let clamped = Vec2::new(
        if grid.x == resolution as f32 { last } else { grid.x },
        if grid.y == resolution as f32 { last } else { grid.y },
    );

    if is_valid_grid(resolution, clamped) {
        Some(GridCoord::new(clamped.x as u32, clamped.y as u32))
    } else {
        None
    }
}

pub fn cell_center(extent: Vec2, resolution: u32, cell: GridCoord) -> Vec2 {
    grid_to_world(
        extent,
        resolution,
        Vec2::new(cell.x as f32 + 0.5, cell.y as f32 + 0.5),
    )
}
