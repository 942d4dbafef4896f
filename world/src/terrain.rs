//! Sparse tile layers and the tracked cell sets that drive eviction.

use std::collections::{HashMap, HashSet};

use reef_runner_core::{Cell, TileKind};

/// Sparse mapping from cells to the tile occupying them.
#[derive(Debug, Default)]
pub(crate) struct TileLayer {
    tiles: HashMap<Cell, TileKind>,
}

impl TileLayer {
    pub(crate) fn set(&mut self, cell: Cell, kind: TileKind) {
        let _ = self.tiles.insert(cell, kind);
    }

    pub(crate) fn clear(&mut self, cell: Cell) {
        let _ = self.tiles.remove(&cell);
    }

    pub(crate) fn get(&self, cell: Cell) -> Option<TileKind> {
        self.tiles.get(&cell).copied()
    }

    pub(crate) fn clear_all(&mut self) {
        self.tiles.clear();
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (Cell, TileKind)> + '_ {
        self.tiles.iter().map(|(cell, kind)| (*cell, *kind))
    }

    /// Drops every tile strictly left of the provided horizon.
    pub(crate) fn evict_before(&mut self, horizon: f32) -> u32 {
        let mut cleared = 0;
        self.tiles.retain(|cell, _| {
            if (cell.x() as f32) < horizon {
                cleared += 1;
                false
            } else {
                true
            }
        });
        cleared
    }
}

/// The four tile layers plus the tracked sets guarding idempotent placement.
#[derive(Debug, Default)]
pub(crate) struct Terrain {
    pub(crate) ground: TileLayer,
    pub(crate) ocean: TileLayer,
    pub(crate) foreground: TileLayer,
    pub(crate) background: TileLayer,
    ground_cells: HashSet<Cell>,
    ocean_cells: HashSet<Cell>,
}

impl Terrain {
    /// Writes a ground tile unless the cell is already tracked.
    pub(crate) fn place_ground(&mut self, cell: Cell, kind: TileKind) -> bool {
        if self.ground_cells.insert(cell) {
            self.ground.set(cell, kind);
            true
        } else {
            false
        }
    }

    /// Writes a water tile unless the cell is already tracked.
    pub(crate) fn place_ocean(&mut self, cell: Cell) -> bool {
        if self.ocean_cells.insert(cell) {
            self.ocean.set(cell, TileKind::Water);
            true
        } else {
            false
        }
    }

    /// Clears and untracks every ground cell strictly left of the horizon.
    pub(crate) fn evict_ground_before(&mut self, horizon: f32) -> u32 {
        let ground = &mut self.ground;
        let mut cleared = 0;
        self.ground_cells.retain(|cell| {
            if (cell.x() as f32) < horizon {
                ground.clear(*cell);
                cleared += 1;
                false
            } else {
                true
            }
        });
        cleared
    }

    /// Clears and untracks every ocean cell strictly left of the horizon.
    pub(crate) fn evict_ocean_before(&mut self, horizon: f32) -> u32 {
        let ocean = &mut self.ocean;
        let mut cleared = 0;
        self.ocean_cells.retain(|cell| {
            if (cell.x() as f32) < horizon {
                ocean.clear(*cell);
                cleared += 1;
                false
            } else {
                true
            }
        });
        cleared
    }

    /// Drops decoration strictly left of the horizon from both decor layers.
    pub(crate) fn evict_decor_before(&mut self, horizon: f32) {
        let _ = self.foreground.evict_before(horizon);
        let _ = self.background.evict_before(horizon);
    }

    /// Clears all four layers and both tracked sets.
    pub(crate) fn clear_all(&mut self) {
        self.ground.clear_all();
        self.ocean.clear_all();
        self.foreground.clear_all();
        self.background.clear_all();
        self.ground_cells.clear();
        self.ocean_cells.clear();
    }

    pub(crate) fn ground_cell_count(&self) -> usize {
        self.ground_cells.len()
    }

    pub(crate) fn ocean_cell_count(&self) -> usize {
        self.ocean_cells.len()
    }

    pub(crate) fn tracked_ground(&self) -> impl Iterator<Item = Cell> + '_ {
        self.ground_cells.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_placement_is_idempotent() {
        let mut terrain = Terrain::default();
        let cell = Cell::new(3, 0);
        assert!(terrain.place_ground(cell, TileKind::Brick));
        assert!(!terrain.place_ground(cell, TileKind::Dirt));
        assert_eq!(terrain.ground.get(cell), Some(TileKind::Brick));
        assert_eq!(terrain.ground_cell_count(), 1);
    }

    #[test]
    fn eviction_clears_tile_and_tracking() {
        let mut terrain = Terrain::default();
        assert!(terrain.place_ground(Cell::new(-10, 0), TileKind::Dirt));
        assert!(terrain.place_ground(Cell::new(5, 0), TileKind::Dirt));

        let cleared = terrain.evict_ground_before(0.0);
        assert_eq!(cleared, 1);
        assert_eq!(terrain.ground.get(Cell::new(-10, 0)), None);
        assert_eq!(terrain.ground.get(Cell::new(5, 0)), Some(TileKind::Dirt));
        assert!(terrain.place_ground(Cell::new(-10, 0), TileKind::Dirt));
    }

    #[test]
    fn ocean_horizon_is_independent_of_ground() {
        let mut terrain = Terrain::default();
        assert!(terrain.place_ocean(Cell::new(-10, -5)));
        assert!(terrain.place_ground(Cell::new(-10, 0), TileKind::Brick));

        let _ = terrain.evict_ocean_before(-20.0);
        assert_eq!(terrain.ocean_cell_count(), 1);
        let _ = terrain.evict_ocean_before(0.0);
        assert_eq!(terrain.ocean_cell_count(), 0);
        assert_eq!(terrain.ground_cell_count(), 1);
    }

    #[test]
    fn clear_all_resets_every_layer() {
        let mut terrain = Terrain::default();
        assert!(terrain.place_ground(Cell::new(0, 0), TileKind::Dirt));
        assert!(terrain.place_ocean(Cell::new(0, -5)));
        terrain.foreground.set(Cell::new(0, 1), TileKind::Dirt);

        terrain.clear_all();
        assert_eq!(terrain.ground_cell_count(), 0);
        assert_eq!(terrain.ocean_cell_count(), 0);
        assert_eq!(terrain.foreground.iter().count(), 0);
    }
}
