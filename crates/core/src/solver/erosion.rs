//! Frontier erosion against a double-buffered grid
//!
//! One erosion application consumes the current outer border: every frontier
//! cell of a positive material burns itself plus all same-material cells
//! inside its material's erosion radius. All removal decisions read the
//! pre-step grid; writes go to a scratch buffer that replaces the grid at the
//! end, so ordering within a step cannot influence the outcome.
//!
//! Only material-code equality gates neighbor removal; there is no
//! connectivity or line-of-sight check, so a disk may reach across a region
//! of different material that was already consumed elsewhere.

use crate::core_types::{CellIndex, ErosionTable, MaterialCode, BURNED};
use crate::grid::GrainGrid;
use crate::solver::neighborhood::neighbors_within;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Erode one layer of the burn front, in place.
///
/// `scratch` is the write buffer; it is overwritten with a copy of the grid at
/// entry and holds the pre-step state after the swap, ready for reuse next
/// step. Returns the number of distinct cells that transitioned from a
/// positive code to [`BURNED`]; a cell covered by several frontier disks
/// counts once.
pub fn erode_frontier(
    grid: &mut GrainGrid,
    outer_border: &FxHashSet<CellIndex>,
    table: &ErosionTable,
    scratch: &mut Vec<MaterialCode>,
) -> usize {
    scratch.clear();
    scratch.extend_from_slice(&grid.cells);

    for &(x, y) in outer_border {
        let code = grid.get(x, y);
        if code <= BURNED {
            continue;
        }
        let radius = table.radius_for(code);
        scratch[grid.index_of(x, y)] = BURNED;
        for (nx, ny) in neighbors_within((x, y), radius, grid.dim()) {
            // Pre-step read: only cells of the same material burn with this one
            if grid.get(nx, ny) == code {
                scratch[grid.index_of(nx, ny)] = BURNED;
            }
        }
    }

    let removed = grid
        .cells
        .par_iter()
        .zip(scratch.par_iter())
        .filter(|&(&before, &after)| before > BURNED && after == BURNED)
        .count();

    std::mem::swap(&mut grid.cells, scratch);
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::EXTERIOR;

    /// Horizontal bar of `material` cells at y = 1 on an exterior grid.
    fn bar_grid(dim: usize, xs: std::ops::Range<usize>, material: MaterialCode) -> GrainGrid {
        let mut grid = GrainGrid::new(dim);
        for x in xs {
            grid.set(x, 1, material);
        }
        grid
    }

    #[test]
    fn test_radius_zero_removes_only_the_frontier_cell() {
        let mut grid = bar_grid(6, 1..5, 1);
        let table = ErosionTable::from_pairs([(1, 0)]);
        let border: FxHashSet<_> = [(2usize, 1usize)].into_iter().collect();
        let mut scratch = Vec::new();

        let removed = erode_frontier(&mut grid, &border, &table, &mut scratch);
        assert_eq!(removed, 1);
        assert_eq!(grid.get(2, 1), BURNED);
        assert_eq!(grid.get(1, 1), 1);
        assert_eq!(grid.get(3, 1), 1);
    }

    #[test]
    fn test_radius_eats_same_material_neighbors() {
        let mut grid = bar_grid(8, 1..7, 1);
        let table = ErosionTable::from_pairs([(1, 2)]);
        let border: FxHashSet<_> = [(1usize, 1usize)].into_iter().collect();
        let mut scratch = Vec::new();

        let removed = erode_frontier(&mut grid, &border, &table, &mut scratch);
        // (1,1) itself plus (2,1) and (3,1) within radius 2
        assert_eq!(removed, 3);
        assert_eq!(grid.get(3, 1), BURNED);
        assert_eq!(grid.get(4, 1), 1);
    }

    #[test]
    fn test_overlapping_disks_count_distinct_cells() {
        let mut grid = bar_grid(6, 1..4, 1);
        let table = ErosionTable::from_pairs([(1, 1)]);
        // Both ends of a 3-cell bar; their disks share the middle cell
        let border: FxHashSet<_> = [(1usize, 1usize), (3usize, 1usize)].into_iter().collect();
        let mut scratch = Vec::new();

        let removed = erode_frontier(&mut grid, &border, &table, &mut scratch);
        assert_eq!(removed, 3);
        assert_eq!(grid.solid_cell_count(), 0);
    }

    #[test]
    fn test_other_materials_and_exterior_survive() {
        let mut grid = bar_grid(8, 1..4, 1);
        grid.set(4, 1, 2);
        let table = ErosionTable::from_pairs([(1, 3), (2, 1)]);
        let border: FxHashSet<_> = [(3usize, 1usize)].into_iter().collect();
        let mut scratch = Vec::new();

        let removed = erode_frontier(&mut grid, &border, &table, &mut scratch);
        assert_eq!(removed, 3);
        // The adjoining material-2 cell is inside the disk but not consumed
        assert_eq!(grid.get(4, 1), 2);
        assert_eq!(grid.get(0, 0), EXTERIOR);
    }

    #[test]
    fn test_burned_and_exterior_frontier_cells_are_skipped() {
        let mut grid = bar_grid(6, 1..5, 1);
        let table = ErosionTable::from_pairs([(1, 1)]);
        // Stale entries: one cavity cell, one exterior cell
        let border: FxHashSet<_> = [(0usize, 0usize), (5usize, 5usize)].into_iter().collect();
        let mut scratch = Vec::new();

        grid.set(0, 0, BURNED);
        let removed = erode_frontier(&mut grid, &border, &table, &mut scratch);
        assert_eq!(removed, 0);
        assert_eq!(grid.solid_cell_count(), 4);
    }
}
