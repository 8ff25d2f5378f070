//! Square cell grid holding the grain cross-section
//!
//! The grid is a `dim x dim` field of [`MaterialCode`] values stored row-major
//! (`[y * dim + x]`). It is owned exclusively by one simulation instance,
//! mutated in place by the erosion step each simulation step, and never
//! resized. [`EXTERIOR`] cells are never written.

use crate::core_types::{MaterialCode, BURNED, EXTERIOR};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// 2D material-code field for one grain cross-section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrainGrid {
    /// Grid dimension (cells per side)
    pub(crate) dim: usize,
    /// Material codes in row-major order: `[y * dim + x]`
    pub(crate) cells: Vec<MaterialCode>,
}

impl GrainGrid {
    /// Create a grid filled entirely with [`EXTERIOR`].
    pub fn new(dim: usize) -> Self {
        GrainGrid {
            dim,
            cells: vec![EXTERIOR; dim * dim],
        }
    }

    /// Wrap an existing row-major cell buffer.
    ///
    /// Panics if `cells.len() != dim * dim`.
    pub fn from_cells(dim: usize, cells: Vec<MaterialCode>) -> Self {
        assert_eq!(
            cells.len(),
            dim * dim,
            "cell buffer length {} does not match {dim}x{dim} grid",
            cells.len()
        );
        GrainGrid { dim, cells }
    }

    /// Grid dimension (cells per side).
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Whether `(x, y)` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.dim && y < self.dim
    }

    #[inline]
    pub(crate) fn index_of(&self, x: usize, y: usize) -> usize {
        y * self.dim + x
    }

    /// Material code at `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> MaterialCode {
        self.cells[y * self.dim + x]
    }

    /// Set the material code at `(x, y)`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, code: MaterialCode) {
        self.cells[y * self.dim + x] = code;
    }

    /// Raw row-major cell buffer, for rendering and persistence.
    pub fn cells(&self) -> &[MaterialCode] {
        &self.cells
    }

    /// Number of still-solid (positive-coded) cells.
    pub fn solid_cell_count(&self) -> usize {
        self.cells.par_iter().filter(|&&code| code > BURNED).count()
    }

    /// Cell count per positive material code currently present.
    pub fn material_census(&self) -> FxHashMap<MaterialCode, usize> {
        let mut census = FxHashMap::default();
        for &code in &self.cells {
            if code > BURNED {
                *census.entry(code).or_insert(0) += 1;
            }
        }
        census
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_exterior() {
        let grid = GrainGrid::new(8);
        assert_eq!(grid.dim(), 8);
        assert!(grid.cells().iter().all(|&c| c == EXTERIOR));
        assert_eq!(grid.solid_cell_count(), 0);
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut grid = GrainGrid::new(4);
        grid.set(2, 3, 5);
        assert_eq!(grid.get(2, 3), 5);
        // Row-major layout: (x=2, y=3) lives at 3 * 4 + 2
        assert_eq!(grid.cells()[14], 5);
    }

    #[test]
    fn test_material_census_skips_reserved_codes() {
        let mut grid = GrainGrid::new(3);
        grid.set(0, 0, 1);
        grid.set(1, 0, 1);
        grid.set(2, 0, 2);
        grid.set(0, 1, BURNED);
        let census = grid.material_census();
        assert_eq!(census.get(&1), Some(&2));
        assert_eq!(census.get(&2), Some(&1));
        assert_eq!(census.get(&BURNED), None);
        assert_eq!(census.get(&EXTERIOR), None);
        assert_eq!(grid.solid_cell_count(), 3);
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn test_from_cells_rejects_bad_length() {
        let _ = GrainGrid::from_cells(3, vec![EXTERIOR; 8]);
    }
}
