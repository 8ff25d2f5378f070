//! Frontier tracking across the burned cavity
//!
//! After each erosion the boundary between cavity and solid material is
//! irregular; a naive "shift outward by one" rule cannot follow it. The
//! tracker instead runs a breadth-first search confined to the already-burned
//! interior and collects the still-solid cells adjacent to it: the next layer
//! to erode.
//!
//! `seen` accumulates over the whole simulation and is never reset, so each
//! advance only walks newly exposed cavity rather than re-traversing the
//! entire bore every step.

use crate::core_types::{CellIndex, BURNED, EXTERIOR};
use crate::grid::GrainGrid;
use crate::solver::neighborhood::neighbors_within;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// The three coordinate sets tracking one simulation's burn front.
///
/// * `seen`: every cell ever classified as burned cavity; grows
///   monotonically across the run.
/// * `inner_border`: working set for the current advance, rebuilt from the
///   previous `outer_border`.
/// * `outer_border`: output of the latest advance: solid cells adjacent to
///   the cavity, i.e. the frontier the next erosion consumes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrontierState {
    pub(crate) seen: FxHashSet<CellIndex>,
    pub(crate) inner_border: FxHashSet<CellIndex>,
    pub(crate) outer_border: FxHashSet<CellIndex>,
}

impl FrontierState {
    /// Create empty frontier state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to the seeded state: `outer_border` holds the ignition cells,
    /// `seen` and `inner_border` are empty.
    pub fn seed<I>(&mut self, ignitions: I)
    where
        I: IntoIterator<Item = CellIndex>,
    {
        self.seen.clear();
        self.inner_border.clear();
        self.outer_border.clear();
        self.outer_border.extend(ignitions);
    }

    /// Advance the frontier one layer.
    ///
    /// Consumes the previous `outer_border` (via `inner_border`) and walks the
    /// cavity: burned neighbors keep the search going, solid neighbors become
    /// the new `outer_border`. Exterior cells stop the walk. Terminates when
    /// the working set empties; with a degenerate seed (exterior cell) the
    /// resulting `outer_border` is simply empty.
    pub fn advance(&mut self, grid: &GrainGrid) {
        self.inner_border = std::mem::take(&mut self.outer_border);

        loop {
            let cell = match self.inner_border.iter().next() {
                Some(&cell) => cell,
                None => break,
            };
            self.inner_border.remove(&cell);
            self.seen.insert(cell);
            for (nx, ny) in neighbors_within(cell, 1, grid.dim()) {
                if self.seen.contains(&(nx, ny)) {
                    continue;
                }
                match grid.get(nx, ny) {
                    BURNED => {
                        self.inner_border.insert((nx, ny));
                    }
                    EXTERIOR => {}
                    _ => {
                        self.outer_border.insert((nx, ny));
                    }
                }
            }
        }
    }

    /// The current frontier: solid cells adjacent to the burned cavity.
    pub fn outer_border(&self) -> &FxHashSet<CellIndex> {
        &self.outer_border
    }

    /// All cavity cells visited so far in this run.
    pub fn seen(&self) -> &FxHashSet<CellIndex> {
        &self.seen
    }
}
