//! Burn simulation driver
//!
//! [`BurnSimulation`] owns one grain grid plus the frontier state for a single
//! run and drives the step loop: advance the frontier, erode it, record the
//! removal count (and optionally a grid snapshot) until the frontier is
//! exhausted. Configuration problems (missing erosion radius, out-of-bounds
//! ignition) surface before any step executes; igniting on an exterior cell is
//! a valid degenerate run that terminates after one empty step.

use crate::core_types::{CellIndex, ErosionTable, MaterialCode};
use crate::grid::GrainGrid;
use crate::solver::{erode_frontier, FrontierState};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Outcome of one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Distinct cells consumed per step, in chronological order. The count is
    /// the proxy for instantaneous burn surface area / mass flow.
    pub removals: Vec<usize>,
    /// Grid snapshots when history recording was requested: the initial grid
    /// followed by one snapshot per step (`removals.len() + 1` entries).
    pub history: Option<Vec<GrainGrid>>,
}

impl SimulationResult {
    /// Number of completed steps.
    pub fn steps(&self) -> usize {
        self.removals.len()
    }

    /// Total cells consumed over the whole run.
    pub fn total_removed(&self) -> usize {
        self.removals.iter().sum()
    }
}

/// Errors that can occur while configuring a simulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A positive material code in the grid has no erosion radius
    MissingErosionRadius {
        /// The unconfigured material code
        material: MaterialCode,
    },
    /// An ignition cell lies outside the grid
    IgnitionOutOfBounds {
        /// Offending x coordinate
        x: usize,
        /// Offending y coordinate
        y: usize,
        /// Grid dimension
        dim: usize,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingErosionRadius { material } => {
                write!(f, "No erosion radius configured for material {material}")
            }
            ConfigError::IgnitionOutOfBounds { x, y, dim } => {
                write!(f, "Ignition cell ({x}, {y}) outside {dim}x{dim} grid")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Single-run burn-back simulation over one grain cross-section.
///
/// The instance owns its grid and frontier state exclusively; runs are
/// strictly sequential and deterministic. `seen` spans the whole run, so one
/// instance is meant for one `simulate` call.
#[derive(Debug)]
pub struct BurnSimulation {
    grid: GrainGrid,
    table: ErosionTable,
    frontier: FrontierState,
    // Erosion write buffer, allocated once and reused every step
    scratch: Vec<MaterialCode>,
}

impl BurnSimulation {
    /// Create a simulation over `grid` with per-material erosion radii.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingErosionRadius`] if any positive code present in
    /// the grid has no table entry, so the erosion step can never hit an
    /// unconfigured material mid-run.
    pub fn new(grid: GrainGrid, table: ErosionTable) -> Result<Self, ConfigError> {
        let mut codes: Vec<MaterialCode> = grid.material_census().into_keys().collect();
        codes.sort_unstable();
        for code in codes {
            if table.get(code).is_none() {
                return Err(ConfigError::MissingErosionRadius { material: code });
            }
        }
        Ok(BurnSimulation {
            grid,
            table,
            frontier: FrontierState::new(),
            scratch: Vec::new(),
        })
    }

    /// Current grid state.
    pub fn grid(&self) -> &GrainGrid {
        &self.grid
    }

    /// Frontier bookkeeping, for inspection and diagnostics.
    pub fn frontier(&self) -> &FrontierState {
        &self.frontier
    }

    /// Run one step: advance the frontier, then erode it.
    ///
    /// Returns the distinct-cell removal count. The frontier must have been
    /// seeded (by [`Self::simulate`] or [`FrontierState::seed`]) beforehand.
    pub fn step(&mut self) -> usize {
        self.frontier.advance(&self.grid);
        erode_frontier(
            &mut self.grid,
            &self.frontier.outer_border,
            &self.table,
            &mut self.scratch,
        )
    }

    /// Run the burn to completion from a set of ignition cells.
    ///
    /// Seeds the outer border with `ignitions`, then steps until the frontier
    /// empties. At least one step always executes, so a degenerate ignition
    /// (on an exterior cell) yields a single step with removal count 0.
    ///
    /// With `record_history` the result carries the initial grid plus one
    /// snapshot per step; memory grows with steps x grid area, so recording is
    /// opt-in.
    ///
    /// # Errors
    ///
    /// [`ConfigError::IgnitionOutOfBounds`] if any ignition cell lies outside
    /// the grid; no step runs and no state changes.
    pub fn simulate(
        &mut self,
        ignitions: &[CellIndex],
        record_history: bool,
    ) -> Result<SimulationResult, ConfigError> {
        for &(x, y) in ignitions {
            if !self.grid.in_bounds(x, y) {
                return Err(ConfigError::IgnitionOutOfBounds {
                    x,
                    y,
                    dim: self.grid.dim(),
                });
            }
        }

        info!(
            dim = self.grid.dim(),
            solid_cells = self.grid.solid_cell_count(),
            ignitions = ignitions.len(),
            "starting burn simulation"
        );

        self.frontier.seed(ignitions.iter().copied());
        let mut history = record_history.then(|| vec![self.grid.clone()]);
        let mut removals = Vec::new();

        loop {
            let removed = self.step();
            removals.push(removed);
            debug!(
                step = removals.len(),
                removed,
                frontier = self.frontier.outer_border.len(),
                "burn step"
            );
            if let Some(history) = history.as_mut() {
                history.push(self.grid.clone());
            }
            if self.frontier.outer_border.is_empty() {
                break;
            }
        }

        info!(
            steps = removals.len(),
            total_removed = removals.iter().sum::<usize>(),
            remaining_solid = self.grid.solid_cell_count(),
            "burn complete"
        );
        Ok(SimulationResult { removals, history })
    }

    /// Convenience wrapper: run from a single ignition cell.
    ///
    /// # Errors
    ///
    /// [`ConfigError::IgnitionOutOfBounds`] if `ignition` lies outside the
    /// grid.
    pub fn simulate_from(
        &mut self,
        ignition: CellIndex,
        record_history: bool,
    ) -> Result<SimulationResult, ConfigError> {
        self.simulate(&[ignition], record_history)
    }
}
