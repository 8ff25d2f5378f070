//! Grain Burn Simulation Core Library
//!
//! Simulates the erosive burn-back of a solid propellant grain cross-section
//! on a discretized 2D grid. From an ignition point the burning front advances
//! outward through the material over discrete time steps, producing a per-step
//! count of consumed cells (a proxy for instantaneous burn surface area) and,
//! optionally, the full sequence of grid states for downstream visualization.
//!
//! ## Engine Structure
//!
//! - Circular neighborhood queries over the cell grid
//! - Frontier tracking (seen / inner-border / outer-border bookkeeping)
//! - Per-material erosion of the burn front against a double-buffered grid
//! - A driving simulation loop that runs until the frontier is exhausted

// Core types and utilities
pub mod core_types;

// Grid storage and initial-geometry builders
pub mod grid;

// Burn-front algorithms (neighborhood query, frontier tracking, erosion)
pub mod solver;

// Simulation driver and results
pub mod simulation;

// Re-export core types
pub use core_types::{CellIndex, ErosionTable, MaterialCode, BURNED, EXTERIOR};

// Re-export grid types
pub use grid::GrainGrid;

// Re-export solver types
pub use solver::{erode_frontier, neighbors_within, FrontierState};

// Re-export simulation types
pub use simulation::{BurnSimulation, ConfigError, SimulationResult};
