//! Grid storage and initial-geometry builders

pub mod geometry;
pub mod grain_grid;

// Re-export main types
pub use grain_grid::GrainGrid;
