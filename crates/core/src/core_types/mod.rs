//! Core types shared across the engine

pub mod material;

// Re-export main types
pub use material::{ErosionTable, MaterialCode, BURNED, EXTERIOR};

/// Grid cell index `(x, y)` with `0 <= x, y < dim`.
///
/// Element type of all frontier sets; also the ignition-point type.
pub type CellIndex = (usize, usize);
