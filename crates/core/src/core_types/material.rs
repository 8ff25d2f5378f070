//! Material codes and per-material erosion rates
//!
//! A grain cross-section is stored as integer material codes. Two codes are
//! reserved: [`EXTERIOR`] marks non-burnable boundary cells that are never
//! mutated, and [`BURNED`] marks consumed (or originally void) cells. Every
//! positive code identifies a propellant material and must carry an erosion
//! radius in the [`ErosionTable`] before a simulation may start.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Integer material identifier stored per grid cell.
pub type MaterialCode = i32;

/// Exterior / non-burnable boundary. Never mutated by the engine.
pub const EXTERIOR: MaterialCode = -1;

/// Burned-out or originally void cell.
pub const BURNED: MaterialCode = 0;

/// Per-material erosion radius table.
///
/// Maps each positive material code to the distance (in grid-cell units) a
/// frontier cell of that material erodes same-material neighbors in one step.
/// A larger radius models a faster-burning propellant. Radii are `u32`, so
/// negative or fractional rates are unrepresentable.
///
/// Coverage is validated against the grid when a simulation is constructed;
/// a lookup for an unconfigured code afterwards is a programming error and
/// panics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErosionTable {
    radii: FxHashMap<MaterialCode, u32>,
}

impl ErosionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(material, radius)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (MaterialCode, u32)>,
    {
        Self {
            radii: pairs.into_iter().collect(),
        }
    }

    /// Set the erosion radius for a material code.
    pub fn insert(&mut self, material: MaterialCode, radius: u32) {
        self.radii.insert(material, radius);
    }

    /// Radius for a material, if configured.
    pub fn get(&self, material: MaterialCode) -> Option<u32> {
        self.radii.get(&material).copied()
    }

    /// Radius for a material known to be configured.
    ///
    /// Panics on an unconfigured code; simulation construction validates
    /// coverage up front, so this is unreachable from the driver path.
    pub fn radius_for(&self, material: MaterialCode) -> u32 {
        match self.radii.get(&material) {
            Some(&radius) => radius,
            None => panic!("no erosion radius configured for material {material}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut table = ErosionTable::new();
        table.insert(1, 2);
        table.insert(2, 0);
        assert_eq!(table.get(1), Some(2));
        assert_eq!(table.get(2), Some(0));
        assert_eq!(table.get(3), None);
        assert_eq!(table.radius_for(1), 2);
    }

    #[test]
    fn test_from_pairs() {
        let table = ErosionTable::from_pairs([(1, 1), (2, 3)]);
        assert_eq!(table.radius_for(2), 3);
    }

    #[test]
    #[should_panic(expected = "no erosion radius configured")]
    fn test_missing_code_panics() {
        let table = ErosionTable::new();
        let _ = table.radius_for(7);
    }
}
