//! Initial-grid geometry builders
//!
//! Producers of the engine's input: each builder returns a populated
//! [`GrainGrid`] for a classic grain cross-section. The engine is agnostic to
//! which builder produced its grid, as long as the material-code invariants
//! hold (exterior `-1`, void `0`, positive propellant codes).
//!
//! All radial parameters are fractions of the half-dimension, so `outer_frac
//! = 0.8` on a 100-cell grid puts the outer wall at 40 cells from the center.
//! The randomized perforation builder is deterministic for a fixed seed.

use crate::core_types::{MaterialCode, BURNED, EXTERIOR};
use crate::grid::GrainGrid;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::f64::consts::TAU;

/// Cylindrically perforated grain: an annulus of `material` between the two
/// radius fractions, open bore inside, exterior outside.
///
/// # Arguments
///
/// * `dim` - Grid dimension (cells per side)
/// * `inner_frac` - Bore radius as a fraction of the half-dimension
/// * `outer_frac` - Outer wall radius as a fraction of the half-dimension
/// * `material` - Propellant code for the annulus (must be positive)
pub fn cylinder(dim: usize, inner_frac: f64, outer_frac: f64, material: MaterialCode) -> GrainGrid {
    let center = dim as f64 / 2.0;
    let inner_r2 = (center * inner_frac).powi(2);
    let outer_r2 = (center * outer_frac).powi(2);

    let mut grid = GrainGrid::new(dim);
    grid.cells.par_chunks_mut(dim).enumerate().for_each(|(y, row)| {
        for (x, cell) in row.iter_mut().enumerate() {
            let d2 = (x as f64 - center).powi(2) + (y as f64 - center).powi(2);
            *cell = if d2 > outer_r2 {
                EXTERIOR
            } else if d2 > inner_r2 {
                material
            } else {
                BURNED
            };
        }
    });
    grid
}

/// Wagon-wheel grain: a cylinder annulus with `spokes` angular slots cut to
/// void, increasing the initial burn surface.
///
/// `slot_half_angle` is the angular half-width of each slot in radians.
pub fn wagon_wheel(
    dim: usize,
    inner_frac: f64,
    outer_frac: f64,
    spokes: u32,
    slot_half_angle: f64,
    material: MaterialCode,
) -> GrainGrid {
    let center = dim as f64 / 2.0;
    let inner_r2 = (center * inner_frac).powi(2);
    let outer_r2 = (center * outer_frac).powi(2);

    let mut grid = GrainGrid::new(dim);
    grid.cells.par_chunks_mut(dim).enumerate().for_each(|(y, row)| {
        for (x, cell) in row.iter_mut().enumerate() {
            let dx = x as f64 - center;
            let dy = y as f64 - center;
            let d2 = dx * dx + dy * dy;
            *cell = if d2 > outer_r2 {
                EXTERIOR
            } else if d2 > inner_r2 {
                if angular_offset_to_spoke(dy.atan2(dx), spokes) <= slot_half_angle {
                    BURNED
                } else {
                    material
                }
            } else {
                BURNED
            };
        }
    });
    grid
}

/// Two-material wagon wheel: a slotted inner web of `web_material` between
/// `inner_frac` and `web_frac`, wrapped in a solid sleeve of `sleeve_material`
/// out to `outer_frac`.
///
/// The sleeve only ignites once the cavity search burns through the web, which
/// makes this the standard fixture for multi-material burn-through behavior.
#[allow(clippy::too_many_arguments)]
pub fn multi_material_wagon_wheel(
    dim: usize,
    inner_frac: f64,
    web_frac: f64,
    outer_frac: f64,
    spokes: u32,
    slot_half_angle: f64,
    web_material: MaterialCode,
    sleeve_material: MaterialCode,
) -> GrainGrid {
    let center = dim as f64 / 2.0;
    let inner_r2 = (center * inner_frac).powi(2);
    let web_r2 = (center * web_frac).powi(2);
    let outer_r2 = (center * outer_frac).powi(2);

    let mut grid = GrainGrid::new(dim);
    grid.cells.par_chunks_mut(dim).enumerate().for_each(|(y, row)| {
        for (x, cell) in row.iter_mut().enumerate() {
            let dx = x as f64 - center;
            let dy = y as f64 - center;
            let d2 = dx * dx + dy * dy;
            *cell = if d2 > outer_r2 {
                EXTERIOR
            } else if d2 > web_r2 {
                sleeve_material
            } else if d2 > inner_r2 {
                if angular_offset_to_spoke(dy.atan2(dx), spokes) <= slot_half_angle {
                    BURNED
                } else {
                    web_material
                }
            } else {
                BURNED
            };
        }
    });
    grid
}

/// Concentric shell stack: open bore inside `fracs[0]`, then one shell of
/// `materials[i]` between `fracs[i]` and `fracs[i + 1]`, exterior outside the
/// last fraction.
///
/// Panics unless `fracs` is ascending and `materials.len() == fracs.len() - 1`.
pub fn shell_stack(dim: usize, fracs: &[f64], materials: &[MaterialCode]) -> GrainGrid {
    assert_eq!(
        materials.len() + 1,
        fracs.len(),
        "need exactly one material per shell"
    );
    assert!(
        fracs.windows(2).all(|w| w[0] < w[1]),
        "shell fractions must be ascending"
    );

    let center = dim as f64 / 2.0;
    let bounds_r2: Vec<f64> = fracs.iter().map(|f| (center * f).powi(2)).collect();

    let mut grid = GrainGrid::new(dim);
    grid.cells.par_chunks_mut(dim).enumerate().for_each(|(y, row)| {
        for (x, cell) in row.iter_mut().enumerate() {
            let d2 = (x as f64 - center).powi(2) + (y as f64 - center).powi(2);
            *cell = if d2 <= bounds_r2[0] {
                BURNED
            } else {
                match bounds_r2[1..].iter().position(|&r2| d2 <= r2) {
                    Some(shell) => materials[shell],
                    None => EXTERIOR,
                }
            };
        }
    });
    grid
}

/// Randomly perforated grain: a solid disk of `material` out to `outer_frac`
/// with `holes` circular perforations of `hole_radius` cells punched to void.
///
/// Hole centers are drawn uniformly over the grid from a [`StdRng`] seeded
/// with `seed`, so a fixed seed reproduces the same grid.
pub fn perforated(
    dim: usize,
    outer_frac: f64,
    material: MaterialCode,
    holes: usize,
    hole_radius: u32,
    seed: u64,
) -> GrainGrid {
    let center = dim as f64 / 2.0;
    let outer_r2 = (center * outer_frac).powi(2);

    let mut grid = GrainGrid::new(dim);
    grid.cells.par_chunks_mut(dim).enumerate().for_each(|(y, row)| {
        for (x, cell) in row.iter_mut().enumerate() {
            let d2 = (x as f64 - center).powi(2) + (y as f64 - center).powi(2);
            *cell = if d2 > outer_r2 { EXTERIOR } else { material };
        }
    });

    let mut rng = StdRng::seed_from_u64(seed);
    let hole_r2 = i64::from(hole_radius) * i64::from(hole_radius);
    for _ in 0..holes {
        let hx = rng.random_range(0..dim) as i64;
        let hy = rng.random_range(0..dim) as i64;
        let r = i64::from(hole_radius);
        for y in (hy - r).max(0)..=(hy + r).min(dim as i64 - 1) {
            for x in (hx - r).max(0)..=(hx + r).min(dim as i64 - 1) {
                let d2 = (x - hx) * (x - hx) + (y - hy) * (y - hy);
                if d2 <= hole_r2 && grid.get(x as usize, y as usize) == material {
                    grid.set(x as usize, y as usize, BURNED);
                }
            }
        }
    }
    grid
}

/// Angular distance (radians) from `angle` to the nearest of `spokes` slot
/// centerlines spaced evenly around the circle.
fn angular_offset_to_spoke(angle: f64, spokes: u32) -> f64 {
    let sector = TAU / f64::from(spokes);
    let pos = angle / sector;
    (pos - pos.round()).abs() * sector
}
