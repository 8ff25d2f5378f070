//! Circular neighborhood query
//!
//! Enumerates every cell within a Euclidean radius of a center cell, clipped
//! to the grid bounds, by rasterizing one quadrant of the disk and mirroring
//! the four sign combinations.

use crate::core_types::CellIndex;

/// All cells within Euclidean distance `radius` of `cell`, clipped to
/// `[0, dim) x [0, dim)`.
///
/// Where an offset lies on an axis (`dx == 0` or `dy == 0`) two or more of the
/// four mirrored sign combinations coincide, so the same index is emitted more
/// than once in one call. Callers must be idempotent under duplicates (set
/// insertion or already-burned checks); the duplicates are part of the
/// contract and are deliberately not filtered here.
pub fn neighbors_within(cell: CellIndex, radius: u32, dim: usize) -> Vec<CellIndex> {
    let (cx, cy) = cell;
    let r2 = u64::from(radius) * u64::from(radius);
    let side = 2 * radius as usize + 1;
    let mut neighbors = Vec::with_capacity(side * side);

    for dx in 0..=radius as usize {
        // +/- y span for this x offset on the disk boundary
        let dy_max = ((r2 - (dx as u64) * (dx as u64)) as f64).sqrt().floor() as usize;
        for dy in 0..=dy_max {
            if cx + dx < dim && cy + dy < dim {
                neighbors.push((cx + dx, cy + dy));
            }
            if cx + dx < dim && cy >= dy {
                neighbors.push((cx + dx, cy - dy));
            }
            if cx >= dx && cy + dy < dim {
                neighbors.push((cx - dx, cy + dy));
            }
            if cx >= dx && cy >= dy {
                neighbors.push((cx - dx, cy - dy));
            }
        }
    }
    neighbors
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_radius_zero_emits_center_four_times() {
        let neighbors = neighbors_within((5, 5), 0, 10);
        assert_eq!(neighbors, vec![(5, 5); 4]);
    }

    #[test]
    fn test_radius_one_covers_the_cross() {
        let neighbors: FxHashSet<_> = neighbors_within((5, 5), 1, 10).into_iter().collect();
        let expected: FxHashSet<_> = [(5, 5), (6, 5), (4, 5), (5, 6), (5, 4)]
            .into_iter()
            .collect();
        assert_eq!(neighbors, expected);
    }

    #[test]
    fn test_duplicates_are_emitted_on_axes() {
        let neighbors = neighbors_within((5, 5), 1, 10);
        let distinct: FxHashSet<_> = neighbors.iter().copied().collect();
        assert!(neighbors.len() > distinct.len());
    }

    #[test]
    fn test_clipped_at_the_origin_corner() {
        let neighbors: FxHashSet<_> = neighbors_within((0, 0), 2, 10).into_iter().collect();
        for &(x, y) in &neighbors {
            assert!(x < 10 && y < 10);
        }
        // Negative offsets were clipped away; only the positive quadrant stays
        let expected: FxHashSet<_> = [(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (0, 2)]
            .into_iter()
            .collect();
        assert_eq!(neighbors, expected);
    }

    #[test]
    fn test_all_within_euclidean_distance() {
        let radius = 4;
        for (x, y) in neighbors_within((10, 10), radius, 32) {
            let dx = x as i64 - 10;
            let dy = y as i64 - 10;
            assert!(dx * dx + dy * dy <= i64::from(radius) * i64::from(radius));
        }
    }

    #[test]
    fn test_disk_is_complete() {
        // Every in-bounds cell at distance <= r must be emitted at least once
        let radius: u32 = 3;
        let emitted: FxHashSet<_> = neighbors_within((10, 10), radius, 32).into_iter().collect();
        for y in 0i64..32 {
            for x in 0i64..32 {
                let d2 = (x - 10) * (x - 10) + (y - 10) * (y - 10);
                if d2 <= i64::from(radius * radius) {
                    assert!(emitted.contains(&(x as usize, y as usize)));
                }
            }
        }
    }
}
