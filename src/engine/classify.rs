//! Nearest-seed classification
//!
//! The single classification primitive shared by relaxation and
//! tessellation: given a sample position, find the index of the closest
//! seed by squared Euclidean distance.

use glam::Vec2;

/// Find the index of the seed nearest to `pos`
///
/// Linear scan in ascending index order with a strict `<` comparison, so
/// when two seeds are exactly equidistant the lower index wins. This
/// tie-break is deterministic and stable across runs.
///
/// Returns `None` when the seed slice is empty.
#[inline]
pub fn nearest_seed(pos: Vec2, seeds: &[Vec2]) -> Option<usize> {
    let mut nearest = None;
    let mut min_dist = f32::MAX;

    for (idx, seed) in seeds.iter().enumerate() {
        let d = pos.distance_squared(*seed);
        if d < min_dist {
            min_dist = d;
            nearest = Some(idx);
        }
    }

    nearest
}
