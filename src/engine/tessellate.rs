//! Grid-sampled Voronoi tessellation
//!
//! Classifies every sample of the grid by nearest seed and collects the
//! winning samples into per-seed point sets. No exact cell boundaries are
//! constructed; a cell is simply the set of grid samples closest to its
//! seed, which is what the renderer fans into a polygon after angular
//! ordering.

use glam::Vec2;

use super::classify::nearest_seed;
use crate::grid::SampleGrid;

/// A tessellated floe without decoration (geometry only)
///
/// This is an intermediate representation used during generation.
/// Decoration (color, drift) is attached later to create the final
/// [`FloeCell`](crate::cell::FloeCell).
#[derive(Debug, Clone)]
pub struct RawFloe {
    /// Unique floe identifier, equal to the seed index
    pub id: usize,
    /// Seed position this floe formed around
    pub seed: Vec2,
    /// Mean of the floe's sample points, or the seed position when the
    /// floe is empty
    pub centroid: Vec2,
    /// Grid samples assigned to this floe, in grid scan order
    pub points: Vec<Vec2>,
}

impl RawFloe {
    /// True when no grid sample was assigned to this floe
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Tessellate the grid by nearest seed
///
/// Every one of the `R^2` grid samples is assigned to exactly one floe
/// (partition of the grid); ties go to the lowest seed index. Returns one
/// floe per input seed, in seed order. A seed dominated everywhere by
/// closer neighbors yields an empty floe, which renderers can skip.
///
/// Cost is O(R^2 * N). Each call is a fresh full recomputation; there is
/// no incremental update as seeds move.
pub fn tessellate(seeds: &[Vec2], grid: SampleGrid) -> Vec<RawFloe> {
    let mut buckets: Vec<Vec<Vec2>> = vec![Vec::new(); seeds.len()];

    for pos in grid.samples() {
        if let Some(idx) = nearest_seed(pos, seeds) {
            buckets[idx].push(pos);
        }
    }

    buckets
        .into_iter()
        .enumerate()
        .map(|(id, points)| {
            let centroid = if points.is_empty() {
                seeds[id]
            } else {
                points.iter().copied().sum::<Vec2>() / points.len() as f32
            };
            RawFloe {
                id,
                seed: seeds[id],
                centroid,
                points,
            }
        })
        .collect()
}

/// Order points by angle around a center, ascending
///
/// Raw tessellation points arrive in grid scan order; drawing them as a
/// fan directly would self-intersect. Sorting by `atan2` around the
/// centroid yields a simple polygon boundary.
pub fn order_by_angle(points: &mut [Vec2], center: Vec2) {
    points.sort_by(|a, b| {
        let aa = (a.y - center.y).atan2(a.x - center.x);
        let ab = (b.y - center.y).atan2(b.x - center.x);
        aa.total_cmp(&ab)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::points::scatter_seeds;

    #[test]
    fn test_partition_covers_grid() {
        let grid = SampleGrid::new(4.0, 32);
        let seeds = scatter_seeds(10, 4.0, 42);
        let floes = tessellate(&seeds, grid);

        assert_eq!(floes.len(), 10);
        let total: usize = floes.iter().map(|f| f.points.len()).sum();
        assert_eq!(total, grid.len());
    }

    #[test]
    fn test_tessellate_idempotent() {
        let grid = SampleGrid::new(4.0, 24);
        let seeds = scatter_seeds(8, 4.0, 7);

        let a = tessellate(&seeds, grid);
        let b = tessellate(&seeds, grid);

        for (fa, fb) in a.iter().zip(b.iter()) {
            assert_eq!(fa.id, fb.id);
            assert_eq!(fa.points, fb.points);
            assert_eq!(fa.centroid, fb.centroid);
        }
    }

    #[test]
    fn test_single_seed_owns_grid() {
        let grid = SampleGrid::new(4.0, 16);
        let seeds = vec![Vec2::new(0.3, -1.2)];
        let floes = tessellate(&seeds, grid);

        assert_eq!(floes.len(), 1);
        assert_eq!(floes[0].points.len(), grid.len());
    }

    #[test]
    fn test_no_seeds() {
        let grid = SampleGrid::new(4.0, 16);
        let floes = tessellate(&[], grid);
        assert!(floes.is_empty());
    }

    #[test]
    fn test_duplicate_seed_yields_empty_floe() {
        let grid = SampleGrid::new(4.0, 16);
        let seeds = vec![Vec2::new(0.5, 0.5), Vec2::new(0.5, 0.5)];
        let floes = tessellate(&seeds, grid);

        // Every sample ties between the duplicates and goes to index 0.
        assert_eq!(floes[0].points.len(), grid.len());
        assert!(floes[1].is_empty());
        assert_eq!(floes[1].centroid, seeds[1]);
    }

    #[test]
    fn test_two_seed_scenario() {
        // Two diagonal seeds on a 4x4 grid over [-2, 2]^2. Every sample's
        // assignment must match an independent nearest-distance check, and
        // the exactly equidistant corners must go to seed 0.
        let grid = SampleGrid::new(4.0, 4);
        let seeds = vec![Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0)];
        let floes = tessellate(&seeds, grid);

        let total: usize = floes.iter().map(|f| f.points.len()).sum();
        assert_eq!(total, 16);
        assert!(!floes[0].is_empty());
        assert!(!floes[1].is_empty());

        for floe in &floes {
            for p in &floe.points {
                let d0 = p.distance_squared(seeds[0]);
                let d1 = p.distance_squared(seeds[1]);
                if floe.id == 0 {
                    assert!(d0 <= d1, "sample {:?} misassigned to seed 0", p);
                } else {
                    assert!(d1 < d0, "sample {:?} misassigned to seed 1", p);
                }
            }
        }

        // (-2, 2) and (2, -2) are exact ties; lowest index wins.
        assert!(floes[0].points.contains(&Vec2::new(-2.0, 2.0)));
        assert!(floes[0].points.contains(&Vec2::new(2.0, -2.0)));
        assert!(floes[0].points.contains(&Vec2::new(-2.0, -2.0)));
        assert!(floes[1].points.contains(&Vec2::new(2.0, 2.0)));
    }

    #[test]
    fn test_centroid_is_point_mean() {
        let grid = SampleGrid::new(4.0, 8);
        let seeds = vec![Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0)];
        let floes = tessellate(&seeds, grid);

        for floe in &floes {
            let mean = floe.points.iter().copied().sum::<Vec2>() / floe.points.len() as f32;
            assert!(floe.centroid.distance(mean) < 1e-6);
        }
    }

    #[test]
    fn test_order_by_angle_square() {
        let mut points = vec![
            Vec2::new(1.0, 1.0),
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(-1.0, 1.0),
        ];
        order_by_angle(&mut points, Vec2::ZERO);

        // atan2 ascends from -pi: third quadrant first, then fourth,
        // first, second.
        assert_eq!(
            points,
            vec![
                Vec2::new(-1.0, -1.0),
                Vec2::new(1.0, -1.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(-1.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_order_by_angle_is_simple_polygon_order() {
        let grid = SampleGrid::new(4.0, 16);
        let seeds = scatter_seeds(5, 4.0, 11);
        let floes = tessellate(&seeds, grid);

        for floe in floes.iter().filter(|f| f.points.len() >= 3) {
            let mut ordered = floe.points.clone();
            order_by_angle(&mut ordered, floe.centroid);

            let angles: Vec<f32> = ordered
                .iter()
                .map(|p| (p.y - floe.centroid.y).atan2(p.x - floe.centroid.x))
                .collect();
            for pair in angles.windows(2) {
                assert!(pair[0] <= pair[1]);
            }
        }
    }
}
