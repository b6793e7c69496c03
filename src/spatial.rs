//! Spatial indexing for fast position-to-floe lookups
//!
//! This module is only available with the `spatial-index` feature.

#[cfg(feature = "spatial-index")]
use glam::Vec2;
#[cfg(feature = "spatial-index")]
use kiddo::immutable::float::kdtree::ImmutableKdTree;
#[cfg(feature = "spatial-index")]
use kiddo::SquaredEuclidean;

/// Wrapper around a 2D KD-tree for nearest-seed queries
///
/// The reference tessellation scan is a deliberate linear pass over all
/// seeds; this index exists for the caller-facing query path (picking,
/// hit-testing) where O(log n) lookups matter and the full scan would be
/// wasteful.
#[cfg(feature = "spatial-index")]
#[derive(Clone)]
pub struct SpatialIndex {
    tree: ImmutableKdTree<f32, usize, 2, 32>,
}

#[cfg(feature = "spatial-index")]
impl SpatialIndex {
    /// Build a spatial index from seed positions
    ///
    /// Called once per tessellation; queries against the index reflect the
    /// seed positions it was built from.
    ///
    /// # Example
    ///
    /// ```
    /// use voronoi_floe::SpatialIndex;
    /// use glam::Vec2;
    ///
    /// let seeds = vec![Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0)];
    /// let index = SpatialIndex::new(&seeds);
    /// assert_eq!(index.find_nearest(Vec2::new(-0.8, 0.2)), 0);
    /// ```
    pub fn new(seeds: &[Vec2]) -> Self {
        let points: Vec<[f32; 2]> = seeds.iter().map(|s| [s.x, s.y]).collect();

        Self {
            tree: ImmutableKdTree::new_from_slice(&points),
        }
    }

    /// Find the index of the seed nearest to a position
    ///
    /// O(log n) KD-tree nearest-neighbor search. Tie-breaking between
    /// exactly equidistant seeds is the tree's, not the linear scan's; use
    /// [`nearest_seed`](crate::engine::nearest_seed) when the lowest-index
    /// guarantee matters.
    pub fn find_nearest(&self, position: Vec2) -> usize {
        let query = [position.x, position.y];
        let result = self.tree.nearest_one::<SquaredEuclidean>(&query);
        result.item as usize
    }
}
