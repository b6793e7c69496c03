//! Sample grid over the square domain
//!
//! The tessellation never constructs exact Voronoi boundaries; instead it
//! classifies every point of a regular R x R grid spanning
//! `[-domain_size/2, domain_size/2]^2` by nearest seed. The grid is implicit:
//! sample positions are computed on demand rather than stored, so scanning
//! costs no O(R^2) memory.

use glam::Vec2;

/// An implicit square grid of sample points over the domain
///
/// Axis index `i` in `0..resolution` maps to the world coordinate
/// `(i / (resolution - 1)) * domain_size - domain_size / 2`, so the first
/// and last samples lie exactly on the domain boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid {
    /// Side length of the square domain
    pub domain_size: f32,
    /// Number of samples per axis (>= 2)
    pub resolution: usize,
}

impl SampleGrid {
    /// Create a grid over `[-domain_size/2, domain_size/2]^2`
    ///
    /// Preconditions (documented, not checked): `domain_size > 0` and
    /// `resolution >= 2`. A resolution below 2 would divide by zero in the
    /// axis mapping.
    pub fn new(domain_size: f32, resolution: usize) -> Self {
        Self {
            domain_size,
            resolution,
        }
    }

    /// Total number of samples on the grid
    #[inline]
    pub fn len(&self) -> usize {
        self.resolution * self.resolution
    }

    /// True when the grid has no samples
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.resolution == 0
    }

    /// World coordinate of axis index `i`
    #[inline]
    pub fn axis_position(&self, i: usize) -> f32 {
        (i as f32) / (self.resolution - 1) as f32 * self.domain_size - self.domain_size / 2.0
    }

    /// World position of grid cell `(ix, iy)`
    #[inline]
    pub fn position(&self, ix: usize, iy: usize) -> Vec2 {
        Vec2::new(self.axis_position(ix), self.axis_position(iy))
    }

    /// Spacing between adjacent samples along one axis
    #[inline]
    pub fn spacing(&self) -> f32 {
        self.domain_size / (self.resolution - 1) as f32
    }

    /// Half the domain side length
    #[inline]
    pub fn half_extent(&self) -> f32 {
        self.domain_size / 2.0
    }

    /// Iterate over all sample positions in scan order
    ///
    /// Scan order is x index ascending, then y index ascending within each
    /// column. The iterator is lazy and restartable; calling `samples` again
    /// yields the identical sequence.
    pub fn samples(&self) -> Samples {
        Samples {
            grid: *self,
            ix: 0,
            iy: 0,
        }
    }
}

/// Lazy iterator over the sample positions of a [`SampleGrid`]
#[derive(Debug, Clone)]
pub struct Samples {
    grid: SampleGrid,
    ix: usize,
    iy: usize,
}

impl Iterator for Samples {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        if self.ix >= self.grid.resolution {
            return None;
        }
        let pos = self.grid.position(self.ix, self.iy);
        self.iy += 1;
        if self.iy >= self.grid.resolution {
            self.iy = 0;
            self.ix += 1;
        }
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let done = self.ix * self.grid.resolution + self.iy;
        let remaining = self.grid.len() - done;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Samples {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_endpoints_on_boundary() {
        let grid = SampleGrid::new(4.0, 800);
        assert_eq!(grid.axis_position(0), -2.0);
        assert_eq!(grid.axis_position(799), 2.0);
    }

    #[test]
    fn test_sample_count() {
        let grid = SampleGrid::new(4.0, 16);
        assert_eq!(grid.len(), 256);
        assert_eq!(grid.samples().count(), 256);
    }

    #[test]
    fn test_samples_within_domain() {
        let grid = SampleGrid::new(6.0, 33);
        for pos in grid.samples() {
            assert!(pos.x >= -3.0 && pos.x <= 3.0);
            assert!(pos.y >= -3.0 && pos.y <= 3.0);
        }
    }

    #[test]
    fn test_scan_order() {
        // x outer, y inner: the first `resolution` samples share the same x
        let grid = SampleGrid::new(4.0, 4);
        let samples: Vec<Vec2> = grid.samples().collect();
        assert_eq!(samples[0], grid.position(0, 0));
        assert_eq!(samples[1], grid.position(0, 1));
        assert_eq!(samples[3], grid.position(0, 3));
        assert_eq!(samples[4], grid.position(1, 0));
        assert_eq!(samples[15], grid.position(3, 3));
    }

    #[test]
    fn test_restartable() {
        let grid = SampleGrid::new(4.0, 8);
        let first: Vec<Vec2> = grid.samples().collect();
        let second: Vec<Vec2> = grid.samples().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_exact_size() {
        let grid = SampleGrid::new(4.0, 5);
        let mut iter = grid.samples();
        assert_eq!(iter.len(), 25);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 23);
    }

    #[test]
    fn test_minimum_resolution() {
        // R = 2 puts all four samples on the domain corners
        let grid = SampleGrid::new(4.0, 2);
        let samples: Vec<Vec2> = grid.samples().collect();
        assert_eq!(samples.len(), 4);
        assert!(samples.contains(&Vec2::new(-2.0, -2.0)));
        assert!(samples.contains(&Vec2::new(2.0, 2.0)));
    }
}
