//! Floe cell structure
//!
//! Represents a single Voronoi floe with its sample points and an attached
//! decoration.

use glam::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::engine::order_by_angle;

/// A single Voronoi floe in the field
///
/// Each floe is one Voronoi cell of the tessellated domain:
/// - A stable ID (equal to its seed index for a generation run)
/// - The seed position the cell formed around
/// - The centroid and point set of its grid samples
/// - A decoration (generic `T`) attached by a [`SeedDecorator`]
///
/// The geometric core carries no color or velocity of its own; anything a
/// renderer or animator needs beyond geometry lives in `decor`.
///
/// [`SeedDecorator`]: crate::decor::SeedDecorator
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct FloeCell<T> {
    /// Unique identifier for this floe (0 to floe_count-1)
    pub id: usize,

    /// Seed position of the floe
    ///
    /// This is the relaxed seed the tessellation classified against. It is
    /// advected together with the points so re-tessellation after drift
    /// reflects the moved floe.
    pub seed: Vec2,

    /// Centroid of the floe's sample points
    ///
    /// Falls back to the seed position for an empty floe.
    pub centroid: Vec2,

    /// Grid samples assigned to this floe, in grid scan order
    ///
    /// Scan order is not a polygon order; use [`boundary`](Self::boundary)
    /// before drawing the floe as a filled shape.
    pub points: Vec<Vec2>,

    /// Decoration attached at generation time (color, drift, anything)
    pub decor: T,
}

impl<T> FloeCell<T> {
    /// Create a new floe cell
    ///
    /// This is typically called during field generation, not by user code.
    pub fn new(id: usize, seed: Vec2, centroid: Vec2, points: Vec<Vec2>, decor: T) -> Self {
        Self {
            id,
            seed,
            centroid,
            points,
            decor,
        }
    }

    /// Number of grid samples in this floe
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// True when the floe won no grid samples
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The floe's points ordered by angle around the centroid
    ///
    /// This is the order a renderer needs to fan the floe into a simple
    /// polygon; the stored scan order would self-intersect.
    pub fn boundary(&self) -> Vec<Vec2> {
        let mut ordered = self.points.clone();
        order_by_angle(&mut ordered, self.centroid);
        ordered
    }

    /// Approximate area of the floe via the shoelace formula
    ///
    /// Computed over the angle-ordered boundary, so this is the area of the
    /// polygon through every sample point, not the count-based grid area.
    /// Returns 0.0 for floes with fewer than 3 points.
    pub fn approximate_area(&self) -> f32 {
        if self.points.len() < 3 {
            return 0.0;
        }

        let boundary = self.boundary();
        let mut twice_area = 0.0;
        for i in 0..boundary.len() {
            let a = boundary[i];
            let b = boundary[(i + 1) % boundary.len()];
            twice_area += a.x * b.y - b.x * a.y;
        }
        twice_area.abs() * 0.5
    }

    /// Euclidean distance between this floe's centroid and another's
    pub fn distance_to(&self, other: &FloeCell<T>) -> f32 {
        self.centroid.distance(other.centroid)
    }

    /// Move the whole floe by an offset
    ///
    /// Shifts the seed, the centroid, and every sample point together, the
    /// way a drifting floe moves as one rigid piece.
    pub fn translate(&mut self, offset: Vec2) {
        self.seed += offset;
        self.centroid += offset;
        for p in &mut self.points {
            *p += offset;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_cell() -> FloeCell<()> {
        FloeCell::new(
            0,
            Vec2::ZERO,
            Vec2::ZERO,
            vec![
                Vec2::new(1.0, 1.0),
                Vec2::new(-1.0, 1.0),
                Vec2::new(1.0, -1.0),
                Vec2::new(-1.0, -1.0),
            ],
            (),
        )
    }

    #[test]
    fn test_cell_creation() {
        let cell = square_cell();
        assert_eq!(cell.id, 0);
        assert_eq!(cell.point_count(), 4);
        assert!(!cell.is_empty());
    }

    #[test]
    fn test_boundary_ordering() {
        let cell = square_cell();
        let boundary = cell.boundary();

        let angles: Vec<f32> = boundary
            .iter()
            .map(|p| (p.y - cell.centroid.y).atan2(p.x - cell.centroid.x))
            .collect();
        for pair in angles.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_approximate_area_square() {
        // 2x2 axis-aligned square through the four corner points
        let cell = square_cell();
        assert!((cell.approximate_area() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_area_degenerate() {
        let cell: FloeCell<()> = FloeCell::new(
            0,
            Vec2::ZERO,
            Vec2::ZERO,
            vec![Vec2::new(1.0, 0.0), Vec2::new(-1.0, 0.0)],
            (),
        );
        assert_eq!(cell.approximate_area(), 0.0);
    }

    #[test]
    fn test_distance_to() {
        let a: FloeCell<()> = FloeCell::new(0, Vec2::ZERO, Vec2::new(-1.0, 0.0), vec![], ());
        let b: FloeCell<()> = FloeCell::new(1, Vec2::ZERO, Vec2::new(2.0, 4.0), vec![], ());
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_translate_moves_everything() {
        let mut cell = square_cell();
        cell.translate(Vec2::new(0.5, -0.25));

        assert_eq!(cell.seed, Vec2::new(0.5, -0.25));
        assert_eq!(cell.centroid, Vec2::new(0.5, -0.25));
        assert_eq!(cell.points[0], Vec2::new(1.5, 0.75));

        // Shape is rigid: area unchanged under translation
        assert!((cell.approximate_area() - 4.0).abs() < 1e-5);
    }
}
