//! FloeField main structure

use glam::Vec2;

use crate::cell::FloeCell;
use crate::config::FloeConfig;
use crate::decor::{Drift, IceDecorator, IceDrift, SeedDecorator};
use crate::engine::{generate_raw_floes, tessellate};
use crate::error::Result;
use crate::grid::SampleGrid;

#[cfg(feature = "spatial-index")]
use crate::spatial::SpatialIndex;

/// A complete tessellated floe field
///
/// Generic over the decoration type `T`. The field owns the decorated
/// floes and the grid parameters, and drives the per-frame pipeline:
/// advect floes, re-tessellate, hand the cells to a renderer.
///
/// # Examples
///
/// ```
/// use voronoi_floe::*;
///
/// let config = FloeConfigBuilder::new()
///     .seed(42)
///     .density(FloeDensity::Custom { seed_count: 10, grid_resolution: 64 })
///     .build()
///     .unwrap();
///
/// let mut field = FloeField::generate(config).unwrap();
/// assert_eq!(field.floe_count(), 10);
///
/// // One animation tick
/// field.advect(1.0 / 60.0);
/// field.retessellate();
/// ```
#[derive(Clone)]
pub struct FloeField<T> {
    /// Configuration used to generate this field
    config: FloeConfig,

    /// All floes in the field (indexed by floe ID)
    floes: Vec<FloeCell<T>>,

    /// Grid the field was tessellated against
    grid: SampleGrid,

    /// Spatial index over seed positions, rebuilt on re-tessellation
    #[cfg(feature = "spatial-index")]
    spatial_index: Option<SpatialIndex>,
}

impl FloeField<IceDrift> {
    /// Generate a field with the default ice decoration
    ///
    /// This is the most common way to create a field: icy translucent
    /// colors and outward drift, seeded from `config.decor_seed`.
    pub fn generate(config: FloeConfig) -> Result<Self> {
        let decorator = IceDecorator::new(config.decor_seed);
        Self::generate_with_decorator(config, &decorator)
    }
}

impl<T> FloeField<T> {
    /// Generate a field with a custom decorator
    ///
    /// The decorator is called once per floe after relaxation and
    /// tessellation, with the floe's final geometry.
    pub fn generate_with_decorator<D>(config: FloeConfig, decorator: &D) -> Result<Self>
    where
        D: SeedDecorator<Output = T>,
    {
        let grid = SampleGrid::new(config.domain_size, config.grid_resolution());
        let raw_floes = generate_raw_floes(&config)?;

        let floes: Vec<FloeCell<T>> = raw_floes
            .into_iter()
            .map(|raw| {
                let decor = decorator.decorate(&raw);
                FloeCell::new(raw.id, raw.seed, raw.centroid, raw.points, decor)
            })
            .collect();

        #[cfg(feature = "spatial-index")]
        let spatial_index = build_index(&floes);

        Ok(Self {
            config,
            floes,
            grid,
            #[cfg(feature = "spatial-index")]
            spatial_index,
        })
    }

    /// Get the configuration used to generate this field
    #[inline]
    pub fn config(&self) -> &FloeConfig {
        &self.config
    }

    /// Get the number of floes in this field
    #[inline]
    pub fn floe_count(&self) -> usize {
        self.floes.len()
    }

    /// Get the sample grid of this field
    #[inline]
    pub fn sample_grid(&self) -> SampleGrid {
        self.grid
    }

    /// Get a floe by ID
    ///
    /// Returns `None` if the floe ID is out of bounds.
    #[inline]
    pub fn get_floe(&self, id: usize) -> Option<&FloeCell<T>> {
        self.floes.get(id)
    }

    /// Get all floes as a slice
    #[inline]
    pub fn floes(&self) -> &[FloeCell<T>] {
        &self.floes
    }

    /// Current seed positions, in floe order
    pub fn seeds(&self) -> Vec<Vec2> {
        self.floes.iter().map(|f| f.seed).collect()
    }

    /// Total number of sample points across all floes
    ///
    /// Immediately after generation or [`retessellate`](Self::retessellate)
    /// this equals the grid's sample count (the tessellation partitions
    /// the grid).
    pub fn total_points(&self) -> usize {
        self.floes.iter().map(|f| f.points.len()).sum()
    }

    /// Advect every floe by a caller-supplied velocity
    ///
    /// Each floe is translated rigidly by `velocity(floe) * dt`. Cells
    /// become stale relative to the seed positions once floes have moved
    /// apart; call [`retessellate`](Self::retessellate) when the cell
    /// partition should be recomputed.
    pub fn advect_with<F>(&mut self, dt: f32, velocity: F)
    where
        F: Fn(&FloeCell<T>) -> Vec2,
    {
        for floe in &mut self.floes {
            let offset = velocity(floe) * dt;
            floe.translate(offset);
        }
    }

    /// Recompute the cell partition from the current seed positions
    ///
    /// A fresh full tessellation of the grid: every floe's point set and
    /// centroid are replaced, decorations are kept, and the spatial index
    /// is rebuilt. Call after advection whenever up-to-date cells are
    /// needed (every frame, or on a timer).
    pub fn retessellate(&mut self) {
        let seeds = self.seeds();
        let raw = tessellate(&seeds, self.grid);

        for (floe, fresh) in self.floes.iter_mut().zip(raw) {
            floe.centroid = fresh.centroid;
            floe.points = fresh.points;
        }

        #[cfg(feature = "spatial-index")]
        {
            self.spatial_index = build_index(&self.floes);
        }
    }

    /// Find the floe nearest to a position (requires `spatial-index`)
    ///
    /// O(log n) KD-tree lookup against the seed positions of the most
    /// recent tessellation. Returns `None` for an empty field.
    #[cfg(feature = "spatial-index")]
    pub fn find_floe_at(&self, position: Vec2) -> Option<usize> {
        self.spatial_index
            .as_ref()
            .map(|index| index.find_nearest(position))
    }
}

impl<T: Drift> FloeField<T> {
    /// Advect every floe by its own drift velocity
    pub fn advect(&mut self, dt: f32) {
        for floe in &mut self.floes {
            let offset = floe.decor.velocity() * dt;
            floe.translate(offset);
        }
    }
}

#[cfg(feature = "spatial-index")]
fn build_index<T>(floes: &[FloeCell<T>]) -> Option<SpatialIndex> {
    if floes.is_empty() {
        return None;
    }
    let seeds: Vec<Vec2> = floes.iter().map(|f| f.seed).collect();
    Some(SpatialIndex::new(&seeds))
}
