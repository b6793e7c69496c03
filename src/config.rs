//! Floe Field Configuration and Builder
//!
//! This module provides configuration types for deterministic floe field generation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, VoronoiError};

/// Density presets for floe fields
///
/// Each preset maps to a seed count and a sample-grid resolution. Higher
/// density means more, smaller floes resolved on a finer grid.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FloeDensity {
    /// Sparse field: ~20 floes on a 400x400 grid
    Sparse,
    /// Standard field: ~40 floes on an 800x800 grid
    Standard,
    /// Dense field: ~80 floes on a 1200x1200 grid
    Dense,
    /// Custom density with explicit seed count and grid resolution
    Custom {
        /// Number of Voronoi seeds to scatter
        seed_count: usize,
        /// Side length of the square sample grid (>= 2)
        grid_resolution: usize,
    },
}

impl FloeDensity {
    /// Get the number of Voronoi seeds for this density
    pub fn seed_count(self) -> usize {
        match self {
            FloeDensity::Sparse => 20,
            FloeDensity::Standard => 40,
            FloeDensity::Dense => 80,
            FloeDensity::Custom { seed_count, .. } => seed_count,
        }
    }

    /// Get the sample-grid resolution for this density
    ///
    /// The grid has `resolution * resolution` samples; finer grids give
    /// smoother cell boundaries at quadratic cost.
    pub fn grid_resolution(self) -> usize {
        match self {
            FloeDensity::Sparse => 400,
            FloeDensity::Standard => 800,
            FloeDensity::Dense => 1200,
            FloeDensity::Custom {
                grid_resolution, ..
            } => grid_resolution,
        }
    }

    /// Get a human-readable name for this density
    pub fn name(self) -> &'static str {
        match self {
            FloeDensity::Sparse => "Sparse",
            FloeDensity::Standard => "Standard",
            FloeDensity::Dense => "Dense",
            FloeDensity::Custom { .. } => "Custom",
        }
    }
}

impl Default for FloeDensity {
    fn default() -> Self {
        FloeDensity::Standard
    }
}

/// Configuration for deterministic floe field generation
///
/// The same configuration always produces the identical field: seed
/// placement, relaxation, tessellation, and decoration are all driven by
/// the two seeds stored here.
///
/// # Serialization
///
/// Only the configuration is serialized (a few dozen bytes), not the
/// generated floes. A field is regenerated from its configuration.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloeConfig {
    /// Random seed for seed-point scattering
    ///
    /// The same seed (with the same density and iteration settings) always
    /// produces the exact same floe geometry.
    pub seed: u32,

    /// Density preset (determines seed count and grid resolution)
    pub density: FloeDensity,

    /// Side length of the square domain, spanning `[-domain_size/2, domain_size/2]^2`
    pub domain_size: f32,

    /// Number of Lloyd's relaxation iterations before tessellation
    ///
    /// - 0: raw random seeds (irregular cells)
    /// - 2-3: decent uniformity
    /// - 5: good uniformity (default, matches the classic setup)
    /// - 10+: diminishing returns, slower generation
    pub relaxation_iterations: usize,

    /// Convergence threshold for Lloyd's relaxation (fraction of domain size)
    ///
    /// Relaxation stops early when the maximum seed displacement falls below
    /// this threshold multiplied by the domain size. Set to 0.0 to always
    /// run all iterations.
    pub relax_convergence: f32,

    /// Random seed for floe decoration (colors, drift), separate from `seed`
    ///
    /// This allows the same geometry with different looks.
    pub decor_seed: u32,

    /// Override the grid resolution from the density preset
    pub grid_override: Option<usize>,
}

impl FloeConfig {
    /// Get the seed count for this configuration
    #[inline]
    pub fn seed_count(&self) -> usize {
        self.density.seed_count()
    }

    /// Get the sample-grid resolution for this configuration
    ///
    /// Returns the grid_override if set, otherwise the density preset value.
    #[inline]
    pub fn grid_resolution(&self) -> usize {
        self.grid_override
            .unwrap_or_else(|| self.density.grid_resolution())
    }
}

impl Default for FloeConfig {
    fn default() -> Self {
        FloeConfigBuilder::new().build().unwrap()
    }
}

/// Builder for creating FloeConfig with validation
///
/// # Example
///
/// ```rust
/// use voronoi_floe::*;
///
/// let config = FloeConfigBuilder::new()
///     .seed(42)
///     .density(FloeDensity::Sparse)
///     .relaxation_iterations(3)
///     .unwrap()
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FloeConfigBuilder {
    seed: Option<u32>,
    density: FloeDensity,
    domain_size: f32,
    relaxation_iterations: usize,
    relax_convergence: f32,
    decor_seed: Option<u32>,
    grid_override: Option<usize>,
}

impl FloeConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - seed: random (from thread_rng)
    /// - density: Standard (40 floes, 800x800 grid)
    /// - domain_size: 4.0 (the `[-2, 2]^2` space)
    /// - relaxation_iterations: 5
    /// - relax_convergence: 0.01 (stop when seeds move < 1% of domain size)
    /// - decor_seed: same as seed
    pub fn new() -> Self {
        Self {
            seed: None,
            density: FloeDensity::default(),
            domain_size: 4.0,
            relaxation_iterations: 5,
            relax_convergence: 0.01,
            decor_seed: None,
            grid_override: None,
        }
    }

    /// Set the random seed for seed-point scattering
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the density preset
    pub fn density(mut self, density: FloeDensity) -> Self {
        self.density = density;
        self
    }

    /// Set the domain side length
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the size is not strictly positive.
    pub fn domain_size(mut self, size: f32) -> Result<Self> {
        if size <= 0.0 {
            return Err(VoronoiError::InvalidConfig(format!(
                "domain size must be positive (got {})",
                size
            )));
        }
        self.domain_size = size;
        Ok(self)
    }

    /// Set the number of Lloyd's relaxation iterations
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if iterations > 20 (excessive and impractical)
    pub fn relaxation_iterations(mut self, iterations: usize) -> Result<Self> {
        if iterations > 20 {
            return Err(VoronoiError::InvalidConfig(format!(
                "relaxation iterations must be <= 20 (got {})",
                iterations
            )));
        }
        self.relaxation_iterations = iterations;
        Ok(self)
    }

    /// Set the convergence threshold for Lloyd's relaxation
    ///
    /// The threshold is a fraction of the domain size; 0.0 disables early
    /// termination.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the threshold is negative
    pub fn relax_convergence(mut self, threshold: f32) -> Result<Self> {
        if threshold < 0.0 {
            return Err(VoronoiError::InvalidConfig(format!(
                "convergence threshold must be >= 0 (got {})",
                threshold
            )));
        }
        self.relax_convergence = threshold;
        Ok(self)
    }

    /// Set a separate decoration seed
    ///
    /// If not set, the decoration seed matches the geometry seed. A
    /// different decoration seed keeps the same cell layout with different
    /// colors and drift.
    pub fn decor_seed(mut self, seed: u32) -> Self {
        self.decor_seed = Some(seed);
        self
    }

    /// Override the sample-grid resolution from the density preset
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the resolution is below 2 (the grid
    /// axis mapping divides by `resolution - 1`).
    pub fn grid_override(mut self, resolution: usize) -> Result<Self> {
        if resolution < 2 {
            return Err(VoronoiError::InvalidConfig(format!(
                "grid resolution must be >= 2 (got {})",
                resolution
            )));
        }
        self.grid_override = Some(resolution);
        Ok(self)
    }

    /// Build the configuration
    ///
    /// If no seed was provided, generates a random seed using thread_rng.
    pub fn build(self) -> Result<FloeConfig> {
        let seed = self.seed.unwrap_or_else(|| rand::random());
        let decor_seed = self.decor_seed.unwrap_or(seed);

        if let FloeDensity::Custom {
            grid_resolution, ..
        } = self.density
        {
            if grid_resolution < 2 {
                return Err(VoronoiError::InvalidConfig(format!(
                    "grid resolution must be >= 2 (got {})",
                    grid_resolution
                )));
            }
        }

        Ok(FloeConfig {
            seed,
            density: self.density,
            domain_size: self.domain_size,
            relaxation_iterations: self.relaxation_iterations,
            relax_convergence: self.relax_convergence,
            decor_seed,
            grid_override: self.grid_override,
        })
    }
}

impl Default for FloeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
