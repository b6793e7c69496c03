//! Core tessellation engine
//!
//! Scatters seed points in the domain, relaxes them toward centroidal
//! positions with Lloyd's algorithm, and classifies the sample grid by
//! nearest seed to produce per-seed point sets.

mod classify;
mod lloyd;
mod points;
mod tessellate;

pub use classify::nearest_seed;
pub use lloyd::{relax, relax_with_options, LloydOptions};
pub use points::scatter_seeds;
pub use tessellate::{order_by_angle, tessellate, RawFloe};

use crate::config::FloeConfig;
use crate::error::Result;
use crate::grid::SampleGrid;

/// Generate raw floes from a configuration (without decoration)
///
/// Runs the full pipeline: scatter seeds, relax them, tessellate the grid.
/// Returns floes with geometry only; decoration is attached separately.
pub fn generate_raw_floes(config: &FloeConfig) -> Result<Vec<RawFloe>> {
    let grid = SampleGrid::new(config.domain_size, config.grid_resolution());

    // Step 1: scatter random seeds in the inner domain
    let mut seeds = points::scatter_seeds(config.seed_count(), config.domain_size, config.seed);

    // Step 2: Lloyd's relaxation with convergence detection
    if config.relaxation_iterations > 0 {
        let options = LloydOptions {
            max_iterations: config.relaxation_iterations,
            convergence_threshold: config.relax_convergence,
        };
        lloyd::relax_with_options(&mut seeds, grid, options);
    }

    // Step 3: classify the grid into per-seed point sets
    Ok(tessellate::tessellate(&seeds, grid))
}
