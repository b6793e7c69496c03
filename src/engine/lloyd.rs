//! Lloyd's relaxation over the sample grid
//!
//! Lloyd's relaxation iteratively improves the uniformity of the seed
//! distribution by moving each seed to the centroid of its Voronoi cell.
//! Cells are approximated by the discrete sample grid: every grid sample
//! votes for its nearest seed, and each seed moves to the mean of the
//! samples it won.

use glam::Vec2;
use std::time::Instant;

use super::classify::nearest_seed;
use crate::grid::SampleGrid;

/// Options for Lloyd's relaxation
#[derive(Debug, Clone, Copy)]
pub struct LloydOptions {
    /// Maximum number of iterations to run
    pub max_iterations: usize,
    /// Convergence threshold as a fraction of the domain size.
    /// Relaxation stops early when the maximum seed displacement in one
    /// iteration falls below `threshold * domain_size`. Set to 0.0 to
    /// disable early termination.
    pub convergence_threshold: f32,
}

impl Default for LloydOptions {
    fn default() -> Self {
        Self {
            max_iterations: 5,
            // For the standard domain of 4.0 this stops when no seed moves
            // more than 0.04 units in an iteration, which typically triggers
            // after 3-4 iterations.
            convergence_threshold: 0.01,
        }
    }
}

/// Apply Lloyd's relaxation to the seed set
///
/// Runs up to `iterations` full grid scans. Each scan assigns every sample
/// to its nearest seed (O(R^2 * N)), then moves each seed to the mean of
/// its assigned samples. A seed that wins no samples keeps its position.
///
/// Deterministic for identical input; ties on the nearest-seed scan go to
/// the lowest seed index. `N = 0` is a no-op.
pub fn relax(seeds: &mut [Vec2], grid: SampleGrid, iterations: usize) {
    let options = LloydOptions {
        max_iterations: iterations,
        ..Default::default()
    };
    relax_with_options(seeds, grid, options);
}

/// Apply Lloyd's relaxation with custom options
///
/// This variant allows control over convergence detection. Use [`relax`]
/// for the simple interface.
///
/// Returns the number of iterations actually run (may be fewer than
/// `max_iterations` when the displacement threshold is reached).
pub fn relax_with_options(seeds: &mut [Vec2], grid: SampleGrid, options: LloydOptions) -> usize {
    if seeds.is_empty() {
        return 0;
    }

    let convergence_threshold = options.convergence_threshold * grid.domain_size;
    let total_start = Instant::now();

    eprintln!(
        "[lloyd] starting: {} seeds, {}x{} grid, max {} iterations, threshold {:.4}",
        seeds.len(),
        grid.resolution,
        grid.resolution,
        options.max_iterations,
        convergence_threshold
    );

    let mut iterations_run = 0;
    let mut converged = false;

    for iteration in 0..options.max_iterations {
        let iter_start = Instant::now();
        let max_displacement = relax_step(seeds, grid);
        iterations_run = iteration + 1;

        eprintln!(
            "[lloyd] iter {}: {:?}, max_disp={:.4}",
            iteration + 1,
            iter_start.elapsed(),
            max_displacement
        );

        if convergence_threshold > 0.0 && max_displacement < convergence_threshold {
            converged = true;
            break;
        }
    }

    eprintln!(
        "[lloyd] finished: {} iterations (of max {}), converged={}, total={:?}",
        iterations_run,
        options.max_iterations,
        converged,
        total_start.elapsed()
    );

    iterations_run
}

/// One relaxation step: move every seed to its discrete cell centroid
///
/// Returns the maximum displacement of any seed in this step.
fn relax_step(seeds: &mut [Vec2], grid: SampleGrid) -> f32 {
    let mut sums = vec![Vec2::ZERO; seeds.len()];
    let mut counts = vec![0usize; seeds.len()];

    for pos in grid.samples() {
        if let Some(idx) = nearest_seed(pos, seeds) {
            sums[idx] += pos;
            counts[idx] += 1;
        }
    }

    let mut max_displacement: f32 = 0.0;
    for (i, seed) in seeds.iter_mut().enumerate() {
        // A dominated seed with an empty cell stays put.
        if counts[i] > 0 {
            let centroid = sums[i] / counts[i] as f32;
            let displacement = seed.distance(centroid);
            if displacement > max_displacement {
                max_displacement = displacement;
            }
            *seed = centroid;
        }
    }

    max_displacement
}
