//! Seed point scattering
//!
//! Scatters the initial Voronoi seeds uniformly at random inside the
//! central region of the domain. Scattering only the inner half of each
//! axis leaves a margin so relaxed cells do not collapse against the
//! domain boundary; Lloyd's relaxation then spreads the seeds outward.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Fraction of the domain size used as the scatter half-extent
///
/// 0.25 means seeds start inside `[-domain_size/4, domain_size/4]^2`,
/// the inner half of each axis.
const SCATTER_FRACTION: f32 = 0.25;

/// Scatter `count` seed points inside the domain
///
/// Deterministic for a given seed: the same `(count, domain_size, seed)`
/// triple always produces the identical point sequence (ChaCha8 stream).
///
/// # Arguments
///
/// * `count` - Number of seeds to place (0 yields an empty vec)
/// * `domain_size` - Side length of the square domain
/// * `seed` - Random seed for deterministic placement
pub fn scatter_seeds(count: usize, domain_size: f32, seed: u32) -> Vec<Vec2> {
    if count == 0 {
        return Vec::new();
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
    let extent = domain_size * SCATTER_FRACTION;

    (0..count)
        .map(|_| {
            Vec2::new(
                rng.gen_range(-extent..extent),
                rng.gen_range(-extent..extent),
            )
        })
        .collect()
}
