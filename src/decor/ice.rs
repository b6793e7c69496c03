//! Ice-look decoration
//!
//! Gives each floe the look of drifting sea ice: a translucent blue-white
//! color and an outward drift velocity with a little per-floe speed
//! variation.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Drift, SeedDecorator};
use crate::engine::RawFloe;

/// RGBA color, each channel in `[0, 1]`
pub type Rgba = [f32; 4];

/// Tunable ranges for the ice look
///
/// Hue, saturation, value, and alpha are drawn uniformly per floe from the
/// ranges here; the defaults produce bright, slightly blue, translucent
/// floes on a dark background.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IceStyle {
    /// Base hue of the ice (0.55 is a pale blue)
    pub base_hue: f32,
    /// Half-width of the uniform hue jitter around the base
    pub hue_variation: f32,
    /// Saturation range; low values keep the ice whitish
    pub min_saturation: f32,
    pub max_saturation: f32,
    /// Value (brightness) range
    pub min_value: f32,
    pub max_value: f32,
    /// Alpha range for translucency
    pub min_alpha: f32,
    pub max_alpha: f32,
    /// Base outward drift speed, domain units per second
    pub base_drift_speed: f32,
    /// Half-width of the per-floe speed multiplier jitter around 1.0
    pub speed_variation: f32,
}

impl Default for IceStyle {
    fn default() -> Self {
        Self {
            base_hue: 0.55,
            hue_variation: 0.05,
            min_saturation: 0.1,
            max_saturation: 0.3,
            min_value: 0.85,
            max_value: 0.98,
            min_alpha: 0.2,
            max_alpha: 0.5,
            base_drift_speed: 0.001,
            speed_variation: 0.5,
        }
    }
}

/// Per-floe ice decoration: drift plus color
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IceDrift {
    /// Base drift velocity (outward from the domain center)
    pub velocity: Vec2,
    /// Individual speed multiplier applied on top of the base velocity
    pub speed_multiplier: f32,
    /// Translucent ice color
    pub color: Rgba,
}

impl Drift for IceDrift {
    #[inline]
    fn velocity(&self) -> Vec2 {
        self.velocity * self.speed_multiplier
    }
}

/// Decorator producing [`IceDrift`] decorations
///
/// Deterministic: each floe's randomness comes from a ChaCha8 stream keyed
/// by the decorator seed and the floe id, so decorations do not depend on
/// the order floes are decorated in.
#[derive(Debug, Clone, Copy)]
pub struct IceDecorator {
    /// Seed for the per-floe random streams
    pub seed: u32,
    /// Style ranges for color and drift
    pub style: IceStyle,
}

impl IceDecorator {
    /// Create a decorator with the default style
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            style: IceStyle::default(),
        }
    }

    /// Create a decorator with a custom style
    pub fn with_style(seed: u32, style: IceStyle) -> Self {
        Self { seed, style }
    }

    fn floe_rng(&self, id: usize) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(((self.seed as u64) << 32) ^ id as u64)
    }
}

impl SeedDecorator for IceDecorator {
    type Output = IceDrift;

    fn decorate(&self, floe: &RawFloe) -> IceDrift {
        let mut rng = self.floe_rng(floe.id);
        let style = &self.style;

        let hue = style.base_hue + jitter(&mut rng, style.hue_variation);
        let sat = range(&mut rng, style.min_saturation, style.max_saturation);
        let val = range(&mut rng, style.min_value, style.max_value);
        let alpha = range(&mut rng, style.min_alpha, style.max_alpha);

        // Floes drift outward from the domain center, away from the pack.
        // A floe centered exactly on the origin has no outward direction
        // and stays put.
        let velocity = floe.centroid.normalize_or_zero() * style.base_drift_speed;
        let speed_multiplier = 1.0 + jitter(&mut rng, style.speed_variation);

        IceDrift {
            velocity,
            speed_multiplier,
            color: hsv_to_rgba(hue, sat, val, alpha),
        }
    }
}

fn jitter(rng: &mut ChaCha8Rng, span: f32) -> f32 {
    if span > 0.0 {
        rng.gen_range(-span..span)
    } else {
        0.0
    }
}

fn range(rng: &mut ChaCha8Rng, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Convert an HSV color (hue wrapping in `[0, 1)`) plus alpha to RGBA
pub fn hsv_to_rgba(hue: f32, saturation: f32, value: f32, alpha: f32) -> Rgba {
    let h = (hue.rem_euclid(1.0)) * 6.0;
    let sector = h.floor() as i32 % 6;
    let f = h - h.floor();

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * f);
    let t = value * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match sector {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    [r, g, b, alpha]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_floe(id: usize, centroid: Vec2) -> RawFloe {
        RawFloe {
            id,
            seed: centroid,
            centroid,
            points: vec![centroid],
        }
    }

    #[test]
    fn test_hsv_red() {
        let c = hsv_to_rgba(0.0, 1.0, 1.0, 1.0);
        assert_eq!(c, [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_hsv_gray_when_desaturated() {
        let c = hsv_to_rgba(0.3, 0.0, 0.5, 1.0);
        assert!((c[0] - 0.5).abs() < 1e-6);
        assert!((c[1] - 0.5).abs() < 1e-6);
        assert!((c[2] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_hsv_hue_wraps() {
        let a = hsv_to_rgba(0.25, 0.8, 0.9, 1.0);
        let b = hsv_to_rgba(1.25, 0.8, 0.9, 1.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_decorator_determinism() {
        let decorator = IceDecorator::new(42);
        let floe = test_floe(3, Vec2::new(1.0, -0.5));

        let a = decorator.decorate(&floe);
        let b = decorator.decorate(&floe);
        assert_eq!(a, b);
    }

    #[test]
    fn test_decorator_varies_by_id() {
        let decorator = IceDecorator::new(42);
        let a = decorator.decorate(&test_floe(0, Vec2::new(1.0, 0.0)));
        let b = decorator.decorate(&test_floe(1, Vec2::new(1.0, 0.0)));
        assert_ne!(a.color, b.color);
    }

    #[test]
    fn test_ice_color_in_style_ranges() {
        let decorator = IceDecorator::new(7);
        let style = decorator.style;

        for id in 0..50 {
            let d = decorator.decorate(&test_floe(id, Vec2::new(0.5, 0.5)));
            for channel in &d.color[..3] {
                assert!(*channel >= 0.0 && *channel <= 1.0);
            }
            assert!(d.color[3] >= style.min_alpha && d.color[3] < style.max_alpha);
            // Bright, whitish ice
            assert!(d.color.iter().take(3).all(|c| *c > 0.5));
        }
    }

    #[test]
    fn test_drift_points_outward() {
        let decorator = IceDecorator::new(42);
        let floe = test_floe(5, Vec2::new(-1.0, 1.5));
        let d = decorator.decorate(&floe);

        assert!(d.velocity.dot(floe.centroid) > 0.0);
        assert!(
            (d.velocity.length() - decorator.style.base_drift_speed).abs() < 1e-6
        );
    }

    #[test]
    fn test_central_floe_does_not_drift() {
        let decorator = IceDecorator::new(42);
        let d = decorator.decorate(&test_floe(0, Vec2::ZERO));
        assert_eq!(d.velocity, Vec2::ZERO);
        assert_eq!(d.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_speed_multiplier_near_one() {
        let decorator = IceDecorator::new(9);
        for id in 0..50 {
            let d = decorator.decorate(&test_floe(id, Vec2::new(1.0, 0.0)));
            assert!(d.speed_multiplier > 0.5 && d.speed_multiplier < 1.5);
        }
    }

    #[test]
    fn test_effective_velocity_scales() {
        let d = IceDrift {
            velocity: Vec2::new(0.002, 0.0),
            speed_multiplier: 1.5,
            color: [1.0; 4],
        };
        assert!((d.velocity().x - 0.003).abs() < 1e-7);
    }
}
