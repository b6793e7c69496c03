//! Floe decoration
//!
//! The tessellation engine produces pure geometry. Anything a renderer or
//! animator wants on top of that (a color per floe, a drift velocity) is
//! attached by a decorator so the geometric core stays free of any random
//! number source and is testable with fixed seed positions.

mod ice;

pub use ice::{hsv_to_rgba, IceDecorator, IceDrift, IceStyle, Rgba};

use glam::Vec2;

use crate::engine::RawFloe;

/// Trait for attaching a decoration to each generated floe
///
/// Called once per floe during field generation. Implementations should be
/// deterministic in the floe (derive any randomness from the floe id) so
/// the same configuration always produces the same field.
pub trait SeedDecorator {
    /// The decoration produced for each floe
    type Output;

    /// Decorate one raw floe
    fn decorate(&self, floe: &RawFloe) -> Self::Output;
}

/// A decoration that carries a per-floe drift velocity
///
/// Fields of drifting floes can be advected generically via
/// [`FloeField::advect`](crate::field::FloeField::advect).
pub trait Drift {
    /// Effective drift velocity in domain units per second
    fn velocity(&self) -> Vec2;
}

/// Decorator that attaches the unit decoration
///
/// Useful when only the geometry is wanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDecor;

impl SeedDecorator for NoDecor {
    type Output = ();

    fn decorate(&self, _floe: &RawFloe) {}
}
