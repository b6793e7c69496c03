//! Color mapping for floe decorations

use crate::decor::{IceDrift, Rgba};

/// Trait for mapping a floe decoration to a fill color
pub trait ColorMapper<T> {
    /// Map a decoration to an RGBA color
    fn map_color(&self, decor: &T) -> Rgba;
}

/// Mapper that reads the color stored in an [`IceDrift`] decoration
#[derive(Debug, Clone, Copy, Default)]
pub struct DriftColorMapper;

impl ColorMapper<IceDrift> for DriftColorMapper {
    fn map_color(&self, decor: &IceDrift) -> Rgba {
        decor.color
    }
}

/// Mapper that paints every floe the same color, whatever its decoration
#[derive(Debug, Clone, Copy)]
pub struct UniformColorMapper {
    pub color: Rgba,
}

impl UniformColorMapper {
    pub fn new(color: Rgba) -> Self {
        Self { color }
    }
}

impl Default for UniformColorMapper {
    fn default() -> Self {
        // Pale icy blue
        Self {
            color: [0.7, 0.9, 1.0, 0.4],
        }
    }
}

impl<T> ColorMapper<T> for UniformColorMapper {
    fn map_color(&self, _decor: &T) -> Rgba {
        self.color
    }
}
