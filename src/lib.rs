//! Grid-sampled 2D Voronoi tessellation with Lloyd's relaxation
//!
//! A standalone library for generating animated "floe fields": seed points
//! in a bounded square domain are relaxed toward centroidal Voronoi
//! positions, then every point of a sample grid is classified by nearest
//! seed to form one cell per floe. Cells can be decorated (color, drift),
//! advected per frame, re-tessellated, and fanned into engine-agnostic
//! mesh data for any renderer.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use voronoi_floe::*;
//!
//! // Generate a field of drifting ice floes
//! let config = FloeConfigBuilder::new()
//!     .seed(42)
//!     .density(FloeDensity::Standard)
//!     .relaxation_iterations(5).unwrap()
//!     .build().unwrap();
//!
//! let mut field = FloeField::generate(config).unwrap();
//!
//! // Per frame: drift, recompute cells, build mesh for rendering
//! field.advect(1.0 / 60.0);
//! field.retessellate();
//! let mesh = generate_mesh(&field, &DriftColorMapper);
//! println!("{} triangles", mesh.triangle_count());
//! ```
//!
//! # Features
//!
//! - `spatial-index` (default): O(log n) position-to-floe lookups using a KD-tree
//! - `serde`: serialization support for configuration and cells

// Modules
pub mod cell;
pub mod config;
pub mod decor;
pub mod engine;
pub mod error;
pub mod field;
pub mod grid;
pub mod mesh;

#[cfg(feature = "spatial-index")]
pub mod spatial;

// Re-export core types for convenience
pub use cell::FloeCell;
pub use config::{FloeConfig, FloeConfigBuilder, FloeDensity};
pub use decor::{Drift, IceDecorator, IceDrift, IceStyle, NoDecor, Rgba, SeedDecorator};
pub use engine::{nearest_seed, order_by_angle, relax, tessellate, LloydOptions, RawFloe};
pub use error::{Result, VoronoiError};
pub use field::FloeField;
pub use grid::SampleGrid;
pub use mesh::{generate_mesh, ColorMapper, DriftColorMapper, MeshData, UniformColorMapper};

#[cfg(feature = "spatial-index")]
pub use spatial::SpatialIndex;

// Re-export glam::Vec2 for convenience
pub use glam::Vec2;
