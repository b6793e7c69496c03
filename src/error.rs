//! Error types for floe field generation

use std::fmt;

/// Errors that can occur during field generation or queries
#[derive(Debug, Clone)]
pub enum VoronoiError {
    /// Configuration validation failed
    InvalidConfig(String),
    /// Requested floe ID does not exist
    FloeNotFound(usize),
}

impl fmt::Display for VoronoiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoronoiError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            VoronoiError::FloeNotFound(id) => write!(f, "floe not found: {}", id),
        }
    }
}

impl std::error::Error for VoronoiError {}

/// Result type alias for voronoi operations
pub type Result<T> = std::result::Result<T, VoronoiError>;
