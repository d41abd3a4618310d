//! Error type shared by the grid, the force accumulator and the integrator.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClothError {
    /// A coordinate accessor was called with `(ku, kv)` outside the grid
    #[error("grid coordinate ({ku}, {kv}) is out of range for a {size_u}x{size_v} grid")]
    IndexOutOfRange {
        ku: usize,
        kv: usize,
        size_u: usize,
        size_v: usize,
    },

    /// Velocity/force storage no longer matches the grid (missed `notify_resized`)
    #[error("{storage} storage has {found} entries, grid has {expected} vertices")]
    SizeMismatch {
        storage: &'static str,
        expected: usize,
        found: usize,
    },

    /// A vertex left the stability radius after an integration step
    #[error("divergence of the system: vertex ({ku}, {kv}) is {distance} from the origin (limit {limit})")]
    Divergence {
        ku: usize,
        kv: usize,
        distance: f64,
        limit: f64,
    },

    /// Spring rest lengths need at least two vertices per direction
    #[error("grid must be at least 2x2, got {size_u}x{size_v}")]
    InvalidGridSize { size_u: usize, size_v: usize },
}

impl ClothError {
    /// True for the one error a driver is expected to recover from
    pub fn is_divergence(&self) -> bool {
        matches!(self, ClothError::Divergence { .. })
    }
}
