//! Core state types for the cloth simulation.
//!
//! - `NVec3` is the 3D vector used for positions, velocities and forces
//! - `ClothState` is a plain, serializable snapshot of the cloth at one frame
//!
//! Per-vertex storage everywhere in the crate is a flat `Vec<NVec3>` addressed
//! by `ku + size_u * kv`.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

pub type NVec3 = Vector3<f64>;

/// Flat offset of grid coordinate `(ku, kv)` in an `size_u`-wide grid
#[inline]
pub fn flat_index(ku: usize, kv: usize, size_u: usize) -> usize {
    ku + size_u * kv
}

/// Inverse of [`flat_index`]
#[inline]
pub fn grid_coord(offset: usize, size_u: usize) -> (usize, usize) {
    (offset % size_u, offset / size_u)
}

/// Snapshot of the cloth written out by the CLI (`--dump`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClothState {
    pub size_u: usize,
    pub size_v: usize,
    pub positions: Vec<[f64; 3]>, // ku-fastest order
    pub velocities: Vec<[f64; 3]>,
}

impl ClothState {
    pub fn from_slices(size_u: usize, size_v: usize, positions: &[NVec3], velocities: &[NVec3]) -> Self {
        Self {
            size_u,
            size_v,
            positions: positions.iter().map(|p| [p.x, p.y, p.z]).collect(),
            velocities: velocities.iter().map(|v| [v.x, v.y, v.z]).collect(),
        }
    }
}
