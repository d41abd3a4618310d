//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed time step `dt`,
//! - gravity vector (shared out evenly over all vertices),
//! - structural / shear / bending stiffness, tunable independently,
//! - divergence radius checked after every step

use super::states::NVec3;

pub const GRAVITY: [f64; 3] = [0.0, 0.0, -9.81];
pub const STIFFNESS: f64 = 0.1;
pub const DIVERGENCE_LIMIT: f64 = 30.0;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // step size
    pub gravity: NVec3, // total gravity, divided by the vertex count per vertex
    pub k_structural: f64, // (0,±1), (±1,0)
    pub k_shear: f64, // (±1,±1)
    pub k_bending: f64, // (0,±2), (±2,0)
    pub divergence_limit: f64, // max distance from the origin
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: 0.01,
            gravity: NVec3::from(GRAVITY),
            k_structural: STIFFNESS,
            k_shear: STIFFNESS,
            k_bending: STIFFNESS,
            divergence_limit: DIVERGENCE_LIMIT,
        }
    }
}
