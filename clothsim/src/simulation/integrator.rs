//! Fixed-step time integration for the cloth
//!
//! Semi-implicit (symplectic) Euler: the velocity is kicked by the force
//! first, then the position drifts with the new velocity. Collisions are
//! applied per vertex right after the drift, and the divergence scan runs
//! once all vertices are done.

use rayon::prelude::*;

use super::collisions::{Contact, Obstacles};
use super::error::ClothError;
use super::states::{grid_coord, NVec3};

/// Number of vertices that hit each obstacle during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub plane_contacts: usize,
    pub sphere_contacts: usize,
}

impl StepReport {
    pub fn merge(self, other: StepReport) -> StepReport {
        StepReport {
            plane_contacts: self.plane_contacts + other.plane_contacts,
            sphere_contacts: self.sphere_contacts + other.sphere_contacts,
        }
    }
}

impl From<Contact> for StepReport {
    fn from(c: Contact) -> Self {
        StepReport {
            plane_contacts: c.plane as usize,
            sphere_contacts: c.sphere as usize,
        }
    }
}

/// Advance every vertex by `dt` and resolve collisions.
///
/// Contact zeroes (part of) the force slot in place; the force field must
/// already have been computed for this frame.
pub fn semi_implicit_euler(
    positions: &mut [NVec3],
    velocity: &mut [NVec3],
    force: &mut [NVec3],
    obstacles: &Obstacles,
    dt: f64,
    parallel: bool,
) -> StepReport {
    let step = |((p, v), f): ((&mut NVec3, &mut NVec3), &mut NVec3)| -> StepReport {
        // Kick: v_n+1 = v_n + dt * f_n
        *v += *f * dt;
        // Drift: x_n+1 = x_n + dt * v_n+1
        *p += *v * dt;

        obstacles.resolve(p, v, f).into()
    };

    if parallel {
        positions
            .par_iter_mut()
            .zip(velocity.par_iter_mut())
            .zip(force.par_iter_mut())
            .map(step)
            .reduce(StepReport::default, StepReport::merge)
    } else {
        positions
            .iter_mut()
            .zip(velocity.iter_mut())
            .zip(force.iter_mut())
            .map(step)
            .fold(StepReport::default(), StepReport::merge)
    }
}

/// Fail with [`ClothError::Divergence`] on the first vertex (in storage order)
/// farther than `limit` from the origin. Non-finite positions count as diverged.
pub fn check_divergence(positions: &[NVec3], size_u: usize, limit: f64) -> Result<(), ClothError> {
    let Some(offset) = positions.iter().position(|p| !(p.norm() <= limit)) else {
        return Ok(());
    };
    let (ku, kv) = grid_coord(offset, size_u);
    Err(ClothError::Divergence {
        ku,
        kv,
        distance: positions[offset].norm(),
        limit,
    })
}

/// Largest distance of any vertex from the origin
pub fn max_distance(positions: &[NVec3]) -> f64 {
    positions.iter().map(|p| p.norm()).fold(0.0, f64::max)
}
