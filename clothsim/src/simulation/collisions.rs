//! Hard collision constraints against the two fixed obstacles
//!
//! Both responses are fully inelastic:
//! - plane: clamp height, kill the vertical component of velocity and force
//! - sphere: project onto the resting radius, kill velocity and force entirely

use super::states::NVec3;

/// Obstacle that may correct a vertex after it has been advanced
pub trait Collider {
    /// Returns true when the vertex was in contact and has been corrected
    fn resolve(&self, p: &mut NVec3, v: &mut NVec3, f: &mut NVec3) -> bool;
}

/// Bounded rectangular patch of a horizontal plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneObstacle {
    pub height: f64, // contact threshold
    pub rest_height: f64, // z after clamping, just above `height`
    pub half_extent_x: f64, // |x| <= half_extent_x
    pub half_extent_y: f64, // |y| <  half_extent_y
}

impl Default for PlaneObstacle {
    fn default() -> Self {
        Self {
            height: -1.101,
            rest_height: -1.100,
            half_extent_x: 1.0,
            half_extent_y: 1.0,
        }
    }
}

impl PlaneObstacle {
    pub fn covers(&self, p: &NVec3) -> bool {
        p.x.abs() <= self.half_extent_x && p.y.abs() < self.half_extent_y
    }
}

impl Collider for PlaneObstacle {
    fn resolve(&self, p: &mut NVec3, v: &mut NVec3, f: &mut NVec3) -> bool {
        if p.z < self.height && self.covers(p) {
            p.z = self.rest_height;
            v.z = 0.0;
            f.z = 0.0;
            return true;
        }
        false
    }
}

/// Fixed sphere, contact below `contact_radius`, pushed out to `rest_radius`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereObstacle {
    pub center: NVec3,
    pub contact_radius: f64,
    pub rest_radius: f64,
}

impl Default for SphereObstacle {
    fn default() -> Self {
        Self {
            center: NVec3::new(0.5, 0.05, -1.1),
            contact_radius: 0.198,
            rest_radius: 0.2,
        }
    }
}

impl Collider for SphereObstacle {
    fn resolve(&self, p: &mut NVec3, v: &mut NVec3, f: &mut NVec3) -> bool {
        let r = *p - self.center;
        let dist = r.norm();
        if dist < self.contact_radius {
            // a vertex exactly at the center has no direction and ends up NaN
            *p = self.center + self.rest_radius * (r / dist);
            *v = NVec3::zeros();
            *f = NVec3::zeros();
            return true;
        }
        false
    }
}

/// The obstacle set of a scene, immutable for the lifetime of a simulation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Obstacles {
    pub plane: PlaneObstacle,
    pub sphere: SphereObstacle,
}

/// Which obstacles a vertex touched during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contact {
    pub plane: bool,
    pub sphere: bool,
}

impl Obstacles {
    /// Plane first, then sphere, each seeing the other's correction
    pub fn resolve(&self, p: &mut NVec3, v: &mut NVec3, f: &mut NVec3) -> Contact {
        let plane = self.plane.resolve(p, v, f);
        let sphere = self.sphere.resolve(p, v, f);
        Contact { plane, sphere }
    }
}
