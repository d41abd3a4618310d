//! Mass-spring cloth on top of a [`GridTopology`]
//!
//! The grid owns the positions. `ClothSimulation` owns one velocity and one
//! force per vertex, always exactly `size_u * size_v` of each and in the same
//! order as the positions. A frame is `update_force()` followed by
//! `integration_step(dt)`.

use super::collisions::Obstacles;
use super::error::ClothError;
use super::forces::ForceSet;
use super::grid::{checked_offset, GridTopology, ParametricGrid};
use super::integrator::{check_divergence, max_distance, semi_implicit_euler, StepReport};
use super::params::Parameters;
use super::states::{ClothState, NVec3};

pub struct ClothSimulation<G: GridTopology = ParametricGrid> {
    grid: G,
    speed_data: Vec<NVec3>,
    force_data: Vec<NVec3>,
    forces: ForceSet,
    custom_forces: bool, // installed by `set_forces`, not derived from `params`
    obstacles: Obstacles,
    params: Parameters,
    parallel: bool,
}

impl ClothSimulation<ParametricGrid> {
    /// Flat `size_u x size_v` unit cloth at rest
    pub fn plane_xy_unit(size_u: usize, size_v: usize, params: &Parameters, obstacles: Obstacles) -> Result<Self, ClothError> {
        let grid = ParametricGrid::plane_xy_unit(size_u, size_v)?;
        Ok(Self::new(grid, params, obstacles))
    }

    /// Re-lay the flat cloth (possibly at a new size) and zero velocity/force
    pub fn set_plane_xy_unit(&mut self, size_u: usize, size_v: usize) -> Result<(), ClothError> {
        self.grid.set_plane_xy_unit(size_u, size_v)?;
        self.notify_resized();
        Ok(())
    }

    /// Back to the flat layout at the current size
    pub fn reset(&mut self) -> Result<(), ClothError> {
        let (size_u, size_v) = (self.grid.size_u(), self.grid.size_v());
        self.set_plane_xy_unit(size_u, size_v)
    }
}

impl<G: GridTopology> ClothSimulation<G> {
    pub fn new(grid: G, params: &Parameters, obstacles: Obstacles) -> Self {
        let mut sim = Self {
            grid,
            speed_data: Vec::new(),
            force_data: Vec::new(),
            forces: ForceSet::cloth(params),
            custom_forces: false,
            obstacles,
            params: params.clone(),
            parallel: false,
        };
        sim.notify_resized();
        sim
    }

    /// Split per-vertex work over rayon workers. The installed force terms are kept.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self.forces.set_parallel(parallel);
        self
    }

    /// Swap in new stiffness/gravity/limit; takes effect at the next `update_force`.
    /// A set installed with `set_forces` is kept, only the divergence limit applies to it.
    pub fn set_parameters(&mut self, params: &Parameters) {
        self.params = params.clone();
        if !self.custom_forces {
            self.forces = ForceSet::cloth(params);
            self.forces.set_parallel(self.parallel);
        }
    }

    /// Replace the force terms entirely; runs with the cloth's parallel setting
    pub fn set_forces(&mut self, mut forces: ForceSet) {
        forces.set_parallel(self.parallel);
        self.forces = forces;
        self.custom_forces = true;
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    /// Must be called whenever the grid dimensions change: reallocates
    /// velocity and force to `size_u * size_v` zero vectors
    pub fn notify_resized(&mut self) {
        let n = self.grid.size_vertex();
        self.speed_data.clear();
        self.speed_data.resize(n, NVec3::zeros());
        self.force_data.clear();
        self.force_data.resize(n, NVec3::zeros());
    }

    pub fn size_u(&self) -> usize {
        self.grid.size_u()
    }

    pub fn size_v(&self) -> usize {
        self.grid.size_v()
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// Direct grid access; call [`Self::notify_resized`] after resizing it
    pub fn grid_mut(&mut self) -> &mut G {
        &mut self.grid
    }

    pub fn obstacles(&self) -> &Obstacles {
        &self.obstacles
    }

    pub fn velocities(&self) -> &[NVec3] {
        &self.speed_data
    }

    pub fn force_field(&self) -> &[NVec3] {
        &self.force_data
    }

    pub fn vertex(&self, ku: usize, kv: usize) -> Result<NVec3, ClothError> {
        self.grid.vertex(ku, kv).copied()
    }

    pub fn vertex_mut(&mut self, ku: usize, kv: usize) -> Result<&mut NVec3, ClothError> {
        self.grid.vertex_mut(ku, kv)
    }

    pub fn speed(&self, ku: usize, kv: usize) -> Result<NVec3, ClothError> {
        let offset = self.offset(ku, kv)?;
        Ok(self.speed_data[offset])
    }

    pub fn speed_mut(&mut self, ku: usize, kv: usize) -> Result<&mut NVec3, ClothError> {
        let offset = self.offset(ku, kv)?;
        Ok(&mut self.speed_data[offset])
    }

    pub fn force(&self, ku: usize, kv: usize) -> Result<NVec3, ClothError> {
        let offset = self.offset(ku, kv)?;
        Ok(self.force_data[offset])
    }

    pub fn force_mut(&mut self, ku: usize, kv: usize) -> Result<&mut NVec3, ClothError> {
        let offset = self.offset(ku, kv)?;
        Ok(&mut self.force_data[offset])
    }

    /// Recompute the force on every vertex from the current positions
    pub fn update_force(&mut self) -> Result<(), ClothError> {
        self.check_storage()?;
        let view = self.grid.view();
        self.forces.accumulate_forces(&view, &mut self.force_data);
        Ok(())
    }

    /// Advance positions and velocities by `dt`, apply collisions, then
    /// check for divergence
    pub fn integration_step(&mut self, dt: f64) -> Result<StepReport, ClothError> {
        self.check_storage()?;
        let size_u = self.grid.size_u();

        let report = semi_implicit_euler(
            self.grid.positions_mut(),
            &mut self.speed_data,
            &mut self.force_data,
            &self.obstacles,
            dt,
            self.parallel,
        );

        check_divergence(self.grid.positions(), size_u, self.params.divergence_limit)?;
        Ok(report)
    }

    /// `update_force` then `integration_step`
    pub fn step(&mut self, dt: f64) -> Result<StepReport, ClothError> {
        self.update_force()?;
        self.integration_step(dt)
    }

    pub fn max_distance(&self) -> f64 {
        max_distance(self.grid.positions())
    }

    pub fn snapshot(&self) -> ClothState {
        ClothState::from_slices(self.size_u(), self.size_v(), self.grid.positions(), &self.speed_data)
    }

    /// Velocity and force must both match the grid's vertex count
    pub fn check_storage(&self) -> Result<(), ClothError> {
        let expected = self.grid.size_vertex();
        let slots = [
            ("position", self.grid.positions().len()),
            ("velocity", self.speed_data.len()),
            ("force", self.force_data.len()),
        ];
        for (storage, found) in slots {
            if found != expected {
                return Err(ClothError::SizeMismatch { storage, expected, found });
            }
        }
        Ok(())
    }

    fn offset(&self, ku: usize, kv: usize) -> Result<usize, ClothError> {
        self.check_storage()?;
        checked_offset(ku, kv, self.grid.size_u(), self.grid.size_v())
    }
}
