//! Build a fully-initialized cloth scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - engine settings (`Engine`)
//! - the cloth itself (`ClothSimulation`), flat and at rest, holding the
//!   numerical parameters (`Parameters`) with its force set and obstacles wired in

use log::info;

use crate::configuration::config::{ObstaclesConfig, ScenarioConfig};
use crate::simulation::cloth::ClothSimulation;
use crate::simulation::collisions::{Obstacles, PlaneObstacle, SphereObstacle};
use crate::simulation::engine::Engine;
use crate::simulation::error::ClothError;
use crate::simulation::params::Parameters;
use crate::simulation::states::NVec3;

/// Default debug-log cadence when the config leaves it out
const LOG_EVERY: usize = 100;

/// Runtime scenario. The cloth owns the numerical parameters; change them
/// with `cloth.set_parameters`.
pub struct Scenario {
    pub engine: Engine,
    pub cloth: ClothSimulation,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ClothError> {
        // Parameters (runtime) from ParametersConfig, reference values where unset
        let defaults = Parameters::default();
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            gravity: p_cfg.gravity.map(NVec3::from).unwrap_or(defaults.gravity),
            k_structural: p_cfg.k_structural.unwrap_or(defaults.k_structural),
            k_shear: p_cfg.k_shear.unwrap_or(defaults.k_shear),
            k_bending: p_cfg.k_bending.unwrap_or(defaults.k_bending),
            divergence_limit: p_cfg.divergence_limit.unwrap_or(defaults.divergence_limit),
        };

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            frames: e_cfg.frames,
            parallel: e_cfg.parallel,
            on_divergence: e_cfg.on_divergence,
            log_every: e_cfg.log_every.unwrap_or(LOG_EVERY),
        };

        let obstacles = build_obstacles(&cfg.obstacles);

        let cloth = ClothSimulation::plane_xy_unit(cfg.grid.size_u, cfg.grid.size_v, &parameters, obstacles)?
            .with_parallel(engine.parallel);

        info!(
            "scenario: {}x{} cloth, dt = {}, {} frames, parallel = {}",
            cloth.size_u(),
            cloth.size_v(),
            parameters.dt,
            engine.frames,
            engine.parallel
        );

        Ok(Self { engine, cloth })
    }
}

fn build_obstacles(cfg: &ObstaclesConfig) -> Obstacles {
    let mut plane = PlaneObstacle::default();
    if let Some(p) = &cfg.plane {
        plane.height = p.height.unwrap_or(plane.height);
        plane.rest_height = p.rest_height.unwrap_or(plane.rest_height);
        plane.half_extent_x = p.half_extent_x.unwrap_or(plane.half_extent_x);
        plane.half_extent_y = p.half_extent_y.unwrap_or(plane.half_extent_y);
    }

    let mut sphere = SphereObstacle::default();
    if let Some(s) = &cfg.sphere {
        sphere.center = s.center.map(NVec3::from).unwrap_or(sphere.center);
        sphere.contact_radius = s.contact_radius.unwrap_or(sphere.contact_radius);
        sphere.rest_radius = s.rest_radius.unwrap_or(sphere.rest_radius);
    }

    Obstacles { plane, sphere }
}
