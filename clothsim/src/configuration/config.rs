//! Configuration types for loading cloth scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – run length, threading and divergence policy
//! - [`ParametersConfig`] – time step, gravity, stiffness, divergence radius
//! - [`GridConfig`]       – cloth resolution
//! - [`ObstaclesConfig`]  – optional overrides for the plane and the sphere
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   frames: 2000
//!   parallel: true          # split per-vertex work over rayon
//!   on_divergence: "reset"  # or "stop"
//!   log_every: 100          # debug log cadence, in frames
//!
//! parameters:
//!   dt: 0.01
//!   gravity: [0.0, 0.0, -9.81]
//!   k_structural: 0.1
//!   k_shear: 0.1
//!   k_bending: 0.1
//!   divergence_limit: 30.0
//!
//! grid:
//!   size_u: 20
//!   size_v: 20
//!
//! obstacles:
//!   sphere:
//!     center: [0.5, 0.05, -1.1]
//! ```
//!
//! Anything optional that is left out falls back to the reference scene
//! values from `simulation::params` and `simulation::collisions`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// What the engine does when a step reports divergence
/// `on_divergence: "stop"` or `on_divergence: "reset"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DivergencePolicy {
    #[default]
    #[serde(rename = "stop")] // Abort the run and return the error
    Stop,

    #[serde(rename = "reset")] // Re-lay the flat cloth and keep going
    Reset,
}

#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub frames: usize, // number of frames to simulate
    #[serde(default)]
    pub parallel: bool, // `true` - rayon per-vertex passes
    #[serde(default)]
    pub on_divergence: DivergencePolicy,
    pub log_every: Option<usize>, // frames between debug logs, 0 disables
}

#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64, // fixed time step
    pub gravity: Option<[f64; 3]>, // total gravity over the whole cloth
    pub k_structural: Option<f64>,
    pub k_shear: Option<f64>,
    pub k_bending: Option<f64>,
    pub divergence_limit: Option<f64>, // max distance from the origin
}

#[derive(Deserialize, Debug, Clone)]
pub struct GridConfig {
    pub size_u: usize, // vertices along u, at least 2
    pub size_v: usize, // vertices along v, at least 2
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PlaneConfig {
    pub height: Option<f64>,
    pub rest_height: Option<f64>,
    pub half_extent_x: Option<f64>,
    pub half_extent_y: Option<f64>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct SphereConfig {
    pub center: Option<[f64; 3]>,
    pub contact_radius: Option<f64>,
    pub rest_radius: Option<f64>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ObstaclesConfig {
    pub plane: Option<PlaneConfig>,
    pub sphere: Option<SphereConfig>,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub grid: GridConfig,
    #[serde(default)]
    pub obstacles: ObstaclesConfig,
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "
engine:
  frames: 10
parameters:
  dt: 0.005
grid:
  size_u: 8
  size_v: 6
";

    #[test]
    fn minimal_scenario_uses_defaults() {
        let cfg = ScenarioConfig::from_yaml_str(MINIMAL).unwrap();
        assert_eq!(cfg.engine.frames, 10);
        assert!(!cfg.engine.parallel);
        assert_eq!(cfg.engine.on_divergence, DivergencePolicy::Stop);
        assert_eq!(cfg.grid.size_u, 8);
        assert_eq!(cfg.grid.size_v, 6);
        assert!(cfg.parameters.k_shear.is_none());
        assert!(cfg.obstacles.plane.is_none());
        assert!(cfg.obstacles.sphere.is_none());
    }

    #[test]
    fn full_scenario_parses() {
        let text = "
engine:
  frames: 500
  parallel: true
  on_divergence: \"reset\"
  log_every: 50
parameters:
  dt: 0.01
  gravity: [0.0, 0.0, -1.0]
  k_structural: 0.2
  k_shear: 0.3
  k_bending: 0.4
  divergence_limit: 12.5
grid:
  size_u: 4
  size_v: 4
obstacles:
  plane:
    height: -2.0
  sphere:
    center: [0.0, 0.0, -1.0]
    rest_radius: 0.5
";
        let cfg = ScenarioConfig::from_yaml_str(text).unwrap();
        assert_eq!(cfg.engine.on_divergence, DivergencePolicy::Reset);
        assert_eq!(cfg.engine.log_every, Some(50));
        assert_eq!(cfg.parameters.gravity, Some([0.0, 0.0, -1.0]));
        assert_eq!(cfg.parameters.k_bending, Some(0.4));
        let plane = cfg.obstacles.plane.unwrap();
        assert_eq!(plane.height, Some(-2.0));
        assert!(plane.rest_height.is_none());
        let sphere = cfg.obstacles.sphere.unwrap();
        assert_eq!(sphere.rest_radius, Some(0.5));
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let text = MINIMAL.replace("frames: 10", "frames: 10\n  on_divergence: \"explode\"");
        assert!(matches!(ScenarioConfig::from_yaml_str(&text), Err(ConfigError::Parse(_))));
    }
}
