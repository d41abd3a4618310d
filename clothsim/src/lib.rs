pub mod simulation;
pub mod configuration;
pub mod driver;
pub mod benchmark;

pub use simulation::states::{NVec3, ClothState};
pub use simulation::error::ClothError;
pub use simulation::params::Parameters;
pub use simulation::grid::{GridTopology, GridView, ParametricGrid};
pub use simulation::springs::{Spring, SpringLink, neighbor_force, spring_links};
pub use simulation::forces::{ForceSet, ForceTerm, UniformGravity, SpringNetwork};
pub use simulation::collisions::{Collider, Contact, Obstacles, PlaneObstacle, SphereObstacle};
pub use simulation::integrator::{semi_implicit_euler, check_divergence, StepReport};
pub use simulation::cloth::ClothSimulation;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, EngineConfig, ParametersConfig, GridConfig, ObstaclesConfig, DivergencePolicy, ConfigError};

pub use driver::headless::{run_headless, RunReport};

pub use benchmark::benchmark::{bench_update_force, bench_integration};
