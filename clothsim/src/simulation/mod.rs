pub mod states;
pub mod error;
pub mod params;
pub mod engine;
pub mod grid;
pub mod springs;
pub mod forces;
pub mod collisions;
pub mod integrator;
pub mod cloth;
pub mod scenario;
