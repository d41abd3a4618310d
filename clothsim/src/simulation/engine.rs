//! High-level runtime engine settings
//!
//! Run length, threading and the divergence policy used when running a
//! `Scenario`

use crate::configuration::config::DivergencePolicy;

#[derive(Debug, Clone)]
pub struct Engine {
    pub frames: usize, // frames per run
    pub parallel: bool, // rayon per-vertex passes
    pub on_divergence: DivergencePolicy, // stop or reset
    pub log_every: usize, // frames between debug logs, 0 = never
}
