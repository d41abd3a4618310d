use log::{debug, error, info, warn};

use crate::configuration::config::DivergencePolicy;
use crate::simulation::error::ClothError;
use crate::simulation::scenario::Scenario;

/// Summary of a headless run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    pub frames_run: usize,
    pub resets: usize,
    pub plane_contacts: usize,
    pub sphere_contacts: usize,
    pub max_distance: f64, // at the end of the run
}

/// Step the scenario for `engine.frames` frames without rendering.
/// `dt`, stiffness, gravity and the divergence limit all come from
/// `cloth.parameters()`.
///
/// Divergence either aborts the run or re-lays the flat cloth, depending on
/// `engine.on_divergence`. Any other error is returned as is.
pub fn run_headless(scenario: &mut Scenario) -> Result<RunReport, ClothError> {
    let Scenario { engine, cloth } = scenario;
    let dt = cloth.parameters().dt;

    info!(
        "run_headless: {} frames on a {}x{} cloth",
        engine.frames,
        cloth.size_u(),
        cloth.size_v()
    );

    let mut report = RunReport::default();

    for frame in 0..engine.frames {
        match cloth.step(dt) {
            Ok(step) => {
                report.plane_contacts += step.plane_contacts;
                report.sphere_contacts += step.sphere_contacts;
                if engine.log_every > 0 && frame % engine.log_every == 0 {
                    debug!(
                        "frame {frame}: {} plane / {} sphere contacts, max distance {:.4}",
                        step.plane_contacts,
                        step.sphere_contacts,
                        cloth.max_distance()
                    );
                }
            }
            Err(err) if err.is_divergence() && engine.on_divergence == DivergencePolicy::Reset => {
                warn!("frame {frame}: {err}; resetting cloth");
                cloth.reset()?;
                report.resets += 1;
            }
            Err(err) => {
                error!("frame {frame}: {err}");
                return Err(err);
            }
        }
        report.frames_run += 1;
    }

    report.max_distance = cloth.max_distance();
    info!(
        "run_headless: {} frames, {} resets, {} plane / {} sphere contacts",
        report.frames_run, report.resets, report.plane_contacts, report.sphere_contacts
    );
    Ok(report)
}
