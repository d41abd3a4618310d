use std::time::Instant;

use crate::simulation::cloth::ClothSimulation;
use crate::simulation::collisions::Obstacles;
use crate::simulation::error::ClothError;
use crate::simulation::params::Parameters;

/// Build a cloth of `n x n` vertices, slightly crumpled so springs are loaded
fn crumpled_cloth(n: usize, parallel: bool) -> Result<ClothSimulation, ClothError> {
    let params = Parameters::default();
    let mut cloth = ClothSimulation::plane_xy_unit(n, n, &params, Obstacles::default())?.with_parallel(parallel);

    // deterministic ripple, no rand needed
    for kv in 0..n {
        for ku in 0..n {
            let p = cloth.vertex_mut(ku, kv)?;
            p.z = 0.02 * ((ku as f64 * 0.37).sin() + (kv as f64 * 0.13).cos());
        }
    }
    Ok(cloth)
}

pub fn bench_update_force() -> Result<(), ClothError> {
    // Different grid sizes to test
    let ns = [16, 32, 64, 128, 256, 512];
    let reps = 10;

    for n in ns {
        let mut serial = crumpled_cloth(n, false)?;
        let mut parallel = crumpled_cloth(n, true)?;

        // Warm up
        serial.update_force()?;
        parallel.update_force()?;

        let t0 = Instant::now();
        for _ in 0..reps {
            serial.update_force()?;
        }
        let dt_serial = t0.elapsed().as_secs_f64() / reps as f64;

        let t1 = Instant::now();
        for _ in 0..reps {
            parallel.update_force()?;
        }
        let dt_parallel = t1.elapsed().as_secs_f64() / reps as f64;

        println!("N = {n:4}x{n:<4}, serial = {:8.6} s, rayon = {:8.6} s", dt_serial, dt_parallel);
    }
    Ok(())
}

pub fn bench_integration() -> Result<(), ClothError> {
    let ns = [16, 32, 64, 128, 256];
    let steps = 20;
    let dt = Parameters::default().dt;

    for n in ns {
        for parallel in [false, true] {
            let mut cloth = crumpled_cloth(n, parallel)?;

            let t0 = Instant::now();
            let mut done = 0;
            for _ in 0..steps {
                if cloth.step(dt).is_err() {
                    break;
                }
                done += 1;
            }
            let elapsed = t0.elapsed().as_secs_f64();
            let per_step = if done > 0 { elapsed / done as f64 } else { f64::NAN };

            println!(
                "N = {n:4}x{n:<4}, parallel = {parallel:5}, {done:3} frames, {:8.6} s/frame",
                per_step
            );
        }
    }
    Ok(())
}
