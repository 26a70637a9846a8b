use std::time::Instant;

use crate::error::Result;
use crate::simulation::color::Color;
use crate::simulation::engine::Simulator;
use crate::simulation::forces::{accumulate_forces, ForceMode};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, NVec2, System};
use crate::simulation::units::{ONE_DAY, ONE_YEAR};

/// Helper to build a manual System of size `n`
fn make_system(n: usize) -> Result<System> {
    let mut sys = System::with_capacity(n);
    let color = Color::parse("white")?;

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new(
            500.0 + (i_f * 0.37).sin() * 75.0,
            365.0 + (i_f * 0.13).cos() * 75.0,
        );
        let body = Body::new(format!("b{i}"), x, NVec2::zeros(), 1.0e-6, color.clone(), 3.0)?;
        sys.insert(body)?;
    }
    Ok(sys)
}

/// Average seconds per force phase for each n, as `(n, pairwise, symmetric)`.
/// Stops at the first force phase that fails
pub fn time_force_modes(ns: &[usize], reps: u32) -> Result<Vec<(usize, f64, f64)>> {
    let mut rows = Vec::with_capacity(ns.len());

    for &n in ns {
        let mut timings = [0.0; 2];

        for (slot, mode) in [ForceMode::Pairwise, ForceMode::Symmetric].into_iter().enumerate() {
            // Warm up
            let mut sys = make_system(n)?;
            accumulate_forces(&mut sys, mode)?;

            let t0 = Instant::now();
            for _ in 0..reps {
                accumulate_forces(&mut sys, mode)?;
            }
            timings[slot] = t0.elapsed().as_secs_f64() / f64::from(reps.max(1));
        }

        rows.push((n, timings[0], timings[1]));
    }
    Ok(rows)
}

/// Time one force phase per mode for a range of n
pub fn bench_force_modes() {
    // The UI caps systems at 30 bodies; larger n shows the quadratic growth
    let ns = [10, 30, 100, 400, 1600];

    match time_force_modes(&ns, 20) {
        Ok(rows) => {
            for (n, pairwise, symmetric) in rows {
                println!(
                    "N = {n:5}, pairwise = {:10.8} s, symmetric = {:10.8} s",
                    pairwise, symmetric
                );
            }
        }
        Err(err) => println!("force benchmark failed: {err}"),
    }
}

/// Relative energy drift of the default solar system after one simulated
/// year, for time steps from one day to one month
/// Paste output directly into a spreadsheet to graph
pub fn bench_energy_drift() {
    println!("timestep_days,ticks,relative_drift");

    for days in [1.0, 2.0, 7.0, 14.0, 30.0] {
        let mut scenario = match Scenario::solar_system() {
            Ok(s) => s,
            Err(err) => {
                println!("failed to build solar system: {err}");
                return;
            }
        };
        let timestep = days * ONE_DAY;
        let ticks = (ONE_YEAR / timestep).ceil() as u64;

        let simulator = match Simulator::new(timestep) {
            Ok(sim) => sim,
            Err(err) => {
                println!("{err}");
                return;
            }
        };

        let drift = scenario.system.total_energy().and_then(|e0| {
            simulator.run(&mut scenario.system, ticks)?;
            let e1 = scenario.system.total_energy()?;
            Ok(((e1 - e0) / e0).abs())
        });

        match drift {
            Ok(drift) => println!("{days},{ticks},{drift:.3e}"),
            Err(err) => println!("{days},{ticks},failed: {err}"),
        }
    }
}
