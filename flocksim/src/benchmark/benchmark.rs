use std::time::Instant;

use crate::simulation::agents::AgentTemplate;
use crate::simulation::error::SimResult;
use crate::simulation::simulator::Simulator;
use crate::simulation::states::{KinematicState, NVec2};

/// Helper to build a mixed flock of size `n`
/// One attractor, then alternating prey and predators on a deterministic spiral
fn make_simulator(n: usize, parallel: bool) -> SimResult<Simulator> {
    let mut sim = Simulator::new(0.5)?.with_parallel(parallel);

    sim.add_agent(AgentTemplate::attractor(
        KinematicState::at(NVec2::new(500.0, 500.0)),
        10.0,
        50.0,
    ))?;

    for i in 1..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new(
            500.0 + (i_f * 0.37).sin() * 400.0,
            500.0 + (i_f * 0.13).cos() * 400.0,
        );
        let template = if i % 4 == 0 {
            AgentTemplate::predator(KinematicState::at(x), 10.0, 25.0, 45.0)
        } else {
            AgentTemplate::prey(KinematicState::at(x), 12.0, 0.5, 35.0)
        };
        sim.add_agent(template)?;
    }

    Ok(sim)
}

/// Average seconds per step+commit for a flock of `n` agents
fn time_frames(n: usize, steps: usize, parallel: bool) -> SimResult<f64> {
    let mut sim = make_simulator(n, parallel)?;

    // Warm up
    sim.step()?;
    sim.commit()?;

    let t0 = Instant::now();
    for _ in 0..steps {
        sim.step()?;
        sim.commit()?;
    }
    Ok(t0.elapsed().as_secs_f64() / steps as f64)
}

/// Compare the sequential and the rayon accumulation for a few flock sizes
pub fn bench_step() -> SimResult<()> {
    let ns = [100, 200, 400, 800, 1600, 3200];
    let steps = 3;

    for n in ns {
        let seq = time_frames(n, steps, false)?;
        let par = time_frames(n, steps, true)?;
        println!("N = {n:5}, sequential step = {:8.6} s, parallel step = {:8.6} s", seq, par);
    }
    Ok(())
}

/// Step cost for growing n
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() -> SimResult<()> {
    println!("N,sequential_ms,parallel_ms");

    for n in (100..=3200).step_by(100) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 800 { 5 } else { 1 };

        let seq = time_frames(n, steps, false)? * 1000.0;
        let par = time_frames(n, steps, true)? * 1000.0;

        println!("{},{:.6},{:.6}", n, seq, par);
    }
    Ok(())
}
