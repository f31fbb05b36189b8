use flocksim::{Scenario, ScenarioConfig, Simulator};
use flocksim::{bench_step, bench_step_curve};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file inside the `scenarios` directory
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Write every frame as CSV rows to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Time the step for a range of flock sizes instead of running a scenario
    #[arg(long)]
    bench: bool,

    /// With --bench, print the fine-grained CSV curve
    #[arg(long)]
    curve: bool,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

/// One row per agent, read from the committed (current) state
fn write_frame(out: &mut impl Write, sim: &Simulator) -> std::io::Result<()> {
    let frame = sim.frame_index();
    for agent in sim.agents() {
        let s = agent.current();
        writeln!(
            out,
            "{},{},{},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6}",
            frame,
            agent.id(),
            agent.kind(),
            s.displacement.x,
            s.displacement.y,
            s.velocity.x,
            s.velocity.y,
            agent.heading(),
            agent.speed_ratio(),
        )?;
    }
    Ok(())
}

fn run(scenario: Scenario, output: Option<PathBuf>) -> Result<()> {
    let Scenario {
        engine,
        parameters,
        mut simulator,
    } = scenario;

    info!(
        agents = simulator.len(),
        frames = parameters.frames,
        dt = simulator.time_step(),
        singularity_eps = simulator.singularity_eps(),
        parallel = engine.parallel,
        "starting simulation"
    );

    let mut writer = match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut w = BufWriter::new(file);
            writeln!(w, "frame,id,kind,x,y,vx,vy,heading,speed_ratio")?;
            Some(w)
        }
        None => None,
    };

    for i in 0..parameters.frames {
        match writer.as_mut() {
            Some(w) => simulator.frame(|sim| write_frame(w, sim))??,
            None => simulator.frame(|_| ())?,
        }
        info!(frame = i, "frame completed");
    }

    if let Some(mut w) = writer {
        w.flush()?;
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    if args.bench {
        if args.curve {
            bench_step_curve()?;
        } else {
            bench_step()?;
        }
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    run(scenario, args.output)
}
