//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - a `Simulator` with every configured agent registered
//!
//! Explicit agents are registered first, in file order, followed by each
//! population in turn. Population members are scattered with a `StdRng`
//! seeded from `parameters.seed`, so a scenario always builds the same flock.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::configuration::config::{AgentConfig, MemberConfig, PopulationConfig, ScenarioConfig};
use crate::simulation::agents::AgentTemplate;
use crate::simulation::driving::{BezierPath, CubicBezier};
use crate::simulation::engine::Engine;
use crate::simulation::error::{SimError, SimResult};
use crate::simulation::forces::DEFAULT_SINGULARITY_EPS;
use crate::simulation::params::Parameters;
use crate::simulation::simulator::Simulator;
use crate::simulation::states::{KinematicState, NVec2};

/// Runtime bundle built from a [`ScenarioConfig`]
#[derive(Debug)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub simulator: Simulator,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            time_step: p_cfg.time_step,
            frames: p_cfg.frames,
            seed: p_cfg.seed,
            singularity_eps: p_cfg.singularity_eps.unwrap_or(DEFAULT_SINGULARITY_EPS),
        };

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            parallel: cfg.engine.parallel,
        };

        let mut simulator = Simulator::new(parameters.time_step)?
            .with_singularity_eps(parameters.singularity_eps)?
            .with_parallel(engine.parallel);

        for agent_cfg in &cfg.agents {
            simulator.add_agent(agent_template(agent_cfg, parameters.frames)?)?;
        }

        let mut rng = StdRng::seed_from_u64(parameters.seed);
        for pop in &cfg.populations {
            for template in population_templates(pop, &mut rng)? {
                simulator.add_agent(template)?;
            }
        }

        info!(
            agents = simulator.len(),
            frames = parameters.frames,
            dt = parameters.time_step,
            parallel = engine.parallel,
            "scenario built"
        );

        Ok(Self {
            engine,
            parameters,
            simulator,
        })
    }
}

fn vec2(v: [f64; 2]) -> NVec2 {
    NVec2::new(v[0], v[1])
}

fn state(x: [f64; 2], v: [f64; 2], a: [f64; 2]) -> KinematicState {
    KinematicState::new(vec2(x), vec2(v), vec2(a))
}

/// Map one `AgentConfig` to a template; path increments derive from `frames`
pub fn agent_template(cfg: &AgentConfig, frames: usize) -> SimResult<AgentTemplate> {
    let template = match *cfg {
        AgentConfig::Attractor {
            x,
            v,
            a,
            prey_attraction_scale,
            max_speed,
        } => AgentTemplate::attractor(state(x, v, a), prey_attraction_scale, max_speed),
        AgentConfig::Prey {
            x,
            v,
            a,
            predator_attraction_scale,
            prey_repulsion_scale,
            max_speed,
        } => AgentTemplate::prey(
            state(x, v, a),
            predator_attraction_scale,
            prey_repulsion_scale,
            max_speed,
        ),
        AgentConfig::Predator {
            x,
            v,
            a,
            prey_repulsion_scale,
            predator_repulsion_scale,
            max_speed,
        } => AgentTemplate::predator(
            state(x, v, a),
            prey_repulsion_scale,
            predator_repulsion_scale,
            max_speed,
        ),
        AgentConfig::PathAttractor {
            ref segments,
            cycles,
            increment,
            prey_attraction_scale,
            max_speed,
        } => {
            let curves: Vec<CubicBezier> = segments
                .iter()
                .map(|quad| CubicBezier::new(quad.map(vec2)))
                .collect();
            let path = match increment {
                Some(h) => BezierPath::new(curves, h)?,
                None => BezierPath::with_cycles(curves, cycles, frames)?,
            };
            AgentTemplate::path_attractor(path, prey_attraction_scale, max_speed)
        }
    };
    Ok(template)
}

/// Scatter `pop.count` members uniformly inside `centroid ± deviation`
pub fn population_templates(pop: &PopulationConfig, rng: &mut impl Rng) -> SimResult<Vec<AgentTemplate>> {
    let [dx, dy] = pop.deviation;
    if !(dx >= 0.0 && dy >= 0.0 && dx.is_finite() && dy.is_finite()) {
        return Err(SimError::InvalidScenario(format!(
            "population deviation {:?} must be finite and non-negative",
            pop.deviation
        )));
    }

    let templates = (0..pop.count)
        .map(|_| {
            let x = pop.centroid[0] + rng.gen_range(-dx..=dx);
            let y = pop.centroid[1] + rng.gen_range(-dy..=dy);
            let initial = KinematicState::at(NVec2::new(x, y));
            match pop.member {
                MemberConfig::Prey {
                    predator_attraction_scale,
                    prey_repulsion_scale,
                    max_speed,
                } => AgentTemplate::prey(initial, predator_attraction_scale, prey_repulsion_scale, max_speed),
                MemberConfig::Predator {
                    prey_repulsion_scale,
                    predator_repulsion_scale,
                    max_speed,
                } => AgentTemplate::predator(initial, prey_repulsion_scale, predator_repulsion_scale, max_speed),
            }
        })
        .collect();

    Ok(templates)
}
