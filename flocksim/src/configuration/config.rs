//! Configuration types for loading flock scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`EngineConfig`]     – execution options (sequential or rayon accumulation)
//! - [`ParametersConfig`] – step size, frame count, seed, singularity radius
//! - [`AgentConfig`]      – individually placed agents, tagged by `kind`
//! - [`PopulationConfig`] – groups of prey or predators scattered around a centroid
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   parallel: false
//!
//! parameters:
//!   time_step: 0.5
//!   frames: 300
//!   seed: 7
//!   singularity_eps: 1.0e-9   # optional
//!
//! agents:
//!   - kind: attractor
//!     x: [500.0, 500.0]
//!     prey_attraction_scale: 10.0
//!     max_speed: 50.0
//!   - kind: path_attractor
//!     cycles: 2.0
//!     segments:
//!       - [[200.0, 500.0], [200.0, 800.0], [800.0, 800.0], [800.0, 500.0]]
//!       - [[800.0, 500.0], [800.0, 200.0], [200.0, 200.0], [200.0, 500.0]]
//!
//! populations:
//!   - count: 10
//!     centroid: [700.0, 700.0]
//!     deviation: [200.0, 200.0]
//!     member:
//!       kind: prey
//!       predator_attraction_scale: 12.0
//!       prey_repulsion_scale: 0.5
//!       max_speed: 35.0
//! ```
//!
//! Omitted scales and speed bounds fall back to the per-kind defaults in
//! [`crate::simulation::agents`].

use serde::Deserialize;

use crate::simulation::agents::{
    ATTRACTOR_MAX_SPEED, ATTRACTOR_PREY_ATTRACTION_SCALE, PREDATOR_MAX_SPEED,
    PREDATOR_PREDATOR_REPULSION_SCALE, PREDATOR_PREY_REPULSION_SCALE, PREY_MAX_SPEED,
    PREY_PREDATOR_ATTRACTION_SCALE, PREY_PREY_REPULSION_SCALE,
};

fn attractor_scale() -> f64 { ATTRACTOR_PREY_ATTRACTION_SCALE }
fn attractor_speed() -> f64 { ATTRACTOR_MAX_SPEED }
fn prey_attraction() -> f64 { PREY_PREDATOR_ATTRACTION_SCALE }
fn prey_repulsion() -> f64 { PREY_PREY_REPULSION_SCALE }
fn prey_speed() -> f64 { PREY_MAX_SPEED }
fn predator_prey_repulsion() -> f64 { PREDATOR_PREY_REPULSION_SCALE }
fn predator_predator_repulsion() -> f64 { PREDATOR_PREDATOR_REPULSION_SCALE }
fn predator_speed() -> f64 { PREDATOR_MAX_SPEED }
fn one_cycle() -> f64 { 1.0 }

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub parallel: bool, // `true` - accumulate forces on the rayon pool
}

/// Global numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub time_step: f64, // integrator step size dt
    pub frames: usize, // number of frames to run
    #[serde(default)]
    pub seed: u64, // seed for population scattering
    pub singularity_eps: Option<f64>, // separation below which inverse laws vanish
}

/// A single agent with an explicit initial state
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AgentConfig {
    Attractor {
        x: [f64; 2],
        #[serde(default)]
        v: [f64; 2],
        #[serde(default)]
        a: [f64; 2],
        #[serde(default = "attractor_scale")]
        prey_attraction_scale: f64,
        #[serde(default = "attractor_speed")]
        max_speed: f64,
    },
    Prey {
        x: [f64; 2],
        #[serde(default)]
        v: [f64; 2],
        #[serde(default)]
        a: [f64; 2],
        #[serde(default = "prey_attraction")]
        predator_attraction_scale: f64,
        #[serde(default = "prey_repulsion")]
        prey_repulsion_scale: f64,
        #[serde(default = "prey_speed")]
        max_speed: f64,
    },
    Predator {
        x: [f64; 2],
        #[serde(default)]
        v: [f64; 2],
        #[serde(default)]
        a: [f64; 2],
        #[serde(default = "predator_prey_repulsion")]
        prey_repulsion_scale: f64,
        #[serde(default = "predator_predator_repulsion")]
        predator_repulsion_scale: f64,
        #[serde(default = "predator_speed")]
        max_speed: f64,
    },
    /// Attractor that follows a chain of cubic Bezier segments
    PathAttractor {
        segments: Vec<[[f64; 2]; 4]>, // control point quadruples
        #[serde(default = "one_cycle")]
        cycles: f64, // full loops over the run, used when `increment` is absent
        increment: Option<f64>, // explicit per-frame cursor increment
        #[serde(default = "attractor_scale")]
        prey_attraction_scale: f64,
        #[serde(default = "attractor_speed")]
        max_speed: f64,
    },
}

/// Kind and parameters shared by every member of a population
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MemberConfig {
    Prey {
        #[serde(default = "prey_attraction")]
        predator_attraction_scale: f64,
        #[serde(default = "prey_repulsion")]
        prey_repulsion_scale: f64,
        #[serde(default = "prey_speed")]
        max_speed: f64,
    },
    Predator {
        #[serde(default = "predator_prey_repulsion")]
        prey_repulsion_scale: f64,
        #[serde(default = "predator_predator_repulsion")]
        predator_repulsion_scale: f64,
        #[serde(default = "predator_speed")]
        max_speed: f64,
    },
}

/// `count` agents placed uniformly in `centroid ± deviation`, at rest
#[derive(Deserialize, Debug, Clone)]
pub struct PopulationConfig {
    pub count: usize,
    pub centroid: [f64; 2],
    pub deviation: [f64; 2],
    pub member: MemberConfig,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub agents: Vec<AgentConfig>,
    #[serde(default)]
    pub populations: Vec<PopulationConfig>,
}
