pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{KinematicState, NVec2, Point};
pub use simulation::vector::{clamp_magnitude, unit};
pub use simulation::agents::{Agent, AgentId, AgentKind, AgentTemplate, Behavior, SequentialIds};
pub use simulation::driving::{BezierPath, CubicBezier, DrivingSystem, WaypointSource};
pub use simulation::forces::{provide_acceleration, PairwiseForces, DEFAULT_SINGULARITY_EPS};
pub use simulation::integrator::{advance_agent, update_next_state};
pub use simulation::simulator::Simulator;
pub use simulation::scenario::Scenario;
pub use simulation::error::{SimError, SimResult};

pub use configuration::config::{EngineConfig, ParametersConfig, AgentConfig, MemberConfig, PopulationConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_step, bench_step_curve};
