//! Agent model: identity, kind, kind-specific parameters and the
//! current/next state pair.
//!
//! Agents compare equal only when their ids match. Ids come from a
//! [`SequentialIds`] counter, normally the one owned by the
//! [`Simulator`](super::simulator::Simulator).

use std::fmt;

use super::driving::{DrivingSystem, WaypointSource};
use super::error::{SimError, SimResult};
use super::states::{KinematicState, NVec2};

pub const ATTRACTOR_PREY_ATTRACTION_SCALE: f64 = 10.0;
pub const ATTRACTOR_MAX_SPEED: f64 = 50.0;
pub const PREY_PREDATOR_ATTRACTION_SCALE: f64 = 12.0;
pub const PREY_PREY_REPULSION_SCALE: f64 = 0.5;
pub const PREY_MAX_SPEED: f64 = 25.0;
pub const PREDATOR_PREY_REPULSION_SCALE: f64 = 1.0;
pub const PREDATOR_PREDATOR_REPULSION_SCALE: f64 = 0.75;
pub const PREDATOR_MAX_SPEED: f64 = 35.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub u64);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonically increasing id source
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    pub fn next_id(&mut self) -> AgentId {
        let id = AgentId(self.next);
        self.next += 1;
        id
    }
}

/// Kind as seen by the force table (a path-driven attractor is an attractor)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKind {
    Attractor,
    Prey,
    Predator,
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgentKind::Attractor => "attractor",
            AgentKind::Prey => "prey",
            AgentKind::Predator => "predator",
        };
        f.write_str(name)
    }
}

/// Kind-specific parameters of an agent
#[derive(Debug, Clone)]
pub enum Behavior {
    Attractor {
        prey_attraction_scale: f64,
    },
    Prey {
        predator_attraction_scale: f64,
        prey_repulsion_scale: f64,
    },
    Predator {
        prey_repulsion_scale: f64,
        predator_repulsion_scale: f64,
    },
    /// Attractor whose position is scripted by a driving system
    PathAttractor {
        prey_attraction_scale: f64,
        driver: DrivingSystem,
    },
}

impl Behavior {
    pub fn kind(&self) -> AgentKind {
        match self {
            Behavior::Attractor { .. } | Behavior::PathAttractor { .. } => AgentKind::Attractor,
            Behavior::Prey { .. } => AgentKind::Prey,
            Behavior::Predator { .. } => AgentKind::Predator,
        }
    }

    /// True when the position comes from a driving system instead of forces
    pub fn is_scripted(&self) -> bool {
        matches!(self, Behavior::PathAttractor { .. })
    }
}

/// Everything needed to create an agent except its id
#[derive(Debug, Clone)]
pub struct AgentTemplate {
    pub behavior: Behavior,
    pub initial: KinematicState,
    pub max_speed: f64,
}

impl AgentTemplate {
    pub fn attractor(initial: KinematicState, prey_attraction_scale: f64, max_speed: f64) -> Self {
        Self {
            behavior: Behavior::Attractor { prey_attraction_scale },
            initial,
            max_speed,
        }
    }

    pub fn prey(
        initial: KinematicState,
        predator_attraction_scale: f64,
        prey_repulsion_scale: f64,
        max_speed: f64,
    ) -> Self {
        Self {
            behavior: Behavior::Prey {
                predator_attraction_scale,
                prey_repulsion_scale,
            },
            initial,
            max_speed,
        }
    }

    pub fn predator(
        initial: KinematicState,
        prey_repulsion_scale: f64,
        predator_repulsion_scale: f64,
        max_speed: f64,
    ) -> Self {
        Self {
            behavior: Behavior::Predator {
                prey_repulsion_scale,
                predator_repulsion_scale,
            },
            initial,
            max_speed,
        }
    }

    /// The initial displacement is taken from the driver's first waypoint
    pub fn path_attractor(
        driver: impl Into<DrivingSystem>,
        prey_attraction_scale: f64,
        max_speed: f64,
    ) -> Self {
        Self {
            behavior: Behavior::PathAttractor {
                prey_attraction_scale,
                driver: driver.into(),
            },
            initial: KinematicState::default(),
            max_speed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Agent {
    id: AgentId,
    pub(crate) behavior: Behavior,
    pub(crate) current: KinematicState,
    pub(crate) next: KinematicState,
    max_speed: f64,
}

impl Agent {
    /// Build an agent from a template
    ///
    /// Callers are responsible for id uniqueness; the simulator draws ids from
    /// its own [`SequentialIds`].
    pub fn new(id: AgentId, template: AgentTemplate) -> SimResult<Self> {
        let AgentTemplate {
            mut behavior,
            mut initial,
            max_speed,
        } = template;

        if max_speed.is_nan() || max_speed < 0.0 {
            return Err(SimError::InvalidMaxSpeed(max_speed));
        }

        if let Behavior::PathAttractor { driver, .. } = &mut behavior {
            initial.displacement = driver.next_point();
        }

        Ok(Self {
            id,
            behavior,
            current: initial,
            next: initial,
            max_speed,
        })
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn kind(&self) -> AgentKind {
        self.behavior.kind()
    }

    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    pub fn current(&self) -> &KinematicState {
        &self.current
    }

    pub fn next(&self) -> &KinematicState {
        &self.next
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    /// Direction of travel in radians (atan2 of the current velocity)
    pub fn heading(&self) -> f64 {
        let v = self.current.velocity;
        v.y.atan2(v.x)
    }

    /// Current speed relative to the bound, kept in `[0.1, 1.0]` for drawing
    pub fn speed_ratio(&self) -> f64 {
        let ratio = self.current.velocity.norm() / self.max_speed;
        if ratio.is_nan() {
            return 0.1;
        }
        ratio.clamp(0.1, 1.0)
    }

    /// Acceleration this agent imposes on `target`
    pub fn provide_acceleration(&self, target: &Agent, singularity_eps: f64) -> NVec2 {
        super::forces::provide_acceleration(self, target, singularity_eps)
    }

    /// Promote `next` to `current`
    pub(crate) fn commit(&mut self) {
        self.current = self.next;
    }
}

impl PartialEq for Agent {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Agent {}
