//! Pairwise acceleration rules between agent kinds
//!
//! The *source* agent computes the acceleration it imposes on the *target*.
//! With `d = source - target` (pointing from the target toward the source):
//!
//! | source    | target   | acceleration on target            |
//! |-----------|----------|-----------------------------------|
//! | attractor | prey     | `scale * unit(d)`                 |
//! | prey      | prey     | `scale * unit(-d) / |d|^2`        |
//! | prey      | predator | `scale * unit(d)`                 |
//! | predator  | prey     | `scale * unit(-d) / |d|^2`        |
//! | predator  | predator | `scale * unit(-d) / |d|`          |
//!
//! Every other pair contributes nothing. When two agents sit within
//! `singularity_eps` of each other the inverse-distance laws contribute zero,
//! and `unit(0) = 0` makes the constant laws vanish as well.

use rayon::prelude::*;
use tracing::trace;

use super::agents::{Agent, AgentKind, Behavior};
use super::states::NVec2;
use super::vector::unit;

pub const DEFAULT_SINGULARITY_EPS: f64 = 1e-9;

/// Acceleration `source` imposes on `target`, read from both `current` states
pub fn provide_acceleration(source: &Agent, target: &Agent, singularity_eps: f64) -> NVec2 {
    let d = source.current().displacement - target.current().displacement;

    match (source.behavior(), target.kind()) {
        (
            Behavior::Attractor { prey_attraction_scale }
            | Behavior::PathAttractor { prey_attraction_scale, .. },
            AgentKind::Prey,
        ) => constant_pull(*prey_attraction_scale, d),
        (
            Behavior::Attractor { .. } | Behavior::PathAttractor { .. },
            AgentKind::Attractor | AgentKind::Predator,
        ) => NVec2::zeros(),

        (Behavior::Prey { prey_repulsion_scale, .. }, AgentKind::Prey) => {
            inverse_square_push(*prey_repulsion_scale, d, singularity_eps)
        }
        (Behavior::Prey { predator_attraction_scale, .. }, AgentKind::Predator) => {
            constant_pull(*predator_attraction_scale, d)
        }
        (Behavior::Prey { .. }, AgentKind::Attractor) => NVec2::zeros(),

        (Behavior::Predator { prey_repulsion_scale, .. }, AgentKind::Prey) => {
            inverse_square_push(*prey_repulsion_scale, d, singularity_eps)
        }
        (Behavior::Predator { predator_repulsion_scale, .. }, AgentKind::Predator) => {
            inverse_linear_push(*predator_repulsion_scale, d, singularity_eps)
        }
        (Behavior::Predator { .. }, AgentKind::Attractor) => NVec2::zeros(),
    }
}

/// Constant magnitude toward the source
fn constant_pull(scale: f64, d: NVec2) -> NVec2 {
    scale * unit(d)
}

/// Away from the source, falling off with the squared distance
fn inverse_square_push(scale: f64, d: NVec2, singularity_eps: f64) -> NVec2 {
    let away = -d;
    let dist = away.norm();
    if dist <= singularity_eps {
        return NVec2::zeros();
    }
    scale * unit(away) / (dist * dist)
}

/// Away from the source, falling off with the distance
fn inverse_linear_push(scale: f64, d: NVec2, singularity_eps: f64) -> NVec2 {
    let away = -d;
    let dist = away.norm();
    if dist <= singularity_eps {
        return NVec2::zeros();
    }
    scale * unit(away) / dist
}

/// All-pairs force accumulation over a set of agents
///
/// Reads `current` state only, so the result does not depend on the order in
/// which targets are processed.
#[derive(Debug, Clone, Copy)]
pub struct PairwiseForces {
    pub singularity_eps: f64, // separation below which inverse laws vanish
    pub parallel: bool, // accumulate on the rayon pool
}

impl Default for PairwiseForces {
    fn default() -> Self {
        Self {
            singularity_eps: DEFAULT_SINGULARITY_EPS,
            parallel: false,
        }
    }
}

impl PairwiseForces {
    /// Total acceleration every other agent imposes on `agents[target]`
    pub fn total_on(&self, agents: &[Agent], target: usize) -> NVec2 {
        let tgt = &agents[target];
        agents
            .iter()
            .filter(|src| src.id() != tgt.id())
            .fold(NVec2::zeros(), |acc, src| {
                acc + provide_acceleration(src, tgt, self.singularity_eps)
            })
    }

    /// Compute total accelerations for all agents
    /// - `out[i]` is overwritten with the sum of contributions on `agents[i]`
    pub fn accumulate_accels(&self, agents: &[Agent], out: &mut [NVec2]) {
        debug_assert_eq!(agents.len(), out.len());

        if self.parallel {
            out.par_iter_mut()
                .enumerate()
                .for_each(|(i, a)| *a = self.total_on(agents, i));
        } else {
            for (i, a) in out.iter_mut().enumerate() {
                *a = self.total_on(agents, i);
            }
        }

        for (agent, a) in agents.iter().zip(out.iter()) {
            trace!(id = agent.id().0, ax = a.x, ay = a.y, "accumulated acceleration");
        }
    }
}
