//! Owns the agents and drives the step / commit protocol.
//!
//! A frame is always `step` then `commit`:
//! - `step` sums every pairwise contribution from the `current` snapshot into
//!   a scratch buffer, then writes each agent's `next` state,
//! - `commit` promotes every `next` to `current` in one pass.
//!
//! Between the two calls `current` is untouched, so an observer can read a
//! consistent snapshot of the whole flock.

use tracing::debug;

use super::agents::{Agent, AgentId, AgentTemplate, SequentialIds};
use super::error::{SimError, SimResult};
use super::forces::PairwiseForces;
use super::integrator::advance_agent;
use super::states::NVec2;

#[derive(Debug)]
pub struct Simulator {
    time_step: f64,
    forces: PairwiseForces,
    agents: Vec<Agent>,
    ids: SequentialIds,
    accels: Vec<NVec2>, // per-agent totals of the last step
    pending: bool, // a step is waiting for its commit
    frame: u64, // committed frames
}

impl Simulator {
    pub fn new(time_step: f64) -> SimResult<Self> {
        if !time_step.is_finite() || time_step <= 0.0 {
            return Err(SimError::InvalidTimeStep(time_step));
        }
        Ok(Self {
            time_step,
            forces: PairwiseForces::default(),
            agents: Vec::new(),
            ids: SequentialIds::new(),
            accels: Vec::new(),
            pending: false,
            frame: 0,
        })
    }

    /// Separation below which inverse-distance laws contribute nothing
    pub fn with_singularity_eps(mut self, eps: f64) -> SimResult<Self> {
        if eps.is_nan() || eps < 0.0 {
            return Err(SimError::InvalidSingularityEps(eps));
        }
        self.forces.singularity_eps = eps;
        Ok(self)
    }

    /// Run the accumulation phase on the rayon pool
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.forces.parallel = parallel;
        self
    }

    /// Register a new agent and return its id
    pub fn add_agent(&mut self, template: AgentTemplate) -> SimResult<AgentId> {
        if self.pending {
            return Err(SimError::StepPending);
        }
        let id = self.ids.next_id();
        let agent = Agent::new(id, template)?;
        debug!(id = id.0, kind = %agent.kind(), "agent added");
        self.agents.push(agent);
        Ok(id)
    }

    /// Compute every agent's next state from the current snapshot
    pub fn step(&mut self) -> SimResult<()> {
        if self.agents.is_empty() {
            return Err(SimError::NoAgents);
        }
        if self.pending {
            return Err(SimError::StepPending);
        }

        let n = self.agents.len();
        self.accels.clear();
        self.accels.resize(n, NVec2::zeros());

        // all reads happen here, before any next state is written
        self.forces.accumulate_accels(&self.agents, &mut self.accels);

        let dt = self.time_step;
        for (agent, total) in self.agents.iter_mut().zip(self.accels.iter()) {
            advance_agent(agent, *total, dt);
        }

        self.pending = true;
        debug!(frame = self.frame, agents = n, "step computed");
        Ok(())
    }

    /// Promote every agent's next state to current
    pub fn commit(&mut self) -> SimResult<()> {
        if !self.pending {
            return Err(SimError::NothingToCommit);
        }
        for agent in self.agents.iter_mut() {
            agent.commit();
        }
        self.pending = false;
        self.frame += 1;
        debug!(frame = self.frame, "step committed");
        Ok(())
    }

    /// One full frame: step, hand the consistent snapshot to `observe`, commit
    pub fn frame<R>(&mut self, observe: impl FnOnce(&Simulator) -> R) -> SimResult<R> {
        self.step()?;
        let out = observe(self);
        self.commit()?;
        Ok(out)
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id() == id)
    }

    /// Totals summed for each agent on the last step, in insertion order
    pub fn last_accelerations(&self) -> &[NVec2] {
        &self.accels
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn singularity_eps(&self) -> f64 {
        self.forces.singularity_eps
    }

    pub fn is_parallel(&self) -> bool {
        self.forces.parallel
    }

    /// Number of committed frames
    pub fn frame_index(&self) -> u64 {
        self.frame
    }

    /// True between a `step` and its `commit`
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
