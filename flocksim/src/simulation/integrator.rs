//! Per-agent state update for one step
//!
//! Force-driven agents use a lagged forward-Euler scheme: the acceleration
//! measured this step is only stored, and the velocity and displacement are
//! advanced with the *previous* step's acceleration and velocity. Scripted
//! agents take their next displacement from their driving system instead.

use super::agents::{Agent, Behavior};
use super::driving::WaypointSource;
use super::states::NVec2;
use super::vector::clamp_magnitude;

/// Fill `agent.next` from `agent.current` and the freshly summed acceleration
///
/// 1. next.a = total
/// 2. next.v = clamp(current.v + current.a * dt, max_speed)
/// 3. next.x = current.x + current.v * dt
pub fn update_next_state(agent: &mut Agent, total: NVec2, dt: f64) {
    let current = agent.current;
    let max_speed = agent.max_speed();
    let next = &mut agent.next;

    next.acceleration = total;
    next.velocity = clamp_magnitude(current.velocity + current.acceleration * dt, max_speed);
    next.displacement = current.displacement + current.velocity * dt;
}

/// Step one agent, dispatching on whether it is scripted
pub fn advance_agent(agent: &mut Agent, total: NVec2, dt: f64) {
    if let Behavior::PathAttractor { driver, .. } = &mut agent.behavior {
        let waypoint = driver.next_point();
        // velocity and acceleration stay at their last values
        agent.next = agent.current;
        agent.next.displacement = waypoint;
        return;
    }
    update_next_state(agent, total, dt);
}
