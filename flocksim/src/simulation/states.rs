//! Core state types for the flock simulation.
//!
//! Defines the 2D vector alias shared by every force law and the
//! double-buffered kinematic record each agent carries:
//! - `current` is read by every force evaluation of a step,
//! - `next` is scratch written by the integrator and promoted on commit.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// A position in simulation space (waypoints, control points)
pub type Point = NVec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicState {
    pub displacement: NVec2, // position
    pub velocity: NVec2, // velocity
    pub acceleration: NVec2, // acceleration measured on the last step
}

impl KinematicState {
    pub fn new(displacement: NVec2, velocity: NVec2, acceleration: NVec2) -> Self {
        Self {
            displacement,
            velocity,
            acceleration,
        }
    }

    /// At rest at `displacement`
    pub fn at(displacement: NVec2) -> Self {
        Self::new(displacement, NVec2::zeros(), NVec2::zeros())
    }
}

impl Default for KinematicState {
    fn default() -> Self {
        Self::at(NVec2::zeros())
    }
}
