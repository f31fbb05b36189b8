//! Scripted position sources for agents that do not follow the force laws.
//!
//! A driving system hands out one waypoint per simulation step. The only
//! implementation today walks a closed chain of cubic Bezier segments.

use super::error::{SimError, SimResult};
use super::states::Point;

/// Infinite, non-restartable generator of waypoints
pub trait WaypointSource {
    /// Produce the next waypoint and advance the internal cursor
    fn next_point(&mut self) -> Point;
}

/// One cubic Bezier segment given by its four control points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub points: [Point; 4],
}

impl CubicBezier {
    pub fn new(points: [Point; 4]) -> Self {
        Self { points }
    }

    /// Evaluate the curve at parameter `t` in `[0, 1]` (Bernstein form)
    pub fn point_at(&self, t: f64) -> Point {
        let [p0, p1, p2, p3] = self.points;
        let s = 1.0 - t;
        let b0 = s * s * s;
        let b1 = 3.0 * s * s * t;
        let b2 = 3.0 * s * t * t;
        let b3 = t * t * t;
        p0 * b0 + p1 * b1 + p2 * b2 + p3 * b3
    }
}

/// Follows consecutive Bezier segments, wrapping after the last one
///
/// The cursor `t` is a single accumulating scalar: its integral part picks the
/// segment (modulo the segment count) and its fractional part is the curve
/// parameter inside that segment. Every call advances `t` by `increment`.
#[derive(Debug, Clone)]
pub struct BezierPath {
    segments: Vec<CubicBezier>,
    increment: f64,
    t: f64,
}

impl BezierPath {
    pub fn new(segments: Vec<CubicBezier>, increment: f64) -> SimResult<Self> {
        if segments.is_empty() {
            return Err(SimError::EmptyPath);
        }
        if !increment.is_finite() || increment < 0.0 {
            return Err(SimError::InvalidIncrement(increment));
        }
        Ok(Self {
            segments,
            increment,
            t: 0.0,
        })
    }

    /// Path that completes `cycles` full loops over `frames` calls
    pub fn with_cycles(segments: Vec<CubicBezier>, cycles: f64, frames: usize) -> SimResult<Self> {
        if frames == 0 {
            return Err(SimError::InvalidIncrement(f64::INFINITY));
        }
        let increment = cycles * segments.len() as f64 / frames as f64;
        Self::new(segments, increment)
    }

    pub fn segments(&self) -> &[CubicBezier] {
        &self.segments
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// Current value of the accumulating cursor
    pub fn cursor(&self) -> f64 {
        self.t
    }
}

impl WaypointSource for BezierPath {
    fn next_point(&mut self) -> Point {
        let whole = self.t.trunc();
        let frac = self.t - whole;
        let index = (whole as usize) % self.segments.len();
        let p = self.segments[index].point_at(frac);
        self.t += self.increment;
        p
    }
}

/// Every kind of driving system an agent can own
#[derive(Debug, Clone)]
pub enum DrivingSystem {
    Bezier(BezierPath),
}

impl WaypointSource for DrivingSystem {
    fn next_point(&mut self) -> Point {
        match self {
            DrivingSystem::Bezier(path) => path.next_point(),
        }
    }
}

impl From<BezierPath> for DrivingSystem {
    fn from(path: BezierPath) -> Self {
        DrivingSystem::Bezier(path)
    }
}
