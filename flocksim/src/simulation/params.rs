//! Numerical parameters for a run
//!
//! `Parameters` holds runtime settings:
//! - integration step size and number of frames,
//! - seed for scattering populations,
//! - separation below which inverse-distance forces vanish

#[derive(Debug, Clone)]
pub struct Parameters {
    pub time_step: f64, // step size dt
    pub frames: usize, // number of step/commit cycles
    pub seed: u64, // deterministic seed
    pub singularity_eps: f64, // zero-contribution radius for inverse laws
}
