//! Vector helpers on top of nalgebra.
//!
//! nalgebra already gives `+`, `-`, scalar `*`, `dot`, `norm_squared` and
//! `norm`. The two operations below pin down the conventions the force laws
//! rely on.

use super::states::NVec2;

/// Unit vector in the direction of `v`
///
/// The zero vector (or any vector whose length is not a positive finite
/// number) has no direction and maps to the zero vector.
pub fn unit(v: NVec2) -> NVec2 {
    let len = v.norm();
    if len > 0.0 && len.is_finite() {
        v / len
    } else {
        NVec2::zeros()
    }
}

/// Rescale `v` to exactly `max_magnitude` if it is longer, keeping its direction
pub fn clamp_magnitude(v: NVec2, max_magnitude: f64) -> NVec2 {
    let len = v.norm();
    if len > max_magnitude {
        v * (max_magnitude / len)
    } else {
        v
    }
}
