//! LEETMOUSE → YeetMouse parameter mapping.
//!
//! Along the X axis the two linear curves reduce to
//!
//! ```text
//! LEET: out = x * pre * post_x * [1 + (pre*|v| - offset) * accel / sens]
//! YEET: out = x * pre * sens_t * [1 + (pre*|v| - offset) * accel_t]
//! ```
//!
//! so matching coefficients gives `accel_t = accel / sens`, `sens_t = post_x`.
//! LEETMOUSE caps the *un-normalized* sensitivity at `sens_cap`, which becomes a
//! cap of `sens_cap / sens * post_x` on the YeetMouse output multiplier.

use crate::error::ConvertError;
use crate::params::{SourceParameters, TargetParameters};

/// Map a source set onto the equivalent target set.
///
/// Zero `sensitivity` or `post_scale_x` is not rejected here: the result
/// carries infinities/NaN, which rendering and validation refuse.
pub fn convert(p: &SourceParameters) -> Result<TargetParameters, ConvertError> {
    if !p.is_convertible() {
        return Err(ConvertError::IncompatiblePrescale {
            x: p.pre_scale_x,
            y: p.pre_scale_y,
        });
    }

    let target = TargetParameters {
        pre_scale: p.pre_scale_x,
        input_cap: p.speed_cap,
        offset: p.offset,
        sensitivity: p.post_scale_x,
        acceleration: p.acceleration / p.sensitivity,
        sensitivity_y: p.post_scale_y / p.post_scale_x,
        output_cap: (p.sens_cap / p.sensitivity) * p.post_scale_x,
        smoothing: false,
    };

    if let Some((field, value)) = target.non_finite_field() {
        tracing::warn!(field, value, "conversion produced a non-finite parameter");
    }
    if p.speed_cap > 0.0 {
        // LEETMOUSE shortens the vector at the cap, YeetMouse only caps the
        // speed fed to the curve.
        tracing::warn!(
            speed_cap = p.speed_cap,
            "speed cap has no exact YeetMouse equivalent; curves differ above it"
        );
    }
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_set_maps_to_expected_values() {
        let t = convert(&SourceParameters::REFERENCE).unwrap();
        assert!((t.acceleration - 0.26 / 0.85).abs() < 1e-12);
        assert_eq!(t.sensitivity, 2.0);
        assert_eq!(t.sensitivity_y, 1.0);
        assert!((t.output_cap - 4.0 / 0.85 * 2.0).abs() < 1e-12);
        assert_eq!(t.pre_scale, 0.1);
        assert_eq!(t.input_cap, 0.0);
        assert_eq!(t.offset, 10.0);
        assert!(!t.smoothing);
    }

    #[test]
    fn zero_sensitivity_is_not_intercepted() {
        let p = SourceParameters {
            sensitivity: 0.0,
            ..SourceParameters::REFERENCE
        };
        let t = convert(&p).unwrap();
        assert!(t.acceleration.is_infinite());
        assert!(t.output_cap.is_infinite());
    }
}
