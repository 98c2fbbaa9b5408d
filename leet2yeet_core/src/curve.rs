//! Pointer acceleration as each driver applies it to one report.
//!
//! Both evaluators assume a constant report interval, so speed equals the
//! (prescaled) displacement magnitude. Arithmetic follows the drivers'
//! operation order so results match them to the last bit.
#![allow(clippy::suboptimal_flops)]

use serde::Serialize;

use crate::params::{SourceParameters, TargetParameters};

/// LEETMOUSE linear acceleration.
pub fn apply_source(dx: f64, dy: f64, p: &SourceParameters) -> (f64, f64) {
    let mut dx = dx * p.pre_scale_x;
    let mut dy = dy * p.pre_scale_y;

    let mut rate = (dx * dx + dy * dy).sqrt();

    // Speed cap keeps direction: the vector is shortened, not just the rate.
    if p.speed_cap > 0.0 && rate >= p.speed_cap {
        let k = p.speed_cap / rate;
        dx *= k;
        dy *= k;
        rate = p.speed_cap;
    }

    // Offset applies after the cap.
    rate -= p.offset;

    let mut accel_sense = p.sensitivity;
    if rate > 0.0 {
        accel_sense += rate * p.acceleration;
    }
    if p.sens_cap > 0.0 && accel_sense >= p.sens_cap {
        accel_sense = p.sens_cap;
    }
    accel_sense /= p.sensitivity;

    (
        dx * accel_sense * p.post_scale_x,
        dy * accel_sense * p.post_scale_y,
    )
}

/// YeetMouse linear mode.
pub fn apply_target(dx: f64, dy: f64, p: &TargetParameters) -> (f64, f64) {
    let dx = dx * p.pre_scale;
    let dy = dy * p.pre_scale;

    let mut speed = (dx * dx + dy * dy).sqrt();
    // Unlike LEETMOUSE, only the magnitude is capped.
    if p.input_cap > 0.0 && speed > p.input_cap {
        speed = p.input_cap;
    }
    speed -= p.offset;

    // The driver scales dy by the X multiplier as well; the Y multiplier is
    // computed but never reaches the output. Kept for compatibility. The
    // equivalence sweep runs along X only and cannot see the difference.
    let (multiplier, _multiplier_y) = target_multipliers(speed, p);
    (dx * multiplier, dy * multiplier)
}

/// `(x, y)` output multipliers for an offset-adjusted speed.
pub fn target_multipliers(speed: f64, p: &TargetParameters) -> (f64, f64) {
    let mut multiplier = if speed > 0.0 {
        1.0 + speed * p.acceleration
    } else {
        1.0
    };
    multiplier *= p.sensitivity;
    let mut multiplier_y = multiplier * p.sensitivity_y;

    if p.output_cap > 0.0 {
        multiplier = multiplier.min(p.output_cap);
        multiplier_y = multiplier_y.min(p.output_cap);
    }
    (multiplier, multiplier_y)
}

/// Which driver's curve to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    Source,
    Target,
}

impl CurveKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Source => "leetmouse",
            Self::Target => "yeetmouse",
        }
    }
}

/// X-axis output divided by input magnitude, i.e. the effective sensitivity at `n` mickeys.
pub fn source_gain(n: f64, p: &SourceParameters) -> f64 {
    apply_source(n, 0.0, p).0 / n
}

/// See [`source_gain`].
pub fn target_gain(n: f64, p: &TargetParameters) -> f64 {
    apply_target(n, 0.0, p).0 / n
}

/// Effective sensitivity of both curves at one input magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GainSample {
    pub magnitude: f64,
    pub source: f64,
    pub target: f64,
}

/// Sample both gains at `rows` magnitudes spread evenly over `1..=max`.
pub fn gain_table(
    source: &SourceParameters,
    target: &TargetParameters,
    rows: usize,
    max: f64,
) -> Vec<GainSample> {
    #[allow(clippy::cast_precision_loss)]
    let step = if rows > 1 {
        (max - 1.0) / (rows - 1) as f64
    } else {
        0.0
    };
    (0..rows)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let magnitude = 1.0 + step * i as f64;
            GainSample {
                magnitude,
                source: source_gain(magnitude, source),
                target: target_gain(magnitude, target),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_source() -> SourceParameters {
        SourceParameters {
            pre_scale_x: 1.0,
            pre_scale_y: 1.0,
            offset: 0.0,
            speed_cap: 0.0,
            sensitivity: 1.0,
            acceleration: 0.0,
            sens_cap: 0.0,
            post_scale_x: 1.0,
            post_scale_y: 1.0,
        }
    }

    fn flat_target() -> TargetParameters {
        TargetParameters {
            pre_scale: 1.0,
            input_cap: 0.0,
            offset: 0.0,
            sensitivity: 1.0,
            acceleration: 0.0,
            sensitivity_y: 1.0,
            output_cap: 0.0,
            smoothing: false,
        }
    }

    #[test]
    fn identity_parameters_pass_through() {
        assert_eq!(apply_source(3.0, -4.0, &flat_source()), (3.0, -4.0));
        assert_eq!(apply_target(3.0, -4.0, &flat_target()), (3.0, -4.0));
    }

    #[test]
    fn source_below_offset_keeps_base_sensitivity() {
        let p = SourceParameters {
            offset: 10.0,
            acceleration: 1.0,
            sensitivity: 2.0,
            ..flat_source()
        };
        // rate 5 - offset 10 < 0 -> accel_sense = sens / sens = 1
        assert_eq!(apply_source(5.0, 0.0, &p), (5.0, 0.0));
    }

    #[test]
    fn source_accelerates_above_offset() {
        let p = SourceParameters {
            offset: 1.0,
            acceleration: 0.5,
            sensitivity: 2.0,
            ..flat_source()
        };
        // rate 5 -> 4 over offset -> sense 2 + 2 = 4 -> /2 = 2
        assert_eq!(apply_source(5.0, 0.0, &p), (10.0, 0.0));
    }

    #[test]
    fn source_speed_cap_rescales_direction() {
        let p = SourceParameters {
            speed_cap: 5.0,
            ..flat_source()
        };
        let (x, y) = apply_source(6.0, 8.0, &p);
        assert!((x - 3.0).abs() < 1e-12);
        assert!((y - 4.0).abs() < 1e-12);
    }

    #[test]
    fn source_sens_cap_clamps() {
        let p = SourceParameters {
            acceleration: 1.0,
            sens_cap: 3.0,
            ..flat_source()
        };
        // sense 1 + 100 capped at 3
        assert_eq!(apply_source(100.0, 0.0, &p), (300.0, 0.0));
    }

    #[test]
    fn target_input_cap_is_magnitude_only() {
        let p = TargetParameters {
            input_cap: 5.0,
            acceleration: 1.0,
            ..flat_target()
        };
        // speed 10 capped to 5 -> multiplier 6, applied to the uncapped vector
        assert_eq!(apply_target(6.0, 8.0, &p), (36.0, 48.0));
    }

    #[test]
    fn target_output_cap_clamps_multiplier() {
        let p = TargetParameters {
            acceleration: 1.0,
            sensitivity: 2.0,
            output_cap: 5.0,
            ..flat_target()
        };
        assert_eq!(apply_target(10.0, 0.0, &p), (50.0, 0.0));
    }

    #[test]
    fn target_ignores_sensitivity_y_on_output() {
        let p = TargetParameters {
            sensitivity: 2.0,
            sensitivity_y: 3.0,
            ..flat_target()
        };
        assert_eq!(apply_target(1.0, 1.0, &p), (2.0, 2.0));
        assert_eq!(target_multipliers(0.0, &p), (2.0, 6.0));
    }

    #[test]
    fn gains_are_output_over_input() {
        let p = TargetParameters {
            sensitivity: 1.5,
            ..flat_target()
        };
        assert_eq!(target_gain(4.0, &p), 1.5);
        assert_eq!(source_gain(4.0, &flat_source()), 1.0);
        assert_eq!(CurveKind::Source.name(), "leetmouse");
    }

    #[test]
    fn gain_table_spans_range() {
        let rows = gain_table(&flat_source(), &flat_target(), 5, 9.0);
        let mags: Vec<f64> = rows.iter().map(|r| r.magnitude).collect();
        assert_eq!(mags, vec![1.0, 3.0, 5.0, 7.0, 9.0]);
        assert!(rows.iter().all(|r| r.source == 1.0 && r.target == 1.0));
        assert_eq!(gain_table(&flat_source(), &flat_target(), 1, 9.0).len(), 1);
        assert!(gain_table(&flat_source(), &flat_target(), 0, 9.0).is_empty());
    }
}
