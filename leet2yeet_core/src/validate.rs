//! Numeric proof that a conversion preserves pointer feel.
//!
//! Both curves are evaluated along the X axis for every integer magnitude in
//! the sweep; the target/source output ratio, rounded to three decimals, must
//! be exactly `1.000`. The first magnitude that breaks this is reported and the
//! sweep stops there.

use std::ops::RangeInclusive;

use serde::Serialize;
use thiserror::Error;

use crate::convert::convert;
use crate::curve::{apply_source, apply_target};
use crate::error::ConvertError;
use crate::params::{SourceParameters, TargetParameters};

/// Input magnitudes (mickeys) checked by [`validate`].
pub const SWEEP: RangeInclusive<u32> = 1..=9999;

/// Decimal places kept when comparing the ratio against 1.
pub const RATIO_DECIMALS: i32 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SweepReport {
    /// Magnitudes checked.
    pub samples: u32,
    /// Largest `|target/source - 1|` before rounding.
    pub max_deviation: f64,
}

/// First magnitude where the converted curve departs from the LEETMOUSE one.
#[derive(Debug, Clone, Copy, PartialEq, Error, Serialize)]
#[error("curves diverge at magnitude {magnitude}: target/source ratio {ratio:.3}")]
pub struct Divergence {
    pub magnitude: u32,
    /// Rounded ratio; NaN when the source output is zero.
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidateError {
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error(transparent)]
    Diverged(#[from] Divergence),
}

/// Sweep [`SWEEP`].
pub fn validate(
    source: &SourceParameters,
    target: &TargetParameters,
) -> Result<SweepReport, Divergence> {
    validate_over(source, target, SWEEP)
}

#[allow(clippy::float_cmp)]
pub fn validate_over(
    source: &SourceParameters,
    target: &TargetParameters,
    range: RangeInclusive<u32>,
) -> Result<SweepReport, Divergence> {
    let mut report = SweepReport::default();
    for n in range {
        let x = f64::from(n);
        let (out_source, _) = apply_source(x, 0.0, source);
        let (out_target, _) = apply_target(x, 0.0, target);
        let raw = out_target / out_source;
        let ratio = round_to(raw, RATIO_DECIMALS);
        // NaN compares unequal and lands here too.
        if ratio != 1.0 {
            tracing::debug!(magnitude = n, ratio, "curves diverge");
            return Err(Divergence {
                magnitude: n,
                ratio,
            });
        }
        report.samples += 1;
        report.max_deviation = report.max_deviation.max((raw - 1.0).abs());
    }
    tracing::debug!(
        samples = report.samples,
        max_deviation = report.max_deviation,
        "sweep passed"
    );
    Ok(report)
}

/// Convert, then sweep. A prescale mismatch is refused before any curve is evaluated.
pub fn check_conversion(
    source: &SourceParameters,
) -> Result<(TargetParameters, SweepReport), ValidateError> {
    let target = convert(source)?;
    let report = validate(source, &target)?;
    Ok((target, report))
}

// Half away from zero on the scaled value, not ties-to-even; the two only
// disagree for a ratio sitting on a half-thousandth (0.9995, 1.0005).
fn round_to(x: f64, decimals: i32) -> f64 {
    let k = 10f64.powi(decimals);
    (x * k).round() / k
}
