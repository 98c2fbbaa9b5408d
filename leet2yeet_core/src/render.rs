//! YeetMouse `config.h` generation.
//!
//! Only linear mode is produced. Angle snapping, rotation and the LUT are
//! written as neutral constants; the power/classic/motivity knobs keep the
//! YeetMouse defaults so the header stays complete.

use crate::error::RenderError;
use crate::format::sig4;
use crate::params::TargetParameters;

/// Render a complete YeetMouse config header.
///
/// Non-finite parameters (from a zero sensitivity or post-scale) are refused.
pub fn render(p: &TargetParameters) -> Result<String, RenderError> {
    if let Some((field, value)) = p.non_finite_field() {
        return Err(RenderError::NonFinite { field, value });
    }

    Ok(format!(
        "// Acceleration Mode
#define ACCELERATION_MODE AccelMode_Linear

// Global Parameters
#define SENSITIVITY {sensitivity} // For compatibility this is named SENSITIVITY, but it really refers just to the X axis
#define SENSITIVITY_Y {sensitivity_y} // Ratio Y/X
#define OUTPUT_CAP {output_cap}
#define INPUT_CAP {input_cap}
#define OFFSET {offset}
#define PRESCALE {pre_scale}

// Angle Snapping (in radians)
#define ANGLE_SNAPPING_THRESHOLD 0 // 0 deg. in rad.
#define ANGLE_SNAPPING_ANGLE 0 // 1.5708 - 90 deg. in rad.

// Rotation (in radians)
#define ROTATION_ANGLE 0

// LUT settings
#define LUT_SIZE 0
#define LUT_DATA 0

// Mode-specific parameters
#define ACCELERATION {acceleration}
#define MIDPOINT 1.3
#define MOTIVITY 1.5
#define EXPONENT 1.8
#define USE_SMOOTHING {smoothing} // 1 - True, 0 - False

// Custom Curve (Not used on the driver side)
#define CC_DATA_AGGREGATE
",
        sensitivity = sig4(p.sensitivity),
        sensitivity_y = sig4(p.sensitivity_y),
        output_cap = sig4(p.output_cap),
        input_cap = sig4(p.input_cap),
        offset = sig4(p.offset),
        pre_scale = sig4(p.pre_scale),
        acceleration = sig4(p.acceleration),
        smoothing = u8::from(p.smoothing),
    ))
}
