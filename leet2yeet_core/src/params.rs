//! Parameter records for both drivers.
//!
//! Displacements are in mickeys per report. All scales, sensitivities and
//! caps are plain multipliers unless noted.

use serde::Serialize;

/// LEETMOUSE linear acceleration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SourceParameters {
    /// X input multiplier applied before speed is computed.
    pub pre_scale_x: f64,
    /// Y input multiplier applied before speed is computed.
    pub pre_scale_y: f64,
    /// Speed (mickeys) subtracted before acceleration kicks in.
    pub offset: f64,
    /// Input speed clamp in mickeys; `<= 0` disables.
    pub speed_cap: f64,
    /// Base sensitivity; the accelerated value is normalized by it.
    pub sensitivity: f64,
    /// Sensitivity gained per mickey of speed above `offset`.
    pub acceleration: f64,
    /// Upper bound for the accelerated sensitivity; `<= 0` disables.
    pub sens_cap: f64,
    /// X output multiplier applied after acceleration.
    pub post_scale_x: f64,
    /// Y output multiplier applied after acceleration.
    pub post_scale_y: f64,
}

impl SourceParameters {
    /// Exercises prescale, offset, sensitivity cap and postscale together.
    /// `leet2yeet --test` sweeps this set when no config is given.
    pub const REFERENCE: Self = Self {
        pre_scale_x: 0.1,
        pre_scale_y: 0.1,
        offset: 10.0,
        speed_cap: 0.0,
        sensitivity: 0.85,
        acceleration: 0.26,
        sens_cap: 4.0,
        post_scale_x: 2.0,
        post_scale_y: 2.0,
    };

    /// Only an isotropic prescale has a target representation.
    #[inline]
    #[allow(clippy::float_cmp)]
    pub fn is_convertible(&self) -> bool {
        self.pre_scale_x == self.pre_scale_y
    }
}

impl Default for SourceParameters {
    /// Values shipped in the LEETMOUSE sample config.
    fn default() -> Self {
        Self {
            pre_scale_x: 1.0,
            pre_scale_y: 1.0,
            offset: 0.0,
            speed_cap: 0.0,
            sensitivity: 1.0,
            acceleration: 0.04,
            sens_cap: 3.0,
            post_scale_x: 1.0,
            post_scale_y: 1.0,
        }
    }
}

/// YeetMouse linear-mode parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetParameters {
    /// Input multiplier for both axes.
    pub pre_scale: f64,
    /// Input speed clamp in mickeys; `<= 0` disables.
    pub input_cap: f64,
    /// Speed (mickeys) subtracted before acceleration kicks in.
    pub offset: f64,
    /// X output multiplier.
    pub sensitivity: f64,
    /// Multiplier gained per mickey of speed above `offset`.
    pub acceleration: f64,
    /// Y/X output ratio.
    pub sensitivity_y: f64,
    /// Upper bound for the final multiplier; `<= 0` disables.
    pub output_cap: f64,
    pub smoothing: bool,
}

impl TargetParameters {
    /// Numeric fields in render order.
    pub fn fields(&self) -> [(&'static str, f64); 7] {
        [
            ("sensitivity", self.sensitivity),
            ("sensitivity_y", self.sensitivity_y),
            ("output_cap", self.output_cap),
            ("input_cap", self.input_cap),
            ("offset", self.offset),
            ("pre_scale", self.pre_scale),
            ("acceleration", self.acceleration),
        ]
    }

    /// First field that is NaN or infinite, e.g. after converting a zero sensitivity.
    pub fn non_finite_field(&self) -> Option<(&'static str, f64)> {
        self.fields().into_iter().find(|(_, v)| !v.is_finite())
    }
}
