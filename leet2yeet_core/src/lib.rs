#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! LEETMOUSE → YeetMouse acceleration conversion.
//!
//! Both drivers implement a linear acceleration curve with different
//! parameterizations. This crate maps one onto the other and proves the
//! mapping numerically.
//!
//! ## Architecture
//!
//! - **Parameters**: typed, immutable records for each driver (`params`)
//! - **Conversion**: closed-form source → target mapping (`convert`)
//! - **Curves**: per-report evaluators for both drivers (`curve`)
//! - **Validation**: magnitude sweep comparing the two curves (`validate`)
//! - **Rendering**: YeetMouse `config.h` output (`render`, `format`)
//!
//! Parsing of the LEETMOUSE header lives in `leet2yeet_config`; `conversions`
//! bridges its `Defines` map into [`SourceParameters`].
//!
//! Only the linear mode is convertible, and only when the LEETMOUSE prescale is
//! the same on both axes. There is no reverse mapping.

pub mod conversions;
pub mod convert;
pub mod curve;
pub mod error;
pub mod format;
pub mod params;
pub mod render;
pub mod validate;

pub use conversions::load_source;
pub use convert::convert;
pub use curve::{CurveKind, apply_source, apply_target, source_gain, target_gain};
pub use error::{ConvertError, RenderError};
pub use params::{SourceParameters, TargetParameters};
pub use render::render;
pub use validate::{Divergence, SWEEP, SweepReport, ValidateError, check_conversion, validate};
