use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConvertError {
    /// The target driver has a single prescale; anisotropic input scaling cannot be expressed.
    #[error("pre-scale must match on both axes (x = {x}, y = {y})")]
    IncompatiblePrescale { x: f64, y: f64 },
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RenderError {
    #[error("{field} is not finite ({value})")]
    NonFinite { field: &'static str, value: f64 },
}

pub type Result<T> = eyre::Result<T>;
pub use eyre::Report;
