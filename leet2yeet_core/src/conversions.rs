//! Bridging `leet2yeet_config` types to `leet2yeet_core` types.

use crate::error::{ConvertError, Result};
use crate::params::SourceParameters;
use eyre::WrapErr;
use leet2yeet_config::Defines;
use std::path::Path;

impl TryFrom<&Defines> for SourceParameters {
    type Error = ConvertError;

    fn try_from(d: &Defines) -> std::result::Result<Self, Self::Error> {
        let get = |key: &'static str| d.get(key).ok_or(ConvertError::MissingParameter(key));
        Ok(Self {
            pre_scale_x: get("pre_scale_x")?,
            pre_scale_y: get("pre_scale_y")?,
            offset: get("offset")?,
            speed_cap: get("speed_cap")?,
            sensitivity: get("sensitivity")?,
            acceleration: get("acceleration")?,
            sens_cap: get("sens_cap")?,
            post_scale_x: get("post_scale_x")?,
            post_scale_y: get("post_scale_y")?,
        })
    }
}

/// Read a LEETMOUSE `config.h` into a typed parameter set.
pub fn load_source(path: &Path) -> Result<SourceParameters> {
    let defines = leet2yeet_config::read_defines(path)?;
    let params = SourceParameters::try_from(&defines)
        .wrap_err_with(|| format!("incomplete config '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), ?params, "loaded source parameters");
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> Defines {
        [
            ("pre_scale_x", 0.1),
            ("pre_scale_y", 0.1),
            ("offset", 10.0),
            ("speed_cap", 0.0),
            ("sensitivity", 0.85),
            ("acceleration", 0.26),
            ("sens_cap", 4.0),
            ("post_scale_x", 2.0),
            ("post_scale_y", 2.0),
            ("buffer_size", 8.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn destructures_full_map() {
        let p = SourceParameters::try_from(&full()).unwrap();
        assert_eq!(p, SourceParameters::REFERENCE);
    }

    #[test]
    fn reports_first_missing_key() {
        let mut d: Defines = full().iter().filter(|(k, _)| *k != "sens_cap").collect();
        assert_eq!(
            SourceParameters::try_from(&d),
            Err(ConvertError::MissingParameter("sens_cap"))
        );
        d.insert("SENS_CAP", 4.0);
        assert!(SourceParameters::try_from(&d).is_ok());
    }
}
