//! Human-readable error descriptions, exit codes and structured JSON error formatting.

use leet2yeet_config::DefinesError;
use leet2yeet_core::error::{ConvertError, RenderError, Report};

/// Input could not be read or parsed into parameters.
pub const EXIT_INPUT: u8 = 1;
/// Conversion refused or produced unusable values.
pub const EXIT_CONVERSION: u8 = 3;

/// Map an eyre::Report to a human-readable explanation with likely causes and fix hints.
pub fn humanize(err: &Report) -> String {
    if let Some(de) = err.downcast_ref::<DefinesError>() {
        return match de {
            DefinesError::NotFound(path) => format!(
                "What happened: Config '{}' does not exist.\nLikely causes: Not running from a LEETMOUSE checkout, or a typo in the path.\nHow to fix: Pass the LEETMOUSE config.h explicitly with --config <path>.",
                path.display()
            ),
            DefinesError::Io { path, source } => format!(
                "What happened: Could not read config '{}' ({source}).\nLikely causes: Missing permissions or the path is a directory.\nHow to fix: Check the path and file permissions, then rerun.",
                path.display()
            ),
            DefinesError::MalformedValue {
                line,
                name,
                value,
                reason,
            } => format!(
                "What happened: Could not parse config: line {line} defines {name} as '{value}' ({reason}).\nLikely causes: A typo or a hand-edited value.\nHow to fix: Write the value as an unsigned decimal, e.g. `#define {name} 1.0` or `#define {name} 1.5e+04`."
            ),
        };
    }

    if let Some(ce) = err.downcast_ref::<ConvertError>() {
        return match ce {
            ConvertError::MissingParameter(name) => format!(
                "What happened: Could not parse config: parameter `{name}` is missing.\nLikely causes: The file is not a LEETMOUSE config.h, or the define is commented out.\nHow to fix: Add `#define {} <value>` to the config.",
                name.to_ascii_uppercase()
            ),
            ConvertError::IncompatiblePrescale { x, y } => format!(
                "What happened: PRE_SCALE_X ({x}) and PRE_SCALE_Y ({y}) differ.\nLikely causes: Per-axis DPI correction in LEETMOUSE.\nHow to fix: YeetMouse has a single prescale; set both axes to the same value and move the axis ratio into POST_SCALE_Y."
            ),
        };
    }

    if let Some(RenderError::NonFinite { field, value }) = err.downcast_ref::<RenderError>() {
        return format!(
            "What happened: Converted {field} is {value}.\nLikely causes: SENSITIVITY or POST_SCALE_X is 0 in the LEETMOUSE config.\nHow to fix: Use non-zero values for both; the conversion divides by them."
        );
    }

    // Generic fallback
    let msg = err.to_string();
    let mut cause = String::new();
    if let Some(src) = err.source() {
        cause = format!(" Cause: {src}");
    }
    format!(
        "Something went wrong.{cause}\nHow to fix: Re-run with --log-level=debug for details. Original: {msg}"
    )
}

/// Stable exit codes per failure class; clap usage errors use 2 on their own.
pub fn exit_code_for_error(err: &Report) -> u8 {
    if err.downcast_ref::<DefinesError>().is_some() {
        return EXIT_INPUT;
    }
    if let Some(ce) = err.downcast_ref::<ConvertError>() {
        return match ce {
            ConvertError::MissingParameter(_) => EXIT_INPUT,
            ConvertError::IncompatiblePrescale { .. } => EXIT_CONVERSION,
        };
    }
    if err.downcast_ref::<RenderError>().is_some() {
        return EXIT_CONVERSION;
    }
    1
}

fn reason_name(err: &Report) -> &'static str {
    if let Some(de) = err.downcast_ref::<DefinesError>() {
        return match de {
            DefinesError::NotFound(_) => "ConfigNotFound",
            DefinesError::Io { .. } => "ConfigUnreadable",
            DefinesError::MalformedValue { .. } => "MalformedValue",
        };
    }
    if let Some(ce) = err.downcast_ref::<ConvertError>() {
        return match ce {
            ConvertError::MissingParameter(_) => "MissingParameter",
            ConvertError::IncompatiblePrescale { .. } => "IncompatiblePrescale",
        };
    }
    if err.downcast_ref::<RenderError>().is_some() {
        return "NonFinite";
    }
    "Error"
}

/// Structured JSON for errors when --json is enabled.
pub fn format_error_json(err: &Report) -> String {
    use serde_json::json;

    let reason = reason_name(err);
    let details = match err.downcast_ref::<DefinesError>() {
        Some(DefinesError::MalformedValue { line, name, .. }) => {
            Some(json!({ "line": line, "name": name }))
        }
        _ => match err.downcast_ref::<ConvertError>() {
            Some(ConvertError::MissingParameter(name)) => Some(json!({ "name": name })),
            Some(ConvertError::IncompatiblePrescale { x, y }) => {
                Some(json!({ "pre_scale_x": x, "pre_scale_y": y }))
            }
            None => None,
        },
    };

    let obj = if let Some(d) = details {
        json!({ "reason": reason, "details": d, "message": humanize(err) })
    } else {
        json!({ "reason": reason, "message": humanize(err) })
    };
    obj.to_string()
}
