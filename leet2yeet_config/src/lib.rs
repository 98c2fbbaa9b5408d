#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Reader for C-preprocessor style driver configs.
//!
//! LEETMOUSE keeps its acceleration parameters in a `config.h` made of
//! `#define NAME VALUE` lines. [`parse_defines`] scans that text line by line
//! and collects every numeric define into a [`Defines`] map keyed by the
//! lower-cased name.
//!
//! - Lines that are not `#define` directives are skipped (includes, comments, blanks).
//! - Names must be `[A-Z_]+`; anything else is skipped.
//! - Values must be unsigned decimals, optionally with an exponent as written
//!   by `%g` (`1e+04`). `1.0f` and `fixedpt_rconst(1.0)` are accepted because
//!   shipped LEETMOUSE configs spell values that way.
//! - Signed values (`fixedpt_rconst(-0.125)`) and identifiers are skipped.
//! - A value that starts with a digit or `.` but breaks the grammar is an
//!   error carrying the 1-based line number.
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Where LEETMOUSE keeps its config relative to a source checkout.
pub const DEFAULT_CONFIG_PATH: &str = "./driver/config.h";

#[derive(Debug, Error)]
pub enum DefinesError {
    #[error("config '{}' does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {name} has malformed value '{value}' ({reason})")]
    MalformedValue {
        line: usize,
        name: String,
        value: String,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Entry {
    value: f64,
    /// Source line; `None` for entries built in code.
    line: Option<usize>,
}

/// Numeric defines keyed by lower-cased name, in name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Defines {
    entries: BTreeMap<String, Entry>,
}

impl Defines {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.get(name).map(|e| e.value)
    }

    /// Line that supplied `name`, if it came from parsed text.
    pub fn line_of(&self, name: &str) -> Option<usize> {
        self.entries.get(name).and_then(|e| e.line)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e.value))
    }

    /// Insert or replace a value; returns the previous one.
    pub fn insert(&mut self, name: &str, value: f64) -> Option<f64> {
        self.put(name.to_ascii_lowercase(), value, None)
    }

    fn put(&mut self, key: String, value: f64, line: Option<usize>) -> Option<f64> {
        self.entries
            .insert(key, Entry { value, line })
            .map(|prev| prev.value)
    }
}

impl<'a> FromIterator<(&'a str, f64)> for Defines {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        let mut defines = Self::default();
        for (name, value) in iter {
            defines.insert(name, value);
        }
        defines
    }
}

/// Read and scan a config file.
///
/// A missing file is [`DefinesError::NotFound`]; a file without any numeric
/// define yields an empty map, not an error.
pub fn read_defines(path: impl AsRef<Path>) -> Result<Defines, DefinesError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            DefinesError::NotFound(path.to_path_buf())
        } else {
            DefinesError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let defines = parse_defines(&text)?;
    tracing::debug!(path = %path.display(), count = defines.len(), "read defines");
    Ok(defines)
}

/// Scan `text` for `#define NAME VALUE` lines.
pub fn parse_defines(text: &str) -> Result<Defines, DefinesError> {
    let mut defines = Defines::default();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let Some((name, token)) = split_define(raw) else {
            continue;
        };
        match classify(token) {
            Value::Number(value) => {
                if let Some(prev) = defines.put(name.to_ascii_lowercase(), value, Some(line)) {
                    tracing::debug!(line, name, prev, value, "define repeated; keeping last");
                }
            }
            Value::Other => {
                tracing::trace!(line, name, token, "skipping non-numeric or signed define");
            }
            Value::Malformed(reason) => {
                return Err(DefinesError::MalformedValue {
                    line,
                    name: name.to_string(),
                    value: token.to_string(),
                    reason,
                });
            }
        }
    }
    Ok(defines)
}

/// Split a directive line into `(NAME, first value token)`.
fn split_define(line: &str) -> Option<(&str, &str)> {
    let code = line.find("//").map_or(line, |i| &line[..i]);
    let rest = code.trim_start().strip_prefix("#define")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let mut tokens = rest.split_whitespace();
    let name = tokens.next()?;
    if !is_define_name(name) {
        return None;
    }
    let value = tokens.next()?;
    Some((name, value))
}

fn is_define_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_uppercase() || b == b'_')
}

#[derive(Debug, PartialEq)]
enum Value {
    Number(f64),
    Other,
    Malformed(&'static str),
}

fn classify(token: &str) -> Value {
    if let Some(inner) = token.strip_prefix("fixedpt_rconst(") {
        return match inner.strip_suffix(')') {
            Some(num) if is_signed(num) => Value::Other,
            Some(num) => parse_decimal(num),
            None => Value::Malformed("unterminated fixedpt_rconst"),
        };
    }
    if is_signed(token) {
        return Value::Other;
    }
    match token.as_bytes().first() {
        Some(b'0'..=b'9' | b'.') => parse_decimal(token),
        _ => Value::Other,
    }
}

/// Signed literals only appear on settings with no converted counterpart
/// (rotation angle), so they are skipped rather than rejected.
fn is_signed(token: &str) -> bool {
    token.starts_with(['+', '-'])
}

/// Unsigned decimal, optionally with a `%g`-style exponent (`1.5e+04`) and a
/// C float suffix.
fn parse_decimal(token: &str) -> Value {
    let literal = token.strip_suffix(['f', 'F']).unwrap_or(token);
    let (mantissa, exponent) = match literal.find(['e', 'E']) {
        Some(i) => (&literal[..i], Some(&literal[i + 1..])),
        None => (literal, None),
    };

    let mut dots = 0usize;
    let mut seen_digit = false;
    for c in mantissa.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' => dots += 1,
            _ => return Value::Malformed("unexpected character"),
        }
    }
    if dots > 1 {
        return Value::Malformed("more than one decimal point");
    }
    if !seen_digit {
        return Value::Malformed("no digits");
    }
    if let Some(exp) = exponent {
        let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Value::Malformed("malformed exponent");
        }
    }

    match literal.parse::<f64>() {
        Ok(v) if v.is_finite() => Value::Number(v),
        Ok(_) => Value::Malformed("out of range"),
        Err(_) => Value::Malformed("not a decimal number"),
    }
}
