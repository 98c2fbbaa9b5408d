//! CLI argument definitions and shared statics.

use clap::{ArgAction, Parser};
use leet2yeet_config::DEFAULT_CONFIG_PATH;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Whether the user asked for JSON output (controls structured error output).
pub static JSON_MODE: OnceLock<bool> = OnceLock::new();

#[derive(Parser, Debug)]
#[command(
    name = "leet2yeet",
    version,
    about = "LEETMOUSE to YeetMouse config converter"
)]
pub struct Cli {
    /// Path to LEETMOUSE config file [default: ./driver/config.h]
    #[arg(short, long, value_name = "CFG")]
    pub config: Option<PathBuf>,

    /// Only print converted parameters instead of generating YeetMouse config.h
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub params: bool,

    /// Verify the conversion numerically instead of converting
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "params",
        long_help = "Verify the conversion numerically instead of converting.\n\nBoth curves are evaluated for every input magnitude 1..=9999 and the output ratio must round to 1.000. Without --config the built-in reference parameters are checked; with --config the file's parameters are."
    )]
    pub test: bool,

    /// With --test: also print an N-row gain table (magnitudes 1..=1000)
    #[arg(
        long,
        value_name = "N",
        requires = "test",
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub curve: Option<u16>,

    /// Write the generated config.h to FILE instead of stdout
    #[arg(short, long, value_name = "FILE", conflicts_with_all = ["params", "test"])]
    pub output: Option<PathBuf>,

    /// Print results and errors as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console log level (error|warn|info|debug|trace); RUST_LOG takes precedence
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Also write JSON-lines logs to FILE
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// `--config`, or the conventional driver checkout location.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_driver_checkout_path() {
        let cli = Cli::try_parse_from(["leet2yeet"]).unwrap();
        assert_eq!(cli.config_path(), PathBuf::from("./driver/config.h"));
        assert!(!cli.params && !cli.test && !cli.json);
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn short_flags_match_long_ones() {
        let cli = Cli::try_parse_from(["leet2yeet", "-c", "cfg.h", "-p"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("cfg.h")));
        assert!(cli.params);
        let cli = Cli::try_parse_from(["leet2yeet", "-t"]).unwrap();
        assert!(cli.test);
    }

    #[test]
    fn curve_requires_test_and_test_excludes_params() {
        assert!(Cli::try_parse_from(["leet2yeet", "--curve", "5"]).is_err());
        assert!(Cli::try_parse_from(["leet2yeet", "-t", "-p"]).is_err());
        assert!(Cli::try_parse_from(["leet2yeet", "-t", "-o", "out.h"]).is_err());
    }

    #[test]
    fn curve_rows_are_bounded() {
        let cli = Cli::try_parse_from(["leet2yeet", "-t", "--curve", "65535"]).unwrap();
        assert_eq!(cli.curve, Some(u16::MAX));
        for rows in ["0", "65536", "18446744073709551615"] {
            assert!(
                Cli::try_parse_from(["leet2yeet", "-t", "--curve", rows]).is_err(),
                "--curve {rows} accepted"
            );
        }
    }
}
