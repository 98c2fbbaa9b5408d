//! Command dispatch: convert a LEETMOUSE config, print parameters, or verify.

use std::fs;
use std::process::ExitCode;

use eyre::{Result, WrapErr};
use leet2yeet_core::curve::{GainSample, gain_table};
use leet2yeet_core::{
    CurveKind, Divergence, SWEEP, SourceParameters, SweepReport, TargetParameters, convert,
    load_source, render, validate,
};
use serde_json::json;

use crate::cli::Cli;

/// Exit status when the converted curve departs from the LEETMOUSE one.
pub const DIVERGED_EXIT: u8 = 4;

/// Upper magnitude of the `--curve` table.
pub const CURVE_MAX: f64 = 1000.0;

pub fn run(cli: &Cli) -> Result<ExitCode> {
    if cli.test {
        return run_test(cli);
    }

    let path = cli.config_path();
    let source = load_source(&path)?;
    let target = convert(&source)?;
    tracing::info!(path = %path.display(), "converted");

    if cli.params {
        if cli.json {
            println!("{}", json!({ "source": source, "target": target }));
        } else {
            print!("{}", params_text(&target));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let text = render(&target)?;
    if let Some(out) = &cli.output {
        fs::write(out, &text).wrap_err_with(|| format!("failed to write '{}'", out.display()))?;
        tracing::info!(path = %out.display(), "wrote YeetMouse config");
    }
    if cli.json {
        println!(
            "{}",
            json!({ "source": source, "target": target, "config": text })
        );
    } else if cli.output.is_none() {
        print!("{text}");
    }
    Ok(ExitCode::SUCCESS)
}

fn run_test(cli: &Cli) -> Result<ExitCode> {
    let source = match &cli.config {
        Some(path) => load_source(path)?,
        None => SourceParameters::REFERENCE,
    };
    let target = convert(&source)?;
    let outcome = validate(&source, &target);
    let table = cli
        .curve
        .map(|rows| gain_table(&source, &target, usize::from(rows), CURVE_MAX));

    if cli.json {
        let mut obj = match &outcome {
            Ok(report) => json!({ "status": "pass", "report": report }),
            Err(div) => json!({ "status": "diverged", "divergence": div }),
        };
        obj["source"] = json!(source);
        obj["target"] = json!(target);
        if let Some(rows) = &table {
            obj["curve"] = json!(rows);
        }
        println!("{obj}");
    } else {
        match &outcome {
            Ok(report) => println!("{}", pass_line(report)),
            Err(Divergence { magnitude, ratio }) => {
                println!("CONVERSION ERROR FOUND! n={magnitude} : ratio={ratio:.3}");
            }
        }
        if let Some(rows) = &table {
            print!("{}", curve_text(rows));
        }
    }

    match outcome {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(div) => {
            tracing::warn!(magnitude = div.magnitude, ratio = div.ratio, "validation failed");
            Ok(ExitCode::from(DIVERGED_EXIT))
        }
    }
}

fn pass_line(report: &SweepReport) -> String {
    format!(
        "Conversion verified: ratio 1.000 over magnitudes {}..={} (max deviation {:.2e})",
        SWEEP.start(),
        SWEEP.end(),
        report.max_deviation
    )
}

fn params_text(p: &TargetParameters) -> String {
    let mut out = String::new();
    for (name, value) in p.fields() {
        out.push_str(&format!("{name} = {value}\n"));
    }
    out.push_str(&format!("smoothing = {}\n", p.smoothing));
    out
}

fn curve_text(rows: &[GainSample]) -> String {
    let mut out = format!(
        "{:>10} {:>12} {:>12}\n",
        "magnitude",
        CurveKind::Source.name(),
        CurveKind::Target.name()
    );
    for r in rows {
        out.push_str(&format!(
            "{:>10.1} {:>12.6} {:>12.6}\n",
            r.magnitude, r.source, r.target
        ));
    }
    out
}
