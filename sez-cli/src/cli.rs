//! Argument handling and output for the converter

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use sez_core::ObserverTarget;
use tracing::debug;

pub const USAGE: &str = "Usage: ecef_to_sez o_x_km o_y_km o_z_km x_km y_km z_km";

/// Convert an ECEF point to South-East-Zenith relative to an ECEF origin
#[derive(Parser, Debug)]
#[command(name = "ecef_to_sez")]
#[command(author, version)]
pub struct Cli {
    /// Origin then target in ECEF kilometers: o_x_km o_y_km o_z_km x_km y_km z_km
    #[arg(value_name = "KM", allow_negative_numbers = true)]
    pub coords: Vec<String>,

    /// Also print the origin's height above the ellipsoid (km) on a fourth line
    #[arg(long)]
    pub hae: bool,

    /// Fail if the origin latitude did not converge
    #[arg(long)]
    pub strict: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Run one conversion and write the result to `out`
///
/// A wrong number of coordinates prints the usage line and succeeds
/// without computing anything. The count is checked before any value is
/// parsed.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    if cli.coords.len() != ObserverTarget::VALUE_COUNT {
        debug!(found = cli.coords.len(), "Wrong number of coordinates");
        writeln!(out, "{USAGE}")?;
        return Ok(());
    }

    let values = cli
        .coords
        .iter()
        .map(|raw| {
            raw.parse::<f64>()
                .with_context(|| format!("Invalid coordinate '{raw}'"))
        })
        .collect::<Result<Vec<f64>>>()?;

    let pair = ObserverTarget::try_from(values.as_slice())?;
    let solution = pair.solve();

    if cli.strict {
        solution
            .geodetic
            .ensure_converged()
            .context("Origin geodetic latitude is unreliable")?;
    }

    writeln!(out, "{:?}", solution.sez.s)?;
    writeln!(out, "{:?}", solution.sez.e)?;
    writeln!(out, "{:?}", solution.sez.z)?;

    if cli.hae {
        writeln!(out, "{:?}", solution.geodetic.hae)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("ecef_to_sez").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        run(&cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    fn parse_lines(output: &str) -> Vec<f64> {
        output.lines().map(|l| l.parse().unwrap()).collect()
    }

    #[test]
    fn test_reference_case() {
        let output = run_args(&["6378.1363", "0", "0", "6379.1363", "0", "0"]).unwrap();
        let values = parse_lines(&output);

        assert_eq!(values.len(), 3);
        assert!(values[0].abs() < 1e-3);
        assert!(values[1].abs() < 1e-3);
        assert!((values[2] - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_negative_coordinates() {
        let output = run_args(&["-6378.1363", "0", "0", "-6379.1363", "0", "0"]).unwrap();
        let values = parse_lines(&output);

        assert_eq!(values.len(), 3);
        assert!((values[2] - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_wrong_count_prints_usage() {
        for args in [
            vec![],
            vec!["1", "2", "3", "4", "5"],
            vec!["1", "2", "3", "4", "5", "6", "7"],
        ] {
            let output = run_args(&args).unwrap();
            assert_eq!(output, format!("{USAGE}\n"));
        }
    }

    #[test]
    fn test_hae_line() {
        let output = run_args(&["--hae", "6380.1363", "0", "0", "6380.1363", "0", "0"]).unwrap();
        let values = parse_lines(&output);

        assert_eq!(values.len(), 4);
        assert!(values[..3].iter().all(|v| v.abs() < 1e-12));
        assert!((values[3] - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_prints_as_float() {
        let output = run_args(&["6378.1363", "0", "0", "6378.1363", "0", "0"]).unwrap();
        assert_eq!(output, "0.0\n0.0\n0.0\n");
    }

    #[test]
    fn test_strict_rejects_degenerate_origin() {
        let result = run_args(&["--strict", "0", "0", "0", "1", "1", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_numeric_rejected() {
        let err = run_args(&["1", "2", "x", "4", "5", "6"]).unwrap_err();
        assert!(err.to_string().contains("Invalid coordinate 'x'"));
    }

    #[test]
    fn test_count_checked_before_parsing() {
        let output = run_args(&["a", "b", "c"]).unwrap();
        assert_eq!(output, format!("{USAGE}\n"));

        let output = run_args(&["1", "2", "3", "4", "5", "6", "seven"]).unwrap();
        assert_eq!(output, format!("{USAGE}\n"));
    }
}
