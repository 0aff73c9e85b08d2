//! Command-line argument parsing and gradient configuration
//!
//! The CLI grammar is positional with a fixed prefix of optional flags:
//! `--reflection` (if present, first), then `--resolution <DPI>`, then
//! `--coeff <c>`, then exactly four positionals. Anything left over after
//! the last positional is a usage error.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ConfigError;

/// Default output resolution in dots per inch.
pub const DEFAULT_RESOLUTION_DPI: u32 = 400;

/// Default brightness cap coefficient (full white at the bright edge).
pub const DEFAULT_COEFFICIENT: f64 = 1.0;

/// Validated command-line options, still in physical units.
#[derive(Debug, Clone)]
pub struct CliOptions {
    pub output_path: PathBuf,
    pub width_inches: f64,
    pub height_inches: f64,
    pub resolution_dpi: u32,
    pub coefficient: f64,
    pub power: f64,
    pub reflection: bool,
}

/// Immutable per-run configuration in pixel units, handed to the fill
/// driver and the encoder.
#[derive(Debug, Clone, Copy)]
pub struct GradientConfig {
    pub width_pixels: u32,
    pub height_pixels: u32,
    pub resolution_dpi: u32,
    pub coefficient: f64,
    pub power: f64,
    pub reflection: bool,
}

impl GradientConfig {
    /// Derive pixel dimensions from physical dimensions and resolution.
    /// Each axis must round to at least one pixel.
    pub fn from_options(options: &CliOptions) -> Result<Self, ConfigError> {
        let width_pixels =
            pixels_for_axis("width", options.width_inches, options.resolution_dpi)?;
        let height_pixels =
            pixels_for_axis("height", options.height_inches, options.resolution_dpi)?;

        Ok(Self {
            width_pixels,
            height_pixels,
            resolution_dpi: options.resolution_dpi,
            coefficient: options.coefficient,
            power: options.power,
            reflection: options.reflection,
        })
    }
}

fn pixels_for_axis(axis: &'static str, inches: f64, dpi: u32) -> Result<u32, ConfigError> {
    let pixels = (inches * dpi as f64).round();
    if pixels >= 1.0 && pixels <= u32::MAX as f64 {
        Ok(pixels as u32)
    } else {
        Err(ConfigError::InvalidDimension { axis, inches, dpi })
    }
}

/// Parse one token as the expected numeric type, reporting the offending
/// literal on failure.
fn parse_numeric<T: FromStr>(literal: &str) -> Result<T, ConfigError> {
    literal
        .parse()
        .map_err(|_| ConfigError::InvalidArgument { literal: literal.to_string() })
}

/// Parse the argument list (program name already stripped).
///
/// Validation is fail-fast: each bad token is reported the moment it is
/// read, and no file is touched until everything validates.
pub fn parse_args(args: &[String]) -> Result<CliOptions, ConfigError> {
    if args.len() < 4 {
        return Err(ConfigError::Usage);
    }

    let mut index = 0;
    let mut reflection = false;
    let mut resolution_dpi = DEFAULT_RESOLUTION_DPI;
    let mut coefficient = DEFAULT_COEFFICIENT;

    if args[index] == "--reflection" {
        reflection = true;
        index += 1;
    }
    if args.get(index).is_some_and(|a| a.as_str() == "--resolution") {
        index += 1;
        let literal = args.get(index).ok_or(ConfigError::Usage)?;
        resolution_dpi = parse_numeric(literal)?;
        index += 1;
    }
    if args.get(index).is_some_and(|a| a.as_str() == "--coeff") {
        index += 1;
        let literal = args.get(index).ok_or(ConfigError::Usage)?;
        coefficient = parse_numeric(literal)?;
        if !(coefficient > 0.0 && coefficient <= 1.0) {
            return Err(ConfigError::CoefficientOutOfRange { value: coefficient });
        }
        index += 1;
    }

    let output_path = PathBuf::from(args.get(index).ok_or(ConfigError::Usage)?);
    index += 1;
    let width_inches = parse_numeric(args.get(index).ok_or(ConfigError::Usage)?)?;
    index += 1;
    let height_inches = parse_numeric(args.get(index).ok_or(ConfigError::Usage)?)?;
    index += 1;
    let power = parse_numeric(args.get(index).ok_or(ConfigError::Usage)?)?;
    index += 1;

    if index < args.len() {
        return Err(ConfigError::Usage);
    }

    Ok(CliOptions {
        output_path,
        width_inches,
        height_inches,
        resolution_dpi,
        coefficient,
        power,
        reflection,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_parse_minimal_arguments() {
        let options = parse_args(&args(&["out.bmp", "4", "1", "1.0"])).unwrap();
        assert_eq!(options.output_path, PathBuf::from("out.bmp"));
        assert_eq!(options.width_inches, 4.0);
        assert_eq!(options.height_inches, 1.0);
        assert_eq!(options.power, 1.0);
        assert_eq!(options.resolution_dpi, DEFAULT_RESOLUTION_DPI);
        assert_eq!(options.coefficient, DEFAULT_COEFFICIENT);
        assert!(!options.reflection);
    }

    #[test]
    fn test_parse_all_flags() {
        let options = parse_args(&args(&[
            "--reflection",
            "--resolution",
            "100",
            "--coeff",
            "0.5",
            "out.bmp",
            "2",
            "1",
            "2.0",
        ]))
        .unwrap();
        assert!(options.reflection);
        assert_eq!(options.resolution_dpi, 100);
        assert_eq!(options.coefficient, 0.5);
        assert_eq!(options.power, 2.0);
    }

    #[test]
    fn test_too_few_arguments_is_usage_error() {
        assert!(matches!(
            parse_args(&args(&["out.bmp", "4", "1"])),
            Err(ConfigError::Usage)
        ));
    }

    #[test]
    fn test_missing_power_after_flags_is_usage_error() {
        // Four tokens, but the flags consume two of them, leaving the
        // trailing positional slots empty.
        assert!(matches!(
            parse_args(&args(&["--resolution", "100", "out.bmp", "4"])),
            Err(ConfigError::Usage)
        ));
    }

    #[test]
    fn test_trailing_arguments_rejected() {
        assert!(matches!(
            parse_args(&args(&["out.bmp", "4", "1", "1.0", "extra"])),
            Err(ConfigError::Usage)
        ));
    }

    #[test]
    fn test_malformed_resolution_reports_literal() {
        let err = parse_args(&args(&["--resolution", "abc", "out.bmp", "4", "1", "1.0"]))
            .unwrap_err();
        match err {
            ConfigError::InvalidArgument { literal } => assert_eq!(literal, "abc"),
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_width_reports_literal() {
        let err = parse_args(&args(&["out.bmp", "wide", "1", "1.0"])).unwrap_err();
        match err {
            ConfigError::InvalidArgument { literal } => assert_eq!(literal, "wide"),
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_coefficient_above_one_rejected() {
        let err = parse_args(&args(&["--coeff", "1.5", "out.bmp", "4", "1", "1.0"]))
            .unwrap_err();
        match err {
            ConfigError::CoefficientOutOfRange { value } => assert_eq!(value, 1.5),
            other => panic!("expected CoefficientOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_coefficient_zero_or_negative_rejected() {
        for literal in ["0", "-0.2"] {
            let result =
                parse_args(&args(&["--coeff", literal, "out.bmp", "4", "1", "1.0"]));
            assert!(
                matches!(result, Err(ConfigError::CoefficientOutOfRange { .. })),
                "coefficient {literal} should be rejected"
            );
        }
    }

    #[test]
    fn test_coefficient_of_exactly_one_accepted() {
        let options =
            parse_args(&args(&["--coeff", "1.0", "out.bmp", "4", "1", "1.0"])).unwrap();
        assert_eq!(options.coefficient, 1.0);
    }

    #[test]
    fn test_pixel_derivation_rounds() {
        let options =
            parse_args(&args(&["--resolution", "100", "out.bmp", "0.01", "0.01", "1.0"]))
                .unwrap();
        let config = GradientConfig::from_options(&options).unwrap();
        assert_eq!(config.width_pixels, 1);
        assert_eq!(config.height_pixels, 1);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let options = parse_args(&args(&["out.bmp", "0", "1", "1.0"])).unwrap();
        let err = GradientConfig::from_options(&options).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDimension { axis: "width", .. }));
    }

    #[test]
    fn test_negative_dimension_rejected() {
        let options = parse_args(&args(&["out.bmp", "4", "-1", "1.0"])).unwrap();
        let err = GradientConfig::from_options(&options).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDimension { axis: "height", .. }));
    }
}
