//! Grayscale gradient BMP generator
//!
//! Computes a per-column brightness value from a falloff curve
//! (`coefficient * (1 - position)^power * 255`), paints every row of that
//! column with the resulting gray level (optionally mirrored across the
//! vertical centerline), and serializes the raster as an uncompressed
//! 24-bit BMP with resolution metadata.

pub mod app;
pub mod bmp;
pub mod config;
pub mod error;
pub mod generation_log;
pub mod gradient;

pub use config::{parse_args, CliOptions, GradientConfig};
pub use error::{ConfigError, Error, Result};
