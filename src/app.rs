//! Application orchestration
//!
//! Ties the validated options to the fill driver, the BMP writer, and the
//! generation log.

use image::RgbImage;
use tracing::info;

use crate::bmp;
use crate::config::{CliOptions, GradientConfig};
use crate::error::{Error, Result};
use crate::generation_log::{GenerationLogger, GenerationRecord};
use crate::gradient;

/// Generate the gradient raster and write it to the output file.
///
/// The raster has a single writer (the fill driver) and is handed to the
/// encoder only after every pixel is written.
pub fn run(options: &CliOptions, logger: &GenerationLogger) -> Result<()> {
    let config = GradientConfig::from_options(options)?;

    info!("Generating gradient");
    info!(
        "  Width {} inches ({} pixels); Height {} inches ({} pixels); Resolution {} DPI",
        options.width_inches,
        config.width_pixels,
        options.height_inches,
        config.height_pixels,
        config.resolution_dpi,
    );
    info!(
        "  Brightness coefficient {}; power {}",
        config.coefficient, config.power
    );
    info!(
        "  Reflection mode: {}active",
        if config.reflection { "" } else { "NOT " }
    );

    let mut image = RgbImage::new(config.width_pixels, config.height_pixels);
    gradient::fill(&mut image, &config);

    bmp::write_bmp(&options.output_path, &image, config.resolution_dpi).map_err(|error| {
        Error::FileSystem {
            operation: "write bitmap",
            path: options.output_path.display().to_string(),
            error,
        }
    })?;

    logger.log_generation(GenerationRecord::new(options, &config));

    info!("Gradient generation successful.");
    Ok(())
}
