//! Brightness function and raster fill driver
//!
//! Brightness is computed once per column and is vertically constant, so the
//! fill is a per-column lookup applied to every row. Rows carry no data
//! dependency on each other, which keeps the row fill trivially
//! parallelizable without changing output.

use image::RgbImage;
use rayon::prelude::*;

use crate::config::GradientConfig;

/// Peak channel value of the 8-bit gray spectrum.
pub const MAX_BRIGHTNESS: f64 = 255.0;

/// Brightness of the gradient at a normalized horizontal position.
///
/// `fractional_position` is the distance from the bright (left) edge toward
/// the point of maximum travel: the full width without reflection, the
/// half-width with it. The curve is maximal at 0 and decays toward 0 as the
/// position approaches 1, unless `power` is negative, which inverts it.
/// Clamping matters only for negative powers; with `coefficient` in (0, 1]
/// and `power >= 0` the formula already lands in range.
pub fn brightness_at_position(fractional_position: f64, coefficient: f64, power: f64) -> u8 {
    let value =
        (coefficient * (1.0 - fractional_position).powf(power) * MAX_BRIGHTNESS).round();
    value.clamp(0.0, MAX_BRIGHTNESS) as u8
}

/// Number of columns the brightness function is evaluated over.
///
/// Without reflection this is the full width; with it, the half-width
/// rounded up so an odd width scans its center column.
pub fn max_scan_position(width: u32, reflection: bool) -> u32 {
    if reflection {
        width / 2 + width % 2
    } else {
        width
    }
}

/// Per-column brightness lookup for the whole raster width.
///
/// Column `i` of the scanned range gets `brightness(i / max_position)`; in
/// reflection mode the value is mirrored to column `width - 1 - i`. With an
/// odd width the center column is written twice with the same value. The
/// scan never reaches `fractional_position = 1.0`: the rightmost
/// non-reflection column sits at `(width - 1) / width`, so the darkest
/// theoretical endpoint is never rendered. That boundary is observable in
/// the output and is kept as is.
pub fn column_brightness(config: &GradientConfig) -> Vec<u8> {
    let width = config.width_pixels as usize;
    let max_position = max_scan_position(config.width_pixels, config.reflection) as usize;
    let mut columns = vec![0u8; width];

    for i in 0..max_position {
        let fractional_position = i as f64 / max_position as f64;
        let brightness =
            brightness_at_position(fractional_position, config.coefficient, config.power);
        columns[i] = brightness;
        if config.reflection {
            columns[width - 1 - i] = brightness;
        }
    }
    columns
}

/// Paint every pixel of the raster with its column's gray level.
///
/// The raster must be sized `width_pixels x height_pixels`. The gray
/// spectrum requires red = green = blue. Always succeeds; all failure is
/// upstream validation.
pub fn fill(image: &mut RgbImage, config: &GradientConfig) {
    debug_assert_eq!(image.width(), config.width_pixels);
    debug_assert_eq!(image.height(), config.height_pixels);

    let columns = column_brightness(config);
    let row_stride = columns.len() * 3;
    if row_stride == 0 {
        return;
    }

    image.par_chunks_exact_mut(row_stride).for_each(|row| {
        for (pixel, &brightness) in row.chunks_exact_mut(3).zip(&columns) {
            pixel.fill(brightness);
        }
    });
}
