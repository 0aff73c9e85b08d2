//! Uncompressed 24-bit BMP writer with resolution metadata
//!
//! Exactly the profile this tool emits: `BM` file header, 40-byte
//! BITMAPINFOHEADER, BI_RGB pixel data stored bottom-up in BGR order with
//! rows padded to four bytes, and the horizontal/vertical resolution fields
//! stamped with the run's DPI.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use image::RgbImage;

const FILE_HEADER_SIZE: u32 = 14;
const INFO_HEADER_SIZE: u32 = 40;
const BIT_DEPTH: u16 = 24;
/// DPI to pels-per-meter conversion factor.
const INCHES_PER_METER: f64 = 39.370_078_740_157_48;

/// Serialize the raster to `path` as a 24-bit uncompressed BMP.
pub fn write_bmp(path: &Path, image: &RgbImage, resolution_dpi: u32) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    encode(&mut writer, image, resolution_dpi)?;
    writer.flush()
}

fn encode<W: Write>(writer: &mut W, image: &RgbImage, resolution_dpi: u32) -> io::Result<()> {
    let width = image.width();
    let height = image.height();
    let row_bytes = width as usize * 3;
    let padding = (4 - row_bytes % 4) % 4;
    let pixel_array_size = (row_bytes + padding) as u32 * height;
    let data_offset = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
    let pels_per_meter = (resolution_dpi as f64 * INCHES_PER_METER).round() as i32;

    // BITMAPFILEHEADER
    writer.write_all(b"BM")?;
    writer.write_all(&(data_offset + pixel_array_size).to_le_bytes())?;
    writer.write_all(&0u32.to_le_bytes())?; // reserved
    writer.write_all(&data_offset.to_le_bytes())?;

    // BITMAPINFOHEADER
    writer.write_all(&INFO_HEADER_SIZE.to_le_bytes())?;
    writer.write_all(&(width as i32).to_le_bytes())?;
    writer.write_all(&(height as i32).to_le_bytes())?;
    writer.write_all(&1u16.to_le_bytes())?; // color planes
    writer.write_all(&BIT_DEPTH.to_le_bytes())?;
    writer.write_all(&0u32.to_le_bytes())?; // BI_RGB
    writer.write_all(&pixel_array_size.to_le_bytes())?;
    writer.write_all(&pels_per_meter.to_le_bytes())?;
    writer.write_all(&pels_per_meter.to_le_bytes())?;
    writer.write_all(&0u32.to_le_bytes())?; // palette size
    writer.write_all(&0u32.to_le_bytes())?; // important colors

    // Pixel array, bottom row first.
    let pad = [0u8; 3];
    let buffer: &[u8] = image;
    for row in buffer.chunks_exact(row_bytes).rev() {
        for pixel in row.chunks_exact(3) {
            writer.write_all(&[pixel[2], pixel[1], pixel[0]])?;
        }
        writer.write_all(&pad[..padding])?;
    }
    Ok(())
}
