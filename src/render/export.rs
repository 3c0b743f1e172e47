//! PNG export of rendered snapshots.

use crate::errors::WorkshopError;
use crate::render::backend::RgbaImage;
use std::io::Write;

/// Flattens an image into tightly packed straight-alpha RGBA8 rows.
pub fn to_rgba8(img: &RgbaImage) -> Vec<u8> {
    let mut out = Vec::with_capacity((img.width * img.height * 4) as usize);
    for y in 0..img.height {
        for x in 0..img.width {
            // in range by construction
            out.extend_from_slice(&img.pixel(x, y).unwrap_or_default());
        }
    }
    out
}

/// Encodes `img` as an 8-bit RGBA PNG into `writer`.
pub fn write_png<W: Write>(img: &RgbaImage, writer: W) -> Result<(), WorkshopError> {
    let mut encoder = png::Encoder::new(writer, img.width, img.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&to_rgba8(img))?;
    png_writer.finish()?;

    log::debug!("Encoded {}x{} snapshot as PNG", img.width, img.height);
    Ok(())
}
