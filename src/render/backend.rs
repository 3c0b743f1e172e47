use crate::render::RenderList;
use anyhow::{ensure, Result};
use std::any::Any;

/// Size of a surface in pixels. It's a simple struct to hold width and height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

/// Pixel layout of an [`RgbaImage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    /// Native-endian 32-bit ARGB with premultiplied alpha (cairo's `ARgb32`).
    PreMulArgb32,
    /// Straight alpha, bytes in R, G, B, A order.
    Rgba8,
}

/// CPU copy of a rendered surface.
#[derive(Clone)]
pub struct RgbaImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: u32,
    pub format: PixelFormat,
}

impl RgbaImage {
    pub fn from_raw(pixels: Vec<u8>, width: u32, height: u32, stride: u32, format: PixelFormat) -> Result<Self> {
        ensure!(stride >= width * 4, "stride {stride} too small for width {width}");
        ensure!(
            pixels.len() >= (height as usize) * (stride as usize),
            "pixel buffer too small for image dimensions"
        );

        Ok(Self {
            pixels,
            width,
            height,
            stride,
            format,
        })
    }

    /// Returns the `[r, g, b, a]` value of one pixel with straight alpha.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y * self.stride + x * 4) as usize;
        let px: [u8; 4] = self.pixels.get(offset..offset + 4)?.try_into().ok()?;

        Some(match self.format {
            PixelFormat::Rgba8 => px,
            PixelFormat::PreMulArgb32 => unpremultiply(u32::from_ne_bytes(px)),
        })
    }
}

/// Splits a premultiplied `0xAARRGGBB` word into straight `[r, g, b, a]`.
fn unpremultiply(argb: u32) -> [u8; 4] {
    let a = (argb >> 24) as u8;
    if a == 0 {
        return [0, 0, 0, 0];
    }
    let scale = |c: u32| ((c & 0xff) * 255 + a as u32 / 2) / a as u32;
    [
        scale(argb >> 16) as u8,
        scale(argb >> 8) as u8,
        scale(argb) as u8,
        a,
    ]
}

impl std::fmt::Debug for RgbaImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RgbaImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("format", &self.format)
            .field("len", &self.pixels.len())
            .finish()
    }
}

/// Type-erased surface so hosts can hold it without generics.
pub trait ErasedSurface: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn size(&self) -> SurfaceSize;
    /// Number of frames rendered onto this surface.
    fn frame_id(&self) -> u64;
}

/// Core backend interface. Calls occur on the host's dispatch thread.
pub trait RenderBackend {
    /// Name of the backend, used in log output.
    fn name(&self) -> &str;

    /// Create a new surface with the given size.
    fn create_surface(&self, size: SurfaceSize) -> Result<Box<dyn ErasedSurface>>;

    /// Paint the render list onto the given surface, in order.
    fn render(&mut self, list: &RenderList, surface: &mut dyn ErasedSurface) -> Result<()>;

    /// Copy the current contents of the surface to the CPU.
    fn snapshot(&mut self, surface: &mut dyn ErasedSurface) -> Result<RgbaImage>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_rejects_short_buffer() {
        assert!(RgbaImage::from_raw(vec![0; 15], 2, 2, 8, PixelFormat::Rgba8).is_err());
        assert!(RgbaImage::from_raw(vec![0; 16], 2, 2, 4, PixelFormat::Rgba8).is_err());
        assert!(RgbaImage::from_raw(vec![0; 16], 2, 2, 8, PixelFormat::Rgba8).is_ok());
    }

    #[test]
    fn pixel_reads_premultiplied_argb() {
        // half transparent pure red, premultiplied
        let word: u32 = 0x80_80_00_00;
        let img = RgbaImage::from_raw(word.to_ne_bytes().to_vec(), 1, 1, 4, PixelFormat::PreMulArgb32).unwrap();
        assert_eq!(img.pixel(0, 0), Some([255, 0, 0, 0x80]));
        assert_eq!(img.pixel(1, 0), None);
    }
}
