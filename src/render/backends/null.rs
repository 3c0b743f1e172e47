use crate::render::backend::{ErasedSurface, PixelFormat, RenderBackend, RgbaImage, SurfaceSize};
use crate::render::RenderList;
use anyhow::{anyhow, Result};
use std::any::Any;

/// Null backend renderer that does not perform any rendering.
///
/// Each call to [`render`](RenderBackend::render) bumps the surface's frame id and
/// remembers how many items the list carried, which is enough to observe the
/// host loop without a display.
pub struct NullBackend;

impl NullBackend {
    /// Creates a new instance of the null backend.
    pub fn new() -> Result<Self> {
        Ok(Self)
    }
}

impl RenderBackend for NullBackend {
    fn name(&self) -> &str {
        "NullBackend"
    }

    fn create_surface(&self, size: SurfaceSize) -> Result<Box<dyn ErasedSurface>> {
        Ok(Box::new(NullSurface::new(size)?))
    }

    fn render(&mut self, list: &RenderList, surface: &mut dyn ErasedSurface) -> Result<()> {
        let s = surface
            .as_any_mut()
            .downcast_mut::<NullSurface>()
            .ok_or_else(|| anyhow!("NullBackend used with non-Null surface"))?;

        s.last_item_count = list.len();
        s.frame_id = s.frame_id.wrapping_add(1);
        Ok(())
    }

    fn snapshot(&mut self, surface: &mut dyn ErasedSurface) -> Result<RgbaImage> {
        let s = surface
            .as_any_mut()
            .downcast_mut::<NullSurface>()
            .ok_or_else(|| anyhow!("NullBackend used with non-Null surface"))?;

        let pixels = vec![0xffu8; (s.size.width * s.size.height * 4) as usize];
        RgbaImage::from_raw(pixels, s.size.width, s.size.height, s.size.width * 4, PixelFormat::Rgba8)
    }
}

pub struct NullSurface {
    /// Size of the surface in pixels.
    pub size: SurfaceSize,
    /// Frame ID for the surface, used to track rendering frames.
    frame_id: u64,
    last_item_count: usize,
}

impl NullSurface {
    pub fn new(size: SurfaceSize) -> Result<Self> {
        Ok(Self {
            size,
            frame_id: 0,
            last_item_count: 0,
        })
    }

    /// Number of display items in the most recently rendered list.
    pub fn last_item_count(&self) -> usize {
        self.last_item_count
    }
}

impl ErasedSurface for NullSurface {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
    fn size(&self) -> SurfaceSize {
        self.size
    }
    fn frame_id(&self) -> u64 {
        self.frame_id
    }
}
