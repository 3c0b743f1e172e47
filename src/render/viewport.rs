//! Viewport size for rendering.
//!
//! A [`ViewportSize`] is the fixed width and height of the canvas in pixels.
//! It is set when the canvas is created and never changes afterwards;
//! `(0, 0)` is the top-left of the window's drawing area.
//!
//! # Examples
//!
//! ```
//! use graphics_workshop::render::ViewportSize;
//!
//! let vp = ViewportSize::new(500, 400);
//! assert_eq!(vp.width(), 500);
//! assert_eq!(vp.aspect_ratio(), 1.25);
//! ```

use crate::render::backend::SurfaceSize;

/// Width and height of the canvas in pixels.
#[derive(Clone, Eq, PartialEq, Copy, Hash)]
pub struct ViewportSize {
    width: u32,
    height: u32,
}

impl std::fmt::Debug for ViewportSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ViewportSize {{ width: {}, height: {} }}", self.width, self.height)
    }
}

impl ViewportSize {
    /// Creates a new [`ViewportSize`].
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the aspect ratio (`width / height`) as `f32`.
    ///
    /// Returns `0.0` if `height` is `0` to avoid division by zero.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            0.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// Converts this viewport to a [`SurfaceSize`].
    pub fn as_size(&self) -> SurfaceSize {
        SurfaceSize {
            width: self.width,
            height: self.height,
        }
    }
}

impl From<ViewportSize> for SurfaceSize {
    fn from(vp: ViewportSize) -> Self {
        vp.as_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_height_has_zero_aspect_ratio() {
        assert_eq!(ViewportSize::new(500, 0).aspect_ratio(), 0.0);
    }

    #[test]
    fn converts_to_surface_size() {
        let size: SurfaceSize = ViewportSize::new(500, 400).into();
        assert_eq!(size, SurfaceSize { width: 500, height: 400 });
    }
}
