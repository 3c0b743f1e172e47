use crate::render::backend::{ErasedSurface, PixelFormat, RenderBackend, RgbaImage, SurfaceSize};
use crate::render::{Color, DisplayItem, Paint, Point, RenderList};
use anyhow::{anyhow, Result};
use std::any::Any;
use std::f64::consts::PI;

/// Cairo backend for rendering using cairo graphics library.
pub struct CairoBackend;

impl CairoBackend {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for CairoBackend {
    fn default() -> Self {
        Self::new()
    }
}

// Pixel-aligned one pixel pens need a half pixel offset.
const PEN_OFFSET: f64 = 0.5;

fn set_color(cr: &cairo::Context, color: &Color) {
    cr.set_source_rgba(color.r as f64, color.g as f64, color.b as f64, color.a as f64);
}

fn finish(cr: &cairo::Context, paint: Paint) -> Result<()> {
    match paint {
        Paint::Fill => cr.fill()?,
        Paint::Stroke => cr.stroke()?,
    }
    Ok(())
}

fn pen_offset(paint: Paint) -> f64 {
    match paint {
        Paint::Fill => 0.0,
        Paint::Stroke => PEN_OFFSET,
    }
}

fn trace_polygon(cr: &cairo::Context, points: &[Point], offset: f64) {
    cr.new_path();
    for (idx, p) in points.iter().enumerate() {
        if idx == 0 {
            cr.move_to(p.x as f64 + offset, p.y as f64 + offset);
        } else {
            cr.line_to(p.x as f64 + offset, p.y as f64 + offset);
        }
    }
    cr.close_path();
}

fn paint_item(cr: &cairo::Context, item: &DisplayItem) -> Result<()> {
    match item {
        DisplayItem::Clear { color } => {
            cr.set_operator(cairo::Operator::Source);
            set_color(cr, color);
            cr.paint()?;
            cr.set_operator(cairo::Operator::Over);
        }
        DisplayItem::Rect { x, y, w, h, paint, color } => {
            let o = pen_offset(*paint);
            set_color(cr, color);
            cr.rectangle(*x as f64 + o, *y as f64 + o, *w as f64, *h as f64);
            finish(cr, *paint)?;
        }
        DisplayItem::Ellipse { x, y, w, h, paint, color } => {
            let o = pen_offset(*paint);
            let (rx, ry) = (*w as f64 / 2.0, *h as f64 / 2.0);
            if rx <= 0.0 || ry <= 0.0 {
                return Ok(());
            }
            set_color(cr, color);
            cr.save()?;
            cr.translate(*x as f64 + rx + o, *y as f64 + ry + o);
            cr.scale(rx, ry);
            cr.new_path();
            cr.arc(0.0, 0.0, 1.0, 0.0, 2.0 * PI);
            cr.restore()?;
            finish(cr, *paint)?;
        }
        DisplayItem::Line { from, to, color } => {
            set_color(cr, color);
            cr.new_path();
            cr.move_to(from.x as f64 + PEN_OFFSET, from.y as f64 + PEN_OFFSET);
            cr.line_to(to.x as f64 + PEN_OFFSET, to.y as f64 + PEN_OFFSET);
            cr.stroke()?;
        }
        DisplayItem::Polygon { points, paint, color } => {
            if points.len() < 2 {
                return Ok(());
            }
            set_color(cr, color);
            trace_polygon(cr, points, pen_offset(*paint));
            finish(cr, *paint)?;
        }
        DisplayItem::TextRun { x, y, text, size, color } => {
            set_color(cr, color);
            cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
            cr.set_font_size(*size as f64);
            cr.move_to(*x as f64, *y as f64);
            cr.show_text(text)?;
        }
    }
    Ok(())
}

impl RenderBackend for CairoBackend {
    fn name(&self) -> &str {
        "CairoBackend"
    }

    fn create_surface(&self, size: SurfaceSize) -> Result<Box<dyn ErasedSurface>> {
        Ok(Box::new(CairoSurface::new(size)?))
    }

    /// Paints every display item of the list onto the cairo surface.
    fn render(&mut self, list: &RenderList, surface: &mut dyn ErasedSurface) -> Result<()> {
        let s = surface
            .as_any_mut()
            .downcast_mut::<CairoSurface>()
            .ok_or_else(|| anyhow!("CairoBackend used with non-Cairo surface"))?;

        {
            let cr = s.ctx()?;
            cr.set_line_width(1.0);

            for item in list.items.iter() {
                paint_item(&cr, item)?;
            }
        }

        s.flush();
        s.frame_id = s.frame_id.wrapping_add(1);
        Ok(())
    }

    /// Copies the surface pixels out as premultiplied ARGB32.
    fn snapshot(&mut self, surface: &mut dyn ErasedSurface) -> Result<RgbaImage> {
        let s = surface
            .as_any_mut()
            .downcast_mut::<CairoSurface>()
            .ok_or_else(|| anyhow!("CairoBackend used with non-Cairo surface"))?;

        s.flush();
        let mut pixels = Vec::new();
        s.surface.with_data(|data| pixels.extend_from_slice(data))?;

        RgbaImage::from_raw(
            pixels,
            s.size.width,
            s.size.height,
            s.surface.stride() as u32,
            PixelFormat::PreMulArgb32,
        )
    }
}

pub struct CairoSurface {
    surface: cairo::ImageSurface,
    size: SurfaceSize,
    frame_id: u64,
}

impl CairoSurface {
    fn new(size: SurfaceSize) -> Result<Self> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, size.width as i32, size.height as i32)?;

        Ok(Self {
            surface,
            size,
            frame_id: 0,
        })
    }

    #[inline]
    pub fn ctx(&self) -> Result<cairo::Context> {
        Ok(cairo::Context::new(&self.surface)?)
    }

    /// The underlying image surface, for hosts that composite it directly.
    #[inline]
    pub fn image_surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }

    #[inline]
    pub fn flush(&self) {
        self.surface.flush();
    }
}

impl ErasedSurface for CairoSurface {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::config::WorkshopConfig;
    use crate::events::{CanvasEvent, Key};

    fn render_canvas(canvas: &Canvas) -> RgbaImage {
        let mut backend = CairoBackend::new();
        let mut surface = backend.create_surface(canvas.viewport().as_size()).unwrap();
        backend.render(&canvas.render(), surface.as_mut()).unwrap();
        backend.snapshot(surface.as_mut()).unwrap()
    }

    #[test]
    fn paints_scene_colors() {
        let canvas = Canvas::new(&WorkshopConfig::default());
        let img = render_canvas(&canvas);

        // background
        assert_eq!(img.pixel(5, 5), Some([255, 255, 255, 255]));
        // inside the filled pink rectangle
        assert_eq!(img.pixel(250, 75), Some([255, 175, 175, 255]));
        // center of the filled cyan circle
        assert_eq!(img.pixel(240, 190), Some([0, 255, 255, 255]));
        // center of the moving yellow circle at x = 50
        assert_eq!(img.pixel(75, 345), Some([255, 255, 0, 255]));
    }

    #[test]
    fn moving_circle_follows_ticks() {
        let mut canvas = Canvas::new(&WorkshopConfig::default());
        for _ in 0..100 {
            canvas.handle_event(CanvasEvent::Tick);
        }
        canvas.handle_event(CanvasEvent::KeyDown { key: Key::Space });

        let img = render_canvas(&canvas);
        assert_eq!(img.pixel(75, 345), Some([255, 255, 255, 255]));
        assert_eq!(img.pixel(175, 345), Some([255, 255, 0, 255]));
    }
}
