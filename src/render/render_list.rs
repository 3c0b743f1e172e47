//! Render list and display items.
//!
//! This module defines a lightweight, immediate-style render list
//! consisting of [`DisplayItem`] commands. The canvas produces one of
//! these per frame and a [`RenderBackend`](crate::render::backend::RenderBackend)
//! consumes it, so the scene can be inspected without a display.
//!
//! Items are painted in order: later items paint over earlier ones.
//!
//! # Example
//!
//! ```rust
//! use graphics_workshop::render::{Color, DisplayItem, Paint, RenderList};
//!
//! let mut list = RenderList::new();
//!
//! // Clear background
//! list.add_command(DisplayItem::Clear { color: Color::WHITE });
//!
//! // Draw a red rectangle outline
//! list.add_command(DisplayItem::Rect {
//!     x: 10.0,
//!     y: 20.0,
//!     w: 100.0,
//!     h: 50.0,
//!     paint: Paint::Stroke,
//!     color: Color::RED,
//! });
//!
//! assert_eq!(list.len(), 2);
//! ```

/// RGBA color used for drawing commands.
///
/// Channels are represented as `f32` in the range `0.0 ..= 1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Alpha channel (opacity)
    pub a: f32,
}

macro_rules! rgb8 {
    ($r:expr, $g:expr, $b:expr) => {
        Color {
            r: $r as f32 / 255.0,
            g: $g as f32 / 255.0,
            b: $b as f32 / 255.0,
            a: 1.0,
        }
    };
}

impl Color {
    pub const WHITE: Color = rgb8!(255, 255, 255);
    pub const BLACK: Color = rgb8!(0, 0, 0);
    pub const RED: Color = rgb8!(255, 0, 0);
    pub const PINK: Color = rgb8!(255, 175, 175);
    pub const BLUE: Color = rgb8!(0, 0, 255);
    pub const CYAN: Color = rgb8!(0, 255, 255);
    pub const MAGENTA: Color = rgb8!(255, 0, 255);
    pub const ORANGE: Color = rgb8!(255, 200, 0);
    pub const GREEN: Color = rgb8!(0, 255, 0);
    pub const YELLOW: Color = rgb8!(255, 255, 0);

    /// Creates a new color from `f32` channel values in the range `0.0 ..= 1.0`.
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color { r, g, b, a }
    }

    /// Creates a new color from `u8` channel values in the range `0 ..= 255`.
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Creates an opaque color from `u8` channel values.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Color {
        rgb8!(r, g, b)
    }

    /// Returns the channels as `u8` values in `[r, g, b, a]` order.
    pub fn to_u8(&self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

/// Whether a shape is outlined or filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// Draw the outline with a one pixel pen.
    Stroke,
    /// Fill the interior.
    Fill,
}

/// A point in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A single display item representing a drawing command.
///
/// These commands are appended to a [`RenderList`] and later processed
/// by the render backend.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayItem {
    /// Clear the entire surface with the given color.
    Clear {
        /// The color to clear the surface with.
        color: Color,
    },

    /// Draw a rectangle at `(x, y)` with width `w` and height `h`.
    Rect {
        /// The x-coordinate of the rectangle's top-left corner.
        x: f32,
        /// The y-coordinate of the rectangle's top-left corner.
        y: f32,
        /// The width of the rectangle.
        w: f32,
        /// The height of the rectangle.
        h: f32,
        /// Outline or fill.
        paint: Paint,
        /// The color to paint the rectangle with.
        color: Color,
    },

    /// Draw an ellipse inscribed in the box at `(x, y)` sized `w` by `h`.
    Ellipse {
        /// The x-coordinate of the bounding box's top-left corner.
        x: f32,
        /// The y-coordinate of the bounding box's top-left corner.
        y: f32,
        /// The width of the bounding box.
        w: f32,
        /// The height of the bounding box.
        h: f32,
        /// Outline or fill.
        paint: Paint,
        /// The color to paint the ellipse with.
        color: Color,
    },

    /// Draw a straight one pixel line between two points.
    Line {
        from: Point,
        to: Point,
        color: Color,
    },

    /// Draw a closed polygon through `points`.
    Polygon {
        /// Vertices in drawing order. The last vertex connects back to the first.
        points: Vec<Point>,
        /// Outline or fill.
        paint: Paint,
        /// The color to paint the polygon with.
        color: Color,
    },

    /// Draw a text run with its baseline starting at `(x, y)`.
    TextRun {
        /// The x-coordinate where the text starts.
        x: f32,
        /// The y-coordinate of the baseline.
        y: f32,
        /// The text to render.
        text: String,
        /// The font size to use for the text.
        size: f32,
        /// The color to render the text with.
        color: Color,
    },
}

/// A list of display items to be rendered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderList {
    /// Sequence of drawing commands to execute.
    pub items: Vec<DisplayItem>,
}

impl RenderList {
    /// Creates a new, empty render list.
    pub fn new() -> Self {
        RenderList { items: Vec::new() }
    }

    /// Adds a new display item (drawing command) to the list.
    pub fn add_command(&mut self, command: DisplayItem) {
        self.items.push(command);
    }

    /// Clears all display items from the list.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the text of every [`DisplayItem::TextRun`] in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match item {
            DisplayItem::TextRun { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_matches_from_u8_opaque() {
        assert_eq!(Color::rgb8(255, 200, 0), Color::from_u8(255, 200, 0, 255));
        assert_eq!(Color::ORANGE.to_u8(), [255, 200, 0, 255]);
    }

    #[test]
    fn to_u8_clamps_out_of_range_channels() {
        let c = Color::new(1.5, -0.2, 0.5, 1.0);
        assert_eq!(c.to_u8(), [255, 0, 128, 255]);
    }

    #[test]
    fn texts_skips_non_text_items() {
        let mut list = RenderList::new();
        list.add_command(DisplayItem::Clear { color: Color::WHITE });
        list.add_command(DisplayItem::TextRun {
            x: 0.0,
            y: 10.0,
            text: "first".into(),
            size: 12.0,
            color: Color::BLACK,
        });
        list.add_command(DisplayItem::Line {
            from: Point::new(0.0, 0.0),
            to: Point::new(1.0, 1.0),
            color: Color::BLACK,
        });
        list.add_command(DisplayItem::TextRun {
            x: 0.0,
            y: 20.0,
            text: "second".into(),
            size: 12.0,
            color: Color::GREEN,
        });

        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["first", "second"]);

        list.clear();
        assert!(list.is_empty());
    }
}
