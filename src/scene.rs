//! The workshop scene.
//!
//! Everything here is fixed geometry: the demo shapes, the prompt and overlay
//! text, and the moving circle whose x comes from the animation state.

use crate::render::{Color, DisplayItem, Paint, Point, RenderList};

/// Diameter of the moving circle. The circle's track is `0..=width - MOVING_CIRCLE_SIZE`.
pub const MOVING_CIRCLE_SIZE: i32 = 50;
/// Top edge of the moving circle.
pub const MOVING_CIRCLE_Y: f32 = 320.0;

pub const PROMPT_TEXT: &str = "Press SPACE to show text";
pub const OVERLAY_TEXT: &str = "SPACE is pressed!";

const TEXT_SIZE: f32 = 12.0;
const TEXT_BASELINE: f32 = 380.0;

const TRIANGLE: [Point; 3] = [
    Point::new(250.0, 250.0),
    Point::new(300.0, 200.0),
    Point::new(350.0, 250.0),
];

/// White background plus the demo shapes, in paint order.
pub fn paint_background_and_shapes(list: &mut RenderList) {
    list.add_command(DisplayItem::Clear { color: Color::WHITE });

    list.add_command(DisplayItem::Rect {
        x: 50.0,
        y: 50.0,
        w: 100.0,
        h: 50.0,
        paint: Paint::Stroke,
        color: Color::RED,
    });
    list.add_command(DisplayItem::Rect {
        x: 200.0,
        y: 50.0,
        w: 100.0,
        h: 50.0,
        paint: Paint::Fill,
        color: Color::PINK,
    });

    list.add_command(DisplayItem::Ellipse {
        x: 50.0,
        y: 150.0,
        w: 80.0,
        h: 80.0,
        paint: Paint::Stroke,
        color: Color::BLUE,
    });
    list.add_command(DisplayItem::Ellipse {
        x: 200.0,
        y: 150.0,
        w: 80.0,
        h: 80.0,
        paint: Paint::Fill,
        color: Color::CYAN,
    });

    list.add_command(DisplayItem::Line {
        from: Point::new(50.0, 250.0),
        to: Point::new(150.0, 300.0),
        color: Color::BLACK,
    });

    list.add_command(DisplayItem::Polygon {
        points: TRIANGLE.to_vec(),
        paint: Paint::Stroke,
        color: Color::MAGENTA,
    });
    list.add_command(DisplayItem::Polygon {
        points: TRIANGLE.to_vec(),
        paint: Paint::Fill,
        color: Color::ORANGE,
    });
}

pub fn paint_prompt(list: &mut RenderList) {
    list.add_command(DisplayItem::TextRun {
        x: 50.0,
        y: TEXT_BASELINE,
        text: PROMPT_TEXT.to_string(),
        size: TEXT_SIZE,
        color: Color::BLACK,
    });
}

/// The text shown while SPACE is held.
pub fn paint_overlay(list: &mut RenderList) {
    list.add_command(DisplayItem::TextRun {
        x: 200.0,
        y: TEXT_BASELINE,
        text: OVERLAY_TEXT.to_string(),
        size: TEXT_SIZE,
        color: Color::GREEN,
    });
}

pub fn paint_moving_circle(list: &mut RenderList, position_x: i32) {
    list.add_command(DisplayItem::Ellipse {
        x: position_x as f32,
        y: MOVING_CIRCLE_Y,
        w: MOVING_CIRCLE_SIZE as f32,
        h: MOVING_CIRCLE_SIZE as f32,
        paint: Paint::Fill,
        color: Color::YELLOW,
    });
}
