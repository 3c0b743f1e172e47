use crate::config::WorkshopConfig;
use crate::events::{CanvasEvent, Key};
use crate::render::{RenderList, ViewportSize};
use crate::scene::{self, MOVING_CIRCLE_SIZE};
use crate::tick::{AnimationState, Direction, TickResult};

/// Keyboard state the scene reacts to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    pub space_pressed: bool,
}

/// The workshop canvas.
///
/// Owns all state of the demo: the fixed viewport, the keyboard state and the
/// moving circle. A host delivers ticks and key events one at a time through
/// [`handle_event`](Canvas::handle_event) (or the individual operations) and
/// paints whatever [`render`](Canvas::render) returns. Nothing here touches a
/// window, so the whole loop can run without a display.
pub struct Canvas {
    viewport: ViewportSize,
    input: InputState,
    animation: AnimationState,
    /// Number of ticks handled so far
    ticks: u64,
}

impl Canvas {
    /// Creates a canvas sized and positioned from the given configuration.
    pub fn new(config: &WorkshopConfig) -> Canvas {
        Self::with_viewport(config.viewport(), config.start_x)
    }

    /// Creates a canvas for any viewport. `start_x` is clamped onto the track.
    pub fn with_viewport(viewport: ViewportSize, start_x: i32) -> Canvas {
        let max_x = track_end(viewport);
        Self {
            viewport,
            input: InputState::default(),
            animation: AnimationState::new(start_x.clamp(0, max_x.max(0))),
            ticks: 0,
        }
    }

    /// Dispatches a host event to the matching operation.
    pub fn handle_event(&mut self, event: CanvasEvent) -> TickResult {
        match event {
            CanvasEvent::Tick => self.tick(),
            CanvasEvent::KeyDown { key } => self.key_down(&key),
            CanvasEvent::KeyUp { key } => self.key_up(&key),
        }
    }

    /// Advances the moving circle by one pixel. Always requests a redraw.
    pub fn tick(&mut self) -> TickResult {
        let flipped = self.animation.advance(self.max_x());
        self.ticks = self.ticks.wrapping_add(1);

        log::trace!("tick {}: x = {}", self.ticks, self.animation.position_x);
        if flipped {
            log::debug!(
                "Moving circle reversed at x = {} after {} ticks, now heading {:?}",
                self.animation.position_x,
                self.ticks,
                self.animation.direction
            );
        }

        TickResult::redraw()
    }

    pub fn key_down(&mut self, key: &Key) -> TickResult {
        self.set_space(key, true)
    }

    pub fn key_up(&mut self, key: &Key) -> TickResult {
        self.set_space(key, false)
    }

    fn set_space(&mut self, key: &Key, pressed: bool) -> TickResult {
        if *key != Key::Space {
            return TickResult::unchanged();
        }
        if self.input.space_pressed == pressed {
            // key repeat
            return TickResult::unchanged();
        }

        self.input.space_pressed = pressed;
        log::debug!("Space {}", if pressed { "pressed" } else { "released" });
        TickResult::redraw()
    }

    /// Builds the draw commands for the current state.
    ///
    /// Background and shapes first, then the prompt, the overlay text while
    /// SPACE is held, and finally the moving circle on top.
    pub fn render(&self) -> RenderList {
        let mut list = RenderList::new();

        scene::paint_background_and_shapes(&mut list);
        scene::paint_prompt(&mut list);
        if self.input.space_pressed {
            scene::paint_overlay(&mut list);
        }
        scene::paint_moving_circle(&mut list, self.animation.position_x);

        list
    }

    /// Rightmost x the moving circle may take.
    #[inline]
    pub fn max_x(&self) -> i32 {
        track_end(self.viewport)
    }

    #[inline]
    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    #[inline]
    pub fn space_pressed(&self) -> bool {
        self.input.space_pressed
    }

    #[inline]
    pub fn position_x(&self) -> i32 {
        self.animation.position_x
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.animation.direction
    }

    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

fn track_end(viewport: ViewportSize) -> i32 {
    i32::try_from(viewport.width()).unwrap_or(i32::MAX) - MOVING_CIRCLE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Color, DisplayItem, Paint};
    use crate::scene::{OVERLAY_TEXT, PROMPT_TEXT};

    fn canvas() -> Canvas {
        Canvas::new(&WorkshopConfig::default())
    }

    fn ticks(canvas: &mut Canvas, n: usize) {
        for _ in 0..n {
            canvas.handle_event(CanvasEvent::Tick);
        }
    }

    fn moving_circle_x(list: &RenderList) -> f32 {
        match list.items.last() {
            Some(DisplayItem::Ellipse {
                x,
                paint: Paint::Fill,
                color,
                ..
            }) if *color == Color::YELLOW => *x,
            other => panic!("expected the moving circle last, got {:?}", other),
        }
    }

    #[test]
    fn initial_state() {
        let c = canvas();
        assert_eq!(c.viewport(), ViewportSize::new(500, 400));
        assert_eq!(c.position_x(), 50);
        assert_eq!(c.direction(), Direction::Forward);
        assert!(!c.space_pressed());
        assert_eq!(moving_circle_x(&c.render()), 50.0);
    }

    #[test]
    fn position_stays_on_track() {
        let mut c = canvas();
        for _ in 0..5_000 {
            c.tick();
            assert!((0..=450).contains(&c.position_x()), "x = {}", c.position_x());
        }
    }

    #[test]
    fn first_reversal_at_tick_400() {
        let mut c = canvas();
        ticks(&mut c, 399);
        assert_eq!(c.position_x(), 449);
        assert_eq!(c.direction(), Direction::Forward);

        ticks(&mut c, 1);
        assert_eq!(c.position_x(), 450);
        assert_eq!(c.direction(), Direction::Backward);
        assert_eq!(c.ticks(), 400);
    }

    #[test]
    fn full_round_trip() {
        let mut c = canvas();
        ticks(&mut c, 400);
        assert_eq!((c.position_x(), c.direction()), (450, Direction::Backward));

        ticks(&mut c, 450);
        assert_eq!((c.position_x(), c.direction()), (0, Direction::Forward));

        ticks(&mut c, 1);
        assert_eq!(c.position_x(), 1);
        assert_eq!(moving_circle_x(&c.render()), 1.0);
    }

    #[test]
    fn tick_always_requests_redraw() {
        let mut c = canvas();
        assert!(c.handle_event(CanvasEvent::Tick).needs_redraw);
    }

    #[test]
    fn space_toggles_flag() {
        let mut c = canvas();
        assert!(c.handle_event(CanvasEvent::KeyDown { key: Key::Space }).needs_redraw);
        assert!(c.space_pressed());

        // held key repeats are harmless
        assert!(!c.handle_event(CanvasEvent::KeyDown { key: Key::Space }).needs_redraw);
        assert!(c.space_pressed());

        assert!(c.handle_event(CanvasEvent::KeyUp { key: Key::Space }).needs_redraw);
        assert!(!c.space_pressed());
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut c = canvas();
        let a = Key::from_name("a");
        assert!(!c.key_down(&a).needs_redraw);
        assert!(!c.space_pressed());

        c.key_down(&Key::Space);
        assert!(!c.key_up(&a).needs_redraw);
        assert!(c.space_pressed());
    }

    #[test]
    fn overlay_only_while_space_held() {
        let mut c = canvas();
        assert_eq!(c.render().texts().collect::<Vec<_>>(), vec![PROMPT_TEXT]);

        c.key_down(&Key::Space);
        assert_eq!(c.render().texts().collect::<Vec<_>>(), vec![PROMPT_TEXT, OVERLAY_TEXT]);

        c.key_up(&Key::Space);
        assert!(!c.render().texts().any(|t| t == OVERLAY_TEXT));
    }

    #[test]
    fn render_is_idempotent() {
        let mut c = canvas();
        ticks(&mut c, 17);
        c.key_down(&Key::Space);
        assert_eq!(c.render(), c.render());
    }

    #[test]
    fn scene_paint_order() {
        let list = canvas().render();
        let kinds: Vec<&str> = list
            .items
            .iter()
            .map(|item| match item {
                DisplayItem::Clear { .. } => "clear",
                DisplayItem::Rect { paint: Paint::Stroke, .. } => "rect-outline",
                DisplayItem::Rect { paint: Paint::Fill, .. } => "rect-fill",
                DisplayItem::Ellipse { paint: Paint::Stroke, .. } => "ellipse-outline",
                DisplayItem::Ellipse { paint: Paint::Fill, .. } => "ellipse-fill",
                DisplayItem::Line { .. } => "line",
                DisplayItem::Polygon { paint: Paint::Stroke, .. } => "polygon-outline",
                DisplayItem::Polygon { paint: Paint::Fill, .. } => "polygon-fill",
                DisplayItem::TextRun { .. } => "text",
            })
            .collect();

        assert_eq!(
            kinds,
            vec![
                "clear",
                "rect-outline",
                "rect-fill",
                "ellipse-outline",
                "ellipse-fill",
                "line",
                "polygon-outline",
                "polygon-fill",
                "text",
                "ellipse-fill",
            ]
        );
        assert_eq!(list.items[0], DisplayItem::Clear { color: Color::WHITE });
    }

    #[test]
    fn narrow_viewport_bounces_on_short_track() {
        let mut c = Canvas::with_viewport(ViewportSize::new(52, 10), 0);
        let xs: Vec<i32> = (0..5)
            .map(|_| {
                c.tick();
                c.position_x()
            })
            .collect();
        assert_eq!(xs, vec![1, 2, 1, 0, 1]);
    }

    #[test]
    fn start_outside_track_is_clamped() {
        let mut c = Canvas::with_viewport(ViewportSize::new(500, 400), i32::MAX);
        assert_eq!(c.position_x(), 450);
        c.tick();
        assert!((0..=450).contains(&c.position_x()));

        let c = Canvas::with_viewport(ViewportSize::new(500, 400), -10);
        assert_eq!(c.position_x(), 0);
    }

    #[test]
    fn huge_width_keeps_a_usable_track() {
        let mut c = Canvas::with_viewport(ViewportSize::new(u32::MAX, 400), 0);
        assert_eq!(c.max_x(), i32::MAX - 50);
        c.tick();
        assert_eq!((c.position_x(), c.direction()), (1, Direction::Forward));
    }
}
