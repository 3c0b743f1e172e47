use graphics_workshop::canvas::Canvas;
use graphics_workshop::config::WorkshopConfig;
use graphics_workshop::events::{CanvasEvent, Key};
use graphics_workshop::render::backend::{ErasedSurface, RenderBackend};
use graphics_workshop::render::backends::cairo::{CairoBackend, CairoSurface};
use graphics_workshop::tick::TickResult;
use gtk4::gdk;
use gtk4::glib::{self, clone, ControlFlow};
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, DrawingArea, EventControllerKey};
use std::cell::RefCell;
use std::rc::Rc;

/// Everything the GTK callbacks share. Only touched from the main loop.
struct GtkHost {
    canvas: Canvas,
    backend: CairoBackend,
    surface: Box<dyn ErasedSurface>,
}

impl GtkHost {
    fn new(config: &WorkshopConfig) -> anyhow::Result<Self> {
        let canvas = Canvas::new(config);
        let backend = CairoBackend::new();
        let surface = backend.create_surface(canvas.viewport().as_size())?;
        Ok(Self { canvas, backend, surface })
    }

    fn handle_event(&mut self, event: CanvasEvent) -> TickResult {
        self.canvas.handle_event(event)
    }

    /// Renders the canvas and paints the result onto the widget's cairo context.
    fn draw(&mut self, cr: &gtk4::cairo::Context) -> anyhow::Result<()> {
        let list = self.canvas.render();
        self.backend.render(&list, self.surface.as_mut())?;

        let surface = self
            .surface
            .as_any()
            .downcast_ref::<CairoSurface>()
            .ok_or_else(|| anyhow::anyhow!("expected a cairo surface"))?;
        cr.set_source_surface(surface.image_surface(), 0.0, 0.0)?;
        cr.paint()?;
        Ok(())
    }
}

fn key_from_gdk(keyval: gdk::Key) -> Key {
    if keyval == gdk::Key::space {
        return Key::Space;
    }
    match keyval.name() {
        Some(name) => Key::from_name(&name),
        None => Key::Other(format!("{keyval:?}")),
    }
}

fn main() -> glib::ExitCode {
    env_logger::init();

    let app = Application::builder()
        .application_id("io.graphics.workshop")
        .build();

    app.connect_activate(|app| {
        let config = WorkshopConfig::default();

        let host = match GtkHost::new(&config) {
            Ok(host) => Rc::new(RefCell::new(host)),
            Err(e) => {
                log::error!("Cannot set up the cairo backend: {e}");
                app.quit();
                return;
            }
        };

        let drawing_area = DrawingArea::new();
        drawing_area.set_content_width(config.width as i32);
        drawing_area.set_content_height(config.height as i32);

        let host_draw = host.clone();
        drawing_area.set_draw_func(move |_area, cr, _w, _h| {
            if let Err(e) = host_draw.borrow_mut().draw(cr) {
                log::warn!("Paint failed: {e}");
            }
        });

        let window = ApplicationWindow::builder()
            .application(app)
            .title(config.title.as_str())
            .default_width(config.width as i32)
            .default_height(config.height as i32)
            .resizable(false)
            .child(&drawing_area)
            .build();

        // Keyboard: only the level of SPACE matters, repeats are harmless
        let keys = EventControllerKey::new();
        keys.connect_key_pressed(clone!(@strong host, @strong drawing_area => move |_ctrl, keyval, _code, _state| {
            let result = host.borrow_mut().handle_event(CanvasEvent::KeyDown { key: key_from_gdk(keyval) });
            if result.needs_redraw {
                drawing_area.queue_draw();
            }
            glib::Propagation::Proceed
        }));
        keys.connect_key_released(clone!(@strong host, @strong drawing_area => move |_ctrl, keyval, _code, _state| {
            let result = host.borrow_mut().handle_event(CanvasEvent::KeyUp { key: key_from_gdk(keyval) });
            if result.needs_redraw {
                drawing_area.queue_draw();
            }
        }));
        window.add_controller(keys);

        window.present();

        // Animation timer. GTK fires it best-effort; late ticks are not replayed.
        glib::timeout_add_local(config.tick_interval, clone!(@strong host, @strong drawing_area => move || {
            let result = host.borrow_mut().handle_event(CanvasEvent::Tick);
            if result.needs_redraw {
                drawing_area.queue_draw();
            }
            ControlFlow::Continue
        }));
    });

    app.run()
}
