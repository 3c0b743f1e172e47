//! Headless host loop.
//!
//! [`Driver`] plays the part of a windowing toolkit's event loop without a
//! window: a timer delivers [`CanvasEvent::Tick`] at the configured cadence,
//! key events arrive over a channel, and every event runs to completion on the
//! canvas before the next one is looked at. Whenever the canvas asks for a
//! redraw, its render list is painted through the render backend.
//!
//! ```
//! use graphics_workshop::config::WorkshopConfig;
//! use graphics_workshop::driver::Driver;
//! use graphics_workshop::render::backends::null::NullBackend;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), graphics_workshop::errors::WorkshopError> {
//! let config = WorkshopConfig::builder().max_ticks(3).build()?;
//! let mut driver = Driver::new(&config, Box::new(NullBackend::new()?))?;
//!
//! let (_keys_tx, keys_rx) = tokio::sync::mpsc::channel(8);
//! let report = driver.run(keys_rx).await?;
//! assert_eq!(report.ticks, 3);
//! assert_eq!(driver.canvas().position_x(), 53);
//! # Ok(())
//! # }
//! ```

use crate::canvas::Canvas;
use crate::config::WorkshopConfig;
use crate::errors::WorkshopError;
use crate::events::CanvasEvent;
use crate::render::backend::{ErasedSurface, RenderBackend, RgbaImage};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// Summary of a finished [`Driver::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverReport {
    /// Ticks delivered during the run
    pub ticks: u64,
    /// Frames painted during the run, including the initial one
    pub frames: u64,
}

pub struct Driver {
    canvas: Canvas,
    backend: Box<dyn RenderBackend>,
    surface: Box<dyn ErasedSurface>,
    tick_interval: Duration,
    max_ticks: Option<u64>,
}

impl Driver {
    pub fn new(config: &WorkshopConfig, backend: Box<dyn RenderBackend>) -> Result<Self, WorkshopError> {
        config.validate()?;

        let canvas = Canvas::new(config);
        let surface = backend.create_surface(canvas.viewport().as_size())?;

        log::info!(
            "Driver \"{}\" using {} at {}x{}",
            config.title,
            backend.name(),
            config.width,
            config.height
        );

        Ok(Self {
            canvas,
            backend,
            surface,
            tick_interval: config.tick_interval,
            max_ticks: config.max_ticks,
        })
    }

    /// Runs the loop until `events` closes or the tick limit is reached.
    ///
    /// Late timer ticks are delayed rather than bunched up, so a stalled host
    /// never replays missed ticks.
    pub async fn run(&mut self, mut events: mpsc::Receiver<CanvasEvent>) -> Result<DriverReport, WorkshopError> {
        let mut ticker = tokio::time::interval(self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick of an interval completes immediately
        ticker.tick().await;

        let mut report = DriverReport { ticks: 0, frames: 0 };
        self.paint()?;
        report.frames += 1;

        loop {
            if self.max_ticks.is_some_and(|max| report.ticks >= max) {
                log::info!("Tick limit reached after {} ticks", report.ticks);
                break;
            }

            let result = tokio::select! {
                maybe_event = events.recv() => match maybe_event {
                    Some(event) => self.canvas.handle_event(event),
                    None => {
                        log::info!("Event source closed, stopping driver");
                        break;
                    }
                },
                _ = ticker.tick() => {
                    report.ticks += 1;
                    self.canvas.handle_event(CanvasEvent::Tick)
                }
            };

            if result.needs_redraw {
                self.paint()?;
                report.frames += 1;
            }
        }

        Ok(report)
    }

    fn paint(&mut self) -> Result<(), WorkshopError> {
        let list = self.canvas.render();
        self.backend.render(&list, self.surface.as_mut())?;
        Ok(())
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn surface(&self) -> &dyn ErasedSurface {
        self.surface.as_ref()
    }

    /// Copies the most recently painted frame to the CPU.
    pub fn snapshot(&mut self) -> Result<RgbaImage, WorkshopError> {
        Ok(self.backend.snapshot(self.surface.as_mut())?)
    }
}
