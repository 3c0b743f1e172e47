//! Workshop configuration.
//!
//! `WorkshopConfig` holds everything a host needs to set up the canvas: the
//! window title and size, the tick cadence and where the moving circle starts.
//! Defaults match the classic 500x400 window ticking every 10 ms.
//!
//! # Examples
//!
//! ```rust
//! use graphics_workshop::config::WorkshopConfig;
//! use std::time::Duration;
//!
//! let cfg = WorkshopConfig::default();
//! assert_eq!((cfg.width, cfg.height), (500, 400));
//! assert_eq!(cfg.tick_interval, Duration::from_millis(10));
//!
//! let cfg = WorkshopConfig::builder()
//!     .size(640, 480)
//!     .start_x(0)
//!     .max_ticks(1_000)
//!     .build()
//!     .unwrap();
//! assert_eq!(cfg.max_ticks, Some(1_000));
//! ```
//!
//! # Errors
//!
//! [`WorkshopConfigBuilder::build`] returns [`ConfigError`] when the window is
//! not wider than the moving circle, has no height, the tick interval is zero,
//! or the circle would start outside the track.

use crate::scene::MOVING_CIRCLE_SIZE;
use crate::render::ViewportSize;
use std::time::Duration;

const DEFAULT_TITLE: &str = "Graphics Workshop";

#[derive(Debug, Clone, PartialEq)]
pub struct WorkshopConfig {
    /// Window title
    pub title: String,
    /// Width of the drawing area in pixels
    pub width: u32,
    /// Height of the drawing area in pixels
    pub height: u32,
    /// Period of the animation tick
    pub tick_interval: Duration,
    /// Initial x of the moving circle
    pub start_x: i32,
    /// Stop after this many ticks. Only the headless driver honors it.
    pub max_ticks: Option<u64>,
}

impl Default for WorkshopConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            width: 500,
            height: 400,
            tick_interval: Duration::from_millis(10),
            start_x: 50,
            max_ticks: None,
        }
    }
}

impl WorkshopConfig {
    pub fn builder() -> WorkshopConfigBuilder {
        WorkshopConfigBuilder::default()
    }

    pub fn viewport(&self) -> ViewportSize {
        ViewportSize::new(self.width, self.height)
    }

    /// Checks a config that was not produced by the builder.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate(self)
    }
}

/// Builder for [`WorkshopConfig`].
#[derive(Debug, Clone, Default)]
pub struct WorkshopConfigBuilder {
    inner: WorkshopConfig,
}

impl WorkshopConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut WorkshopConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn title<S: Into<String>>(self, title: S) -> Self { self.map(|c| c.title = title.into()) }
    pub fn size(self, width: u32, height: u32) -> Self { self.map(|c| { c.width = width; c.height = height; }) }
    pub fn tick_interval(self, interval: Duration) -> Self { self.map(|c| c.tick_interval = interval) }
    pub fn start_x(self, x: i32) -> Self { self.map(|c| c.start_x = x) }
    pub fn max_ticks(self, n: u64) -> Self { self.map(|c| c.max_ticks = Some(n)) }

    /// Validate and build the final config.
    pub fn build(self) -> Result<WorkshopConfig, ConfigError> {
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

// ---------- Validation ----------

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("width {0} must be larger than the moving circle ({})", MOVING_CIRCLE_SIZE)]
    TooNarrow(u32),
    #[error("height must be at least 1")]
    ZeroHeight,
    #[error("tick interval must be non-zero")]
    ZeroTickInterval,
    #[error("start_x {x} is outside 0..={max}")]
    StartOutOfRange { x: i32, max: i32 },
}

fn validate(c: &WorkshopConfig) -> Result<(), ConfigError> {
    if c.width <= MOVING_CIRCLE_SIZE as u32 || c.width > i32::MAX as u32 {
        return Err(ConfigError::TooNarrow(c.width));
    }
    if c.height == 0 {
        return Err(ConfigError::ZeroHeight);
    }
    if c.tick_interval.is_zero() {
        return Err(ConfigError::ZeroTickInterval);
    }
    let max = c.width as i32 - MOVING_CIRCLE_SIZE;
    if !(0..=max).contains(&c.start_x) {
        return Err(ConfigError::StartOutOfRange { x: c.start_x, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = WorkshopConfig::builder().build().unwrap();
        assert_eq!(cfg, WorkshopConfig::default());
        assert_eq!(cfg.viewport(), ViewportSize::new(500, 400));
    }

    #[test]
    fn rejects_window_not_wider_than_circle() {
        let err = WorkshopConfig::builder().size(50, 400).build().unwrap_err();
        assert_eq!(err, ConfigError::TooNarrow(50));
        assert!(WorkshopConfig::builder().size(51, 400).start_x(0).build().is_ok());
    }

    #[test]
    fn rejects_zero_height_and_interval() {
        assert_eq!(
            WorkshopConfig::builder().size(500, 0).build().unwrap_err(),
            ConfigError::ZeroHeight
        );
        assert_eq!(
            WorkshopConfig::builder().tick_interval(Duration::ZERO).build().unwrap_err(),
            ConfigError::ZeroTickInterval
        );
    }

    #[test]
    fn start_x_must_be_on_track() {
        let err = WorkshopConfig::builder().start_x(451).build().unwrap_err();
        assert_eq!(err, ConfigError::StartOutOfRange { x: 451, max: 450 });
        assert_eq!(err.to_string(), "start_x 451 is outside 0..=450");
        assert!(WorkshopConfig::builder().start_x(450).build().is_ok());
        assert!(WorkshopConfig::builder().start_x(-1).build().is_err());
    }

    #[test]
    fn validate_checks_struct_literals() {
        let cfg = WorkshopConfig {
            start_x: 0,
            width: 40,
            ..Default::default()
        };
        assert_eq!(cfg.validate().unwrap_err(), ConfigError::TooNarrow(40));
        assert!(WorkshopConfig::default().validate().is_ok());
    }
}
