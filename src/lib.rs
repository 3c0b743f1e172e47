//! A small animated canvas: a fixed scene of shapes and text, one circle
//! bouncing along a track on a timer, and an overlay shown while SPACE is held.
//!
//! The [`canvas::Canvas`] holds all state and turns it into a
//! [`render::RenderList`]; hosts (the GTK demo or the headless [`driver`])
//! feed it [`events::CanvasEvent`]s and paint the list through a
//! [`render::backend::RenderBackend`].

pub mod canvas;
pub mod config;
pub mod driver;
pub mod errors;
pub mod events;
pub mod render;
pub mod scene;
pub mod tick;

pub use canvas::Canvas;
pub use config::WorkshopConfig;
pub use errors::WorkshopError;
