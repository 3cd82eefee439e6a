//! Rendering backend.
//!
//! Renderers turn a [`crate::scene::frame::SceneFrame`] into premultiplied RGBA8 pixels.

/// Backend trait and frame type.
pub mod backend;
/// Per-pixel source-over compositing.
pub(crate) mod composite;
/// CPU renderer powered by `vello_cpu`.
pub mod cpu;
