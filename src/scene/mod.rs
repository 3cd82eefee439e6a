//! Scene model driven by a virtual clock.
//!
//! [`greeting::Scene`] owns the switch state and routes input to the spotlight controller and
//! the balloon field. [`frame::SceneFrame`] captures what a renderer needs for one instant.

/// Audio cue vocabulary and outputs.
pub mod audio;
/// Rising balloon field.
pub mod balloons;
/// Periodic confetti burst timer.
pub mod burst;
/// Confetti particle physics.
pub mod confetti;
/// Overlay, timer and pointer-graphic coordination.
pub mod controller;
/// Renderer-facing snapshot of a scene instant.
pub mod frame;
/// Scene root.
pub mod greeting;
/// Cursor-following pointer graphic.
pub mod indicator;
/// Overlay paints.
pub mod spotlight;
/// Switch state, placement and click routing.
pub mod toggle;
