//! Script-driven playback.

/// Scripted replay and range rendering.
pub mod playback;
/// Input script schema and validation.
pub mod script;
