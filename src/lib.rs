//! Switchlight is a headless, deterministic rendition of a light-switch birthday greeting.
//!
//! A scripted stream of pointer moves and clicks drives the scene on a virtual clock:
//!
//! - Lights off: a dark overlay with a spotlight that follows the pointer, and a pointer graphic
//!   aiming at the switch
//! - Lights on: a warm glow, five seconds of confetti bursts and a field of rising balloons
//!
//! The public API is session-oriented:
//!
//! - Load and validate a [`Script`]
//! - Replay it with [`Playback`], or render single frames and ranges through a
//!   [`FrameRenderer`] into a [`FrameSink`]
//! - Inspect the scene journal with [`trace`]
//!
//! Frames are **premultiplied RGBA8** end-to-end. Given the same script, every output is
//! bit-identical.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
/// Encoding sinks.
pub mod encode;
/// Rendering backend(s).
pub mod render;
/// Scene model.
pub mod scene;
/// Script-driven playback.
pub mod session;

pub use crate::animation::ease::Ease;
pub use crate::foundation::core::{
    Affine, BezPath, Fps, FrameIndex, Point, Rect, Rgba, Rgba8Premul, SimTime, Vec2, Viewport,
};
pub use crate::foundation::error::{SwitchlightError, SwitchlightResult};
pub use crate::foundation::math::{Rng64, pointing_angle_deg};

pub use crate::encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig, write_png};
pub use crate::render::backend::{FrameRGBA, FrameRenderer, RendererKind, create_renderer};
pub use crate::render::cpu::CpuRenderer;
pub use crate::scene::audio::{AudioCue, AudioOut, RecordingAudio, TracingAudio};
pub use crate::scene::frame::SceneFrame;
pub use crate::scene::greeting::{SMALL_SCREEN_NOTICE, Scene, SceneEvent, SceneOptions};
pub use crate::scene::toggle::{ClickRoute, ClickTarget};
pub use crate::session::playback::{Playback, RenderStats, render_frame, render_range, trace};
pub use crate::session::script::{InputEvent, Script};
