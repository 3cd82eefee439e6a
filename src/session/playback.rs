use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{FrameIndex, SimTime};
use crate::foundation::error::{SwitchlightError, SwitchlightResult};
use crate::render::backend::{FrameRGBA, FrameRenderer};
use crate::scene::audio::{AudioOut, TracingAudio};
use crate::scene::frame::SceneFrame;
use crate::scene::greeting::{Scene, SceneEvent};
use crate::session::script::{InputEvent, Script};

/// Range render summary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames covering the script duration.
    pub frames_total: u64,
    /// Frames pushed into the sink.
    pub frames_rendered: u64,
}

/// Replays a script's input into a mounted scene on the virtual clock.
///
/// Time only moves forward: [`Playback::advance_to`] delivers every event due at or before the
/// requested instant, in script order, then runs timers and physics up to it.
pub struct Playback<A: AudioOut> {
    events: Vec<InputEvent>,
    next: usize,
    scene: Scene<A>,
}

impl<A: AudioOut> Playback<A> {
    /// Validate `script` and mount its scene at time zero.
    pub fn new(script: &Script, audio: A) -> SwitchlightResult<Self> {
        script.validate()?;
        Ok(Self {
            events: script.events.clone(),
            next: 0,
            scene: Scene::mount(script.scene_options(), audio),
        })
    }

    /// The scene being driven.
    pub fn scene(&self) -> &Scene<A> {
        &self.scene
    }

    /// Deliver input due by `at`, then advance the scene clock to `at`.
    pub fn advance_to(&mut self, at: SimTime) {
        while let Some(ev) = self.events.get(self.next).copied() {
            if ev.at() > at {
                break;
            }
            self.next += 1;
            match ev {
                InputEvent::PointerMove { .. } => self.scene.pointer_move(ev.at(), ev.point()),
                InputEvent::Click { .. } => {
                    let route = self.scene.click(ev.at(), ev.point());
                    tracing::debug!(at_ms = ev.at().0, ?route, "scripted click");
                }
            }
        }
        self.scene.advance_to(at);
    }

    /// Snapshot of the current instant for a renderer.
    pub fn frame(&self) -> SceneFrame {
        SceneFrame::capture(&self.scene)
    }

    /// Tear the scene down and hand it back.
    pub fn finish(mut self) -> Scene<A> {
        self.scene.teardown();
        self.scene
    }
}

/// Render the scene as it looks at `at` after replaying the script up to that instant.
#[tracing::instrument(skip(script, renderer), fields(at_ms = at.0))]
pub fn render_frame(
    script: &Script,
    at: SimTime,
    renderer: &mut dyn FrameRenderer,
) -> SwitchlightResult<FrameRGBA> {
    if at.0 > script.duration_ms {
        return Err(SwitchlightError::validation(format!(
            "at_ms {} is past the script duration of {} ms",
            at.0, script.duration_ms
        )));
    }
    let mut playback = Playback::new(script, TracingAudio)?;
    playback.advance_to(at);
    renderer.render(&playback.frame())
}

/// Render every frame of the script at its fps and stream them into `sink`.
///
/// Frame `i` shows the instant `fps.frame_time(i)`; frames cover `[0, duration_ms)`.
#[tracing::instrument(skip(script, renderer, sink))]
pub fn render_range(
    script: &Script,
    renderer: &mut dyn FrameRenderer,
    sink: &mut dyn FrameSink,
) -> SwitchlightResult<RenderStats> {
    let mut playback = Playback::new(script, TracingAudio)?;
    let frames_total = script.fps.frames_in(script.duration_ms);

    sink.begin(SinkConfig {
        width: script.viewport.width,
        height: script.viewport.height,
        fps: script.fps,
    })?;

    let mut stats = RenderStats {
        frames_total,
        frames_rendered: 0,
    };
    for i in 0..frames_total {
        playback.advance_to(script.fps.frame_time(i));
        let frame = renderer.render(&playback.frame())?;
        sink.push_frame(FrameIndex(i), &frame)?;
        stats.frames_rendered += 1;
    }
    sink.end()?;

    playback.finish();
    tracing::debug!(frames = stats.frames_rendered, "range rendered");
    Ok(stats)
}

/// Replay the whole script, tear the scene down and return its journal.
#[tracing::instrument(skip(script))]
pub fn trace(script: &Script) -> SwitchlightResult<Vec<SceneEvent>> {
    let mut playback = Playback::new(script, TracingAudio)?;
    playback.advance_to(SimTime(script.duration_ms));
    let scene = playback.finish();
    Ok(scene.journal().to_vec())
}

#[cfg(test)]
#[path = "../../tests/unit/session/playback.rs"]
mod tests;
