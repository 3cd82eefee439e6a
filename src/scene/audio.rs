use crate::foundation::core::SimTime;

/// Sound effects the scene asks for. Playback itself lives outside the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioCue {
    /// Short "click on" effect.
    SwitchOn,
    /// Short "click off" effect.
    SwitchOff,
    /// Start the applause/cheer track.
    CheerPlay,
    /// Pause the applause/cheer track.
    CheerPause,
}

/// Receiver of audio cues, in virtual-clock order.
pub trait AudioOut {
    /// Deliver one cue emitted at `at`.
    fn cue(&mut self, at: SimTime, cue: AudioCue);
}

/// Keeps every cue for later inspection.
#[derive(Debug, Default, Clone)]
pub struct RecordingAudio {
    cues: Vec<(SimTime, AudioCue)>,
}

impl RecordingAudio {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cues received so far.
    pub fn cues(&self) -> &[(SimTime, AudioCue)] {
        &self.cues
    }

    /// Cue kinds only, dropping timestamps.
    pub fn kinds(&self) -> Vec<AudioCue> {
        self.cues.iter().map(|(_, c)| *c).collect()
    }
}

impl AudioOut for RecordingAudio {
    fn cue(&mut self, at: SimTime, cue: AudioCue) {
        self.cues.push((at, cue));
    }
}

/// Logs cues through `tracing` and drops them.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAudio;

impl AudioOut for TracingAudio {
    fn cue(&mut self, at: SimTime, cue: AudioCue) {
        tracing::info!(at_ms = at.0, ?cue, "audio cue");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/audio.rs"]
mod tests;
