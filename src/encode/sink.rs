use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{SwitchlightError, SwitchlightResult};
use crate::render::backend::FrameRGBA;
use std::path::{Path, PathBuf};

/// Configuration provided to a [`FrameSink`] at the start of a range render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames-per-second.
    pub fps: Fps,
}

/// Sink contract for consuming rendered frames in timeline order.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> SwitchlightResult<()>;
    /// Push one frame in strictly increasing timeline order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> SwitchlightResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> SwitchlightResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    /// `true` once `end` ran.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> SwitchlightResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> SwitchlightResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> SwitchlightResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Writes each frame as `frame_00000.png` into a directory.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    cfg: Option<SinkConfig>,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// Sink writing into `dir`, created on `begin` if missing.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cfg: None,
            written: Vec::new(),
        }
    }

    /// File name used for frame `idx`.
    pub fn file_name(idx: FrameIndex) -> String {
        format!("frame_{:05}.png", idx.0)
    }

    /// Paths written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> SwitchlightResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            SwitchlightError::encode(format!("create '{}': {e}", self.dir.display()))
        })?;
        self.cfg = Some(cfg);
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> SwitchlightResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| SwitchlightError::encode("push_frame called before begin"))?;
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(SwitchlightError::encode(format!(
                "frame {} is {}x{}, sink expects {}x{}",
                idx.0, frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        let path = self.dir.join(Self::file_name(idx));
        write_png(&path, frame)?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> SwitchlightResult<()> {
        tracing::debug!(frames = self.written.len(), dir = %self.dir.display(), "png sequence done");
        Ok(())
    }
}

/// Encode one frame as a straight-alpha PNG at `path`.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> SwitchlightResult<()> {
    let rgba = frame.to_straight_rgba8();
    image::save_buffer_with_format(
        path,
        &rgba,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| SwitchlightError::encode(format!("write '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
