use crate::foundation::core::{Fps, Point, SimTime, Viewport};
use crate::foundation::error::{SwitchlightError, SwitchlightResult};
use crate::scene::balloons::{DEFAULT_BALLOON_COUNT, MAX_BALLOON_COUNT};
use crate::scene::greeting::SceneOptions;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Input script: scene configuration plus a time-ordered list of pointer input.
///
/// This is the JSON-facing, human-edited boundary object. Call [`Script::validate`] before
/// replaying it; the loaders do so already.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Screen size.
    pub viewport: Viewport,
    /// Output frame rate for range renders.
    #[serde(default = "default_fps")]
    pub fps: Fps,
    /// Length of the timeline in milliseconds.
    pub duration_ms: u64,
    /// Seed for every random draw in the scene.
    #[serde(default)]
    pub seed: u64,
    /// Balloons per activation.
    #[serde(default = "default_balloon_count")]
    pub balloon_count: u32,
    /// Pointer input, sorted by `at_ms`.
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

fn default_fps() -> Fps {
    Fps { num: 30, den: 1 }
}

fn default_balloon_count() -> u32 {
    DEFAULT_BALLOON_COUNT
}

/// One scripted pointer event, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum InputEvent {
    /// Pointer moved.
    PointerMove {
        /// Virtual time.
        at_ms: u64,
        /// Horizontal position.
        x: f64,
        /// Vertical position.
        y: f64,
    },
    /// Primary button click.
    Click {
        /// Virtual time.
        at_ms: u64,
        /// Horizontal position.
        x: f64,
        /// Vertical position.
        y: f64,
    },
}

impl InputEvent {
    /// When the event happens.
    pub fn at(&self) -> SimTime {
        match *self {
            Self::PointerMove { at_ms, .. } | Self::Click { at_ms, .. } => SimTime(at_ms),
        }
    }

    /// Where the event happens.
    pub fn point(&self) -> Point {
        match *self {
            Self::PointerMove { x, y, .. } | Self::Click { x, y, .. } => Point::new(x, y),
        }
    }
}

impl Script {
    /// Parse and validate a script from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SwitchlightResult<Self> {
        let script: Self = serde_json::from_reader(r)?;
        script.validate()?;
        Ok(script)
    }

    /// Parse and validate a script from a JSON string.
    pub fn from_json_str(s: &str) -> SwitchlightResult<Self> {
        let script: Self = serde_json::from_str(s)?;
        script.validate()?;
        Ok(script)
    }

    /// Parse and validate a script from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SwitchlightResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SwitchlightError::validation(format!("open script JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check the script can be replayed and rendered.
    pub fn validate(&self) -> SwitchlightResult<()> {
        self.viewport.validate()?;
        Fps::new(self.fps.num, self.fps.den)?;
        if self.duration_ms == 0 {
            return Err(SwitchlightError::validation("duration_ms must be > 0"));
        }
        if self.balloon_count > MAX_BALLOON_COUNT {
            return Err(SwitchlightError::validation(format!(
                "balloon_count must be <= {MAX_BALLOON_COUNT}, got {}",
                self.balloon_count
            )));
        }
        let mut last = 0u64;
        for (i, ev) in self.events.iter().enumerate() {
            let at = ev.at().0;
            if at < last {
                return Err(SwitchlightError::validation(format!(
                    "events[{i}] at {at} ms is earlier than the previous event at {last} ms"
                )));
            }
            let p = ev.point();
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(SwitchlightError::validation(format!(
                    "events[{i}] has non-finite coordinates"
                )));
            }
            last = at;
        }
        Ok(())
    }

    /// Scene parameters this script mounts with.
    pub fn scene_options(&self) -> SceneOptions {
        SceneOptions {
            viewport: self.viewport,
            seed: self.seed,
            balloon_count: self.balloon_count,
        }
    }

    /// Demo script: wander toward the switch, flip it on, watch, flip it off.
    pub fn sample() -> Self {
        let viewport = Viewport {
            width: 1280,
            height: 720,
        };
        let switch = crate::scene::toggle::ToggleControl::for_viewport(viewport).center();
        let mut events = Vec::new();
        for i in 0..=10u32 {
            let t = f64::from(i) / 10.0;
            events.push(InputEvent::PointerMove {
                at_ms: 100 * u64::from(i),
                x: 200.0 + (switch.x - 260.0) * t,
                y: 600.0 + (switch.y + 60.0 - 600.0) * t,
            });
        }
        events.push(InputEvent::Click {
            at_ms: 1200,
            x: switch.x,
            y: switch.y,
        });
        events.push(InputEvent::Click {
            at_ms: 7500,
            x: switch.x,
            y: switch.y,
        });
        Self {
            viewport,
            fps: default_fps(),
            duration_ms: 8500,
            seed: 2024,
            balloon_count: DEFAULT_BALLOON_COUNT,
            events,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/script.rs"]
mod tests;
