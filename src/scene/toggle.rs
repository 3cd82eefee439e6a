use crate::foundation::core::{Point, Rect, Viewport};
use crate::scene::audio::AudioCue;

/// Rendered switch size in pixels (width, height).
pub const CONTROL_SIZE: (f64, f64) = (67.0, 100.0);
/// Inset of the switch from the top-right corner.
pub const CONTROL_PADDING: f64 = 16.0;
/// Lever rotation while on.
pub const LEVER_ANGLE_OPEN_DEG: f64 = -35.0;
/// Lever rotation while off.
pub const LEVER_ANGLE_CLOSED_DEG: f64 = 35.0;
/// Lever pivot in the 200x300 switch-plate coordinate space.
pub const LEVER_PIVOT: (f64, f64) = (100.0, 180.0);

/// Lever rotation for a given switch state.
pub fn lever_angle_deg(is_open: bool) -> f64 {
    if is_open {
        LEVER_ANGLE_OPEN_DEG
    } else {
        LEVER_ANGLE_CLOSED_DEG
    }
}

/// The switch's on/off state. Default is off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToggleState {
    is_open: bool,
}

/// Result of flipping the switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Toggled {
    /// State after the flip.
    pub is_open: bool,
    /// Cues to emit, in order, chosen by the target state.
    pub cues: [AudioCue; 2],
}

impl ToggleState {
    /// Current state.
    pub fn is_open(self) -> bool {
        self.is_open
    }

    /// Flip the switch.
    pub fn activate(&mut self) -> Toggled {
        let cues = if self.is_open {
            [AudioCue::CheerPause, AudioCue::SwitchOff]
        } else {
            [AudioCue::CheerPlay, AudioCue::SwitchOn]
        };
        self.is_open = !self.is_open;
        Toggled {
            is_open: self.is_open,
            cues,
        }
    }
}

/// Placement of the switch widget for a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToggleControl {
    bounds: Rect,
}

impl ToggleControl {
    /// Anchor the switch in the top-right corner of `viewport`.
    pub fn for_viewport(viewport: Viewport) -> Self {
        let (w, h) = CONTROL_SIZE;
        let x1 = f64::from(viewport.width) - CONTROL_PADDING;
        let y0 = CONTROL_PADDING;
        Self {
            bounds: Rect::new(x1 - w, y0, x1, y0 + h),
        }
    }

    /// Current screen rectangle.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Center of the screen rectangle.
    pub fn center(&self) -> Point {
        self.bounds.center()
    }

    /// Edge-inclusive containment, matching the click re-routing rule.
    pub fn contains(&self, p: Point) -> bool {
        let r = self.bounds;
        p.x >= r.x0 && p.x <= r.x1 && p.y >= r.y0 && p.y <= r.y1
    }
}

/// Topmost element under a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickTarget {
    /// The pointer graphic, which stacks above the switch.
    Indicator,
    /// The switch itself.
    Control,
    /// Anything else on the page.
    Backdrop,
}

/// What a click does to the switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickRoute {
    /// Landed on the switch; its own handler runs.
    Direct,
    /// Landed on another element inside the switch box; a click is synthesized on the switch.
    Synthesized,
    /// Outside the switch; nothing happens.
    Ignored,
}

/// Decide how a window-level click reaches the switch.
pub fn route_click(control: &ToggleControl, target: ClickTarget, at: Point) -> ClickRoute {
    match target {
        ClickTarget::Control => ClickRoute::Direct,
        ClickTarget::Indicator | ClickTarget::Backdrop if control.contains(at) => {
            ClickRoute::Synthesized
        }
        ClickTarget::Indicator | ClickTarget::Backdrop => ClickRoute::Ignored,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/toggle.rs"]
mod tests;
