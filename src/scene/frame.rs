use crate::foundation::core::{Point, Rect, Rgba, Viewport};
use crate::scene::audio::AudioOut;
use crate::scene::balloons::BalloonPose;
use crate::scene::greeting::Scene;
use crate::scene::spotlight::OverlayBackground;
use crate::scene::toggle::lever_angle_deg;

/// Switch as drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwitchView {
    /// Screen rectangle.
    pub bounds: Rect,
    /// Lever rotation in degrees.
    pub lever_angle_deg: f64,
    /// On/off.
    pub is_open: bool,
}

/// Pointer graphic as drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorView {
    /// Screen rectangle before rotation.
    pub bounds: Rect,
    /// Rotation about the center, in degrees.
    pub angle_deg: f64,
}

/// Confetti piece as drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfettiView {
    /// Quad corners.
    pub quad: [Point; 4],
    /// Fill color with the piece's fade applied.
    pub color: Rgba,
}

/// Everything needed to draw one instant of a scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneFrame {
    /// Screen size.
    pub viewport: Viewport,
    /// Notice text when the scene is replaced on narrow screens.
    pub notice: Option<&'static str>,
    /// Switch.
    pub switch: SwitchView,
    /// Balloons, back to front.
    pub balloons: Vec<BalloonPose>,
    /// Full-screen overlay paint.
    pub overlay: OverlayBackground,
    /// Confetti, back to front.
    pub confetti: Vec<ConfettiView>,
    /// Pointer graphic, absent while hidden.
    pub indicator: Option<IndicatorView>,
}

impl SceneFrame {
    /// Capture `scene` at its current time.
    pub fn capture<A: AudioOut>(scene: &Scene<A>) -> Self {
        let viewport = scene.options().viewport;
        let spotlight = scene.spotlight();
        let indicator = spotlight.indicator();

        let balloons = scene
            .balloons()
            .map(|f| f.poses(viewport, scene.now()))
            .unwrap_or_default();
        let confetti = spotlight
            .confetti()
            .pieces()
            .iter()
            .map(|p| ConfettiView {
                quad: p.quad(),
                color: p.color().with_opacity(p.opacity()),
            })
            .collect();

        Self {
            viewport,
            notice: scene.notice(),
            switch: SwitchView {
                bounds: scene.control().bounds(),
                lever_angle_deg: lever_angle_deg(scene.is_open()),
                is_open: scene.is_open(),
            },
            balloons,
            overlay: spotlight.overlay().clone(),
            confetti,
            indicator: (!indicator.is_hidden()).then(|| IndicatorView {
                bounds: indicator.bounds(),
                angle_deg: indicator.angle_deg(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/frame.rs"]
mod tests;
