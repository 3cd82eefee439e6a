use crate::foundation::core::{Affine, Point, Rect};
use crate::foundation::math::pointing_angle_deg;

/// Edge length of the pointer graphic.
pub const INDICATOR_SIZE: f64 = 80.0;
/// Offset from the cursor to the graphic's top-left corner.
pub const INDICATOR_CURSOR_OFFSET: f64 = 50.0;

/// Hand-shaped pointer that trails the cursor and points at the switch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalIndicator {
    top_left: Point,
    angle_deg: f64,
    hidden: bool,
}

impl Default for DirectionalIndicator {
    fn default() -> Self {
        Self {
            top_left: Point::ZERO,
            angle_deg: 0.0,
            hidden: false,
        }
    }
}

impl DirectionalIndicator {
    /// Move next to `cursor` and turn towards `target`.
    pub fn follow(&mut self, cursor: Point, target: Point) {
        self.top_left = Point::new(
            cursor.x - INDICATOR_CURSOR_OFFSET,
            cursor.y - INDICATOR_CURSOR_OFFSET,
        );
        self.angle_deg = pointing_angle_deg(self.center(), target);
    }

    /// Show or hide the graphic. Position and rotation are kept.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// `true` while hidden.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Rotation in degrees.
    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    /// Layout box before rotation. The graphic is drawn rotated by [`Self::angle_deg`] about
    /// its center.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.top_left.x,
            self.top_left.y,
            self.top_left.x + INDICATOR_SIZE,
            self.top_left.y + INDICATOR_SIZE,
        )
    }

    /// Center of the graphic.
    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Hit test for clicks against the rotated box; hidden graphics never catch clicks.
    pub fn hit(&self, p: Point) -> bool {
        if self.hidden {
            return false;
        }
        let r = self.bounds();
        let local = Affine::rotate_about(-self.angle_deg.to_radians(), r.center()) * p;
        local.x >= r.x0 && local.x < r.x1 && local.y >= r.y0 && local.y < r.y1
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/indicator.rs"]
mod tests;
