use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgba, Vec2};
use crate::foundation::error::{SwitchlightError, SwitchlightResult};
use crate::render::backend::{FrameRGBA, FrameRenderer};
use crate::render::composite::{force_opaque, over_in_place, overlay_in_place};
use crate::scene::balloons::{BALLOON_SIZE, BalloonPose};
use crate::scene::frame::{ConfettiView, IndicatorView, SceneFrame, SwitchView};
use crate::scene::toggle::LEVER_PIVOT;
use kurbo::Shape;

const BACKDROP: Rgba = Rgba::hex(0xFFF4E6);
const NOTICE_BACKDROP: Rgba = Rgba::hex(0xFFFFFF);
const INK: Rgba = Rgba::hex(0x111111);
const PLATE: Rgba = Rgba::hex(0xFFFFFF);
const MARK_IDLE: Rgba = Rgba::hex(0xBBBBBB);
const LAMP_ON: Rgba = Rgba::hex(0xFFD54F);
const LAMP_OFF: Rgba = Rgba::hex(0x555555);
const BUNTING: [Rgba; 4] = [
    Rgba::hex(0xE85D75),
    Rgba::hex(0xF6C445),
    Rgba::hex(0x4ECDC4),
    Rgba::hex(0x8E7CC3),
];
const CAKE: [Rgba; 3] = [
    Rgba::hex(0xF7C5D0),
    Rgba::hex(0xFBE3E8),
    Rgba::hex(0xFFF8E7),
];
const FLAME: Rgba = Rgba::hex(0xFFB347);

/// Switch plate design space.
const PLATE_VIEWBOX: (f64, f64) = (200.0, 300.0);
const TOLERANCE: f64 = 0.1;

/// CPU renderer powered by `vello_cpu` for shapes; the overlay is composited per pixel.
///
/// Layer order, back to front: backdrop, confetti, overlay, balloons, switch, pointer graphic.
pub struct CpuRenderer {
    ctx: Option<vello_cpu::RenderContext>,
}

impl Default for CpuRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuRenderer {
    /// Fresh renderer; the raster context is created on first use.
    pub fn new() -> Self {
        Self { ctx: None }
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut vello_cpu::RenderContext) -> SwitchlightResult<R>,
    ) -> SwitchlightResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(&mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    fn raster_pass(
        &mut self,
        width: u16,
        height: u16,
        draw: impl FnOnce(&mut vello_cpu::RenderContext),
    ) -> SwitchlightResult<vello_cpu::Pixmap> {
        self.with_ctx_mut(width, height, |ctx| {
            draw(ctx);
            let mut pixmap = vello_cpu::Pixmap::new(width, height);
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(pixmap)
        })
    }
}

impl FrameRenderer for CpuRenderer {
    fn render(&mut self, frame: &SceneFrame) -> SwitchlightResult<FrameRGBA> {
        let width: u16 = frame
            .viewport
            .width
            .try_into()
            .map_err(|_| SwitchlightError::render("frame width exceeds u16"))?;
        let height: u16 = frame
            .viewport
            .height
            .try_into()
            .map_err(|_| SwitchlightError::render("frame height exceeds u16"))?;
        let screen = frame.viewport.rect();

        if frame.notice.is_some() {
            let pixmap = self.raster_pass(width, height, |ctx| {
                fill_rect(ctx, screen, Affine::IDENTITY, NOTICE_BACKDROP);
            })?;
            return Ok(readback(frame, &pixmap));
        }

        let mut base = self.raster_pass(width, height, |ctx| {
            draw_backdrop(ctx, screen);
            for piece in &frame.confetti {
                draw_confetti(ctx, piece);
            }
        })?;
        // The backdrop covers the screen; keep the room opaque despite raster rounding.
        force_opaque(base.data_as_u8_slice_mut());
        overlay_in_place(
            base.data_as_u8_slice_mut(),
            frame.viewport.width,
            frame.viewport.height,
            &frame.overlay,
        )?;

        let top = self.raster_pass(width, height, |ctx| {
            for pose in &frame.balloons {
                draw_balloon(ctx, pose);
            }
            draw_switch(ctx, &frame.switch);
            if let Some(ind) = &frame.indicator {
                draw_indicator(ctx, ind);
            }
        })?;
        over_in_place(base.data_as_u8_slice_mut(), top.data_as_u8_slice())?;

        Ok(readback(frame, &base))
    }
}

fn readback(frame: &SceneFrame, pixmap: &vello_cpu::Pixmap) -> FrameRGBA {
    FrameRGBA {
        width: frame.viewport.width,
        height: frame.viewport.height,
        data: pixmap.data_as_u8_slice().to_vec(),
        premultiplied: true,
    }
}

fn draw_backdrop(ctx: &mut vello_cpu::RenderContext, screen: Rect) {
    fill_rect(ctx, screen, Affine::IDENTITY, BACKDROP);

    // Bunting string of pennants across the top.
    let w = screen.width();
    let pennant = 48.0;
    let count = (w / pennant).ceil() as usize;
    for i in 0..count {
        let x = i as f64 * pennant;
        let sag = 18.0 * (std::f64::consts::PI * (x + pennant / 2.0) / w).sin();
        let mut p = BezPath::new();
        p.move_to((x + 4.0, 8.0 + sag));
        p.line_to((x + pennant - 4.0, 8.0 + sag));
        p.line_to((x + pennant / 2.0, 52.0 + sag));
        p.close_path();
        fill_path(ctx, &p, Affine::IDENTITY, BUNTING[i % BUNTING.len()]);
    }

    // Three-tier cake in the middle of the room.
    let c = screen.center();
    let tiers = [(220.0, 70.0), (160.0, 60.0), (100.0, 50.0)];
    let mut bottom = c.y + 120.0;
    for (i, (tw, th)) in tiers.iter().enumerate() {
        let r = Rect::new(c.x - tw / 2.0, bottom - th, c.x + tw / 2.0, bottom);
        fill_shape(ctx, &r.to_rounded_rect(10.0), Affine::IDENTITY, CAKE[i]);
        bottom -= th;
    }
    let candle = Rect::new(c.x - 5.0, bottom - 36.0, c.x + 5.0, bottom);
    fill_rect(ctx, candle, Affine::IDENTITY, BUNTING[0]);
    let flame = kurbo::Ellipse::new((c.x, bottom - 46.0), (6.0, 10.0), 0.0);
    fill_shape(ctx, &flame, Affine::IDENTITY, FLAME);
}

fn draw_confetti(ctx: &mut vello_cpu::RenderContext, piece: &ConfettiView) {
    let [a, b, c, d] = piece.quad;
    let mut p = BezPath::new();
    p.move_to(a);
    p.line_to(b);
    p.line_to(c);
    p.line_to(d);
    p.close_path();
    fill_path(ctx, &p, Affine::IDENTITY, piece.color);
}

fn draw_balloon(ctx: &mut vello_cpu::RenderContext, pose: &BalloonPose) {
    let size = BALLOON_SIZE;
    let origin = pose.top_left.to_vec2();
    let center = pose.top_left + Vec2::new(size / 2.0, size / 2.0);
    let tr = Affine::rotate_about(pose.tilt_deg.to_radians(), center) * Affine::translate(origin);
    let color = pose.color.rgba();

    let body = kurbo::Ellipse::new((size / 2.0, size * 0.4), (size * 0.36, size * 0.4), 0.0);
    fill_shape(ctx, &body, tr, color);

    let mut knot = BezPath::new();
    knot.move_to((size / 2.0, size * 0.78));
    knot.line_to((size / 2.0 - 5.0, size * 0.86));
    knot.line_to((size / 2.0 + 5.0, size * 0.86));
    knot.close_path();
    fill_path(ctx, &knot, tr, color);

    let string = Rect::new(size / 2.0 - 0.75, size * 0.86, size / 2.0 + 0.75, size);
    fill_rect(ctx, string, tr, INK);

    let shine = kurbo::Ellipse::new((size * 0.38, size * 0.24), (4.0, 7.0), -0.5);
    fill_shape(ctx, &shine, tr, Rgba::WHITE.with_opacity(0.6));
}

fn draw_switch(ctx: &mut vello_cpu::RenderContext, sw: &SwitchView) {
    // Uniform "meet" scale of the 200x300 design into the control box.
    let (vw, vh) = PLATE_VIEWBOX;
    let scale = (sw.bounds.width() / vw).min(sw.bounds.height() / vh);
    let offset = Vec2::new(
        sw.bounds.x0 + (sw.bounds.width() - vw * scale) / 2.0,
        sw.bounds.y0 + (sw.bounds.height() - vh * scale) / 2.0,
    );
    let tr = Affine::translate(offset) * Affine::scale(scale);

    let mut depth = BezPath::new();
    depth.move_to((20.0, 10.0));
    depth.line_to((15.0, 15.0));
    depth.line_to((15.0, 285.0));
    depth.line_to((20.0, 290.0));
    depth.close_path();
    fill_path(ctx, &depth, tr, INK);

    let plate = Rect::new(20.0, 10.0, 180.0, 290.0);
    fill_shape(ctx, &plate.to_rounded_rect(8.0), tr, INK);
    fill_shape(ctx, &plate.inset(-4.0).to_rounded_rect(6.0), tr, PLATE);

    for (cx, cy) in [(40.0, 30.0), (160.0, 30.0), (40.0, 270.0), (160.0, 270.0)] {
        fill_shape(ctx, &kurbo::Circle::new((cx, cy), 7.5), tr, INK);
        fill_shape(ctx, &kurbo::Circle::new((cx, cy), 4.5), tr, PLATE);
    }

    let slot = Rect::new(70.0, 90.0, 130.0, 210.0);
    fill_shape(ctx, &slot.to_rounded_rect(6.0), tr, INK);
    fill_shape(ctx, &slot.inset(-3.0).to_rounded_rect(4.0), tr, Rgba::hex(0xDDDDDD));

    let pivot = Point::new(LEVER_PIVOT.0, LEVER_PIVOT.1);
    let lever_tr = tr * Affine::rotate_about(sw.lever_angle_deg.to_radians(), pivot);
    let lever = Rect::new(88.0, 100.0, 112.0, 180.0);
    fill_shape(ctx, &lever.to_rounded_rect(10.0), lever_tr, INK);
    fill_shape(ctx, &lever.inset(-3.0).to_rounded_rect(8.0), lever_tr, PLATE);

    // "I" above the slot marks on, "O" below marks off; the active mark is inked.
    let (on_mark, off_mark) = if sw.is_open {
        (INK, MARK_IDLE)
    } else {
        (MARK_IDLE, INK)
    };
    fill_shape(
        ctx,
        &Rect::new(95.0, 44.0, 105.0, 70.0).to_rounded_rect(3.0),
        tr,
        on_mark,
    );
    fill_shape(ctx, &kurbo::Circle::new((100.0, 240.0), 12.0), tr, off_mark);
    fill_shape(ctx, &kurbo::Circle::new((100.0, 240.0), 7.0), tr, PLATE);

    // State lamp under the control.
    let lamp = if sw.is_open { LAMP_ON } else { LAMP_OFF };
    fill_shape(
        ctx,
        &state_lamp_rect(sw.bounds).to_rounded_rect(3.0),
        Affine::IDENTITY,
        lamp,
    );
}

/// Screen rectangle of the on/off lamp drawn below the switch.
fn state_lamp_rect(bounds: Rect) -> Rect {
    let cx = bounds.center().x;
    Rect::new(cx - 14.0, bounds.y1 + 6.0, cx + 14.0, bounds.y1 + 12.0)
}

fn draw_indicator(ctx: &mut vello_cpu::RenderContext, ind: &IndicatorView) {
    let b = ind.bounds;
    let tr = Affine::rotate_about(ind.angle_deg.to_radians(), b.center())
        * Affine::translate(b.origin().to_vec2());

    // Up-pointing arrow in an 80x80 box.
    let mut arrow = BezPath::new();
    arrow.move_to((40.0, 6.0));
    arrow.line_to((66.0, 36.0));
    arrow.line_to((50.0, 36.0));
    arrow.line_to((50.0, 74.0));
    arrow.line_to((30.0, 74.0));
    arrow.line_to((30.0, 36.0));
    arrow.line_to((14.0, 36.0));
    arrow.close_path();
    fill_path(ctx, &arrow, tr, INK);

    let mut inner = BezPath::new();
    inner.move_to((40.0, 14.0));
    inner.line_to((58.0, 33.0));
    inner.line_to((46.0, 33.0));
    inner.line_to((46.0, 70.0));
    inner.line_to((34.0, 70.0));
    inner.line_to((34.0, 33.0));
    inner.line_to((22.0, 33.0));
    inner.close_path();
    fill_path(ctx, &inner, tr, PLATE);
}

fn set_paint(ctx: &mut vello_cpu::RenderContext, color: Rgba) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        color.r,
        color.g,
        color.b,
        color.alpha_u8(),
    ));
}

fn fill_rect(ctx: &mut vello_cpu::RenderContext, r: Rect, tr: Affine, color: Rgba) {
    ctx.set_transform(affine_to_cpu(tr));
    set_paint(ctx, color);
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1));
}

fn fill_shape(ctx: &mut vello_cpu::RenderContext, shape: &impl Shape, tr: Affine, color: Rgba) {
    fill_path(ctx, &shape.to_path(TOLERANCE), tr, color);
}

fn fill_path(ctx: &mut vello_cpu::RenderContext, path: &BezPath, tr: Affine, color: Rgba) {
    if color.a <= 0.0 {
        return;
    }
    ctx.set_transform(affine_to_cpu(tr));
    set_paint(ctx, color);
    ctx.fill_path(&bezpath_to_cpu(path));
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
