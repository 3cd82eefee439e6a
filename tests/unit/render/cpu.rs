use super::*;
use crate::foundation::core::{SimTime, Viewport};
use crate::scene::audio::RecordingAudio;
use crate::scene::greeting::{Scene, SceneOptions};

fn scene(w: u32, h: u32) -> Scene<RecordingAudio> {
    let opts = SceneOptions {
        seed: 11,
        ..SceneOptions::new(Viewport::new(w, h).unwrap())
    };
    Scene::mount(opts, RecordingAudio::new())
}

fn render(s: &Scene<RecordingAudio>) -> FrameRGBA {
    CpuRenderer::new()
        .render(&SceneFrame::capture(s))
        .unwrap()
}

#[test]
fn output_matches_viewport_and_is_premultiplied() {
    let f = render(&scene(800, 600));
    assert_eq!((f.width, f.height), (800, 600));
    assert_eq!(f.data.len(), 800 * 600 * 4);
    assert!(f.premultiplied);
}

#[test]
fn lights_off_darkens_the_room() {
    let f = render(&scene(1024, 768));
    let [r, g, b, a] = f.pixel(512, 384).unwrap();
    assert_eq!(a, 255);
    assert!(r < 20 && g < 20 && b < 20, "got {r},{g},{b}");
}

#[test]
fn lights_on_reveals_the_room() {
    let mut s = scene(1024, 768);
    let c = s.control().center();
    s.click(SimTime(100), c);
    let f = render(&s);
    let [r, _, _, a] = f.pixel(512, 384).unwrap();
    assert_eq!(a, 255);
    assert!(r > 200, "got {r}");
}

#[test]
fn switch_plate_is_drawn_above_the_overlay() {
    let s = scene(1024, 768);
    let b = s.control().bounds();
    let scale = (b.width() / 200.0).min(b.height() / 300.0);
    let x = b.x0 + (b.width() - 200.0 * scale) / 2.0 + 60.0 * scale;
    let y = b.y0 + (b.height() - 300.0 * scale) / 2.0 + 60.0 * scale;
    let f = render(&s);
    let [r, g, b, _] = f.pixel(x as u32, y as u32).unwrap();
    assert!(r > 200 && g > 200 && b > 200, "got {r},{g},{b}");
}

#[test]
fn narrow_screen_renders_plain_notice_backdrop() {
    let f = render(&scene(400, 300));
    assert_eq!(f.pixel(10, 10), Some([255, 255, 255, 255]));
    assert_eq!(f.pixel(399, 299), Some([255, 255, 255, 255]));
}

#[test]
fn renderer_reuses_context_across_sizes() {
    let mut r = CpuRenderer::new();
    let a = r.render(&SceneFrame::capture(&scene(800, 600))).unwrap();
    let b = r.render(&SceneFrame::capture(&scene(900, 500))).unwrap();
    let c = r.render(&SceneFrame::capture(&scene(800, 600))).unwrap();
    assert_eq!((b.width, b.height), (900, 500));
    assert_eq!(a.data, c.data);
}

#[test]
fn path_conversion_keeps_every_element() {
    let mut p = BezPath::new();
    p.move_to((0.0, 0.0));
    p.line_to((1.0, 0.0));
    p.quad_to((2.0, 1.0), (3.0, 0.0));
    p.curve_to((4.0, 1.0), (5.0, 1.0), (6.0, 0.0));
    p.close_path();
    assert_eq!(bezpath_to_cpu(&p).elements().len(), 5);
}

#[test]
fn confetti_frames_stay_fully_opaque() {
    let mut s = scene(1280, 720);
    let c = s.control().center();
    s.click(SimTime(0), c);
    for at in [1_000, 2_500, 4_000] {
        s.advance_to(SimTime(at));
        assert!(!s.spotlight().confetti().is_empty());
        let f = render(&s);
        let translucent = f.data.chunks_exact(4).filter(|px| px[3] != 255).count();
        assert_eq!(translucent, 0, "at {at} ms");
    }
}

fn plate_point(s: &Scene<RecordingAudio>, vx: f64, vy: f64) -> (u32, u32) {
    let b = s.control().bounds();
    let scale = (b.width() / 200.0).min(b.height() / 300.0);
    let x = b.x0 + (b.width() - 200.0 * scale) / 2.0 + vx * scale;
    let y = b.y0 + (b.height() - 300.0 * scale) / 2.0 + vy * scale;
    (x as u32, y as u32)
}

#[test]
fn switch_shows_its_state_on_the_plate_and_lamp() {
    let mut s = scene(1024, 768);
    let (mx, my) = plate_point(&s, 100.0, 56.0);
    let lamp = state_lamp_rect(s.control().bounds()).center();

    let closed = render(&s);
    let [r, _, _, _] = closed.pixel(mx, my).unwrap();
    assert!(r > 150, "idle on-mark got {r}");
    let [r, g, b, _] = closed.pixel(lamp.x as u32, lamp.y as u32).unwrap();
    assert!(r < 110 && g < 110 && b < 110, "off lamp got {r},{g},{b}");

    let c = s.control().center();
    s.click(SimTime(100), c);
    let open = render(&s);
    let [r, _, _, _] = open.pixel(mx, my).unwrap();
    assert!(r < 60, "inked on-mark got {r}");
    let [r, g, b, _] = open.pixel(lamp.x as u32, lamp.y as u32).unwrap();
    assert!(r > 230 && g > 180 && b < 130, "on lamp got {r},{g},{b}");
}
