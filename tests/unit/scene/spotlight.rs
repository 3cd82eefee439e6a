use super::*;

fn vp() -> Viewport {
    Viewport::new(1280, 720).unwrap()
}

#[test]
fn cursor_spotlight_reports_fixed_radii() {
    let bg = cursor_spotlight(Point::new(300.0, 200.0));
    let geo = bg.spotlight().unwrap();
    assert_eq!(geo.center, Point::new(300.0, 200.0));
    assert_eq!(geo.inner_radius, SPOTLIGHT_INNER_RADIUS);
    assert_eq!(geo.outer_radius, SPOTLIGHT_OUTER_RADIUS);
}

#[test]
fn cursor_spotlight_is_clear_inside_and_dark_outside() {
    let bg = cursor_spotlight(Point::new(300.0, 200.0));
    assert_eq!(bg.sample(Point::new(300.0, 200.0))[3], 0.0);
    assert_eq!(bg.sample(Point::new(379.0, 200.0))[3], 0.0);
    assert_eq!(bg.sample(Point::new(300.0, 360.0))[3], 1.0);

    let mid = bg.sample(Point::new(415.0, 200.0))[3];
    assert!((mid - 0.5).abs() < 1e-6);
}

#[test]
fn closed_fill_is_not_a_spotlight() {
    let bg = closed_fill();
    assert!(bg.spotlight().is_none());
    assert!((bg.sample(Point::new(5.0, 5.0))[3] - 0.95).abs() < 1e-6);
}

#[test]
fn open_glow_is_centered_ellipse() {
    let OverlayBackground::Radial(g) = open_glow(vp()) else {
        panic!("expected radial glow");
    };
    assert_eq!(g.center, Point::new(640.0, 360.0));
    assert_eq!(g.stops.len(), 5);
    assert!(open_glow(vp()).spotlight().is_none());

    // Same gradient distance along the horizontal and vertical half-axes.
    let right = g.distance(Point::new(640.0 + 320.0, 360.0));
    let down = g.distance(Point::new(640.0, 360.0 + 180.0));
    assert!((right - down).abs() < 1e-9);
}

#[test]
fn open_glow_interpolates_between_stops() {
    let OverlayBackground::Radial(g) = open_glow(vp()) else {
        panic!("expected radial glow");
    };
    assert!((g.color_at_distance(0.0)[3] - 0.4).abs() < 1e-6);
    assert!((g.color_at_distance(50.0)[3] - 0.35).abs() < 1e-6);
    assert!((g.color_at_distance(5000.0)[3] - 0.75).abs() < 1e-6);
}

#[test]
fn empty_gradient_samples_transparent() {
    let g = RadialGradient {
        center: Point::ZERO,
        shape: GradientShape::Circle,
        stops: vec![],
    };
    assert_eq!(g.sample(Point::new(1.0, 1.0)), [0.0; 4]);
}
