use super::*;

fn vp() -> Viewport {
    Viewport::new(1280, 720).unwrap()
}

fn ctl() -> SpotlightController {
    SpotlightController::mount(vp(), Rng64::new(99))
}

#[test]
fn mount_enters_closed_with_dark_fill() {
    let c = ctl();
    assert!(!c.is_open());
    assert_eq!(c.overlay(), &closed_fill());
    assert_eq!(c.active_timers(), 0);
    assert!(!c.indicator().is_hidden());
}

#[test]
fn pointer_moves_drive_spotlight_only_while_closed() {
    let mut c = ctl();
    let target = Point::new(1230.0, 66.0);
    c.pointer_moved(Point::new(10.0, 20.0), target);
    let geo = c.overlay().spotlight().unwrap();
    assert_eq!(geo.center, Point::new(10.0, 20.0));

    c.enter_open(SimTime(100));
    let before = c.overlay().clone();
    let ind_before = *c.indicator();
    c.pointer_moved(Point::new(400.0, 400.0), target);
    assert_eq!(c.overlay(), &before);
    assert_eq!(c.indicator(), &ind_before);
    assert!(c.indicator().is_hidden());
}

#[test]
fn enter_open_twice_keeps_one_timer() {
    let mut c = ctl();
    assert!(c.enter_open(SimTime(0)));
    assert!(!c.enter_open(SimTime(100)));
    assert_eq!(c.active_timers(), 1);
    assert_eq!(c.opened_at(), Some(SimTime(0)));

    let ticks = c.advance_to(SimTime(1_000));
    assert_eq!(ticks.len(), 4);
    assert_eq!(c.bursts_emitted(), 8);
}

#[test]
fn closing_stops_bursts_and_clears_confetti() {
    let mut c = ctl();
    c.enter_open(SimTime(0));
    c.advance_to(SimTime(600));
    assert!(!c.confetti().is_empty());
    let emitted = c.bursts_emitted();

    assert!(c.enter_closed(SimTime(600)));
    assert_eq!(c.active_timers(), 0);
    assert!(c.confetti().is_empty());
    assert_eq!(c.overlay(), &closed_fill());

    assert!(c.advance_to(SimTime(10_000)).is_empty());
    assert_eq!(c.bursts_emitted(), emitted);
    assert!(c.confetti().is_empty());
}

#[test]
fn timer_self_cancels_after_duration() {
    let mut c = ctl();
    c.enter_open(SimTime(0));
    let ticks = c.advance_to(SimTime(4_999));
    assert_eq!(ticks.len(), 19);
    assert_eq!(c.active_timers(), 1);

    let ticks = c.advance_to(SimTime(5_000));
    assert_eq!(ticks, vec![Tick::Elapsed { at: SimTime(5_000) }]);
    assert_eq!(c.active_timers(), 0);
    assert!(c.is_open());
    assert_eq!(c.bursts_emitted(), 38);
    assert!(c.confetti().is_empty());

    c.advance_to(SimTime(7_000));
    assert!(c.confetti().is_empty());
    assert!(matches!(c.overlay(), OverlayBackground::Radial(_)));
}

#[test]
fn burst_origins_come_from_opposite_edges() {
    let mut c = ctl();
    c.enter_open(SimTime(0));
    c.advance_to(SimTime(250));
    let xs: Vec<f64> = c.confetti().pieces().iter().map(|p| p.position().x).collect();
    assert_eq!(xs.len(), 94);
    // No physics step has run since the burst, so pieces sit at their origins.
    let left = xs.iter().filter(|x| (128.0..384.0).contains(*x)).count();
    let right = xs.iter().filter(|x| (896.0..1152.0).contains(*x)).count();
    assert_eq!((left, right), (47, 47));
}

#[test]
fn teardown_releases_timer() {
    let mut c = ctl();
    c.enter_open(SimTime(0));
    c.advance_to(SimTime(300));
    c.teardown();
    assert_eq!(c.active_timers(), 0);
    assert!(c.confetti().is_empty());
    assert!(c.advance_to(SimTime(2_000)).is_empty());
}
