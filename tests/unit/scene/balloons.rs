use super::*;

fn vp() -> Viewport {
    Viewport::new(1280, 720).unwrap()
}

#[test]
fn generates_exact_count_within_ranges() {
    let mut rng = Rng64::new(11);
    for count in [0, 1, 26, 200] {
        let balloons = generate_balloons(count, &mut rng);
        assert_eq!(balloons.len(), count as usize);
        for (i, b) in balloons.iter().enumerate() {
            assert_eq!(b.id, i as u32);
            assert!((0.0..100.0).contains(&b.horizontal_position));
            assert!((1.0..2.0).contains(&b.start_delay));
            assert!((10.0..20.0).contains(&b.rise_duration));
            assert!((1.0..2.0).contains(&b.swing_duration));
        }
    }
}

#[test]
fn remounts_rerandomize_with_same_count() {
    let mut rng = Rng64::new(12);
    let a = BalloonField::mount(26, SimTime(0), &mut rng);
    let b = BalloonField::mount(26, SimTime(9_000), &mut rng);
    assert_eq!(a.balloons().len(), 26);
    assert_eq!(b.balloons().len(), 26);
    let pa: Vec<f64> = a.balloons().iter().map(|b| b.horizontal_position).collect();
    let pb: Vec<f64> = b.balloons().iter().map(|b| b.horizontal_position).collect();
    assert_ne!(pa, pb);
}

#[test]
fn balloon_waits_below_screen_until_delay() {
    let b = Balloon {
        id: 0,
        horizontal_position: 50.0,
        start_delay: 1.5,
        rise_duration: 10.0,
        swing_duration: 1.0,
        color: BalloonColor::Red,
    };
    let pose = balloon_pose(&b, vp(), 1.0);
    assert_eq!(pose.top_left.y, 720.0 + 120.0 - 64.0);
    assert!(pose.top_left.y > 720.0 - 64.0);
}

#[test]
fn balloon_rises_and_loops() {
    let b = Balloon {
        id: 0,
        horizontal_position: 10.0,
        start_delay: 1.0,
        rise_duration: 10.0,
        swing_duration: 2.0,
        color: BalloonColor::Teal,
    };
    let early = balloon_pose(&b, vp(), 3.0).top_left.y;
    let late = balloon_pose(&b, vp(), 10.9).top_left.y;
    assert!(late < early);
    assert!(late < 0.0);

    // One full rise later the pose repeats.
    let again = balloon_pose(&b, vp(), 13.0).top_left.y;
    assert!((again - early).abs() < 1e-6);
}

#[test]
fn swing_stays_within_amplitude() {
    for i in 0..200 {
        let s = swing_phase(i as f64 * 0.037, 1.3);
        assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&s));
    }
    assert!((swing_phase(0.0, 2.0) + 1.0).abs() < 1e-6);
    assert!((swing_phase(1.0, 2.0) - 1.0).abs() < 1e-6);
}

#[test]
fn palette_colors_match_hex() {
    assert_eq!(BalloonColor::Teal.rgba(), Rgba::hex(0x4ECDC4));
    assert_eq!(BalloonColor::ALL.len(), 8);
}
