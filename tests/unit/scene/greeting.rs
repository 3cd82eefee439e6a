use super::*;
use crate::scene::audio::RecordingAudio;

fn scene() -> Scene<RecordingAudio> {
    let opts = SceneOptions {
        seed: 5,
        ..SceneOptions::new(Viewport::new(1280, 720).unwrap())
    };
    Scene::mount(opts, RecordingAudio::new())
}

#[test]
fn mounts_closed_and_journals_mount() {
    let s = scene();
    assert!(!s.is_open());
    assert!(s.balloons().is_none());
    assert_eq!(
        s.journal(),
        &[SceneEvent::Mounted {
            at_ms: 0,
            degraded: false
        }]
    );
    assert_eq!(s.notice(), None);
}

#[test]
fn click_on_control_toggles_with_cues() {
    let mut s = scene();
    let c = s.control().center();

    // The pointer graphic starts in the top-left corner, far from the switch.
    assert_eq!(s.click(SimTime(100), c), ClickRoute::Direct);
    assert!(s.is_open());
    assert_eq!(s.balloons().map(|b| b.balloons().len()), Some(26));
    assert_eq!(
        s.audio().kinds(),
        vec![AudioCue::CheerPlay, AudioCue::SwitchOn]
    );

    assert_eq!(s.click(SimTime(900), c), ClickRoute::Direct);
    assert!(!s.is_open());
    assert!(s.balloons().is_none());
    assert_eq!(
        s.audio().kinds(),
        vec![
            AudioCue::CheerPlay,
            AudioCue::SwitchOn,
            AudioCue::CheerPause,
            AudioCue::SwitchOff
        ]
    );
}

#[test]
fn click_through_pointer_graphic_is_rerouted() {
    let mut s = scene();
    let c = s.control().center();
    s.pointer_move(SimTime(10), c);
    assert_eq!(s.hit_test(c), ClickTarget::Indicator);
    assert_eq!(s.click(SimTime(20), c), ClickRoute::Synthesized);
    assert!(s.is_open());
}

#[test]
fn click_outside_is_ignored() {
    let mut s = scene();
    s.pointer_move(SimTime(10), Point::new(300.0, 300.0));
    assert_eq!(s.click(SimTime(20), Point::new(300.0, 300.0)), ClickRoute::Ignored);
    assert!(!s.is_open());
    assert!(s.audio().cues().is_empty());
}

#[test]
fn journal_records_bursts_and_close() {
    let mut s = scene();
    let c = s.control().center();
    s.click(SimTime(0), c);
    s.advance_to(SimTime(600));
    s.click(SimTime(600), c);
    s.advance_to(SimTime(6_000));

    let bursts = s
        .journal()
        .iter()
        .filter(|e| matches!(e, SceneEvent::Burst { .. }))
        .count();
    assert_eq!(bursts, 2);
    assert!(
        s.journal()
            .iter()
            .any(|e| matches!(e, SceneEvent::Closed { at_ms: 600 }))
    );
    assert_eq!(s.spotlight().active_timers(), 0);
}

#[test]
fn degraded_scene_ignores_input() {
    let opts = SceneOptions::new(Viewport::new(640, 900).unwrap());
    let mut s = Scene::mount(opts, RecordingAudio::new());
    assert_eq!(s.notice(), Some(SMALL_SCREEN_NOTICE));
    let c = s.control().center();
    assert_eq!(s.click(SimTime(5), c), ClickRoute::Ignored);
    s.pointer_move(SimTime(6), Point::new(10.0, 10.0));
    assert!(!s.is_open());
    assert!(s.spotlight().overlay().spotlight().is_none());
}

#[test]
fn teardown_cancels_everything() {
    let mut s = scene();
    let c = s.control().center();
    s.click(SimTime(0), c);
    s.advance_to(SimTime(300));
    s.teardown();
    assert!(s.is_torn_down());
    assert_eq!(s.spotlight().active_timers(), 0);
    assert!(s.spotlight().confetti().is_empty());
    assert!(s.balloons().is_none());

    let len = s.journal().len();
    s.advance_to(SimTime(3_000));
    assert_eq!(s.click(SimTime(3_100), c), ClickRoute::Ignored);
    assert_eq!(s.journal().len(), len);
}
