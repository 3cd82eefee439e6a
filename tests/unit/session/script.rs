use super::*;

#[test]
fn minimal_script_fills_defaults() {
    let s = Script::from_json_str(
        r#"{"viewport":{"width":1024,"height":768},"duration_ms":1000}"#,
    )
    .unwrap();
    assert_eq!(s.fps, Fps { num: 30, den: 1 });
    assert_eq!(s.seed, 0);
    assert_eq!(s.balloon_count, 26);
    assert!(s.events.is_empty());
}

#[test]
fn events_parse_with_type_tag() {
    let s = Script::from_json_str(
        r#"{
            "viewport": {"width": 1024, "height": 768},
            "duration_ms": 2000,
            "events": [
                {"type": "pointer_move", "at_ms": 10, "x": 5.0, "y": 6.0},
                {"type": "click", "at_ms": 20, "x": 7.5, "y": 8.0}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(s.events.len(), 2);
    assert_eq!(s.events[1].at(), SimTime(20));
    assert_eq!(s.events[1].point(), Point::new(7.5, 8.0));
    assert!(matches!(s.events[0], InputEvent::PointerMove { .. }));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = Script::from_json_str(
        r#"{"viewport":{"width":1024,"height":768},"duration_ms":1000,"speed":2}"#,
    )
    .unwrap_err();
    assert!(matches!(err, SwitchlightError::Serde(_)));
}

#[test]
fn validation_rejects_bad_configuration() {
    let base = Script::sample();

    let mut s = base.clone();
    s.viewport.width = 0;
    assert!(matches!(s.validate(), Err(SwitchlightError::Validation(_))));

    let mut s = base.clone();
    s.viewport.height = 70_000;
    assert!(s.validate().is_err());

    let mut s = base.clone();
    s.fps.den = 0;
    assert!(s.validate().is_err());

    let mut s = base.clone();
    s.duration_ms = 0;
    assert!(s.validate().is_err());

    let mut s = base.clone();
    s.balloon_count = u32::MAX;
    assert!(matches!(s.validate(), Err(SwitchlightError::Validation(_))));
    s.balloon_count = MAX_BALLOON_COUNT;
    assert!(s.validate().is_ok());

    let mut s = base.clone();
    s.events = vec![
        InputEvent::Click {
            at_ms: 50,
            x: 1.0,
            y: 1.0,
        },
        InputEvent::Click {
            at_ms: 40,
            x: 1.0,
            y: 1.0,
        },
    ];
    assert!(s.validate().is_err());

    let mut s = base;
    s.events = vec![InputEvent::PointerMove {
        at_ms: 0,
        x: f64::NAN,
        y: 1.0,
    }];
    assert!(s.validate().is_err());
}

#[test]
fn equal_timestamps_are_allowed() {
    let mut s = Script::sample();
    s.events = vec![
        InputEvent::PointerMove {
            at_ms: 5,
            x: 1.0,
            y: 1.0,
        },
        InputEvent::Click {
            at_ms: 5,
            x: 1.0,
            y: 1.0,
        },
    ];
    assert!(s.validate().is_ok());
}

#[test]
fn sample_is_valid_and_round_trips_through_json() {
    let s = Script::sample();
    s.validate().unwrap();
    let json = serde_json::to_string(&s).unwrap();
    assert_eq!(Script::from_json_str(&json).unwrap(), s);
    assert_eq!(s.scene_options().seed, 2024);
}

#[test]
fn oversized_balloon_count_is_rejected_before_mount() {
    let err = Script::from_json_str(
        r#"{"viewport":{"width":1024,"height":768},"duration_ms":1000,"balloon_count":4294967295}"#,
    )
    .unwrap_err();
    assert!(matches!(err, SwitchlightError::Validation(_)));
}

#[test]
fn sample_pointer_path_survives_a_text_round_trip() {
    let s = Script::sample();
    let pretty = serde_json::to_string_pretty(&s).unwrap();
    let back = Script::from_json_str(&pretty).unwrap();
    for (a, b) in s.events.iter().zip(&back.events) {
        assert_eq!(a.point().x.to_bits(), b.point().x.to_bits());
        assert_eq!(a.point().y.to_bits(), b.point().y.to_bits());
    }

    let x = 976.4000000000001_f64;
    let json = serde_json::to_string(&x).unwrap();
    assert_eq!(serde_json::from_str::<f64>(&json).unwrap().to_bits(), x.to_bits());
}
