use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "switchlight_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 2,
        height: 2,
        fps: Fps::new(30, 1).unwrap(),
    }
}

fn frame(w: u32, h: u32) -> FrameRGBA {
    FrameRGBA {
        width: w,
        height: h,
        data: vec![128; (w * h * 4) as usize],
        premultiplied: true,
    }
}

#[test]
fn in_memory_sink_collects_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &frame(2, 2)).unwrap();
    sink.push_frame(FrameIndex(1), &frame(2, 2)).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.config(), Some(cfg()));
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1]);
    assert!(sink.is_ended());
}

#[test]
fn file_names_are_zero_padded() {
    assert_eq!(PngSequenceSink::file_name(FrameIndex(7)), "frame_00007.png");
    assert_eq!(PngSequenceSink::file_name(FrameIndex(12345)), "frame_12345.png");
}

#[test]
fn png_sequence_writes_decodable_files() {
    let dir = temp_dir("png_sequence");
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &frame(2, 2)).unwrap();
    sink.end().unwrap();

    let path = dir.join("frame_00000.png");
    assert_eq!(sink.written(), &[path.clone()]);
    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (2, 2));
    // 128 premultiplied at alpha 128 is full intensity straight.
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 128]);
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn png_sequence_rejects_size_mismatch_and_missing_begin() {
    let dir = temp_dir("png_mismatch");
    let mut sink = PngSequenceSink::new(&dir);
    assert!(matches!(
        sink.push_frame(FrameIndex(0), &frame(2, 2)),
        Err(SwitchlightError::Encode(_))
    ));
    sink.begin(cfg()).unwrap();
    assert!(matches!(
        sink.push_frame(FrameIndex(0), &frame(3, 2)),
        Err(SwitchlightError::Encode(_))
    ));
    std::fs::remove_dir_all(&dir).unwrap();
}
