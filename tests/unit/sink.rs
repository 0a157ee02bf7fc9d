use std::path::PathBuf;

use super::*;
use crate::foundation::error::ErrorKind;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "zoomframes_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn prepare_creates_nested_dirs_without_leaving_probe() {
    let root = temp_dir("sink_nested");
    let dir = root.join("a").join("b");
    prepare_output_dir(&dir).unwrap();
    assert!(dir.is_dir());
    assert!(listing(&dir).is_empty());
    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn prepare_rejects_path_occupied_by_file() {
    let root = temp_dir("sink_file");
    std::fs::create_dir_all(&root).unwrap();
    let file = root.join("taken");
    std::fs::write(&file, "x").unwrap();

    let err = DirSink::create(&file).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PermissionDenied);
    assert!(err.to_string().contains("not writable"));
    std::fs::remove_dir_all(&root).ok();
}

#[cfg(unix)]
#[test]
fn prepare_rejects_read_only_dir() {
    use std::os::unix::fs::PermissionsExt as _;

    let dir = temp_dir("sink_readonly");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::set_permissions(&dir, std::fs::Permissions::from_mode(0o555)).unwrap();

    let err = prepare_output_dir(&dir).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PermissionDenied);

    std::fs::set_permissions(&dir, std::fs::Permissions::from_mode(0o755)).unwrap();
    assert!(listing(&dir).is_empty());
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn dir_sink_writes_named_frames_and_identical_repeats() {
    let dir = temp_dir("sink_frames");
    let mut sink = DirSink::create(&dir).unwrap();
    let canvas = Canvas::new(4, 6).unwrap();
    let frame = RgbImage::from_fn(4, 6, |x, y| image::Rgb([x as u8 * 40, y as u8 * 30, 9]));

    sink.begin(canvas).unwrap();
    sink.push_frame(FrameIndex(0), &frame).unwrap();
    sink.repeat_last(FrameIndex(1)).unwrap();
    sink.repeat_last(FrameIndex(2)).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.frames_written(), 3);
    assert_eq!(sink.dir(), dir.as_path());
    assert_eq!(
        listing(&dir),
        ["frame_0000.png", "frame_0001.png", "frame_0002.png"]
    );

    let first = std::fs::read(dir.join("frame_0000.png")).unwrap();
    assert_eq!(first, std::fs::read(dir.join("frame_0002.png")).unwrap());
    let decoded = image::load_from_memory(&first).unwrap().to_rgb8();
    assert_eq!(decoded.as_raw(), frame.as_raw());
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn write_failure_names_the_frame_path() {
    let dir = temp_dir("sink_write_fail");
    let mut sink = DirSink::create(&dir).unwrap();
    std::fs::remove_dir_all(&dir).unwrap();

    let frame = RgbImage::new(2, 2);
    let err = sink.push_frame(FrameIndex(7), &frame).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WriteFailure);
    assert!(err.to_string().contains("frame_0007.png"));
}

#[test]
fn repeat_before_push_is_an_error() {
    let dir = temp_dir("sink_repeat_empty");
    let mut sink = DirSink::create(&dir).unwrap();
    assert!(sink.repeat_last(FrameIndex(0)).is_err());
    std::fs::remove_dir_all(&dir).ok();

    let mut mem = InMemorySink::new();
    assert!(mem.repeat_last(FrameIndex(0)).is_err());
}

#[test]
fn in_memory_sink_captures_canvas_and_frames() {
    let mut sink = InMemorySink::new();
    let canvas = Canvas::new(2, 2).unwrap();
    sink.begin(canvas).unwrap();
    sink.push_frame(FrameIndex(0), &RgbImage::new(2, 2)).unwrap();
    sink.repeat_last(FrameIndex(1)).unwrap();
    assert_eq!(sink.canvas(), Some(canvas));
    assert_eq!(sink.frames().len(), 2);
    assert_eq!(sink.frames()[1].0, FrameIndex(1));
}
