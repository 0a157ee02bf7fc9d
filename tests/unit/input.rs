use std::io::Cursor;
use std::path::PathBuf;

use super::*;
use crate::foundation::error::ErrorKind;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "zoomframes_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn png_bytes(img: image::DynamicImage) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn missing_path_is_not_found() {
    let tmp = temp_dir("input_missing");
    let err = resolve(&tmp.join("nope.png")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains("not found"));
    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn directory_is_invalid_input() {
    let tmp = temp_dir("input_dir");
    let err = resolve(&tmp).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(!err.to_string().contains("not found"));
    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn text_file_is_unreadable() {
    let tmp = temp_dir("input_text");
    for name in ["notes.txt", "fake.png"] {
        let path = tmp.join(name);
        std::fs::write(&path, "definitely not pixels\n").unwrap();
        let err = resolve(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnreadableImage, "{name}: {err}");
        assert!(err.to_string().contains("cannot identify"));
    }
    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn truncated_png_is_unreadable() {
    let tmp = temp_dir("input_truncated");
    let img = image::RgbImage::from_pixel(32, 32, image::Rgb([10, 20, 30]));
    let bytes = png_bytes(image::DynamicImage::ImageRgb8(img));
    let path = tmp.join("cut.png");
    std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

    let err = resolve(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnreadableImage, "{err}");
    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn rgba_source_is_normalized_to_rgb() {
    let tmp = temp_dir("input_rgba");
    let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([200, 100, 50, 7]));
    let path = tmp.join("alpha.png");
    std::fs::write(&path, png_bytes(image::DynamicImage::ImageRgba8(img))).unwrap();

    let rgb = resolve(&path).unwrap();
    assert_eq!(rgb.dimensions(), (3, 2));
    assert_eq!(rgb.get_pixel(2, 1).0, [200, 100, 50]);
    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn format_detected_from_contents() {
    let tmp = temp_dir("input_sniff");
    let img = image::GrayImage::from_pixel(4, 4, image::Luma([90]));
    let path = tmp.join("misnamed.jpg");
    std::fs::write(&path, png_bytes(image::DynamicImage::ImageLuma8(img))).unwrap();

    let rgb = resolve(&path).unwrap();
    assert_eq!(rgb.get_pixel(0, 0).0, [90, 90, 90]);
    std::fs::remove_dir_all(&tmp).ok();
}
