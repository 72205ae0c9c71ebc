use image::{Rgb, RgbImage, Rgba, RgbaImage};
use ndarray::Array2;

use polymask_core::error::PolymaskError;
use polymask_core::io::image_io::{load_source, mask_to_rgb, save_mask_png};

#[test]
fn test_load_source_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.png");
    RgbImage::from_pixel(12, 7, Rgb([1, 2, 3])).save(&path).unwrap();

    let img = load_source(&path).unwrap();
    assert_eq!(img.dimensions(), (12, 7));
    assert_eq!(img.get_pixel(11, 6).0, [1, 2, 3]);
}

#[test]
fn test_load_source_converts_to_rgb() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("alpha.png");
    RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 40])).save(&path).unwrap();

    let img = load_source(&path).unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [10, 20, 30]);
}

#[test]
fn test_load_source_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_source(&dir.path().join("nope.png")).unwrap_err();
    assert!(matches!(err, PolymaskError::ImageError(_)));
}

#[test]
fn test_load_source_undecodable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.png");
    std::fs::write(&path, b"definitely not a png").unwrap();
    assert!(load_source(&path).is_err());
}

#[test]
fn test_mask_to_rgb_values() {
    let mut coverage = Array2::from_elem((3, 5), false);
    coverage[[1, 4]] = true;

    let img = mask_to_rgb(&coverage);
    assert_eq!(img.dimensions(), (5, 3));
    assert_eq!(img.get_pixel(4, 1).0, [255, 255, 255]);
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
}

#[test]
fn test_save_mask_png_is_three_channel() {
    let coverage = Array2::from_elem((6, 9), true);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mask.png");

    save_mask_png(&coverage, &path).unwrap();
    let loaded = image::open(&path).unwrap();
    assert_eq!(loaded.color(), image::ColorType::Rgb8);
    assert_eq!((loaded.width(), loaded.height()), (9, 6));
}
