use image::RgbImage;

/// Convert an 8-bit RGB canvas to an egui ColorImage.
pub fn rgb_to_color_image(img: &RgbImage) -> egui::ColorImage {
    let (w, h) = img.dimensions();
    egui::ColorImage::from_rgb([w as usize, h as usize], img.as_raw())
}
