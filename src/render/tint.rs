//! Multiplicative icon tinting.

use image::RgbaImage;

use crate::types::Colour;

/// Tint an icon by scaling each colour channel by `tint / 255`.
///
/// Alpha is copied unchanged.
pub fn tint_icon(icon: &RgbaImage, tint: Colour) -> RgbaImage {
    let mut result = icon.clone();
    if tint.is_identity() {
        return result;
    }

    let [tr, tg, tb] = tint.to_rgb();
    for pixel in result.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        pixel.0 = [scale(r, tr), scale(g, tg), scale(b, tb), a];
    }
    result
}

/// `round(value * factor / 255)` in integer arithmetic.
fn scale(value: u8, factor: u8) -> u8 {
    ((value as u32 * factor as u32 + 127) / 255) as u8
}
