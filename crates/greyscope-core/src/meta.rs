//! Image metadata naming.

use image::ColorType;

/// Human-readable name for a decoded image's color model.
#[must_use]
pub fn color_model_name(color: ColorType) -> &'static str {
    match color {
        ColorType::L8 => "Gray",
        ColorType::L16 => "Gray16",
        ColorType::La8 => "GrayAlpha",
        ColorType::La16 => "GrayAlpha16",
        ColorType::Rgb8 => "RGB",
        ColorType::Rgba8 => "RGBA",
        ColorType::Rgb16 => "RGB16",
        ColorType::Rgba16 => "RGBA16",
        ColorType::Rgb32F => "RGB32F",
        ColorType::Rgba32F => "RGBA32F",
        _ => "Unknown",
    }
}
