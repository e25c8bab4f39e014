use tracing::debug;

use crate::image_pipeline::debayer::RgbImageData;
use crate::image_pipeline::frame::types::NormalizedImage;

/// Scales demosaiced samples into `[0.0, 1.0]` by the full-scale value of
/// the image's pixel format (4095 for packed 12-bit).
///
/// This is a fixed linear scale: a sensor whose real white point sits below
/// full scale will not reach 1.0.
pub fn normalize(rgb: &RgbImageData) -> NormalizedImage {
    let full_scale = rgb.format.full_scale() as f32;
    debug!(
        format = ?rgb.format,
        bits = rgb.bits_per_sample(),
        full_scale,
        "Normalizing {}x{} image",
        rgb.width,
        rgb.height
    );

    NormalizedImage {
        width: rgb.width,
        height: rgb.height,
        data: rgb.data.iter().map(|&v| v as f32 / full_scale).collect(),
    }
}
