use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::debayer::types::RgbImageData;
use crate::image_pipeline::raw::types::BayerFrame;

/// Interpolates a full RGB image from a single-channel mosaic.
///
/// Output keeps the frame's geometry and value range.
pub trait Debayer {
    fn process(&self, frame: &BayerFrame) -> Result<RgbImageData>;
}
