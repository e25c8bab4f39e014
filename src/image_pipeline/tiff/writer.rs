use std::io::Write;
use crate::image_pipeline::common::config::ConversionConfig;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::frame::types::NormalizedImage;
use crate::image_pipeline::raw::types::BayerFrame;

pub trait TiffWriter {
    /// Writes the undemosaiced mosaic as single-channel 16-bit.
    fn write_bayer_tiff(&self, frame: &BayerFrame, output: &mut dyn Write, config: &ConversionConfig) -> Result<()>;
    /// Writes a normalized image as 16-bit RGB.
    fn write_rgb_tiff(&self, image: &NormalizedImage, output: &mut dyn Write, config: &ConversionConfig) -> Result<()>;
}
