//! Types for debayering operations

use crate::image_pipeline::raw::types::PixelFormat;

/// RGB image data after debayering, in the sensor's native range
#[derive(Debug, Clone)]
pub struct RgbImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// RGB pixel data interleaved [R, G, B, R, G, B, ...]
    pub data: Vec<u16>,
    /// Layout of the mosaic this was interpolated from
    pub format: PixelFormat,
}

impl RgbImageData {
    pub fn bits_per_sample(&self) -> u32 {
        self.format.bit_depth()
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u16; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 3;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }
}
