//! Normalized image types

/// Demosaiced image with samples in `[0.0, 1.0]`.
#[derive(Debug, Clone)]
pub struct NormalizedImage {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// RGB pixel data interleaved [R, G, B, R, G, B, ...], row-major
    pub data: Vec<f32>,
}

impl NormalizedImage {
    /// `[r, g, b]` at column `x`, row `y`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[f32; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 3;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    /// Samples scaled to the full `u16` range, for 16-bit output.
    pub fn to_u16(&self) -> Vec<u16> {
        self.data
            .iter()
            .map(|&v| (v * u16::MAX as f32).round().clamp(0.0, u16::MAX as f32) as u16)
            .collect()
    }
}
