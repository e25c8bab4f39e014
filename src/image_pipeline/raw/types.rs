//! RAW image data types

/// Pixel layouts written by the capture tool, by header code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Mono8,
    Mono12Packed,
    Mono12,
    Mono16,
    Rgb8,
    Rgb12Packed,
    Rgb12,
    Rgb16,
    BayerRg8,
    BayerRg12Packed,
    BayerRg12,
    BayerRg16,
}

impl PixelFormat {
    pub fn from_code(code: u8) -> Option<Self> {
        use PixelFormat::*;
        Some(match code {
            0 => Mono8,
            1 => Mono12Packed,
            2 => Mono12,
            3 => Mono16,
            4 => Rgb8,
            5 => Rgb12Packed,
            6 => Rgb12,
            7 => Rgb16,
            8 => BayerRg8,
            9 => BayerRg12Packed,
            10 => BayerRg12,
            11 => BayerRg16,
            _ => return None,
        })
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Significant bits per sample.
    pub fn bit_depth(self) -> u32 {
        use PixelFormat::*;
        match self {
            Mono8 | Rgb8 | BayerRg8 => 8,
            Mono12Packed | Mono12 | Rgb12Packed | Rgb12 | BayerRg12Packed | BayerRg12 => 12,
            Mono16 | Rgb16 | BayerRg16 => 16,
        }
    }

    /// Largest sample value, used as the normalization divisor.
    pub fn full_scale(self) -> u16 {
        ((1u32 << self.bit_depth()) - 1) as u16
    }

    pub fn is_bayer(self) -> bool {
        matches!(
            self,
            PixelFormat::BayerRg8
                | PixelFormat::BayerRg12Packed
                | PixelFormat::BayerRg12
                | PixelFormat::BayerRg16
        )
    }

    /// Whether this crate can unpack the payload. Only packed 12-bit Bayer is.
    pub fn is_decodable(self) -> bool {
        self == PixelFormat::BayerRg12Packed
    }
}

/// Single-channel Bayer mosaic, row-major, red at (0, 0).
#[derive(Debug, Clone)]
pub struct BayerFrame {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Raw sensor values, `width * height` of them
    pub data: Vec<u16>,
    /// Layout the samples were decoded from
    pub format: PixelFormat,
}

impl BayerFrame {
    pub fn bits_per_sample(&self) -> u32 {
        self.format.bit_depth()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u16> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u16]> {
        // chunks_exact panics on a zero chunk size
        self.data.chunks_exact(self.width.max(1))
    }
}
