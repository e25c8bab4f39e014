//! CMRaw header parsing.
//!
//! The header is a packed little-endian record occupying the first
//! [`HEADER_LEN`] bytes of the file:
//!
//! - 0x00: magic `CMVi`
//! - 0x04: pixel format code
//! - 0x05: orientation (degrees counter-clockwise, in quarter turns)
//! - 0x08: width, u16
//! - 0x0A: height, u16
//! - 0x0C: capture timestamp, u64 unix seconds
//! - 0x14: shutter (us), gain (dB), focal length (mm), pixel pitch (um), f32 each
//! - 0x24: reserved
//! - 0x44: camera make, camera model, capture software, 32 bytes each

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::raw::types::PixelFormat;

/// Size of the fixed header region. Payload starts here.
pub const HEADER_LEN: usize = 164;

/// Header magic, `0x69564D43` little-endian.
pub const MAGIC: [u8; 4] = *b"CMVi";

/// Largest width or height the capture tool will write.
pub const MAX_DIMENSION: usize = 32767;

const TEXT_LEN: usize = 32;
const MAKE_OFFSET: usize = 68;
const MODEL_OFFSET: usize = MAKE_OFFSET + TEXT_LEN;
const SOFTWARE_OFFSET: usize = MODEL_OFFSET + TEXT_LEN;

/// Sensor orientation, counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
    /// Code outside the known range, kept as-is.
    Unknown(u8),
}

impl Orientation {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Orientation::Deg0,
            1 => Orientation::Deg90,
            2 => Orientation::Deg180,
            3 => Orientation::Deg270,
            other => Orientation::Unknown(other),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Orientation::Deg0 => 0,
            Orientation::Deg90 => 1,
            Orientation::Deg180 => 2,
            Orientation::Deg270 => 3,
            Orientation::Unknown(code) => code,
        }
    }
}

/// Capture metadata that rides along with the frame geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptureInfo {
    pub orientation: Orientation,
    /// Unix time of the capture, in seconds
    pub timestamp: u64,
    pub shutter_us: f32,
    pub gain_db: f32,
    pub focal_len_mm: f32,
    pub pixel_pitch_um: f32,
    pub camera_make: String,
    pub camera_model: String,
    pub capture_software: String,
}

/// Validated CMRaw header.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameHeader {
    pub magic: [u8; 4],
    /// Raw pixel format code, always a decodable format once parsed
    pub pixel_format: u8,
    pub width: u16,
    pub height: u16,
    pub capture: CaptureInfo,
}

impl FrameHeader {
    /// Header for a packed 12-bit Bayer frame with empty capture metadata.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            magic: MAGIC,
            pixel_format: PixelFormat::BayerRg12Packed.code(),
            width,
            height,
            capture: CaptureInfo::default(),
        }
    }

    /// Decoded pixel format. `None` only for headers built by hand with an unknown code.
    pub fn format(&self) -> Option<PixelFormat> {
        PixelFormat::from_code(self.pixel_format)
    }

    /// Number of samples the payload must hold.
    pub fn sample_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Serializes the header into its on-disk layout.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        let info = &self.capture;

        buf[0..4].copy_from_slice(&self.magic);
        buf[4] = self.pixel_format;
        buf[5] = info.orientation.code();
        buf[8..10].copy_from_slice(&self.width.to_le_bytes());
        buf[10..12].copy_from_slice(&self.height.to_le_bytes());
        buf[12..20].copy_from_slice(&info.timestamp.to_le_bytes());
        buf[20..24].copy_from_slice(&info.shutter_us.to_le_bytes());
        buf[24..28].copy_from_slice(&info.gain_db.to_le_bytes());
        buf[28..32].copy_from_slice(&info.focal_len_mm.to_le_bytes());
        buf[32..36].copy_from_slice(&info.pixel_pitch_um.to_le_bytes());
        write_text(&mut buf[MAKE_OFFSET..MODEL_OFFSET], &info.camera_make);
        write_text(&mut buf[MODEL_OFFSET..SOFTWARE_OFFSET], &info.camera_model);
        write_text(&mut buf[SOFTWARE_OFFSET..HEADER_LEN], &info.capture_software);

        buf
    }
}

/// Parses and validates the header at the start of `data`.
///
/// Fails with [`ConversionError::TruncatedInput`] if `data` is shorter than
/// [`HEADER_LEN`], [`ConversionError::InvalidFormat`] on a magic mismatch and
/// [`ConversionError::UnsupportedFormat`] for any pixel format other than
/// packed 12-bit Bayer.
pub fn parse_header(data: &[u8]) -> Result<FrameHeader> {
    let hdr: &[u8; HEADER_LEN] = data
        .get(..HEADER_LEN)
        .and_then(|h| h.try_into().ok())
        .ok_or(ConversionError::TruncatedInput {
            expected: HEADER_LEN,
            actual: data.len(),
        })?;

    let magic = [hdr[0], hdr[1], hdr[2], hdr[3]];
    if magic != MAGIC {
        return Err(ConversionError::InvalidFormat { magic });
    }

    let pixel_format = hdr[4];
    match PixelFormat::from_code(pixel_format) {
        Some(format) if format.is_decodable() => {}
        _ => return Err(ConversionError::UnsupportedFormat(pixel_format)),
    }

    let width = u16::from_le_bytes([hdr[8], hdr[9]]);
    let height = u16::from_le_bytes([hdr[10], hdr[11]]);

    let capture = CaptureInfo {
        orientation: Orientation::from_code(hdr[5]),
        timestamp: u64::from_le_bytes(le_array(hdr, 12)),
        shutter_us: f32::from_le_bytes(le_array(hdr, 20)),
        gain_db: f32::from_le_bytes(le_array(hdr, 24)),
        focal_len_mm: f32::from_le_bytes(le_array(hdr, 28)),
        pixel_pitch_um: f32::from_le_bytes(le_array(hdr, 32)),
        camera_make: read_text(&hdr[MAKE_OFFSET..MODEL_OFFSET]),
        camera_model: read_text(&hdr[MODEL_OFFSET..SOFTWARE_OFFSET]),
        capture_software: read_text(&hdr[SOFTWARE_OFFSET..HEADER_LEN]),
    };

    debug!(
        width,
        height,
        pixel_format,
        orientation = ?capture.orientation,
        "Parsed CMRaw header"
    );

    Ok(FrameHeader {
        magic,
        pixel_format,
        width,
        height,
        capture,
    })
}

fn le_array<const N: usize>(hdr: &[u8; HEADER_LEN], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&hdr[offset..offset + N]);
    out
}

fn read_text(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}

// Truncates to the field, leaving at least one NUL terminator.
fn write_text(field: &mut [u8], text: &str) {
    let mut len = text.len().min(field.len() - 1);
    while !text.is_char_boundary(len) {
        len -= 1;
    }
    field[..len].copy_from_slice(&text.as_bytes()[..len]);
}
