//! Image processing pipeline module
//!
//! This module provides a structured approach to decoding CMRaw captures,
//! with separate modules for RAW reading, frame assembly, debayering,
//! TIFF writing, and conversion orchestration.

pub mod raw;
pub mod frame;
pub mod debayer;
pub mod tiff;
pub mod conversions;
pub mod common;

use std::path::Path;

pub use common::{
    ConversionConfig,
    ConversionConfigBuilder,
    ConversionError,
    DemosaicAlgorithm,
    Result,
    TruncationPolicy,
};

pub use raw::{
    BayerFrame,
    CaptureInfo,
    CmrawReader,
    CmrawWriter,
    FrameHeader,
    Orientation,
    PixelFormat,
    RawImageReader,
    pack12,
    parse_header,
    unpack12,
};

pub use frame::{
    NormalizedImage,
    assemble_frame,
    normalize,
};

pub use debayer::{
    CpuDebayer,
    Debayer,
    RgbImageData,
};

pub use self::tiff::{
    TiffCompression,
    TiffWriter,
    StandardTiffWriter,
};

pub use conversions::{
    CmrawPipeline,
};

/// Decodes a CMRaw file with the default configuration.
pub fn load<P: AsRef<Path>>(path: P) -> Result<NormalizedImage> {
    CmrawPipeline::new(ConversionConfig::default()).decode_file(path)
}
