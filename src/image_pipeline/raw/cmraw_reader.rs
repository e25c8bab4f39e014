//! CMRaw reader.
//!
//! Parses the fixed header, unpacks the 12-bit payload that follows it, and
//! assembles the samples into a [`BayerFrame`]. Any failure aborts the read;
//! nothing is retried.

use tracing::debug;

use crate::image_pipeline::common::config::{ConversionConfig, TruncationPolicy};
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::frame::assemble_frame;
use crate::image_pipeline::raw::header::{HEADER_LEN, MAX_DIMENSION, parse_header};
use crate::image_pipeline::raw::reader::RawImageReader;
use crate::image_pipeline::raw::types::{BayerFrame, PixelFormat};
use crate::image_pipeline::raw::unpack::unpack12_with_policy;

/// RAW image reader for CMRaw captures.
#[derive(Debug, Clone, Copy)]
pub struct CmrawReader {
    truncation: TruncationPolicy,
    validate_dimensions: bool,
}

impl CmrawReader {
    pub fn new(truncation: TruncationPolicy, validate_dimensions: bool) -> Self {
        Self {
            truncation,
            validate_dimensions,
        }
    }

    pub fn from_config(config: &ConversionConfig) -> Self {
        Self::new(config.truncation, config.validate_dimensions)
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        Ok(())
    }
}

impl Default for CmrawReader {
    fn default() -> Self {
        Self::from_config(&ConversionConfig::default())
    }
}

impl RawImageReader for CmrawReader {
    /// Reads and decodes a CMRaw capture from a byte array.
    ///
    /// This method:
    /// 1. Parses and validates the 164-byte header
    /// 2. Unpacks the payload into 12-bit samples, honouring the truncation policy
    /// 3. Checks the sample count against the header geometry
    ///
    /// # Arguments
    ///
    /// * `data` - Raw bytes of the whole `.cmr` file
    ///
    /// # Returns
    ///
    /// * `Ok(BayerFrame)` - Mosaic with `width * height` samples in `[0, 4095]`
    /// * `Err(ConversionError)` - Malformed header or payload
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cmraw_rs::image_pipeline::{CmrawReader, RawImageReader};
    ///
    /// let reader = CmrawReader::default();
    /// let raw_bytes = std::fs::read("capture.cmr").unwrap();
    /// let frame = reader.read_raw(&raw_bytes).unwrap();
    /// ```
    fn read_raw(&self, data: &[u8]) -> Result<BayerFrame> {
        debug!("Decoding CMRaw image, {} bytes", data.len());

        let header = parse_header(data)?;
        let width = header.width as usize;
        let height = header.height as usize;
        self.validate_dimensions(width, height)?;

        let payload = &data[HEADER_LEN..];
        let samples = unpack12_with_policy(payload, self.truncation)?;

        debug!(
            "Unpacked {} samples from {} payload bytes for {}x{} frame",
            samples.len(),
            payload.len(),
            width,
            height
        );

        assemble_frame(samples, width, height, PixelFormat::BayerRg12Packed)
    }
}
