//! Decode and conversion configuration types

use crate::image_pipeline::tiff::TiffCompression;

/// What to do with payload bytes that do not complete a 3-byte group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TruncationPolicy {
    /// Drop the incomplete group and decode the complete pairs.
    #[default]
    Lenient,
    /// Fail with [`ConversionError::TrailingBytes`](super::ConversionError::TrailingBytes).
    Strict,
}

/// Interpolation used by the demosaic step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DemosaicAlgorithm {
    /// Each pixel keeps only its own filter colour
    None,
    NearestNeighbour,
    /// Bilinear interpolation (default)
    #[default]
    Linear,
    Cubic,
}

/// Configuration for CMRaw decoding and TIFF conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Handling of a payload whose length is not a multiple of 3
    pub truncation: TruncationPolicy,
    /// Whether to reject zero or oversized header dimensions before unpacking
    pub validate_dimensions: bool,
    /// Demosaic interpolation
    pub demosaic: DemosaicAlgorithm,
    /// Compression method to use for TIFF output
    pub compression: TiffCompression,
    /// Predictor value for compression (typically 2 for horizontal differencing)
    /// Note: Predictor adds processing time, set to None for maximum speed
    pub predictor: Option<u16>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            truncation: TruncationPolicy::Lenient,
            validate_dimensions: true,
            demosaic: DemosaicAlgorithm::Linear,
            compression: TiffCompression::None,
            predictor: None,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    truncation: Option<TruncationPolicy>,
    validate_dimensions: Option<bool>,
    demosaic: Option<DemosaicAlgorithm>,
    compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
}

impl ConversionConfigBuilder {
    pub fn truncation(mut self, policy: TruncationPolicy) -> Self {
        self.truncation = Some(policy);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn demosaic(mut self, algorithm: DemosaicAlgorithm) -> Self {
        self.demosaic = Some(algorithm);
        self
    }

    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            truncation: self.truncation.unwrap_or(default.truncation),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            demosaic: self.demosaic.unwrap_or(default.demosaic),
            compression: self.compression.unwrap_or(default.compression),
            predictor: self.predictor.unwrap_or(default.predictor),
        }
    }
}
