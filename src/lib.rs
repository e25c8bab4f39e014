//! Decoder for CMRaw (`.cmr`) sensor captures.
//!
//! A CMRaw file is a fixed 164-byte header followed by a packed 12-bit Bayer
//! mosaic. [`image_pipeline`] turns it into a linear, demosaiced image with
//! samples in `[0.0, 1.0]`, ready for colour calibration.

pub mod image_pipeline;
pub mod logger;
