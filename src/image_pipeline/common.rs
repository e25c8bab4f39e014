//! Common utilities module
//!
//! This module contains the error type and decode configuration shared
//! across the image pipeline.

pub mod config;
pub mod error;

pub use config::{ConversionConfig, ConversionConfigBuilder, DemosaicAlgorithm, TruncationPolicy};
pub use error::{ConversionError, Result};
