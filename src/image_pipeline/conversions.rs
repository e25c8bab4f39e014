//! Pipeline conversions module
//!
//! This module contains orchestration logic for decoding CMRaw captures and
//! converting them to TIFF.

mod cmraw_to_tiff;


pub use cmraw_to_tiff::CmrawPipeline;
