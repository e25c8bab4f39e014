//! TIFF writing module
//!
//! Writes decoded frames as 16-bit TIFF files, either the raw mosaic or the
//! normalized RGB image.

mod writer;
mod standard_tiff_writer;
pub mod types;

pub use writer::TiffWriter;
pub use standard_tiff_writer::StandardTiffWriter;
pub use types::TiffCompression;
