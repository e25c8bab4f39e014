//! RAW image reading module
//!
//! This module provides CMRaw header parsing, 12-bit payload unpacking, and
//! the reader and writer built on them.

pub mod header;
pub mod unpack;
mod reader;
mod cmraw_reader;
mod cmraw_writer;
pub mod types;

pub use header::{CaptureInfo, FrameHeader, Orientation, HEADER_LEN, MAGIC, MAX_DIMENSION, parse_header};
pub use unpack::{pack12, unpack12, unpack12_with_policy};
pub use reader::RawImageReader;
pub use cmraw_reader::CmrawReader;
pub use cmraw_writer::CmrawWriter;
pub use types::{BayerFrame, PixelFormat};
