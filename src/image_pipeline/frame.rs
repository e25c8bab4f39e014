//! Frame assembly module
//!
//! Reshapes unpacked samples into a Bayer mosaic, and scales demosaiced
//! samples into the unit range.

mod assembler;
mod normalize;
pub mod types;

pub use assembler::assemble_frame;
pub use normalize::normalize;
pub use types::NormalizedImage;
