//! Debayering module for converting Bayer mosaics to RGB

mod processor;
pub mod cpu_debayer;
pub mod types;

pub use processor::Debayer;
pub use cpu_debayer::CpuDebayer;
pub use types::RgbImageData;
