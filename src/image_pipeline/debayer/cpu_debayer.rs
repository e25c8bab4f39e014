use std::io::Cursor;

use bayer::{BayerDepth, CFA, Demosaic, RasterDepth, RasterMut};
use tracing::{debug, info};

use crate::image_pipeline::common::config::DemosaicAlgorithm;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::debayer::processor::Debayer;
use crate::image_pipeline::debayer::types::RgbImageData;
use crate::image_pipeline::raw::types::BayerFrame;

/// Demosaics on the CPU through the `bayer` crate.
pub struct CpuDebayer {
    algorithm: DemosaicAlgorithm,
}

impl CpuDebayer {
    pub fn new(algorithm: DemosaicAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> DemosaicAlgorithm {
        self.algorithm
    }
}

impl Default for CpuDebayer {
    fn default() -> Self {
        Self::new(DemosaicAlgorithm::default())
    }
}

fn demosaic_for(algorithm: DemosaicAlgorithm) -> Demosaic {
    match algorithm {
        DemosaicAlgorithm::None => Demosaic::None,
        DemosaicAlgorithm::NearestNeighbour => Demosaic::NearestNeighbour,
        DemosaicAlgorithm::Linear => Demosaic::Linear,
        DemosaicAlgorithm::Cubic => Demosaic::Cubic,
    }
}

/// Smallest side `bayer` accepts for each algorithm.
fn min_side(algorithm: DemosaicAlgorithm) -> usize {
    match algorithm {
        DemosaicAlgorithm::Cubic => 4,
        _ => 2,
    }
}

/// RGGB channel index of the filter site at (x, y).
fn cfa_channel(x: usize, y: usize) -> usize {
    match (y % 2, x % 2) {
        (0, 0) => 0,
        (1, 1) => 2,
        _ => 1,
    }
}

// Each site keeps its own sample in its filter channel; the others stay zero.
fn scatter_sites(frame: &BayerFrame) -> Vec<u16> {
    let mut data = vec![0u16; frame.width * frame.height * 3];
    for (y, row) in frame.rows().take(frame.height).enumerate() {
        for (x, &sample) in row.iter().enumerate() {
            data[(y * frame.width + x) * 3 + cfa_channel(x, y)] = sample;
        }
    }
    data
}

impl Debayer for CpuDebayer {
    fn process(&self, frame: &BayerFrame) -> Result<RgbImageData> {
        let width = frame.width;
        let height = frame.height;
        info!("Starting CPU debayering for image {}x{}", width, height);

        if !frame.format.is_bayer() {
            return Err(ConversionError::UnsupportedFormat(frame.format.code()));
        }

        if frame.data.is_empty() {
            return Ok(RgbImageData {
                width,
                height,
                data: Vec::new(),
                format: frame.format,
            });
        }

        if width < min_side(self.algorithm) || height < min_side(self.algorithm) {
            debug!(
                "Frame {}x{} too small for {:?}, keeping native sites only",
                width, height, self.algorithm
            );
            return Ok(RgbImageData {
                width,
                height,
                data: scatter_sites(frame),
                format: frame.format,
            });
        }

        // 12-bit samples travel as 16-bit little-endian words
        let bayer_bytes: Vec<u8> = frame.data.iter().flat_map(|&val| val.to_le_bytes()).collect();

        let output_buf_size = width * height * 3 * 2;
        let mut output_buf = vec![0u8; output_buf_size];
        let mut cursor = Cursor::new(&bayer_bytes[..]);

        debug!(
            "Running demosaic with CFA=RGGB, algo={:?}, {}-bit samples, input bytes: {}, output buffer: {}",
            self.algorithm,
            frame.bits_per_sample(),
            bayer_bytes.len(),
            output_buf_size
        );

        {
            let mut output_raster = RasterMut::new(width, height, RasterDepth::Depth16, &mut output_buf);

            // Red sits at (0, 0) for every Bayer layout the capture tool writes
            bayer::run_demosaic(
                &mut cursor,
                BayerDepth::Depth16LE,
                CFA::RGGB,
                demosaic_for(self.algorithm),
                &mut output_raster,
            )
            .map_err(|e| ConversionError::DemosaicError(format!("{:?}", e)))?;
        }

        // The raster holds native-endian u16 words
        let data: Vec<u16> = output_buf
            .chunks_exact(2)
            .map(|b| u16::from_ne_bytes([b[0], b[1]]))
            .collect();

        Ok(RgbImageData {
            width,
            height,
            data,
            format: frame.format,
        })
    }
}
