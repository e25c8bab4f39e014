use std::io::Write;
use std::path::Path;

use tracing::{debug, instrument};

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::raw::header::FrameHeader;
use crate::image_pipeline::raw::types::PixelFormat;
use crate::image_pipeline::raw::unpack::pack12;

/// Writes a header and packed 12-bit payload in the CMRaw layout.
pub struct CmrawWriter;

impl CmrawWriter {
    pub fn write(&self, header: &FrameHeader, samples: &[u16], output: &mut dyn Write) -> Result<()> {
        if header.format() != Some(PixelFormat::BayerRg12Packed) {
            return Err(ConversionError::UnsupportedFormat(header.pixel_format));
        }

        let expected = header.sample_count();
        if samples.len() != expected {
            return Err(ConversionError::ShapeMismatch {
                width: header.width as usize,
                height: header.height as usize,
                expected,
                actual: samples.len(),
            });
        }

        debug!("Encoding CMRaw image: {}x{}", header.width, header.height);

        output.write_all(&header.to_bytes())?;
        output.write_all(&pack12(samples))?;
        Ok(())
    }

    #[instrument(skip(self, header, samples, path))]
    pub fn write_file<P: AsRef<Path>>(&self, header: &FrameHeader, samples: &[u16], path: P) -> Result<()> {
        let path = path.as_ref();
        let mut file = std::fs::File::create(path).map_err(|e| {
            ConversionError::OutputWriteError(format!("{}: {}", path.display(), e))
        })?;
        self.write(header, samples, &mut file)
    }
}
