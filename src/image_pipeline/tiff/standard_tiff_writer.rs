use std::io::{Cursor, Write};

use tiff::encoder::colortype::{ColorType, Gray16, RGB16};
use tiff::encoder::compression::DeflateLevel;
use tiff::encoder::{Compression, TiffEncoder};
use tiff::tags::Predictor;
use tracing::debug;

use crate::image_pipeline::common::config::ConversionConfig;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::frame::types::NormalizedImage;
use crate::image_pipeline::raw::types::BayerFrame;
use crate::image_pipeline::tiff::types::TiffCompression;
use crate::image_pipeline::tiff::writer::TiffWriter;

pub struct StandardTiffWriter;

impl StandardTiffWriter {
    fn encode<C>(
        &self,
        width: usize,
        height: usize,
        data: &[u16],
        output: &mut dyn Write,
        config: &ConversionConfig,
    ) -> Result<()>
    where
        C: ColorType<Inner = u16>,
    {
        let mut buffer: Vec<u8> = Vec::new();

        let compression = match config.compression {
            TiffCompression::None => Compression::Uncompressed,
            TiffCompression::Lzw => Compression::Lzw,
            TiffCompression::DeflateFast => Compression::Deflate(DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => Compression::Deflate(DeflateLevel::Balanced),
            TiffCompression::DeflateBest => Compression::Deflate(DeflateLevel::Best),
        };

        let mut encoder = TiffEncoder::new(Cursor::new(&mut buffer))
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?
            .with_compression(compression);

        if let Some(predictor_val) = config.predictor {
            let predictor = match predictor_val {
                2 => Predictor::Horizontal,
                _ => Predictor::None,
            };
            encoder = encoder.with_predictor(predictor);
        }

        encoder
            .write_image::<C>(width as u32, height as u32, data)
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;
        Ok(())
    }
}

impl TiffWriter for StandardTiffWriter {
    fn write_bayer_tiff(&self, frame: &BayerFrame, output: &mut dyn Write, config: &ConversionConfig) -> Result<()> {
        debug!("Encoding Bayer TIFF image: {}x{}", frame.width, frame.height);
        self.encode::<Gray16>(frame.width, frame.height, &frame.data, output, config)?;
        debug!("TIFF encoding complete");
        Ok(())
    }

    fn write_rgb_tiff(&self, image: &NormalizedImage, output: &mut dyn Write, config: &ConversionConfig) -> Result<()> {
        debug!("Encoding RGB TIFF image: {}x{}", image.width, image.height);
        self.encode::<RGB16>(image.width, image.height, &image.to_u16(), output, config)?;
        debug!("TIFF encoding complete");
        Ok(())
    }
}
