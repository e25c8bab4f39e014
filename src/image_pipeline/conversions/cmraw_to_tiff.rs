use tracing::{info, instrument};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    common::{config::ConversionConfig, error::{ConversionError, Result}},
    debayer::{CpuDebayer, Debayer},
    frame::{normalize, NormalizedImage},
    raw::{CmrawReader, RawImageReader},
    tiff::{TiffWriter, StandardTiffWriter},
};

/// Header parse, unpack, frame assembly, demosaic and normalization, in
/// that order. A failure at any stage aborts the whole decode.
pub struct CmrawPipeline<R: RawImageReader, D: Debayer, W: TiffWriter> {
    reader: R,
    debayer: D,
    writer: W,
    config: ConversionConfig,
}

impl CmrawPipeline<CmrawReader, CpuDebayer, StandardTiffWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: CmrawReader::from_config(&config),
            debayer: CpuDebayer::new(config.demosaic),
            writer: StandardTiffWriter,
            config,
        }
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.reader = CmrawReader::from_config(&config);
        self.debayer = CpuDebayer::new(config.demosaic);
        self.config = config;
    }
}

impl<R: RawImageReader, D: Debayer, W: TiffWriter> CmrawPipeline<R, D, W> {
    pub fn with_custom(reader: R, debayer: D, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            debayer,
            writer,
            config,
        }
    }

    /// Decodes an in-memory CMRaw file into a normalized RGB image.
    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn decode(&self, input_data: &[u8]) -> Result<NormalizedImage> {
        let frame = {
            let _span = tracing::info_span!("decode_raw").entered();
            self.reader.read_raw(input_data)?
        };

        let rgb = {
            let _span = tracing::info_span!("debayer",
                width = frame.width,
                height = frame.height
            ).entered();
            self.debayer.process(&frame)?
        };

        let image = {
            let _span = tracing::info_span!("normalize").entered();
            normalize(&rgb)
        };

        info!(
            width = image.width,
            height = image.height,
            "Decode complete"
        );
        Ok(image)
    }

    /// Reads `input_path` and decodes it.
    ///
    /// The file is closed before decoding starts, so no descriptor outlives a
    /// parse failure.
    #[instrument(skip(self, input_path))]
    pub fn decode_file<P: AsRef<Path>>(&self, input_path: P) -> Result<NormalizedImage> {
        let input_data = read_input(input_path.as_ref())?;
        self.decode(&input_data)
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting CMRaw to TIFF conversion");

        let image = self.decode(input_data)?;

        {
            let _span = tracing::info_span!("encode_tiff").entered();
            self.writer.write_rgb_tiff(&image, output, &self.config)?;
        }

        info!(
            width = image.width,
            height = image.height,
            "Conversion complete"
        );
        Ok(())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = read_input(input_path)?;

        // Decode before touching the output so a bad capture leaves no file behind
        let image = self.decode(&input_data)?;

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        {
            let _span = tracing::info_span!("encode_tiff").entered();
            self.writer.write_rgb_tiff(&image, &mut output_file, &self.config)?;
        }

        Ok(())
    }

    /// Writes the undemosaiced mosaic, for inspecting sensor data directly.
    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn write_bayer(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        let frame = self.reader.read_raw(input_data)?;
        self.writer.write_bayer_tiff(&frame, output, &self.config)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }
}

fn read_input(input_path: &Path) -> Result<Vec<u8>> {
    let _span = tracing::info_span!("read_input_file").entered();
    std::fs::read(input_path).map_err(|e| {
        ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
    })
}
