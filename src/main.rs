use anyhow::Context;
use cmraw_rs::image_pipeline::{CmrawPipeline, ConversionConfig, TiffCompression};
use cmraw_rs::logger::{self, error, info};

fn main() -> anyhow::Result<()> {
    logger::init();

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "input.cmr".to_string());
    let output = args.next().unwrap_or_else(|| "output.tiff".to_string());

    info!("Starting cmraw_rs...");

    let config = ConversionConfig::builder()
        .compression(TiffCompression::None)
        .build();
    let pipeline = CmrawPipeline::new(config);

    info!("CMRaw to TIFF pipeline initialized");
    info!("Compression: {:?}", pipeline.config().compression);
    info!("Demosaic: {:?}", pipeline.config().demosaic);

    pipeline
        .convert_file(&input, &output)
        .inspect_err(|e| error!("Conversion failed: {}", e))
        .with_context(|| format!("converting {} to {}", input, output))?;

    info!("Conversion successful!");
    Ok(())
}
