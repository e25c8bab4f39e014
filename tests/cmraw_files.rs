use std::io::Cursor;

use cmraw_rs::image_pipeline::{
    self, CaptureInfo, CmrawPipeline, CmrawWriter, ConversionConfig, ConversionError,
    FrameHeader, Orientation, TruncationPolicy, parse_header,
};
use tempfile::tempdir;
use tiff::decoder::{Decoder, DecodingResult};

fn gradient(width: usize, height: usize) -> Vec<u16> {
    (0..width * height).map(|i| (i * 4095 / (width * height - 1)) as u16).collect()
}

#[test]
fn test_load_written_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("flat.cmr");

    CmrawWriter
        .write_file(&FrameHeader::new(16, 8), &[4095; 16 * 8], &path)
        .unwrap();

    let image = image_pipeline::load(&path).unwrap();
    assert_eq!((image.width, image.height), (16, 8));
    assert_eq!(image.data.len(), 16 * 8 * 3);
    assert!(image.data.iter().all(|&v| v == 1.0));
}

#[test]
fn test_gradient_stays_in_unit_range() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gradient.cmr");
    CmrawWriter
        .write_file(&FrameHeader::new(32, 16), &gradient(32, 16), &path)
        .unwrap();

    let image = image_pipeline::load(&path).unwrap();
    assert!(image.data.iter().all(|v| (0.0..=1.0).contains(v)));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let result = image_pipeline::load(dir.path().join("absent.cmr"));
    assert!(matches!(result, Err(ConversionError::InputReadError(_))));
}

#[test]
fn test_capture_metadata_survives_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("meta.cmr");
    let header = FrameHeader {
        capture: CaptureInfo {
            orientation: Orientation::Deg90,
            timestamp: 1_650_000_000,
            shutter_us: 10_000.0,
            gain_db: 3.0,
            camera_make: "Sony".to_string(),
            camera_model: "IMX477".to_string(),
            ..CaptureInfo::default()
        },
        ..FrameHeader::new(4, 2)
    };
    CmrawWriter.write_file(&header, &[0; 8], &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(parse_header(&bytes).unwrap(), header);
}

#[test]
fn test_convert_file_writes_rgb_tiff() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.cmr");
    let output = dir.path().join("out.tiff");
    CmrawWriter
        .write_file(&FrameHeader::new(8, 6), &[4095; 48], &input)
        .unwrap();

    CmrawPipeline::new(ConversionConfig::default())
        .convert_file(&input, &output)
        .unwrap();

    let mut decoder = Decoder::new(std::fs::File::open(&output).unwrap()).unwrap();
    assert_eq!(decoder.dimensions().unwrap(), (8, 6));
    match decoder.read_image().unwrap() {
        DecodingResult::U16(data) => {
            assert_eq!(data.len(), 8 * 6 * 3);
            assert!(data.iter().all(|&v| v == u16::MAX));
        }
        _ => panic!("expected 16-bit samples"),
    }
}

#[test]
fn test_failed_decode_leaves_no_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.cmr");
    let output = dir.path().join("out.tiff");
    let mut bytes = FrameHeader::new(4, 4).to_bytes().to_vec();
    bytes[0..4].copy_from_slice(b"XXXX");
    std::fs::write(&input, &bytes).unwrap();

    let result = CmrawPipeline::new(ConversionConfig::default()).convert_file(&input, &output);

    assert!(matches!(result, Err(ConversionError::InvalidFormat { .. })));
    assert!(!output.exists());
}

#[test]
fn test_strict_mode_on_truncated_capture() {
    let mut bytes: Vec<u8> = Vec::new();
    CmrawWriter
        .write(&FrameHeader::new(4, 4), &[7; 16], &mut bytes)
        .unwrap();
    bytes.push(0);

    let lenient = CmrawPipeline::new(ConversionConfig::default());
    assert!(lenient.decode(&bytes).is_ok());

    let strict = CmrawPipeline::new(
        ConversionConfig::builder()
            .truncation(TruncationPolicy::Strict)
            .build(),
    );
    assert!(matches!(
        strict.decode(&bytes),
        Err(ConversionError::TrailingBytes { count: 1 })
    ));

    let mut sink = Cursor::new(Vec::<u8>::new());
    assert!(strict.convert(&bytes, &mut sink).is_err());
    assert!(sink.into_inner().is_empty());
}
