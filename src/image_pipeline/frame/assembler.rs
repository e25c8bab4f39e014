use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::raw::types::{BayerFrame, PixelFormat};

/// Arranges `samples` row-major into a `width` x `height` mosaic.
///
/// The sample count must equal `width * height` exactly; anything else means
/// the header and payload disagree and fails with
/// [`ConversionError::ShapeMismatch`]. Values pass through untouched.
pub fn assemble_frame(
    samples: Vec<u16>,
    width: usize,
    height: usize,
    format: PixelFormat,
) -> Result<BayerFrame> {
    let expected = width * height;
    if samples.len() != expected {
        return Err(ConversionError::ShapeMismatch {
            width,
            height,
            expected,
            actual: samples.len(),
        });
    }

    Ok(BayerFrame {
        width,
        height,
        data: samples,
        format,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_fit() {
        let frame = assemble_frame(vec![1, 2, 3, 4, 5, 6], 3, 2, PixelFormat::BayerRg12Packed).unwrap();
        assert_eq!(frame.get(0, 1), Some(4));
        assert_eq!(frame.get(2, 0), Some(3));
    }

    #[test]
    fn test_too_few_samples() {
        let err = assemble_frame(vec![0; 8], 4, 4, PixelFormat::BayerRg12Packed).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::ShapeMismatch { width: 4, height: 4, expected: 16, actual: 8 }
        ));
    }

    #[test]
    fn test_too_many_samples() {
        // An odd sample count after unpacking always leaves a spare zero sample
        let err = assemble_frame(vec![0; 10], 3, 3, PixelFormat::BayerRg12Packed).unwrap_err();
        assert!(matches!(err, ConversionError::ShapeMismatch { expected: 9, actual: 10, .. }));
    }
}
