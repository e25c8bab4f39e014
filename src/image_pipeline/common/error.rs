use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Input too short for CMRaw header: expected at least {expected} bytes, got {actual}")]
    TruncatedInput { expected: usize, actual: usize },

    #[error("Invalid CMRaw format: bad magic {magic:02x?}")]
    InvalidFormat { magic: [u8; 4] },

    #[error("Unsupported pixel format code: {0}")]
    UnsupportedFormat(u8),

    #[error("Sample count mismatch for {width}x{height} frame: expected {expected} samples, got {actual}")]
    ShapeMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Payload has {count} trailing byte(s) that do not form a complete 12-bit pair")]
    TrailingBytes { count: usize },

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Demosaic failed: {0}")]
    DemosaicError(String),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to encode TIFF image: {0}")]
    EncodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
