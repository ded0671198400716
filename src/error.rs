use alloc::string::String;
use enough::StopReason;

/// Errors from BMP layout construction and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    /// The source image reports a negative width or height. Fatal to the
    /// operation; no partial output is produced.
    #[error("negative bounds: {width}x{height}")]
    NegativeBounds { width: i32, height: i32 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("pixel buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("unsupported source format: {0}")]
    UnsupportedVariant(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for BmpError {
    fn from(r: StopReason) -> Self {
        BmpError::Cancelled(r)
    }
}
