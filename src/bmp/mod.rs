//! BMP header construction, zero-copy pixel layout, and encoding.
//!
//! [`layout()`] is the core operation: a pure function from a
//! [`RasterImage`](crate::RasterImage) to a 54-byte header, an optional
//! 1024-byte color table, and a borrowed view of the source pixels.
//! [`encode()`] builds on it to emit a strictly conformant file.

mod encode;
mod header;
mod layout;
mod palette;

pub use header::{BmpHeader, HEADER_LEN, PALETTE_LEN};
pub use layout::{layout, reinterpret_as_rgba, BmpLayout};
pub use palette::BgraPalette;

use crate::error::BmpError;
use crate::image::RasterImage;
use alloc::vec::Vec;
use enough::Stop;

/// Encode `image` as a conformant BMP file (bottom-up rows, pixels
/// repacked to the declared bit depth).
///
/// Returns [`BmpError::UnsupportedVariant`] for [`RasterImage::Other`]
/// sources. Zero-area images yield a header-only (plus palette) file.
pub fn encode(image: &RasterImage, stop: &dyn Stop) -> Result<Vec<u8>, BmpError> {
    encode::encode_bmp(image, stop)
}
