//! # bmpview
//!
//! BMP header and pixel-layout builder over borrowed in-memory images.
//!
//! ## Zero-Copy Layout
//!
//! [`layout`] computes everything a BMP writer needs — the 54-byte
//! file/DIB header, the 1024-byte color table for 8-bit sources, and the
//! row stride — while borrowing the source pixel buffer instead of
//! copying it. Only the header and palette bytes are synthesized.
//!
//! ## Supported Sources
//!
//! - 8-bit grayscale (identity-ramp palette)
//! - 8-bit indexed (palette built from the source color table)
//! - 32-bit RGBA / non-premultiplied RGBA (24 bpp when fully opaque,
//!   32 bpp otherwise)
//! - anything else falls back to a sized-but-empty 24-bpp layout
//!
//! ## Non-Goals
//!
//! - BMP decoding, RLE/bitfield compression, sub-256-entry color tables
//! - Delegating to general-purpose codecs (PNG/JPEG/...) — that is the
//!   caller's side of the contract
//!
//! ## Usage
//!
//! ```
//! use bmpview::{layout, GrayView, RasterImage, Unstoppable};
//!
//! // 2x2 grayscale image, rows padded to a 4-byte stride.
//! let pix = [0u8, 64, 0, 0, 128, 255, 0, 0];
//! let img = RasterImage::Gray8(GrayView { width: 2, height: 2, stride: 4, pix: &pix });
//!
//! let lay = layout(&img)?;
//! assert_eq!(lay.header.bits_per_pixel, 8);
//! assert_eq!(lay.header.file_size, lay.header.pix_offset + lay.header.image_size);
//!
//! // header → palette → pixels, ready to hand to a writer
//! let bytes = lay.to_vec(&Unstoppable)?;
//! assert_eq!(&bytes[0..2], b"BM");
//! # Ok::<(), bmpview::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod image;
mod render;

pub mod bmp;

#[cfg(feature = "std")]
pub mod fs;

// Re-exports
pub use bmp::{layout, reinterpret_as_rgba, BgraPalette, BmpHeader, BmpLayout};
pub use enough::{Stop, Unstoppable};
pub use error::BmpError;
pub use image::{GrayView, IndexedView, RasterImage, RgbaView};
pub use render::{is_black, to_ascii, BLACK};
