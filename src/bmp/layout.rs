//! BMP layout builder: header, optional palette, and a borrowed pixel view.

use alloc::vec::Vec;
use enough::Stop;

use super::header::{BmpHeader, HEADER_LEN, PALETTE_LEN};
use super::palette::BgraPalette;
use crate::error::BmpError;
use crate::image::{RasterImage, RgbaView};

/// Round up to the next multiple of 4, or `None` on overflow.
fn ceil4(n: usize) -> Option<usize> {
    n.checked_add(3).map(|n| n & !3)
}

/// A writer-ready BMP layout over a borrowed pixel buffer.
///
/// `pixels` aliases the source image's backing buffer; nothing is copied
/// except the header and palette bytes. A conformant writer emits
/// header, then palette (if any), then `pixels`.
#[derive(Clone, Debug)]
pub struct BmpLayout<'a> {
    pub header: BmpHeader,
    /// Present only for 8-bit (grayscale / indexed) sources.
    pub palette: Option<BgraPalette>,
    /// The source pixel bytes, unmodified. Empty for unsupported formats
    /// and for zero-area images.
    pub pixels: &'a [u8],
    /// The source buffer's own row stride, in bytes. Zero when `pixels`
    /// is empty.
    pub stride: usize,
}

/// Compute the BMP header, palette, and pixel view for `image`.
///
/// Pure over the image's already-materialized buffer; performs no I/O.
/// Geometry per format:
///
/// - `Gray8` / `Indexed8`: 8 bpp, row stride `ceil4(width)`, 1024-byte
///   palette (identity ramp, or the source color table).
/// - `Rgba8` / `Nrgba8`: 24 bpp with stride `ceil4(3 * width)` when the
///   image is fully opaque, else 32 bpp with stride `4 * width`. The
///   returned pixel bytes stay in the source's 4-byte layout either way;
///   see [`BmpLayout::to_vec`] for the implications.
/// - `Other`: a 24-bpp header sized for the dimensions, but no pixels —
///   check [`BmpLayout::is_supported`].
///
/// Zero-area images produce a valid header (and palette, for 8-bit
/// sources) with empty pixels; that is the deliberate empty-image
/// output, not a failure.
pub fn layout<'a>(image: &RasterImage<'a>) -> Result<BmpLayout<'a>, BmpError> {
    let (iw, ih) = (image.width(), image.height());
    if iw < 0 || ih < 0 {
        return Err(BmpError::NegativeBounds { width: iw, height: ih });
    }
    let width = iw as u32;
    let height = ih as u32;
    let too_large = || BmpError::DimensionsTooLarge { width, height };

    let w = width as usize;
    let (row_stride, bits_per_pixel, palette) = match image {
        RasterImage::Gray8(_) => {
            (ceil4(w).ok_or_else(too_large)?, 8, Some(BgraPalette::grayscale_ramp()))
        }
        RasterImage::Indexed8(v) => (
            ceil4(w).ok_or_else(too_large)?,
            8,
            Some(BgraPalette::from_colors(v.palette)),
        ),
        RasterImage::Rgba8(v) | RasterImage::Nrgba8(v) => {
            if v.is_opaque() {
                let stride = w.checked_mul(3).and_then(ceil4).ok_or_else(too_large)?;
                (stride, 24, None)
            } else {
                // 4 * width is already a multiple of 4
                (w.checked_mul(4).ok_or_else(too_large)?, 32, None)
            }
        }
        RasterImage::Other { .. } => {
            let stride = w.checked_mul(3).and_then(ceil4).ok_or_else(too_large)?;
            (stride, 24, None)
        }
    };

    let image_size = (height as usize)
        .checked_mul(row_stride)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(too_large)?;
    let pix_offset = HEADER_LEN + if palette.is_some() { PALETTE_LEN } else { 0 };
    let file_size = pix_offset.checked_add(image_size).ok_or_else(too_large)?;

    let header = BmpHeader {
        file_size,
        pix_offset,
        width,
        height,
        bits_per_pixel,
        image_size,
    };

    if width == 0 || height == 0 {
        return Ok(BmpLayout { header, palette, pixels: &[], stride: 0 });
    }

    let (pixels, stride) = match image {
        RasterImage::Other { .. } => (&[][..], 0),
        _ => (image.pixels(), image.stride()),
    };
    Ok(BmpLayout { header, palette, pixels, stride })
}

impl BmpLayout<'_> {
    /// Whether this layout carries pixel data matching its header.
    ///
    /// `false` means the source format could not be packed (the `Other`
    /// fallback): the header is structurally valid but `pixels` is empty
    /// while `image_size` is not. A zero-area image is supported — its
    /// `image_size` is zero too.
    pub fn is_supported(&self) -> bool {
        !self.pixels.is_empty() || self.header.image_size == 0
    }

    /// Palette length in bytes: 1024 when present, 0 otherwise.
    pub fn palette_len(&self) -> usize {
        if self.palette.is_some() { PALETTE_LEN as usize } else { 0 }
    }

    /// Assemble the file bytes: header, palette, then pixels.
    ///
    /// Pixel bytes are written exactly as the source buffer stores them:
    /// no row flip and no repacking. For opaque RGBA sources the header
    /// declares 24 bits per pixel while the buffer stays 4 bytes per
    /// pixel — a known mismatch reproduced for compatibility with files
    /// the original produced. Use [`super::encode()`] for a strictly
    /// conformant file.
    pub fn to_vec(&self, stop: &dyn Stop) -> Result<Vec<u8>, BmpError> {
        let mut out =
            Vec::with_capacity(HEADER_LEN as usize + self.palette_len() + self.pixels.len());
        self.header.write_into(&mut out);
        if let Some(palette) = &self.palette {
            out.extend_from_slice(palette.as_bytes());
        }
        stop.check()?;
        if self.stride > 0 {
            for (row_idx, row) in self.pixels.chunks(self.stride).enumerate() {
                if row_idx % 16 == 0 {
                    stop.check()?;
                }
                out.extend_from_slice(row);
            }
        }
        Ok(out)
    }
}

/// Reinterpret any source image as a 32-bit RGBA view.
///
/// Compatibility shim: reuses the pixel bytes and stride from [`layout`]
/// unchanged, so the view is only meaningful when the source already
/// stores 4-byte RGBA quads ([`RasterImage::Rgba8`] /
/// [`RasterImage::Nrgba8`]). For grayscale, indexed, or `Other` sources
/// it misreads index bytes (or nothing) as raw RGBA; callers who cannot
/// vouch for the source format should not use it. Build failures
/// (negative bounds) collapse to an empty view, as the behavior this
/// shim preserves always did.
pub fn reinterpret_as_rgba<'a>(image: &RasterImage<'a>) -> RgbaView<'a> {
    let (pix, stride) = match layout(image) {
        Ok(l) => (l.pixels, l.stride),
        Err(_) => (&[][..], 0),
    };
    RgbaView {
        width: image.width(),
        height: image.height(),
        stride,
        pix,
    }
}
