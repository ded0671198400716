//! Conformant BMP encoder: bottom-up rows, true repacking, written padding.

use alloc::vec::Vec;
use enough::Stop;

use super::layout::layout;
use crate::error::BmpError;
use crate::image::RasterImage;

/// Encode `image` as a complete, conformant BMP file.
///
/// Unlike [`super::layout()`], pixel data is actually repacked to match
/// the declared bit depth: opaque RGBA drops its alpha bytes into BGR
/// triples, non-opaque RGBA swizzles to BGRA, and 8-bit sources copy
/// their index/intensity bytes. Rows are emitted bottom-up with padding
/// bytes written out, so any BMP reader accepts the result.
pub(crate) fn encode_bmp(image: &RasterImage, stop: &dyn Stop) -> Result<Vec<u8>, BmpError> {
    let lay = layout(image)?;

    let src_bpp = match image {
        RasterImage::Gray8(_) | RasterImage::Indexed8(_) => 1usize,
        RasterImage::Rgba8(_) | RasterImage::Nrgba8(_) => 4,
        RasterImage::Other { .. } => {
            return Err(BmpError::UnsupportedVariant(alloc::format!(
                "cannot repack {:?} into BMP pixel data",
                image
            )));
        }
    };

    let w = lay.header.width as usize;
    let h = lay.header.height as usize;
    let src_stride = image.stride();
    let pix = image.pixels();

    if w > 0 && h > 0 {
        let needed = (h - 1)
            .checked_mul(src_stride)
            .and_then(|n| n.checked_add(w * src_bpp))
            .ok_or(BmpError::DimensionsTooLarge {
                width: lay.header.width,
                height: lay.header.height,
            })?;
        if pix.len() < needed {
            return Err(BmpError::BufferTooSmall {
                needed,
                actual: pix.len(),
            });
        }
    }

    let mut out = Vec::with_capacity(lay.header.file_size as usize);
    lay.header.write_into(&mut out);
    if let Some(palette) = &lay.palette {
        out.extend_from_slice(palette.as_bytes());
    }

    // Overflow already ruled out by layout()'s checked geometry.
    let dst_stride = match lay.header.bits_per_pixel {
        8 => (w + 3) & !3,
        24 => (3 * w + 3) & !3,
        _ => 4 * w,
    };

    for row in (0..h).rev() {
        if row % 16 == 0 {
            stop.check()?;
        }
        let row_start = row * src_stride;
        match lay.header.bits_per_pixel {
            8 => {
                out.extend_from_slice(&pix[row_start..row_start + w]);
                out.extend(core::iter::repeat_n(0u8, dst_stride - w));
            }
            24 => {
                for col in 0..w {
                    let off = row_start + col * 4;
                    out.push(pix[off + 2]);
                    out.push(pix[off + 1]);
                    out.push(pix[off]);
                }
                out.extend(core::iter::repeat_n(0u8, dst_stride - 3 * w));
            }
            _ => {
                for col in 0..w {
                    let off = row_start + col * 4;
                    out.push(pix[off + 2]);
                    out.push(pix[off + 1]);
                    out.push(pix[off]);
                    out.push(pix[off + 3]);
                }
            }
        }
    }

    Ok(out)
}
