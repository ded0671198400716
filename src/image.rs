//! Borrowed raster-image views consumed by the BMP layout builder.
//!
//! A [`RasterImage`] never owns pixel data: every variant borrows the
//! caller's backing buffer, and every output derived from it (layout,
//! RGBA reinterpretation) aliases that same buffer.

use rgb::{RGBA8, RGBA16};

/// An in-memory raster image, tagged by its concrete pixel format.
///
/// Width and height are signed so that a malformed source can report
/// negative bounds; the builder rejects those with
/// [`BmpError::NegativeBounds`](crate::BmpError::NegativeBounds).
#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
pub enum RasterImage<'a> {
    /// 8-bit grayscale, 1 byte per pixel.
    Gray8(GrayView<'a>),
    /// 8-bit palette indices, 1 byte per pixel.
    Indexed8(IndexedView<'a>),
    /// 8-bit RGBA, alpha-premultiplied, 4 bytes per pixel.
    Rgba8(RgbaView<'a>),
    /// 8-bit RGBA, non-premultiplied, 4 bytes per pixel.
    Nrgba8(RgbaView<'a>),
    /// Any other pixel format. Not convertible; the builder still sizes a
    /// header for it but produces no pixel output.
    Other { width: i32, height: i32 },
}

/// Grayscale pixel view: one intensity byte per pixel.
#[derive(Clone, Copy, Debug)]
pub struct GrayView<'a> {
    pub width: i32,
    pub height: i32,
    /// Bytes between the start of one row and the next.
    pub stride: usize,
    pub pix: &'a [u8],
}

/// Palette-indexed pixel view: one index byte per pixel.
#[derive(Clone, Copy, Debug)]
pub struct IndexedView<'a> {
    pub width: i32,
    pub height: i32,
    pub stride: usize,
    pub pix: &'a [u8],
    /// Color table, at most 256 entries. Channels are 16-bit wide; only
    /// the high byte of each channel survives conversion.
    pub palette: &'a [RGBA16],
}

/// RGBA pixel view: R,G,B,A byte quads.
#[derive(Clone, Copy, Debug)]
pub struct RgbaView<'a> {
    pub width: i32,
    pub height: i32,
    pub stride: usize,
    pub pix: &'a [u8],
}

impl RgbaView<'_> {
    /// Whether every pixel is fully opaque (alpha == 255).
    ///
    /// Vacuously true for empty images.
    pub fn is_opaque(&self) -> bool {
        if self.width <= 0 || self.height <= 0 {
            return true;
        }
        let w = self.width as usize;
        for y in 0..self.height as usize {
            let base = y * self.stride;
            for x in 0..w {
                if let Some(&alpha) = self.pix.get(base + x * 4 + 3) {
                    if alpha != 255 {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Zero-copy [`imgref::ImgRef`] over this view's pixels.
    ///
    /// The backing buffer must hold `height * stride` bytes and `stride`
    /// must be a multiple of 4 (whole pixels per row).
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, RGBA8> {
        use rgb::AsPixels as _;
        let pixels: &[RGBA8] = self.pix.as_pixels();
        imgref::Img::new_stride(
            pixels,
            self.width.max(0) as usize,
            self.height.max(0) as usize,
            self.stride / 4,
        )
    }
}

impl<'a> RasterImage<'a> {
    pub fn width(&self) -> i32 {
        match self {
            Self::Gray8(v) => v.width,
            Self::Indexed8(v) => v.width,
            Self::Rgba8(v) | Self::Nrgba8(v) => v.width,
            Self::Other { width, .. } => *width,
        }
    }

    pub fn height(&self) -> i32 {
        match self {
            Self::Gray8(v) => v.height,
            Self::Indexed8(v) => v.height,
            Self::Rgba8(v) | Self::Nrgba8(v) => v.height,
            Self::Other { height, .. } => *height,
        }
    }

    /// The backing pixel buffer. Empty for [`RasterImage::Other`].
    pub fn pixels(&self) -> &'a [u8] {
        match self {
            Self::Gray8(v) => v.pix,
            Self::Indexed8(v) => v.pix,
            Self::Rgba8(v) | Self::Nrgba8(v) => v.pix,
            Self::Other { .. } => &[],
        }
    }

    /// Bytes per row in the backing buffer. Zero for [`RasterImage::Other`].
    pub fn stride(&self) -> usize {
        match self {
            Self::Gray8(v) => v.stride,
            Self::Indexed8(v) => v.stride,
            Self::Rgba8(v) | Self::Nrgba8(v) => v.stride,
            Self::Other { .. } => 0,
        }
    }

    /// Resolve the color at `(x, y)` to 8-bit RGBA.
    ///
    /// Grayscale expands to equal channels with alpha 255; indexed pixels
    /// resolve through the color table with 16-bit channels truncated to
    /// their high byte. Returns `None` when the coordinate is out of
    /// bounds, the index is past the color table, or the format is
    /// [`RasterImage::Other`].
    pub fn color_at(&self, x: i32, y: i32) -> Option<RGBA8> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        match self {
            Self::Gray8(v) => {
                let g = *v.pix.get(y * v.stride + x)?;
                Some(RGBA8 { r: g, g, b: g, a: 255 })
            }
            Self::Indexed8(v) => {
                let idx = *v.pix.get(y * v.stride + x)? as usize;
                let c = v.palette.get(idx)?;
                Some(RGBA8 {
                    r: (c.r >> 8) as u8,
                    g: (c.g >> 8) as u8,
                    b: (c.b >> 8) as u8,
                    a: (c.a >> 8) as u8,
                })
            }
            Self::Rgba8(v) | Self::Nrgba8(v) => {
                let off = y * v.stride + x * 4;
                let px = v.pix.get(off..off + 4)?;
                Some(RGBA8 { r: px[0], g: px[1], b: px[2], a: px[3] })
            }
            Self::Other { .. } => None,
        }
    }
}
