//! The 14-byte BMP file header plus 40-byte BITMAPINFOHEADER.

use alloc::vec::Vec;

/// Length of the file header + DIB header, in bytes.
pub const HEADER_LEN: u32 = 14 + 40;

/// Length of the 256-entry BGRA color table, when present.
pub const PALETTE_LEN: u32 = 1024;

/// The variable fields of a BMP file/DIB header pair.
///
/// Everything not listed here is constant in the layout this crate emits:
/// `BM` signature, zero reserved bytes, DIB header size 40, one color
/// plane, no compression, and zeroed resolution / color-count fields.
///
/// Invariant: `file_size == pix_offset + image_size`, and `pix_offset`
/// is [`HEADER_LEN`] plus [`PALETTE_LEN`] when `bits_per_pixel == 8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpHeader {
    pub file_size: u32,
    /// Offset from the start of the file to the pixel data.
    pub pix_offset: u32,
    pub width: u32,
    pub height: u32,
    /// 8, 24, or 32.
    pub bits_per_pixel: u16,
    /// `height * row_stride`, where `row_stride` is padded to 4 bytes.
    pub image_size: u32,
}

impl BmpHeader {
    /// Append the 54 header bytes, little-endian per the BMP format.
    pub fn write_into(&self, out: &mut Vec<u8>) {
        // File header (14 bytes)
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&self.file_size.to_le_bytes());
        out.extend_from_slice(&[0u8; 4]); // reserved
        out.extend_from_slice(&self.pix_offset.to_le_bytes());

        // DIB header (BITMAPINFOHEADER, 40 bytes)
        out.extend_from_slice(&40u32.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes()); // planes
        out.extend_from_slice(&self.bits_per_pixel.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes()); // compression
        out.extend_from_slice(&self.image_size.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes()); // x pixels per meter
        out.extend_from_slice(&0u32.to_le_bytes()); // y pixels per meter
        out.extend_from_slice(&0u32.to_le_bytes()); // colors used
        out.extend_from_slice(&0u32.to_le_bytes()); // important colors
    }
}
