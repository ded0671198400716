//! The 256-entry BGRA color table emitted ahead of 8-bit pixel data.

use rgb::RGBA16;

use super::header::PALETTE_LEN;

/// A 1024-byte BMP color table: 256 entries of B,G,R,A.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BgraPalette(pub [u8; PALETTE_LEN as usize]);

impl BgraPalette {
    /// The identity grayscale ramp: entry `i` is gray level `i`, opaque.
    pub fn grayscale_ramp() -> Self {
        let mut table = [0u8; PALETTE_LEN as usize];
        for i in 0..256 {
            table[i * 4] = i as u8;
            table[i * 4 + 1] = i as u8;
            table[i * 4 + 2] = i as u8;
            table[i * 4 + 3] = 0xFF;
        }
        Self(table)
    }

    /// Build a table from a source color list of at most 256 entries.
    ///
    /// Each 16-bit channel is truncated to its high byte (never rounded)
    /// and alpha is forced to 255. Entries past the end of `colors` stay
    /// fully zeroed, (0,0,0,0) — never a valid opaque color, so an
    /// out-of-range index upstream reads as a bug, not as black.
    pub fn from_colors(colors: &[RGBA16]) -> Self {
        let mut table = [0u8; PALETTE_LEN as usize];
        for (i, c) in colors.iter().take(256).enumerate() {
            table[i * 4] = (c.b >> 8) as u8;
            table[i * 4 + 1] = (c.g >> 8) as u8;
            table[i * 4 + 2] = (c.r >> 8) as u8;
            table[i * 4 + 3] = 0xFF;
        }
        Self(table)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}
