//! Foreground/background classification and debug ASCII rendering.

use alloc::string::String;

use rgb::RGBA8;

use crate::image::RasterImage;

/// Opaque black, the reference color for foreground classification.
pub const BLACK: RGBA8 = RGBA8 {
    r: 0,
    g: 0,
    b: 0,
    a: 255,
};

/// Whether `color` matches the given reference black exactly.
///
/// A pure comparison; callers pass their own reference (usually
/// [`BLACK`]) instead of relying on shared state.
pub fn is_black(color: RGBA8, reference: RGBA8) -> bool {
    color == reference
}

/// Render the image as newline-terminated rows of `.` (reference black)
/// and `O` (everything else).
///
/// Pixels that cannot be resolved — out-of-table indices, unsupported
/// formats — render as `O`.
pub fn to_ascii(image: &RasterImage) -> String {
    let mut out = String::new();
    for y in 0..image.height().max(0) {
        for x in 0..image.width().max(0) {
            let black = image
                .color_at(x, y)
                .is_some_and(|c| is_black(c, BLACK));
            out.push(if black { '.' } else { 'O' });
        }
        out.push('\n');
    }
    out
}
