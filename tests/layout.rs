use bmpview::*;
use rgb::{RGBA16, RGBA8};

fn gray(width: i32, height: i32, stride: usize, pix: &[u8]) -> RasterImage<'_> {
    RasterImage::Gray8(GrayView {
        width,
        height,
        stride,
        pix,
    })
}

#[test]
fn gray_row_stride_padding() {
    // (width, expected row stride rounded to 4)
    for (w, expected) in [(5usize, 8u32), (4, 4), (1, 4)] {
        let pix = vec![0u8; expected as usize];
        let lay = layout(&gray(w as i32, 1, expected as usize, &pix)).unwrap();
        assert_eq!(lay.header.bits_per_pixel, 8);
        assert_eq!(lay.header.image_size, expected, "width {w}");
        assert_eq!(lay.header.pix_offset, 54 + 1024);
        assert_eq!(
            lay.header.file_size,
            lay.header.pix_offset + lay.header.image_size
        );
        // pixel view aliases the source buffer with its native stride
        assert_eq!(lay.pixels, &pix[..]);
        assert_eq!(lay.stride, expected as usize);
        assert!(lay.is_supported());
    }
}

#[test]
fn gray_palette_is_identity_ramp() {
    let pix = [7u8; 4];
    let lay = layout(&gray(4, 1, 4, &pix)).unwrap();
    let palette = lay.palette.as_ref().unwrap().as_bytes();
    assert_eq!(palette.len(), 1024);
    for i in 0..256 {
        assert_eq!(&palette[i * 4..i * 4 + 4], &[i as u8, i as u8, i as u8, 0xFF]);
    }
}

#[test]
fn indexed_palette_bgr_order_and_zero_fill() {
    let colors = [
        RGBA16 { r: 0xFFFF, g: 0, b: 0, a: 0xFFFF }, // pure red
        RGBA16 { r: 0, g: 0xFFFF, b: 0, a: 0xFFFF },
        RGBA16 { r: 0x1234, g: 0x5678, b: 0x9ABC, a: 0 },
    ];
    let pix = [0u8, 1, 2, 0];
    let img = RasterImage::Indexed8(IndexedView {
        width: 4,
        height: 1,
        stride: 4,
        pix: &pix,
        palette: &colors,
    });
    let lay = layout(&img).unwrap();
    let palette = lay.palette.as_ref().unwrap().as_bytes();

    // entry 0: red stored as B,G,R,A
    assert_eq!(&palette[0..4], &[0, 0, 255, 255]);
    assert_eq!(&palette[4..8], &[0, 255, 0, 255]);
    // 16-bit channels truncate to their high byte; alpha is forced opaque
    assert_eq!(&palette[8..12], &[0x9A, 0x56, 0x12, 255]);
    // entries past the source table stay (0,0,0,0)
    assert!(palette[12..].iter().all(|&b| b == 0));
}

#[test]
fn opaque_rgba_packs_as_24_bit() {
    let pix = [
        10u8, 20, 30, 255, 40, 50, 60, 255, //
        70, 80, 90, 255, 100, 110, 120, 255,
    ];
    let img = RasterImage::Rgba8(RgbaView {
        width: 2,
        height: 2,
        stride: 8,
        pix: &pix,
    });
    let lay = layout(&img).unwrap();
    assert_eq!(lay.header.bits_per_pixel, 24);
    // ceil4(3 * 2) per row
    assert_eq!(lay.header.image_size, 2 * 8);
    assert_eq!(lay.header.pix_offset, 54);
    assert!(lay.palette.is_none());
    // the borrowed pixels stay in the source's 4-byte layout
    assert_eq!(lay.pixels, &pix[..]);
    assert_eq!(lay.stride, 8);
}

#[test]
fn translucent_rgba_packs_as_32_bit() {
    let pix = [
        10u8, 20, 30, 255, 40, 50, 60, 128, //
        70, 80, 90, 255, 100, 110, 120, 255,
    ];
    let img = RasterImage::Nrgba8(RgbaView {
        width: 2,
        height: 2,
        stride: 8,
        pix: &pix,
    });
    let lay = layout(&img).unwrap();
    assert_eq!(lay.header.bits_per_pixel, 32);
    assert_eq!(lay.header.image_size, 2 * 8);
    assert_eq!(
        lay.header.file_size,
        lay.header.pix_offset + lay.header.image_size
    );
}

#[test]
fn other_format_sizes_header_but_carries_no_pixels() {
    let img = RasterImage::Other {
        width: 5,
        height: 2,
    };
    let lay = layout(&img).unwrap();
    assert_eq!(lay.header.bits_per_pixel, 24);
    // ceil4(3 * 5) = 16 per row
    assert_eq!(lay.header.image_size, 2 * 16);
    assert_eq!(
        lay.header.file_size,
        lay.header.pix_offset + lay.header.image_size
    );
    assert!(lay.pixels.is_empty());
    assert_eq!(lay.stride, 0);
    assert!(!lay.is_supported(), "empty pixels with nonzero image_size");
}

#[test]
fn zero_area_images_are_valid_and_empty() {
    let lay = layout(&gray(0, 3, 0, &[])).unwrap();
    assert!(lay.pixels.is_empty());
    assert_eq!(lay.header.image_size, 0);
    assert!(lay.is_supported());
    // palette is still produced for an 8-bit source
    assert!(lay.palette.is_some());

    let img = RasterImage::Rgba8(RgbaView {
        width: 3,
        height: 0,
        stride: 12,
        pix: &[],
    });
    let lay = layout(&img).unwrap();
    assert!(lay.pixels.is_empty());
    assert_eq!(lay.stride, 0);
    assert_eq!(lay.header.width, 3);
    assert_eq!(lay.header.height, 0);
    assert!(lay.is_supported());
}

#[test]
fn negative_bounds_are_rejected() {
    let result = layout(&gray(-1, 4, 0, &[]));
    match result {
        Err(BmpError::NegativeBounds { width, height }) => {
            assert_eq!(width, -1);
            assert_eq!(height, 4);
        }
        other => panic!("expected NegativeBounds, got {other:?}"),
    }

    assert!(matches!(
        layout(&RasterImage::Other { width: 2, height: -7 }),
        Err(BmpError::NegativeBounds { .. })
    ));
}

#[test]
fn file_size_invariant_holds_for_every_format() {
    let pix = [0u8; 16];
    let colors = [RGBA16 { r: 0, g: 0, b: 0, a: 0xFFFF }];
    let images = [
        gray(2, 2, 4, &pix[..8]),
        RasterImage::Indexed8(IndexedView {
            width: 2,
            height: 2,
            stride: 4,
            pix: &pix[..8],
            palette: &colors,
        }),
        RasterImage::Rgba8(RgbaView { width: 2, height: 2, stride: 8, pix: &pix }),
        RasterImage::Nrgba8(RgbaView { width: 2, height: 2, stride: 8, pix: &pix }),
        RasterImage::Other { width: 2, height: 2 },
    ];
    for img in &images {
        let lay = layout(img).unwrap();
        assert_eq!(
            lay.header.file_size,
            lay.header.pix_offset + lay.header.image_size,
            "{img:?}"
        );
    }
}

#[test]
fn to_vec_writes_header_palette_pixels_in_order() {
    let pix = [0u8, 64, 0, 0, 128, 255, 0, 0];
    let lay = layout(&gray(2, 2, 4, &pix)).unwrap();
    let bytes = lay.to_vec(&Unstoppable).unwrap();

    assert_eq!(bytes.len(), 54 + 1024 + 8);
    assert_eq!(bytes.len(), lay.header.file_size as usize);
    assert_eq!(&bytes[0..2], b"BM");
    // pix_offset field at byte 10
    assert_eq!(
        u32::from_le_bytes(bytes[10..14].try_into().unwrap()),
        54 + 1024
    );
    // pixels are appended as-is, source row order, source padding included
    assert_eq!(&bytes[54 + 1024..], &pix[..]);
}

#[test]
fn reinterpret_rgba_aliases_layout_output() {
    let pix = [1u8, 2, 3, 200, 5, 6, 7, 200];
    let img = RasterImage::Rgba8(RgbaView {
        width: 2,
        height: 1,
        stride: 8,
        pix: &pix,
    });
    let view = reinterpret_as_rgba(&img);
    assert_eq!(view.width, 2);
    assert_eq!(view.height, 1);
    assert_eq!(view.stride, 8);
    assert_eq!(view.pix, &pix[..]);
    assert!(!view.is_opaque());
}

#[test]
fn reinterpret_rgba_swallows_negative_bounds() {
    // the shim keeps the original's error-dropping behavior: a malformed
    // source collapses to an empty view that still reports its bounds
    let img = RasterImage::Other {
        width: -3,
        height: 2,
    };
    let view = reinterpret_as_rgba(&img);
    assert_eq!(view.width, -3);
    assert_eq!(view.height, 2);
    assert!(view.pix.is_empty());
    assert_eq!(view.stride, 0);
}

#[test]
fn opacity_scan_respects_stride() {
    // stride 12 with 4 junk bytes per row; junk alpha must not count
    let pix = [
        1u8, 1, 1, 255, 2, 2, 2, 255, 9, 9, 9, 0, //
        3, 3, 3, 255, 4, 4, 4, 255, 9, 9, 9, 0,
    ];
    let v = RgbaView {
        width: 2,
        height: 2,
        stride: 12,
        pix: &pix,
    };
    assert!(v.is_opaque());
}

#[test]
fn color_at_resolves_gray_and_indexed() {
    let gpix = [0u8, 200, 0, 0];
    let g = gray(2, 1, 4, &gpix);
    assert_eq!(g.color_at(1, 0), Some(RGBA8 { r: 200, g: 200, b: 200, a: 255 }));
    assert_eq!(g.color_at(2, 0), None);
    assert_eq!(g.color_at(-1, 0), None);

    let colors = [RGBA16 { r: 0xFF00, g: 0, b: 0, a: 0xFFFF }];
    let ipix = [0u8, 3, 0, 0]; // index 3 is past the table
    let img = RasterImage::Indexed8(IndexedView {
        width: 2,
        height: 1,
        stride: 4,
        pix: &ipix,
        palette: &colors,
    });
    assert_eq!(img.color_at(0, 0), Some(RGBA8 { r: 0xFF, g: 0, b: 0, a: 255 }));
    assert_eq!(img.color_at(1, 0), None, "out-of-table index");
}

#[test]
fn ascii_render_marks_reference_black() {
    let pix = [
        0u8, 0, 0, 255, 255, 255, 255, 255, //
        9, 9, 9, 255, 0, 0, 0, 255,
    ];
    let img = RasterImage::Rgba8(RgbaView {
        width: 2,
        height: 2,
        stride: 8,
        pix: &pix,
    });
    assert_eq!(to_ascii(&img), ".O\nO.\n");

    assert!(is_black(BLACK, BLACK));
    // translucent black is not the reference black
    assert!(!is_black(RGBA8 { r: 0, g: 0, b: 0, a: 0 }, BLACK));
}

#[cfg(feature = "std")]
mod fs_helpers {
    #[test]
    fn modified_time_rename_remove() {
        let dir = std::env::temp_dir();
        let a = dir.join("bmpview-fs-test-a");
        let b = dir.join("bmpview-fs-test-b");
        std::fs::write(&a, b"x").unwrap();

        let mtime = bmpview::fs::modified_time(&a).unwrap();
        assert!(mtime > 0);

        bmpview::fs::rename(&a, &b).unwrap();
        assert!(!a.exists());
        assert!(b.exists());

        bmpview::fs::remove(&b).unwrap();
        assert!(!b.exists());
        assert!(bmpview::fs::modified_time(&b).is_err());
    }
}
