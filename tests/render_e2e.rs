//! End-to-end tests: decoded image in, escape-coded text out.

use asciify::ascii::{render_to_string, resize, Palette, RenderOptions, EDGES_DISABLED, RESET};
use asciify::pixels::{decode, PixelBuffer};
use image::{DynamicImage, Rgb, RgbImage};

/// Split rendered output into rows of (escape, glyph) cells.
fn parse_cells(text: &str) -> Vec<Vec<((u8, u8, u8), char)>> {
    let body = text.strip_suffix(RESET).expect("output ends with reset");
    body.lines()
        .map(|line| {
            line.split("\x1b[38;2;")
                .skip(1)
                .map(|cell| {
                    let (rgb, glyph) = cell.split_once('m').unwrap();
                    let parts: Vec<u8> = rgb.split(';').map(|p| p.parse().unwrap()).collect();
                    let glyph = glyph.chars().next().unwrap();
                    ((parts[0], parts[1], parts[2]), glyph)
                })
                .collect()
        })
        .collect()
}

#[test]
fn test_red_square_renders_single_red_at() {
    let red = PixelBuffer::new(2, 2, 3, [1.0, 0.0, 0.0].repeat(4)).unwrap();
    let cell = resize(&red, 1, 1, 2.0).unwrap();
    let text = render_to_string(&cell, &RenderOptions::default()).unwrap();
    assert_eq!(text, "\x1b[38;2;255;0;0m@\n\x1b[0m");
}

#[test]
fn test_flat_gray_never_shows_edges() {
    let gray = PixelBuffer::new(12, 8, 3, vec![0.5; 12 * 8 * 3]).unwrap();
    for threshold in [0.0, 0.5, 1.0, 3.99] {
        let opts = RenderOptions {
            edge_threshold: threshold,
            palette: Palette::TrueColor,
        };
        let text = render_to_string(&gray, &opts).unwrap();
        for row in parse_cells(&text) {
            for (_, glyph) in row {
                if threshold > 0.0 {
                    // 0.5^2 = 0.25 -> '='
                    assert_eq!(glyph, '=');
                } else {
                    // a zero threshold marks every cell, with the zero-angle glyph
                    assert_eq!(glyph, '|');
                }
            }
        }
    }
}

#[test]
fn test_output_shape_matches_image() {
    let img = PixelBuffer::new(5, 3, 3, vec![0.2; 45]).unwrap();
    let text = render_to_string(&img, &RenderOptions::default()).unwrap();
    let rows = parse_cells(&text);
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.len() == 5));
    assert_eq!(text.matches(RESET).count(), 1);
}

#[test]
fn test_edges_trace_a_bright_square() {
    // Bright square in the middle of a dark field
    let size = 12;
    let mut samples = Vec::with_capacity(size * size * 3);
    for y in 0..size {
        for x in 0..size {
            let v = if (4..8).contains(&x) && (4..8).contains(&y) { 1.0 } else { 0.0 };
            samples.extend_from_slice(&[v, v, v]);
        }
    }
    let img = PixelBuffer::new(size, size, 3, samples).unwrap();

    let plain = parse_cells(&render_to_string(&img, &RenderOptions::default()).unwrap());
    let edged = parse_cells(
        &render_to_string(
            &img,
            &RenderOptions {
                edge_threshold: 1.0,
                palette: Palette::TrueColor,
            },
        )
        .unwrap(),
    );

    let glyphs = |rows: &Vec<Vec<((u8, u8, u8), char)>>| -> String {
        rows.iter().flatten().map(|(_, g)| *g).collect()
    };
    assert!(!glyphs(&plain).contains(['|', '_', '/', '\\']));
    let edged_glyphs = glyphs(&edged);
    assert!(edged_glyphs.contains('|'));
    assert!(edged_glyphs.contains('_'));
    assert!(edged_glyphs.contains('/') || edged_glyphs.contains('\\'));

    // Colors are identical: edges only change glyphs
    for (a, b) in plain.iter().flatten().zip(edged.iter().flatten()) {
        assert_eq!(a.0, b.0);
    }
}

#[test]
fn test_retro_output_uses_palette_escapes() {
    let img = PixelBuffer::new(4, 1, 3, vec![0.9, 0.3, 0.2, 0.1, 0.2, 0.8, 0.4, 0.4, 0.4, 0.0, 0.6, 0.5])
        .unwrap();
    let opts = RenderOptions {
        edge_threshold: EDGES_DISABLED,
        palette: Palette::Retro,
    };
    let rows = parse_cells(&render_to_string(&img, &opts).unwrap());
    for ((r, g, b), _) in &rows[0] {
        for ch in [r, g, b] {
            assert!(*ch == 0 || *ch == 255);
        }
    }
}

#[test]
fn test_decoded_png_renders() {
    let mut img = RgbImage::from_pixel(40, 20, Rgb([0, 0, 0]));
    for y in 0..20 {
        for x in 20..40 {
            img.put_pixel(x, y, Rgb([0, 255, 0]));
        }
    }
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("half.png");
    DynamicImage::ImageRgb8(img).save(&path).unwrap();

    let buf = decode::load(&path).unwrap();
    assert_eq!((buf.width(), buf.height(), buf.channels()), (40, 20, 3));

    // 20 * 8 / (2 * 40) = 2 rows
    let resized = resize(&buf, 8, 10, 2.0).unwrap();
    assert_eq!((resized.width(), resized.height()), (8, 2));

    let rows = parse_cells(&render_to_string(&resized, &RenderOptions::default()).unwrap());
    assert_eq!(rows.len(), 2);
    for row in &rows {
        assert_eq!(row[0], ((255, 255, 255), ' '));
        assert_eq!(row[7], ((0, 255, 0), '@'));
    }
}
