use std::path::Path;

use anyhow::Context;
use image::{Rgba, RgbaImage};

/// Accent color shared with the extension's branding.
const ACCENT: Rgba<u8> = Rgba([0x4a, 0x90, 0xe2, 0xff]);
const WHITE: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);

/// 5x7 dot-matrix glyphs, rows top to bottom, bit 4 is the leftmost column.
/// Covers what an icon label needs: A-Z and 0-9.
const GLYPHS: &[(char, [u8; 7])] = &[
    ('A', [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    ('B', [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110]),
    ('C', [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110]),
    ('D', [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110]),
    ('E', [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]),
    ('F', [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000]),
    ('G', [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111]),
    ('H', [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    ('I', [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('J', [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100]),
    ('K', [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001]),
    ('L', [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111]),
    ('M', [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001]),
    ('N', [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001]),
    ('O', [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('P', [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000]),
    ('Q', [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101]),
    ('R', [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]),
    ('S', [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110]),
    ('T', [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
    ('U', [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('V', [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]),
    ('W', [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001]),
    ('X', [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001]),
    ('Y', [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100]),
    ('Z', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111]),
    ('0', [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
    ('1', [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('2', [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111]),
    ('3', [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110]),
    ('4', [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
    ('5', [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
    ('6', [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
    ('7', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
    ('8', [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
    ('9', [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),
];

fn glyph_rows(ch: char) -> Option<&'static [u8; 7]> {
    let upper = ch.to_ascii_uppercase();
    GLYPHS.iter().find(|(g, _)| *g == upper).map(|(_, rows)| rows)
}

/// Render one square placeholder icon: accent background, white rounded
/// inset, the label character drawn centered in accent.
///
/// Characters outside A-Z / 0-9 leave the inset blank.
pub fn render_icon(size: u32, label: char) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, ACCENT);

    let margin = size / 6;
    let radius = size / 8;
    draw_rounded_rect(&mut img, margin, size - margin, radius, WHITE);
    draw_glyph(&mut img, label, ACCENT);

    img
}

/// Fill the square [min, max) with `color`, rounding each corner to `radius`.
fn draw_rounded_rect(img: &mut RgbaImage, min: u32, max: u32, radius: u32, color: Rgba<u8>) {
    let (min, max) = (i64::from(min), i64::from(max) - 1);
    let r = i64::from(radius);

    for y in min..=max {
        for x in min..=max {
            // Distance past the corner circle centers; zero along the edges.
            let dx = (min + r - x).max(x - (max - r)).max(0);
            let dy = (min + r - y).max(y - (max - r)).max(0);
            if dx * dx + dy * dy <= r * r {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Draw the label glyph centered, scaled so it spans roughly half the icon.
fn draw_glyph(img: &mut RgbaImage, ch: char, color: Rgba<u8>) {
    let Some(rows) = glyph_rows(ch) else {
        return;
    };

    let size = img.width();
    let cell = (size / 2 / 7).max(1);
    let width = cell * 5;
    let height = cell * 7;
    let x0 = (size - width) / 2;
    let y0 = (size - height) / 2;

    for (row, bits) in rows.iter().enumerate() {
        for col in 0..5u32 {
            if bits & (0b10000 >> col) == 0 {
                continue;
            }
            for dy in 0..cell {
                for dx in 0..cell {
                    img.put_pixel(
                        x0 + col * cell + dx,
                        y0 + row as u32 * cell + dy,
                        color,
                    );
                }
            }
        }
    }
}

/// Render and write `icon<SIZE>.png` into `out_dir` for each requested size,
/// creating the directory if needed.
pub fn write_icons(out_dir: &Path, sizes: &[u32], label: &str) -> anyhow::Result<()> {
    let letter = label.chars().next().unwrap_or('E');

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    for &size in sizes {
        let img = render_icon(size, letter);
        let path = out_dir.join(format!("icon{size}.png"));
        img.save(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Created {}", path.display());
    }

    println!("Generated {} icon(s) in {}", sizes.len(), out_dir.display());
    Ok(())
}
