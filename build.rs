// Bakes the printable ASCII range of an 8x8 bitmap font into a grid atlas
// PNG in OUT_DIR. Tile index is the character code, 16 tiles per row.

use std::env;
use std::path::Path;

use font8x8::{BASIC_FONTS, UnicodeFonts};
use image::{Rgba, RgbaImage};

const TILE: u32 = 8;
const COLUMNS: u32 = 16;
const GLYPHS: u32 = 128;

fn main() {
    let rows = GLYPHS / COLUMNS;
    let mut img = RgbaImage::new(COLUMNS * TILE, rows * TILE);

    for code in 0..GLYPHS {
        let Some(glyph) = char::from_u32(code).and_then(|c| BASIC_FONTS.get(c)) else {
            continue;
        };
        let ox = (code % COLUMNS) * TILE;
        let oy = (code / COLUMNS) * TILE;
        for (y, row) in glyph.iter().enumerate() {
            for x in 0..TILE {
                // Bit 0 is the leftmost pixel.
                if row & (1 << x) != 0 {
                    img.put_pixel(ox + x, oy + y as u32, Rgba([0xFF, 0xFF, 0xFF, 0xFF]));
                }
            }
        }
    }

    let out = env::var("OUT_DIR").expect("build: OUT_DIR not set");
    let path = Path::new(&out).join("font_atlas.png");
    img.save(&path).expect("build: could not save font atlas");

    println!("cargo:rerun-if-changed=build.rs");
}
