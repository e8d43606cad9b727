use image::ImageError;

/// Grid atlas baked by the build script: 8x8 cells, 16 per row, tile index
/// is the character code.
const BUILTIN_ATLAS: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/font_atlas.png"));
const BUILTIN_TILE: u32 = 8;

/// Bitmap font for the software presenter. Only the alpha channel of the
/// atlas is kept; a glyph pixel is either inked or not.
pub struct GlyphAtlas {
    mask: Vec<bool>,
    width: u32,
    cols: u32,
    rows: u32,
    tile: u32,
}

impl GlyphAtlas {
    /// Load a square-tiled grid atlas from PNG bytes.
    pub fn from_png(png_bytes: &[u8], tile: u32) -> Result<Self, ImageError> {
        let img = image::load_from_memory(png_bytes)?.to_rgba8();
        let (width, height) = img.dimensions();
        let tile = tile.max(1);
        let mask = img.pixels().map(|p| p.0[3] >= 0x80).collect();
        Ok(Self { mask, width, cols: width / tile, rows: height / tile, tile })
    }

    /// The ASCII font compiled into the binary.
    pub fn builtin() -> Result<Self, ImageError> {
        Self::from_png(BUILTIN_ATLAS, BUILTIN_TILE)
    }

    pub fn tile(&self) -> u32 { self.tile }

    /// Tile of `ch`, if the atlas has one.
    pub fn index_of(&self, ch: char) -> Option<u32> {
        let index = ch as u32;
        (index < self.cols * self.rows).then_some(index)
    }

    /// Whether pixel `(x, y)` of `ch`'s tile is inked. Characters outside
    /// the atlas have no ink.
    pub fn is_inked(&self, ch: char, x: u32, y: u32) -> bool {
        if x >= self.tile || y >= self.tile {
            return false;
        }
        let Some(index) = self.index_of(ch) else {
            return false;
        };
        let px = (index % self.cols) * self.tile + x;
        let py = (index / self.cols) * self.tile + y;
        self.mask[(py * self.width + px) as usize]
    }
}
