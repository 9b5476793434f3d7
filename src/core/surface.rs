//=========================================================================
// Surface
//=========================================================================
//
// Owned RGBA pixel buffer that scenes draw into and the platform
// presents once per frame.
//
// Primitives:
//   fill()       → whole buffer
//   fill_rect()  → clipped axis-aligned rectangle
//   draw_text()  → monospace 8x8 bitmap glyphs scaled to `size` px tall,
//                  3/5 as wide (Courier proportions)
//   blit()       → copy another surface at an offset (clipped)
//
// Layout: row-major, 4 bytes per pixel (R, G, B, A), matching the frame
// layout expected by `pixels`.
//
//=========================================================================

//=== External Dependencies ===============================================

use font8x8::{UnicodeFonts, BASIC_FONTS};

//=== Internal Dependencies ===============================================

use crate::core::config::Resolution;

const BYTES_PER_PIXEL: usize = 4;
const GLYPH_CELL: u32 = 8;

//=== Color ===============================================================

/// Opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const SILVER: Color = Color::rgb(192, 192, 192);
    pub const BLUE_GRAY: Color = Color::rgb(102, 153, 204);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xff]
    }
}

//=== Rect ================================================================

/// Axis-aligned rectangle in surface pixels. May extend past the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

//=== Surface =============================================================

/// 2D RGBA canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Surface {
    //--- Construction -----------------------------------------------------

    /// Allocates a black surface.
    pub fn new(width: u32, height: u32) -> Self {
        let mut surface = Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        };
        surface.fill(Color::BLACK);
        surface
    }

    pub fn with_resolution(resolution: Resolution) -> Self {
        Self::new(resolution.width, resolution.height)
    }

    //--- Queries ----------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn resolution(&self) -> Resolution {
        Resolution::new(self.width, self.height)
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_rgba(&self) -> &[u8] {
        &self.data
    }

    /// Colour at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        Some(Color::rgb(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    //--- Drawing ----------------------------------------------------------

    pub fn fill(&mut self, color: Color) {
        let rgba = color.to_rgba();
        for px in self.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Fills `rect`, clipped to the surface bounds.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some((x0, y0, x1, y1)) = self.clip(rect.x, rect.y, rect.width, rect.height) else {
            return;
        };

        let rgba = color.to_rgba();
        for y in y0..y1 {
            let start = self.offset(x0, y);
            let end = self.offset(x1, y);
            for px in self.data[start..end].chunks_exact_mut(BYTES_PER_PIXEL) {
                px.copy_from_slice(&rgba);
            }
        }
    }

    /// Renders `text` with its top-left corner at `(x, y)`.
    ///
    /// Each glyph occupies a cell `size` px tall and `glyph_advance(size)`
    /// px wide. Characters without a glyph advance the cursor but draw
    /// nothing.
    pub fn draw_text(&mut self, text: &str, x: i32, y: i32, size: u32, color: Color) {
        if size == 0 {
            return;
        }

        let advance = Self::glyph_advance(size);
        let mut cursor_x = x;
        for ch in text.chars() {
            if let Some(glyph) = BASIC_FONTS.get(ch) {
                self.draw_glyph(&glyph, cursor_x, y, advance, size, color);
            }
            cursor_x = cursor_x.saturating_add(advance as i32);
        }
    }

    /// Horizontal advance of one character at `size`.
    pub fn glyph_advance(size: u32) -> u32 {
        (size * 3 / 5).max(1)
    }

    /// Copies `src` onto this surface with its origin at `(x, y)`.
    pub fn blit(&mut self, src: &Surface, x: i32, y: i32) {
        let Some((x0, y0, x1, y1)) = self.clip(x, y, src.width, src.height) else {
            return;
        };

        let row_bytes = (x1 - x0) as usize * BYTES_PER_PIXEL;
        for dst_y in y0..y1 {
            let src_x = (x0 as i64 - x as i64) as u32;
            let src_y = (dst_y as i64 - y as i64) as u32;
            let src_start = src.offset(src_x, src_y);
            let dst_start = self.offset(x0, dst_y);
            self.data[dst_start..dst_start + row_bytes]
                .copy_from_slice(&src.data[src_start..src_start + row_bytes]);
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }

    /// Intersects a rectangle with the surface; returns `[x0, x1) × [y0, y1)`.
    fn clip(&self, x: i32, y: i32, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
        let x0 = (x as i64).clamp(0, self.width as i64);
        let y0 = (y as i64).clamp(0, self.height as i64);
        let x1 = (x as i64 + width as i64).clamp(0, self.width as i64);
        let y1 = (y as i64 + height as i64).clamp(0, self.height as i64);

        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }

    fn draw_glyph(
        &mut self,
        glyph: &[u8; 8],
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Color,
    ) {
        let Some((x0, y0, x1, y1)) = self.clip(x, y, width, height) else {
            return;
        };

        let rgba = color.to_rgba();
        for dst_y in y0..y1 {
            // Nearest-neighbour sample back into the 8x8 cell.
            let row = ((dst_y as i64 - y as i64) as u32 * GLYPH_CELL / height) as usize;
            let bits = glyph[row];
            for dst_x in x0..x1 {
                let col = (dst_x as i64 - x as i64) as u32 * GLYPH_CELL / width;
                // Bit 0 is the leftmost pixel.
                if bits & (1 << col) != 0 {
                    let i = self.offset(dst_x, dst_y);
                    self.data[i..i + BYTES_PER_PIXEL].copy_from_slice(&rgba);
                }
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
