//! Fixed-size RGBA pixel buffer
//!
//! Row-major, 4 bytes per pixel. Only the R, G and B bytes are ever written;
//! the fourth byte is left as whatever `clear` put there.

use crate::consts::BYTES_PER_PIXEL;
use crate::{Board, Color};

/// Raw raster owned by the frame loop
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a zeroed buffer covering the board
    pub fn new(board: Board) -> Self {
        Self {
            width: board.width,
            pixels: vec![0; board.buffer_len()],
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Zero every byte
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Linear byte offset of (x, y), if a write there is allowed
    ///
    /// Only the linear index is checked, so an x past the right edge lands in
    /// the next row. The last pixel of the buffer is never addressable.
    #[inline]
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        let index = (y as i64 * self.width as i64 + x as i64) * BYTES_PER_PIXEL as i64;
        let limit = self.pixels.len() as i64 - BYTES_PER_PIXEL as i64;
        (index >= 0 && index < limit).then_some(index as usize)
    }

    /// Write a pixel's color bytes; out-of-range coordinates are silently dropped
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.offset(x, y) {
            self.pixels[idx] = color.r;
            self.pixels[idx + 1] = color.g;
            self.pixels[idx + 2] = color.b;
        }
    }

    /// Read back a pixel's color bytes
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.offset(x, y).map(|idx| {
            Color::new(self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2])
        })
    }

    /// Number of pixels with any non-zero color byte
    pub fn lit_pixels(&self) -> usize {
        self.pixels
            .chunks_exact(BYTES_PER_PIXEL)
            .filter(|px| px[..3].iter().any(|&b| b != 0))
            .count()
    }
}
