//! Filled 2D primitives
//!
//! Positions are truncated toward zero before rasterizing; every pixel goes
//! through `PixelBuffer::set_pixel`, so shapes hanging off the board are clipped
//! for free. Coordinate offsets saturate, so shapes at the extremes of `i32`
//! are clipped rather than overflowing.

use glam::Vec2;

use super::buffer::PixelBuffer;
use crate::Color;

/// Fill a disk of `radius` centred on `center`
///
/// Scans the `2r x 2r` box around the centre and keeps offsets with
/// `dx² + dy² < r²`. Offsets exactly on the circle are left out.
pub fn fill_circle(center: Vec2, radius: i32, color: Color, buf: &mut PixelBuffer) {
    let cx = center.x as i32;
    let cy = center.y as i32;
    let r_sq = radius * radius;

    for dy in -radius..radius {
        for dx in -radius..radius {
            if dx * dx + dy * dy < r_sq {
                buf.set_pixel(cx.saturating_add(dx), cy.saturating_add(dy), color);
            }
        }
    }
}

/// Fill `[x, x + width) × [y, y + height)`
pub fn fill_rect(x: i32, y: i32, width: i32, height: i32, color: Color, buf: &mut PixelBuffer) {
    for dy in 0..height {
        for dx in 0..width {
            buf.set_pixel(x.saturating_add(dx), y.saturating_add(dy), color);
        }
    }
}

/// Fill a rectangle whose top-left is `center - size / 2` (integer halves)
///
/// With odd sizes the rectangle sits half a pixel up/left of `center`.
pub fn fill_rect_centered(center: Vec2, width: i32, height: i32, color: Color, buf: &mut PixelBuffer) {
    let x = (center.x as i32).saturating_sub(width / 2);
    let y = (center.y as i32).saturating_sub(height / 2);
    fill_rect(x, y, width, height, color, buf);
}
