//! Software rasterization module
//!
//! Everything on screen is written byte-by-byte into a flat RGBA buffer that
//! the platform hands to the display once per frame.

pub mod buffer;
pub mod shapes;

pub use buffer::PixelBuffer;
pub use shapes::{fill_circle, fill_rect, fill_rect_centered};
