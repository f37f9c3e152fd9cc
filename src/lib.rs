//! Pixel Pong - two-paddle Pong drawn straight into an RGBA byte buffer
//!
//! Core modules:
//! - `raster`: Pixel buffer and filled-shape rasterization
//! - `sim`: Paddles, ball, collisions and the per-frame step
//! - `game`: Frame loop driving a platform backend
//! - `platform`: Window/input/presentation seam (headless, SDL2)
//! - `settings`: Runtime configuration over `consts`

pub mod game;
pub mod platform;
pub mod raster;
pub mod settings;
pub mod sim;

pub use game::{Game, LoopState, RunStats, run};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Board dimensions (pixels)
    pub const BOARD_WIDTH: u32 = 1400;
    pub const BOARD_HEIGHT: u32 = 800;

    /// Paddle movement per frame under keyboard control
    pub const SPEED: f32 = 10.0;

    /// Sleep at the end of every frame (milliseconds)
    pub const FRAME_DELAY_MS: u64 = 5;

    pub const WINDOW_TITLE: &str = "PONG";

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 20;
    pub const PADDLE_HEIGHT: i32 = 150;
    /// Horizontal distance of each paddle centre from its board edge
    pub const PADDLE_INSET: f32 = 10.0;
    pub const PADDLE_START_Y: f32 = 100.0;

    /// Ball defaults
    pub const BALL_RADIUS: i32 = 15;
    pub const BALL_START_XV: f32 = 5.0;
    pub const BALL_START_YV: f32 = 5.0;

    /// Bytes per pixel in the raster (R, G, B, unused)
    pub const BYTES_PER_PIXEL: usize = 4;
}

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The play area; always the same size as the pixel buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub width: u32,
    pub height: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: consts::BOARD_WIDTH,
            height: consts::BOARD_HEIGHT,
        }
    }
}

impl Board {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Exact centre of the board
    #[inline]
    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    /// Length in bytes of an RGBA raster covering the board
    #[inline]
    pub fn buffer_len(&self) -> usize {
        self.width as usize * self.height as usize * consts::BYTES_PER_PIXEL
    }
}
