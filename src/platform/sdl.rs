//! SDL2 window backend
//!
//! The RGBA buffer is uploaded into a streaming `ABGR8888` texture (R, G, B, A
//! byte order in memory on little-endian) and stretched over the window.

use sdl2::EventPump;
use sdl2::keyboard::Scancode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};

use super::{Event, Platform, PlatformError, TickInput};
use crate::Board;
use crate::consts::BYTES_PER_PIXEL;

fn init_err(e: impl std::fmt::Display) -> PlatformError {
    PlatformError::Init(e.to_string())
}

pub struct SdlPlatform {
    // Freed by SDL together with the canvas' renderer
    texture: Texture,
    _texture_creator: TextureCreator<WindowContext>,
    canvas: Canvas<Window>,
    event_pump: EventPump,
    pitch: usize,
    _context: sdl2::Sdl,
}

impl SdlPlatform {
    pub fn new(title: &str, board: Board) -> Result<Self, PlatformError> {
        let context = sdl2::init().map_err(init_err)?;
        let video = context.video().map_err(init_err)?;

        let window = video
            .window(title, board.width, board.height)
            .position_centered()
            .build()
            .map_err(init_err)?;

        let canvas = window.into_canvas().accelerated().build().map_err(init_err)?;

        let texture_creator = canvas.texture_creator();
        let texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::ABGR8888, board.width, board.height)
            .map_err(init_err)?;

        let event_pump = context.event_pump().map_err(init_err)?;

        log::info!("SDL window '{}' opened at {}x{}", title, board.width, board.height);

        Ok(Self {
            texture,
            _texture_creator: texture_creator,
            canvas,
            event_pump,
            pitch: board.width as usize * BYTES_PER_PIXEL,
            _context: context,
        })
    }
}

impl Platform for SdlPlatform {
    fn poll_events(&mut self) -> Vec<Event> {
        self.event_pump
            .poll_iter()
            .map(|event| match event {
                sdl2::event::Event::Quit { .. } => Event::Quit,
                _ => Event::Other,
            })
            .collect()
    }

    fn key_state(&self) -> TickInput {
        let keys = self.event_pump.keyboard_state();
        TickInput {
            up: keys.is_scancode_pressed(Scancode::Up),
            down: keys.is_scancode_pressed(Scancode::Down),
        }
    }

    fn present(&mut self, pixels: &[u8]) -> Result<(), PlatformError> {
        self.texture
            .update(None, pixels, self.pitch)
            .map_err(|e| PlatformError::Present(e.to_string()))?;
        self.canvas
            .copy(&self.texture, None, None)
            .map_err(PlatformError::Present)?;
        self.canvas.present();
        Ok(())
    }
}
