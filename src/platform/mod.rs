//! Platform abstraction layer
//!
//! Handles the outside world for the frame loop:
//! - Event queue (quit)
//! - Keyboard state
//! - Presenting a finished RGBA frame
//! - Frame pacing

pub mod headless;
#[cfg(feature = "sdl")]
pub mod sdl;

pub use headless::HeadlessPlatform;
#[cfg(feature = "sdl")]
pub use sdl::SdlPlatform;

pub use crate::sim::TickInput;

use std::time::Duration;

/// Events the frame loop cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Window closed / quit requested
    Quit,
    /// Anything else; drained and ignored
    Other,
}

/// Failures at the platform boundary
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("platform init failed: {0}")]
    Init(String),
    #[error("present failed: {0}")]
    Present(String),
}

/// A window (or stand-in) the frame loop drives
pub trait Platform {
    /// Drain every pending event
    fn poll_events(&mut self) -> Vec<Event>;

    /// Current up/down key state
    fn key_state(&self) -> TickInput;

    /// Show a finished frame; `pixels` is row-major RGBA, `width * 4` bytes per row
    fn present(&mut self, pixels: &[u8]) -> Result<(), PlatformError>;

    /// Block until the next frame
    fn delay(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}
