//! Runtime settings
//!
//! Defaults come from `consts`. On native builds a JSON file named by
//! `PIXEL_PONG_SETTINGS` may override any subset of fields. Settings are never
//! written back.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::Board;
use crate::consts::*;

/// Environment variable holding the path of a settings file
pub const SETTINGS_ENV: &str = "PIXEL_PONG_SETTINGS";

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Board (and window) width in pixels
    pub board_width: u32,
    /// Board (and window) height in pixels
    pub board_height: u32,
    /// Paddle movement per frame
    pub speed: f32,
    /// End-of-frame sleep in milliseconds
    pub frame_delay_ms: u64,
    pub window_title: String,
    /// Stop after this many frames (headless runs)
    pub max_frames: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            speed: SPEED,
            frame_delay_ms: FRAME_DELAY_MS,
            window_title: WINDOW_TITLE.to_string(),
            max_frames: None,
        }
    }
}

impl Settings {
    pub fn board(&self) -> Board {
        Board::new(self.board_width, self.board_height)
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::validated)
    }

    /// Replace values the game cannot run with
    pub fn validated(mut self) -> Self {
        if self.board_width == 0 {
            log::warn!("board_width of 0 ignored, using {}", BOARD_WIDTH);
            self.board_width = BOARD_WIDTH;
        }
        if self.board_height == 0 {
            log::warn!("board_height of 0 ignored, using {}", BOARD_HEIGHT);
            self.board_height = BOARD_HEIGHT;
        }
        // A paddle crossing more than the whole board per frame is unplayable
        if !self.speed.is_finite() || self.speed.abs() > self.board_height as f32 {
            log::warn!("speed {} ignored, using {}", self.speed, SPEED);
            self.speed = SPEED;
        }
        self
    }

    /// Load settings from the file named by `PIXEL_PONG_SETTINGS`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(SETTINGS_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.to_string_lossy());
                    settings
                }
                Err(e) => {
                    log::warn!("Bad settings file {}: {}", path.to_string_lossy(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Can't read settings file {}: {}", path.to_string_lossy(), e);
                Self::default()
            }
        }
    }

    /// Native-only; other targets always get defaults
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }
}
