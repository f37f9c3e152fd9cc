//! Windowless backend
//!
//! Runs a fixed number of frames with no keys held, then asks to quit.

use super::{Event, Platform, PlatformError, TickInput};
use crate::consts::BYTES_PER_PIXEL;

#[derive(Debug, Clone)]
pub struct HeadlessPlatform {
    max_frames: u64,
    frames_presented: u64,
    last_lit_pixels: usize,
}

impl HeadlessPlatform {
    pub fn new(max_frames: u64) -> Self {
        Self {
            max_frames,
            frames_presented: 0,
            last_lit_pixels: 0,
        }
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Pixels with a non-zero color in the most recent frame
    pub fn last_lit_pixels(&self) -> usize {
        self.last_lit_pixels
    }
}

impl Platform for HeadlessPlatform {
    fn poll_events(&mut self) -> Vec<Event> {
        if self.frames_presented >= self.max_frames {
            vec![Event::Quit]
        } else {
            Vec::new()
        }
    }

    fn key_state(&self) -> TickInput {
        TickInput::default()
    }

    fn present(&mut self, pixels: &[u8]) -> Result<(), PlatformError> {
        if pixels.len() % BYTES_PER_PIXEL != 0 {
            return Err(PlatformError::Present(format!(
                "buffer length {} is not a whole number of pixels",
                pixels.len()
            )));
        }
        self.last_lit_pixels = pixels
            .chunks_exact(BYTES_PER_PIXEL)
            .filter(|px| px[..3].iter().any(|&b| b != 0))
            .count();
        self.frames_presented += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quits_after_max_frames() {
        let mut platform = HeadlessPlatform::new(2);
        assert!(platform.poll_events().is_empty());
        platform.present(&[0; 16]).unwrap();
        assert!(platform.poll_events().is_empty());
        platform.present(&[0; 16]).unwrap();
        assert_eq!(platform.poll_events(), vec![Event::Quit]);
        assert_eq!(platform.frames_presented(), 2);
    }

    #[test]
    fn test_counts_lit_pixels() {
        let mut platform = HeadlessPlatform::new(1);
        platform.present(&[0, 0, 0, 255, 9, 0, 0, 0, 0, 0, 1, 0]).unwrap();
        assert_eq!(platform.last_lit_pixels(), 2);
    }

    #[test]
    fn test_rejects_ragged_buffer() {
        let mut platform = HeadlessPlatform::new(1);
        assert!(matches!(
            platform.present(&[0; 5]),
            Err(PlatformError::Present(_))
        ));
        assert_eq!(platform.frames_presented(), 0);
    }

    #[test]
    fn test_no_keys_held() {
        assert_eq!(HeadlessPlatform::new(1).key_state(), TickInput::default());
    }
}
