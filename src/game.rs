//! Frame loop
//!
//! Each iteration: drain events, clear, update, draw, present, sleep.

use crate::Settings;
use crate::platform::{Event, Platform};
use crate::raster::PixelBuffer;
use crate::sim::{BallCollisions, GameState, TickInput, tick};

/// Whether the loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Summary of a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Frames handed to the platform
    pub frames: u64,
    /// Presents the platform rejected
    pub failed_presents: u64,
}

/// Simulation state plus the raster it draws into
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    buffer: PixelBuffer,
    speed: f32,
}

impl Game {
    pub fn new(settings: &Settings) -> Self {
        let board = settings.board();
        Self {
            state: GameState::new(board),
            buffer: PixelBuffer::new(board),
            speed: settings.speed,
        }
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Build one frame: clear, simulate, then draw paddles and ball
    pub fn frame(&mut self, input: &TickInput) -> BallCollisions {
        self.buffer.clear();
        let hits = tick(&mut self.state, input, self.speed);
        self.state.draw(&mut self.buffer);
        hits
    }
}

/// Look for a quit request among this frame's events
fn next_state(events: &[Event]) -> LoopState {
    let mut state = LoopState::Running;
    for event in events {
        match event {
            Event::Quit => state = LoopState::Terminated,
            Event::Other => {}
        }
    }
    state
}

/// Drive `game` on `platform` until it asks to quit
pub fn run<P: Platform>(game: &mut Game, platform: &mut P, settings: &Settings) -> RunStats {
    let delay = settings.frame_delay();
    let mut stats = RunStats::default();

    loop {
        if next_state(&platform.poll_events()) == LoopState::Terminated {
            break;
        }

        let input = platform.key_state();
        game.frame(&input);

        if let Err(e) = platform.present(game.buffer().as_bytes()) {
            log::warn!("Frame {}: {}", game.state.frame, e);
            stats.failed_presents += 1;
        }
        stats.frames += 1;

        if settings.max_frames.is_some_and(|max| stats.frames >= max) {
            log::info!("Frame limit {} reached", stats.frames);
            break;
        }

        platform.delay(delay);
    }

    log::info!(
        "Stopped after {} frames ({} failed presents)",
        stats.frames,
        stats.failed_presents
    );
    stats
}
