//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - One step per frame, no timestep scaling
//! - Input passed in explicitly each frame
//! - No rendering or platform dependencies beyond drawing into a `PixelBuffer`

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::BallCollisions;
pub use state::{Ball, GameState, Paddle};
pub use tick::{TickInput, tick};
