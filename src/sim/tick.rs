//! Per-frame simulation step
//!
//! Input arrives as an explicit snapshot; nothing here reads global state.

use super::collision::BallCollisions;
use super::state::GameState;

/// Keyboard snapshot for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move the player paddle up
    pub up: bool,
    /// Move the player paddle down
    pub down: bool,
}

/// Advance the game by one frame
///
/// Player paddle first, then the AI paddle (tracking where the ball was at
/// the end of the previous frame), then the ball against both paddles.
pub fn tick(state: &mut GameState, input: &TickInput, speed: f32) -> BallCollisions {
    state.left.update_from_input(input, speed);
    state.right.update_from_ai(&state.ball);

    let hits = state.ball.update(&state.left, &state.right, state.board);
    state.frame += 1;

    if !hits.any() {
        return hits;
    }
    log::trace!("Frame {}: {:?}", state.frame, hits);
    if hits.reset {
        log::debug!(
            "Frame {}: ball left the board, back to centre ({:.1}, {:.1})",
            state.frame,
            state.ball.pos.x,
            state.ball.pos.y
        );
    }
    if hits.left_paddle || hits.right_paddle {
        log::debug!(
            "Frame {}: paddle hit (left={}, right={}), xv={}",
            state.frame,
            hits.left_paddle,
            hits.right_paddle,
            state.ball.vel.x
        );
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;
    use crate::consts::SPEED;
    use glam::Vec2;

    #[test]
    fn test_tick_moves_everything() {
        let mut state = GameState::new(Board::default());
        let input = TickInput {
            up: false,
            down: true,
        };

        tick(&mut state, &input, SPEED);

        assert_eq!(state.frame, 1);
        assert_eq!(state.left.pos.y, 110.0);
        // AI saw the ball before it moved
        assert_eq!(state.right.pos.y, 400.0);
        assert_eq!(state.ball.pos, Vec2::new(705.0, 405.0));
    }

    #[test]
    fn test_ai_lags_ball_by_one_frame() {
        let mut state = GameState::new(Board::default());
        for _ in 0..10 {
            let before = state.ball.pos.y;
            tick(&mut state, &TickInput::default(), SPEED);
            assert_eq!(state.right.pos.y, before);
        }
    }

    #[test]
    fn test_ai_paddle_returns_ball() {
        // Ball heading right at the AI paddle's height always gets returned
        let mut state = GameState::new(Board::default());
        state.ball.pos = Vec2::new(1300.0, 400.0);
        state.ball.vel = Vec2::new(5.0, 0.0);

        let mut returned = false;
        for _ in 0..40 {
            let hits = tick(&mut state, &TickInput::default(), SPEED);
            if hits.right_paddle {
                returned = true;
                break;
            }
        }
        assert!(returned);
        assert_eq!(state.ball.vel.x, -5.0);
    }

    #[test]
    fn test_reports_collisions() {
        let mut state = GameState::new(Board::default());
        let hits = tick(&mut state, &TickInput::default(), SPEED);
        assert!(!hits.any());

        state.ball.pos = Vec2::new(700.0, 790.0);
        let hits = tick(&mut state, &TickInput::default(), SPEED);
        assert!(hits.wall);
        assert!(hits.any());
    }

    #[test]
    fn test_deterministic() {
        let mut a = GameState::new(Board::default());
        let mut b = GameState::new(Board::default());
        let inputs = [
            TickInput { up: true, down: false },
            TickInput { up: false, down: true },
            TickInput::default(),
            TickInput { up: true, down: true },
        ];

        for i in 0..500 {
            let input = inputs[i % inputs.len()];
            tick(&mut a, &input, SPEED);
            tick(&mut b, &input, SPEED);
        }
        assert_eq!(a, b);
    }
}
