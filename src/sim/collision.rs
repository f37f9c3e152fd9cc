//! Collision tests between the ball, the board edges and the paddles
//!
//! Positions are truncated to whole pixels before comparing. None of these
//! tests look at the previous frame: an overlap keeps reporting a hit for as
//! long as it lasts.

use glam::Vec2;

use super::state::Paddle;
use crate::Board;

/// What the ball touched during one update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BallCollisions {
    /// Top or bottom wall (y velocity flipped)
    pub wall: bool,
    /// Left or right exit (moved back to centre)
    pub reset: bool,
    pub left_paddle: bool,
    pub right_paddle: bool,
}

impl BallCollisions {
    pub fn any(&self) -> bool {
        self.wall || self.reset || self.left_paddle || self.right_paddle
    }
}

/// Ball's top edge above the board, or bottom edge below it
#[inline]
pub fn hits_horizontal_wall(pos: Vec2, radius: i32, board: Board) -> bool {
    let y = pos.y as i32;
    y.saturating_sub(radius) < 0 || y.saturating_add(radius) > board.height as i32
}

/// Ball centre left of the board or right of it
#[inline]
pub fn out_of_bounds(pos: Vec2, board: Board) -> bool {
    pos.x < 0.0 || pos.x as i32 > board.width as i32
}

/// Ball height within the paddle's vertical extent (inclusive)
#[inline]
pub fn within_paddle_span(pos: Vec2, paddle: &Paddle) -> bool {
    let y = pos.y as i32;
    let py = paddle.pos.y as i32;
    let half = paddle.height / 2;
    y >= py.saturating_sub(half) && y <= py.saturating_add(half)
}

/// Ball left of `paddle.x + width` and level with the paddle
#[inline]
pub fn left_paddle_overlap(pos: Vec2, paddle: &Paddle) -> bool {
    (pos.x as i32) < (paddle.pos.x as i32).saturating_add(paddle.width)
        && within_paddle_span(pos, paddle)
}

/// Ball right of `paddle.x - width` and level with the paddle
#[inline]
pub fn right_paddle_overlap(pos: Vec2, paddle: &Paddle) -> bool {
    pos.x as i32 > (paddle.pos.x as i32).saturating_sub(paddle.width)
        && within_paddle_span(pos, paddle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn paddle(x: f32, y: f32) -> Paddle {
        Paddle::new(Vec2::new(x, y), 20, 150, Color::WHITE)
    }

    #[test]
    fn test_wall_edges() {
        let board = Board::new(1400, 800);

        assert!(!hits_horizontal_wall(Vec2::new(50.0, 15.0), 15, board));
        assert!(hits_horizontal_wall(Vec2::new(50.0, 14.0), 15, board));
        assert!(hits_horizontal_wall(Vec2::new(50.0, -1.0), 15, board));

        assert!(!hits_horizontal_wall(Vec2::new(50.0, 785.0), 15, board));
        assert!(hits_horizontal_wall(Vec2::new(50.0, 786.0), 15, board));
    }

    #[test]
    fn test_wall_truncates_fraction() {
        let board = Board::new(1400, 800);
        // 785.9 truncates to 785
        assert!(!hits_horizontal_wall(Vec2::new(50.0, 785.9), 15, board));
    }

    #[test]
    fn test_out_of_bounds() {
        let board = Board::new(1400, 800);

        assert!(out_of_bounds(Vec2::new(-0.5, 400.0), board));
        assert!(!out_of_bounds(Vec2::new(0.0, 400.0), board));
        assert!(!out_of_bounds(Vec2::new(1400.0, 400.0), board));
        assert!(!out_of_bounds(Vec2::new(1400.9, 400.0), board));
        assert!(out_of_bounds(Vec2::new(1401.0, 400.0), board));
        // y plays no part
        assert!(!out_of_bounds(Vec2::new(700.0, -5000.0), board));
    }

    #[test]
    fn test_paddle_span_inclusive() {
        let p = paddle(10.0, 100.0);

        assert!(within_paddle_span(Vec2::new(0.0, 25.0), &p));
        assert!(within_paddle_span(Vec2::new(0.0, 175.0), &p));
        assert!(!within_paddle_span(Vec2::new(0.0, 24.0), &p));
        assert!(!within_paddle_span(Vec2::new(0.0, 176.0), &p));
    }

    #[test]
    fn test_far_off_board_paddle_does_not_overflow() {
        let high = paddle(10.0, -1e30);
        assert!(!within_paddle_span(Vec2::new(0.0, 100.0), &high));
        assert!(within_paddle_span(Vec2::new(0.0, -1e30), &high));

        let low = paddle(10.0, 1e30);
        assert!(!within_paddle_span(Vec2::new(0.0, 100.0), &low));
        assert!(!left_paddle_overlap(Vec2::new(5.0, 100.0), &low));
        assert!(hits_horizontal_wall(Vec2::new(0.0, 1e30), 15, Board::new(1400, 800)));
        assert!(hits_horizontal_wall(Vec2::new(0.0, -1e30), 15, Board::new(1400, 800)));
    }

    #[test]
    fn test_left_paddle_threshold() {
        let p = paddle(10.0, 100.0);

        assert!(left_paddle_overlap(Vec2::new(25.0, 100.0), &p));
        assert!(left_paddle_overlap(Vec2::new(29.9, 100.0), &p));
        assert!(!left_paddle_overlap(Vec2::new(30.0, 100.0), &p));
        // Past the paddle still counts
        assert!(left_paddle_overlap(Vec2::new(-200.0, 100.0), &p));
    }

    #[test]
    fn test_right_paddle_threshold() {
        let p = paddle(1390.0, 400.0);

        assert!(right_paddle_overlap(Vec2::new(1371.0, 400.0), &p));
        assert!(!right_paddle_overlap(Vec2::new(1370.0, 400.0), &p));
        assert!(!right_paddle_overlap(Vec2::new(1380.0, 300.0), &p));
    }

    #[test]
    fn test_any() {
        assert!(!BallCollisions::default().any());
        assert!(
            BallCollisions {
                reset: true,
                ..Default::default()
            }
            .any()
        );
    }
}
