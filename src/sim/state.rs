//! Game state and core simulation types

use glam::Vec2;

use super::collision::{
    BallCollisions, hits_horizontal_wall, left_paddle_overlap, out_of_bounds, right_paddle_overlap,
};
use super::tick::TickInput;
use crate::consts::*;
use crate::raster::{PixelBuffer, fill_circle, fill_rect_centered};
use crate::{Board, Color};

/// A paddle; `pos` is the centre of the rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: i32,
    pub height: i32,
    pub color: Color,
}

impl Paddle {
    pub fn new(pos: Vec2, width: i32, height: i32, color: Color) -> Self {
        Self {
            pos,
            width,
            height,
            color,
        }
    }

    /// Player paddle on the left edge
    pub fn left() -> Self {
        Self::new(
            Vec2::new(PADDLE_INSET, PADDLE_START_Y),
            PADDLE_WIDTH,
            PADDLE_HEIGHT,
            Color::WHITE,
        )
    }

    /// AI paddle on the right edge
    pub fn right(board: Board) -> Self {
        Self::new(
            Vec2::new(board.width as f32 - PADDLE_INSET, PADDLE_START_Y),
            PADDLE_WIDTH,
            PADDLE_HEIGHT,
            Color::WHITE,
        )
    }

    /// Keyboard control. Up and down together cancel out; no clamping to the board.
    pub fn update_from_input(&mut self, input: &TickInput, speed: f32) {
        if input.up {
            self.pos.y -= speed;
        }
        if input.down {
            self.pos.y += speed;
        }
    }

    /// Track the ball's height exactly
    pub fn update_from_ai(&mut self, ball: &Ball) {
        self.pos.y = ball.pos.y;
    }

    pub fn draw(&self, buf: &mut PixelBuffer) {
        fill_rect_centered(self.pos, self.width, self.height, self.color, buf);
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: i32,
    pub color: Color,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: i32, color: Color) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
        }
    }

    /// Default ball at the board centre
    pub fn centered(board: Board) -> Self {
        Self::new(
            board.center(),
            Vec2::new(BALL_START_XV, BALL_START_YV),
            BALL_RADIUS,
            Color::WHITE,
        )
    }

    /// Advance one frame and resolve collisions
    ///
    /// Integrates first, then tests in order: top/bottom walls, left/right
    /// exits, left paddle, right paddle. Bounces only flip a velocity sign;
    /// the position is never pushed back out of the wall or paddle.
    pub fn update(&mut self, left: &Paddle, right: &Paddle, board: Board) -> BallCollisions {
        let mut hits = BallCollisions::default();

        self.pos += self.vel;

        if hits_horizontal_wall(self.pos, self.radius, board) {
            self.vel.y = -self.vel.y;
            hits.wall = true;
        }

        // Velocity is kept, so the ball keeps heading the way it left
        if out_of_bounds(self.pos, board) {
            self.pos = board.center();
            hits.reset = true;
        }

        if left_paddle_overlap(self.pos, left) {
            self.vel.x = -self.vel.x;
            hits.left_paddle = true;
        }

        if right_paddle_overlap(self.pos, right) {
            self.vel.x = -self.vel.x;
            hits.right_paddle = true;
        }

        hits
    }

    pub fn draw(&self, buf: &mut PixelBuffer) {
        fill_circle(self.pos, self.radius, self.color, buf);
    }
}

/// Everything the simulation owns
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub board: Board,
    /// Keyboard-controlled paddle
    pub left: Paddle,
    /// AI paddle
    pub right: Paddle,
    pub ball: Ball,
    /// Frames simulated so far
    pub frame: u64,
}

impl GameState {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            left: Paddle::left(),
            right: Paddle::right(board),
            ball: Ball::centered(board),
            frame: 0,
        }
    }

    /// Rasterize both paddles, then the ball
    pub fn draw(&self, buf: &mut PixelBuffer) {
        self.left.draw(buf);
        self.right.draw(buf);
        self.ball.draw(buf);
    }
}
