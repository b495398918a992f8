//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::consts::PADDLE_INSET;

/// One paddle. `x` is fixed per side for the whole session; `y` moves and is
/// clamped so the paddle stays fully inside the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Current vertical velocity (negative = up, 0 = stopped)
    pub dy: f32,
}

impl Paddle {
    /// Spawn a paddle vertically centered at the given x inset
    pub fn new(x: f32, playfield_height: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y: playfield_height / 2.0 - height / 2.0,
            width,
            height,
            dy: 0.0,
        }
    }
}

/// The ball. Exactly one exists; scoring recenters it rather than
/// destroying it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// Complete state of one game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Playfield dimensions
    pub width: f32,
    pub height: f32,
    /// Configured ball speed per axis, used when the ball is recentered
    pub speed: f32,
    pub paddle_left: Paddle,
    pub paddle_right: Paddle,
    pub ball: Ball,
    pub score_left: u32,
    pub score_right: u32,
    /// Advance counter; only used as the time axis for the coherent noise pass
    pub frame: u64,
}

impl GameState {
    /// Create the initial state: paddles centered at fixed insets, ball at
    /// the playfield center moving diagonally down-right at full speed.
    pub fn new(width: f32, height: f32, config: &GameConfig) -> Self {
        let paddle_left = Paddle::new(PADDLE_INSET, height, config.paddle_width, config.paddle_height);
        let paddle_right = Paddle::new(
            width - config.paddle_width - PADDLE_INSET,
            height,
            config.paddle_width,
            config.paddle_height,
        );
        Self {
            width,
            height,
            speed: config.speed,
            paddle_left,
            paddle_right,
            ball: Ball {
                pos: Vec2::new(width / 2.0, height / 2.0),
                vel: Vec2::new(config.speed, config.speed),
                radius: config.ball_radius,
            },
            score_left: 0,
            score_right: 0,
            frame: 0,
        }
    }
}
