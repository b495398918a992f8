//! Noise Pong - two-paddle Pong with a per-pixel noise overlay
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball/paddle kinematics, collisions, scoring)
//! - `render`: Software RGBA rendering (frame surface, bitmap font, scene, noise pass)
//! - `engine`: Per-frame advance loop and lifecycle operations
//! - `config`: Game configuration with URL query-string support

pub mod config;
pub mod engine;
pub mod render;
pub mod sim;

pub use config::{GameConfig, NoiseKind};
pub use engine::PongGame;
pub use render::Frame;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions in the reference deployment
    pub const PLAYFIELD_WIDTH: u32 = 800;
    pub const PLAYFIELD_HEIGHT: u32 = 600;

    /// Horizontal inset of each paddle from its wall
    pub const PADDLE_INSET: f32 = 10.0;
    /// Vertical paddle speed while a key is held (px per frame)
    pub const PADDLE_KEY_SPEED: f32 = 4.0;

    /// Score text: glyph scale and top edge
    pub const SCORE_TEXT_SCALE: u32 = 5;
    pub const SCORE_TEXT_TOP: i32 = 15;
    /// Control-hint text: glyph scale and distance of its top edge from the bottom
    pub const HINT_TEXT_SCALE: u32 = 2;
    pub const HINT_TEXT_BOTTOM_MARGIN: i32 = 34;

    /// Coherent noise sampling: spatial grid scale and per-frame scroll
    pub const NOISE_GRID_SCALE: f64 = 0.01;
    pub const NOISE_FRAME_SCALE: f64 = 0.01;
}
