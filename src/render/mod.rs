//! Software rendering
//!
//! Everything draws into an RGBA8 [`Frame`] that the host blits onto a 2D
//! canvas (`ImageData` byte layout). No GPU involvement: the noise pass needs
//! raw per-pixel read/write over the finished frame.

pub mod font;
pub mod frame;
pub mod noise;
pub mod scene;

pub use frame::{BLACK, Frame, WHITE};
pub use noise::NoisePass;
