//! Game configuration
//!
//! Immutable for the lifetime of one engine instance; changing a value means
//! constructing a new engine. The browser front-end sources these from the
//! page URL query string and writes them back so a game is linkable.

use serde::{Deserialize, Serialize};

/// Which noise overlay to apply over the rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NoiseKind {
    /// Per-pixel independent random flicker
    #[default]
    Static,
    /// Smooth time-scrolling coherent noise
    Perlin,
}

impl NoiseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoiseKind::Static => "static",
            NoiseKind::Perlin => "perlin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "static" => Some(NoiseKind::Static),
            "perlin" => Some(NoiseKind::Perlin),
            _ => None,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Paddle width in pixels
    pub paddle_width: f32,
    /// Paddle height in pixels
    pub paddle_height: f32,
    /// Ball radius in pixels
    pub ball_radius: f32,
    /// Ball speed per axis (px per frame)
    pub speed: f32,
    /// Noise overlay mode
    pub noise_kind: NoiseKind,
    /// Noise intensity, nominally in [0, 1] but not enforced
    pub noise_intensity: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            paddle_width: 10.0,
            paddle_height: 60.0,
            ball_radius: 5.0,
            speed: 2.0,
            noise_kind: NoiseKind::Static,
            noise_intensity: 0.1,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from a URL query string (with or without the
    /// leading `?`). Unknown keys are ignored; malformed values fall back to
    /// the per-field default with a warning.
    pub fn from_query(query: &str) -> Self {
        let mut cfg = Self::default();
        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "paddleWidth" => cfg.paddle_width = parse_or(value, key, cfg.paddle_width),
                "paddleHeight" => cfg.paddle_height = parse_or(value, key, cfg.paddle_height),
                "ballRadius" => cfg.ball_radius = parse_or(value, key, cfg.ball_radius),
                "speed" => cfg.speed = parse_or(value, key, cfg.speed),
                "noiseType" => match NoiseKind::from_str(value) {
                    Some(kind) => cfg.noise_kind = kind,
                    None => log::warn!("ignoring unknown noiseType {:?}", value),
                },
                "noiseIntensity" => cfg.noise_intensity = parse_or(value, key, cfg.noise_intensity),
                _ => {}
            }
        }
        cfg
    }

    /// Encode this configuration as a URL query string (no leading `?`),
    /// suitable for writing back into the page location.
    pub fn to_query(&self) -> String {
        format!(
            "paddleWidth={}&paddleHeight={}&ballRadius={}&speed={}&noiseType={}&noiseIntensity={}",
            self.paddle_width,
            self.paddle_height,
            self.ball_radius,
            self.speed,
            self.noise_kind.as_str(),
            self.noise_intensity,
        )
    }
}

fn parse_or<T: std::str::FromStr + Copy + std::fmt::Display>(
    value: &str,
    key: &str,
    default: T,
) -> T {
    match value.parse() {
        Ok(v) => v,
        Err(_) => {
            log::warn!("ignoring malformed {key}={value:?}, using {default}");
            default
        }
    }
}
