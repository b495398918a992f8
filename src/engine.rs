//! Game engine
//!
//! Owns the drawing surface, the simulation state, the noise pass, and the
//! seeded RNG for one game session. The host drives [`PongGame::advance`]
//! once per display refresh while the engine is running, and forwards raw
//! directional key state through the two paddle setters at any time.
//!
//! Each advance draws the current state, applies the noise pass, and only
//! then integrates physics, so the noised image intentionally lags the
//! physics by one frame (matching the original behavior).

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::GameConfig;
use crate::render::{Frame, NoisePass, scene};
use crate::sim::{self, GameState};

/// One Pong session bound to one drawing surface
pub struct PongGame {
    surface: Frame,
    state: GameState,
    noise: NoisePass,
    rng: Pcg32,
    running: bool,
}

impl PongGame {
    /// Construct a session: paddles centered at fixed insets, ball at the
    /// playfield center with velocity `(speed, speed)`, scores zero. The seed
    /// fixes both the ball-reset directions and the noise field.
    pub fn new(surface: Frame, config: &GameConfig, seed: u64) -> Self {
        let state = GameState::new(surface.width() as f32, surface.height() as f32, config);
        log::info!(
            "new game: {}x{} seed={} noise={}@{}",
            surface.width(),
            surface.height(),
            seed,
            config.noise_kind.as_str(),
            config.noise_intensity,
        );
        Self {
            noise: NoisePass::new(config.noise_kind, config.noise_intensity, seed as u32),
            rng: Pcg32::seed_from_u64(seed),
            surface,
            state,
            running: false,
        }
    }

    /// Mark the frame loop as running. Returns `false` (and schedules
    /// nothing) when already running, so a host cannot stack duplicate loops.
    pub fn start(&mut self) -> bool {
        if self.running {
            log::warn!("start() ignored: already running");
            return false;
        }
        self.running = true;
        log::info!("game started");
        true
    }

    /// Stop the frame loop. The host checks [`Self::is_running`] before each
    /// scheduled iteration, so no further frame runs after this. No-op when
    /// not running.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            log::info!("game stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance one frame: render the current state, apply the noise pass
    /// (bumping the frame counter first, as the original does), then
    /// integrate ball and paddle motion and resolve collisions.
    pub fn advance(&mut self) {
        scene::draw(&mut self.surface, &self.state);
        self.state.frame += 1;
        self.noise
            .apply(&mut self.surface, self.state.frame, &mut self.rng);
        sim::step(&mut self.state, &mut self.rng);
    }

    /// Set the left paddle's vertical velocity (negative = up, 0 = stop);
    /// effective on the next advance.
    pub fn set_paddle_left_direction(&mut self, dy: f32) {
        self.state.paddle_left.dy = dy;
    }

    /// Set the right paddle's vertical velocity; effective on the next advance.
    pub fn set_paddle_right_direction(&mut self, dy: f32) {
        self.state.paddle_right.dy = dy;
    }

    /// Zero both scores and recenter the ball with a fresh random diagonal.
    /// Paddle positions and velocities are untouched.
    pub fn reset(&mut self) {
        self.state.score_left = 0;
        self.state.score_right = 0;
        sim::reset_ball(&mut self.state, &mut self.rng);
        log::info!("game reset");
    }

    /// The rendered surface for the host to present
    pub fn surface(&self) -> &Frame {
        &self.surface
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}
