//! Per-frame simulation step
//!
//! Advances ball and paddle kinematics and resolves collisions, in the same
//! order every frame: ball motion (including wall bounces and scoring), then
//! paddle motion, then paddle collisions.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::GameState;

/// Advance the simulation by one frame
pub fn step(state: &mut GameState, rng: &mut Pcg32) {
    move_ball(state, rng);
    move_paddles(state);
    check_collisions(state);
}

/// Integrate ball motion, bounce off the horizontal walls, and score when a
/// wall behind a paddle is crossed. Scoring recenters the ball immediately,
/// so at most one side can score per frame.
pub fn move_ball(state: &mut GameState, rng: &mut Pcg32) {
    state.ball.pos += state.ball.vel;

    let r = state.ball.radius;
    if state.ball.pos.y + r > state.height || state.ball.pos.y - r < 0.0 {
        state.ball.vel.y = -state.ball.vel.y;
    }

    if state.ball.pos.x + r > state.width {
        state.score_left += 1;
        log::debug!("left scores: {} - {}", state.score_left, state.score_right);
        reset_ball(state, rng);
    }

    if state.ball.pos.x - r < 0.0 {
        state.score_right += 1;
        log::debug!("right scores: {} - {}", state.score_left, state.score_right);
        reset_ball(state, rng);
    }
}

/// Recenter the ball with a fresh random diagonal direction. Horizontal and
/// vertical signs are chosen independently; magnitude per axis is always the
/// configured speed.
pub fn reset_ball(state: &mut GameState, rng: &mut Pcg32) {
    state.ball.pos = Vec2::new(state.width / 2.0, state.height / 2.0);
    state.ball.vel = Vec2::new(
        state.speed * random_sign(rng),
        state.speed * random_sign(rng),
    );
}

fn random_sign(rng: &mut Pcg32) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}

/// Integrate paddle motion and clamp both paddles to the playfield.
/// Min before max: a paddle taller than the playfield pins to y=0 instead
/// of panicking on an inverted clamp range.
pub fn move_paddles(state: &mut GameState) {
    for paddle in [&mut state.paddle_left, &mut state.paddle_right] {
        paddle.y += paddle.dy;
        paddle.y = paddle.y.min(state.height - paddle.height).max(0.0);
    }
}

/// Resolve ball/paddle collisions. Collision uses the ball's center y against
/// the paddle's vertical extent (strict), not true circle-rectangle
/// intersection. On hit the horizontal velocity is inverted and the ball is
/// clamped to the paddle's outer face so the next frame cannot re-trigger.
pub fn check_collisions(state: &mut GameState) {
    let ball = &mut state.ball;

    let left = &state.paddle_left;
    if ball.pos.x - ball.radius < left.x + left.width
        && ball.pos.y > left.y
        && ball.pos.y < left.y + left.height
    {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = left.x + left.width + ball.radius;
    }

    let right = &state.paddle_right;
    if ball.pos.x + ball.radius > right.x
        && ball.pos.y > right.y
        && ball.pos.y < right.y + right.height
    {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = right.x - ball.radius;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn test_state() -> GameState {
        GameState::new(800.0, 600.0, &GameConfig::default())
    }

    fn test_rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    #[test]
    fn test_ball_integration() {
        let mut state = test_state();
        let mut rng = test_rng();

        move_ball(&mut state, &mut rng);
        assert_eq!(state.ball.pos, Vec2::new(402.0, 302.0));
        assert_eq!((state.score_left, state.score_right), (0, 0));
    }

    #[test]
    fn test_bottom_wall_bounce_inverts_dy() {
        let mut state = test_state();
        let mut rng = test_rng();
        state.ball.pos = Vec2::new(400.0, 594.0);
        state.ball.vel = Vec2::new(2.0, 2.0);

        move_ball(&mut state, &mut rng);
        // 596 + radius 5 > 600
        assert_eq!(state.ball.vel.y, -2.0);
        assert_eq!(state.ball.vel.x, 2.0);
    }

    #[test]
    fn test_top_wall_bounce_inverts_dy() {
        let mut state = test_state();
        let mut rng = test_rng();
        state.ball.pos = Vec2::new(400.0, 6.0);
        state.ball.vel = Vec2::new(2.0, -2.0);

        move_ball(&mut state, &mut rng);
        assert_eq!(state.ball.vel.y, 2.0);
    }

    #[test]
    fn test_right_wall_scores_left_and_recenters() {
        let mut state = test_state();
        let mut rng = test_rng();
        state.ball.pos = Vec2::new(800.0 - 5.0 - 1.0, 300.0);
        state.ball.vel = Vec2::new(2.0, 0.0);

        move_ball(&mut state, &mut rng);
        assert_eq!(state.score_left, 1);
        assert_eq!(state.score_right, 0);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_left_wall_scores_right_and_recenters() {
        let mut state = test_state();
        let mut rng = test_rng();
        state.ball.pos = Vec2::new(6.0, 300.0);
        state.ball.vel = Vec2::new(-2.0, 0.0);

        move_ball(&mut state, &mut rng);
        assert_eq!(state.score_left, 0);
        assert_eq!(state.score_right, 1);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_reset_ball_speed_magnitude() {
        let mut state = test_state();
        let mut rng = test_rng();

        for _ in 0..32 {
            reset_ball(&mut state, &mut rng);
            assert_eq!(state.ball.vel.x.abs(), 2.0);
            assert_eq!(state.ball.vel.y.abs(), 2.0);
        }
    }

    #[test]
    fn test_left_paddle_collision_inverts_once() {
        let mut state = test_state();
        // Ball overlapping the left paddle face, centered on the paddle
        let face = state.paddle_left.x + state.paddle_left.width;
        state.ball.pos = Vec2::new(face + 3.0, state.paddle_left.y + 30.0);
        state.ball.vel = Vec2::new(-2.0, 0.0);

        check_collisions(&mut state);
        assert_eq!(state.ball.vel.x, 2.0);
        // Clamped to just outside the paddle face
        assert_eq!(state.ball.pos.x, face + state.ball.radius);

        // Same position on the following frame must not re-trigger
        check_collisions(&mut state);
        assert_eq!(state.ball.vel.x, 2.0);
    }

    #[test]
    fn test_right_paddle_collision_inverts_and_clamps() {
        let mut state = test_state();
        state.ball.pos = Vec2::new(state.paddle_right.x + 2.0, state.paddle_right.y + 30.0);
        state.ball.vel = Vec2::new(2.0, 0.0);

        check_collisions(&mut state);
        assert_eq!(state.ball.vel.x, -2.0);
        assert_eq!(state.ball.pos.x, state.paddle_right.x - state.ball.radius);

        check_collisions(&mut state);
        assert_eq!(state.ball.vel.x, -2.0);
    }

    #[test]
    fn test_ball_misses_paddle_vertically() {
        let mut state = test_state();
        state.ball.pos = Vec2::new(12.0, state.paddle_left.y - 20.0);
        state.ball.vel = Vec2::new(-2.0, 0.0);

        check_collisions(&mut state);
        assert_eq!(state.ball.vel.x, -2.0);
    }

    #[test]
    fn test_paddle_clamped_at_bottom() {
        let mut state = test_state();
        state.paddle_left.y = 560.0;
        state.paddle_left.dy = 4.0;

        for _ in 0..10 {
            move_paddles(&mut state);
        }
        assert_eq!(state.paddle_left.y, 600.0 - 60.0);
    }

    #[test]
    fn test_oversize_paddle_pins_to_top() {
        // Paddle taller than the playfield: degenerate but valid config,
        // must settle at y=0 rather than fail.
        let cfg = GameConfig {
            paddle_height: 700.0,
            ..GameConfig::default()
        };
        let mut state = GameState::new(800.0, 600.0, &cfg);
        let mut rng = test_rng();

        step(&mut state, &mut rng);
        assert_eq!(state.paddle_left.y, 0.0);
        assert_eq!(state.paddle_right.y, 0.0);

        state.paddle_left.dy = 4.0;
        step(&mut state, &mut rng);
        assert_eq!(state.paddle_left.y, 0.0);
    }

    #[test]
    fn test_oversize_ball_keeps_simulating() {
        // Ball wider than the playfield scores off both walls every frame;
        // the step must still complete and scores stay monotonic.
        let cfg = GameConfig {
            ball_radius: 1000.0,
            ..GameConfig::default()
        };
        let mut state = GameState::new(800.0, 600.0, &cfg);
        let mut rng = test_rng();

        for _ in 0..10 {
            step(&mut state, &mut rng);
        }
        assert!(state.score_left + state.score_right >= 1);
    }

    #[test]
    fn test_paddle_clamped_at_top() {
        let mut state = test_state();
        state.paddle_right.y = 8.0;
        state.paddle_right.dy = -4.0;

        for _ in 0..10 {
            move_paddles(&mut state);
        }
        assert_eq!(state.paddle_right.y, 0.0);
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_in_bounds(
            dys in proptest::collection::vec(-8.0f32..8.0, 1..200),
            start in 0.0f32..540.0,
        ) {
            let mut state = test_state();
            state.paddle_left.y = start;
            for dy in dys {
                state.paddle_left.dy = dy;
                move_paddles(&mut state);
                prop_assert!(state.paddle_left.y >= 0.0);
                prop_assert!(state.paddle_left.y <= state.height - state.paddle_left.height);
            }
        }

        #[test]
        fn prop_reset_direction_is_diagonal(seed in any::<u64>()) {
            let mut state = test_state();
            let mut rng = Pcg32::seed_from_u64(seed);
            reset_ball(&mut state, &mut rng);
            prop_assert_eq!(state.ball.vel.x.abs(), state.speed);
            prop_assert_eq!(state.ball.vel.y.abs(), state.speed);
            prop_assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        }

        #[test]
        fn prop_scores_monotonic(steps in 1usize..500) {
            let mut state = test_state();
            let mut rng = test_rng();
            let mut last = (0u32, 0u32);
            for _ in 0..steps {
                step(&mut state, &mut rng);
                let now = (state.score_left, state.score_right);
                prop_assert!(now.0 >= last.0 && now.1 >= last.1);
                last = now;
            }
        }
    }
}
