//! Frame composition
//!
//! Draws one complete frame from a [`GameState`], in the same order every
//! time: clear, background and border, paddles, ball, score, control hints.

use super::font::draw_text_centered;
use super::frame::{BLACK, Frame, WHITE};
use crate::consts::{
    HINT_TEXT_BOTTOM_MARGIN, HINT_TEXT_SCALE, SCORE_TEXT_SCALE, SCORE_TEXT_TOP,
};
use crate::sim::{GameState, Paddle};

/// Render the whole scene into `frame`
pub fn draw(frame: &mut Frame, state: &GameState) {
    frame.clear();
    draw_background(frame);
    draw_paddle(frame, &state.paddle_left);
    draw_paddle(frame, &state.paddle_right);
    draw_ball(frame, state);
    draw_scores(frame, state);
    draw_controls(frame);
}

fn draw_background(frame: &mut Frame) {
    let (w, h) = (frame.width() as f32, frame.height() as f32);
    frame.fill_rect(0.0, 0.0, w, h, BLACK);
    // one pixel border around the playfield
    frame.stroke_rect(1.0, 1.0, w - 1.0, h - 1.0, WHITE);
}

fn draw_paddle(frame: &mut Frame, paddle: &Paddle) {
    frame.fill_rect(paddle.x, paddle.y, paddle.width, paddle.height, WHITE);
}

fn draw_ball(frame: &mut Frame, state: &GameState) {
    frame.fill_circle(state.ball.pos.x, state.ball.pos.y, state.ball.radius, WHITE);
}

fn draw_scores(frame: &mut Frame, state: &GameState) {
    let text = format!("{} - {}", state.score_left, state.score_right);
    let cx = frame.width() as i32 / 2;
    draw_text_centered(frame, &text, cx, SCORE_TEXT_TOP, SCORE_TEXT_SCALE, WHITE);
}

fn draw_controls(frame: &mut Frame) {
    let w = frame.width() as i32;
    let top = frame.height() as i32 - HINT_TEXT_BOTTOM_MARGIN;
    draw_text_centered(frame, "LEFT PADDLE: W/S", w / 4, top, HINT_TEXT_SCALE, WHITE);
    draw_text_centered(
        frame,
        "RIGHT PADDLE: UP/DOWN ARROWS",
        w / 4 * 3,
        top,
        HINT_TEXT_SCALE,
        WHITE,
    );
}
