//! Fixed timestep simulation tick
//!
//! Core match loop step: commands, paddles, ball, collisions, lives, game over.

use glam::DVec2;

use super::collision::{
    hits_bottom_wall, hits_left_wall, hits_right_wall, hits_top_wall, moving_toward,
    paddle_collision,
};
use super::controller::MoveIntent;
use super::paddle::Side;
use super::state::{FlashKind, GamePhase, GameState};
use crate::consts::DIFFICULTY_DIVISOR;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held keys for the left paddle (player 1)
    pub left: MoveIntent,
    /// Held keys for the right paddle (player 2)
    pub right: MoveIntent,
    /// Reinitialize the match (one-shot)
    pub restart: bool,
    /// Stop the loop for good (one-shot)
    pub quit: bool,
}

impl TickInput {
    pub fn intent(&self, side: Side) -> MoveIntent {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// What happened during one tick, for audio/visual feedback
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Side whose paddle let the ball through
    pub missed: Option<Side>,
    /// Side whose paddle returned the ball
    pub paddle_hit: Option<Side>,
    pub wall_bounce: bool,
    pub game_over: bool,
    pub restarted: bool,
    pub quit: bool,
}

/// Advance the match by one tick of `dt_ms` milliseconds
///
/// Negative or non-finite durations count as zero elapsed time.
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f64) -> TickEvents {
    let mut events = TickEvents::default();

    if !state.running {
        return events;
    }

    if input.quit {
        state.running = false;
        events.quit = true;
        log::info!("quit requested after {} ticks", state.time_ticks);
        return events;
    }

    if input.restart {
        state.restart();
        events.restarted = true;
        return events;
    }

    // Frozen until restart
    if state.phase == GamePhase::GameOver {
        return events;
    }

    let dt_ms = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };
    state.elapsed_ms += dt_ms;
    state.time_ticks += 1;

    // Move paddles
    for side in Side::BOTH {
        let command = state
            .controller(side)
            .decide(state.paddle(side), &state.ball, input.intent(side));
        command.apply(state.paddle_mut(side));
    }

    // Ball got past a paddle: that side pays
    if hits_left_wall(&state.ball) {
        lose_life(state, Side::Left, &mut events);
    }
    if hits_right_wall(&state.ball, &state.field) {
        lose_life(state, Side::Right, &mut events);
    }

    // Top/bottom bounce, only while heading into the wall
    let ball = &state.ball;
    if (hits_top_wall(ball) && ball.vel.y < 0.0)
        || (hits_bottom_wall(ball, &state.field) && ball.vel.y > 0.0)
    {
        state.ball.scale_velocity(DVec2::new(1.0, -1.0));
        events.wall_bounce = true;
    }

    state.ball.integrate();

    // Difficulty ramps with time played
    let speed_up = 1.0 + state.elapsed_ms / DIFFICULTY_DIVISOR;
    state.ball.scale_velocity(DVec2::new(speed_up, 1.0));

    for side in Side::BOTH {
        let paddle = state.paddle(side);
        if paddle_collision(paddle, &state.ball) && moving_toward(paddle, &state.ball) {
            let factor = state.hit_factor(side);
            state.ball.accelerate_on_paddle_hit(factor);
            state.flash.trigger(FlashKind::Hit);
            events.paddle_hit = Some(side);
            log::debug!("{} hit, vertical velocity now {factor}", side.as_str());
        }
    }

    state.flash.decay();

    if let Some(loser) = Side::BOTH.into_iter().find(|&s| state.paddle(s).is_out()) {
        let winner = loser.opponent();
        state.phase = GamePhase::GameOver;
        state.winner = Some(winner);
        events.game_over = true;
        log::info!(
            "game over after {} ticks, winner: {}",
            state.time_ticks,
            winner.as_str()
        );
    }

    events
}

fn lose_life(state: &mut GameState, side: Side, events: &mut TickEvents) {
    let paddle = state.paddle_mut(side);
    paddle.lives = paddle.lives.saturating_sub(1);
    let lives = paddle.lives;

    state.ball.reset(&state.field);
    state.flash.trigger(FlashKind::Miss);
    events.missed = Some(side);
    log::debug!("{} missed, {lives} lives left", side.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ControllerKind, MatchConfig, PlayfieldConfig};
    use crate::consts::*;
    use crate::sim::ball::Ball;
    use crate::sim::controller::Controller;

    fn human_match() -> GameState {
        let config = MatchConfig {
            left: ControllerKind::Human,
            right: ControllerKind::Human,
            ..Default::default()
        };
        GameState::new(&config)
    }

    #[test]
    fn test_human_input_moves_paddles() {
        let mut state = human_match();
        let input = TickInput {
            left: MoveIntent::UP,
            right: MoveIntent::DOWN,
            ..Default::default()
        };
        tick(&mut state, &input, TICK_MS);
        assert_eq!(state.paddle(Side::Left).y, 215.0);
        assert_eq!(state.paddle(Side::Right).y, 235.0);
    }

    #[test]
    fn test_first_tick_integrates_and_scales() {
        let mut state = human_match();
        tick(&mut state, &TickInput::default(), 16.0);

        assert_eq!(state.ball.pos, DVec2::new(395.0, 291.0));
        assert_eq!(state.ball.vel.x, 5.0 * (1.0 + 16.0 / 1e8));
        assert_eq!(state.ball.vel.y, 1.0);
        assert_eq!(state.elapsed_ms, 16.0);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_negative_dt_counts_as_zero() {
        let mut state = human_match();
        tick(&mut state, &TickInput::default(), -50.0);
        tick(&mut state, &TickInput::default(), f64::NAN);
        assert_eq!(state.elapsed_ms, 0.0);
        assert_eq!(state.ball.vel.x, 5.0, "no speed-up at zero elapsed time");
        assert_eq!(state.time_ticks, 2);
    }

    #[test]
    fn test_left_exit_costs_left_paddle() {
        let mut state = human_match();
        state.ball.pos = DVec2::new(0.0, 100.0);
        state.ball.vel = DVec2::new(-8.0, 2.0);

        let events = tick(&mut state, &TickInput::default(), TICK_MS);

        assert_eq!(events.missed, Some(Side::Left));
        assert_eq!(state.paddle(Side::Left).lives, 2);
        assert_eq!(state.paddle(Side::Right).lives, 3);
        assert_eq!(state.flash.kind, FlashKind::Miss);
        assert_eq!(state.flash.alpha, MISS_FLASH_ALPHA - FLASH_DECAY);
    }

    #[test]
    fn test_right_exit_costs_right_paddle() {
        let mut state = human_match();
        state.ball.pos = DVec2::new(785.0, 100.0);

        let events = tick(&mut state, &TickInput::default(), TICK_MS);

        assert_eq!(events.missed, Some(Side::Right));
        assert_eq!(state.paddle(Side::Right).lives, 2);
        assert_eq!(state.paddle(Side::Left).lives, 3);
    }

    #[test]
    fn test_exit_recenters_ball() {
        let mut state = human_match();
        state.ball.pos = DVec2::new(-4.0, 33.0);
        state.ball.vel = DVec2::new(-12.0, -3.0);

        tick(&mut state, &TickInput::default(), 0.0);

        // Reset to (390, 290) with (5, 1), then one integration step
        assert_eq!(state.ball.pos, DVec2::new(395.0, 291.0));
        assert_eq!(state.ball.vel, Ball::start_velocity());
    }

    #[test]
    fn test_top_wall_flips_vertical_only() {
        let mut state = human_match();
        state.ball.pos = DVec2::new(300.0, 0.0);
        state.ball.vel = DVec2::new(5.0, -3.0);

        let events = tick(&mut state, &TickInput::default(), 0.0);

        assert!(events.wall_bounce);
        assert_eq!(state.ball.vel, DVec2::new(5.0, 3.0));
        assert_eq!(state.ball.pos, DVec2::new(305.0, 3.0));
    }

    #[test]
    fn test_bottom_wall_flips_vertical_only() {
        let mut state = human_match();
        state.ball.pos = DVec2::new(300.0, 580.0);
        state.ball.vel = DVec2::new(-5.0, 4.0);

        let events = tick(&mut state, &TickInput::default(), 0.0);

        assert!(events.wall_bounce);
        assert_eq!(state.ball.vel, DVec2::new(-5.0, -4.0));
    }

    #[test]
    fn test_no_wall_flip_when_leaving_the_wall() {
        let mut state = human_match();
        // Still touching the top edge but already heading down
        state.ball.pos = DVec2::new(300.0, -2.0);
        state.ball.vel = DVec2::new(5.0, 3.0);

        let events = tick(&mut state, &TickInput::default(), 0.0);

        assert!(!events.wall_bounce);
        assert_eq!(state.ball.vel, DVec2::new(5.0, 3.0));
        assert_eq!(state.ball.pos, DVec2::new(305.0, 1.0));
    }

    #[test]
    fn test_paddle_hit_sets_vertical_from_offset() {
        let mut state = human_match();
        // Ball will land overlapping the left paddle, center 40px above the paddle's
        state.ball.pos = DVec2::new(45.0, 250.0);
        state.ball.vel = DVec2::new(-6.0, 0.0);

        let events = tick(&mut state, &TickInput::default(), 0.0);

        assert_eq!(events.paddle_hit, Some(Side::Left));
        assert_eq!(state.ball.vel, DVec2::new(6.0, -4.0));
        assert_eq!(state.flash.kind, FlashKind::Hit);
        assert_eq!(state.flash.alpha, HIT_FLASH_ALPHA - FLASH_DECAY);
    }

    #[test]
    fn test_dead_center_hit_uses_tie_break() {
        let mut state = human_match();
        // Ball center lines up with the right paddle's center (300) after integration
        state.ball.pos = DVec2::new(745.0, 290.0);
        state.ball.vel = DVec2::new(6.0, 0.0);

        let events = tick(&mut state, &TickInput::default(), 0.0);

        assert_eq!(events.paddle_hit, Some(Side::Right));
        assert_eq!(state.ball.vel.x, -6.0);
        assert!((1.0..10.0).contains(&state.ball.vel.y));
    }

    #[test]
    fn test_no_bounce_when_moving_away_from_paddle() {
        let mut state = human_match();
        // Overlapping the left paddle but already heading right
        state.ball.pos = DVec2::new(25.0, 250.0);
        state.ball.vel = DVec2::new(6.0, 0.0);

        let events = tick(&mut state, &TickInput::default(), 0.0);

        assert_eq!(events.paddle_hit, None);
        assert_eq!(state.ball.vel, DVec2::new(6.0, 0.0));
    }

    #[test]
    fn test_last_life_ends_match() {
        let mut state = human_match();
        state.paddle_mut(Side::Right).lives = 1;
        state.ball.pos = DVec2::new(790.0, 100.0);

        let events = tick(&mut state, &TickInput::default(), TICK_MS);

        assert!(events.game_over);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.winner, Some(Side::Left));
        assert_eq!(state.paddle(Side::Right).lives, 0);
    }

    #[test]
    fn test_game_over_freezes_state() {
        let mut state = human_match();
        state.paddle_mut(Side::Left).lives = 1;
        state.ball.pos = DVec2::new(-1.0, 100.0);
        tick(&mut state, &TickInput::default(), TICK_MS);
        assert_eq!(state.winner, Some(Side::Right));

        let ball = state.ball.clone();
        let paddles = state.paddles.clone();
        let elapsed = state.elapsed_ms;
        let input = TickInput {
            left: MoveIntent::DOWN,
            right: MoveIntent::UP,
            ..Default::default()
        };
        for _ in 0..30 {
            let events = tick(&mut state, &input, TICK_MS);
            assert_eq!(events, TickEvents::default());
        }

        assert_eq!(state.ball, ball);
        assert_eq!(state.paddles, paddles);
        assert_eq!(state.elapsed_ms, elapsed);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_restart_from_game_over() {
        let mut state = human_match();
        state.paddle_mut(Side::Left).lives = 1;
        state.ball.pos = DVec2::new(-1.0, 100.0);
        tick(&mut state, &TickInput::default(), TICK_MS);
        assert!(state.is_game_over());

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        let events = tick(&mut state, &restart, TICK_MS);

        assert!(events.restarted);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.winner, None);
        assert_eq!(state.paddle(Side::Left).lives, 3);
        assert_eq!(state.paddle(Side::Right).lives, 3);
        assert_eq!(state.ball, Ball::new(&state.field));
        assert_eq!(state.elapsed_ms, 0.0);
    }

    #[test]
    fn test_quit_is_terminal() {
        let mut state = human_match();
        let quit = TickInput {
            quit: true,
            ..Default::default()
        };
        let events = tick(&mut state, &quit, TICK_MS);
        assert!(events.quit);
        assert!(!state.running);

        let ball = state.ball.clone();
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        let events = tick(&mut state, &restart, TICK_MS);
        assert!(!events.restarted);
        assert_eq!(state.ball, ball);
    }

    #[test]
    fn test_reactive_controller_tracks_ball() {
        let mut state = GameState::with_controllers(
            PlayfieldConfig::default(),
            [Controller::Human, Controller::from_kind(ControllerKind::Reactive)],
            1,
        );
        state.ball.pos.y = 50.0;
        state.ball.vel = DVec2::ZERO;

        // Held keys for the computer side are ignored
        let input = TickInput {
            right: MoveIntent::DOWN,
            ..Default::default()
        };
        tick(&mut state, &input, 0.0);
        assert_eq!(state.paddle(Side::Right).y, 215.0);
        assert_eq!(state.paddle(Side::Left).y, 225.0);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let config = MatchConfig {
            left: ControllerKind::Classifier,
            right: ControllerKind::Reactive,
            seed: 99999,
            ..Default::default()
        };
        let mut state1 = GameState::new(&config);
        let mut state2 = GameState::new(&config);

        for _ in 0..2000 {
            tick(&mut state1, &TickInput::default(), TICK_MS);
            tick(&mut state2, &TickInput::default(), TICK_MS);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.ball, state2.ball);
        assert_eq!(state1.paddles, state2.paddles);
        assert_eq!(state1.phase, state2.phase);
    }
}
