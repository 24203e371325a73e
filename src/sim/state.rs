//! Match state and core simulation types
//!
//! One `GameState` lives for the whole process; restart reinitializes it in place.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision::acc_factor;
use super::controller::Controller;
use super::paddle::{Paddle, Side};
use crate::config::{MatchConfig, PlayfieldConfig};
use crate::consts::*;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// A paddle ran out of lives; frozen until restart
    GameOver,
}

/// What triggered the current screen flash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlashKind {
    /// Ball got past a paddle
    Miss,
    /// Ball bounced off a paddle
    Hit,
}

impl FlashKind {
    /// RGB tint for the renderer
    pub fn color(&self) -> [u8; 3] {
        match self {
            FlashKind::Miss => [255, 0, 0],
            FlashKind::Hit => [0, 255, 0],
        }
    }
}

/// Full-screen flash feedback, fading a fixed step per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub alpha: u8,
}

impl Default for Flash {
    fn default() -> Self {
        Self {
            kind: FlashKind::Miss,
            alpha: 0,
        }
    }
}

impl Flash {
    pub fn trigger(&mut self, kind: FlashKind) {
        self.kind = kind;
        self.alpha = match kind {
            FlashKind::Miss => MISS_FLASH_ALPHA,
            FlashKind::Hit => HIT_FLASH_ALPHA,
        };
    }

    pub fn decay(&mut self) {
        self.alpha = self.alpha.saturating_sub(FLASH_DECAY);
    }

    pub fn is_visible(&self) -> bool {
        self.alpha > 0
    }
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Playfield every boundary check is relative to
    pub field: PlayfieldConfig,
    rng: Pcg32,
    /// Left then right; fixed for the whole process
    pub controllers: [Controller; 2],
    /// Left then right
    pub paddles: [Paddle; 2],
    pub ball: Ball,
    /// Milliseconds of play since (re)start; drives difficulty scaling
    pub elapsed_ms: f64,
    /// Simulation tick counter since (re)start
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub winner: Option<Side>,
    /// Cleared by a quit command; the loop stops for good
    pub running: bool,
    pub flash: Flash,
}

impl GameState {
    /// Create a match from a validated config
    pub fn new(config: &MatchConfig) -> Self {
        Self::with_controllers(
            config.playfield,
            [
                Controller::from_kind(config.left),
                Controller::from_kind(config.right),
            ],
            config.seed,
        )
    }

    pub fn with_controllers(
        field: PlayfieldConfig,
        controllers: [Controller; 2],
        seed: u64,
    ) -> Self {
        log::info!(
            "new match on {}x{} field: {} vs {} (seed {})",
            field.width,
            field.height,
            controllers[0].kind().as_str(),
            controllers[1].kind().as_str(),
            seed
        );
        Self {
            field,
            rng: Pcg32::seed_from_u64(seed),
            controllers,
            paddles: [Paddle::new(Side::Left, &field), Paddle::new(Side::Right, &field)],
            ball: Ball::new(&field),
            elapsed_ms: 0.0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            winner: None,
            running: true,
            flash: Flash::default(),
        }
    }

    /// Reinitialize paddles, ball, lives and timers; controllers and RNG carry over
    pub fn restart(&mut self) {
        let field = self.field;
        self.paddles = [Paddle::new(Side::Left, &field), Paddle::new(Side::Right, &field)];
        self.ball = Ball::new(&field);
        self.elapsed_ms = 0.0;
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
        self.winner = None;
        self.flash = Flash::default();
        log::info!("match restarted");
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        &mut self.paddles[side.index()]
    }

    pub fn controller(&self, side: Side) -> &Controller {
        &self.controllers[side.index()]
    }

    /// Vertical velocity for a ball bouncing off `side`'s paddle, drawing from
    /// the match RNG on a dead-center hit
    pub fn hit_factor(&mut self, side: Side) -> f64 {
        acc_factor(&self.paddles[side.index()], &self.ball, &mut self.rng)
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
