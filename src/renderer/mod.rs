//! Render handoff
//!
//! The simulation never draws. Each tick it hands a read-only `Frame` to
//! whatever implements `Renderer`; pixel formats and assets live out there.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Flash, GamePhase, GameState, Side};

/// Ball as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub pos: DVec2,
    pub vel: DVec2,
    pub size: DVec2,
}

/// Paddle as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleView {
    pub side: Side,
    pub pos: DVec2,
    pub size: DVec2,
    pub lives: u32,
}

/// Snapshot of everything drawable after a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub field: DVec2,
    pub phase: GamePhase,
    pub winner: Option<Side>,
    pub ball: BallView,
    pub paddles: [PaddleView; 2],
    pub flash: Flash,
}

impl Frame {
    pub fn capture(state: &GameState) -> Self {
        let paddle_view = |side: Side| {
            let p = state.paddle(side);
            PaddleView {
                side,
                pos: DVec2::new(p.x, p.y),
                size: DVec2::new(p.width, p.height),
                lives: p.lives,
            }
        };
        Self {
            tick: state.time_ticks,
            field: state.field.size(),
            phase: state.phase,
            winner: state.winner,
            ball: BallView {
                pos: state.ball.pos,
                vel: state.ball.vel,
                size: state.ball.size,
            },
            paddles: [paddle_view(Side::Left), paddle_view(Side::Right)],
            flash: state.flash,
        }
    }
}

/// Consumer of per-tick snapshots
pub trait Renderer {
    fn draw(&mut self, frame: &Frame);
}

/// Headless renderer: logs a status line every `every` ticks and on game over
#[derive(Debug, Clone)]
pub struct LogRenderer {
    every: u64,
}

impl LogRenderer {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
        }
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, frame: &Frame) {
        if frame.phase == GamePhase::GameOver {
            if let Some(winner) = frame.winner {
                log::info!("GAME OVER - winner: {}", winner.as_str());
            }
            return;
        }
        if frame.tick % self.every == 0 {
            log::info!(
                "tick {}: ball ({:.0}, {:.0}) vel ({:.2}, {:.2}) | lives {} - {}",
                frame.tick,
                frame.ball.pos.x,
                frame.ball.pos.y,
                frame.ball.vel.x,
                frame.ball.vel.y,
                frame.paddles[0].lives,
                frame.paddles[1].lives
            );
        }
    }
}
