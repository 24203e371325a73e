//! Paddles: clamped vertical movement and remaining lives

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::config::PlayfieldConfig;
use crate::consts::*;

/// Which side of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Player 1
    Left,
    /// Player 2
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Index into per-side arrays
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "Player 1",
            Side::Right => "Player 2",
        }
    }
}

/// A paddle entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Fixed horizontal position (left edge)
    pub x: f64,
    /// Top edge, always within [0, field height - height]
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Pixels moved per command
    pub speed: f64,
    /// Decremented by the match loop on a miss; never incremented
    pub lives: u32,
    /// Lowest allowed top edge
    max_y: f64,
}

impl Paddle {
    /// Create a vertically centered paddle on the given side
    pub fn new(side: Side, field: &PlayfieldConfig) -> Self {
        let x = match side {
            Side::Left => PADDLE_MARGIN,
            Side::Right => field.width - PADDLE_MARGIN - PADDLE_WIDTH,
        };
        Self {
            side,
            x,
            y: field.height / 2.0 - PADDLE_HEIGHT / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
            lives: STARTING_LIVES,
            max_y: (field.height - PADDLE_HEIGHT).max(0.0),
        }
    }

    pub fn move_up(&mut self) {
        self.y = (self.y - self.speed).max(0.0);
    }

    pub fn move_down(&mut self) {
        self.y = (self.y + self.speed).min(self.max_y);
    }

    pub fn rect(&self) -> Rect {
        Rect::new(
            DVec2::new(self.x, self.y),
            DVec2::new(self.width, self.height),
        )
    }

    #[inline]
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn is_out(&self) -> bool {
        self.lives == 0
    }
}
