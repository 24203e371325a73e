//! The ball: position, velocity, and reset behavior

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Axis, AxisExt, Rect};
use crate::config::PlayfieldConfig;
use crate::consts::*;

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: DVec2,
    /// Displacement per tick
    pub vel: DVec2,
    pub size: DVec2,
}

impl Ball {
    /// Create a ball centered on the field with the starting velocity
    pub fn new(field: &PlayfieldConfig) -> Self {
        let size = DVec2::splat(BALL_SIZE);
        Self {
            pos: field.centered(size),
            vel: Self::start_velocity(),
            size,
        }
    }

    pub fn start_velocity() -> DVec2 {
        DVec2::new(BALL_START_VEL.0, BALL_START_VEL.1)
    }

    /// Re-center on the field and restore the starting velocity
    pub fn reset(&mut self, field: &PlayfieldConfig) {
        self.pos = field.centered(self.size);
        self.vel = Self::start_velocity();
    }

    /// Advance position by one tick of velocity
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Send the ball back the way it came with a new vertical component
    pub fn accelerate_on_paddle_hit(&mut self, factor: f64) {
        self.vel = self.vel.negate_axis(Axis::X).with_axis(Axis::Y, factor);
    }

    /// Element-wise multiply the velocity
    #[inline]
    pub fn scale_velocity(&mut self, factor: DVec2) {
        self.vel *= factor;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    #[inline]
    pub fn center_y(&self) -> f64 {
        self.pos.y + self.size.y / 2.0
    }
}
