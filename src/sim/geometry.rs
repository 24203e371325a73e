//! Axis-aligned boxes and per-axis vector helpers

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// One of the two playfield axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Per-axis operations on 2D vectors
pub trait AxisExt {
    /// Flip the sign of one component, leaving the other untouched
    fn negate_axis(self, axis: Axis) -> Self;
    /// Replace one component
    fn with_axis(self, axis: Axis, value: f64) -> Self;
}

impl AxisExt for DVec2 {
    #[inline]
    fn negate_axis(self, axis: Axis) -> Self {
        match axis {
            Axis::X => DVec2::new(-self.x, self.y),
            Axis::Y => DVec2::new(self.x, -self.y),
        }
    }

    #[inline]
    fn with_axis(self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::X => DVec2::new(value, self.y),
            Axis::Y => DVec2::new(self.x, value),
        }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner (screen coordinates, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: DVec2,
    pub size: DVec2,
}

impl Rect {
    pub fn new(pos: DVec2, size: DVec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center_y(&self) -> f64 {
        self.pos.y + self.size.y / 2.0
    }
}
