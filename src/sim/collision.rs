//! Collision detection and response for boxes on a bounded field
//!
//! Everything here is a pure function of current positions (plus an injected
//! RNG for the dead-center tie-break).

use rand::Rng;

use super::ball::Ball;
use super::geometry::Rect;
use super::paddle::{Paddle, Side};
use crate::config::PlayfieldConfig;
use crate::consts::*;

/// Check whether two axis-aligned boxes intersect or touch
///
/// Boundaries are inclusive: boxes sharing an edge count as overlapping.
pub fn aabb_overlap(a: &Rect, b: &Rect) -> bool {
    let overlap_x = a.right() >= b.left() && b.right() >= a.left();
    let overlap_y = a.bottom() >= b.top() && b.bottom() >= a.top();
    overlap_x && overlap_y
}

pub fn hits_left_wall(ball: &Ball) -> bool {
    ball.pos.x <= 0.0
}

pub fn hits_right_wall(ball: &Ball, field: &PlayfieldConfig) -> bool {
    ball.pos.x + ball.size.x >= field.width
}

pub fn hits_top_wall(ball: &Ball) -> bool {
    ball.pos.y <= 0.0
}

pub fn hits_bottom_wall(ball: &Ball, field: &PlayfieldConfig) -> bool {
    ball.pos.y + ball.size.y >= field.height
}

pub fn paddle_collision(paddle: &Paddle, ball: &Ball) -> bool {
    aabb_overlap(&paddle.rect(), &ball.rect())
}

/// True when the ball's horizontal motion carries it toward the paddle's side
pub fn moving_toward(paddle: &Paddle, ball: &Ball) -> bool {
    match paddle.side {
        Side::Left => ball.vel.x < 0.0,
        Side::Right => ball.vel.x > 0.0,
    }
}

/// Vertical velocity to give the ball after it hits `paddle`
///
/// Proportional to how far the ball's center sits from the paddle's center.
/// A dead-center hit draws an integer distance from [10, 100) instead, so the
/// result is never zero.
pub fn acc_factor<R: Rng + ?Sized>(paddle: &Paddle, ball: &Ball, rng: &mut R) -> f64 {
    let mut distance = ball.center_y() - paddle.center_y();
    if distance == 0.0 {
        distance = f64::from(rng.random_range(TIE_BREAK_MIN..TIE_BREAK_MAX));
    }
    distance / ACCEL_DIVISOR
}
