//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod ball;
pub mod classifier;
pub mod clock;
pub mod collision;
pub mod controller;
pub mod geometry;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use classifier::LogisticBoundary;
pub use clock::FixedStep;
pub use collision::{
    aabb_overlap, acc_factor, hits_bottom_wall, hits_left_wall, hits_right_wall, hits_top_wall,
    paddle_collision,
};
pub use controller::{ClassifierController, Controller, Move, MoveIntent, ReactiveController};
pub use geometry::{Axis, AxisExt, Rect};
pub use paddle::{Paddle, Side};
pub use state::{Flash, FlashKind, GamePhase, GameState};
pub use tick::{TickEvents, TickInput, tick};
