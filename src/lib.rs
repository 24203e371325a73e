//! Pong Duel - two-paddle ball-bouncing arcade core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, controllers, match loop)
//! - `config`: Playfield and match configuration
//! - `renderer`: Read-only frame snapshots handed to an external renderer
//! - `error`: Configuration errors

pub mod config;
pub mod error;
pub mod renderer;
pub mod sim;

pub use config::{ControllerKind, MatchConfig, PlayfieldConfig};
pub use error::ConfigError;
pub use renderer::{Frame, Renderer};

/// Game configuration constants
pub mod consts {
    /// Target tick rate
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Nominal tick duration in milliseconds
    pub const TICK_MS: f64 = 1000.0 / TICKS_PER_SECOND as f64;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default playfield dimensions
    pub const FIELD_WIDTH: f64 = 800.0;
    pub const FIELD_HEIGHT: f64 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f64 = 20.0;
    pub const PADDLE_HEIGHT: f64 = 150.0;
    pub const PADDLE_SPEED: f64 = 10.0;
    /// Gap between a paddle and its side of the field
    pub const PADDLE_MARGIN: f64 = 20.0;
    pub const STARTING_LIVES: u32 = 3;

    /// Ball defaults
    pub const BALL_SIZE: f64 = 20.0;
    pub const BALL_START_VEL: (f64, f64) = (5.0, 1.0);

    /// Vertical offset (px) per unit of post-hit vertical velocity
    pub const ACCEL_DIVISOR: f64 = 10.0;
    /// Tie-break range for a dead-center paddle hit (integer px, half-open)
    pub const TIE_BREAK_MIN: u32 = 10;
    pub const TIE_BREAK_MAX: u32 = 100;

    /// Per-tick horizontal speed-up is `1 + elapsed_ms / DIFFICULTY_DIVISOR`
    pub const DIFFICULTY_DIVISOR: f64 = 1e8;

    /// Reactive controller tolerance (px)
    pub const DEADBAND: f64 = 20.0;

    /// Flash feedback
    pub const MISS_FLASH_ALPHA: u8 = 150;
    pub const HIT_FLASH_ALPHA: u8 = 100;
    pub const FLASH_DECAY: u8 = 10;
}
