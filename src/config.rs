//! Playfield and match configuration
//!
//! Loaded from JSON by the native runner; the simulation only ever sees
//! validated values.

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Fixed playfield dimensions, passed to every component that does boundary math
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayfieldConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for PlayfieldConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl PlayfieldConfig {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Top-left corner that centers a box of `size` on the field
    pub fn centered(&self, size: DVec2) -> DVec2 {
        self.size() / 2.0 - size / 2.0
    }

    /// Validate that both paddles and the ball fit on the field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(ConfigError::Validation(
                "playfield dimensions must be finite".into(),
            ));
        }
        let min_width = 2.0 * (PADDLE_MARGIN + PADDLE_WIDTH) + BALL_SIZE;
        if self.width <= min_width {
            return Err(ConfigError::Validation(format!(
                "playfield.width must be > {min_width}"
            )));
        }
        if self.height < PADDLE_HEIGHT || self.height <= BALL_SIZE {
            return Err(ConfigError::Validation(format!(
                "playfield.height must be >= {PADDLE_HEIGHT}"
            )));
        }
        Ok(())
    }
}

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControllerKind {
    #[default]
    Human,
    Reactive,
    Classifier,
}

impl ControllerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControllerKind::Human => "human",
            ControllerKind::Reactive => "reactive",
            ControllerKind::Classifier => "classifier",
        }
    }
}

/// Everything needed to start a match
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub playfield: PlayfieldConfig,
    /// Controller for the left paddle (player 1)
    pub left: ControllerKind,
    /// Controller for the right paddle (player 2)
    pub right: ControllerKind,
    /// Seed for the tie-break RNG
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            playfield: PlayfieldConfig::default(),
            left: ControllerKind::Human,
            right: ControllerKind::Reactive,
            seed: 12345,
        }
    }
}

impl MatchConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.playfield.validate()
    }
}
