//! Move-intent sources: human input, reactive AI, and the learned boundary

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::classifier::{LABEL_UP, LogisticBoundary};
use super::paddle::Paddle;
use crate::config::ControllerKind;
use crate::consts::DEADBAND;

/// A single-tick paddle command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Move {
    Up,
    Down,
    #[default]
    None,
}

impl Move {
    pub fn apply(self, paddle: &mut Paddle) {
        match self {
            Move::Up => paddle.move_up(),
            Move::Down => paddle.move_down(),
            Move::None => {}
        }
    }
}

/// Held direction keys for one side, already debounced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveIntent {
    pub up: bool,
    pub down: bool,
}

impl MoveIntent {
    pub const UP: MoveIntent = MoveIntent {
        up: true,
        down: false,
    };
    pub const DOWN: MoveIntent = MoveIntent {
        up: false,
        down: true,
    };

    /// Opposing keys cancel out
    pub fn to_move(self) -> Move {
        match (self.up, self.down) {
            (true, false) => Move::Up,
            (false, true) => Move::Down,
            _ => Move::None,
        }
    }
}

/// Chases the ball's center, idling inside a deadband
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactiveController {
    pub deadband: f64,
}

impl Default for ReactiveController {
    fn default() -> Self {
        Self { deadband: DEADBAND }
    }
}

impl ReactiveController {
    pub fn decide(&self, paddle: &Paddle, ball: &Ball) -> Move {
        let distance = paddle.center_y() - ball.center_y();
        if distance.abs() <= self.deadband {
            Move::None
        } else if distance > 0.0 {
            // Paddle center is below the ball's (screen y grows downward)
            Move::Up
        } else {
            Move::Down
        }
    }
}

/// Maps a pretrained decision boundary straight to a move, no deadband
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClassifierController {
    boundary: LogisticBoundary,
}

impl ClassifierController {
    pub fn decide(&self, paddle: &Paddle, ball: &Ball) -> Move {
        let features = [paddle.center_y(), ball.center_y()];
        let label = self.boundary.predict(features);
        log::trace!("classifier input: {features:?}, prediction: {label}");
        if label == LABEL_UP { Move::Up } else { Move::Down }
    }
}

/// One paddle's source of move commands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Controller {
    /// Reads this side's held keys from the tick input
    Human,
    Reactive(ReactiveController),
    Classifier(ClassifierController),
}

impl Controller {
    pub fn from_kind(kind: ControllerKind) -> Self {
        match kind {
            ControllerKind::Human => Controller::Human,
            ControllerKind::Reactive => Controller::Reactive(ReactiveController::default()),
            ControllerKind::Classifier => Controller::Classifier(ClassifierController::default()),
        }
    }

    pub fn kind(&self) -> ControllerKind {
        match self {
            Controller::Human => ControllerKind::Human,
            Controller::Reactive(_) => ControllerKind::Reactive,
            Controller::Classifier(_) => ControllerKind::Classifier,
        }
    }

    /// Pick this tick's move. `intent` is ignored by computer controllers.
    pub fn decide(&self, paddle: &Paddle, ball: &Ball, intent: MoveIntent) -> Move {
        match self {
            Controller::Human => intent.to_move(),
            Controller::Reactive(c) => c.decide(paddle, ball),
            Controller::Classifier(c) => c.decide(paddle, ball),
        }
    }
}
