//! Linear decision boundary fitted by L2-regularized logistic regression
//!
//! Two features (paddle center y, ball center y), binary labels. Fitted with
//! Newton iterations on the penalized log-loss; the intercept is not penalized.

use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

/// Label for "move up"
pub const LABEL_UP: u8 = 0;
/// Label for "move down"
pub const LABEL_DOWN: u8 = 1;

/// Baked-in training set: ([paddle center y, ball center y], label)
pub const TRAINING_SET: [([f64; 2], u8); 4] = [
    ([50.0, 150.0], LABEL_DOWN),
    ([400.0, 200.0], LABEL_UP),
    ([100.0, 110.0], LABEL_DOWN),
    ([210.0, 190.0], LABEL_UP),
];

/// Inverse regularization strength
pub const DEFAULT_C: f64 = 1.0;

const MAX_ITERATIONS: usize = 100;
const CONVERGENCE_EPS: f64 = 1e-10;
/// Below this the Hessian is treated as singular
const SINGULAR_EPS: f64 = 1e-12;

/// A fitted separating line `w . x + b = 0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogisticBoundary {
    pub weights: [f64; 2],
    pub intercept: f64,
}

impl LogisticBoundary {
    /// Fit to labeled samples. Labels other than 0 are treated as 1.
    ///
    /// Degenerate inputs (no samples) leave the boundary at zero.
    pub fn fit(samples: &[([f64; 2], u8)], c: f64) -> Self {
        // (w0, w1, b); the intercept sits in z and is not penalized
        let mut theta = DVec3::ZERO;
        let penalty = DMat3::from_diagonal(DVec3::new(1.0, 1.0, 0.0));

        for iteration in 0..MAX_ITERATIONS {
            let mut grad = theta.with_z(0.0);
            let mut hess = penalty;

            for (features, label) in samples {
                let x = DVec3::new(features[0], features[1], 1.0);
                let target = if *label == LABEL_UP { 0.0 } else { 1.0 };
                let p = sigmoid(theta.dot(x));
                grad += x * (c * (p - target));
                let curvature = c * p * (1.0 - p);
                hess += DMat3::from_cols(x * x.x, x * x.y, x * x.z) * curvature;
            }

            if hess.determinant().abs() <= SINGULAR_EPS {
                log::warn!("logistic fit: singular Hessian at iteration {iteration}");
                break;
            }
            let step = hess.inverse() * grad;
            theta -= step;
            if step.length_squared() < CONVERGENCE_EPS {
                log::debug!("logistic fit converged after {} iterations", iteration + 1);
                break;
            }
        }

        Self {
            weights: [theta.x, theta.y],
            intercept: theta.z,
        }
    }

    /// Signed distance-like score; positive means label 1
    #[inline]
    pub fn decision(&self, features: [f64; 2]) -> f64 {
        self.weights[0] * features[0] + self.weights[1] * features[1] + self.intercept
    }

    pub fn predict(&self, features: [f64; 2]) -> u8 {
        if self.decision(features) > 0.0 {
            LABEL_DOWN
        } else {
            LABEL_UP
        }
    }
}

impl Default for LogisticBoundary {
    fn default() -> Self {
        Self::fit(&TRAINING_SET, DEFAULT_C)
    }
}

#[inline]
fn sigmoid(t: f64) -> f64 {
    1.0 / (1.0 + (-t).exp())
}
