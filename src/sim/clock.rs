//! Fixed-step pacing: turns variable frame time into whole ticks

use crate::consts::{MAX_SUBSTEPS, TICK_MS};

/// Accumulates frame time and releases it in `TICK_MS` chunks
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator_ms: f64,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame's worth of time and return how many ticks to run
    ///
    /// Negative or non-finite frame times add nothing. At most `MAX_SUBSTEPS`
    /// ticks are released per frame; anything beyond one more tick is dropped.
    pub fn advance(&mut self, frame_ms: f64) -> u32 {
        let frame_ms = if frame_ms.is_finite() {
            frame_ms.max(0.0)
        } else {
            0.0
        };
        self.accumulator_ms += frame_ms;

        let mut ticks = 0;
        while self.accumulator_ms >= TICK_MS && ticks < MAX_SUBSTEPS {
            self.accumulator_ms -= TICK_MS;
            ticks += 1;
        }
        if ticks == MAX_SUBSTEPS {
            self.accumulator_ms = self.accumulator_ms.min(TICK_MS);
        }
        ticks
    }

    /// Leftover time not yet released as a tick
    pub fn pending_ms(&self) -> f64 {
        self.accumulator_ms
    }
}
