//! Scroll Tracker - Page scroll sampling
//!
//! Turns raw `{position_y, timestamp_ms}` readings into validated deltas:
//! - Rejects NaN/infinite readings
//! - Rejects readings whose timestamp goes backwards
//! - Derives direction from the position delta (zero delta = no direction)
//!
//! The tracker holds no opinion about the nav. The sticky controller builds
//! its state machine on top of the deltas produced here.

use crate::error::SampleError;
use crate::types::{ScrollDirection, ScrollSample};

// =============================================================================
// TYPES
// =============================================================================

/// One accepted scroll step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollDelta {
    /// Position after this step.
    pub position_y: f64,
    /// Change from the previous accepted sample (0 for the first sample).
    pub delta_y: f64,
    /// `None` when the position did not change.
    pub direction: ScrollDirection,
}

impl ScrollDelta {
    fn first(position_y: f64) -> Self {
        Self {
            position_y,
            delta_y: 0.0,
            direction: ScrollDirection::None,
        }
    }
}

/// Map a position delta to a direction.
pub fn direction_of(delta_y: f64) -> ScrollDirection {
    if delta_y > 0.0 {
        ScrollDirection::Down
    } else if delta_y < 0.0 {
        ScrollDirection::Up
    } else {
        ScrollDirection::None
    }
}

// =============================================================================
// SCROLL TRACKER
// =============================================================================

/// Scroll position sampler.
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    last: Option<ScrollSample>,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last accepted sample.
    pub fn last_sample(&self) -> Option<ScrollSample> {
        self.last
    }

    /// Accept a sample.
    ///
    /// Malformed samples return an error and leave the tracker untouched.
    /// Equal timestamps are accepted; only a timestamp going backwards is
    /// rejected.
    pub fn record(&mut self, sample: ScrollSample) -> Result<ScrollDelta, SampleError> {
        if !sample.position_y.is_finite() || !sample.timestamp_ms.is_finite() {
            return Err(SampleError::NotFinite {
                position_y: sample.position_y,
                timestamp_ms: sample.timestamp_ms,
            });
        }

        let Some(previous) = self.last else {
            self.last = Some(sample);
            return Ok(ScrollDelta::first(sample.position_y));
        };

        if sample.timestamp_ms < previous.timestamp_ms {
            return Err(SampleError::NonMonotonic {
                timestamp_ms: sample.timestamp_ms,
                previous_ms: previous.timestamp_ms,
            });
        }

        let delta_y = sample.position_y - previous.position_y;
        self.last = Some(sample);

        Ok(ScrollDelta {
            position_y: sample.position_y,
            delta_y,
            direction: direction_of(delta_y),
        })
    }

    /// Forget all history (next sample is treated as the first).
    pub fn reset(&mut self) {
        self.last = None;
    }
}
