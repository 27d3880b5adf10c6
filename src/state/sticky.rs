//! Sticky Nav - Scroll-direction-aware nav visibility
//!
//! State machine over {Visible, Hidden} x {Docked, Undocked}:
//! - Hide on downward scroll, once the distance since the last direction
//!   reversal exceeds the hysteresis threshold and the page has scrolled past
//!   the nav's own height
//! - Reveal immediately on any upward scroll
//! - Dock at or beyond the nav's resting offset, undock above it
//! - Disabled controllers are pinned to {Visible, Undocked}
//!
//! State is held in a signal so styling deriveds react to transitions.
//!
//! # Example
//!
//! ```ignore
//! use photo_grid::state::sticky::StickyVisibilityController;
//!
//! let mut sticky = StickyVisibilityController::new(StickyConfig::default(), true);
//! sticky.on_sample(ScrollSample::new(0.0, 0.0));
//! sticky.on_sample(ScrollSample::new(120.0, 16.0));
//! let flags = sticky.flags();
//! ```

use spark_signals::{signal, Signal};

use super::scroll::{ScrollDelta, ScrollTracker};
use crate::config::StickyConfig;
use crate::types::{NavFlags, ScrollDirection, ScrollSample, StickyState};

pub struct StickyVisibilityController {
    config: StickyConfig,
    enabled: bool,
    tracker: ScrollTracker,
    /// Position where the current direction run started.
    run_start_y: f64,
    state: Signal<StickyState>,
}

impl StickyVisibilityController {
    pub fn new(config: StickyConfig, enabled: bool) -> Self {
        Self {
            config,
            enabled,
            tracker: ScrollTracker::new(),
            run_start_y: 0.0,
            state: signal(StickyState::RESTING),
        }
    }

    // =========================================================================
    // STATE ACCESS
    // =========================================================================

    /// Current state.
    pub fn state(&self) -> StickyState {
        self.state.get()
    }

    /// The backing signal, for reactive readers.
    pub fn state_signal(&self) -> Signal<StickyState> {
        self.state.clone()
    }

    /// Layout flags for the styling layer.
    pub fn flags(&self) -> NavFlags {
        self.state().flags()
    }

    pub fn is_visible(&self) -> bool {
        self.state().visible
    }

    pub fn is_docked(&self) -> bool {
        self.state().docked
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn config(&self) -> &StickyConfig {
        &self.config
    }

    // =========================================================================
    // INPUT
    // =========================================================================

    /// Enable or disable tracking.
    ///
    /// Disabling forces {Visible, Undocked}. Re-enabling starts from a fresh
    /// scroll history.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        self.tracker.reset();
        if !enabled {
            self.apply(StickyState::RESTING);
        }
    }

    /// Feed one scroll sample. Malformed samples are dropped.
    pub fn on_sample(&mut self, sample: ScrollSample) {
        if !self.enabled {
            return;
        }

        let is_first = self.tracker.last_sample().is_none();
        let step = match self.tracker.record(sample) {
            Ok(step) => step,
            Err(err) => {
                tracing::trace!(%err, "dropping scroll sample");
                return;
            }
        };

        if is_first {
            self.run_start_y = step.position_y;
        }

        let next = self.next_state(self.state(), step);
        self.apply(next);
    }

    // =========================================================================
    // TRANSITIONS
    // =========================================================================

    fn next_state(&mut self, current: StickyState, step: ScrollDelta) -> StickyState {
        let mut next = current;

        // Zero delta keeps the previous direction
        if step.direction != ScrollDirection::None && step.direction != current.last_direction {
            self.run_start_y = step.position_y - step.delta_y;
            next.last_direction = step.direction;
        }

        match step.direction {
            ScrollDirection::Up => next.visible = true,
            ScrollDirection::Down => {
                let run = step.position_y - self.run_start_y;
                if run > self.config.hysteresis_threshold
                    && step.position_y > self.config.nav_height
                {
                    next.visible = false;
                }
            }
            ScrollDirection::None => {}
        }

        next.docked = step.position_y >= self.config.resting_offset;
        next
    }

    fn apply(&self, next: StickyState) {
        let current = self.state();
        if current == next {
            return;
        }
        tracing::debug!(
            visible = next.visible,
            docked = next.docked,
            direction = ?next.last_direction,
            "sticky nav transition"
        );
        self.state.set(next);
    }
}
