//! Nav Region - Sticky nav with a one-time entrance
//!
//! Hosts the sticky controller and a single-item keyed sequencer for the nav
//! bar itself. On administrative views the nav neither animates nor tracks
//! scroll.

use crate::animate::{BatchCompletion, KeyedAnimationSequencer, SequenceOptions};
use crate::config::GridConfig;
use crate::state::gate::AnimationGate;
use crate::state::sticky::StickyVisibilityController;
use crate::types::{AnimationAssignment, AnimationKind, NavFlags, ScrollSample};

/// Key of the nav bar within its own keyed sequence.
pub const NAV_KEY: &str = "nav";

/// Per-render nav props.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavProps {
    /// Render the nav at all (hidden on e.g. sign-in views).
    pub show_nav: bool,
    pub animate: bool,
    /// Administrative view: no entrance, no sticky tracking.
    pub admin: bool,
}

impl Default for NavProps {
    fn default() -> Self {
        Self {
            show_nav: true,
            animate: true,
            admin: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavView {
    /// `None` when the nav is not rendered.
    pub item: Option<AnimationAssignment<&'static str>>,
    pub completion: BatchCompletion,
    pub flags: NavFlags,
    /// View switcher animates its selection indicator.
    pub switcher_animates: bool,
}

pub struct NavRegion<G: AnimationGate> {
    sticky: StickyVisibilityController,
    sequencer: KeyedAnimationSequencer<&'static str, G>,
    options: SequenceOptions,
}

impl<G: AnimationGate> NavRegion<G> {
    pub fn new(config: &GridConfig, gate: G, admin: bool) -> Self {
        let mut options = SequenceOptions::from_config(&config.animation);
        options.kind = AnimationKind::Bottom;
        options.animate_on_first_load_only = true;
        options.distance_offset = config.animation.nav_distance_offset;

        Self {
            sticky: StickyVisibilityController::new(config.sticky.clone(), !admin),
            sequencer: KeyedAnimationSequencer::new(gate),
            options,
        }
    }

    pub fn sticky(&self) -> &StickyVisibilityController {
        &self.sticky
    }

    /// Forward a page scroll sample to the sticky controller.
    pub fn on_scroll(&mut self, sample: ScrollSample) {
        self.sticky.on_sample(sample);
    }

    pub fn poll(&mut self, now_ms: f64) -> bool {
        self.sequencer.poll(now_ms).is_some()
    }

    pub fn present(&mut self, props: NavProps, now_ms: f64) -> NavView {
        self.sticky.set_enabled(!props.admin);

        let mut options = self.options.clone();
        if !props.animate || props.admin {
            options.kind = AnimationKind::None;
        }

        let keys: &[&'static str] = if props.show_nav { &[NAV_KEY] } else { &[] };
        let batch = self.sequencer.reconcile_keys(keys, &options, now_ms);

        NavView {
            item: batch.assignments.into_iter().next(),
            completion: batch.completion,
            flags: self.sticky.flags(),
            switcher_animates: self.sequencer.gate().has_animated_once() && self.sticky.is_visible(),
        }
    }
}
