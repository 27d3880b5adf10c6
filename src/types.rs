//! Core types for photo-grid.
//!
//! These types flow between the state machines and the presenter, and define
//! what the rendering and styling layers receive.

use serde::{Deserialize, Serialize};

// =============================================================================
// Keyed items
// =============================================================================

/// An item in a keyed sequence.
///
/// Identity is the key. The payload belongs to the caller and is never touched
/// by the sequencer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatableItem<K, T> {
    pub key: K,
    pub payload: T,
}

impl<K, T> AnimatableItem<K, T> {
    /// Create a new keyed item.
    pub fn new(key: K, payload: T) -> Self {
        Self { key, payload }
    }
}

// =============================================================================
// Animation
// =============================================================================

/// Lifecycle phase of one animated item within a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// New in this batch, animates in from its offset.
    Entering,
    /// Already on screen (or animation suppressed). No motion.
    #[default]
    Present,
    /// Leaving. Never produced for keys of the new snapshot; renderers that
    /// keep removed tiles around for an exit transition tag them with this.
    Exiting,
}

/// Entrance style of a keyed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    /// No animation at all. Every item is `Present`.
    None,
    /// Fade + scale in place.
    #[default]
    Scale,
    /// Slide in from the left.
    Left,
    /// Slide in from the right.
    Right,
    /// Rise from below.
    Bottom,
}

impl AnimationKind {
    /// Whether this kind produces any motion.
    pub fn is_animated(self) -> bool {
        self != Self::None
    }

    /// Translation `(x, y)` an entering item starts from, given the offset
    /// distance. Renderers animate from this towards `(0, 0)`.
    pub fn initial_translation(self, distance: f64) -> (f64, f64) {
        match self {
            Self::None | Self::Scale => (0.0, 0.0),
            Self::Left => (-distance, 0.0),
            Self::Right => (distance, 0.0),
            Self::Bottom => (0.0, distance),
        }
    }
}

/// Per-item animation props for one reconciliation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationAssignment<K> {
    pub key: K,
    pub phase: Phase,
    /// Entrance style; `None` when not entering.
    pub kind: AnimationKind,
    /// Position of the item in the new snapshot.
    pub stagger_index: usize,
    /// Distance the item travels while entering (0 when not entering).
    pub distance_offset: f64,
    /// Animation length in seconds (0 when not entering).
    pub duration_seconds: f64,
    /// Effective start delay in seconds after stagger collapsing.
    pub delay_seconds: f64,
}

impl<K> AnimationAssignment<K> {
    /// Static assignment: no motion, no delay.
    pub fn present(key: K, stagger_index: usize) -> Self {
        Self {
            key,
            phase: Phase::Present,
            kind: AnimationKind::None,
            stagger_index,
            distance_offset: 0.0,
            duration_seconds: 0.0,
            delay_seconds: 0.0,
        }
    }

    /// Translation `(x, y)` this item starts from. `(0, 0)` unless entering
    /// with a sliding kind.
    pub fn initial_translation(&self) -> (f64, f64) {
        match self.phase {
            Phase::Entering => self.kind.initial_translation(self.distance_offset),
            Phase::Present | Phase::Exiting => (0.0, 0.0),
        }
    }

    /// Time in seconds from batch start until this item has settled.
    pub fn settle_seconds(&self) -> f64 {
        match self.phase {
            Phase::Entering => self.delay_seconds + self.duration_seconds,
            Phase::Present | Phase::Exiting => 0.0,
        }
    }
}

// =============================================================================
// Scroll
// =============================================================================

/// One scroll position reading from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub position_y: f64,
    pub timestamp_ms: f64,
}

impl ScrollSample {
    /// Create a new sample.
    pub const fn new(position_y: f64, timestamp_ms: f64) -> Self {
        Self {
            position_y,
            timestamp_ms,
        }
    }
}

/// Vertical scroll direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    #[default]
    None,
    Up,
    Down,
}

// =============================================================================
// Nav flags (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Nav layout flags handed to the styling layer.
    ///
    /// `NavFlags::VISIBLE | NavFlags::DOCKED` means the nav is pinned to the
    /// viewport edge and shown.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct NavFlags: u8 {
        const NONE = 0;
        const VISIBLE = 1 << 0;
        const DOCKED = 1 << 1;
    }
}

/// Sticky nav state. Only the sticky controller writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StickyState {
    pub visible: bool,
    pub docked: bool,
    pub last_direction: ScrollDirection,
}

impl StickyState {
    /// Resting state: shown, scrolling with content.
    pub const RESTING: Self = Self {
        visible: true,
        docked: false,
        last_direction: ScrollDirection::None,
    };

    /// Layout flags for the styling layer.
    pub fn flags(&self) -> NavFlags {
        let mut flags = NavFlags::NONE;
        if self.visible {
            flags |= NavFlags::VISIBLE;
        }
        if self.docked {
            flags |= NavFlags::DOCKED;
        }
        flags
    }
}

impl Default for StickyState {
    fn default() -> Self {
        Self::RESTING
    }
}
