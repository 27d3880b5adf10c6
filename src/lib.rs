//! # photo-grid
//!
//! Reactive state engine for an animated photo grid under a sticky nav.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! Everything runs on one thread and reacts to discrete events: scroll
//! samples, list changes, overlay clicks. Nothing blocks. Animation completion
//! is delivered when the host polls with the current time.
//!
//! ```text
//! ScrollTracker → StickyVisibilityController → NavRegion (nav flags)
//! SessionGate + keyed items → KeyedAnimationSequencer → GridPresenter (tile props)
//! overlay clicks → SelectionSet → GridPresenter (overlay state)
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Shared data types (assignments, samples, sticky state)
//! - [`state`] - Scroll, sticky nav, session gate, selection
//! - [`animate`] - Keyed diffing and staggered entrance sequencing
//! - [`presenter`] - Grid and nav composition
//! - [`config`] - JSON configuration
//! - [`error`] - Error types

pub mod animate;
pub mod config;
pub mod error;
pub mod presenter;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use animate::{
    AnimationBatch, BatchCompletion, BatchId, CompletionOutcome, KeyDiff,
    KeyedAnimationSequencer, SequenceOptions,
};

pub use config::{AnimationConfig, GridConfig, LayoutConfig, StickyConfig};

pub use error::{GridError, GridResult, SampleError};

pub use presenter::{
    GridDensity, GridLayout, GridPhoto, GridPresenter, GridProps, NavProps, NavRegion, NavView,
    Overlay, TileKind, TileView,
};

pub use state::{
    AnimationGate, ScrollTracker, SelectionMode, SelectionSet, SessionGate,
    StickyVisibilityController,
};
