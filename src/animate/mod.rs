//! Animate Module - Keyed entrance sequencing
//!
//! - [`diff`] - Set difference between two keyed snapshots
//! - [`sequencer`] - Per-item assignments, stagger, batch completion

pub mod diff;
pub mod sequencer;

pub use diff::{dedupe_keep_last, diff_keys, KeyDiff};
pub use sequencer::{
    AnimationBatch, BatchCompletion, BatchId, CompletionOutcome, KeyedAnimationSequencer,
    SequenceOptions,
};
