//! Keyed Animation Sequencer - Staggered entrance for keyed lists
//!
//! Every reconciliation diffs the new snapshot against the previous one by key
//! and emits one [`AnimationAssignment`] per item of the new snapshot, as a
//! single batch:
//! - Added keys enter, staggered by their position in the new snapshot
//! - Retained keys stay `Present` (re-rendering a key never re-triggers motion)
//! - Removed keys get no assignment; the caller stops rendering them
//!
//! # Gate
//!
//! The sequencer consults the session's [`AnimationGate`]:
//! - `animate_on_first_load_only` suppresses all motion once the session has
//!   animated
//! - `stagger_on_first_load_only` collapses stagger delays to zero once the
//!   session has animated, so later insertions enter together
//!
//! The gate is read once when the sequencer mounts. A mount counts as having
//! a prior animation if the session had animated before it mounted, or if the
//! mount itself has animated since. The first pass that actually animates
//! records the gate, once per mount. After a mount's first non-empty
//! snapshot, a gate recorded by another region also collapses stagger.
//!
//! # Completion
//!
//! Completion is cooperative. A batch that needs one records its due time and
//! the host either polls with the current time or reports its own timer via
//! [`KeyedAnimationSequencer::complete`]. A newer batch supersedes an older
//! one; the older completion never fires.
//!
//! # Example
//!
//! ```ignore
//! let gate = SessionGate::new();
//! let mut sequencer = KeyedAnimationSequencer::new(gate.clone());
//! let _cleanup = sequencer.on_complete(|batch| println!("batch {batch:?} settled"));
//!
//! let batch = sequencer.reconcile_keys(&["p1", "p2"], &SequenceOptions::default(), now_ms);
//! // ... each frame:
//! sequencer.poll(now_ms);
//! ```

use std::cell::RefCell;
use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;

use super::diff::{dedupe_keep_last, diff_keys, KeyDiff};
use crate::config::AnimationConfig;
use crate::state::gate::AnimationGate;
use crate::types::{AnimatableItem, AnimationAssignment, AnimationKind, Phase};

// =============================================================================
// TYPES
// =============================================================================

/// Identifies one reconciliation batch within a sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BatchId(pub u64);

/// Per-reconciliation options.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceOptions {
    /// `AnimationKind::None` disables motion entirely.
    pub kind: AnimationKind,
    pub animate_on_first_load_only: bool,
    pub stagger_on_first_load_only: bool,
    /// `false` holds entering items in their initial state until
    /// [`KeyedAnimationSequencer::start`] is called.
    pub can_start: bool,
    pub duration_seconds: f64,
    pub stagger_delay_seconds: f64,
    pub distance_offset: f64,
}

impl Default for SequenceOptions {
    fn default() -> Self {
        Self::from_config(&AnimationConfig::default())
    }
}

impl SequenceOptions {
    /// Grid defaults: scale entrance, stagger only on first load.
    pub fn from_config(config: &AnimationConfig) -> Self {
        Self {
            kind: AnimationKind::Scale,
            animate_on_first_load_only: false,
            stagger_on_first_load_only: true,
            can_start: true,
            duration_seconds: config.duration_seconds,
            stagger_delay_seconds: config.stagger_delay_seconds,
            distance_offset: config.distance_offset,
        }
    }

    pub fn should_animate(&self) -> bool {
        self.kind.is_animated()
    }
}

/// How a batch's completion will be delivered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BatchCompletion {
    /// Completion fires on the first poll at or after `due_ms`.
    Scheduled { due_ms: f64 },
    /// Waiting for `start()`.
    Held,
    /// Same key set as before: nothing to wait for, no event.
    Unchanged,
}

/// One atomic reconciliation result.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationBatch<K> {
    pub id: BatchId,
    /// One assignment per key of the new snapshot, in snapshot order.
    pub assignments: Vec<AnimationAssignment<K>>,
    pub diff: KeyDiff<K>,
    pub completion: BatchCompletion,
}

impl<K> AnimationBatch<K> {
    /// Whether any item moves in this batch.
    pub fn is_animated(&self) -> bool {
        self.assignments.iter().any(|a| a.phase == Phase::Entering)
    }
}

/// Result of reporting a completion timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// Listeners were notified.
    Fired,
    /// The batch has not been started yet.
    NotStarted,
    /// The batch was superseded or has already completed. Ignored.
    Stale,
}

#[derive(Debug, Clone, Copy)]
struct PendingCompletion {
    id: BatchId,
    settle_ms: f64,
    due_ms: Option<f64>,
}

type CompletionListener = Rc<dyn Fn(BatchId)>;

// =============================================================================
// SEQUENCER
// =============================================================================

pub struct KeyedAnimationSequencer<K, G>
where
    K: Clone + Eq + Hash + Debug + 'static,
    G: AnimationGate,
{
    gate: G,
    previous: Option<Vec<K>>,
    current: Option<BatchId>,
    next_id: u64,
    pending: Option<PendingCompletion>,
    /// Session had animated before this mount.
    animated_before_mount: bool,
    /// This mount has animated (and recorded the gate).
    recorded: bool,
    listeners: Rc<RefCell<Vec<Option<CompletionListener>>>>,
}

impl<K, G> KeyedAnimationSequencer<K, G>
where
    K: Clone + Eq + Hash + Debug + 'static,
    G: AnimationGate,
{
    /// Create a sequencer for one mount.
    pub fn new(gate: G) -> Self {
        let animated_before_mount = gate.has_animated_once();
        Self {
            gate,
            previous: None,
            current: None,
            next_id: 0,
            pending: None,
            animated_before_mount,
            recorded: false,
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn gate(&self) -> &G {
        &self.gate
    }

    /// Keys of the most recent snapshot.
    pub fn previous_keys(&self) -> Option<&[K]> {
        self.previous.as_deref()
    }

    /// Most recent batch.
    pub fn current_batch(&self) -> Option<BatchId> {
        self.current
    }

    /// Whether an animation already played for this mount's purposes.
    pub fn has_prior_animation(&self) -> bool {
        self.animated_before_mount || self.recorded
    }

    /// Whether a completion is outstanding (scheduled or held).
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    // =========================================================================
    // COMPLETION LISTENERS
    // =========================================================================

    /// Register a completion listener. Returns a cleanup that unregisters it.
    pub fn on_complete<F>(&self, listener: F) -> impl FnOnce() + use<K, G, F>
    where
        F: Fn(BatchId) + 'static,
    {
        let listener: CompletionListener = Rc::new(listener);
        let slot = {
            let mut listeners = self.listeners.borrow_mut();
            listeners.push(Some(listener));
            listeners.len() - 1
        };

        let listeners = Rc::downgrade(&self.listeners);
        move || {
            if let Some(listeners) = listeners.upgrade() {
                let mut listeners = listeners.borrow_mut();
                if let Some(entry) = listeners.get_mut(slot) {
                    *entry = None;
                }
                // Trailing slots are free; earlier indices stay stable
                while matches!(listeners.last(), Some(None)) {
                    listeners.pop();
                }
            }
        }
    }

    fn notify(&self, id: BatchId) {
        // Clone out so listeners may register or unregister while running
        let listeners: Vec<CompletionListener> =
            self.listeners.borrow().iter().flatten().cloned().collect();
        for listener in listeners {
            listener(id);
        }
    }

    // =========================================================================
    // RECONCILIATION
    // =========================================================================

    /// Reconcile a new snapshot of keyed items.
    pub fn reconcile<T>(
        &mut self,
        items: &[AnimatableItem<K, T>],
        options: &SequenceOptions,
        now_ms: f64,
    ) -> AnimationBatch<K> {
        let keys: Vec<K> = items.iter().map(|item| item.key.clone()).collect();
        self.reconcile_keys(&keys, options, now_ms)
    }

    /// Reconcile a new snapshot given only its keys.
    pub fn reconcile_keys(
        &mut self,
        keys: &[K],
        options: &SequenceOptions,
        now_ms: f64,
    ) -> AnimationBatch<K> {
        let (keys, duplicates) = dedupe_keep_last(keys);
        if !duplicates.is_empty() {
            tracing::warn!(
                ?duplicates,
                "duplicate keys in snapshot, keeping last occurrence"
            );
        }

        let previous = self.previous.take().unwrap_or_default();
        let diff = diff_keys(&previous, &keys);

        // Same key set: nothing enters, nothing completes, in-flight batch stands
        if let Some(id) = self.current.filter(|_| diff.is_same_set()) {
            let assignments = keys
                .iter()
                .enumerate()
                .map(|(i, key)| AnimationAssignment::present(key.clone(), i))
                .collect();
            self.previous = Some(keys);
            tracing::trace!(
                batch = id.0,
                identical = diff.is_identical(),
                "snapshot key set unchanged"
            );
            return AnimationBatch {
                id,
                assignments,
                diff,
                completion: BatchCompletion::Unchanged,
            };
        }

        let id = BatchId(self.next_id);
        self.next_id += 1;
        if let Some(stale) = self.pending.take() {
            tracing::debug!(superseded = stale.id.0, batch = id.0, "superseding animation batch");
        }
        self.current = Some(id);

        let assignments = self.assign(&keys, &diff, options);
        let animated = assignments.iter().any(|a| a.phase == Phase::Entering);

        if animated && !self.recorded {
            self.recorded = true;
            self.gate.record_animated();
        }

        let settle_ms = assignments
            .iter()
            .map(AnimationAssignment::settle_seconds)
            .fold(0.0, f64::max)
            * 1000.0;

        let completion = if animated && !options.can_start {
            self.pending = Some(PendingCompletion {
                id,
                settle_ms,
                due_ms: None,
            });
            BatchCompletion::Held
        } else {
            let due_ms = now_ms + settle_ms;
            self.pending = Some(PendingCompletion {
                id,
                settle_ms,
                due_ms: Some(due_ms),
            });
            BatchCompletion::Scheduled { due_ms }
        };

        tracing::debug!(
            batch = id.0,
            items = keys.len(),
            added = diff.added.len(),
            removed = diff.removed.len(),
            animated,
            ?completion,
            "reconciled snapshot"
        );

        self.previous = Some(keys);
        AnimationBatch {
            id,
            assignments,
            diff,
            completion,
        }
    }

    /// Compute every assignment of one batch before any is handed out.
    fn assign(
        &self,
        keys: &[K],
        diff: &KeyDiff<K>,
        options: &SequenceOptions,
    ) -> Vec<AnimationAssignment<K>> {
        let has_animated = self.has_prior_animation();
        let suppressed = options.animate_on_first_load_only && has_animated;

        if !options.should_animate() || suppressed {
            return keys
                .iter()
                .enumerate()
                .map(|(i, key)| AnimationAssignment::present(key.clone(), i))
                .collect();
        }

        // Past the first load of this mount, a session recorded by another
        // region also counts
        let first_load = diff.retained.is_empty() && diff.removed.is_empty();
        let session_animated = has_animated || (!first_load && self.gate.has_animated_once());
        let collapse_stagger = options.stagger_on_first_load_only && session_animated;
        let added: std::collections::HashSet<&K> = diff.added.iter().collect();

        keys.iter()
            .enumerate()
            .map(|(i, key)| {
                if !added.contains(key) {
                    return AnimationAssignment::present(key.clone(), i);
                }
                let delay_seconds = if collapse_stagger {
                    0.0
                } else {
                    i as f64 * options.stagger_delay_seconds
                };
                AnimationAssignment {
                    key: key.clone(),
                    phase: Phase::Entering,
                    kind: options.kind,
                    stagger_index: i,
                    distance_offset: options.distance_offset,
                    duration_seconds: options.duration_seconds,
                    delay_seconds,
                }
            })
            .collect()
    }

    // =========================================================================
    // COMPLETION DELIVERY
    // =========================================================================

    /// Start a held batch. Returns the due time, or `None` if nothing is held.
    pub fn start(&mut self, now_ms: f64) -> Option<f64> {
        let pending = self.pending.as_mut()?;
        if pending.due_ms.is_some() {
            return None;
        }
        let due_ms = now_ms + pending.settle_ms;
        pending.due_ms = Some(due_ms);
        tracing::debug!(batch = pending.id.0, due_ms, "started held batch");
        Some(due_ms)
    }

    /// Fire the pending completion if it is due. Returns the completed batch.
    pub fn poll(&mut self, now_ms: f64) -> Option<BatchId> {
        let pending = self.pending?;
        let due_ms = pending.due_ms?;
        if now_ms < due_ms {
            return None;
        }
        self.pending = None;
        self.notify(pending.id);
        Some(pending.id)
    }

    /// Report a host timer for `id` elapsing.
    pub fn complete(&mut self, id: BatchId) -> CompletionOutcome {
        match self.pending {
            Some(pending) if pending.id == id => {
                if pending.due_ms.is_none() {
                    return CompletionOutcome::NotStarted;
                }
                self.pending = None;
                self.notify(id);
                CompletionOutcome::Fired
            }
            _ => {
                tracing::debug!(batch = id.0, current = ?self.current, "ignoring stale completion");
                CompletionOutcome::Stale
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::gate::SessionGate;
    use std::cell::Cell;

    fn sequencer() -> KeyedAnimationSequencer<&'static str, SessionGate> {
        KeyedAnimationSequencer::new(SessionGate::new())
    }

    fn phases(batch: &AnimationBatch<&'static str>) -> Vec<Phase> {
        batch.assignments.iter().map(|a| a.phase).collect()
    }

    #[test]
    fn test_first_load_staggers_all() {
        let mut seq = sequencer();
        let batch = seq.reconcile_keys(&["a", "b", "c"], &SequenceOptions::default(), 0.0);

        assert_eq!(phases(&batch), vec![Phase::Entering; 3]);
        let indices: Vec<usize> = batch.assignments.iter().map(|a| a.stagger_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert!((batch.assignments[2].delay_seconds - 0.08).abs() < 1e-9);
        assert_eq!(batch.assignments[0].distance_offset, 40.0);
        assert_eq!(batch.assignments[0].duration_seconds, 0.7);
    }

    #[test]
    fn test_completion_due_after_last_item() {
        let mut seq = sequencer();
        let batch = seq.reconcile_keys(&["a", "b", "c"], &SequenceOptions::default(), 1000.0);

        // 2 * 40ms stagger + 700ms duration
        match batch.completion {
            BatchCompletion::Scheduled { due_ms } => assert!((due_ms - 1780.0).abs() < 1e-6),
            other => panic!("unexpected completion {other:?}"),
        }
    }

    #[test]
    fn test_poll_fires_once() {
        let mut seq = sequencer();
        let fired = Rc::new(Cell::new(0));
        let fired_clone = fired.clone();
        let _cleanup = seq.on_complete(move |_| fired_clone.set(fired_clone.get() + 1));

        let batch = seq.reconcile_keys(&["a"], &SequenceOptions::default(), 0.0);
        assert_eq!(seq.poll(100.0), None);
        assert_eq!(seq.poll(700.0), Some(batch.id));
        assert_eq!(seq.poll(10_000.0), None);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_retained_keys_stay_present() {
        let mut seq = sequencer();
        seq.reconcile_keys(&["a", "b"], &SequenceOptions::default(), 0.0);
        let batch = seq.reconcile_keys(&["a", "b", "c"], &SequenceOptions::default(), 0.0);

        assert_eq!(
            phases(&batch),
            vec![Phase::Present, Phase::Present, Phase::Entering]
        );
    }

    #[test]
    fn test_stagger_collapses_after_first_load() {
        let mut seq = sequencer();
        seq.reconcile_keys(&["a", "b"], &SequenceOptions::default(), 0.0);
        let batch = seq.reconcile_keys(&["a", "b", "c"], &SequenceOptions::default(), 0.0);

        let entering = &batch.assignments[2];
        assert_eq!(entering.phase, Phase::Entering);
        assert_eq!(entering.stagger_index, 2);
        assert_eq!(entering.delay_seconds, 0.0);
    }

    #[test]
    fn test_stagger_kept_when_not_first_load_only() {
        let mut seq = sequencer();
        let options = SequenceOptions {
            stagger_on_first_load_only: false,
            ..SequenceOptions::default()
        };
        seq.reconcile_keys(&["a", "b"], &options, 0.0);
        let batch = seq.reconcile_keys(&["a", "b", "c"], &options, 0.0);
        assert!((batch.assignments[2].delay_seconds - 0.08).abs() < 1e-9);
    }

    #[test]
    fn test_same_key_set_is_unchanged() {
        let mut seq = sequencer();
        let first = seq.reconcile_keys(&["a", "b", "c"], &SequenceOptions::default(), 0.0);
        let again = seq.reconcile_keys(&["c", "a", "b"], &SequenceOptions::default(), 10.0);

        assert_eq!(again.id, first.id);
        assert_eq!(again.completion, BatchCompletion::Unchanged);
        assert_eq!(phases(&again), vec![Phase::Present; 3]);
        assert!(again.diff.reordered);
    }

    #[test]
    fn test_unchanged_keeps_in_flight_completion() {
        let mut seq = sequencer();
        let first = seq.reconcile_keys(&["a"], &SequenceOptions::default(), 0.0);
        seq.reconcile_keys(&["a"], &SequenceOptions::default(), 10.0);
        assert_eq!(seq.poll(700.0), Some(first.id));
    }

    #[test]
    fn test_static_kind_is_present_and_immediate() {
        let mut seq = sequencer();
        let options = SequenceOptions {
            kind: AnimationKind::None,
            ..SequenceOptions::default()
        };
        let batch = seq.reconcile_keys(&["a", "b"], &options, 50.0);

        assert_eq!(phases(&batch), vec![Phase::Present; 2]);
        assert!(batch.assignments.iter().all(|a| a.duration_seconds == 0.0));
        assert_eq!(batch.completion, BatchCompletion::Scheduled { due_ms: 50.0 });
        assert!(!seq.gate().has_animated_once());
    }

    #[test]
    fn test_animate_on_first_load_only() {
        let gate = SessionGate::new();
        let options = SequenceOptions {
            animate_on_first_load_only: true,
            ..SequenceOptions::default()
        };

        let mut first_view = KeyedAnimationSequencer::new(gate.clone());
        let batch = first_view.reconcile_keys(&["a"], &options, 0.0);
        assert!(batch.is_animated());
        assert!(gate.has_animated_once());

        // Navigating to another view in the same session
        let mut second_view = KeyedAnimationSequencer::new(gate.clone());
        let batch = second_view.reconcile_keys(&["x", "y"], &options, 0.0);
        assert!(!batch.is_animated());
    }

    #[test]
    fn test_gate_read_at_mount() {
        let gate = SessionGate::new();
        let mut nav = KeyedAnimationSequencer::new(gate.clone());
        let mut grid = KeyedAnimationSequencer::new(gate.clone());

        // Nav animates first and records the session
        nav.reconcile_keys(&["nav"], &SequenceOptions::default(), 0.0);
        assert!(gate.has_animated_once());

        // Grid mounted alongside it still gets its waterfall
        let batch = grid.reconcile_keys(&["a", "b"], &SequenceOptions::default(), 0.0);
        assert!((batch.assignments[1].delay_seconds - 0.04).abs() < 1e-9);
        assert!(grid.has_prior_animation());
    }

    #[test]
    fn test_empty_snapshot_completes_immediately() {
        let mut seq = sequencer();
        let batch = seq.reconcile_keys(&[], &SequenceOptions::default(), 5.0);
        assert!(batch.assignments.is_empty());
        assert_eq!(batch.completion, BatchCompletion::Scheduled { due_ms: 5.0 });
        assert_eq!(seq.poll(5.0), Some(batch.id));
        // Nothing entered, so the gate is untouched
        assert!(!seq.gate().has_animated_once());
    }

    #[test]
    fn test_removed_keys_have_no_assignment() {
        let mut seq = sequencer();
        seq.reconcile_keys(&["a", "b", "c"], &SequenceOptions::default(), 0.0);
        let batch = seq.reconcile_keys(&["c", "d"], &SequenceOptions::default(), 0.0);

        assert_eq!(batch.diff.removed, vec!["a", "b"]);
        assert!(batch.assignments.iter().all(|a| a.key != "a" && a.key != "b"));
    }

    #[test]
    fn test_new_batch_supersedes_pending() {
        let mut seq = sequencer();
        let fired = Rc::new(RefCell::new(Vec::new()));
        let fired_clone = fired.clone();
        let _cleanup = seq.on_complete(move |id| fired_clone.borrow_mut().push(id));

        let first = seq.reconcile_keys(&["a"], &SequenceOptions::default(), 0.0);
        let second = seq.reconcile_keys(&["a", "b"], &SequenceOptions::default(), 100.0);

        assert_eq!(seq.complete(first.id), CompletionOutcome::Stale);
        assert_eq!(seq.complete(second.id), CompletionOutcome::Fired);
        assert_eq!(seq.complete(second.id), CompletionOutcome::Stale);
        assert_eq!(*fired.borrow(), vec![second.id]);
    }

    #[test]
    fn test_held_batch_waits_for_start() {
        let mut seq = sequencer();
        let options = SequenceOptions {
            can_start: false,
            ..SequenceOptions::default()
        };
        let batch = seq.reconcile_keys(&["a"], &options, 0.0);
        assert_eq!(batch.completion, BatchCompletion::Held);
        assert_eq!(seq.poll(10_000.0), None);
        assert_eq!(seq.complete(batch.id), CompletionOutcome::NotStarted);

        let due = seq.start(1000.0).unwrap();
        assert!((due - 1700.0).abs() < 1e-6);
        assert_eq!(seq.start(1200.0), None);
        assert_eq!(seq.poll(1700.0), Some(batch.id));
    }

    #[test]
    fn test_duplicate_keys_keep_last() {
        let mut seq = sequencer();
        let batch = seq.reconcile_keys(&["a", "b", "a"], &SequenceOptions::default(), 0.0);

        let keys: Vec<&str> = batch.assignments.iter().map(|a| a.key).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(batch.assignments[1].stagger_index, 1);
    }

    #[test]
    fn test_cleanup_unregisters_listener() {
        let mut seq = sequencer();
        let fired = Rc::new(Cell::new(false));
        let fired_clone = fired.clone();
        let cleanup = seq.on_complete(move |_| fired_clone.set(true));
        cleanup();

        seq.reconcile_keys(&["a"], &SequenceOptions::default(), 0.0);
        seq.poll(1000.0);
        assert!(!fired.get());
    }

    #[test]
    fn test_gate_recorded_elsewhere_collapses_later_insertions() {
        let gate = SessionGate::new();
        let mut grid = KeyedAnimationSequencer::new(gate.clone());
        let static_pass = SequenceOptions {
            kind: AnimationKind::None,
            ..SequenceOptions::default()
        };
        grid.reconcile_keys(&["a", "b", "c"], &static_pass, 0.0);
        assert!(!grid.has_prior_animation());

        // Another region animates after this one mounted
        gate.record_animated();

        let batch = grid.reconcile_keys(&["a", "b", "c", "d"], &SequenceOptions::default(), 10.0);
        let added = &batch.assignments[3];
        assert_eq!(added.phase, Phase::Entering);
        assert_eq!(added.stagger_index, 3);
        assert_eq!(added.delay_seconds, 0.0);
    }

    #[test]
    fn test_entering_assignment_carries_kind() {
        let mut seq = sequencer();
        let options = SequenceOptions {
            kind: AnimationKind::Right,
            ..SequenceOptions::default()
        };
        seq.reconcile_keys(&["a"], &options, 0.0);
        let batch = seq.reconcile_keys(&["a", "b"], &options, 10.0);

        assert_eq!(batch.assignments[0].kind, AnimationKind::None);
        assert_eq!(batch.assignments[1].kind, AnimationKind::Right);
        assert_eq!(batch.assignments[1].initial_translation(), (40.0, 0.0));
    }

    #[test]
    fn test_listener_slots_shrink_after_cleanup() {
        let seq = sequencer();
        let keep = seq.on_complete(|_| {});
        for _ in 0..100 {
            let cleanup = seq.on_complete(|_| {});
            cleanup();
        }
        assert_eq!(seq.listeners.borrow().len(), 1);

        let middle = seq.on_complete(|_| {});
        let last = seq.on_complete(|_| {});
        middle();
        // Slot 1 is interior, so nothing is reclaimed yet
        assert_eq!(seq.listeners.borrow().len(), 3);
        last();
        assert_eq!(seq.listeners.borrow().len(), 1);
        keep();
        assert!(seq.listeners.borrow().is_empty());
    }

    #[test]
    fn test_reconcile_items() {
        let mut seq = sequencer();
        let items = vec![
            AnimatableItem::new("p1", 1.5),
            AnimatableItem::new("p2", 0.75),
        ];
        let batch = seq.reconcile(&items, &SequenceOptions::default(), 0.0);
        assert_eq!(batch.assignments.len(), 2);
        assert_eq!(seq.previous_keys(), Some(&["p1", "p2"][..]));
    }
}
