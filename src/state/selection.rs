//! Selection - Multi-select membership for tile overlays
//!
//! One set of selected identifiers shared by every tile overlay. Toggle is the
//! only mutator overlays use; `clear` belongs to whoever owns selection mode.
//!
//! Backed by a `ReactiveSet`, so deriveds reading membership re-run on toggle.
//!
//! # Example
//!
//! ```ignore
//! use photo_grid::state::selection::SelectionSet;
//!
//! let selection = SelectionSet::new();
//! selection.toggle("p1".to_string());
//! assert!(selection.contains(&"p1".to_string()));
//! ```

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use spark_signals::{signal, ReactiveSet, Signal};

// =============================================================================
// SELECTION SET
// =============================================================================

pub struct SelectionSet<K: Clone + Eq + Hash + 'static> {
    ids: ReactiveSet<K>,
}

impl<K: Clone + Eq + Hash + 'static> SelectionSet<K> {
    pub fn new() -> Self {
        Self {
            ids: ReactiveSet::new(),
        }
    }

    /// Flip membership of `id`. Returns whether it is selected afterwards.
    pub fn toggle(&self, id: K) -> bool {
        if self.ids.contains(&id) {
            self.ids.remove(&id);
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Set membership explicitly. Repeating the call is a no-op.
    pub fn set_selected(&self, id: K, selected: bool) {
        if self.ids.contains(&id) != selected {
            self.toggle(id);
        }
    }

    pub fn contains(&self, id: &K) -> bool {
        self.ids.contains(id)
    }

    pub fn clear(&self) {
        self.ids.clear();
    }

    /// Snapshot of the selected ids (unordered).
    pub fn values(&self) -> HashSet<K> {
        self.ids.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<K: Clone + Eq + Hash + 'static> Default for SelectionSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + Hash + fmt::Debug + 'static> fmt::Debug for SelectionSet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.values()).finish()
    }
}

// =============================================================================
// SELECTION MODE
// =============================================================================

/// Owner of "selecting" mode and its selection set.
///
/// Exiting the mode is the only implicit clear.
pub struct SelectionMode<K: Clone + Eq + Hash + 'static> {
    selecting: Signal<bool>,
    selection: SelectionSet<K>,
}

impl<K: Clone + Eq + Hash + 'static> SelectionMode<K> {
    pub fn new() -> Self {
        Self {
            selecting: signal(false),
            selection: SelectionSet::new(),
        }
    }

    pub fn is_selecting(&self) -> bool {
        self.selecting.get()
    }

    pub fn selecting_signal(&self) -> Signal<bool> {
        self.selecting.clone()
    }

    pub fn enter(&self) {
        if !self.selecting.get() {
            self.selecting.set(true);
        }
    }

    /// Leave selecting mode and drop the selection.
    pub fn exit(&self) {
        if self.selecting.get() {
            tracing::debug!(selected = self.selection.len(), "selection mode exited");
            self.selecting.set(false);
        }
        self.selection.clear();
    }

    pub fn selection(&self) -> &SelectionSet<K> {
        &self.selection
    }
}

impl<K: Clone + Eq + Hash + 'static> Default for SelectionMode<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> String {
        s.to_string()
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let set = SelectionSet::new();
        assert!(set.toggle(id("p1")));
        assert!(set.contains(&id("p1")));

        assert!(!set.toggle(id("p1")));
        assert!(!set.contains(&id("p1")));
        assert!(set.values().is_empty());
    }

    #[test]
    fn test_values_unordered() {
        let set = SelectionSet::new();
        set.toggle(id("b"));
        set.toggle(id("a"));
        set.toggle(id("c"));
        set.toggle(id("b"));

        let values = set.values();
        assert_eq!(values.len(), 2);
        assert!(values.contains("a"));
        assert!(values.contains("c"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_set_selected_is_idempotent() {
        let set = SelectionSet::new();
        set.set_selected(id("p1"), true);
        set.set_selected(id("p1"), true);
        assert_eq!(set.len(), 1);

        set.set_selected(id("p1"), false);
        set.set_selected(id("p1"), false);
        assert!(set.is_empty());
    }

    #[test]
    fn test_clear() {
        let set = SelectionSet::new();
        set.toggle(id("p1"));
        set.toggle(id("p2"));
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_mode_exit_clears_selection() {
        let mode = SelectionMode::new();
        assert!(!mode.is_selecting());

        mode.enter();
        mode.selection().toggle(id("p1"));
        assert!(mode.is_selecting());
        assert!(mode.selection().contains(&id("p1")));

        mode.exit();
        assert!(!mode.is_selecting());
        assert!(mode.selection().is_empty());
    }

    #[test]
    fn test_mode_enter_keeps_selection() {
        let mode = SelectionMode::new();
        mode.enter();
        mode.selection().toggle(id("p1"));
        mode.enter();
        assert!(mode.selection().contains(&id("p1")));
    }
}
