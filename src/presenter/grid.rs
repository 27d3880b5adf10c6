//! Grid Presenter - Tile layout composition
//!
//! Combines the keyed sequencer's assignments, the selection state and the
//! per-photo props into one list of [`TileView`]s for the rendering layer.
//!
//! # Example
//!
//! ```ignore
//! let gate = SessionGate::new();
//! let mode = SelectionMode::new();
//! let mut grid = GridPresenter::new(GridConfig::default(), gate.clone());
//!
//! let layout = grid.present(&photos, &GridProps::default(), &mode, now_ms);
//! for tile in &layout.tiles {
//!     // drive transforms from tile.animation, overlay from tile.overlay
//! }
//! ```

use std::collections::HashMap;

use crate::animate::{BatchCompletion, BatchId, KeyedAnimationSequencer, SequenceOptions};
use crate::config::GridConfig;
use crate::state::gate::AnimationGate;
use crate::state::selection::SelectionMode;
use crate::types::{AnimationAssignment, AnimationKind};

/// Reserved key of the trailing "more" tile.
pub const MORE_TILE_KEY: &str = "more";

// =============================================================================
// INPUT
// =============================================================================

/// What the grid needs to know about one photo.
pub trait GridPhoto {
    fn id(&self) -> &str;

    /// Width / height. Non-finite or non-positive means unknown.
    fn aspect_ratio(&self) -> f64;
}

/// Per-render grid props.
#[derive(Debug, Clone, PartialEq)]
pub struct GridProps {
    /// Photo currently open in the viewer, highlighted in the grid.
    pub selected_photo: Option<String>,
    /// Mark the first tiles as load priority.
    pub prioritize_initial_photos: bool,
    pub animate: bool,
    /// Entrance style of new tiles.
    pub kind: AnimationKind,
    pub can_start: bool,
    pub animate_on_first_load_only: bool,
    pub stagger_on_first_load_only: bool,
    /// Append the trailing "more" tile.
    pub additional_tile: bool,
    pub small: bool,
    pub selectable: bool,
}

impl Default for GridProps {
    fn default() -> Self {
        Self {
            selected_photo: None,
            prioritize_initial_photos: false,
            animate: true,
            kind: AnimationKind::Scale,
            can_start: true,
            animate_on_first_load_only: false,
            stagger_on_first_load_only: true,
            additional_tile: false,
            small: false,
            selectable: true,
        }
    }
}

// =============================================================================
// OUTPUT
// =============================================================================

/// Column density reported to the styling layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridDensity {
    Small,
    Standard,
    High,
}

/// Selection overlay state of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    /// Not in selecting mode, or grid not selectable.
    #[default]
    None,
    Unselected,
    Selected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    /// Index into the photo slice handed to `present`.
    Photo { index: usize },
    More,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TileView {
    pub key: String,
    pub kind: TileKind,
    pub animation: AnimationAssignment<String>,
    /// This is the photo open in the viewer.
    pub selected: bool,
    /// `None` when prioritization was not requested.
    pub priority: Option<bool>,
    /// Last photo: the host should report when it scrolls into view.
    pub notify_visible: bool,
    pub aspect_ratio: Option<f64>,
    /// Photo navigation is disabled while selecting.
    pub pointer_passthrough: bool,
    pub overlay: Overlay,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    pub batch: BatchId,
    pub completion: BatchCompletion,
    pub tiles: Vec<TileView>,
    /// Keys dropped since the previous render.
    pub removed: Vec<String>,
    pub density: GridDensity,
    pub adaptive: bool,
}

// =============================================================================
// PRESENTER
// =============================================================================

pub struct GridPresenter<G: AnimationGate> {
    config: GridConfig,
    sequencer: KeyedAnimationSequencer<String, G>,
}

impl<G: AnimationGate> GridPresenter<G> {
    pub fn new(config: GridConfig, gate: G) -> Self {
        Self {
            config,
            sequencer: KeyedAnimationSequencer::new(gate),
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn sequencer(&self) -> &KeyedAnimationSequencer<String, G> {
        &self.sequencer
    }

    fn sequence_options(&self, props: &GridProps) -> SequenceOptions {
        let mut options = SequenceOptions::from_config(&self.config.animation);
        options.kind = if props.animate {
            props.kind
        } else {
            AnimationKind::None
        };
        options.animate_on_first_load_only = props.animate_on_first_load_only;
        options.stagger_on_first_load_only = props.stagger_on_first_load_only;
        options.can_start = props.can_start;
        options
    }

    fn density(&self, props: &GridProps) -> GridDensity {
        if props.small {
            GridDensity::Small
        } else if self.config.layout.high_density {
            GridDensity::High
        } else {
            GridDensity::Standard
        }
    }

    /// Build the tile layout for one render.
    pub fn present<P: GridPhoto>(
        &mut self,
        photos: &[P],
        props: &GridProps,
        selection: &SelectionMode<String>,
        now_ms: f64,
    ) -> GridLayout {
        let mut keys: Vec<String> = photos.iter().map(|p| p.id().to_string()).collect();
        if props.additional_tile {
            keys.push(MORE_TILE_KEY.to_string());
        }

        // Last occurrence wins, matching the sequencer
        let index_of: HashMap<&str, usize> = photos
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id(), i))
            .collect();

        let options = self.sequence_options(props);
        let batch = self.sequencer.reconcile_keys(&keys, &options, now_ms);

        let layout = &self.config.layout;
        let selecting = selection.is_selecting();
        let photo_count = batch
            .assignments
            .iter()
            .filter(|a| !(props.additional_tile && a.key == MORE_TILE_KEY))
            .count();

        let tiles = batch
            .assignments
            .into_iter()
            .enumerate()
            .map(|(position, animation)| {
                let key = animation.key.clone();
                let photo_index = index_of.get(key.as_str()).copied();

                match photo_index {
                    Some(index) if !(props.additional_tile && key == MORE_TILE_KEY) => {
                        let photo = &photos[index];
                        let ratio = photo.aspect_ratio();
                        let aspect_ratio = if layout.is_adaptive() {
                            (ratio.is_finite() && ratio > 0.0).then_some(ratio)
                        } else {
                            Some(layout.aspect_ratio)
                        };
                        let overlay = if !(selecting && props.selectable) {
                            Overlay::None
                        } else if selection.selection().contains(&key) {
                            Overlay::Selected
                        } else {
                            Overlay::Unselected
                        };

                        TileView {
                            selected: props.selected_photo.as_deref() == Some(key.as_str()),
                            priority: props
                                .prioritize_initial_photos
                                .then_some(position < layout.prioritized_tiles),
                            notify_visible: position + 1 == photo_count,
                            aspect_ratio,
                            pointer_passthrough: selecting,
                            overlay,
                            kind: TileKind::Photo { index },
                            key,
                            animation,
                        }
                    }
                    _ => TileView {
                        key,
                        kind: TileKind::More,
                        animation,
                        selected: false,
                        priority: None,
                        notify_visible: false,
                        aspect_ratio: None,
                        pointer_passthrough: false,
                        overlay: Overlay::None,
                    },
                }
            })
            .collect();

        GridLayout {
            batch: batch.id,
            completion: batch.completion,
            tiles,
            removed: batch.diff.removed,
            density: self.density(props),
            adaptive: layout.is_adaptive(),
        }
    }

    /// Overlay click on a tile. Ignored outside selecting mode, for the
    /// trailing tile and for keys the last render did not show. Returns
    /// whether the tile is selected afterwards.
    pub fn on_select_change(&self, selection: &SelectionMode<String>, key: &str) -> Option<bool> {
        if !selection.is_selecting() || key == MORE_TILE_KEY {
            return None;
        }
        let shown = self
            .sequencer
            .previous_keys()
            .is_some_and(|keys| keys.iter().any(|k| k == key));
        if !shown {
            tracing::debug!(key, "ignoring selection of a tile not on screen");
            return None;
        }
        Some(selection.selection().toggle(key.to_string()))
    }

    // =========================================================================
    // COMPLETION
    // =========================================================================

    /// Register an animation-complete listener. Returns its cleanup.
    pub fn on_animation_complete<F>(&self, listener: F) -> impl FnOnce() + use<G, F>
    where
        F: Fn(BatchId) + 'static,
    {
        self.sequencer.on_complete(listener)
    }

    /// Begin a batch held by `can_start = false`.
    pub fn start(&mut self, now_ms: f64) -> Option<f64> {
        self.sequencer.start(now_ms)
    }

    pub fn poll(&mut self, now_ms: f64) -> Option<BatchId> {
        self.sequencer.poll(now_ms)
    }
}
