//! Presenter Module - Composition layer
//!
//! - [`grid`] - Tile layout from sequencer output, selection and photo props
//! - [`nav`] - Nav region driven by the sticky controller

pub mod grid;
pub mod nav;

pub use grid::{
    GridDensity, GridLayout, GridPhoto, GridPresenter, GridProps, Overlay, TileKind, TileView,
    MORE_TILE_KEY,
};
pub use nav::{NavProps, NavRegion, NavView, NAV_KEY};
