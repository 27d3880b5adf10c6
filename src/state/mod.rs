//! State Module - Runtime state systems
//!
//! This module contains the state machines behind the grid's interactivity:
//!
//! - **Scroll** - Sample validation and direction tracking
//! - **Sticky** - Nav show/hide and docking with hysteresis
//! - **Gate** - Session-wide "animate once" flag
//! - **Selection** - Multi-select set and selecting mode

pub mod gate;
pub mod scroll;
pub mod selection;
pub mod sticky;

pub use gate::{AnimationGate, SessionGate};
pub use scroll::{direction_of, ScrollDelta, ScrollTracker};
pub use selection::{SelectionMode, SelectionSet};
pub use sticky::StickyVisibilityController;
