//! Load-once Animation Gate - "animate once per session"
//!
//! A session-scoped flag with exactly one transition: false -> true.
//! The flag is passed explicitly to every sequencer that consults it rather
//! than read from ambient global state. Cloning a [`SessionGate`] shares the
//! flag; only a new session (full reload) starts from false again.

use std::fmt;

use spark_signals::{signal, Signal};

/// Read/record access to the session's animation flag.
pub trait AnimationGate {
    /// Whether an entrance animation has already played this session.
    fn has_animated_once(&self) -> bool;

    /// Record that an animation played. Idempotent.
    fn record_animated(&self);
}

/// Session-scoped gate handle.
#[derive(Clone)]
pub struct SessionGate {
    animated: Signal<bool>,
}

impl SessionGate {
    /// Fresh session: nothing has animated yet.
    pub fn new() -> Self {
        Self {
            animated: signal(false),
        }
    }

    /// The backing signal, for reactive readers (e.g. the view switcher).
    pub fn signal(&self) -> Signal<bool> {
        self.animated.clone()
    }
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SessionGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionGate")
            .field("has_animated_once", &self.has_animated_once())
            .finish()
    }
}

impl AnimationGate for SessionGate {
    fn has_animated_once(&self) -> bool {
        self.animated.get()
    }

    fn record_animated(&self) {
        if self.animated.get() {
            return;
        }
        tracing::debug!("session recorded first entrance animation");
        self.animated.set(true);
    }
}

impl<G: AnimationGate + ?Sized> AnimationGate for &G {
    fn has_animated_once(&self) -> bool {
        (**self).has_animated_once()
    }

    fn record_animated(&self) {
        (**self).record_animated()
    }
}
