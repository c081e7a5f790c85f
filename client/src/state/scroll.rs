//! Scroll-driven navigation state.
//!
//! DESIGN
//! ======
//! [`compute`] is a pure function of the scroll offset and the section
//! layout. [`ScrollTracker`] remembers the last result so repeated calls
//! with unchanged input report no change, which keeps signal writes (and
//! DOM class churn) to the frames where something actually moved.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::{ACTIVE_LOOKAHEAD_PX, SCROLLED_THRESHOLD_PX};

/// Vertical extent of one page section, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    /// Half-open containment: `[top, top + height)`.
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Inputs for one recomputation, measured from the live document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub offset: f64,
    /// Sections in document order.
    pub sections: Vec<SectionBounds>,
}

/// Derived navigation state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub active_section: Option<String>,
    pub scrolled: bool,
}

/// Derive navigation state from a snapshot.
///
/// Overlapping sections resolve to the later one in document order.
#[must_use]
pub fn compute(snapshot: &ScrollSnapshot) -> ScrollState {
    let lookahead = snapshot.offset + ACTIVE_LOOKAHEAD_PX;
    let active_section = snapshot
        .sections
        .iter()
        .rev()
        .find(|section| section.contains(lookahead))
        .map(|section| section.id.clone());

    ScrollState { active_section, scrolled: snapshot.offset > SCROLLED_THRESHOLD_PX }
}

/// Last-known navigation state plus change detection.
#[derive(Clone, Debug, Default)]
pub struct ScrollTracker {
    state: ScrollState,
}

impl ScrollTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// Recompute from `snapshot`. Returns the new state only when it differs
    /// from the previous one.
    pub fn on_scroll(&mut self, snapshot: &ScrollSnapshot) -> Option<&ScrollState> {
        let next = compute(snapshot);
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(&self.state)
    }
}
