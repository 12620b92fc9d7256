// SPDX-License-Identifier: MPL-2.0
//! Keyboard focus bookkeeping.
//!
//! iced has no document-wide focus for buttons, so the application keeps its
//! own: a [`FocusTracker`] records which control is focused, identified by a
//! static [`FocusId`]. Pages and the modal dialog share one tracker, which is
//! what lets the modal capture and later restore the page's focus.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Identifier of a focusable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusId(&'static str);

impl FocusId {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FocusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Shared handle to the currently focused control.
#[derive(Debug, Clone, Default)]
pub struct FocusTracker(Rc<Cell<Option<FocusId>>>);

impl FocusTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn focused(&self) -> Option<FocusId> {
        self.0.get()
    }

    pub fn focus(&self, id: FocusId) {
        self.0.set(Some(id));
    }

    /// Moves focus to `id`, or clears it when `None`.
    pub fn set(&self, id: Option<FocusId>) {
        self.0.set(id);
    }

    pub fn blur(&self) {
        self.0.set(None);
    }

    #[must_use]
    pub fn is_focused(&self, id: FocusId) -> bool {
        self.0.get() == Some(id)
    }

    /// Moves focus one step through `ring` and returns the new target.
    ///
    /// See [`next_in`] for the wrapping rules.
    pub fn cycle(&self, ring: &[FocusId], backwards: bool) -> Option<FocusId> {
        let next = next_in(ring, self.focused(), backwards);
        if next.is_some() {
            self.0.set(next);
        }
        next
    }
}

/// Returns the control after `current` in `ring`, wrapping at both ends.
///
/// When `current` is not part of the ring, forward navigation lands on the
/// first control and backward navigation on the last. An empty ring yields
/// `None`.
#[must_use]
pub fn next_in(ring: &[FocusId], current: Option<FocusId>, backwards: bool) -> Option<FocusId> {
    let last = ring.len().checked_sub(1)?;
    let position = current.and_then(|id| ring.iter().position(|candidate| *candidate == id));

    let index = match (position, backwards) {
        (None, false) => 0,
        (None, true) => last,
        (Some(index), false) if index == last => 0,
        (Some(index), false) => index + 1,
        (Some(0), true) => last,
        (Some(index), true) => index - 1,
    };
    ring.get(index).copied()
}
