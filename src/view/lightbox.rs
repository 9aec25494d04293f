//! Lightbox view-state machine.
//!
//! Certificate and project galleries open a selected item in a lightbox that
//! must also close when the user navigates back. Rather than coupling that to
//! a platform history API, the state is an explicit machine with two states,
//! `Closed` and `Open(item)`, and three transitions: open on user select,
//! close on user dismiss, close on back navigation. The platform-navigation
//! binding is a thin adapter outside this crate; it only needs to know
//! whether the back event was consumed here or should fall through to real
//! navigation.

use serde::{Deserialize, Serialize};

/// The lightbox overlay state for one gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightboxState {
    /// No overlay; the gallery grid is interactive.
    Closed,
    /// The overlay shows the gallery item at `item`.
    Open { item: usize },
}

impl LightboxState {
    /// User selected a gallery item: open the overlay on it. Selecting
    /// another item while open just retargets the overlay.
    pub fn open(&mut self, item: usize) {
        log::debug!("Lightbox open: item {}", item);
        *self = LightboxState::Open { item };
    }

    /// User dismissed the overlay (close button, backdrop click, Escape).
    pub fn dismiss(&mut self) {
        *self = LightboxState::Closed;
    }

    /// Platform back navigation fired.
    ///
    /// Returns `true` when the event was consumed to close the overlay; the
    /// adapter should then suppress the actual navigation. When the overlay
    /// is already closed the event is not ours and navigation proceeds.
    pub fn navigate_back(&mut self) -> bool {
        match *self {
            LightboxState::Open { item } => {
                log::debug!("Lightbox closed by back navigation (was item {})", item);
                *self = LightboxState::Closed;
                true
            }
            LightboxState::Closed => false,
        }
    }

    /// The currently shown item, if the overlay is open.
    pub fn open_item(&self) -> Option<usize> {
        match *self {
            LightboxState::Open { item } => Some(item),
            LightboxState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, LightboxState::Open { .. })
    }
}

impl Default for LightboxState {
    fn default() -> Self {
        LightboxState::Closed
    }
}
