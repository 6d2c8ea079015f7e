//! Drag-lifecycle state for the drop region.
//!
//! Browsers report `dragenter`/`dragleave` once per element boundary,
//! so a drag passing over the drop region's children produces nested
//! enter/leave pairs.  Toggling a boolean on each event makes the
//! region flicker; counting unmatched enters instead keeps the region
//! highlighted until the drag truly leaves.

/// Depth-counted drag state.
///
/// `Idle` is depth 0; any positive depth with a file-bearing payload is
/// `Dragging`.  The cycle repeats indefinitely across drag gestures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    depth: u32,
    active: bool,
}

impl DragState {
    /// A drag entered the region or one of its children.
    ///
    /// `has_items` is whether the drag payload carries at least one
    /// item; payload-less drags (e.g. dragged text) deepen the count
    /// without activating the region.
    pub fn enter(&mut self, has_items: bool) {
        self.depth = self.depth.saturating_add(1);
        if has_items {
            self.active = true;
        }
    }

    /// A drag left the region or one of its children.
    ///
    /// Deactivates exactly when the last unmatched enter is balanced.
    /// Extra leave events clamp at zero rather than going negative.
    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        if self.depth == 0 {
            self.active = false;
        }
    }

    /// Force the idle state: a drop completed or the region is being
    /// torn down.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether a file-bearing drag is currently over the region.
    #[must_use]
    pub const fn is_active(self) -> bool {
        self.active
    }

    /// Count of unmatched enter events.
    #[must_use]
    pub const fn depth(self) -> u32 {
        self.depth
    }
}
