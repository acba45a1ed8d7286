#![forbid(unsafe_code)]

//! Drag-reorder controller for the key grid.
//!
//! # State Machine
//!
//! `Idle → Dragging → Idle`, driven by three synchronous entry points
//! ([`begin_drag`](DragReorder::begin_drag),
//! [`update_drag`](DragReorder::update_drag),
//! [`end_drag`](DragReorder::end_drag)). Pointer callbacks arrive at whatever
//! rate the host delivers them; each call is a complete transition with no
//! timers and nothing in flight between calls.
//!
//! # Invariants
//!
//! 1. Drag, hover, and ghost state are `None` whenever edit mode is off.
//! 2. A swap is applied at most once per gesture, exactly at gesture end,
//!    and only if drag and hover indices are both set and distinct.
//! 3. Out-of-bounds pointer positions never change the hover target — the
//!    drop target is sticky at grid edges.

use crate::metrics::{GridBounds, GridSpec};

/// Controller state for drag-reordering catalog entries in edit mode.
///
/// Owns the drag/hover indices and the floating ghost position; the catalog
/// itself is owned by the host and mutated only through the swap in
/// [`end_drag`](Self::end_drag).
#[derive(Debug, Clone, Default)]
pub struct DragReorder {
    spec: GridSpec,
    edit_mode: bool,
    drag_index: Option<usize>,
    hover_index: Option<usize>,
    ghost: Option<(f32, f32)>,
}

impl DragReorder {
    /// Create an idle controller for the given grid shape.
    #[must_use]
    pub fn new(spec: GridSpec) -> Self {
        Self {
            spec,
            ..Self::default()
        }
    }

    // --- State access ---

    /// Whether edit mode (reorder-on-drag) is active.
    #[inline]
    #[must_use]
    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Index of the key being dragged, if a drag is in progress.
    #[inline]
    #[must_use]
    pub fn drag_index(&self) -> Option<usize> {
        self.drag_index
    }

    /// Index of the current drop target.
    #[inline]
    #[must_use]
    pub fn hover_index(&self) -> Option<usize> {
        self.hover_index
    }

    /// Pointer position of the floating ghost, for presentation.
    #[inline]
    #[must_use]
    pub fn ghost(&self) -> Option<(f32, f32)> {
        self.ghost
    }

    /// The grid shape this controller resolves against.
    #[inline]
    #[must_use]
    pub fn spec(&self) -> GridSpec {
        self.spec
    }

    // --- Entry points ---

    /// Flip edit mode. Always clears any drag/hover/ghost state so a stale
    /// gesture cannot leak across mode toggles.
    pub fn toggle_edit_mode(&mut self) {
        self.edit_mode = !self.edit_mode;
        self.reset_gesture();
        #[cfg(feature = "tracing")]
        tracing::debug!(edit_mode = self.edit_mode, "edit mode toggled");
    }

    /// Start dragging the key at `index` from pointer position `(x, y)`.
    /// No-op unless edit mode is active.
    pub fn begin_drag(&mut self, index: usize, x: f32, y: f32) {
        if !self.edit_mode {
            return;
        }
        self.drag_index = Some(index);
        self.hover_index = Some(index);
        self.ghost = Some((x, y));
    }

    /// Track a pointer move. Updates the ghost position and, when the
    /// pointer resolves to a cell within `key_count`, the hover target.
    /// No-op if no drag is in progress.
    pub fn update_drag(&mut self, x: f32, y: f32, bounds: GridBounds, key_count: usize) {
        if self.drag_index.is_none() {
            return;
        }
        self.ghost = Some((x, y));
        if let Some(target) = self.spec.cell_at(x, y, bounds)
            && target < key_count
        {
            self.hover_index = Some(target);
        }
    }

    /// Finish the gesture. Swaps the dragged key with the hover target when
    /// both indices are set, distinct, and in range; always returns the
    /// controller to idle. Returns the swapped pair, if any.
    pub fn end_drag<T>(&mut self, keys: &mut [T]) -> Option<(usize, usize)> {
        let swapped = match (self.drag_index, self.hover_index) {
            (Some(from), Some(to))
                if from != to && from < keys.len() && to < keys.len() =>
            {
                keys.swap(from, to);
                #[cfg(feature = "tracing")]
                tracing::debug!(from, to, "keys swapped");
                Some((from, to))
            }
            _ => None,
        };
        self.reset_gesture();
        swapped
    }

    fn reset_gesture(&mut self) {
        self.drag_index = None;
        self.hover_index = None;
        self.ghost = None;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
