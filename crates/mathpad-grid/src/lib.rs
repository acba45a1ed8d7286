#![forbid(unsafe_code)]

//! Grid layer: the key catalog, grid geometry, and drag reordering.
//!
//! # Role in MathPad
//! `mathpad-grid` owns everything about the keyboard *surface* that is not
//! rendering: the ordered catalog of key descriptors, the pixel-to-cell
//! resolution math for a fixed-size grid, and the [`DragReorder`] controller
//! that lets the user rearrange keys in edit mode.
//!
//! The catalog's ordering is shared mutable state: written only by
//! [`DragReorder::end_drag`]'s swap, read by presentation. The expression
//! builder in `mathpad-core` is independent of everything here except the
//! [`KeyAction`](mathpad_core::KeyAction) each key carries.

pub mod catalog;
pub mod metrics;
pub mod reorder;

pub use catalog::{COLS, GAP, KEYBOARD_HEIGHT, KeyDef, KeyRole, ROWS, default_layout};
pub use metrics::{GridBounds, GridSpec};
pub use reorder::DragReorder;
