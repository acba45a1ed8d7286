#![forbid(unsafe_code)]

//! Core: expression tokens and the incremental math-entry state machine.
//!
//! # Role in MathPad
//! `mathpad-core` is the input engine. It owns the committed token sequence,
//! the transient sub-builders for multi-step constructs (fractions, mixed
//! numbers, exponents), and the context-sensitive grammar that decides how
//! each discrete key action mutates state.
//!
//! # Primary responsibilities
//! - **Token / Op**: canonical tagged variants for committed expression units.
//! - **ExpressionBuilder**: the per-session state machine, one entry point per
//!   discrete action (digit, operator, backspace, mode switch, commit).
//! - **KeyAction**: the routing enum that maps catalog buttons onto builder
//!   operations via [`ExpressionBuilder::dispatch`].
//!
//! # How it fits in the system
//! Presentation forwards one call per user action and reads the committed
//! tokens, free-text buffer, and sub-builder state back for rendering. The
//! grid/reorder layer (`mathpad-grid`) consumes [`KeyAction`] for its catalog
//! entries but shares no mutable state with the builder.

pub mod action;
pub mod builder;
pub mod token;

pub use action::{KeyAction, Signal};
pub use builder::{ExpressionBuilder, FractionStage, Mode, SubBuilder};
pub use token::{Op, Token};
