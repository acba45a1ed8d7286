#![forbid(unsafe_code)]

//! The key catalog: an ordered, fixed-size collection of key descriptors.
//!
//! The default layout is a 7×5 grid. Order is the only mutable aspect of the
//! catalog (whole-element swaps via the reorder controller); keys may repeat
//! roles and there is no other structural invariant.

use mathpad_core::{KeyAction, Op};

/// Grid column count for the default layout.
pub const COLS: usize = 7;
/// Grid row count for the default layout.
pub const ROWS: usize = 5;
/// Inter-cell gap in pixels.
pub const GAP: f32 = 4.0;
/// Default keyboard height in pixels.
pub const KEYBOARD_HEIGHT: f32 = 280.0;

/// Visual role of a key. Front-ends map roles to their palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyRole {
    /// Digits and the decimal point.
    Number,
    /// Math functions and comparison symbols.
    Function,
    /// Fraction shortcuts and builders.
    Fraction,
    /// Editing tools (clear, backspace, commit, mode switch).
    Tool,
    /// The four arithmetic signs.
    Arithmetic,
}

impl KeyRole {
    /// Default `(background, foreground)` colors as `0xRRGGBB`, shared by
    /// front-ends so the keyboard looks the same everywhere.
    #[must_use]
    pub const fn colors(self) -> (u32, u32) {
        match self {
            Self::Number => (0xFFFFFF, 0x1E293B),
            Self::Function => (0xF1F5F9, 0x475569),
            Self::Fraction => (0xFEF9C3, 0xA16207),
            Self::Tool => (0xCBD5E1, 0x334155),
            Self::Arithmetic => (0x6366F1, 0xFFFFFF),
        }
    }
}

/// One key descriptor: stable identity, display label, visual role, and the
/// action it dispatches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDef {
    /// Stable identity, independent of grid position.
    pub id: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Visual role.
    pub role: KeyRole,
    /// Action dispatched on activation.
    pub action: KeyAction,
}

impl KeyDef {
    fn new(id: &'static str, label: &'static str, role: KeyRole, action: KeyAction) -> Self {
        Self {
            id,
            label,
            role,
            action,
        }
    }
}

fn quick_fraction(numerator: &str, denominator: &str) -> KeyAction {
    KeyAction::QuickFraction {
        numerator: numerator.to_string(),
        denominator: denominator.to_string(),
    }
}

/// Build the default 7×5 key layout, row by row.
#[must_use]
pub fn default_layout() -> Vec<KeyDef> {
    use KeyRole::{Arithmetic, Fraction, Function, Number, Tool};

    vec![
        // Row 0:  √  (  )  AC  ⌫  ↵  ÷
        KeyDef::new("sq", "√", Function, KeyAction::Operator(Op::RootOpen)),
        KeyDef::new("p1", "(", Function, KeyAction::Operator(Op::OpenParen)),
        KeyDef::new("p2", ")", Function, KeyAction::Operator(Op::CloseParen)),
        KeyDef::new("AC", "AC", Tool, KeyAction::Clear),
        KeyDef::new("BK", "⌫", Tool, KeyAction::Backspace),
        KeyDef::new("NL", "↵", Tool, KeyAction::Commit),
        KeyDef::new("dv", "÷", Arithmetic, KeyAction::Operator(Op::Divide)),
        // Row 1:  π  <  >  7  8  9  ×
        KeyDef::new("pi", "π", Function, KeyAction::Operator(Op::Pi)),
        KeyDef::new("LT", "<", Function, KeyAction::Operator(Op::Less)),
        KeyDef::new("GT", ">", Function, KeyAction::Operator(Op::Greater)),
        KeyDef::new("N7", "7", Number, KeyAction::Digit('7')),
        KeyDef::new("N8", "8", Number, KeyAction::Digit('8')),
        KeyDef::new("N9", "9", Number, KeyAction::Digit('9')),
        KeyDef::new("mu", "×", Arithmetic, KeyAction::Operator(Op::Times)),
        // Row 2:  ½  ¼  ¾  4  5  6  −
        KeyDef::new("H1", "½", Fraction, quick_fraction("1", "2")),
        KeyDef::new("H2", "¼", Fraction, quick_fraction("1", "4")),
        KeyDef::new("H3", "¾", Fraction, quick_fraction("3", "4")),
        KeyDef::new("N4", "4", Number, KeyAction::Digit('4')),
        KeyDef::new("N5", "5", Number, KeyAction::Digit('5')),
        KeyDef::new("N6", "6", Number, KeyAction::Digit('6')),
        KeyDef::new("MI", "−", Arithmetic, KeyAction::Operator(Op::Minus)),
        // Row 3:  a/b  n·a/b  ⅓  1  2  3  +
        KeyDef::new("FR", "a/b", Fraction, KeyAction::StartFraction),
        KeyDef::new("MX", "n·", Fraction, KeyAction::StartMixed),
        KeyDef::new("H4", "⅓", Fraction, quick_fraction("1", "3")),
        KeyDef::new("N1", "1", Number, KeyAction::Digit('1')),
        KeyDef::new("N2", "2", Number, KeyAction::Digit('2')),
        KeyDef::new("N3", "3", Number, KeyAction::Digit('3')),
        KeyDef::new("PL", "+", Arithmetic, KeyAction::Operator(Op::Add)),
        // Row 4:  abc  xⁿ  x²  %  0  .  =
        KeyDef::new("ab", "abc", Tool, KeyAction::SwitchText),
        KeyDef::new("en", "xⁿ", Function, KeyAction::StartExponent),
        KeyDef::new("s2", "x²", Function, KeyAction::QuickSquare),
        KeyDef::new("PC", "%", Number, KeyAction::Operator(Op::Percent)),
        KeyDef::new("N0", "0", Number, KeyAction::Digit('0')),
        KeyDef::new("DT", ".", Number, KeyAction::Operator(Op::Point)),
        KeyDef::new("EQ", "=", Function, KeyAction::Operator(Op::Equals)),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_fills_the_grid() {
        assert_eq!(default_layout().len(), COLS * ROWS);
    }

    #[test]
    fn key_ids_are_unique() {
        let layout = default_layout();
        let mut ids: Vec<&str> = layout.iter().map(|k| k.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), layout.len());
    }

    #[test]
    fn digit_keys_cover_all_ten_digits() {
        let layout = default_layout();
        let mut digits: Vec<char> = layout
            .iter()
            .filter_map(|k| match k.action {
                KeyAction::Digit(d) => Some(d),
                _ => None,
            })
            .collect();
        digits.sort_unstable();
        assert_eq!(digits, ('0'..='9').collect::<Vec<_>>());
    }

    #[test]
    fn exactly_one_commit_key() {
        let commits = default_layout()
            .iter()
            .filter(|k| k.action == KeyAction::Commit)
            .count();
        assert_eq!(commits, 1);
    }

    #[test]
    fn role_colors_are_paired() {
        let (bg, fg) = KeyRole::Arithmetic.colors();
        assert_eq!(bg, 0x6366F1);
        assert_eq!(fg, 0xFFFFFF);
    }
}
