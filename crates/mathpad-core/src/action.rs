#![forbid(unsafe_code)]

//! Key actions: the contract between catalog buttons and the builder.
//!
//! Each catalog entry carries exactly one [`KeyAction`]; presentation
//! forwards it to [`ExpressionBuilder::dispatch`](crate::ExpressionBuilder::dispatch)
//! when the key is activated. The match in `dispatch` is exhaustive, so
//! adding a variant here forces every router to handle it.

use crate::token::Op;

/// What pressing a key does.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum KeyAction {
    /// Emit one digit (`'0'..='9'`).
    Digit(char),
    /// Emit one operator symbol, subject to the builder's context rules.
    Operator(Op),
    /// Append a fixed, pre-built fraction token (½, ¼, ¾, ⅓ keys).
    QuickFraction {
        numerator: String,
        denominator: String,
    },
    /// Open the interactive fraction builder.
    StartFraction,
    /// Open the mixed-number builder.
    StartMixed,
    /// Square the trailing number in place.
    QuickSquare,
    /// Open the interactive exponent builder.
    StartExponent,
    /// Priority-ordered unwind of in-progress state, then committed tokens.
    Backspace,
    /// Full reset of the current line.
    Clear,
    /// Request a line commit (routed back to the caller as [`Signal::Commit`]).
    Commit,
    /// Switch to free-text entry mode.
    SwitchText,
}

/// Out-of-band signal returned by `dispatch`.
///
/// The builder never commits on its own: the host receives `Commit`, calls
/// `commit_line`, and delivers the resulting tokens wherever they go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The commit key was pressed.
    Commit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "state-persistence")]
    #[test]
    fn action_serde_round_trip() {
        let actions = vec![
            KeyAction::Digit('7'),
            KeyAction::Operator(Op::Divide),
            KeyAction::QuickFraction {
                numerator: "1".into(),
                denominator: "3".into(),
            },
            KeyAction::Commit,
        ];
        let json = serde_json::to_string(&actions).unwrap();
        let back: Vec<KeyAction> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, actions);
    }

    #[test]
    fn actions_compare_by_payload() {
        assert_eq!(KeyAction::Digit('1'), KeyAction::Digit('1'));
        assert_ne!(KeyAction::Digit('1'), KeyAction::Digit('2'));
        assert_ne!(
            KeyAction::Operator(Op::Add),
            KeyAction::Operator(Op::Minus)
        );
    }
}
