#![forbid(unsafe_code)]

//! The incremental expression builder.
//!
//! [`ExpressionBuilder`] turns a sequence of discrete key actions into an
//! ordered, typed token sequence. It owns the committed tokens, the free-text
//! buffer, and the single active sub-builder for multi-step constructs.
//!
//! # State Machine
//!
//! States are `{Idle, Fraction(stage), MixedNumber, Exponent} × {Math,
//! FreeText}`. Initial state is `Idle × Math` with an empty expression. There
//! is no terminal state; `clear` and a successful `commit_line` reset the
//! session.
//!
//! # Invariants
//!
//! 1. At most one sub-builder is active at any time; starting one cancels any
//!    other in progress.
//! 2. A sub-builder never contributes to the committed tokens until it
//!    completes; completion appends exactly one token and returns to idle.
//! 3. The committed sequence never contains two adjacent operator tokens
//!    unless the first is in the bracket class — enforced on every operator
//!    insertion by replacing the previous operator.
//! 4. A number token contains at most one decimal point.
//!
//! # Rejection contract
//!
//! Out-of-grammar actions (operator mid-build, zero denominator, duplicate
//! decimal point, backspace on empty state) are silent no-ops that leave all
//! state unchanged. Nothing here returns an error; the only branch point for
//! callers is [`ExpressionBuilder::commit_line`] returning `None` for an
//! empty line.

use unicode_segmentation::UnicodeSegmentation;

use crate::action::{KeyAction, Signal};
use crate::token::{Op, Token};

// ---------------------------------------------------------------------------
// Modes and sub-builders
// ---------------------------------------------------------------------------

/// Input mode: structured math entry or free-form text entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Structured entry; key actions mutate the committed token sequence.
    #[default]
    Math,
    /// Free-form entry; characters accumulate in the text buffer until the
    /// mode switches back or the line commits.
    FreeText,
}

/// Which slot of an in-progress fraction is receiving digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractionStage {
    Numerator,
    Denominator,
}

/// Transient state for one multi-step construct.
///
/// Presentation reads this to render the in-progress editor (the fraction or
/// exponent "builder bar").
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubBuilder {
    /// Building a fraction. `whole` is carried over when the fraction was
    /// entered by advancing out of a mixed-number whole part; completion then
    /// emits a [`Token::MixedNumber`] instead of a [`Token::Fraction`].
    Fraction {
        stage: FractionStage,
        whole: Option<String>,
        numerator: String,
        denominator: String,
    },
    /// Collecting the whole part of a mixed number.
    MixedNumber { whole: String },
    /// Building an exponent. An empty `base` accepts exactly one digit;
    /// further digits go to `power`.
    Exponent { base: String, power: String },
}

// ---------------------------------------------------------------------------
// ExpressionBuilder
// ---------------------------------------------------------------------------

/// Session-scoped state machine for assembling one expression line.
///
/// One instance per input session, owned by the host. All entry points are
/// synchronous and infallible; see the module docs for the rejection
/// contract.
#[derive(Debug, Clone, Default)]
pub struct ExpressionBuilder {
    tokens: Vec<Token>,
    free_text: String,
    mode: Mode,
    sub: Option<SubBuilder>,
}

impl ExpressionBuilder {
    /// Create a builder in the initial state: idle, math mode, empty line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- State access ---

    /// The committed token sequence, in reading order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The accumulated free-text buffer (not yet flushed to a token).
    #[must_use]
    pub fn free_text(&self) -> &str {
        &self.free_text
    }

    /// Current input mode.
    #[inline]
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The active sub-builder, if any.
    #[must_use]
    pub fn sub_builder(&self) -> Option<&SubBuilder> {
        self.sub.as_ref()
    }

    /// Whether a multi-step construct is in progress. Presentation uses this
    /// to disable operator keys mid-build.
    #[inline]
    #[must_use]
    pub fn is_building(&self) -> bool {
        self.sub.is_some()
    }

    // --- Digit entry ---

    /// Feed one digit. Routed to the active sub-builder stage if one is
    /// open, otherwise concatenated onto a trailing number token (or opening
    /// a new one). Digits are always accepted.
    pub fn submit_digit(&mut self, digit: char) {
        debug_assert!(digit.is_ascii_digit());
        match &mut self.sub {
            Some(SubBuilder::Fraction {
                stage: FractionStage::Numerator,
                numerator,
                ..
            }) => numerator.push(digit),
            Some(SubBuilder::Fraction {
                stage: FractionStage::Denominator,
                denominator,
                ..
            }) => denominator.push(digit),
            Some(SubBuilder::MixedNumber { whole }) => whole.push(digit),
            Some(SubBuilder::Exponent { base, power }) => {
                if base.is_empty() {
                    base.push(digit);
                } else {
                    power.push(digit);
                }
            }
            None => match self.tokens.last_mut() {
                Some(Token::Number(value)) => value.push(digit),
                _ => self.tokens.push(Token::Number(digit.to_string())),
            },
        }
    }

    // --- Operator entry ---

    /// Feed one operator symbol, applying the context rules:
    ///
    /// - no-op while a sub-builder is active;
    /// - bracket-class symbols always append;
    /// - `.` glues onto a trailing number (or synthesizes `"0."`);
    /// - an empty expression or a trailing `(` accepts only unary minus;
    /// - a trailing non-bracket operator is *replaced*, never chained.
    pub fn submit_operator(&mut self, op: Op) {
        if self.sub.is_some() {
            return;
        }
        if op.is_bracket() {
            self.tokens.push(Token::Operator(op));
            return;
        }
        if op == Op::Point {
            self.submit_point();
            return;
        }
        match self.tokens.last() {
            // Expression start and sub-expression start admit only unary minus.
            None | Some(Token::Operator(Op::OpenParen)) => {
                if op == Op::Minus {
                    self.tokens.push(Token::Operator(op));
                }
            }
            // Binary operator awaiting its right operand: the press corrects
            // the previous choice.
            Some(Token::Operator(prev)) if !prev.is_bracket() => {
                self.tokens.pop();
                self.tokens.push(Token::Operator(op));
            }
            _ => self.tokens.push(Token::Operator(op)),
        }
    }

    /// Decimal point placement. A stray point with no usable numeric
    /// predecessor is dropped, except that a point after an operator (or on
    /// an empty line) synthesizes a fresh `"0."` number.
    fn submit_point(&mut self) {
        match self.tokens.last_mut() {
            Some(Token::Number(value)) => {
                if !value.contains('.') {
                    value.push('.');
                }
            }
            None | Some(Token::Operator(_)) => {
                self.tokens.push(Token::Number("0.".to_string()));
            }
            _ => {}
        }
    }

    // --- Fraction / mixed-number builder ---

    /// Open the fraction sub-builder at the numerator stage, cancelling any
    /// other construct in progress.
    pub fn start_fraction(&mut self) {
        self.sub = Some(SubBuilder::Fraction {
            stage: FractionStage::Numerator,
            whole: None,
            numerator: String::new(),
            denominator: String::new(),
        });
    }

    /// Open the mixed-number sub-builder (whole-part stage), cancelling any
    /// other construct in progress.
    pub fn start_mixed_number(&mut self) {
        self.sub = Some(SubBuilder::MixedNumber {
            whole: String::new(),
        });
    }

    /// Advance the fraction builder one stage:
    /// mixed whole → numerator → denominator → committed token.
    ///
    /// Each transition requires a non-empty current buffer; completing the
    /// denominator additionally rejects the literal `"0"`. A rejected
    /// advance leaves the builder exactly where it was.
    pub fn advance_fraction(&mut self) {
        match self.sub.take() {
            Some(SubBuilder::MixedNumber { whole }) if !whole.is_empty() => {
                self.sub = Some(SubBuilder::Fraction {
                    stage: FractionStage::Numerator,
                    whole: Some(whole),
                    numerator: String::new(),
                    denominator: String::new(),
                });
            }
            Some(SubBuilder::Fraction {
                stage: FractionStage::Numerator,
                whole,
                numerator,
                denominator,
            }) if !numerator.is_empty() => {
                self.sub = Some(SubBuilder::Fraction {
                    stage: FractionStage::Denominator,
                    whole,
                    numerator,
                    denominator,
                });
            }
            Some(SubBuilder::Fraction {
                stage: FractionStage::Denominator,
                whole,
                numerator,
                denominator,
            }) if !denominator.is_empty() && denominator != "0" => {
                let token = match whole {
                    Some(whole) => Token::MixedNumber {
                        whole,
                        numerator,
                        denominator,
                    },
                    None => Token::Fraction {
                        numerator,
                        denominator,
                    },
                };
                self.tokens.push(token);
            }
            other => self.sub = other,
        }
    }

    /// Append a ready-made fraction token (the quick ½ / ¼ / ¾ / ⅓ keys).
    pub fn push_fraction(&mut self, numerator: &str, denominator: &str) {
        self.tokens.push(Token::Fraction {
            numerator: numerator.to_string(),
            denominator: denominator.to_string(),
        });
    }

    // --- Exponent builder ---

    /// Open the exponent sub-builder. A trailing number token is consumed
    /// and becomes the base; otherwise the base starts empty and accepts one
    /// digit. Cancels any other construct in progress.
    pub fn start_exponent(&mut self) {
        let base = match self.tokens.last() {
            Some(Token::Number(value)) => {
                let value = value.clone();
                self.tokens.pop();
                value
            }
            _ => String::new(),
        };
        self.sub = Some(SubBuilder::Exponent {
            base,
            power: String::new(),
        });
    }

    /// Replace a trailing number token with that number squared, bypassing
    /// the interactive exponent builder. No-op otherwise.
    pub fn quick_square(&mut self) {
        if let Some(Token::Number(value)) = self.tokens.last() {
            let base = value.clone();
            self.tokens.pop();
            self.tokens.push(Token::Exponent {
                base,
                power: "2".to_string(),
            });
        }
    }

    /// Complete the exponent builder. Requires both base and power to be
    /// non-empty; otherwise the builder stays open unchanged.
    pub fn confirm_exponent(&mut self) {
        match self.sub.take() {
            Some(SubBuilder::Exponent { base, power })
                if !base.is_empty() && !power.is_empty() =>
            {
                self.tokens.push(Token::Exponent { base, power });
            }
            other => self.sub = other,
        }
    }

    /// Discard any active sub-builder and its buffers without emitting a
    /// token. Committed tokens and the free-text buffer are untouched.
    pub fn cancel_builder(&mut self) {
        self.sub = None;
    }

    // --- Free text ---

    /// Append text to the free-text buffer (text-mode key rows, space, `=`).
    pub fn push_text(&mut self, text: &str) {
        self.free_text.push_str(text);
    }

    /// Enter free-text mode.
    pub fn switch_to_free_text(&mut self) {
        self.mode = Mode::FreeText;
    }

    /// Return to math mode, flushing a non-empty free-text buffer into a
    /// single [`Token::Text`] appended to the committed sequence.
    pub fn switch_to_math(&mut self) {
        if !self.free_text.is_empty() {
            let text = std::mem::take(&mut self.free_text);
            self.tokens.push(Token::Text(text));
        }
        self.mode = Mode::Math;
    }

    // --- Backspace ---

    /// Priority-ordered unwind; the first matching rule wins:
    ///
    /// 1. Free-text mode: drop the last grapheme cluster of the buffer.
    /// 2. In-progress sub-builder: peel the active stage back one step
    ///    (character, then stage, then the builder itself; leaving the
    ///    fraction numerator restores a carried mixed-number whole part).
    /// 3. Otherwise: strip the last character of a trailing multi-digit
    ///    number, or remove the last committed token entirely.
    pub fn backspace(&mut self) {
        if self.mode == Mode::FreeText {
            if let Some((offset, _)) = self.free_text.grapheme_indices(true).next_back() {
                self.free_text.truncate(offset);
            }
            return;
        }
        match self.sub.take() {
            Some(SubBuilder::Fraction {
                stage: FractionStage::Denominator,
                whole,
                numerator,
                mut denominator,
            }) => {
                let stage = if denominator.pop().is_some() {
                    FractionStage::Denominator
                } else {
                    FractionStage::Numerator
                };
                self.sub = Some(SubBuilder::Fraction {
                    stage,
                    whole,
                    numerator,
                    denominator,
                });
            }
            Some(SubBuilder::Fraction {
                stage: FractionStage::Numerator,
                whole,
                mut numerator,
                denominator,
            }) => {
                if numerator.pop().is_some() {
                    self.sub = Some(SubBuilder::Fraction {
                        stage: FractionStage::Numerator,
                        whole,
                        numerator,
                        denominator,
                    });
                } else if let Some(whole) = whole {
                    // Step back out of the fraction into the mixed-number
                    // whole part the user came from.
                    self.sub = Some(SubBuilder::MixedNumber { whole });
                }
            }
            Some(SubBuilder::MixedNumber { mut whole }) => {
                if whole.pop().is_some() {
                    self.sub = Some(SubBuilder::MixedNumber { whole });
                }
            }
            Some(SubBuilder::Exponent {
                mut base,
                mut power,
            }) => {
                if power.pop().is_some() {
                    self.sub = Some(SubBuilder::Exponent { base, power });
                } else if !base.is_empty() {
                    base.clear();
                    self.sub = Some(SubBuilder::Exponent { base, power });
                }
            }
            None => match self.tokens.last_mut() {
                Some(Token::Number(value)) if value.len() > 1 => {
                    value.pop();
                }
                Some(_) => {
                    self.tokens.pop();
                }
                None => {}
            },
        }
    }

    // --- Session lifecycle ---

    /// Full reset: empties the committed tokens and the free-text buffer and
    /// cancels any sub-builder. The mode is left as-is.
    pub fn clear(&mut self) {
        self.tokens.clear();
        self.free_text.clear();
        self.sub = None;
        #[cfg(feature = "tracing")]
        tracing::debug!("expression cleared");
    }

    /// Commit the current line.
    ///
    /// Returns the token sequence — a pending free-text buffer becomes a
    /// leading [`Token::Text`] — and resets the session. Returns `None`
    /// (leaving state untouched) when there is nothing to commit; callers
    /// must not confuse this with committing zero tokens.
    #[must_use]
    pub fn commit_line(&mut self) -> Option<Vec<Token>> {
        if self.free_text.is_empty() && self.tokens.is_empty() {
            return None;
        }
        let mut line = Vec::with_capacity(self.tokens.len() + 1);
        if !self.free_text.is_empty() {
            let text = std::mem::take(&mut self.free_text);
            line.push(Token::Text(text));
        }
        line.append(&mut self.tokens);
        self.sub = None;
        #[cfg(feature = "tracing")]
        tracing::debug!(tokens = line.len(), "line committed");
        Some(line)
    }

    // --- Action routing ---

    /// Single routing entry point for catalog-driven input.
    ///
    /// Maps a [`KeyAction`] onto the operations above. Returns
    /// [`Signal::Commit`] for the commit key — the caller is responsible for
    /// invoking [`commit_line`](Self::commit_line) and delivering the result.
    pub fn dispatch(&mut self, action: &KeyAction) -> Option<Signal> {
        match action {
            KeyAction::Digit(digit) => self.submit_digit(*digit),
            KeyAction::Operator(op) => self.submit_operator(*op),
            KeyAction::QuickFraction {
                numerator,
                denominator,
            } => self.push_fraction(numerator, denominator),
            KeyAction::StartFraction => self.start_fraction(),
            KeyAction::StartMixed => self.start_mixed_number(),
            KeyAction::QuickSquare => self.quick_square(),
            KeyAction::StartExponent => self.start_exponent(),
            KeyAction::Backspace => self.backspace(),
            KeyAction::Clear => self.clear(),
            KeyAction::Commit => return Some(Signal::Commit),
            KeyAction::SwitchText => self.switch_to_free_text(),
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
