#![forbid(unsafe_code)]

//! Expression tokens: the committed units of a math line.
//!
//! A committed expression is an ordered `Vec<Token>`; insertion order is the
//! left-to-right reading order. Digit strings inside tokens are kept as
//! strings rather than parsed numbers because a trailing decimal point
//! (`"3."`) is a legal in-progress value.

use std::fmt;

// ---------------------------------------------------------------------------
// Operators
// ---------------------------------------------------------------------------

/// Operator symbols accepted by the builder.
///
/// Three of these form the *bracket class* ([`Op::is_bracket`]): they are
/// exempt from the no-consecutive-operators rule and from operator
/// replacement, because they open or close a sub-expression rather than
/// awaiting a right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Op {
    /// `+`
    Add,
    /// `−` (U+2212). Doubles as the unary minus at expression start.
    Minus,
    /// `×`
    Times,
    /// `÷`
    Divide,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `=`
    Equals,
    /// `%`
    Percent,
    /// `π`
    Pi,
    /// `.` — routed specially: glues onto the preceding number token.
    Point,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `√(` — compound root-open symbol.
    RootOpen,
}

impl Op {
    /// Display symbol for this operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Minus => "\u{2212}",
            Self::Times => "\u{d7}",
            Self::Divide => "\u{f7}",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equals => "=",
            Self::Percent => "%",
            Self::Pi => "\u{3c0}",
            Self::Point => ".",
            Self::OpenParen => "(",
            Self::CloseParen => ")",
            Self::RootOpen => "\u{221a}(",
        }
    }

    /// Whether this operator belongs to the bracket/prefix class.
    ///
    /// Bracket operators may follow any token and are never replaced by a
    /// subsequent operator press.
    #[inline]
    #[must_use]
    pub const fn is_bracket(self) -> bool {
        matches!(self, Self::OpenParen | Self::CloseParen | Self::RootOpen)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

/// One committed unit of the output expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Token {
    /// A non-empty digit string, optionally containing one decimal point.
    /// May end with a trailing point while the value is still being typed.
    Number(String),
    /// A single operator symbol.
    Operator(Op),
    /// A simple fraction: numerator over denominator.
    Fraction {
        numerator: String,
        denominator: String,
    },
    /// A mixed number: whole part plus a fraction.
    MixedNumber {
        whole: String,
        numerator: String,
        denominator: String,
    },
    /// A base raised to a power.
    Exponent { base: String, power: String },
    /// Free-form text flushed from the text-entry mode.
    Text(String),
}

impl Token {
    /// Build a number token from a digit string.
    #[must_use]
    pub fn number(digits: impl Into<String>) -> Self {
        Self::Number(digits.into())
    }
}

impl fmt::Display for Token {
    /// Plain-text rendering, mainly for logs and test diagnostics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) | Self::Text(v) => f.write_str(v),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Fraction {
                numerator,
                denominator,
            } => write!(f, "{numerator}/{denominator}"),
            Self::MixedNumber {
                whole,
                numerator,
                denominator,
            } => write!(f, "{whole} {numerator}/{denominator}"),
            Self::Exponent { base, power } => write!(f, "{base}^{power}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracket_class() {
        assert!(Op::OpenParen.is_bracket());
        assert!(Op::CloseParen.is_bracket());
        assert!(Op::RootOpen.is_bracket());
        assert!(!Op::Minus.is_bracket());
        assert!(!Op::Point.is_bracket());
        assert!(!Op::Pi.is_bracket());
    }

    #[test]
    fn operator_symbols() {
        assert_eq!(Op::Minus.symbol(), "−");
        assert_eq!(Op::Divide.symbol(), "÷");
        assert_eq!(Op::RootOpen.symbol(), "√(");
    }

    #[test]
    fn display_rendering() {
        assert_eq!(Token::number("42").to_string(), "42");
        assert_eq!(Token::Operator(Op::Times).to_string(), "×");
        assert_eq!(
            Token::Fraction {
                numerator: "1".into(),
                denominator: "4".into(),
            }
            .to_string(),
            "1/4"
        );
        assert_eq!(
            Token::MixedNumber {
                whole: "2".into(),
                numerator: "1".into(),
                denominator: "3".into(),
            }
            .to_string(),
            "2 1/3"
        );
        assert_eq!(
            Token::Exponent {
                base: "5".into(),
                power: "2".into(),
            }
            .to_string(),
            "5^2"
        );
    }

    #[cfg(feature = "state-persistence")]
    #[test]
    fn token_serde_round_trip() {
        let tokens = vec![
            Token::number("3."),
            Token::Operator(Op::RootOpen),
            Token::MixedNumber {
                whole: "2".into(),
                numerator: "1".into(),
                denominator: "3".into(),
            },
            Token::Text("hello".into()),
        ];
        let json = serde_json::to_string(&tokens).unwrap();
        let back: Vec<Token> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tokens);
    }
}
