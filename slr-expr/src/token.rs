//! # Expression Tokens
//!
//! [`ExprToken`] is the unit the [`ExprLexer`](crate::ExprLexer) hands to the
//! parser. It is a closed enum over the six terminal kinds; only
//! [`ExprToken::Number`] carries a payload.
use crate::TokenID;
use slr::Token;
use std::fmt;

/// Relative tolerance used by every `fuzzy_eq` in this crate.
pub const TOLERANCE: f64 = 1e-6;

/// Compares two floats within [`TOLERANCE`], relative to the larger
/// magnitude. Infinities of the same sign and pairs of NaNs compare equal.
pub fn fuzzy_eq(a: f64, b: f64) -> bool {
    if a == b || (a.is_nan() && b.is_nan()) {
        return true;
    }
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    (a - b).abs() <= TOLERANCE * a.abs().max(b.abs())
}

/// A lexical token of the expression language.
///
/// # Example
/// ```rust
/// # use slr::Token;
/// # use slr_expr::{ExprToken, TokenID};
/// let tok = ExprToken::Number(-1300.0);
/// assert_eq!(tok.token_id(), TokenID::Number);
/// assert_eq!(tok.to_string(), "[NUMBER] value=-1300");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExprToken {
    Plus,
    Minus,
    Power,
    Cosine,
    Factorial,
    Number(f64),
}

impl ExprToken {
    /// The operator token for a single character, if it names one.
    ///
    /// `cos` is not a single character and is never returned here.
    pub fn operator(c: char) -> Option<Self> {
        match c {
            '+' => Some(ExprToken::Plus),
            '-' => Some(ExprToken::Minus),
            '^' => Some(ExprToken::Power),
            '!' => Some(ExprToken::Factorial),
            _ => None,
        }
    }

    /// The payload of a number token.
    pub fn value(&self) -> Option<f64> {
        match self {
            ExprToken::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Same kind, and for numbers, values within [`TOLERANCE`].
    pub fn fuzzy_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ExprToken::Number(a), ExprToken::Number(b)) => fuzzy_eq(*a, *b),
            (a, b) => a == b,
        }
    }
}

impl Token for ExprToken {
    type TokenID = TokenID;

    fn token_id(&self) -> TokenID {
        match self {
            ExprToken::Plus => TokenID::Plus,
            ExprToken::Minus => TokenID::Minus,
            ExprToken::Power => TokenID::Power,
            ExprToken::Cosine => TokenID::Cosine,
            ExprToken::Factorial => TokenID::Factorial,
            ExprToken::Number(_) => TokenID::Number,
        }
    }
}

impl fmt::Display for ExprToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.token_id())?;
        if let ExprToken::Number(value) = self {
            write!(f, " value={value}")?;
        }
        Ok(())
    }
}
