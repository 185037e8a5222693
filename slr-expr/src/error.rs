//! # Expression Error Types
//!
//! One `thiserror` enum per layer of the pipeline:
//!
//! - [`LexError`]: the character stream does not form a token,
//! - [`ParseError`]: a token arrives where the automaton has no action for it,
//! - [`SemanticError`]: a well-formed expression cannot be evaluated,
//!
//! and [`ExprError`], their union, which is what
//! [`ExprParser::run`](crate::ExprParser::run) returns. Conversions are
//! derived with `#[from]` so `?` composes across the layers.
use crate::Expected;
use slr::Position;
use std::convert::Infallible;
use std::fmt;
use thiserror::Error;

/// A lexical error. The lexer does not recover from any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A decimal point with neither an integral nor a fractional part.
    #[error("empty number at {position}")]
    EmptyNumber { position: Position },

    /// An exponent marker or sign with no integer after it.
    #[error("{reason} at {position}")]
    MissingInteger {
        position: Position,
        reason: &'static str,
    },

    /// A digit after a leading `0`.
    #[error("illegal leading zero at {position}")]
    LeadingZero { position: Position },

    /// A `c` that does not begin `cos`.
    #[error("'c' should be a prefix to \"cos\" at {position}")]
    IncompleteCosine { position: Position },

    /// A character that starts no token.
    #[error("illegal character {character:?} at {position}")]
    IllegalCharacter {
        position: Position,
        character: char,
    },
}

impl LexError {
    pub fn position(&self) -> Position {
        match self {
            LexError::EmptyNumber { position }
            | LexError::MissingInteger { position, .. }
            | LexError::LeadingZero { position }
            | LexError::IncompleteCosine { position }
            | LexError::IllegalCharacter { position, .. } => *position,
        }
    }
}

/// Renders an optional position as `" at line:column"`, or nothing.
struct At<'a>(&'a Option<Position>);

impl fmt::Display for At<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(position) => write!(f, " at {position}"),
            None => Ok(()),
        }
    }
}

/// A syntax error raised from a state's default action.
///
/// `position` is where the lexer stood when the offending token was looked
/// up; it is `None` when tokens came from a positionless source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected an operand {context}{}", At(.position))]
    ExpectedOperand {
        position: Option<Position>,
        context: &'static str,
    },

    #[error("expected an operator {context}{}", At(.position))]
    ExpectedOperator {
        position: Option<Position>,
        context: &'static str,
    },
}

impl ParseError {
    pub fn new(expected: Expected, position: Option<Position>) -> Self {
        match expected {
            Expected::Operand(context) => ParseError::ExpectedOperand { position, context },
            Expected::Operator(context) => ParseError::ExpectedOperator { position, context },
        }
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            ParseError::ExpectedOperand { position, .. }
            | ParseError::ExpectedOperator { position, .. } => *position,
        }
    }

    pub fn context(&self) -> &'static str {
        match self {
            ParseError::ExpectedOperand { context, .. }
            | ParseError::ExpectedOperator { context, .. } => context,
        }
    }
}

/// An expression that parses but has no value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SemanticError {
    #[error("illegal factorial of {value}: not a non-negative integer")]
    IllegalFactorial { value: f64 },
}

/// Everything [`ExprParser::run`](crate::ExprParser::run) can fail with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Semantic(#[from] SemanticError),
}

impl ExprError {
    /// Where the failure happened, for the errors that know.
    pub fn position(&self) -> Option<Position> {
        match self {
            ExprError::Lex(e) => Some(e.position()),
            ExprError::Parse(e) => e.position(),
            ExprError::Semantic(_) => None,
        }
    }
}

impl From<Infallible> for ExprError {
    fn from(e: Infallible) -> Self {
        match e {}
    }
}
