use crate::Position;
use crate::parser::ParserTokenID;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::fmt::Debug;

/// A lexical token as seen by the parser: something that can name its
/// terminal kind.
pub trait Token: Clone + Debug {
    type TokenID: ParserTokenID;

    fn token_id(&self) -> Self::TokenID;
}

/// A fallible source of tokens.
///
/// `scan` returns `Ok(None)` once the input is exhausted. Implementations
/// that track where they are in the source report it through `position`, which
/// the parser attaches to syntax errors.
pub trait Lexer {
    type Token: Token;
    type Error: Debug;

    fn scan(&mut self) -> Result<Option<Self::Token>, Self::Error>;

    /// Current position in the source, if the lexer tracks one.
    fn position(&self) -> Option<Position> {
        None
    }

    fn stats(&self) -> LexerStats {
        LexerStats::default()
    }

    /// Drains the lexer, collecting every remaining token.
    fn scan_all(&mut self) -> Result<Vec<Self::Token>, Self::Error> {
        let mut tokens = Vec::new();
        while let Some(token) = self.scan()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexerStats {
    /// Characters read from the input.
    pub chars: usize,
    /// Tokens handed out by `scan`.
    pub tokens: usize,
}

/// A lexer over a pre-supplied token sequence.
///
/// Lets a parser run without a character-level lexer. It has no source
/// position, so syntax errors raised while reading from it are unpositioned.
#[derive(Debug, Clone)]
pub struct TokenQueue<T> {
    tokens: VecDeque<T>,
    stats: LexerStats,
}

impl<T> TokenQueue<T> {
    pub fn new(tokens: impl IntoIterator<Item = T>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
            stats: LexerStats::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<T: Token> FromIterator<T> for TokenQueue<T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Self::new(iter)
    }
}

impl<T: Token> Lexer for TokenQueue<T> {
    type Token = T;
    type Error = Infallible;

    fn scan(&mut self) -> Result<Option<T>, Infallible> {
        let token = self.tokens.pop_front();
        if token.is_some() {
            self.stats.tokens += 1;
        }
        Ok(token)
    }

    fn stats(&self) -> LexerStats {
        self.stats.clone()
    }
}
