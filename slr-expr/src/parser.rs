//! # Expression Parser
//!
//! This module couples the expression automaton with its semantic actions:
//!
//! - [`parser_data`]: the twelve-state table, production and token IDs,
//! - [`ExprParserDriver`]: the [`ParserDriver`] that turns shifts into
//!   terminals, reductions into evaluated nonterminals, and table errors into
//!   [`ParseError`]s,
//! - [`ExprParser`]: the [`slr::Parser`] engine specialised to this grammar.
//!
//! Parsing and evaluation happen in one pass: every reduction computes its
//! node's value, so the accepted root already carries the expression's value.

use crate::{
    ExprError, ExprLexer, ExprToken, Nonterminal, ParseError, Production, Symbol,
};
use parser_data::{Expected, ParData, ProdID};
use slr::{
    Lexer, LexerStats, Parser, ParserDriver, ParserProdID, ParserStats, Position, TokenQueue,
};
use std::str::Chars;

pub mod parser_data;

/// Semantic hooks for the expression grammar.
///
/// The driver is stateless; all parse state lives in the engine's stacks.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExprParserDriver;

impl ParserDriver for ExprParserDriver {
    type ParserData = ParData;
    type Token = ExprToken;
    type Symbol = Symbol;
    type Error = ExprError;

    fn shift(&mut self, token: ExprToken) -> Symbol {
        Symbol::Terminal(token)
    }

    /// Evaluates the production's action over the popped body.
    ///
    /// # Panics
    ///
    /// Panics if `children` does not have the shape of `prod_id`'s body.
    fn reduce(&mut self, prod_id: ProdID, children: Vec<Symbol>) -> Result<Symbol, ExprError> {
        let nonterminal = Production::get(prod_id).apply(children)?;
        log::trace!("{} => {}", prod_id.label(), nonterminal);
        Ok(Symbol::Nonterminal(nonterminal))
    }

    fn reject(
        &mut self,
        expected: Expected,
        _token: Option<&ExprToken>,
        position: Option<Position>,
    ) -> ExprError {
        ParseError::new(expected, position).into()
    }
}

/// An evaluating parser for arithmetic expressions.
///
/// # Example
/// ```rust
/// # use slr_expr::ExprParser;
/// let mut parser = ExprParser::new("2^3^2 - 1".chars());
/// let root = parser.run().unwrap();
/// assert_eq!(root.value(), 511.0);
/// ```
pub struct ExprParser<L>
where
    L: Lexer<Token = ExprToken>,
    ExprError: From<L::Error>,
{
    parser: Parser<L, ExprParserDriver>,
}

impl<L> ExprParser<L>
where
    L: Lexer<Token = ExprToken>,
    ExprError: From<L::Error>,
{
    pub fn with_lexer(lexer: L) -> Self {
        Self {
            parser: Parser::new(lexer, ExprParserDriver),
        }
    }

    /// Parses the whole input and returns the evaluated root.
    pub fn run(&mut self) -> Result<Nonterminal, ExprError> {
        match self.parser.run()? {
            Symbol::Nonterminal(root) => Ok(root),
            Symbol::Terminal(token) => unreachable!("accepted a bare terminal {}", token),
        }
    }

    pub fn stats(&self) -> ParserStats {
        self.parser.stats()
    }

    pub fn lexer_stats(&self) -> LexerStats {
        self.parser.lexer_stats()
    }
}

impl<I> ExprParser<ExprLexer<I>>
where
    I: Iterator<Item = char>,
{
    pub fn new(input: I) -> Self {
        Self::with_lexer(ExprLexer::new(input))
    }
}

impl ExprParser<TokenQueue<ExprToken>> {
    /// A parser over tokens that were lexed elsewhere. Syntax errors from
    /// such a parser carry no position.
    pub fn from_tokens(tokens: impl IntoIterator<Item = ExprToken>) -> Self {
        Self::with_lexer(TokenQueue::new(tokens))
    }
}

impl<'a> From<&'a str> for ExprParser<ExprLexer<Chars<'a>>> {
    fn from(input: &'a str) -> Self {
        Self::new(input.chars())
    }
}

/// Parses and evaluates `input` in one call.
///
/// ```rust
/// let root = slr_expr::parse("3+3").unwrap();
/// assert_eq!(root.value(), 6.0);
/// ```
pub fn parse(input: &str) -> Result<Nonterminal, ExprError> {
    ExprParser::new(input.chars()).run()
}
