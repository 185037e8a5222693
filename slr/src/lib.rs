//! # slr
//!
//! A small table-driven SLR(1) parsing engine.
//!
//! The engine knows nothing about any particular grammar. A grammar plugs in
//! through three pieces:
//!
//! - a [`Lexer`] that yields [`Token`]s and, optionally, its [`Position`];
//! - a [`ParserData`] implementation holding the automaton table;
//! - a [`ParserDriver`] that builds symbols on shift and reduce and turns
//!   table errors into the grammar's own error type.
//!
//! [`Parser::run`] drives the automaton over a state stack and a parallel
//! symbol stack until it accepts or fails.
mod lexer;
mod parser;
mod position;

#[cfg(test)]
mod test_parser_data;

pub use crate::lexer::{Lexer, LexerStats, Token, TokenQueue};
pub use crate::parser::{
    Action, Parser, ParserAction, ParserData, ParserDriver, ParserProdID, ParserStateID,
    ParserStats, ParserTokenID,
};
pub use crate::position::Position;
