//! # slr-expr
//!
//! An arithmetic expression evaluator built on the **slr** runtime: a
//! context-sensitive lexer feeding a hand-specified twelve-state SLR(1)
//! automaton whose reductions evaluate the expression as it is parsed.
//!
//! The language has numbers (`3`, `-0.5`, `.03`, `67.e-3`, `6.02e+23`), the
//! binary operators `+`, `-` and `^`, prefix `cos` and postfix `!`.
//! From loosest to tightest: `+`/`-` (left-associative), `^`
//! (right-associative), `cos`, `!`.
//!
//! ## Example
//!
//! ```rust
//! use slr_expr::{ExprParser, Symbol};
//!
//! let mut parser = ExprParser::new("3 + cos 0 ^ 2".chars());
//! let root = parser.run().unwrap();
//! assert_eq!(root.value(), 4.0);
//!
//! // E -> E + E
//! let [left, plus, right] = root.children() else { panic!("expected a sum") };
//! assert!(matches!(left, Symbol::Nonterminal(e) if e.value() == 3.0));
//! assert_eq!(plus.to_string(), "[PLUS]");
//! assert!(matches!(right, Symbol::Nonterminal(e) if e.value() == 1.0));
//! ```
//!
//! ## Modules
//!
//! - [`lexer`]: [`ExprLexer`], characters to [`ExprToken`]s
//! - [`parser`]: the automaton ([`parser::parser_data`]), the driver and
//!   [`ExprParser`]
//! - [`production`]: the six productions and their semantic actions
//! - [`symbol`]: the evaluated parse tree
//! - [`token`]: token definitions
//! - [`error`]: error types for each stage
pub mod error;
pub mod lexer;
pub mod parser;
pub mod production;
pub mod symbol;
pub mod token;

pub use error::{ExprError, LexError, ParseError, SemanticError};
pub use lexer::ExprLexer;
pub use parser::parser_data::{Expected, ParData, ProdID, StateID, TokenID};
pub use parser::{ExprParser, ExprParserDriver, parse};
pub use production::{PRODUCTIONS, Production};
pub use slr::{Lexer, Position};
pub use symbol::{Nonterminal, NonterminalTag, Symbol};
pub use token::ExprToken;
