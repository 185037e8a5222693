//! # Expression Lexer
//!
//! [`ExprLexer`] reads a character stream one character of lookahead at a
//! time and produces [`ExprToken`]s.
//!
//! Tokenization of signs is context-sensitive. After a number, `+` and `-`
//! are operators first (`3-2` is three tokens); anywhere else they are tried
//! as the sign of a number first (`3+-2` has `-2` as one token). A sign that
//! turns out not to start a number falls back to being its operator.
//!
//! Positions follow the lookahead: the column is the 1-based number of the
//! character about to be read, and reading past the end still advances it.
//! Errors are reported at the lookahead's position when they are detected.
use crate::{ExprToken, LexError};
use slr::{Lexer, LexerStats, Position};
use std::iter::Fuse;
use std::str::Chars;

/// Context-sensitive lexer for arithmetic expressions.
///
/// # Example
/// ```rust
/// # use slr::Lexer;
/// # use slr_expr::{ExprLexer, ExprToken};
/// let mut lexer = ExprLexer::new("3+-2".chars());
/// let tokens = lexer.scan_all().unwrap();
/// assert_eq!(tokens, vec![ExprToken::Number(3.0), ExprToken::Plus, ExprToken::Number(-2.0)]);
/// ```
pub struct ExprLexer<I>
where
    I: Iterator<Item = char>,
{
    input: Fuse<I>,
    /// The lookahead character; `None` once the input is exhausted.
    peek: Option<char>,
    line: usize,
    column: usize,
    was_number: bool,
    stats: LexerStats,
}

impl<I> ExprLexer<I>
where
    I: Iterator<Item = char>,
{
    /// Creates a lexer and reads the first character.
    pub fn new(input: I) -> Self {
        let mut lexer = Self {
            input: input.fuse(),
            peek: None,
            line: 1,
            column: 0,
            was_number: false,
            stats: LexerStats::default(),
        };
        lexer.read();
        lexer
    }

    #[inline]
    fn current(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn read(&mut self) {
        self.peek = self.input.next();
        self.column += 1;
        if self.peek.is_some() {
            self.stats.chars += 1;
        }
    }

    /// Reads the next character and reports whether it is `expected`.
    fn read_expecting(&mut self, expected: char) -> bool {
        self.read();
        self.peek == Some(expected)
    }

    fn peek_digit(&self) -> Option<u32> {
        self.peek.and_then(|c| c.to_digit(10))
    }

    fn peek_sign(&self) -> Option<char> {
        self.peek.filter(|c| matches!(c, '+' | '-'))
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek.filter(|c| c.is_whitespace()) {
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            }
            self.read();
        }
    }

    /// An unsigned integer with no leading zeros; `0` alone is allowed.
    fn scan_integer(&mut self) -> Result<Option<f64>, LexError> {
        let Some(first) = self.peek_digit() else {
            return Ok(None);
        };
        let mut value = f64::from(first);
        self.read();
        while let Some(digit) = self.peek_digit() {
            if first == 0 {
                return Err(LexError::LeadingZero {
                    position: self.current(),
                });
            }
            value = 10.0 * value + f64::from(digit);
            self.read();
        }
        Ok(Some(value))
    }

    fn scan_signed_integer(&mut self) -> Result<Option<f64>, LexError> {
        let sign = self.peek_sign();
        if sign.is_some() {
            self.read();
        }
        match (sign, self.scan_integer()?) {
            (Some('-'), Some(value)) => Ok(Some(-value)),
            (_, Some(value)) => Ok(Some(value)),
            (Some(_), None) => Err(LexError::MissingInteger {
                position: self.current(),
                reason: "sign without a following integer",
            }),
            (None, None) => Ok(None),
        }
    }

    /// Digits after the decimal point; digit `d` at place `k` adds `d * 10^-k`.
    fn scan_fraction(&mut self) -> Option<f64> {
        self.peek_digit()?;
        let mut value: f64 = 0.0;
        let mut divisor: f64 = 10.0;
        while let Some(digit) = self.peek_digit() {
            value += f64::from(digit) / divisor;
            divisor *= 10.0;
            self.read();
        }
        Some(value)
    }

    /// A number, or the operator for a lone sign.
    fn scan_number(&mut self) -> Result<Option<ExprToken>, LexError> {
        let sign = self.peek_sign();
        if sign.is_some() {
            self.read();
        }

        let integer = self.scan_integer()?;

        let fractional = self.peek == Some('.');
        let mut fraction = None;
        if fractional {
            self.read();
            fraction = self.scan_fraction();
        }

        if integer.is_none() {
            if fractional && fraction.is_none() {
                return Err(LexError::EmptyNumber {
                    position: self.current(),
                });
            }
            if !fractional {
                return Ok(sign.and_then(ExprToken::operator));
            }
        }

        let mut exponent = None;
        if self.peek == Some('e') {
            self.read();
            exponent = self.scan_signed_integer()?;
            if exponent.is_none() {
                return Err(LexError::MissingInteger {
                    position: self.current(),
                    reason: "missing exponent after 'e'",
                });
            }
        }

        let mut value = integer.unwrap_or(0.0) + fraction.unwrap_or(0.0);
        if let Some(exponent) = exponent {
            value = scale(value, exponent);
        }
        if sign == Some('-') {
            value = -value;
        }
        Ok(Some(ExprToken::Number(value)))
    }

    fn scan_operator(&mut self) -> Option<ExprToken> {
        let token = self.peek.and_then(ExprToken::operator)?;
        self.read();
        Some(token)
    }

    fn scan_cosine(&mut self) -> Result<Option<ExprToken>, LexError> {
        if self.peek != Some('c') {
            return Ok(None);
        }
        if !(self.read_expecting('o') && self.read_expecting('s')) {
            return Err(LexError::IncompleteCosine {
                position: self.current(),
            });
        }
        self.read();
        Ok(Some(ExprToken::Cosine))
    }
}

/// `mantissa * 10^exponent`, applied in two halves so that a power of ten
/// outside the `f64` range does not overflow or underflow on its own.
fn scale(mantissa: f64, exponent: f64) -> f64 {
    if mantissa == 0.0 {
        return mantissa;
    }
    let half = (exponent / 2.0).trunc();
    mantissa * 10f64.powf(half) * 10f64.powf(exponent - half)
}

impl<I> Lexer for ExprLexer<I>
where
    I: Iterator<Item = char>,
{
    type Token = ExprToken;
    type Error = LexError;

    fn scan(&mut self) -> Result<Option<ExprToken>, LexError> {
        self.skip_whitespace();
        let Some(c) = self.peek else {
            return Ok(None);
        };
        let start = self.current();

        let mut token = if self.was_number {
            match self.scan_operator() {
                Some(token) => Some(token),
                None => self.scan_number()?,
            }
        } else {
            match self.scan_number()? {
                Some(token) => Some(token),
                None => self.scan_operator(),
            }
        };
        if token.is_none() {
            token = self.scan_cosine()?;
        }
        let Some(token) = token else {
            return Err(LexError::IllegalCharacter {
                position: self.current(),
                character: c,
            });
        };

        log::trace!("{} at {}", token, start);
        self.was_number = matches!(token, ExprToken::Number(_));
        self.stats.tokens += 1;
        Ok(Some(token))
    }

    fn position(&self) -> Option<Position> {
        Some(self.current())
    }

    fn stats(&self) -> LexerStats {
        self.stats.clone()
    }
}

impl<'a> From<&'a str> for ExprLexer<Chars<'a>> {
    fn from(input: &'a str) -> Self {
        Self::new(input.chars())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::fuzzy_eq;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn scan_all(input: &str) -> Result<Vec<ExprToken>, LexError> {
        init_logger();
        ExprLexer::new(input.chars()).scan_all()
    }

    fn single_number(input: &str) -> f64 {
        let tokens = scan_all(input).unwrap();
        let [ExprToken::Number(value)] = tokens.as_slice() else {
            panic!("expected a single number in {input:?}, got {tokens:?}");
        };
        *value
    }

    fn error_at(input: &str) -> (LexError, (usize, usize)) {
        let err = scan_all(input).unwrap_err();
        let position = err.position();
        (err, (position.line, position.column))
    }

    #[test]
    fn number_lexemes() {
        for (input, expected) in [
            ("67.e-3", 0.067),
            (".03", 0.03),
            ("-633e-2", -6.33),
            ("0", 0.0),
            ("0.5", 0.5),
            ("2.", 2.0),
            ("3.06e+2", 306.0),
            (".008e+2", 0.8),
            ("+7", 7.0),
            ("10e-1", 1.0),
            ("1e3", 1000.0),
            ("123456789", 123456789.0),
        ] {
            let value = single_number(input);
            assert!(fuzzy_eq(value, expected), "{input:?}: {value} != {expected}");
        }
    }

    #[test]
    fn exponents_beyond_the_power_of_ten_range() {
        assert_eq!(single_number("0e400"), 0.0);
        assert_eq!(single_number("0.0e-400"), 0.0);
        let tiny = single_number("5e-324");
        assert!(tiny > 0.0);
        assert!(fuzzy_eq(tiny, 5e-324));
        assert!(fuzzy_eq(single_number("2e-310"), 2e-310));
        assert!(fuzzy_eq(single_number("0.001e310"), 1e307));
        assert_eq!(single_number("1e400"), f64::INFINITY);
    }

    #[test]
    fn operator_after_plus_is_not_a_sign() {
        assert_eq!(
            scan_all("3+^4").unwrap(),
            vec![
                ExprToken::Number(3.0),
                ExprToken::Plus,
                ExprToken::Power,
                ExprToken::Number(4.0),
            ]
        );
    }

    #[test]
    fn sign_binds_to_number_after_operator() {
        let tokens = scan_all("10e-1+-2").unwrap();
        assert_eq!(tokens.len(), 3);
        assert!(tokens[0].fuzzy_eq(&ExprToken::Number(1.0)));
        assert_eq!(tokens[1], ExprToken::Plus);
        assert!(tokens[2].fuzzy_eq(&ExprToken::Number(-2.0)));
    }

    #[test]
    fn minus_after_number_is_an_operator() {
        assert_eq!(
            scan_all("5-3").unwrap(),
            vec![ExprToken::Number(5.0), ExprToken::Minus, ExprToken::Number(3.0)]
        );
    }

    #[test]
    fn lone_sign_falls_back_to_operator() {
        assert_eq!(
            scan_all("- cos").unwrap(),
            vec![ExprToken::Minus, ExprToken::Cosine]
        );
        assert_eq!(scan_all("+").unwrap(), vec![ExprToken::Plus]);
    }

    #[test]
    fn all_token_kinds() {
        let tokens = scan_all("3.06e+2\n^-.89+5!-cos3!").unwrap();
        let expected = [
            ExprToken::Number(306.0),
            ExprToken::Power,
            ExprToken::Number(-0.89),
            ExprToken::Plus,
            ExprToken::Number(5.0),
            ExprToken::Factorial,
            ExprToken::Minus,
            ExprToken::Cosine,
            ExprToken::Number(3.0),
            ExprToken::Factorial,
        ];
        assert_eq!(tokens.len(), expected.len());
        for (token, expected) in tokens.iter().zip(expected.iter()) {
            assert!(token.fuzzy_eq(expected), "{token} != {expected}");
        }
    }

    #[test]
    fn empty_and_blank_inputs() {
        assert!(scan_all("").unwrap().is_empty());
        assert!(scan_all(" \t\n  \n").unwrap().is_empty());
    }

    #[test]
    fn lexical_errors_and_positions() {
        let (err, at) = error_at("01");
        assert!(matches!(err, LexError::LeadingZero { .. }));
        assert_eq!(at, (1, 2));

        let (err, at) = error_at(".");
        assert!(matches!(err, LexError::EmptyNumber { .. }));
        assert_eq!(at, (1, 2));

        let (err, at) = error_at("3e");
        assert!(matches!(err, LexError::MissingInteger { .. }));
        assert_eq!(at, (1, 3));

        let (err, at) = error_at("83.3e-");
        assert!(matches!(err, LexError::MissingInteger { .. }));
        assert_eq!(at, (1, 7));

        let (err, at) = error_at("co4");
        assert!(matches!(err, LexError::IncompleteCosine { .. }));
        assert_eq!(at, (1, 3));

        let (err, at) = error_at("dos");
        assert!(matches!(err, LexError::IllegalCharacter { character: 'd', .. }));
        assert_eq!(at, (1, 1));
    }

    #[test]
    fn leading_zero_in_exponent() {
        let (err, at) = error_at("1e05");
        assert!(matches!(err, LexError::LeadingZero { .. }));
        assert_eq!(at, (1, 4));
    }

    #[test]
    fn newlines_reset_the_column() {
        let (err, at) = error_at("1 +\n\n  2 $");
        assert!(matches!(err, LexError::IllegalCharacter { character: '$', .. }));
        assert_eq!(at, (3, 5));
    }

    #[test]
    fn position_tracks_the_lookahead() {
        init_logger();
        let mut lexer = ExprLexer::new("cos5".chars());
        assert_eq!(lexer.position(), Some(Position::new(1, 1)));
        assert_eq!(lexer.scan().unwrap(), Some(ExprToken::Cosine));
        assert_eq!(lexer.position(), Some(Position::new(1, 4)));
        assert_eq!(lexer.scan().unwrap(), Some(ExprToken::Number(5.0)));
        assert_eq!(lexer.position(), Some(Position::new(1, 5)));
        assert_eq!(lexer.scan().unwrap(), None);
        assert_eq!(lexer.position(), Some(Position::new(1, 5)));
    }

    #[test]
    fn stats_count_characters_and_tokens() {
        init_logger();
        let mut lexer: ExprLexer<Chars<'_>> = "12 + 3!".into();
        lexer.scan_all().unwrap();
        assert_eq!(
            lexer.stats(),
            LexerStats {
                chars: 7,
                tokens: 4,
            }
        );
    }
}
