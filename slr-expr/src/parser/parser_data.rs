//! The expression automaton: IDs, productions and the twelve-state
//! SLR(1) table.
//!
//! ```text
//! E -> E + E      (0)
//! E -> E - E      (1)
//! E -> E ^ E      (2)
//! E -> cos E      (3)
//! E -> E !        (4)
//! E -> number     (5)
//! ```
//!
//! `+` and `-` share the lowest tier and associate to the left, `^` binds
//! tighter and associates to the right, prefix `cos` binds tighter still,
//! and postfix `!` binds tightest. The table encodes all of this directly in
//! its shift/reduce choices.

use crate::{NonterminalTag, Production};
use slr::{ParserAction, ParserData, ParserProdID, ParserStateID, ParserTokenID};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateID(u8);

impl StateID {
    pub const fn new(id: u8) -> Self {
        Self(id)
    }
}

impl ParserStateID for StateID {
    const COUNT: usize = 12;
}

impl From<StateID> for usize {
    fn from(s: StateID) -> Self {
        s.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenID {
    // Nonterminals:
    Expression = 0,

    // Terminals:
    Plus = 1,
    Minus = 2,
    Power = 3,
    Cosine = 4,
    Factorial = 5,
    Number = 6,
    End = 7,
}

impl TokenID {
    pub const LABELS: &'static [&'static str] = &[
        "EXPRESSION", // 0
        "PLUS",       // 1
        "MINUS",      // 2
        "POWER",      // 3
        "COSINE",     // 4
        "FACTORIAL",  // 5
        "NUMBER",     // 6
        "END",        // 7
    ];
}

impl ParserTokenID for TokenID {
    const COUNT_NONTERMINALS: usize = 1;
    const COUNT_TERMINALS: usize = 7;
    const COUNT: usize = Self::COUNT_NONTERMINALS + Self::COUNT_TERMINALS;
    const END: Self = TokenID::End;

    fn label(&self) -> &'static str {
        TokenID::LABELS[Into::<usize>::into(*self)]
    }
}

impl From<TokenID> for usize {
    fn from(t: TokenID) -> Self {
        t as usize
    }
}

impl fmt::Display for TokenID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ProdID {
    Plus = 0,
    Minus = 1,
    Power = 2,
    Cosine = 3,
    Factorial = 4,
    Number = 5,
}

impl ProdID {
    pub const ALL: [ProdID; 6] = [
        ProdID::Plus,
        ProdID::Minus,
        ProdID::Power,
        ProdID::Cosine,
        ProdID::Factorial,
        ProdID::Number,
    ];

    pub const LABELS: &'static [&'static str] = &[
        "E -> E + E", // 0
        "E -> E - E", // 1
        "E -> E ^ E", // 2
        "E -> cos E", // 3
        "E -> E !",   // 4
        "E -> number", // 5
    ];
}

impl ParserProdID for ProdID {
    type TokenID = TokenID;

    const COUNT: usize = 6;

    fn label(&self) -> &'static str {
        ProdID::LABELS[Into::<usize>::into(*self)]
    }
    fn lhs_token_id(&self) -> Self::TokenID {
        Production::get(*self).head.into()
    }
    fn size(&self) -> usize {
        Production::get(*self).length
    }
}

impl From<ProdID> for usize {
    fn from(p: ProdID) -> Self {
        p as usize
    }
}

impl From<NonterminalTag> for TokenID {
    fn from(tag: NonterminalTag) -> Self {
        match tag {
            NonterminalTag::Expression => TokenID::Expression,
        }
    }
}

/// What a state was waiting for when it met a token it has no action for,
/// together with where in the expression that happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Operand(&'static str),
    Operator(&'static str),
}

pub type Action = ParserAction<StateID, ProdID, Expected>;

const __: Option<Action> = None;
const ACC: Option<Action> = Some(Action::Accept);

const fn s(state: u8) -> Option<Action> {
    Some(Action::Shift(StateID(state)))
}

const fn r(prod: ProdID) -> Option<Action> {
    Some(Action::Reduce(prod))
}

const fn g(state: u8) -> Option<Action> {
    Some(Action::Goto(StateID(state)))
}

const R0: Option<Action> = r(ProdID::Plus);
const R1: Option<Action> = r(ProdID::Minus);
const R2: Option<Action> = r(ProdID::Power);
const R3: Option<Action> = r(ProdID::Cosine);
const R4: Option<Action> = r(ProdID::Factorial);
const R5: Option<Action> = r(ProdID::Number);

pub struct ParData;

impl ParData {
    //                   E      +      -      ^      cos    !      num    end
    const TAB: &'static [[Option<Action>; TokenID::COUNT]] = &[
        /* 0: start   */ [g(1), __, __, __, s(2), __, s(3), __],
        /* 1: E       */ [__, s(4), s(5), s(6), __, s(7), __, ACC],
        /* 2: cos     */ [g(8), __, __, __, s(2), __, s(3), __],
        /* 3: number  */ [__, R5, R5, R5, R5, R5, __, R5],
        /* 4: E +     */ [g(9), __, __, __, s(2), __, s(3), __],
        /* 5: E -     */ [g(10), __, __, __, s(2), __, s(3), __],
        /* 6: E ^     */ [g(11), __, __, __, s(2), __, s(3), __],
        /* 7: E !     */ [__, R4, R4, R4, __, R4, __, R4],
        /* 8: cos E   */ [__, R3, R3, R3, __, s(7), __, R3],
        /* 9: E + E   */ [__, R0, R0, s(6), __, s(7), __, R0],
        /* 10: E - E  */ [__, R1, R1, s(6), __, s(7), __, R1],
        /* 11: E ^ E  */ [__, R2, R2, s(6), __, s(7), __, R2],
    ];

    const DEFAULTS: &'static [Expected; StateID::COUNT] = &[
        Expected::Operand("at start of the input"),
        Expected::Operator("after an expression"),
        Expected::Operand("after a cosine operator"),
        Expected::Operator("after a number"),
        Expected::Operand("after a plus operator"),
        Expected::Operand("after a minus operator"),
        Expected::Operand("after a power operator"),
        Expected::Operator("after a factorial operator"),
        Expected::Operator("after a cosine expression"),
        Expected::Operator("after a plus expression"),
        Expected::Operator("after a minus expression"),
        Expected::Operator("after a power expression"),
    ];
}

impl ParserData for ParData {
    type StateID = StateID;
    type TokenID = TokenID;
    type ProdID = ProdID;
    type Diagnostic = Expected;

    #[inline]
    fn start_state() -> Self::StateID {
        StateID(0)
    }

    /// Looks up the action for `token_id` in `state_id`, falling back to the
    /// state's default error.
    #[inline]
    fn lookup(state_id: StateID, token_id: TokenID) -> Action {
        let state = Into::<usize>::into(state_id);
        Self::TAB[state][Into::<usize>::into(token_id)]
            .unwrap_or(Action::Error(Self::DEFAULTS[state]))
    }
}
