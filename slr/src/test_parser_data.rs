//! A tiny left-recursive list grammar for exercising the engine:
//!
//! ```text
//! L -> L x     (Many)
//! L -> x       (One)
//! ```
//!
//! Each `x` carries a number; the driver sums them and records every
//! reduction it performs.

use crate::{
    ParserAction, ParserData, ParserDriver, ParserProdID, ParserStateID, ParserTokenID, Position,
    Token,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateID(u8);

impl StateID {
    pub const fn new(id: u8) -> Self {
        Self(id)
    }
}

impl ParserStateID for StateID {
    const COUNT: usize = 4;
}

impl From<StateID> for usize {
    fn from(s: StateID) -> Self {
        s.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ProdID {
    Many = 0,
    One = 1,
}

impl ParserProdID for ProdID {
    type TokenID = TokenID;

    const COUNT: usize = 2;

    fn label(&self) -> &'static str {
        ProdID::LABELS[Into::<usize>::into(*self)]
    }
    fn lhs_token_id(&self) -> Self::TokenID {
        TokenID::L
    }
    fn size(&self) -> usize {
        ProdID::SIZES[Into::<usize>::into(*self)]
    }
}

impl From<ProdID> for usize {
    fn from(p: ProdID) -> Self {
        p as usize
    }
}

impl ProdID {
    pub const LABELS: &'static [&'static str] = &[
        "L -> L x", // 0
        "L -> x",   // 1
    ];

    pub const SIZES: &'static [usize] = &[
        2, // 0
        1, // 1
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TokenID {
    // Nonterminals:
    L = 0,

    // Terminals:
    X = 1,
    End = 2,
}

impl ParserTokenID for TokenID {
    const COUNT_NONTERMINALS: usize = 1;
    const COUNT_TERMINALS: usize = 2;
    const COUNT: usize = Self::COUNT_NONTERMINALS + Self::COUNT_TERMINALS;
    const END: Self = TokenID::End;

    fn label(&self) -> &'static str {
        ["L", "x", "end"][Into::<usize>::into(*self)]
    }
}

impl From<TokenID> for usize {
    fn from(t: TokenID) -> Self {
        t as usize
    }
}

pub type Action = ParserAction<StateID, ProdID, &'static str>;

pub struct ParData;
impl ParData {
    const TAB: &'static [[Action; TokenID::COUNT]] = &[
        /* STATE 0 */
        [
            Action::Goto(StateID(1)),        /* 0(L) */
            Action::Shift(StateID(2)),       /* 1(x) */
            Action::Error("expected x at start"), /* 2(end) */
        ],
        /* STATE 1 */
        [
            Action::Error("unreachable"),    /* 0(L) */
            Action::Shift(StateID(3)),       /* 1(x) */
            Action::Accept,                  /* 2(end) */
        ],
        /* STATE 2 */
        [
            Action::Error("unreachable"),    /* 0(L) */
            Action::Reduce(ProdID::One),     /* 1(x) */
            Action::Reduce(ProdID::One),     /* 2(end) */
        ],
        /* STATE 3 */
        [
            Action::Error("unreachable"),    /* 0(L) */
            Action::Reduce(ProdID::Many),    /* 1(x) */
            Action::Reduce(ProdID::Many),    /* 2(end) */
        ],
    ];
}

impl ParserData for ParData {
    type StateID = StateID;
    type TokenID = TokenID;
    type ProdID = ProdID;
    type Diagnostic = &'static str;

    #[inline]
    fn start_state() -> Self::StateID {
        StateID(0)
    }
    #[inline]
    fn lookup(state_id: StateID, token_id: TokenID) -> Action {
        Self::TAB[Into::<usize>::into(state_id)][Into::<usize>::into(token_id)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XToken {
    X(u64),
}

impl Token for XToken {
    type TokenID = TokenID;

    fn token_id(&self) -> TokenID {
        TokenID::X
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XError {
    Zero,
    Rejected {
        diagnostic: &'static str,
        position: Option<Position>,
    },
}

impl From<std::convert::Infallible> for XError {
    fn from(e: std::convert::Infallible) -> Self {
        match e {}
    }
}

#[derive(Debug, Default)]
pub struct XDriver {
    pub reduced: Vec<ProdID>,
}

impl ParserDriver for XDriver {
    type ParserData = ParData;
    type Token = XToken;
    type Symbol = u64;
    type Error = XError;

    fn shift(&mut self, token: XToken) -> u64 {
        let XToken::X(x) = token;
        x
    }

    fn reduce(&mut self, prod_id: ProdID, children: Vec<u64>) -> Result<u64, XError> {
        self.reduced.push(prod_id);
        match (prod_id, children.as_slice()) {
            (ProdID::One, [x]) => Ok(*x),
            (ProdID::Many, [_, 0]) => Err(XError::Zero),
            (ProdID::Many, [sum, x]) => Ok(sum + x),
            _ => unreachable!("malformed reduction by `{}`", prod_id.label()),
        }
    }

    fn reject(
        &mut self,
        diagnostic: &'static str,
        _token: Option<&XToken>,
        position: Option<Position>,
    ) -> XError {
        XError::Rejected {
            diagnostic,
            position,
        }
    }
}
