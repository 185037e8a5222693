use crate::{Lexer, LexerStats, Token};
use smartstring::alias::String;
use std::fmt::Debug;

/// One cell of an SLR(1) automaton table.
///
/// Terminal columns hold `Shift`, `Reduce`, `Accept` or `Error`; the
/// nonterminal columns hold `Goto`. `Error` carries the table's diagnostic
/// for the state it was looked up in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParserAction<US, UP, UE>
where
    US: ParserStateID,
    UP: ParserProdID,
    UE: Copy + Debug,
{
    Error(UE),
    Accept,
    Shift(US),
    Reduce(UP),
    Goto(US),
}

pub trait ParserStateID: Copy + Debug + Eq + Into<usize> {
    const COUNT: usize;
}

pub trait ParserTokenID: Copy + Debug + Eq + Into<usize> {
    const COUNT_NONTERMINALS: usize;
    const COUNT_TERMINALS: usize;
    const COUNT: usize;
    /// Pseudo-terminal looked up once the lexer is exhausted.
    const END: Self;

    fn label(&self) -> &'static str;
}

pub trait ParserProdID: Copy + Debug + Eq + Into<usize> {
    type TokenID: ParserTokenID;

    const COUNT: usize;

    fn label(&self) -> &'static str;
    /// The production's head.
    fn lhs_token_id(&self) -> Self::TokenID;
    /// Number of symbols in the production's body.
    fn size(&self) -> usize;
}

/// A static automaton: start state plus a total `(state, token) -> action`
/// lookup.
pub trait ParserData {
    type StateID: ParserStateID;
    type TokenID: ParserTokenID;
    type ProdID: ParserProdID<TokenID = Self::TokenID>;
    type Diagnostic: Copy + Debug;

    fn start_state() -> Self::StateID;

    fn lookup(
        state_id: Self::StateID,
        token_id: Self::TokenID,
    ) -> ParserAction<Self::StateID, Self::ProdID, Self::Diagnostic>;
}

pub type Action<D> = ParserAction<
    <D as ParserData>::StateID,
    <D as ParserData>::ProdID,
    <D as ParserData>::Diagnostic,
>;

type StateOf<D> = <<D as ParserDriver>::ParserData as ParserData>::StateID;
type ProdOf<D> = <<D as ParserDriver>::ParserData as ParserData>::ProdID;
type DiagnosticOf<D> = <<D as ParserDriver>::ParserData as ParserData>::Diagnostic;

/// Grammar-specific hooks called by the [`Parser`] engine.
///
/// The driver decides what a symbol is: `shift` wraps a consumed token,
/// `reduce` folds a production's body (in body order) into the symbol for
/// its head, and `reject` turns a table error into the driver's error type.
pub trait ParserDriver {
    type ParserData: ParserData;
    type Token: Token<TokenID = <Self::ParserData as ParserData>::TokenID>;
    type Symbol: Debug;
    type Error;

    fn shift(&mut self, token: Self::Token) -> Self::Symbol;

    fn reduce(
        &mut self,
        prod_id: ProdOf<Self>,
        children: Vec<Self::Symbol>,
    ) -> Result<Self::Symbol, Self::Error>;

    fn reject(
        &mut self,
        diagnostic: DiagnosticOf<Self>,
        token: Option<&Self::Token>,
        position: Option<crate::Position>,
    ) -> Self::Error;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserStats {
    pub tokens: usize,
    pub shifts: usize,
    pub reductions: usize,
}

/// Shift-reduce engine over two parallel stacks.
///
/// `states` is never empty while running; its bottom is the start state,
/// which has no symbol, so `states.len() == symbols.len() + 1` between
/// actions.
pub struct Parser<L, D>
where
    L: Lexer<Token = D::Token>,
    D: ParserDriver,
    D::Error: From<L::Error>,
{
    lexer: L,
    driver: D,
    states: Vec<StateOf<D>>,
    symbols: Vec<D::Symbol>,
    lookahead: Option<D::Token>,
    stats: ParserStats,
}

impl<L, D> Parser<L, D>
where
    L: Lexer<Token = D::Token>,
    D: ParserDriver,
    D::Error: From<L::Error>,
{
    pub fn new(lexer: L, driver: D) -> Self {
        Self {
            lexer,
            driver,
            states: Vec::new(),
            symbols: Vec::new(),
            lookahead: None,
            stats: ParserStats::default(),
        }
    }

    pub fn lexer(&self) -> &L {
        &self.lexer
    }

    pub fn lexer_mut(&mut self) -> &mut L {
        &mut self.lexer
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn stats(&self) -> ParserStats {
        self.stats.clone()
    }

    pub fn lexer_stats(&self) -> LexerStats {
        self.lexer.stats()
    }

    /// Drives the automaton until it accepts, returning the root symbol.
    ///
    /// Lexer errors, semantic errors from [`ParserDriver::reduce`] and table
    /// errors (via [`ParserDriver::reject`]) abort the run; nothing is
    /// recovered and no partial result is kept.
    ///
    /// # Panics
    ///
    /// Panics if the table is inconsistent: a shift on end of input, a
    /// reduction deeper than the stack, a missing goto, or a goto in a
    /// terminal column.
    pub fn run(&mut self) -> Result<D::Symbol, D::Error> {
        self.states.clear();
        self.symbols.clear();
        self.states.push(D::ParserData::start_state());
        self.advance()?;

        loop {
            let state = self.top_state();
            let token_id = self
                .lookahead
                .as_ref()
                .map_or(<D::ParserData as ParserData>::TokenID::END, Token::token_id);
            if log::log_enabled!(log::Level::Trace) {
                self.dump_state();
            }

            match D::ParserData::lookup(state, token_id) {
                Action::<D::ParserData>::Shift(next) => {
                    log::trace!("Shift {:?} on {}", next, token_id.label());
                    let Some(token) = self.lookahead.take() else {
                        unreachable!("shift on end of input in state {:?}", state);
                    };
                    self.states.push(next);
                    let symbol = self.driver.shift(token);
                    self.symbols.push(symbol);
                    self.stats.shifts += 1;
                    self.advance()?;
                }

                Action::<D::ParserData>::Reduce(prod_id) => {
                    log::trace!("Reduce {:?} ({})", prod_id, prod_id.label());
                    let size = prod_id.size();
                    assert!(
                        self.symbols.len() >= size,
                        "stack underflow reducing by `{}`",
                        prod_id.label()
                    );
                    self.states.truncate(self.states.len() - size);
                    let children = self.symbols.split_off(self.symbols.len() - size);

                    let exposed = self.top_state();
                    let Action::<D::ParserData>::Goto(next) =
                        D::ParserData::lookup(exposed, prod_id.lhs_token_id())
                    else {
                        panic!(
                            "expected goto on {} in state {:?}",
                            prod_id.lhs_token_id().label(),
                            exposed
                        );
                    };
                    self.states.push(next);
                    let symbol = self.driver.reduce(prod_id, children)?;
                    self.symbols.push(symbol);
                    self.stats.reductions += 1;
                }

                Action::<D::ParserData>::Accept => {
                    log::trace!("Accept");
                    assert!(self.symbols.len() == 1);
                    let Some(root) = self.symbols.pop() else {
                        unreachable!("accept with an empty symbol stack");
                    };
                    self.states.truncate(1);
                    return Ok(root);
                }

                Action::<D::ParserData>::Error(diagnostic) => {
                    log::trace!("Error {:?} on {}", diagnostic, token_id.label());
                    let position = self.lexer.position();
                    return Err(self
                        .driver
                        .reject(diagnostic, self.lookahead.as_ref(), position));
                }

                Action::<D::ParserData>::Goto(_) => {
                    unreachable!("goto in terminal column {}", token_id.label())
                }
            }

            debug_assert_eq!(self.states.len(), self.symbols.len() + 1);
        }
    }

    #[inline]
    fn advance(&mut self) -> Result<(), D::Error> {
        self.lookahead = self.lexer.scan()?;
        if self.lookahead.is_some() {
            self.stats.tokens += 1;
        }
        Ok(())
    }

    #[inline]
    fn top_state(&self) -> StateOf<D> {
        match self.states.last() {
            Some(state) => *state,
            None => unreachable!("empty state stack"),
        }
    }

    fn dump_state(&self) {
        let mut output = String::new();
        for (i, state) in self.states.iter().enumerate() {
            if i > 0 {
                output.push_str(&format!("{:?}  ", self.symbols[i - 1]));
            }
            output.push_str(&format!("<{:?}>  ", state));
        }
        output.push_str("<-  ");
        match &self.lookahead {
            Some(token) => output.push_str(&format!("{:?}", token)),
            None => output.push_str(<D::ParserData as ParserData>::TokenID::END.label()),
        }
        log::trace!("{}", output);
    }
}
