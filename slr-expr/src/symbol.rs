//! # Parse Tree
//!
//! Symbols live on the parser's symbol stack. A shifted token becomes a
//! [`Symbol::Terminal`]; each reduction moves its body's symbols into the
//! children of a fresh [`Nonterminal`] and evaluates it. The accepted root is
//! always a nonterminal, so the whole tree is evaluated by the time parsing
//! ends.
use crate::ExprToken;
use crate::token::fuzzy_eq;
use std::fmt;
use std::mem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NonterminalTag {
    Expression,
}

impl fmt::Display for NonterminalTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NonterminalTag::Expression => f.write_str("EXPRESSION"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    Terminal(ExprToken),
    Nonterminal(Nonterminal),
}

impl Symbol {
    /// Same shape, with every number and value within tolerance.
    pub fn fuzzy_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Symbol::Terminal(a), Symbol::Terminal(b)) => a.fuzzy_eq(b),
            (Symbol::Nonterminal(a), Symbol::Nonterminal(b)) => a.fuzzy_eq(b),
            _ => false,
        }
    }
}

impl From<ExprToken> for Symbol {
    fn from(token: ExprToken) -> Self {
        Symbol::Terminal(token)
    }
}

impl From<Nonterminal> for Symbol {
    fn from(nonterminal: Nonterminal) -> Self {
        Symbol::Nonterminal(nonterminal)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Terminal(token) => fmt::Display::fmt(token, f),
            Symbol::Nonterminal(nonterminal) => fmt::Display::fmt(nonterminal, f),
        }
    }
}

/// An evaluated interior node.
///
/// `children` are exactly the body of the production that built the node,
/// in body order.
#[derive(Debug, Clone, PartialEq)]
pub struct Nonterminal {
    tag: NonterminalTag,
    children: Vec<Symbol>,
    value: f64,
}

impl Nonterminal {
    pub(crate) fn new(tag: NonterminalTag, children: Vec<Symbol>, value: f64) -> Self {
        Self {
            tag,
            children,
            value,
        }
    }

    pub fn tag(&self) -> NonterminalTag {
        self.tag
    }

    pub fn children(&self) -> &[Symbol] {
        &self.children
    }

    pub fn into_children(mut self) -> Vec<Symbol> {
        mem::take(&mut self.children)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn fuzzy_eq(&self, other: &Self) -> bool {
        self.tag == other.tag
            && fuzzy_eq(self.value, other.value)
            && self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .zip(&other.children)
                .all(|(a, b)| a.fuzzy_eq(b))
    }
}

/// Left-associative chains nest one node per operator, so children are
/// released from a worklist instead of by recursion.
impl Drop for Nonterminal {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.children);
        while let Some(symbol) = pending.pop() {
            if let Symbol::Nonterminal(mut nonterminal) = symbol {
                pending.append(&mut nonterminal.children);
            }
        }
    }
}

impl fmt::Display for Nonterminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] value={}", self.tag, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(value: f64) -> Nonterminal {
        Nonterminal::new(
            NonterminalTag::Expression,
            vec![ExprToken::Number(value).into()],
            value,
        )
    }

    #[test]
    fn display_forms() {
        assert_eq!(number(-1300.0).to_string(), "[EXPRESSION] value=-1300");
        assert_eq!(Symbol::from(number(2.5)).to_string(), "[EXPRESSION] value=2.5");
        assert_eq!(Symbol::from(ExprToken::Power).to_string(), "[POWER]");
    }

    #[test]
    fn accessors() {
        let node = number(4.0);
        assert_eq!(node.tag(), NonterminalTag::Expression);
        assert_eq!(node.value(), 4.0);
        assert_eq!(node.children(), &[Symbol::Terminal(ExprToken::Number(4.0))]);
        assert_eq!(node.into_children().len(), 1);
    }

    #[test]
    fn deep_trees_drop_without_recursion() {
        let mut node = number(1.0);
        for _ in 0..200_000 {
            node = Nonterminal::new(
                NonterminalTag::Expression,
                vec![node.into(), ExprToken::Factorial.into()],
                1.0,
            );
        }
        assert_eq!(node.children().len(), 2);
        drop(node);
    }

    #[test]
    fn fuzzy_eq_is_structural() {
        let a = number(0.1 + 0.2);
        let b = number(0.3);
        assert!(a.fuzzy_eq(&b));
        assert_ne!(a, b);

        let plus = Nonterminal::new(
            NonterminalTag::Expression,
            vec![a.clone().into(), ExprToken::Plus.into(), b.clone().into()],
            0.6,
        );
        let minus = Nonterminal::new(
            NonterminalTag::Expression,
            vec![a.clone().into(), ExprToken::Minus.into(), b.into()],
            0.6,
        );
        assert!(!plus.fuzzy_eq(&minus));
        assert!(!plus.fuzzy_eq(&a));
        assert!(!Symbol::from(a).fuzzy_eq(&Symbol::from(ExprToken::Number(0.3))));
    }
}
