//! # Productions and Semantic Actions
//!
//! The six productions of the expression grammar, each paired with the
//! action that evaluates it. An action receives the reduced body in order
//! and checks its shape: operator positions must be the expected terminal
//! and operand positions must be expressions. The automaton only ever hands
//! an action the body of its own production, so a shape mismatch is a bug in
//! the table and panics.
use crate::{ExprToken, Nonterminal, NonterminalTag, ProdID, SemanticError, Symbol};
use slr::ParserProdID;

/// Distance from an integer a factorial operand may be and still count as
/// that integer.
const INTEGER_TOLERANCE: f64 = 1e-6;

pub type SemanticAction = fn(Vec<Symbol>) -> Result<Nonterminal, SemanticError>;

#[derive(Debug)]
pub struct Production {
    pub head: NonterminalTag,
    pub length: usize,
    pub action: SemanticAction,
}

impl Production {
    pub fn get(prod_id: ProdID) -> &'static Production {
        &PRODUCTIONS[Into::<usize>::into(prod_id)]
    }

    pub fn apply(&self, children: Vec<Symbol>) -> Result<Nonterminal, SemanticError> {
        (self.action)(children)
    }
}

pub static PRODUCTIONS: [Production; ProdID::COUNT] = [
    Production {
        head: NonterminalTag::Expression,
        length: 3,
        action: plus,
    },
    Production {
        head: NonterminalTag::Expression,
        length: 3,
        action: minus,
    },
    Production {
        head: NonterminalTag::Expression,
        length: 3,
        action: power,
    },
    Production {
        head: NonterminalTag::Expression,
        length: 2,
        action: cosine,
    },
    Production {
        head: NonterminalTag::Expression,
        length: 2,
        action: factorial,
    },
    Production {
        head: NonterminalTag::Expression,
        length: 1,
        action: number,
    },
];

fn malformed(prod_id: ProdID, children: &[Symbol]) -> ! {
    panic!(
        "malformed reduction by `{}`: {:?}",
        prod_id.label(),
        children
    )
}

fn operand(symbol: &Symbol) -> Option<f64> {
    match symbol {
        Symbol::Nonterminal(e) if e.tag() == NonterminalTag::Expression => Some(e.value()),
        _ => None,
    }
}

fn is_operator(symbol: &Symbol, operator: ExprToken) -> bool {
    matches!(symbol, Symbol::Terminal(token) if *token == operator)
}

fn expression(children: Vec<Symbol>, value: f64) -> Nonterminal {
    Nonterminal::new(NonterminalTag::Expression, children, value)
}

/// Operand values of an `E op E` body.
fn binary(prod_id: ProdID, children: &[Symbol], operator: ExprToken) -> (f64, f64) {
    if let [left, op, right] = children {
        if is_operator(op, operator) {
            if let (Some(left), Some(right)) = (operand(left), operand(right)) {
                return (left, right);
            }
        }
    }
    malformed(prod_id, children)
}

fn plus(children: Vec<Symbol>) -> Result<Nonterminal, SemanticError> {
    let (left, right) = binary(ProdID::Plus, &children, ExprToken::Plus);
    Ok(expression(children, left + right))
}

fn minus(children: Vec<Symbol>) -> Result<Nonterminal, SemanticError> {
    let (left, right) = binary(ProdID::Minus, &children, ExprToken::Minus);
    Ok(expression(children, left - right))
}

fn power(children: Vec<Symbol>) -> Result<Nonterminal, SemanticError> {
    let (base, exponent) = binary(ProdID::Power, &children, ExprToken::Power);
    Ok(expression(children, base.powf(exponent)))
}

fn cosine(children: Vec<Symbol>) -> Result<Nonterminal, SemanticError> {
    let value = match children.as_slice() {
        [op, e] if is_operator(op, ExprToken::Cosine) => operand(e),
        _ => None,
    };
    let Some(value) = value else {
        malformed(ProdID::Cosine, &children)
    };
    Ok(expression(children, value.cos()))
}

fn factorial(children: Vec<Symbol>) -> Result<Nonterminal, SemanticError> {
    let value = match children.as_slice() {
        [e, op] if is_operator(op, ExprToken::Factorial) => operand(e),
        _ => None,
    };
    let Some(value) = value else {
        malformed(ProdID::Factorial, &children)
    };
    Ok(expression(children, factorial_of(value)?))
}

fn number(children: Vec<Symbol>) -> Result<Nonterminal, SemanticError> {
    let [Symbol::Terminal(ExprToken::Number(value))] = children.as_slice() else {
        malformed(ProdID::Number, &children)
    };
    let value = *value;
    Ok(expression(children, value))
}

/// `n!` for a value within [`INTEGER_TOLERANCE`] of a non-negative integer
/// `n`. Saturates to infinity once the product overflows.
pub fn factorial_of(value: f64) -> Result<f64, SemanticError> {
    let n = value.round();
    if !value.is_finite() || n < 0.0 || (value - n).abs() > INTEGER_TOLERANCE {
        return Err(SemanticError::IllegalFactorial { value });
    }
    let mut product: f64 = 1.0;
    let mut k: f64 = 2.0;
    while k <= n && product.is_finite() {
        product *= k;
        k += 1.0;
    }
    Ok(product)
}
