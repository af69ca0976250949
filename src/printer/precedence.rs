//! Operator precedence and parenthesization policy

use crate::ast::{BinaryOperator, ExprKind, Expression};

/// Numeric precedence of an expression; higher binds looser
///
/// Only binary operators and let expressions have a non-zero precedence.
pub fn precedence(e: &Expression) -> u32 {
    match &e.kind {
        ExprKind::BinOp { op, .. } => binop_precedence(*op),
        ExprKind::Let { .. } => 1300,
        _ => 0,
    }
}

fn binop_precedence(op: BinaryOperator) -> u32 {
    use BinaryOperator::*;
    match op {
        Equiv => 1200,
        Impl | RevImpl => 1100,
        Or | Xor => 1000,
        And => 900,
        Lt | LtEq | Gt | GtEq | Eq | NotEq => 800,
        In | Subset | Superset => 700,
        Union | Diff | SymDiff => 600,
        Range => 500,
        Plus | Minus => 400,
        Mult | Div | IntDiv | Mod | Intersect => 300,
        Concat => 200,
    }
}

const CONCAT: u32 = 200;

/// Which operands of a binary op need parentheses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parentheses {
    pub left: bool,
    pub right: bool,
}

/// Decide parenthesization for a binary op over its operands
///
/// A side is parenthesized when it binds looser than the operator itself.
/// Equal precedence parenthesizes the right side, except for concatenation,
/// which is right-associative and parenthesizes the left side instead.
pub fn needs_parens(op: BinaryOperator, left: &Expression, right: &Expression) -> Parentheses {
    let p = binop_precedence(op);
    let pl = precedence(left);
    let pr = precedence(right);
    Parentheses {
        left: p < pl || (p == pl && p == CONCAT),
        right: p < pr || (p == pr && p != CONCAT),
    }
}
