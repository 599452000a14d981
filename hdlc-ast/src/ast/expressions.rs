//! Expression AST nodes
//! 
//! Expressions are the operands of statements. Each one serializes to an
//! object with a single key naming its shape (`literal`, `unOperator`,
//! `binOperator` or `call`).

use super::ops::{BinaryOp, UnaryOp};

/// AST Expression nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Identifier reference (signal, variable, port, function name)
    Id(String),

    /// Integer literal
    Int(i64),

    /// Real literal
    Float(f64),

    /// String literal
    Str(String),

    /// Unary operation
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },

    /// Binary operation
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },

    /// Function call
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
}

impl Expr {
    pub fn id(name: impl Into<String>) -> Self {
        Expr::Id(name.into())
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            args,
        }
    }
}
