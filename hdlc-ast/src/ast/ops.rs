//! Operator definitions for HDL expressions
//! 
//! This module defines unary and binary operators used in expressions.
//! The serde names are the operator spelling of the interchange tree.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BinaryOp {
    // Arithmetic
    Add, Sub, Mul, Div, Mod, Pow,
    
    // Logic
    And, Or, Xor, Nand, Nor, Xnor,
    
    // Comparison
    Eq, Neq, Lt, Le, Gt, Ge,
    
    // Vectors
    Concat, Index,
    #[serde(rename = "DOWNTO")]
    DownTo,
    To,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op_str = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "mod",
            BinaryOp::Pow => "**",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::Xor => "xor",
            BinaryOp::Nand => "nand",
            BinaryOp::Nor => "nor",
            BinaryOp::Xnor => "xnor",
            BinaryOp::Eq => "=",
            BinaryOp::Neq => "/=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::Concat => "&",
            BinaryOp::Index => "()",
            BinaryOp::DownTo => "downto",
            BinaryOp::To => "to",
        };
        write!(f, "{}", op_str)
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnaryOp {
    Not,
    Neg,
    RisingEdge,
    FallingEdge,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op_str = match self {
            UnaryOp::Not => "not",
            UnaryOp::Neg => "-",
            UnaryOp::RisingEdge => "rising_edge",
            UnaryOp::FallingEdge => "falling_edge",
        };
        write!(f, "{}", op_str)
    }
}
