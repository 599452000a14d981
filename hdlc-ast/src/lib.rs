//! HDL Convertor - Statement AST and Interchange Tree
//! 
//! This crate provides the statement-level AST produced by the HDL parsers
//! and its conversion to and from the interchange tree:
//! - AST: statements, expressions, functions and variables
//! - Interchange: the tree serializer, its configuration and the decoder

pub mod ast;
pub mod interchange;

pub use ast::{
    BinaryOp, Expr, Function, Invariant, InvariantViolation, Statement, StatementKind,
    StatementRef, UnaryOp, Variable,
};
pub use interchange::{
    AssignmentTag, DecodeError, DecodeErrorKind, SerializationError, SerializerConfig,
    TreeDecoder, TreeSerializer, UnknownField,
};
