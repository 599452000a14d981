//! Abstract Syntax Tree definitions
//! 
//! This module defines the statement, expression and declaration nodes the
//! parser builds bottom-up and the interchange layer serializes.

pub mod ops;
pub mod errors;
pub mod expressions;
pub mod statements;
pub mod function;

// Re-export commonly used types at module level
pub use ops::{BinaryOp, UnaryOp};
pub use errors::{Invariant, InvariantViolation};
pub use expressions::Expr;
pub use statements::{Statement, StatementKind, StatementRef};
pub use function::{Function, Variable};
