//! Construction error types
//! 
//! A statement built from positional slots is checked once, at the
//! constructor. The error names the kind and the invariant it broke.

use super::statements::StatementKind;
use hdlc_common::HdlError;
use thiserror::Error;

/// The structural rule a rejected statement broke
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invariant {
    #[error("required operand `{role}` is missing")]
    MissingOperand { role: &'static str },

    #[error("operand `{role}` is not allowed")]
    UnexpectedOperand { role: &'static str },

    #[error("expected {expected} nested blocks, found {found}")]
    NestedBlockCount { expected: &'static str, found: usize },
}

/// A constructor was handed a combination its kind does not allow
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid {kind} statement: {invariant}")]
pub struct InvariantViolation {
    pub kind: StatementKind,
    pub invariant: Invariant,
}

impl InvariantViolation {
    pub fn new(kind: StatementKind, invariant: Invariant) -> Self {
        Self { kind, invariant }
    }
}

impl From<InvariantViolation> for HdlError {
    fn from(err: InvariantViolation) -> Self {
        HdlError::invariant_error(err.to_string())
    }
}
