//! Serialization and decoding errors

use crate::ast::InvariantViolation;
use hdlc_common::HdlError;
use thiserror::Error;

/// Failure while building an interchange tree
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SerializationError {
    #[error("literal {value} has no finite interchange representation")]
    NonFiniteLiteral { value: f64 },

    #[error("key `{key}` written twice into one object")]
    DuplicateKey { key: String },

    #[error("tree builder failed: {message}")]
    Builder { message: String },
}

impl From<serde_json::Error> for SerializationError {
    fn from(err: serde_json::Error) -> Self {
        SerializationError::Builder {
            message: err.to_string(),
        }
    }
}

/// What was wrong with a node of the input tree
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeErrorKind {
    #[error("expected {expected}, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },

    #[error("missing field `{field}`")]
    MissingField { field: &'static str },

    #[error("unknown statement type `{tag}`")]
    UnknownStatementType { tag: String },

    #[error("unknown literal type `{tag}`")]
    UnknownLiteralType { tag: String },

    #[error("unknown operator {name}")]
    UnknownOperator { name: String },

    #[error("expected one of `literal`, `unOperator`, `binOperator`, `call`, found keys [{keys}]")]
    UnknownExpression { keys: String },

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

/// Failure while decoding an interchange tree, with the JSON path of the node
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{}: {kind}", location(.path))]
pub struct DecodeError {
    pub path: String,
    pub kind: DecodeErrorKind,
}

impl DecodeError {
    pub fn new(path: &str, kind: DecodeErrorKind) -> Self {
        Self {
            path: path.to_string(),
            kind,
        }
    }

    /// JSON path of the offending node, `/` for the root.
    pub fn location(&self) -> &str {
        location(&self.path)
    }
}

fn location(path: &str) -> &str {
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

impl From<SerializationError> for HdlError {
    fn from(err: SerializationError) -> Self {
        HdlError::serialization_error(err.to_string())
    }
}

impl From<DecodeError> for HdlError {
    fn from(err: DecodeError) -> Self {
        HdlError::decode_error(err.kind.to_string(), err.location().to_string())
    }
}
