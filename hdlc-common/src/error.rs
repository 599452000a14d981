//! Error handling for the HDL convertor
//! 
//! This module defines the workspace-wide error type and the diagnostic
//! collection used when a whole input is checked at once.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Main error type that encompasses construction, serialization and decoding
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HdlError {
    #[error("Invariant violation: {message}")]
    InvariantError { message: String },

    #[error("Serialization error: {message}")]
    SerializationError { message: String },

    #[error("Decode error at {path}: {message}")]
    DecodeError { path: String, message: String },

    #[error("IO error: {message}")]
    IoError { message: String },
}

impl HdlError {
    /// Create an invariant error
    pub fn invariant_error(message: String) -> Self {
        HdlError::InvariantError { message }
    }

    /// Create a serialization error
    pub fn serialization_error(message: String) -> Self {
        HdlError::SerializationError { message }
    }

    /// Create a decode error located at a JSON path
    pub fn decode_error(message: String, path: String) -> Self {
        HdlError::DecodeError { path, message }
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for HdlError {
    fn from(err: std::io::Error) -> Self {
        HdlError::IoError {
            message: err.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with the JSON path of the node it refers to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub location: String,
}

impl Diagnostic {
    pub fn error(message: String, location: String) -> Self {
        Self {
            severity: Severity::Error,
            message,
            location,
        }
    }

    pub fn warning(message: String, location: String) -> Self {
        Self {
            severity: Severity::Warning,
            message,
            location,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.location, self.severity, self.message)
    }
}

/// Error reporter for collecting and displaying diagnostics
pub struct ErrorReporter {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    warning_count: usize,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
            error_count: 0,
            warning_count: 0,
        }
    }

    /// Report an error diagnostic
    pub fn error(&mut self, message: String, location: String) {
        self.diagnostics.push(Diagnostic::error(message, location));
        self.error_count += 1;
    }

    /// Report a warning diagnostic
    pub fn warning(&mut self, message: String, location: String) {
        self.diagnostics.push(Diagnostic::warning(message, location));
        self.warning_count += 1;
    }

    /// Report an `HdlError`, using its path as location when it has one
    pub fn report(&mut self, err: &HdlError, fallback_location: &str) {
        match err {
            HdlError::DecodeError { path, message } => {
                self.error(message.clone(), path.clone());
            }
            other => self.error(other.to_string(), fallback_location.to_string()),
        }
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Print all diagnostics to stderr
    pub fn print_diagnostics(&self) {
        for diagnostic in &self.diagnostics {
            eprintln!("{}", diagnostic);
        }
    }

    /// Create a summary string
    pub fn summary(&self) -> String {
        match (self.error_count, self.warning_count) {
            (0, 0) => "No errors or warnings".to_string(),
            (0, w) => format!("{} warning{}", w, if w == 1 { "" } else { "s" }),
            (e, 0) => format!("{} error{}", e, if e == 1 { "" } else { "s" }),
            (e, w) => format!(
                "{} error{} and {} warning{}",
                e,
                if e == 1 { "" } else { "s" },
                w,
                if w == 1 { "" } else { "s" }
            ),
        }
    }
}

impl Default for ErrorReporter {
    fn default() -> Self {
        Self::new()
    }
}
