//! HDL Convertor - Common Error Types and Diagnostics
//! 
//! This crate contains the workspace-wide error type and the diagnostic
//! reporting used by the AST crate and the driver.

pub mod error;

pub use error::{Diagnostic, ErrorReporter, HdlError, Severity};
