//! Function and variable declarations
//! 
//! Containers that own statement lists: a function body and the variables
//! declared as its parameters and locals.

use super::expressions::Expr;
use super::statements::Statement;

/// Variable, parameter or port declaration
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub ty: Expr,
    pub value: Option<Expr>, // Default or initial value
}

impl Variable {
    pub fn new(name: impl Into<String>, ty: Expr) -> Self {
        Self {
            name: name.into(),
            ty,
            value: None,
        }
    }

    pub fn with_value(mut self, value: Expr) -> Self {
        self.value = Some(value);
        self
    }
}

/// Function or procedure definition
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub is_operator: bool,
    pub return_type: Option<Expr>, // None for procedures
    pub params: Vec<Variable>,
    pub locals: Vec<Variable>,
    pub body: Vec<Statement>,
}

impl Function {
    pub fn new(name: impl Into<String>, return_type: Option<Expr>, params: Vec<Variable>) -> Self {
        Self {
            name: name.into(),
            is_operator: false,
            return_type,
            params,
            locals: Vec::new(),
            body: Vec::new(),
        }
    }
}
