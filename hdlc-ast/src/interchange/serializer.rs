//! Interchange tree serializer
//! 
//! Converts statements, expressions and declarations into `serde_json::Value`
//! trees. Objects keep insertion order: the `type` discriminator first, then
//! the operands.

use super::config::SerializerConfig;
use super::errors::SerializationError;
use crate::ast::{Expr, Function, Statement, StatementKind, StatementRef, Variable};
use log::trace;
use serde_json::{Map, Number, Value};

/// Recursive tree serializer
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeSerializer {
    config: SerializerConfig,
}

impl TreeSerializer {
    pub fn new(config: SerializerConfig) -> Self {
        Self { config }
    }

    /// Discriminator written under `type` for a statement kind.
    ///
    /// Expression statements carry no discriminator of their own.
    pub fn type_tag(&self, kind: StatementKind) -> Option<&'static str> {
        match kind {
            StatementKind::ExpressionStatement => None,
            StatementKind::If => Some("IF"),
            StatementKind::Return => Some("RETURN"),
            StatementKind::Assignment => Some(self.config.assignment_tag.as_str()),
            StatementKind::While => Some("WHILE"),
        }
    }

    pub fn statement(&self, stmt: &Statement) -> Result<Value, SerializationError> {
        let kind = stmt.kind();
        trace!("serializing {} statement", kind);

        let mut obj = Map::new();
        if let Some(tag) = self.type_tag(kind) {
            insert(&mut obj, "type", Value::from(tag))?;
        }

        match stmt.view() {
            // Transparent: the tree of an expression statement is the tree
            // of its expression.
            StatementRef::Expression(expr) => return self.expr(expr),
            StatementRef::If {
                condition,
                then_branch,
                else_branch,
            } => {
                insert(&mut obj, "cond", self.expr(condition)?)?;
                insert(&mut obj, "ifTrue", self.statements(then_branch)?)?;
                insert(&mut obj, "ifFalse", self.statements(else_branch)?)?;
            }
            StatementRef::Return(value) => {
                let val = match value {
                    Some(expr) => self.expr(expr)?,
                    None => Value::Null,
                };
                insert(&mut obj, "val", val)?;
            }
            StatementRef::Assignment { dst, src } => {
                insert(&mut obj, "dst", self.expr(dst)?)?;
                insert(&mut obj, "src", self.expr(src)?)?;
            }
            StatementRef::While { condition, body } => {
                insert(&mut obj, "cond", self.expr(condition)?)?;
                insert(&mut obj, "body", self.statements(body)?)?;
            }
        }

        Ok(Value::Object(obj))
    }

    /// Serialize a statement list, preserving order.
    pub fn statements(&self, stmts: &[Statement]) -> Result<Value, SerializationError> {
        stmts
            .iter()
            .map(|stmt| self.statement(stmt))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }

    pub fn expr(&self, expr: &Expr) -> Result<Value, SerializationError> {
        let (key, body) = match expr {
            Expr::Id(name) => ("literal", literal("ID", Value::from(name.as_str()))?),
            Expr::Int(value) => ("literal", literal("INT", Value::from(*value))?),
            Expr::Float(value) => {
                let number = Number::from_f64(*value)
                    .ok_or(SerializationError::NonFiniteLiteral { value: *value })?;
                ("literal", literal("FLOAT", Value::Number(number))?)
            }
            Expr::Str(value) => ("literal", literal("STRING", Value::from(value.as_str()))?),
            Expr::Unary { op, operand } => {
                let mut obj = Map::new();
                insert(&mut obj, "operator", serde_json::to_value(op)?)?;
                insert(&mut obj, "op0", self.expr(operand)?)?;
                ("unOperator", Value::Object(obj))
            }
            Expr::Binary { op, lhs, rhs } => {
                let mut obj = Map::new();
                insert(&mut obj, "operator", serde_json::to_value(op)?)?;
                insert(&mut obj, "op0", self.expr(lhs)?)?;
                insert(&mut obj, "op1", self.expr(rhs)?)?;
                ("binOperator", Value::Object(obj))
            }
            Expr::Call { callee, args } => {
                let args = args
                    .iter()
                    .map(|arg| self.expr(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                let mut obj = Map::new();
                insert(&mut obj, "fn", self.expr(callee)?)?;
                insert(&mut obj, "args", Value::Array(args))?;
                ("call", Value::Object(obj))
            }
        };

        let mut obj = Map::new();
        insert(&mut obj, key, body)?;
        Ok(Value::Object(obj))
    }

    pub fn variable(&self, var: &Variable) -> Result<Value, SerializationError> {
        let mut obj = Map::new();
        insert(&mut obj, "name", Value::from(var.name.as_str()))?;
        insert(&mut obj, "type", self.expr(&var.ty)?)?;
        insert(&mut obj, "value", self.optional_expr(var.value.as_ref())?)?;
        Ok(Value::Object(obj))
    }

    pub fn function(&self, func: &Function) -> Result<Value, SerializationError> {
        trace!("serializing function {}", func.name);

        let mut obj = Map::new();
        insert(&mut obj, "name", Value::from(func.name.as_str()))?;
        insert(&mut obj, "isOperator", Value::Bool(func.is_operator))?;
        insert(&mut obj, "returnT", self.optional_expr(func.return_type.as_ref())?)?;
        insert(&mut obj, "params", self.variables(&func.params)?)?;
        insert(&mut obj, "locals", self.variables(&func.locals)?)?;
        insert(&mut obj, "body", self.statements(&func.body)?)?;
        Ok(Value::Object(obj))
    }

    fn variables(&self, vars: &[Variable]) -> Result<Value, SerializationError> {
        vars.iter()
            .map(|var| self.variable(var))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }

    fn optional_expr(&self, expr: Option<&Expr>) -> Result<Value, SerializationError> {
        match expr {
            Some(expr) => self.expr(expr),
            None => Ok(Value::Null),
        }
    }
}

fn literal(tag: &str, value: Value) -> Result<Value, SerializationError> {
    let mut obj = Map::new();
    insert(&mut obj, "type", Value::from(tag))?;
    insert(&mut obj, "value", value)?;
    Ok(Value::Object(obj))
}

fn insert(obj: &mut Map<String, Value>, key: &str, value: Value) -> Result<(), SerializationError> {
    if obj.contains_key(key) {
        return Err(SerializationError::DuplicateKey {
            key: key.to_string(),
        });
    }
    obj.insert(key.to_string(), value);
    Ok(())
}
