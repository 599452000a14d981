//! Interchange tree decoder
//! 
//! Inverse of `TreeSerializer`. Statements are rebuilt through
//! `Statement::from_parts`, so a tree that lacks an operand its kind requires
//! fails with the same invariant error a producer would get.

use super::config::AssignmentTag;
use super::errors::{DecodeError, DecodeErrorKind};
use crate::ast::{Expr, Function, Statement, StatementKind, Variable};
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Tree decoder entry points
pub struct TreeDecoder;

impl TreeDecoder {
    /// Decode one statement. Objects carrying a `type` discriminator are
    /// control-flow statements; any other tree is an expression statement.
    pub fn statement(value: &Value) -> Result<Statement, DecodeError> {
        decode_statement(value, "")
    }

    /// Decode a statement list.
    pub fn statements(value: &Value) -> Result<Vec<Statement>, DecodeError> {
        decode_statements(value, "")
    }

    /// Decode every top-level statement on its own, so one bad element does
    /// not hide the others. An array yields one result per element with
    /// paths rooted at the element index; any other value yields one result.
    pub fn each_statement(value: &Value) -> Vec<Result<Statement, DecodeError>> {
        match value {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| decode_statement(item, &child("", &i.to_string())))
                .collect(),
            single => vec![decode_statement(single, "")],
        }
    }

    pub fn expr(value: &Value) -> Result<Expr, DecodeError> {
        decode_expr(value, "")
    }

    pub fn variable(value: &Value) -> Result<Variable, DecodeError> {
        decode_variable(value, "")
    }

    pub fn function(value: &Value) -> Result<Function, DecodeError> {
        decode_function(value, "")
    }

    /// Fields the decoder skips in a statement or statement list.
    ///
    /// Decoding ignores keys it does not know, so a misspelled `ifFalse`
    /// silently becomes an empty else branch. Parts of the tree that do not
    /// decode are not walked.
    pub fn unknown_fields(value: &Value) -> Vec<UnknownField> {
        let mut found = Vec::new();
        match value {
            Value::Array(_) => statement_list_fields(value, "", &mut found),
            single => statement_fields(single, "", &mut found),
        }
        found
    }

    /// Fields the decoder skips in a function tree.
    pub fn unknown_function_fields(value: &Value) -> Vec<UnknownField> {
        let mut found = Vec::new();
        function_fields(value, "", &mut found);
        found
    }
}

/// A key the decoder ignored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField {
    /// JSON path of the ignored key itself
    pub path: String,
    pub field: String,
}

fn decode_statement(value: &Value, path: &str) -> Result<Statement, DecodeError> {
    let obj = match value.as_object() {
        Some(obj) if obj.contains_key("type") => obj,
        _ => {
            debug!("{}: no statement type, decoding as expression statement", location(path));
            return Ok(Statement::expression(decode_expr(value, path)?));
        }
    };

    let tag_path = child(path, "type");
    let tag = expect_str(required(obj, "type", path)?, &tag_path)?;

    let (kind, primary, secondary, nested_blocks) = match tag {
        "IF" => {
            let cond = optional(obj, "cond", path, decode_expr)?;
            let then_branch = optional(obj, "ifTrue", path, decode_statements)?;
            let else_branch = optional(obj, "ifFalse", path, decode_statements)?;
            let blocks = match (then_branch, else_branch) {
                (Some(then_branch), Some(else_branch)) => vec![then_branch, else_branch],
                (Some(then_branch), None) => vec![then_branch],
                (None, _) => {
                    return Err(DecodeError::new(
                        path,
                        DecodeErrorKind::MissingField { field: "ifTrue" },
                    ))
                }
            };
            (StatementKind::If, cond, None, blocks)
        }
        "RETURN" => (
            StatementKind::Return,
            optional(obj, "val", path, decode_expr)?,
            None,
            Vec::new(),
        ),
        AssignmentTag::LEGACY | AssignmentTag::CORRECTED => (
            StatementKind::Assignment,
            optional(obj, "dst", path, decode_expr)?,
            optional(obj, "src", path, decode_expr)?,
            Vec::new(),
        ),
        "WHILE" => {
            let cond = optional(obj, "cond", path, decode_expr)?;
            let body = optional(obj, "body", path, decode_statements)?;
            (StatementKind::While, cond, None, body.into_iter().collect::<Vec<_>>())
        }
        other => {
            return Err(DecodeError::new(
                &tag_path,
                DecodeErrorKind::UnknownStatementType {
                    tag: other.to_string(),
                },
            ))
        }
    };

    Statement::from_parts(kind, primary, secondary, nested_blocks)
        .map_err(|err| DecodeError::new(path, err.into()))
}

fn decode_statements(value: &Value, path: &str) -> Result<Vec<Statement>, DecodeError> {
    let items = expect_array(value, path)?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| decode_statement(item, &child(path, &i.to_string())))
        .collect()
}

fn decode_expr(value: &Value, path: &str) -> Result<Expr, DecodeError> {
    let obj = expect_object(value, path)?;
    let mut entries = obj.iter();
    let (key, body) = match (entries.next(), entries.next()) {
        (Some(entry), None) => entry,
        _ => return Err(unknown_expression(obj, path)),
    };
    let inner = child(path, key);
    let operand = |obj: &Map<String, Value>, field: &'static str| {
        decode_expr(required(obj, field, &inner)?, &child(&inner, field)).map(Box::new)
    };

    match key.as_str() {
        "literal" => decode_literal(body, &inner),
        "unOperator" => {
            let obj = expect_object(body, &inner)?;
            Ok(Expr::Unary {
                op: decode_operator(obj, &inner)?,
                operand: operand(obj, "op0")?,
            })
        }
        "binOperator" => {
            let obj = expect_object(body, &inner)?;
            Ok(Expr::Binary {
                op: decode_operator(obj, &inner)?,
                lhs: operand(obj, "op0")?,
                rhs: operand(obj, "op1")?,
            })
        }
        "call" => {
            let obj = expect_object(body, &inner)?;
            let callee = decode_expr(required(obj, "fn", &inner)?, &child(&inner, "fn"))?;
            let args_path = child(&inner, "args");
            let args = expect_array(required(obj, "args", &inner)?, &args_path)?
                .iter()
                .enumerate()
                .map(|(i, arg)| decode_expr(arg, &child(&args_path, &i.to_string())))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Expr::Call {
                callee: Box::new(callee),
                args,
            })
        }
        _ => Err(unknown_expression(obj, path)),
    }
}

fn decode_literal(value: &Value, path: &str) -> Result<Expr, DecodeError> {
    let obj = expect_object(value, path)?;
    let tag_path = child(path, "type");
    let tag = expect_str(required(obj, "type", path)?, &tag_path)?;
    let value_path = child(path, "value");
    let value = required(obj, "value", path)?;

    match tag {
        "ID" => Ok(Expr::Id(expect_str(value, &value_path)?.to_string())),
        "STRING" => Ok(Expr::Str(expect_str(value, &value_path)?.to_string())),
        "INT" => value
            .as_i64()
            .map(Expr::Int)
            .ok_or_else(|| unexpected("integer", value, &value_path)),
        "FLOAT" => value
            .as_f64()
            .map(Expr::Float)
            .ok_or_else(|| unexpected("number", value, &value_path)),
        other => Err(DecodeError::new(
            &tag_path,
            DecodeErrorKind::UnknownLiteralType {
                tag: other.to_string(),
            },
        )),
    }
}

fn decode_operator<T: DeserializeOwned>(
    obj: &Map<String, Value>,
    path: &str,
) -> Result<T, DecodeError> {
    let value = required(obj, "operator", path)?;
    serde_json::from_value(value.clone()).map_err(|_| {
        DecodeError::new(
            &child(path, "operator"),
            DecodeErrorKind::UnknownOperator {
                name: value.to_string(),
            },
        )
    })
}

fn decode_variable(value: &Value, path: &str) -> Result<Variable, DecodeError> {
    let obj = expect_object(value, path)?;
    Ok(Variable {
        name: expect_str(required(obj, "name", path)?, &child(path, "name"))?.to_string(),
        ty: decode_expr(required(obj, "type", path)?, &child(path, "type"))?,
        value: optional(obj, "value", path, decode_expr)?,
    })
}

fn decode_variables(value: &Value, path: &str) -> Result<Vec<Variable>, DecodeError> {
    let items = expect_array(value, path)?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| decode_variable(item, &child(path, &i.to_string())))
        .collect()
}

fn decode_function(value: &Value, path: &str) -> Result<Function, DecodeError> {
    let obj = expect_object(value, path)?;
    let is_operator_path = child(path, "isOperator");
    let is_operator = match obj.get("isOperator") {
        None | Some(Value::Null) => false,
        Some(flag) => flag
            .as_bool()
            .ok_or_else(|| unexpected("boolean", flag, &is_operator_path))?,
    };

    Ok(Function {
        name: expect_str(required(obj, "name", path)?, &child(path, "name"))?.to_string(),
        is_operator,
        return_type: optional(obj, "returnT", path, decode_expr)?,
        params: optional(obj, "params", path, decode_variables)?.unwrap_or_default(),
        locals: optional(obj, "locals", path, decode_variables)?.unwrap_or_default(),
        body: optional(obj, "body", path, decode_statements)?.unwrap_or_default(),
    })
}

// Unknown-field walk. Mirrors the decode functions above but only looks at
// object keys.

fn unknown_keys(
    obj: &Map<String, Value>,
    known: &[&str],
    path: &str,
    found: &mut Vec<UnknownField>,
) {
    for key in obj.keys().filter(|key| !known.contains(&key.as_str())) {
        debug!("{}: ignoring unknown field `{}`", location(path), key);
        found.push(UnknownField {
            path: child(path, key),
            field: key.clone(),
        });
    }
}

fn statement_fields(value: &Value, path: &str, found: &mut Vec<UnknownField>) {
    let obj = match value.as_object() {
        Some(obj) if obj.contains_key("type") => obj,
        _ => return expr_fields(value, path, found),
    };

    let (known, exprs, lists): (&[&str], &[&str], &[&str]) =
        match obj.get("type").and_then(Value::as_str) {
            Some("IF") => (
                &["type", "cond", "ifTrue", "ifFalse"],
                &["cond"],
                &["ifTrue", "ifFalse"],
            ),
            Some("RETURN") => (&["type", "val"], &["val"], &[]),
            Some(AssignmentTag::LEGACY | AssignmentTag::CORRECTED) => {
                (&["type", "dst", "src"], &["dst", "src"], &[])
            }
            Some("WHILE") => (&["type", "cond", "body"], &["cond"], &["body"]),
            _ => return,
        };

    unknown_keys(obj, known, path, found);
    for field in exprs {
        if let Some(value) = obj.get(*field) {
            expr_fields(value, &child(path, field), found);
        }
    }
    for field in lists {
        if let Some(value) = obj.get(*field) {
            statement_list_fields(value, &child(path, field), found);
        }
    }
}

fn statement_list_fields(value: &Value, path: &str, found: &mut Vec<UnknownField>) {
    if let Some(items) = value.as_array() {
        for (i, item) in items.iter().enumerate() {
            statement_fields(item, &child(path, &i.to_string()), found);
        }
    }
}

fn expr_fields(value: &Value, path: &str, found: &mut Vec<UnknownField>) {
    let Some((key, body)) = value.as_object().and_then(|obj| obj.iter().next()) else {
        return;
    };
    let inner = child(path, key);
    let Some(obj) = body.as_object() else {
        return;
    };

    let (known, operands): (&[&str], &[&str]) = match key.as_str() {
        "literal" => (&["type", "value"], &[]),
        "unOperator" => (&["operator", "op0"], &["op0"]),
        "binOperator" => (&["operator", "op0", "op1"], &["op0", "op1"]),
        "call" => (&["fn", "args"], &["fn"]),
        _ => return,
    };

    unknown_keys(obj, known, &inner, found);
    for field in operands {
        if let Some(value) = obj.get(*field) {
            expr_fields(value, &child(&inner, field), found);
        }
    }
    if let Some(args) = obj.get("args").and_then(Value::as_array) {
        let args_path = child(&inner, "args");
        for (i, arg) in args.iter().enumerate() {
            expr_fields(arg, &child(&args_path, &i.to_string()), found);
        }
    }
}

fn variable_fields(value: &Value, path: &str, found: &mut Vec<UnknownField>) {
    let Some(obj) = value.as_object() else {
        return;
    };
    unknown_keys(obj, &["name", "type", "value"], path, found);
    for field in ["type", "value"] {
        if let Some(value) = obj.get(field) {
            expr_fields(value, &child(path, field), found);
        }
    }
}

fn function_fields(value: &Value, path: &str, found: &mut Vec<UnknownField>) {
    let Some(obj) = value.as_object() else {
        return;
    };
    let known = ["name", "isOperator", "returnT", "params", "locals", "body"];
    unknown_keys(obj, &known, path, found);

    if let Some(return_type) = obj.get("returnT") {
        expr_fields(return_type, &child(path, "returnT"), found);
    }
    for field in ["params", "locals"] {
        if let Some(vars) = obj.get(field).and_then(Value::as_array) {
            let vars_path = child(path, field);
            for (i, var) in vars.iter().enumerate() {
                variable_fields(var, &child(&vars_path, &i.to_string()), found);
            }
        }
    }
    if let Some(body) = obj.get("body") {
        statement_list_fields(body, &child(path, "body"), found);
    }
}

// Helpers

fn child(path: &str, segment: &str) -> String {
    format!("{}/{}", path, segment)
}

fn location(path: &str) -> &str {
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn unexpected(expected: &'static str, found: &Value, path: &str) -> DecodeError {
    DecodeError::new(
        path,
        DecodeErrorKind::UnexpectedType {
            expected,
            found: json_type(found),
        },
    )
}

fn unknown_expression(obj: &Map<String, Value>, path: &str) -> DecodeError {
    let keys = obj.keys().map(String::as_str).collect::<Vec<_>>().join(", ");
    DecodeError::new(path, DecodeErrorKind::UnknownExpression { keys })
}

fn expect_object<'v>(value: &'v Value, path: &str) -> Result<&'v Map<String, Value>, DecodeError> {
    value.as_object().ok_or_else(|| unexpected("object", value, path))
}

fn expect_array<'v>(value: &'v Value, path: &str) -> Result<&'v Vec<Value>, DecodeError> {
    value.as_array().ok_or_else(|| unexpected("array", value, path))
}

fn expect_str<'v>(value: &'v Value, path: &str) -> Result<&'v str, DecodeError> {
    value.as_str().ok_or_else(|| unexpected("string", value, path))
}

fn required<'v>(
    obj: &'v Map<String, Value>,
    field: &'static str,
    path: &str,
) -> Result<&'v Value, DecodeError> {
    obj.get(field)
        .ok_or_else(|| DecodeError::new(path, DecodeErrorKind::MissingField { field }))
}

/// Decode a field that may be absent or `null`.
fn optional<T>(
    obj: &Map<String, Value>,
    field: &str,
    path: &str,
    decode: fn(&Value, &str) -> Result<T, DecodeError>,
) -> Result<Option<T>, DecodeError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => decode(value, &child(path, field)).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOp, Invariant, UnaryOp};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn id(name: &str) -> Value {
        json!({"literal": {"type": "ID", "value": name}})
    }

    fn int(n: i64) -> Value {
        json!({"literal": {"type": "INT", "value": n}})
    }

    #[test]
    fn test_decode_expressions() {
        let tree = json!({"call": {
            "fn": id("f"),
            "args": [
                {"unOperator": {"operator": "RISING_EDGE", "op0": id("clk")}},
                {"binOperator": {"operator": "SUB", "op0": id("n"), "op1": int(1)}},
                {"literal": {"type": "FLOAT", "value": 2.5}},
                {"literal": {"type": "STRING", "value": "abc"}}
            ]
        }});

        assert_eq!(
            TreeDecoder::expr(&tree).unwrap(),
            Expr::call(
                Expr::id("f"),
                vec![
                    Expr::unary(UnaryOp::RisingEdge, Expr::id("clk")),
                    Expr::binary(BinaryOp::Sub, Expr::id("n"), Expr::Int(1)),
                    Expr::Float(2.5),
                    Expr::Str("abc".to_string()),
                ]
            )
        );
    }

    #[test]
    fn test_untyped_object_is_expression_statement() {
        let stmt = TreeDecoder::statement(&id("x")).unwrap();
        assert_eq!(stmt, Statement::expression(Expr::id("x")));
    }

    #[test]
    fn test_both_assignment_spellings() {
        for tag in ["ASSIGMENT", "ASSIGNMENT"] {
            let tree = json!({"type": tag, "dst": id("a"), "src": id("b")});
            assert_eq!(
                TreeDecoder::statement(&tree).unwrap(),
                Statement::assignment(Expr::id("a"), Expr::id("b"))
            );
        }
    }

    #[test]
    fn test_missing_else_and_null_val() {
        let tree = json!({
            "type": "IF",
            "cond": id("c"),
            "ifTrue": [{"type": "RETURN", "val": null}]
        });
        assert_eq!(
            TreeDecoder::statement(&tree).unwrap(),
            Statement::if_then(Expr::id("c"), vec![Statement::return_void()])
        );

        let tree = json!({"type": "RETURN"});
        assert_eq!(TreeDecoder::statement(&tree).unwrap(), Statement::return_void());
    }

    #[test]
    fn test_if_without_then_branch_names_the_field() {
        let tree = json!({"type": "IF", "cond": id("c"), "ifFalse": [{"type": "RETURN"}]});
        let err = TreeDecoder::statement(&tree).unwrap_err();
        assert_eq!(err.path, "");
        assert_eq!(err.kind, DecodeErrorKind::MissingField { field: "ifTrue" });
        assert_eq!(err.to_string(), "/: missing field `ifTrue`");

        let tree = json!([{"type": "IF", "cond": id("c"), "ifTrue": null}]);
        let err = TreeDecoder::statements(&tree).unwrap_err();
        assert_eq!(err.to_string(), "/0: missing field `ifTrue`");
    }

    #[test]
    fn test_missing_source_is_invariant_violation() {
        let tree = json!([{"type": "ASSIGMENT", "dst": id("a")}]);
        let err = TreeDecoder::statements(&tree).unwrap_err();

        assert_eq!(err.path, "/0");
        match err.kind {
            DecodeErrorKind::Invariant(violation) => {
                assert_eq!(violation.kind, StatementKind::Assignment);
                assert_eq!(violation.invariant, Invariant::MissingOperand { role: "src" });
            }
            other => panic!("Expected invariant violation, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_while_body() {
        let tree = json!({"type": "WHILE", "cond": id("c")});
        let err = TreeDecoder::statement(&tree).unwrap_err();
        assert_eq!(
            err.kind,
            DecodeErrorKind::Invariant(crate::ast::InvariantViolation::new(
                StatementKind::While,
                Invariant::NestedBlockCount { expected: "exactly 1", found: 0 }
            ))
        );
    }

    #[test]
    fn test_error_paths() {
        let tree = json!({"type": "WHILE", "cond": id("c"), "body": [
            {"type": "IF", "cond": id("d"), "ifTrue": [{"type": "LOOP"}]}
        ]});
        let err = TreeDecoder::statement(&tree).unwrap_err();
        assert_eq!(err.path, "/body/0/ifTrue/0/type");
        assert_eq!(
            err.to_string(),
            "/body/0/ifTrue/0/type: unknown statement type `LOOP`"
        );

        let sum = json!({"binOperator": {"operator": "PLUS", "op0": id("a"), "op1": id("b")}});
        let tree = json!({"type": "RETURN", "val": sum});
        let err = TreeDecoder::statement(&tree).unwrap_err();
        assert_eq!(err.path, "/val/binOperator/operator");
        assert_eq!(err.kind, DecodeErrorKind::UnknownOperator { name: "\"PLUS\"".to_string() });

        let err = TreeDecoder::statement(&json!(3)).unwrap_err();
        assert_eq!(err.to_string(), "/: expected object, found number");
    }

    #[test]
    fn test_unknown_expression_shape() {
        let err = TreeDecoder::expr(&json!({"ternary": {}})).unwrap_err();
        assert_eq!(err.path, "");
        assert_eq!(
            err.kind,
            DecodeErrorKind::UnknownExpression { keys: "ternary".to_string() }
        );

        let err = TreeDecoder::expr(&json!({"literal": {}, "call": {}})).unwrap_err();
        assert_eq!(
            err.kind,
            DecodeErrorKind::UnknownExpression { keys: "literal, call".to_string() }
        );
    }

    #[test]
    fn test_literal_errors() {
        let tree = json!({"literal": {"type": "INT", "value": "7"}});
        let err = TreeDecoder::expr(&tree).unwrap_err();
        assert_eq!(err.path, "/literal/value");
        assert_eq!(
            err.kind,
            DecodeErrorKind::UnexpectedType { expected: "integer", found: "string" }
        );

        let tree = json!({"literal": {"type": "HEX", "value": "ff"}});
        let err = TreeDecoder::expr(&tree).unwrap_err();
        assert_eq!(err.path, "/literal/type");
        assert_eq!(err.kind, DecodeErrorKind::UnknownLiteralType { tag: "HEX".to_string() });

        let err = TreeDecoder::expr(&json!({"literal": {"type": "ID"}})).unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::MissingField { field: "value" });
    }

    #[test]
    fn test_decode_function_defaults() {
        let tree = json!({"name": "reset_all", "returnT": null});
        let func = TreeDecoder::function(&tree).unwrap();
        assert_eq!(func, Function::new("reset_all", None, Vec::new()));
    }

    #[test]
    fn test_each_statement_reports_every_element() {
        let tree = json!([
            {"type": "RETURN"},
            {"type": "WHILE", "cond": id("c"), "body": [{"type": "ASSIGMENT", "dst": id("a")}]},
            id("x"),
            {"type": "GOTO"}
        ]);

        let results = TreeDecoder::each_statement(&tree);
        assert_eq!(results.len(), 4);
        assert_eq!(results[0], Ok(Statement::return_void()));
        assert_eq!(results[1].as_ref().unwrap_err().path, "/1/body/0");
        assert_eq!(results[2], Ok(Statement::expression(Expr::id("x"))));
        assert_eq!(
            results[3].as_ref().unwrap_err().to_string(),
            "/3/type: unknown statement type `GOTO`"
        );

        let results = TreeDecoder::each_statement(&json!({"type": "RETURN", "val": 3}));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].as_ref().unwrap_err().path, "/val");
    }

    #[test]
    fn test_unknown_fields() {
        let tree = json!([
            {"type": "IF", "cond": id("c"), "ifTrue": [], "ifFasle": [{"type": "RETURN"}]},
            {"type": "WHILE", "cond": id("c"), "body": [
                {"type": "RETURN", "val": {"call": {"fn": id("f"), "args": [], "kwargs": []}}}
            ]},
            {"literal": {"type": "INT", "value": 1, "width": 8}}
        ]);

        let fields = TreeDecoder::unknown_fields(&tree);
        let paths: Vec<&str> = fields.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["/0/ifFasle", "/1/body/0/val/call/kwargs", "/2/literal/width"]
        );
        assert_eq!(fields[0].field, "ifFasle");

        // The tree still decodes; the misspelled else branch is dropped.
        let stmts = TreeDecoder::statements(&tree).unwrap();
        assert_eq!(stmts[0].else_branch(), Some(&[][..]));
    }

    #[test]
    fn test_unknown_function_fields() {
        let tree = json!({
            "name": "tick",
            "isOperator": false,
            "returnT": null,
            "params": [{"name": "n", "type": id("integer"), "value": null, "dir": "in"}],
            "locals": [],
            "body": [{"type": "RETURN", "val": null, "label": "done"}],
            "pure": true
        });

        let fields = TreeDecoder::unknown_function_fields(&tree);
        assert_eq!(
            fields,
            vec![
                UnknownField { path: "/pure".to_string(), field: "pure".to_string() },
                UnknownField { path: "/params/0/dir".to_string(), field: "dir".to_string() },
                UnknownField { path: "/body/0/label".to_string(), field: "label".to_string() },
            ]
        );
        assert!(TreeDecoder::unknown_fields(&json!([{"type": "RETURN"}])).is_empty());
    }
}
