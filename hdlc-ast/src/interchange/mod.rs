//! Interchange tree conversion
//! 
//! The interchange tree is a `serde_json::Value`. `TreeSerializer` builds it
//! and `TreeDecoder` reads it back; the AST types also implement serde's
//! `Serialize` and `Deserialize` through them, so they can go straight to and
//! from JSON text.

pub mod config;
pub mod errors;
pub mod serializer;
pub mod decoder;

pub use config::{AssignmentTag, SerializerConfig};
pub use decoder::{TreeDecoder, UnknownField};
pub use errors::{DecodeError, DecodeErrorKind, SerializationError};
pub use serializer::TreeSerializer;

use crate::ast::{Expr, Function, Statement, Variable};
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

macro_rules! interchange_impls {
    ($ty:ty, $serialize:ident, $decode:ident) => {
        impl $ty {
            /// Serialize with the default `SerializerConfig`.
            pub fn to_interchange_tree(&self) -> Result<Value, SerializationError> {
                TreeSerializer::default().$serialize(self)
            }

            pub fn from_interchange_tree(value: &Value) -> Result<Self, DecodeError> {
                TreeDecoder::$decode(value)
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                self.to_interchange_tree()
                    .map_err(<S::Error as ser::Error>::custom)?
                    .serialize(serializer)
            }
        }

        /// Goes through an intermediate `Value`. When reading JSON text,
        /// `serde_json` stops at 128 levels of nesting (each statement level
        /// costs two: the object and its block array). Deeper trees can be
        /// read with `serde_json::Deserializer::disable_recursion_limit` or
        /// parsed into a `Value` and handed to `TreeDecoder`, which has no
        /// depth limit of its own.
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = Value::deserialize(deserializer)?;
                TreeDecoder::$decode(&value).map_err(de::Error::custom)
            }
        }
    };
}

interchange_impls!(Statement, statement, statement);
interchange_impls!(Expr, expr, expr);
interchange_impls!(Variable, variable, variable);
interchange_impls!(Function, function, function);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::BinaryOp;

    #[test]
    fn test_json_text_round_trip() {
        let stmt = Statement::while_loop(
            Expr::binary(BinaryOp::Neq, Expr::id("state"), Expr::id("DONE")),
            vec![Statement::assignment(
                Expr::id("state"),
                Expr::call(Expr::id("next"), vec![Expr::id("state")]),
            )],
        );

        let text = serde_json::to_string(&stmt).unwrap();
        assert!(text.starts_with(r#"{"type":"WHILE","cond":"#));

        let back: Statement = serde_json::from_str(&text).unwrap();
        assert_eq!(back, stmt);
    }

    #[test]
    fn test_serialize_error_surfaces_through_serde() {
        let stmt = Statement::return_value(Expr::Float(f64::NEG_INFINITY));
        let err = serde_json::to_string(&stmt).unwrap_err();
        assert!(err.to_string().contains("no finite interchange representation"));
    }

    #[test]
    fn test_deserialize_error_surfaces_through_serde() {
        let text = r#"{"type": "ASSIGMENT", "src": 1}"#;
        let err = serde_json::from_str::<Statement>(text).unwrap_err();
        assert!(err.to_string().contains("/src: expected object, found number"));

        let err = serde_json::from_str::<Vec<Statement>>(r#"[{"type": "WHILE"}]"#).unwrap_err();
        assert!(err.to_string().contains("invalid While statement"));
    }

    fn nested_loops(depth: usize) -> Statement {
        (0..depth).fold(Statement::return_void(), |inner, _| {
            Statement::while_loop(Expr::id("busy"), vec![inner])
        })
    }

    #[test]
    fn test_deep_nesting_hits_json_text_limit() {
        let stmt = nested_loops(200);
        let text = serde_json::to_string(&stmt).unwrap();

        let err = serde_json::from_str::<Statement>(&text).unwrap_err();
        assert!(err.to_string().contains("recursion limit exceeded"));

        let mut de = serde_json::Deserializer::from_str(&text);
        de.disable_recursion_limit();
        let value = Value::deserialize(&mut de).unwrap();
        assert_eq!(TreeDecoder::statement(&value).unwrap(), stmt);
    }

    #[test]
    fn test_deep_tree_decodes_from_value() {
        let stmt = nested_loops(200);
        let tree = stmt.to_interchange_tree().unwrap();
        assert_eq!(Statement::from_interchange_tree(&tree).unwrap(), stmt);
    }
}
