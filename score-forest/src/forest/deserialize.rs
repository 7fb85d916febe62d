//! Decoding of the `{ "trees": [...] }` model artifact.
//!
//! Node shapes are resolved here, once. After decoding, a node is either a
//! [`Leaf`] or a [`Split`] and nothing downstream inspects JSON again.
//!
//! Decoding is lenient in the same places evaluation is lenient:
//!
//! * an object whose `value` is a number is a leaf;
//! * any other object is a split;
//! * `featureIndex` may be a non-negative integer, an integral float (`1.0`)
//!   or a canonical integer string (`"1"`). Anything else addresses no
//!   feature and the split routes right;
//! * `threshold` is read as a number the loose way: `null` and `false` are
//!   `0`, `true` is `1`, numeric strings are parsed. A missing threshold, or
//!   one that is not numeric, never compares true and the split routes right;
//! * `null` and non-object values become missing nodes, which evaluate to
//!   `0.0`;
//! * a missing or non-array `trees` field decodes as an empty forest.
//!
//! Nesting depth is not limited by the decoder. Trees are rebuilt without
//! recursion; only the JSON parser itself uses the call stack.

use std::io;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::Error;

use super::{Forest, Leaf, Split, Tree, TreeNode};

impl Forest {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Self::parse(serde_json::Deserializer::from_str(json))
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        Self::parse(serde_json::Deserializer::from_slice(bytes))
    }

    pub fn from_reader<R: io::Read>(rdr: R) -> Result<Self, Error> {
        Self::parse(serde_json::Deserializer::from_reader(rdr))
    }

    /// Build a forest from an already parsed artifact.
    pub fn from_value(value: &Value) -> Self {
        let trees: Vec<Tree> = value
            .get("trees")
            .and_then(Value::as_array)
            .map(|trees| trees.iter().map(|t| Tree::new(decode_node(t))).collect())
            .unwrap_or_default();

        Forest::new(trees)
    }

    fn parse<'de, R>(mut de: serde_json::Deserializer<R>) -> Result<Self, Error>
    where
        R: serde_json::de::Read<'de>,
    {
        de.disable_recursion_limit();
        let value = Value::deserialize(&mut de)?;
        de.end()?;
        Ok(Self::from_value(&value))
    }
}

enum Step<'a> {
    /// Decode this child slot and push the result.
    Visit(Option<&'a Value>),
    /// Both children of this split are on the output stack.
    Assemble(&'a Map<String, Value>),
}

fn decode_node(root: &Value) -> Option<TreeNode> {
    let mut steps = vec![Step::Visit(Some(root))];
    let mut done: Vec<Option<TreeNode>> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(value) => {
                let Some(object) = value.and_then(Value::as_object) else {
                    done.push(None);
                    continue;
                };

                if let Some(value) = object.get("value").and_then(Value::as_f64) {
                    done.push(Some(TreeNode::Leaf(Leaf { value })));
                    continue;
                }

                // left is visited first, so it sits below right on `done`
                steps.push(Step::Assemble(object));
                steps.push(Step::Visit(object.get("right")));
                steps.push(Step::Visit(object.get("left")));
            }
            Step::Assemble(object) => {
                let right = done.pop().flatten();
                let left = done.pop().flatten();
                done.push(Some(TreeNode::Split(Split {
                    feature_index: object.get("featureIndex").and_then(as_index),
                    threshold: object.get("threshold").map_or(f64::NAN, as_number),
                    left: left.map(Box::new),
                    right: right.map(Box::new),
                })));
            }
        }
    }

    done.pop().flatten()
}

/// Accept `3`, `3.0` and `"3"`. Negative, fractional or non-canonical
/// indices (`"03"`, `"3.0"`) address no feature.
fn as_index(value: &Value) -> Option<usize> {
    match value {
        Value::Number(n) => {
            if let Some(idx) = n.as_u64() {
                return usize::try_from(idx).ok();
            }
            let idx = n.as_f64()?;
            (idx >= 0.0 && idx.fract() == 0.0 && idx <= usize::MAX as f64)
                .then_some(idx as usize)
        }
        Value::String(s) => s
            .parse::<usize>()
            .ok()
            .filter(|idx| idx.to_string() == *s),
        _ => None,
    }
}

/// Loose numeric reading of a threshold. `NaN` stands for "not a number",
/// which no feature compares less than or equal to.
fn as_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse().unwrap_or(f64::NAN)
            }
        }
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}
