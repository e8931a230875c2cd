use serde_json::{Map, Value};

use super::{Mapping, Node};

impl Node<Value> {
    /// Parses `input` as JSON and converts it into a Node, keeping the key order of every object.
    ///
    /// # Errors
    /// Returns the [`serde_json::Error`] if `input` isn't valid JSON.
    pub fn from_json_str(input: &str) -> Result<Node<Value>, serde_json::Error> {
        serde_json::from_str::<Value>(input).map(Node::from)
    }
}

/// Objects become [`Node::Mapping`]s and arrays become [`Node::Array`]s. Everything else (null,
/// booleans, numbers and strings) is kept as a [`Node::Scalar`].
impl From<Value> for Node<Value> {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Node::Array(items.into_iter().map(Node::from).collect()),
            Value::Object(object) => Node::Mapping(
                object
                    .into_iter()
                    .map(|(key, value)| (key, Node::from(value)))
                    .collect(),
            ),
            scalar => Node::Scalar(scalar),
        }
    }
}

impl From<Node<Value>> for Value {
    fn from(node: Node<Value>) -> Self {
        match node {
            Node::Scalar(value) => value,
            Node::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Node::Mapping(mapping) => Value::Object(Map::from(mapping)),
        }
    }
}

impl From<Mapping<Value>> for Map<String, Value> {
    fn from(mapping: Mapping<Value>) -> Self {
        mapping
            .into_iter()
            .map(|(key, value)| (key, Value::from(value)))
            .collect()
    }
}
