use serde_json::{json, Map, Value};

/// A JSON-LD node. Usually an object carrying `@type`.
pub type SchemaNode = Value;

/// An ordered `@graph`.
pub type SchemaGraph = Vec<SchemaNode>;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// `@type` as a string, or the first string of an `@type` array.
pub fn effective_type(node: &Value) -> Option<&str> {
    node.as_object().and_then(object_type)
}

pub(crate) fn object_type(map: &Map<String, Value>) -> Option<&str> {
    match map.get("@type")? {
        Value::String(t) => Some(t.as_str()),
        Value::Array(items) => items.first().and_then(Value::as_str),
        _ => None,
    }
}

/// Read a graph from a document: a bare array, an object with `@graph`, or
/// a single node.
pub fn graph_from_document(doc: &Value) -> SchemaGraph {
    match doc {
        Value::Array(items) => items.clone(),
        Value::Object(map) => match map.get("@graph") {
            Some(Value::Array(items)) => items.clone(),
            _ => vec![doc.clone()],
        },
        _ => Vec::new(),
    }
}

/// Wrap a graph as a serializable JSON-LD document.
pub fn to_document(graph: &[SchemaNode]) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@graph": graph,
    })
}
