//! A closed-kind view over parsed JSON trees.
//!
//! The converter walks any tree implementing [`JsonNode`]. Each node reports
//! itself as one [`NodeView`]; kinds outside the JSON data model surface as
//! [`NodeView::Unsupported`] and are skipped by the converter instead of
//! aborting the conversion.

use serde_json::Value;

/// One node of a JSON tree, seen through its kind.
#[derive(Debug)]
pub enum NodeView<'a, N> {
    /// Members in the order the parser yields them.
    Object(Vec<(&'a str, &'a N)>),
    Array(&'a [N]),
    String(&'a str),
    /// Textual form of the number as the parser produced it.
    Number(String),
    Boolean(bool),
    Null,
    /// A value the XML scheme has no element for; carries a kind name for
    /// diagnostics.
    Unsupported(String),
}

impl<N> NodeView<'_, N> {
    /// Short kind name used in log messages and errors.
    pub fn kind_name(&self) -> &str {
        match self {
            NodeView::Object(_) => "object",
            NodeView::Array(_) => "array",
            NodeView::String(_) => "string",
            NodeView::Number(_) => "number",
            NodeView::Boolean(_) => "boolean",
            NodeView::Null => "null",
            NodeView::Unsupported(kind) => kind,
        }
    }
}

pub trait JsonNode: Sized {
    fn view(&self) -> NodeView<'_, Self>;
}

impl JsonNode for Value {
    fn view(&self) -> NodeView<'_, Self> {
        match self {
            Value::Object(map) => NodeView::Object(map.iter().map(|(k, v)| (k.as_str(), v)).collect()),
            Value::Array(items) => NodeView::Array(items),
            Value::String(s) => NodeView::String(s),
            Value::Number(n) => NodeView::Number(n.to_string()),
            Value::Bool(b) => NodeView::Boolean(*b),
            Value::Null => NodeView::Null,
        }
    }
}
