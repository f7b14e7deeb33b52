//! JSON to XML tree converter.
//!
//! Provides [`JsonToXmlConverter`] to turn a JSON document into the
//! type-tagged [`XmlDocument`] model. Sub-modules split the work into focused
//! areas:
//!
//! - [`source`] – Input abstraction and the JSON text loader
//! - [`value`] – Closed-kind view over parsed JSON trees
//! - [`helpers`] – Blank handling, root detection, value paths

pub mod helpers;
pub mod source;
pub mod value;

pub use helpers::{is_blank, non_blank};
pub use source::*;
pub use value::{JsonNode, NodeView};

use crate::error::ConvertError;
use crate::model::*;

/// A value that was skipped during conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Location of the skipped value, e.g. `$.items[2]`.
    pub path: String,
    /// Kind name reported by the JSON tree.
    pub kind: String,
}

/// Converts JSON documents into [`XmlDocument`]s.
///
/// Skipped values are collected per conversion and exposed through
/// [`warnings`](Self::warnings) in addition to being logged.
#[derive(Debug, Default)]
pub struct JsonToXmlConverter {
    warnings: Vec<Warning>,
}

impl JsonToXmlConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON text and convert it.
    ///
    /// The text must start with `{` or `[` once trimmed; a bare scalar is
    /// rejected with [`ConvertError::InvalidRootKind`] before parsing.
    pub fn convert(&mut self, json_text: &str) -> Result<XmlDocument, ConvertError> {
        self.warnings.clear();
        let text = helpers::trim_controls(json_text);
        if is_blank(text) {
            return Err(ConvertError::EmptyInput);
        }
        let expected = helpers::root_kind(text)?;
        let value: serde_json::Value = serde_json::from_str(text)?;
        let doc = self.convert_tree(&value)?;
        debug_assert_eq!(doc.root().kind(), expected);
        Ok(doc)
    }

    /// Convert an already parsed JSON tree.
    pub fn convert_tree<N: JsonNode>(&mut self, root: &N) -> Result<XmlDocument, ConvertError> {
        self.warnings.clear();
        let root = match root.view() {
            NodeView::Object(members) => {
                tracing::debug!("root element is a JSON object");
                Element::container(ElementKind::Object, None, self.convert_members(members, "$"))
            }
            NodeView::Array(items) => {
                tracing::debug!("root element is a JSON array");
                Element::container(ElementKind::Array, None, self.convert_items(items, "$"))
            }
            other => {
                return Err(ConvertError::InvalidRootKind {
                    found: other.kind_name().to_string(),
                });
            }
        };
        Ok(XmlDocument::new(root))
    }

    /// Values skipped by the most recent conversion.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn take_warnings(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }

    /// Convert one value into a new element. Returns `None` for values that
    /// have no element kind; those are recorded as warnings.
    fn convert_value<N: JsonNode>(
        &mut self,
        value: &N,
        key: Option<&str>,
        path: &str,
    ) -> Option<Element> {
        let name = non_blank(key);
        let element = match value.view() {
            NodeView::Object(members) => {
                Element::container(ElementKind::Object, name, self.convert_members(members, path))
            }
            NodeView::Array(items) => {
                Element::container(ElementKind::Array, name, self.convert_items(items, path))
            }
            NodeView::String(s) => Element::leaf(ElementKind::String, name, non_blank(Some(s))),
            NodeView::Number(text) => {
                Element::leaf(ElementKind::Number, name, non_blank(Some(text.as_str())))
            }
            NodeView::Boolean(b) => Element::leaf(ElementKind::Boolean, name, Some(b.to_string())),
            NodeView::Null => Element::leaf(ElementKind::Null, name, None),
            NodeView::Unsupported(kind) => {
                tracing::warn!("skipping value of unknown type {} at {}", kind, path);
                self.warnings.push(Warning {
                    path: path.to_string(),
                    kind,
                });
                return None;
            }
        };
        Some(element)
    }

    fn convert_members<N: JsonNode>(&mut self, members: Vec<(&str, &N)>, path: &str) -> Vec<Element> {
        members
            .into_iter()
            .filter_map(|(key, value)| {
                self.convert_value(value, Some(key), &helpers::member_path(path, key))
            })
            .collect()
    }

    fn convert_items<N: JsonNode>(&mut self, items: &[N], path: &str) -> Vec<Element> {
        items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| self.convert_value(item, None, &helpers::index_path(path, i)))
            .collect()
    }
}
