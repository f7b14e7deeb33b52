//! XML output – render the converted tree as pretty-printed text.
//!
//! This module provides:
//! - [`document_xml`] – Generate XML text from an [`XmlDocument`](crate::model::XmlDocument).
//! - [`output`] – Write the rendered document to a file.

pub mod document_xml;
pub mod output;

pub use document_xml::generate_document_xml;
pub use output::write_document;
