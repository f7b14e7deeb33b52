//! Write generated XML to a destination file.

use super::generate_document_xml;
use crate::error::ConvertError;
use crate::model::XmlDocument;
use camino::Utf8Path;

/// Render `doc` and write it to `path`, replacing any existing content.
///
/// The full text is rendered before the file is opened, so a rendering step
/// can never leave a truncated file behind.
pub fn write_document(doc: &XmlDocument, path: &Utf8Path) -> Result<(), ConvertError> {
    let xml = generate_document_xml(doc);
    std::fs::write(path.as_std_path(), xml).map_err(|e| ConvertError::file_access(path, e))?;
    tracing::debug!("wrote {} elements to {}", doc.element_count(), path);
    Ok(())
}
