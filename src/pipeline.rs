//! End-to-end conversion of a JSON file into an XML file.

use crate::converter::{ContentSource, FsSource, JsonToXmlConverter, Warning, load_json_text};
use crate::error::ConvertError;
use crate::generator::write_document;
use camino::Utf8Path;

/// Outcome of a successful [`convert_file`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Elements written, including the root.
    pub elements: usize,
    /// Values skipped because they had no element kind.
    pub warnings: Vec<Warning>,
}

/// Convert the JSON file at `input` into an XML file at `output`.
///
/// Output is all-or-nothing: on any error the destination is left untouched.
pub fn convert_file(input: &Utf8Path, output: &Utf8Path) -> Result<ConversionReport, ConvertError> {
    convert_with(&mut FsSource, input, output)
}

/// Like [`convert_file`], reading through an arbitrary [`ContentSource`].
pub fn convert_with<S: ContentSource>(
    source: &mut S,
    input: &Utf8Path,
    output: &Utf8Path,
) -> Result<ConversionReport, ConvertError> {
    let text = load_json_text(source, input)?;
    let mut converter = JsonToXmlConverter::new();
    let doc = converter.convert(&text)?;
    tracing::info!("parsed JSON input {}, writing XML document to {}", input, output);

    write_document(&doc, output)?;
    tracing::info!("completed writing XML output to {}", output);
    Ok(ConversionReport {
        elements: doc.element_count(),
        warnings: converter.take_warnings(),
    })
}
