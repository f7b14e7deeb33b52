//! Generate XML text from an [`XmlDocument`] model.
//!
//! The output starts with an XML declaration and has one element per line,
//! indented by two spaces per level. Leaves with text are written inline,
//! elements without children or text use the self-closing form.

use crate::model::*;
use quick_xml::escape::escape;
use std::borrow::Cow;

/// Generate the XML text for a document.
pub fn generate_document_xml(doc: &XmlDocument) -> String {
    let mut out = String::with_capacity(64 * doc.element_count());
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    write_element(&mut out, doc.root(), 0);
    out
}

fn indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str("  ");
    }
}

/// Characters XML 1.0 can carry in text and attribute values.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

/// Replace characters XML 1.0 cannot carry with U+FFFD.
fn xml_chars(s: &str) -> Cow<'_, str> {
    if s.chars().all(is_xml_char) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(
            s.chars()
                .map(|c| if is_xml_char(c) { c } else { char::REPLACEMENT_CHARACTER })
                .collect(),
        )
    }
}

fn escape_text(s: &str) -> String {
    escape(xml_chars(s)).into_owned()
}

/// Escape an attribute value. Like text escaping, but newlines and carriage
/// returns are encoded as character references so they survive attribute
/// value normalization.
fn escape_attr(s: &str) -> String {
    escape_text(s).replace('\n', "&#xA;").replace('\r', "&#xD;")
}

fn write_element(out: &mut String, element: &Element, level: usize) {
    indent(out, level);
    let tag = element.kind().tag();
    out.push('<');
    out.push_str(tag);
    if let Some(name) = element.name() {
        out.push_str(" name=\"");
        out.push_str(&escape_attr(name));
        out.push('"');
    }

    if let Some(text) = element.text() {
        out.push('>');
        out.push_str(&escape_text(text));
        out.push_str(&format!("</{}>\n", tag));
    } else if element.children().is_empty() {
        out.push_str("/>\n");
    } else {
        out.push_str(">\n");
        for child in element.children() {
            write_element(out, child, level + 1);
        }
        indent(out, level);
        out.push_str(&format!("</{}>\n", tag));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(kind: ElementKind, name: &str, text: &str) -> Element {
        Element::leaf(kind, Some(name.into()), Some(text.into()))
    }

    fn object(children: Vec<Element>) -> XmlDocument {
        XmlDocument::new(Element::container(ElementKind::Object, None, children))
    }

    #[test]
    fn test_nested_layout() {
        let doc = object(vec![
            leaf(ElementKind::Number, "a", "1"),
            Element::container(
                ElementKind::Array,
                Some("list".into()),
                vec![Element::leaf(ElementKind::Null, None, None)],
            ),
        ]);

        let xml = generate_document_xml(&doc);
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <object>\n  \
             <number name=\"a\">1</number>\n  \
             <array name=\"list\">\n    \
             <null/>\n  \
             </array>\n\
             </object>\n"
        );
    }

    #[test]
    fn test_escaping() {
        let doc = object(vec![leaf(ElementKind::String, "a\"b\nc", "x < y & z")]);
        let xml = generate_document_xml(&doc);
        assert!(xml.contains("<string name=\"a&quot;b&#xA;c\">x &lt; y &amp; z</string>"));
    }

    #[test]
    fn test_empty_root() {
        let doc = XmlDocument::new(Element::container(ElementKind::Array, None, vec![]));
        assert!(generate_document_xml(&doc).ends_with("?>\n<array/>\n"));
    }

    #[test]
    fn test_disallowed_characters_are_replaced() {
        let doc = object(vec![leaf(ElementKind::String, "k\u{1}", "a\u{0}b\u{1F}\tc\u{FFFF}")]);
        let xml = generate_document_xml(&doc);
        assert!(xml.contains("<string name=\"k\u{FFFD}\">a\u{FFFD}b\u{FFFD}\tc\u{FFFD}</string>"));
    }

    #[test]
    fn test_allowed_characters_pass_through() {
        assert_eq!(xml_chars("caf\u{E9} \u{1F600}\t\r\n"), "caf\u{E9} \u{1F600}\t\r\n");
        assert!(matches!(xml_chars("plain"), Cow::Borrowed(_)));
    }
}
