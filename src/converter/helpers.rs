//! Helper functions for blank handling, root detection and value paths.

use crate::error::ConvertError;
use crate::model::ElementKind;

/// Whitespace as used for blank keys and values: the ASCII controls
/// `\t`..`\r` and U+001C..U+001F, plus Unicode space, line and paragraph
/// separators except the non-breaking ones (U+00A0, U+2007, U+202F).
pub fn is_blank_char(c: char) -> bool {
    match c {
        '\u{1C}'..='\u{1F}' => true,
        '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        _ => c.is_whitespace(),
    }
}

/// `true` for empty strings and strings made only of [`is_blank_char`]s.
pub fn is_blank(s: &str) -> bool {
    s.chars().all(is_blank_char)
}

/// Strip leading and trailing characters up to and including U+0020
/// (every ASCII control and the space).
pub fn trim_controls(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

/// `Some(s)` unless `s` is absent or blank. Blank keys and values carry no
/// information and are dropped from the output.
pub fn non_blank(s: Option<&str>) -> Option<String> {
    s.filter(|s| !is_blank(s)).map(str::to_string)
}

/// Determine the root element kind from the first non-whitespace character.
pub fn root_kind(text: &str) -> Result<ElementKind, ConvertError> {
    match trim_controls(text).chars().next() {
        Some('{') => Ok(ElementKind::Object),
        Some('[') => Ok(ElementKind::Array),
        Some(c) => Err(ConvertError::InvalidRootKind {
            found: format!("'{}'", c),
        }),
        None => Err(ConvertError::EmptyInput),
    }
}

/// Path of an object member, e.g. `$.store.book` or `$["a key"]`.
pub fn member_path(parent: &str, key: &str) -> String {
    let plain = !key.is_empty()
        && key.chars().all(|c| c.is_alphanumeric() || c == '_')
        && !key.starts_with(|c: char| c.is_ascii_digit());
    if plain {
        format!("{}.{}", parent, key)
    } else {
        format!("{}[{}]", parent, serde_json::Value::from(key))
    }
}

/// Path of an array item, e.g. `$.items[2]`.
pub fn index_path(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_follows_separator_rules() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\r\n\u{0B}\u{0C}"));
        assert!(is_blank("\u{1C}\u{1D}\u{1E}\u{1F}"));
        assert!(is_blank("\u{2003}\u{2028}\u{2029}\u{3000}"));
        assert!(!is_blank("\u{A0}"));
        assert!(!is_blank("\u{2007}"));
        assert!(!is_blank("\u{202F}"));
        assert!(!is_blank("\u{85}"));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn trim_strips_controls_but_not_unicode_spaces() {
        assert_eq!(trim_controls("\u{0}\u{1F} [1] \u{7}"), "[1]");
        assert_eq!(trim_controls("\u{3000}[1]\u{A0}"), "\u{3000}[1]\u{A0}");
    }

    #[test]
    fn root_kind_from_first_character() {
        assert_eq!(root_kind("\u{1}{}").unwrap(), ElementKind::Object);
        assert_eq!(root_kind("  []").unwrap(), ElementKind::Array);
        assert!(matches!(root_kind("true"), Err(ConvertError::InvalidRootKind { .. })));
        assert!(matches!(root_kind(" "), Err(ConvertError::EmptyInput)));
    }
}
