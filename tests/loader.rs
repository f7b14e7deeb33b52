use camino::{Utf8Path, Utf8PathBuf};
use jsonxml::converter::{ContentSource, load_json_text};
use jsonxml::error::ConvertError;
use std::collections::HashMap;
use std::io;

struct MemSource {
    files: HashMap<String, String>,
}

impl ContentSource for MemSource {
    fn read_to_string(&mut self, path: &Utf8Path) -> io::Result<String> {
        self.files
            .get(path.as_str())
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("not found: {}", path)))
    }
}

fn source_with(path: &Utf8Path, content: &str) -> MemSource {
    let mut files = HashMap::new();
    files.insert(path.as_str().to_string(), content.to_string());
    MemSource { files }
}

#[test]
fn lines_are_joined_without_separator_and_trimmed() {
    let path = Utf8PathBuf::from("mem://input.json");
    let mut source = source_with(&path, "\n  {\"a\":\r\n [1,\n 2]}\n\n");
    let text = load_json_text(&mut source, &path).expect("load JSON text");
    assert_eq!(text, "{\"a\": [1, 2]}");
}

#[test]
fn blank_file_is_empty_input() {
    let path = Utf8PathBuf::from("mem://blank.json");
    for content in ["", "   ", "\n\n\t\r\n"] {
        let mut source = source_with(&path, content);
        let err = load_json_text(&mut source, &path).unwrap_err();
        assert!(matches!(err, ConvertError::EmptyInput), "content {:?}", content);
    }
}

#[test]
fn missing_file_is_file_access_failure() {
    let mut source = MemSource {
        files: HashMap::new(),
    };
    let path = Utf8PathBuf::from("mem://missing.json");
    match load_json_text(&mut source, &path).unwrap_err() {
        ConvertError::FileAccess { path: p, source } => {
            assert_eq!(p, path);
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other}"),
    }
}
