use std::fmt;

// ────────────────────────────────────────────────────────────────────────────
// ElementKind
// ────────────────────────────────────────────────────────────────────────────

/// The six element tags of the type-tagged XML scheme. Each JSON value kind
/// maps to exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl ElementKind {
    /// XML tag name written for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            ElementKind::Object => "object",
            ElementKind::Array => "array",
            ElementKind::String => "string",
            ElementKind::Number => "number",
            ElementKind::Boolean => "boolean",
            ElementKind::Null => "null",
        }
    }

    /// `object` and `array` hold child elements, every other kind is a leaf.
    pub fn is_container(self) -> bool {
        matches!(self, ElementKind::Object | ElementKind::Array)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Element
// ────────────────────────────────────────────────────────────────────────────

/// One element of the generated XML tree.
///
/// Containers never carry text and leaves never carry children; the
/// constructors below are the only way to build an element, so this holds
/// for every tree the converter produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    kind: ElementKind,
    name: Option<String>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    /// An `object` or `array` element with the given children.
    ///
    /// # Panics
    /// Debug builds assert that `kind` is a container kind.
    pub fn container(kind: ElementKind, name: Option<String>, children: Vec<Element>) -> Self {
        debug_assert!(kind.is_container(), "{kind} is not a container kind");
        Self {
            kind,
            name,
            text: None,
            children,
        }
    }

    /// A `string`, `number`, `boolean` or `null` element.
    pub fn leaf(kind: ElementKind, name: Option<String>, text: Option<String>) -> Self {
        debug_assert!(!kind.is_container(), "{kind} is not a leaf kind");
        Self {
            kind,
            name,
            text,
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Value of the `name` attribute, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Number of elements in this subtree, including `self`.
    pub fn element_count(&self) -> usize {
        1 + self.children.iter().map(Element::element_count).sum::<usize>()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// XmlDocument
// ────────────────────────────────────────────────────────────────────────────

/// A finished XML document: a single `object` or `array` root without a
/// `name` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    root: Element,
}

impl XmlDocument {
    pub(crate) fn new(root: Element) -> Self {
        debug_assert!(root.kind.is_container() && root.name.is_none());
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn element_count(&self) -> usize {
        self.root.element_count()
    }
}
