//! Node model: text, elements, and tagless sequences.
//!
//! Trees are built with the chaining builders on [`Element`] and rendered
//! through [`Node::render`]. Rendering only borrows the tree, so a tree
//! can't change while it is being rendered.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::attributes::{AttrValue, Attributes};
use crate::diagnostics::{Diagnostic, Diagnostics, LogDiagnostics};
use crate::escape::escape;
use crate::tags::is_void_element;
use crate::BuildError;

const DATA_KEY_PATTERN: &str = "[a-z][a-z-]*";

static DATA_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z-]*$").expect("data key pattern is valid"));

/// Any renderable node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Literal markup, emitted verbatim.
    Text(Text),
    /// A tag with attributes, classes, and children.
    Element(Element),
    /// Siblings without an enclosing tag.
    Sequence(Sequence),
}

/// Literal markup. The payload is emitted as-is; use [`Text::escaped`] for
/// untrusted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    content: String,
}

/// An HTML element under construction or ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attributes: Attributes,
    classes: BTreeSet<String>,
    children: Vec<Node>,
}

/// Top-level siblings rendered without a wrapping tag or extra indentation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequence {
    children: Vec<Node>,
}

// =========================================================================
// Node
// =========================================================================

impl Node {
    /// Whether this node forces its parent onto a single line.
    ///
    /// Text always does. A sequence does if any child does. An element never
    /// does by itself; its own layout is decided when it renders.
    pub fn must_be_inline(&self) -> bool {
        match self {
            Node::Text(_) => true,
            Node::Element(_) => false,
            Node::Sequence(seq) => seq.must_be_inline(),
        }
    }

    /// Add a class. Only elements have classes; other nodes report
    /// [`Diagnostic::Ignored`] and stay unchanged.
    pub fn add_class(&mut self, name: impl Into<String>, diagnostics: &mut dyn Diagnostics) {
        match self {
            Node::Element(el) => el.add_class(name),
            other => diagnostics.report(Diagnostic::Ignored {
                operation: "with_class",
                node: other.kind(),
            }),
        }
    }

    /// Set an attribute. Only elements have attributes; other nodes report
    /// [`Diagnostic::Ignored`] and stay unchanged.
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
        diagnostics: &mut dyn Diagnostics,
    ) {
        match self {
            Node::Element(el) => el.set_attribute(name, value, diagnostics),
            other => diagnostics.report(Diagnostic::Ignored {
                operation: "with_attribute",
                node: other.kind(),
            }),
        }
    }

    pub fn with_class(mut self, name: impl Into<String>) -> Self {
        self.add_class(name, &mut LogDiagnostics);
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set_attribute(name, value, &mut LogDiagnostics);
        self
    }

    fn kind(&self) -> &'static str {
        match self {
            Node::Text(_) => "text",
            Node::Element(_) => "element",
            Node::Sequence(_) => "sequence",
        }
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<Sequence> for Node {
    fn from(seq: Sequence) -> Self {
        Node::Sequence(seq)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(Text::new(s))
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(Text::new(s))
    }
}

// =========================================================================
// Text
// =========================================================================

impl Text {
    /// Wrap markup that is already escaped, or intentionally raw.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// HTML-escape `content` once, at construction.
    pub fn escaped(content: &str) -> Self {
        Self {
            content: escape(content),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text::new(s)
    }
}

// =========================================================================
// Element
// =========================================================================

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Attributes::new(),
            classes: BTreeSet::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn classes(&self) -> &BTreeSet<String> {
        &self.classes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_void(&self) -> bool {
        is_void_element(&self.tag)
    }

    /// Append one child. Bare strings become raw text nodes.
    pub fn child(mut self, item: impl Into<Node>) -> Self {
        self.children.push(item.into());
        self
    }

    /// Append several children of the same type.
    pub fn containing<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(items.into_iter().map(Into::into));
        self
    }

    /// Set an attribute, last write wins.
    ///
    /// `class` is not an attribute here: its value is split on whitespace and
    /// merged into the class set, and a [`Diagnostic::ClassAttribute`] is
    /// reported. An absent `class` value is dropped silently.
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
        diagnostics: &mut dyn Diagnostics,
    ) {
        let name = name.into();
        let value = value.into();
        if name != "class" {
            self.attributes.set(name, value);
            return;
        }

        let text = match value {
            AttrValue::Text(text) => text,
            AttrValue::Flag(_) => String::new(),
            AttrValue::Absent => return,
        };
        self.classes
            .extend(text.split_whitespace().map(str::to_string));
        diagnostics.report(Diagnostic::ClassAttribute { value: text });
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set_attribute(name, value, &mut LogDiagnostics);
        self
    }

    pub fn with_attributes<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttrValue>,
    {
        for (name, value) in attributes {
            self.set_attribute(name, value, &mut LogDiagnostics);
        }
        self
    }

    pub fn add_class(&mut self, name: impl Into<String>) {
        self.classes.insert(name.into());
    }

    pub fn with_class(mut self, name: impl Into<String>) -> Self {
        self.add_class(name);
        self
    }

    pub fn with_classes<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.classes.extend(names.into_iter().map(Into::into));
        self
    }

    /// Set `data-<key>` attributes.
    ///
    /// Every key must be lowercase letters and hyphens, starting with a
    /// letter. If any key is invalid nothing is applied.
    pub fn with_data<I, K, V>(mut self, data: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<AttrValue>,
    {
        let data: Vec<(K, V)> = data.into_iter().collect();
        if let Some((key, _)) = data.iter().find(|(key, _)| !DATA_KEY.is_match(key.as_ref())) {
            return Err(BuildError::InvalidDataKey {
                key: key.as_ref().to_string(),
                pattern: DATA_KEY_PATTERN,
            });
        }
        for (key, value) in data {
            self.attributes.set(format!("data-{}", key.as_ref()), value);
        }
        Ok(self)
    }
}

// =========================================================================
// Sequence
// =========================================================================

impl Sequence {
    pub fn new<I>(children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        Self {
            children: children.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push(&mut self, item: impl Into<Node>) {
        self.children.push(item.into());
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn must_be_inline(&self) -> bool {
        self.children.iter().any(Node::must_be_inline)
    }
}
