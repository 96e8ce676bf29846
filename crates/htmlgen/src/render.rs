//! HTML renderer.
//!
//! Walks a node tree depth-first. Every call returns a complete fragment,
//! starting with `indent`. Block layout indents two spaces per level; an
//! element drops to inline layout as soon as any child must be inline, and
//! everything below an inline element is inline too.

use std::collections::BTreeSet;

use crate::attributes::{render_attributes, Attributes};
use crate::diagnostics::{Diagnostic, Diagnostics, LogDiagnostics};
use crate::node::{Element, Node, Sequence, Text};
use crate::tags::{is_known_element, is_no_indent_element};

const INDENT: &str = "  ";

impl Node {
    /// Render with diagnostics going to the `log` facade.
    pub fn render(&self, indent: &str, inline: bool) -> String {
        self.render_with(indent, inline, &mut LogDiagnostics)
    }

    pub fn render_with(
        &self,
        indent: &str,
        inline: bool,
        diagnostics: &mut dyn Diagnostics,
    ) -> String {
        match self {
            Node::Text(text) => text.render(indent),
            Node::Element(el) => el.render_with(indent, inline, diagnostics),
            Node::Sequence(seq) => seq.render_with(indent, inline, diagnostics),
        }
    }
}

impl Text {
    /// Text is emitted verbatim after the indent, whatever the layout.
    pub fn render(&self, indent: &str) -> String {
        format!("{indent}{}", self.as_str())
    }
}

impl Element {
    pub fn render(&self, indent: &str, inline: bool) -> String {
        self.render_with(indent, inline, &mut LogDiagnostics)
    }

    /// Render the element and its subtree.
    ///
    /// The requested `inline` flag is honored: once set it holds for the
    /// whole subtree. Otherwise the element goes inline when any child must
    /// be inline, or when its tag is a no-indent tag.
    pub fn render_with(
        &self,
        indent: &str,
        inline: bool,
        diagnostics: &mut dyn Diagnostics,
    ) -> String {
        let children = self.children();
        let inline = inline
            || is_no_indent_element(self.tag())
            || children.iter().any(Node::must_be_inline);

        let contents = if self.is_void() {
            None
        } else if inline {
            Some(render_children_inline(children, diagnostics))
        } else {
            let child_indent = format!("{indent}{INDENT}");
            let rendered: Vec<String> = children
                .iter()
                .map(|c| c.render_with(&child_indent, false, diagnostics))
                .collect();
            Some(rendered.join("\n"))
        };

        render_tag(
            self.tag(),
            self.attributes(),
            self.classes(),
            contents.as_deref(),
            indent,
            inline,
            diagnostics,
        )
    }
}

impl Sequence {
    pub fn render(&self, indent: &str, inline: bool) -> String {
        self.render_with(indent, inline, &mut LogDiagnostics)
    }

    /// Siblings render at the sequence's own indent; it adds no level.
    pub fn render_with(
        &self,
        indent: &str,
        inline: bool,
        diagnostics: &mut dyn Diagnostics,
    ) -> String {
        if inline {
            return render_children_inline(self.children(), diagnostics);
        }
        let rendered: Vec<String> = self
            .children()
            .iter()
            .map(|c| c.render_with(indent, false, diagnostics))
            .collect();
        rendered.join("\n")
    }
}

fn render_children_inline(children: &[Node], diagnostics: &mut dyn Diagnostics) -> String {
    children
        .iter()
        .map(|c| c.render_with("", true, diagnostics))
        .collect()
}

/// Wrap already rendered `contents` in a tag.
///
/// `None` contents means a void element, which self-closes. No-indent tags
/// (`pre`) ignore `indent` and `inline` and always wrap their contents
/// verbatim. Unknown tag names are rendered but reported.
pub fn render_tag(
    tag: &str,
    attributes: &Attributes,
    classes: &BTreeSet<String>,
    contents: Option<&str>,
    indent: &str,
    inline: bool,
    diagnostics: &mut dyn Diagnostics,
) -> String {
    if !is_known_element(tag) {
        diagnostics.report(Diagnostic::UnknownElement {
            tag: tag.to_string(),
        });
    }
    let (indent, inline) = if is_no_indent_element(tag) {
        ("", true)
    } else {
        (indent, inline)
    };

    let attrs = render_attributes(attributes, classes);
    let Some(contents) = contents else {
        return format!("{indent}<{tag}{attrs}/>");
    };

    if inline {
        format!("{indent}<{tag}{attrs}>{contents}</{tag}>")
    } else {
        format!("{indent}<{tag}{attrs}>\n{contents}\n{indent}</{tag}>")
    }
}
