//! Per-component CSS registry.
//!
//! Each styled builder gets a class name derived from its identifier
//! (`demo_box` → `demo-box`). The registry records the builder's CSS under
//! that name and hands back a [`Style`] that tags every element the builder
//! returns with the class. In the CSS, `&` stands for the class selector.

use crate::diagnostics::{Diagnostic, Diagnostics, LogDiagnostics};
use crate::node::Element;

/// Derive a CSS class name from a builder identifier: underscores become
/// hyphens and one trailing hyphen is dropped (so `type_` → `type`).
pub fn class_name_for(ident: &str) -> String {
    let name = ident.replace('_', "-");
    match name.strip_suffix('-') {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}

/// Handle for a registered class, applied to builder output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    class_name: String,
}

impl Style {
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn apply(&self, element: Element) -> Element {
        element.with_class(self.class_name.clone())
    }

    /// Wrap `builder` so every element it returns carries this class.
    pub fn wrap<A, F>(self, builder: F) -> impl Fn(A) -> Element
    where
        F: Fn(A) -> Element,
    {
        move |args| self.apply(builder(args))
    }
}

/// Insertion-ordered map from class name to CSS rule body.
///
/// Entries are only ever added. The first registration of a class name
/// wins; later ones are reported as [`Diagnostic::DuplicateClassName`] and
/// leave the stored CSS alone.
#[derive(Debug, Default)]
pub struct Registry<D = LogDiagnostics> {
    registered: Vec<String>,
    styles: Vec<(String, String)>,
    diagnostics: D,
}

impl Registry<LogDiagnostics> {
    pub fn new() -> Self {
        Self::with_diagnostics(LogDiagnostics)
    }
}

impl<D: Diagnostics> Registry<D> {
    pub fn with_diagnostics(diagnostics: D) -> Self {
        Self {
            registered: Vec::new(),
            styles: Vec::new(),
            diagnostics,
        }
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Register the class for builder `ident`, with optional CSS.
    ///
    /// The CSS is dedented and trimmed before it is stored.
    pub fn style(&mut self, ident: &str, css: Option<&str>) -> Style {
        let class_name = class_name_for(ident);

        if self.registered.contains(&class_name) {
            self.diagnostics.report(Diagnostic::DuplicateClassName {
                class_name: class_name.clone(),
            });
        } else {
            self.registered.push(class_name.clone());
            if let Some(css) = css {
                self.styles
                    .push((class_name.clone(), dedent(css).trim().to_string()));
            }
        }

        Style { class_name }
    }

    /// [`Registry::style`] and [`Style::wrap`] in one call.
    pub fn styled<A, F>(&mut self, ident: &str, css: Option<&str>, builder: F) -> impl Fn(A) -> Element
    where
        F: Fn(A) -> Element,
    {
        self.style(ident, css).wrap(builder)
    }

    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.registered.iter().map(String::as_str)
    }

    pub fn css(&self, class_name: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(name, _)| name == class_name)
            .map(|(_, css)| css.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }

    /// One `.class { ... }` block per class with CSS, in registration order.
    pub fn render_stylesheet(&self) -> String {
        let blocks: Vec<String> = self
            .styles
            .iter()
            .map(|(name, css)| {
                let body = css.replace('&', &format!(".{name}"));
                format!(".{name} {{\n{}\n}}", indent_lines(&body, "  "))
            })
            .collect();
        blocks.join("\n")
    }
}

/// Remove the longest leading whitespace shared by every non-blank line.
/// Blank lines are emptied and don't take part.
fn dedent(text: &str) -> String {
    let margin = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(leading_whitespace)
        .reduce(common_prefix)
        .unwrap_or("");

    let lines: Vec<&str> = text
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                &line[margin.len()..]
            }
        })
        .collect();
    lines.join("\n")
}

fn leading_whitespace(line: &str) -> &str {
    let end = line.len() - line.trim_start().len();
    &line[..end]
}

fn common_prefix<'a>(a: &'a str, b: &'a str) -> &'a str {
    let len = a
        .char_indices()
        .zip(b.chars())
        .take_while(|((_, x), y)| x == y)
        .last()
        .map_or(0, |((i, x), _)| i + x.len_utf8());
    &a[..len]
}

/// Prefix every non-blank line with `prefix`.
fn indent_lines(text: &str, prefix: &str) -> String {
    let lines: Vec<String> = text
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect();
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use pretty_assertions::assert_eq;

    const DEMO_BOX_CSS: &str = "
        background-color: lightred;

        & > h2 {
          font-size: 1.5em;
          font-weight: 300;
        }
    ";

    fn quiet_registry() -> Registry<Vec<Diagnostic>> {
        Registry::with_diagnostics(Vec::new())
    }

    // =========================================================================
    // Class names
    // =========================================================================

    #[test]
    fn test_class_name_for() {
        assert_eq!(class_name_for("demo_box"), "demo-box");
        assert_eq!(class_name_for("demo-box"), "demo-box");
        assert_eq!(class_name_for("type_"), "type");
        assert_eq!(class_name_for("title"), "title");
    }

    #[test]
    fn test_class_name_strips_one_trailing_hyphen() {
        assert_eq!(class_name_for("a__"), "a-");
    }

    // =========================================================================
    // Registration
    // =========================================================================

    #[test]
    fn test_duplicate_class_name_warns_once() {
        let mut registry = quiet_registry();
        registry.style("demo_box", Some("& > h2 { font-size: 1.5em; }"));
        registry.style("demo-box", Some("color: red;"));

        assert_eq!(
            registry.diagnostics(),
            &vec![Diagnostic::DuplicateClassName {
                class_name: "demo-box".into()
            }]
        );
        let css = registry.render_stylesheet();
        assert_eq!(css.matches(".demo-box {").count(), 1);
        assert!(css.contains(".demo-box > h2 { font-size: 1.5em; }"));
        assert!(!css.contains("color: red;"));
    }

    #[test]
    fn test_duplicate_without_css_still_warns() {
        let mut registry = quiet_registry();
        registry.style("card", None);
        registry.style("card", None);
        assert_eq!(registry.diagnostics().len(), 1);
        assert_eq!(registry.class_names().collect::<Vec<_>>(), vec!["card"]);
    }

    #[test]
    fn test_style_without_css_has_no_block() {
        let mut registry = quiet_registry();
        let style = registry.style("plain_", None);
        assert_eq!(style.class_name(), "plain");
        assert_eq!(registry.render_stylesheet(), "");
        assert!(registry.css("plain").is_none());
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_css_is_dedented() {
        let mut registry = quiet_registry();
        registry.style("demo_box", Some(DEMO_BOX_CSS));
        assert_eq!(
            registry.css("demo-box"),
            Some(
                "background-color: lightred;\n\n& > h2 {\n  font-size: 1.5em;\n  font-weight: 300;\n}"
            )
        );
    }

    // =========================================================================
    // Wrapping builders
    // =========================================================================

    #[test]
    fn test_wrapped_builder_adds_class() {
        let mut registry = quiet_registry();
        let page_title = registry.styled("page_title", Some("font-size: 1em;"), |text: &str| {
            Element::new("h1").child(text)
        });

        let html = Node::from(page_title("Demo Page")).render_with("", false, &mut Vec::<Diagnostic>::new());
        assert_eq!(html, "<h1 class=\"page-title\">Demo Page</h1>");
    }

    #[test]
    fn test_wrapped_builder_keeps_existing_classes() {
        let mut registry = quiet_registry();
        let card = registry.styled("card", None, |()| Element::new("div").with_class("shadow"));
        let el = card(());
        let classes: Vec<&str> = el.classes().iter().map(String::as_str).collect();
        assert_eq!(classes, vec!["card", "shadow"]);
    }

    #[test]
    fn test_wrapped_builder_with_tuple_arguments() {
        let mut registry = quiet_registry();
        let link = registry.styled("nav_link", None, |(href, label): (&str, &str)| {
            Element::new("a").with_attribute("href", href).child(label)
        });
        let el = link(("/about", "About"));
        assert!(el.classes().contains("nav-link"));
        assert_eq!(el.children(), &[Node::from("About")]);
    }

    #[test]
    fn test_style_apply() {
        let mut registry = quiet_registry();
        let style = registry.style("box", None);
        let el = style.apply(Element::new("div"));
        assert!(el.classes().contains("box"));
    }

    // =========================================================================
    // Stylesheet
    // =========================================================================

    #[test]
    fn test_render_stylesheet_substitutes_ampersand() {
        let mut registry = quiet_registry();
        registry.style("demo_box", Some("& > h2 { font-size: 1.5em; }"));
        assert_eq!(
            registry.render_stylesheet(),
            ".demo-box {\n  .demo-box > h2 { font-size: 1.5em; }\n}"
        );
    }

    #[test]
    fn test_render_stylesheet_in_registration_order() {
        let mut registry = quiet_registry();
        registry.style(
            "page_title",
            Some(
                "
                font-size: 1em;
                font-weight: 700;
            ",
            ),
        );
        registry.style("demo_box", Some(DEMO_BOX_CSS));

        assert_eq!(
            registry.render_stylesheet(),
            ".page-title {\n  font-size: 1em;\n  font-weight: 700;\n}\n\
             .demo-box {\n  background-color: lightred;\n\n  .demo-box > h2 {\n    font-size: 1.5em;\n    font-weight: 300;\n  }\n}"
        );
    }

    #[test]
    fn test_render_stylesheet_empty() {
        assert_eq!(quiet_registry().render_stylesheet(), "");
    }

    // =========================================================================
    // Text helpers
    // =========================================================================

    #[test]
    fn test_dedent_mixed_depths() {
        assert_eq!(dedent("    a\n      b\n    c"), "a\n  b\nc");
    }

    #[test]
    fn test_dedent_no_common_margin() {
        assert_eq!(dedent("a\n  b"), "a\n  b");
    }

    #[test]
    fn test_dedent_tabs_and_spaces_differ() {
        assert_eq!(dedent("\ta\n  b"), "\ta\n  b");
    }

    #[test]
    fn test_indent_lines_skips_blank() {
        assert_eq!(indent_lines("a\n\nb", "  "), "  a\n\n  b");
    }
}
