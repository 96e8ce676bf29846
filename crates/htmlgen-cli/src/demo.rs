//! The demo page: a styled title and a styled box holding a short list.

use htmlgen::{Element, Node, Registry, Sequence};

/// Rendered demo output.
pub struct DemoOutput {
    pub html: String,
    pub css: String,
}

pub fn build() -> DemoOutput {
    let mut registry = Registry::new();

    let page_title = registry.styled(
        "page_title",
        Some(
            "
            font-size: 1em;
            font-weight: 700;
            ",
        ),
        |()| Element::new("h1").child("Demo Page"),
    );

    let demo_box = registry.styled(
        "demo_box",
        Some(
            "
            background-color: lightred;

            & > h2 {
              font-size: 1.5em;
              font-weight: 300;
            }
            ",
        ),
        |contents: Vec<Node>| {
            Element::new("div")
                .child(Element::new("h2").child("Demo Box"))
                .containing(contents)
        },
    );

    let list_of_things = vec![
        Node::from(Element::new("p").child("These are the things:")),
        Node::from(
            Element::new("ol")
                .with_attributes([("start", "2"), ("type", "a")])
                .containing(["Minute", "Second", "Third"].map(|item| Element::new("li").child(item))),
        ),
    ];

    let page = Sequence::new([page_title(()), demo_box(list_of_things)]);

    DemoOutput {
        html: page.render("", false),
        css: registry.render_stylesheet(),
    }
}

/// Prefix every line with `prefix`, blank lines included.
pub fn quote(text: &str, prefix: &str) -> String {
    let lines: Vec<String> = text.lines().map(|line| format!("{prefix}{line}")).collect();
    lines.join("\n")
}

/// Wrap the demo output in a standalone HTML document.
pub fn document(title: &str, output: &DemoOutput) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"UTF-8\">\n");
    html.push_str(&format!("  <title>{}</title>\n", htmlgen::escape(title)));
    if !output.css.is_empty() {
        html.push_str(&format!("  <style>\n{}\n  </style>\n", quote(&output.css, "    ")));
    }
    html.push_str("</head>\n<body>\n");
    html.push_str(&output.html);
    html.push_str("\n</body>\n</html>\n");
    html
}
