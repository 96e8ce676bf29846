//! Static HTML tag tables consulted by the renderer.

/// Check if a tag is a void element (self-closing, never has content).
pub fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Check if a tag's content is whitespace-significant and must not be
/// re-indented.
pub fn is_no_indent_element(tag: &str) -> bool {
    matches!(tag, "pre")
}

/// Check if a tag is one of the HTML elements allowed in a document body.
/// Unknown tags still render; this only drives a diagnostic.
pub fn is_known_element(tag: &str) -> bool {
    matches!(
        tag,
        // Sections
        "article" | "section" | "nav" | "aside"
            | "h1" | "h2" | "h3" | "h4" | "h5" | "h6"
            | "hgroup" | "header" | "footer" | "address"
            // Grouping content
            | "p" | "hr" | "pre" | "blockquote" | "ol" | "ul" | "menu" | "li"
            | "dl" | "dt" | "dd" | "figure" | "figcaption" | "main" | "div"
            // Text-level semantics
            | "a" | "em" | "strong" | "small" | "s" | "cite" | "q" | "dfn"
            | "abbr" | "ruby" | "rt" | "rp" | "data" | "time" | "code" | "var"
            | "samp" | "kbd" | "sub" | "sup" | "i" | "b" | "u" | "mark"
            | "bdi" | "bdo" | "span" | "br" | "wbr"
            // Edits
            | "ins" | "del"
            // Embedded content
            | "picture" | "source" | "img" | "iframe" | "embed" | "object"
            | "video" | "audio" | "track" | "map" | "area"
            // Tabular data
            | "table" | "caption" | "colgroup" | "col" | "tbody" | "thead"
            | "tfoot" | "tr" | "td" | "th"
            // Forms
            | "form" | "label" | "input" | "button" | "select" | "datalist"
            | "optgroup" | "option" | "textarea" | "output" | "progress"
            | "meter" | "fieldset" | "legend"
            // Interactive
            | "details" | "summary" | "dialog"
            // Scripting
            | "script" | "noscript" | "template" | "slot" | "canvas"
    )
}
