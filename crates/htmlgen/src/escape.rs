//! HTML escaping for text content and attribute values.

/// Escape `&`, `<`, `>`, `"` and `'` so the result is safe both as element
/// content and inside a double-quoted attribute value.
///
/// Not idempotent: escaping an already escaped string escapes its `&` again.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}
