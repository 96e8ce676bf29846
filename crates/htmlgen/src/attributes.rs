//! Attribute values and their serialization.

use std::collections::BTreeSet;

use crate::escape::escape;

/// The value of a single attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Rendered as `name="value"`, escaped.
    Text(String),
    /// `true` renders the bare name, `false` omits the attribute.
    Flag(bool),
    /// Omitted.
    Absent,
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Text(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Flag(value)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttrValue::Absent, Into::into)
    }
}

/// Insertion-ordered attribute map. Re-setting a name replaces its value
/// but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        let index = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}

/// Serialize classes and attributes into the text between a tag name and
/// its closing `>`. Every item carries its own leading space, so the result
/// is empty when there is nothing to emit.
///
/// Classes come first as a single `class` attribute, then attributes in
/// insertion order.
pub fn render_attributes(attributes: &Attributes, classes: &BTreeSet<String>) -> String {
    let mut out = String::new();

    if !classes.is_empty() {
        let joined: Vec<&str> = classes.iter().map(String::as_str).collect();
        out.push_str(&format!(" class=\"{}\"", escape(&joined.join(" "))));
    }

    for (name, value) in attributes.iter() {
        match value {
            AttrValue::Text(text) => {
                out.push_str(&format!(" {name}=\"{}\"", escape(text)));
            }
            AttrValue::Flag(true) => {
                out.push(' ');
                out.push_str(name);
            }
            AttrValue::Flag(false) | AttrValue::Absent => {}
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_attributes_with_classes() {
        let attrs: Attributes = [
            ("disabled", AttrValue::Flag(true)),
            (
                "href",
                AttrValue::from("https://www.example.com/?s=test\"test"),
            ),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            render_attributes(&attrs, &classes(&["a-b", "c"])),
            " class=\"a-b c\" disabled href=\"https://www.example.com/?s=test&quot;test\""
        );
    }

    #[test]
    fn test_render_attributes_empty() {
        assert_eq!(render_attributes(&Attributes::new(), &BTreeSet::new()), "");
    }

    #[test]
    fn test_false_and_absent_are_omitted() {
        let attrs: Attributes = [
            ("hidden", AttrValue::Flag(false)),
            ("title", AttrValue::from(None::<&str>)),
            ("id", AttrValue::from(Some("main"))),
        ]
        .into_iter()
        .collect();
        assert_eq!(render_attributes(&attrs, &BTreeSet::new()), " id=\"main\"");
    }

    #[test]
    fn test_class_values_escaped_and_sorted() {
        assert_eq!(
            render_attributes(&Attributes::new(), &classes(&["z", "a<b"])),
            " class=\"a&lt;b z\""
        );
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut attrs = Attributes::new();
        attrs.set("start", "2");
        attrs.set("type", "a");
        attrs.set("start", "5");
        let names: Vec<&str> = attrs.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["start", "type"]);
        assert_eq!(attrs.get("start"), Some(&AttrValue::Text("5".into())));
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut attrs = Attributes::new();
        attrs.set("class", "a b");
        assert_eq!(attrs.remove("class"), Some(AttrValue::Text("a b".into())));
        assert!(attrs.is_empty());
        assert_eq!(attrs.remove("class"), None);
    }
}
