//! Adapter property collection.
//!
//! An adapter's settings live in its `extensionElements` block as a flat
//! list of key/value pairs:
//!
//! ```xml
//! <bpmn2:extensionElements>
//!   <ifl:property>
//!     <key>ComponentType</key>
//!     <value>HTTPS</value>
//!   </ifl:property>
//! </bpmn2:extensionElements>
//! ```

use indexmap::IndexMap;

use crate::base::constants::tags;
use crate::interchange::XmlElement;

/// Property key to value for one adapter, in declaration order.
///
/// Re-declaring a key replaces its value but keeps its original position.
/// A property without a value is stored as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
    entries: IndexMap<String, String>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Collect every `property` element below `extension` into a [`PropertyMap`].
///
/// Properties without a non-empty `key` are skipped.
pub fn extract_properties(extension: &XmlElement) -> PropertyMap {
    let mut properties = PropertyMap::new();

    for property in extension.iter().filter(|e| e.is(tags::PROPERTY)) {
        let mut key = None;
        let mut value = None;
        for part in &property.children {
            if part.is(tags::KEY) {
                key = part.text();
            } else if part.is(tags::VALUE) {
                value = part.text();
            }
        }

        if let Some(key) = key.filter(|k| !k.is_empty()) {
            properties.insert(key, value.unwrap_or_default());
        }
    }

    properties
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interchange::parse_document;

    #[test]
    fn test_extract_properties_ignores_prefixes() {
        let doc = br#"<bpmn2:extensionElements xmlns:bpmn2="b" xmlns:ifl="i">
  <ifl:property><key>ComponentType</key><value>HTTPS</value></ifl:property>
  <ifl:property><ifl:key>urlPath</ifl:key><ifl:value>/orders</ifl:value></ifl:property>
</bpmn2:extensionElements>"#;
        let props = extract_properties(&parse_document(doc).unwrap());
        assert_eq!(props.get("ComponentType"), Some("HTTPS"));
        assert_eq!(props.get("urlPath"), Some("/orders"));
    }

    #[test]
    fn test_last_declaration_wins_and_keeps_position() {
        let doc = br#"<extensionElements>
  <property><key>a</key><value>1</value></property>
  <property><key>b</key><value>2</value></property>
  <property><key>a</key><value>3</value></property>
</extensionElements>"#;
        let props = extract_properties(&parse_document(doc).unwrap());
        let entries: Vec<_> = props.iter().collect();
        assert_eq!(entries, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_missing_key_skipped_and_missing_value_empty() {
        let doc = br#"<extensionElements>
  <property><value>orphan</value></property>
  <property><key></key><value>blank</value></property>
  <property><key>Name</key></property>
</extensionElements>"#;
        let props = extract_properties(&parse_document(doc).unwrap());
        assert_eq!(props.len(), 1);
        assert_eq!(props.get("Name"), Some(""));
    }

    #[test]
    fn test_nested_properties_are_found() {
        let doc = br#"<extensionElements><group><property><key>k</key><value>v</value></property></group></extensionElements>"#;
        let props = extract_properties(&parse_document(doc).unwrap());
        assert_eq!(props.get("k"), Some("v"));
    }
}
