//! Externalized parameter file (`parameters.prop`) reader.
//!
//! One `name=value` entry per line. Blank lines and comments (`#`, `!`)
//! are skipped. Escaped spaces in names (`my\ param`) become literal
//! spaces; `\:` and `\=` in values are unescaped the way the flow designer
//! writes them (`Address=https\://host`).

use indexmap::IndexMap;

/// Parameter name to replacement value, loaded once per flow bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterTable {
    values: IndexMap<String, String>,
}

impl ParameterTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse parameter file content. Later names overwrite earlier ones.
    pub fn parse(content: &str) -> Self {
        let mut values = IndexMap::new();

        for line in content.lines() {
            let line = line.trim_start();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            let Some((name, value)) = line.split_once('=') else {
                continue;
            };
            let name = unescape_name(name);
            if name.is_empty() {
                continue;
            }
            values.insert(name, unescape_value(value.trim()));
        }

        Self { values }
    }

    /// Add or replace a parameter.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Turn `\ ` into a space and drop trailing whitespace that was not escaped.
fn unescape_name(raw: &str) -> String {
    let mut name = String::with_capacity(raw.len());
    // Unescaped whitespace, kept only if more name follows.
    let mut pending = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' && chars.peek() == Some(&' ') {
            chars.next();
            name.push_str(&pending);
            pending.clear();
            name.push(' ');
        } else if c.is_whitespace() {
            pending.push(c);
        } else {
            name.push_str(&pending);
            pending.clear();
            name.push(c);
        }
    }

    name
}

fn unescape_value(value: &str) -> String {
    value.replace("\\:", ":").replace("\\=", "=")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entries() {
        let table = ParameterTable::parse("host=a.b.com\nport=443\n");
        assert_eq!(table.get("host"), Some("a.b.com"));
        assert_eq!(table.get("port"), Some("443"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let table = ParameterTable::parse("#Store parameters\n\n! legacy\nhost=x\n   \n");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("host"), Some("x"));
    }

    #[test]
    fn test_escaped_space_in_name() {
        let table = ParameterTable::parse("Receiver\\ Address=/orders\n");
        assert_eq!(table.get("Receiver Address"), Some("/orders"));
    }

    #[test]
    fn test_trailing_escaped_space_in_name_kept() {
        let table = ParameterTable::parse("key\\ =v\nother\\  \t= w\n");
        assert_eq!(table.get("key "), Some("v"));
        assert_eq!(table.get("key\\"), None);
        assert_eq!(table.get("other "), Some("w"));
    }

    #[test]
    fn test_escaped_colon_in_value() {
        let table = ParameterTable::parse("url=https\\://host\\:8443/x\n");
        assert_eq!(table.get("url"), Some("https://host:8443/x"));
    }

    #[test]
    fn test_later_entry_overwrites() {
        let table = ParameterTable::parse("host=first\nhost=second\n");
        assert_eq!(table.get("host"), Some("second"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_value_keeps_equals_after_first() {
        let table = ParameterTable::parse("query=a=b\n");
        assert_eq!(table.get("query"), Some("a=b"));
    }

    #[test]
    fn test_line_without_separator_skipped() {
        let table = ParameterTable::parse("garbage\nhost=x\n");
        assert_eq!(table.len(), 1);
    }
}
