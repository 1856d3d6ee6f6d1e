//! Bundle manifest (`META-INF/MANIFEST.MF`) reader.
//!
//! The manifest is a block of `Header: value` lines. A line starting with a
//! single space continues the value of the previous header:
//!
//! ```text
//! Manifest-Version: 1.0
//! Origin-Bundle-SymbolicName: Order_To_Cash_Repl
//!  icate
//! Bundle-Version: 1.0.3
//! ```

use indexmap::IndexMap;

use crate::base::constants::manifest;

/// Parsed manifest headers, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    headers: IndexMap<String, String>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse manifest text.
    ///
    /// Lines without a `:` that are not continuations are ignored, as are
    /// continuations that appear before any header.
    pub fn parse(content: &str) -> Self {
        let mut headers: IndexMap<String, String> = IndexMap::new();
        let mut current: Option<String> = None;

        for line in content.lines() {
            let line = line.strip_suffix('\r').unwrap_or(line);

            if let Some(continuation) = line.strip_prefix(' ') {
                if let Some(value) = current.as_ref().and_then(|h| headers.get_mut(h)) {
                    value.push_str(continuation);
                }
                continue;
            }

            match line.split_once(':') {
                Some((name, value)) => {
                    let name = name.trim().to_string();
                    headers.insert(name.clone(), value.trim().to_string());
                    current = Some(name);
                }
                None => current = None,
            }
        }

        Self { headers }
    }

    /// Set a header value.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Look up a header by exact name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Stable bundle identifier of the flow.
    pub fn flow_id(&self) -> Option<&str> {
        self.get(manifest::SYMBOLIC_NAME)
    }

    /// Version of the flow bundle.
    pub fn flow_version(&self) -> Option<&str> {
        self.get(manifest::VERSION)
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_identity_headers() {
        let manifest = Manifest::parse(
            "Manifest-Version: 1.0\nOrigin-Bundle-SymbolicName: Order_Flow\nBundle-Version: 1.0.3\n",
        );
        assert_eq!(manifest.flow_id(), Some("Order_Flow"));
        assert_eq!(manifest.flow_version(), Some("1.0.3"));
        assert_eq!(manifest.len(), 3);
    }

    #[test]
    fn test_continuation_lines_append() {
        let manifest = Manifest::parse(
            "Origin-Bundle-SymbolicName: Order_To_Cash_Repl\r\n icate_Sales\r\nBundle-Version: 2\r\n",
        );
        assert_eq!(manifest.flow_id(), Some("Order_To_Cash_Replicate_Sales"));
        assert_eq!(manifest.flow_version(), Some("2"));
    }

    #[test]
    fn test_value_may_contain_colons() {
        let manifest = Manifest::parse("Bundle-DocURL: https://example.com/doc\n");
        assert_eq!(manifest.get("Bundle-DocURL"), Some("https://example.com/doc"));
    }

    #[test]
    fn test_missing_headers_are_absent() {
        let manifest = Manifest::parse("Manifest-Version: 1.0\n");
        assert!(manifest.flow_id().is_none());
        assert!(manifest.flow_version().is_none());
    }

    #[test]
    fn test_leading_continuation_ignored() {
        let manifest = Manifest::parse(" orphan\nBundle-Version: 1\n");
        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.flow_version(), Some("1"));
    }
}
