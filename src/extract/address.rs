//! Endpoint address resolution.
//!
//! Each adapter type exposes its endpoint under its own property name, and
//! for JMS the name also depends on the adapter's direction. The mapping is
//! kept as data in an [`AddressKeyTable`] so supporting another adapter type
//! means adding an entry, not a branch.
//!
//! When the table has nothing for an adapter, the first non-empty property
//! whose key contains `url` (any case) is used instead. That is a heuristic:
//! with several `url`-like keys, declaration order decides.

use indexmap::IndexMap;

use super::properties::PropertyMap;

/// Substring looked for in property keys when the table has no answer.
const URL_MARKER: &str = "url";

/// Candidate address keys for one adapter type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressKeys {
    /// Same keys regardless of direction.
    Flat(Vec<String>),
    /// Keys chosen by the adapter's direction.
    ByDirection(IndexMap<String, Vec<String>>),
}

impl AddressKeys {
    /// Candidate keys for `direction`. An unmapped direction has none.
    pub fn candidates(&self, direction: Option<&str>) -> &[String] {
        match self {
            Self::Flat(keys) => keys,
            Self::ByDirection(by_direction) => direction
                .and_then(|d| by_direction.get(d))
                .map(Vec::as_slice)
                .unwrap_or(&[]),
        }
    }
}

/// Adapter type to address keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressKeyTable {
    entries: IndexMap<String, AddressKeys>,
}

impl Default for AddressKeyTable {
    fn default() -> Self {
        Self::empty()
            .with_type("HTTPS", ["urlPath"])
            .with_type("HTTP", ["httpAddressWithoutQuery"])
            .with_type("SFTP", ["host"])
            .with_directional_type(
                "JMS",
                [
                    ("Sender", vec!["QueueName_inbound"]),
                    ("Receiver", vec!["QueueName_outbound"]),
                ],
            )
            .with_type("ProcessDirect", ["address"])
            .with_type("HCIOData", ["address"])
            .with_type("SOAP", ["address"])
    }
}

impl AddressKeyTable {
    /// A table with no entries; every lookup goes to the `url` fallback.
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Map an adapter type to keys tried in order.
    pub fn with_type<I, S>(mut self, component_type: impl Into<String>, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys = keys.into_iter().map(Into::into).collect();
        self.entries
            .insert(component_type.into(), AddressKeys::Flat(keys));
        self
    }

    /// Map an adapter type to per-direction keys.
    pub fn with_directional_type<I, D, S>(mut self, component_type: impl Into<String>, keys: I) -> Self
    where
        I: IntoIterator<Item = (D, Vec<S>)>,
        D: Into<String>,
        S: Into<String>,
    {
        let by_direction = keys
            .into_iter()
            .map(|(dir, keys)| (dir.into(), keys.into_iter().map(Into::into).collect()))
            .collect();
        self.entries
            .insert(component_type.into(), AddressKeys::ByDirection(by_direction));
        self
    }

    pub fn get(&self, component_type: &str) -> Option<&AddressKeys> {
        self.entries.get(component_type)
    }

    /// Candidate keys for an adapter, empty when the type or direction is
    /// not mapped.
    pub fn candidates(&self, component_type: Option<&str>, direction: Option<&str>) -> &[String] {
        component_type
            .and_then(|t| self.entries.get(t))
            .map(|keys| keys.candidates(direction))
            .unwrap_or(&[])
    }

    /// Pick the address of an adapter from its properties.
    ///
    /// The first candidate key present wins, even with an empty value.
    /// Without a candidate hit, the `url` fallback applies.
    pub fn resolve<'p>(
        &self,
        component_type: Option<&str>,
        direction: Option<&str>,
        properties: &'p PropertyMap,
    ) -> Option<&'p str> {
        let candidates = self.candidates(component_type, direction);
        if let Some(value) = candidates.iter().find_map(|key| properties.get(key)) {
            return Some(value);
        }

        let fallback = url_fallback(properties);
        if let Some(value) = fallback {
            tracing::trace!(
                "Address for {:?}/{:?} taken from url-like property: {}",
                component_type,
                direction,
                value
            );
        }
        fallback
    }
}

/// First non-empty value whose key contains `url`, case-insensitively.
///
/// Empty values are skipped so a blank `urlPath` does not shadow a later
/// populated `brokerUrl`. Candidate keys from the table are different:
/// there an empty value still counts as found.
fn url_fallback(properties: &PropertyMap) -> Option<&str> {
    properties
        .iter()
        .find(|(key, value)| !value.is_empty() && key.to_lowercase().contains(URL_MARKER))
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, &str)]) -> PropertyMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_flat_type_resolves_its_key() {
        let table = AddressKeyTable::default();
        let p = props(&[("urlPath", "/orders"), ("address", "/other")]);
        assert_eq!(table.resolve(Some("HTTPS"), None, &p), Some("/orders"));
    }

    #[test]
    fn test_jms_uses_direction() {
        let table = AddressKeyTable::default();
        let p = props(&[("QueueName_inbound", "Q_IN"), ("QueueName_outbound", "Q_OUT")]);
        assert_eq!(table.resolve(Some("JMS"), Some("Sender"), &p), Some("Q_IN"));
        assert_eq!(table.resolve(Some("JMS"), Some("Receiver"), &p), Some("Q_OUT"));
    }

    #[test]
    fn test_type_key_beats_url_fallback() {
        let table = AddressKeyTable::default();
        let p = props(&[("endpointUrl", "https://x"), ("QueueName_inbound", "Q1")]);
        assert_eq!(table.resolve(Some("JMS"), Some("Sender"), &p), Some("Q1"));
    }

    #[test]
    fn test_unknown_direction_falls_back() {
        let table = AddressKeyTable::default();
        let p = props(&[("QueueName_inbound", "Q1"), ("brokerUrl", "tcp://b")]);
        assert_eq!(table.resolve(Some("JMS"), Some("Both"), &p), Some("tcp://b"));
        assert_eq!(table.resolve(Some("JMS"), None, &p), Some("tcp://b"));
    }

    #[test]
    fn test_unknown_type_uses_first_url_key() {
        let table = AddressKeyTable::default();
        let p = props(&[("Name", "n"), ("SomeUrlField", "X"), ("otherURL", "Y")]);
        assert_eq!(table.resolve(Some("Mail"), None, &p), Some("X"));
        assert_eq!(table.resolve(None, None, &p), Some("X"));
    }

    #[test]
    fn test_empty_candidate_value_still_counts() {
        let table = AddressKeyTable::default();
        let p = props(&[("address", ""), ("targetUrl", "https://x")]);
        assert_eq!(table.resolve(Some("ProcessDirect"), None, &p), Some(""));
    }

    #[test]
    fn test_fallback_skips_empty_values() {
        let table = AddressKeyTable::default();
        let p = props(&[("url", ""), ("proxyUrl", "http://p")]);
        assert_eq!(table.resolve(Some("Mail"), None, &p), Some("http://p"));
    }

    #[test]
    fn test_nothing_found() {
        let table = AddressKeyTable::default();
        let p = props(&[("Name", "n")]);
        assert_eq!(table.resolve(Some("HTTPS"), None, &p), None);
    }

    #[test]
    fn test_custom_entry_is_additive() {
        let table = AddressKeyTable::default().with_type("Mail", ["server", "host"]);
        let p = props(&[("host", "smtp.x"), ("mailUrl", "u")]);
        assert_eq!(table.resolve(Some("Mail"), None, &p), Some("smtp.x"));
        assert!(table.get("HTTPS").is_some());
    }

    #[test]
    fn test_candidate_order_is_declaration_order() {
        let table = AddressKeyTable::empty().with_type("X", ["first", "second"]);
        let p = props(&[("second", "2"), ("first", "1")]);
        assert_eq!(table.resolve(Some("X"), None, &p), Some("1"));
    }
}
