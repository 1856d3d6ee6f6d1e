//! `{{name}}` placeholder substitution in adapter addresses.

use std::sync::LazyLock;

use regex::Regex;

use crate::interchange::ParameterTable;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{\{(.*?)\}\}").expect("placeholder pattern is valid"));

/// Result of substituting parameters into an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub address: String,
    /// At least one placeholder was seen, whether or not it resolved.
    pub parametrized: bool,
}

/// Replace every `{{name}}` in `address` with its value from `parameters`.
///
/// Names are trimmed before lookup. Placeholders without a value are kept
/// verbatim. Matches are taken left to right and never overlap.
pub fn substitute(address: &str, parameters: &ParameterTable) -> Substitution {
    let mut out = String::with_capacity(address.len());
    let mut last = 0;
    let mut parametrized = false;

    for caps in PLACEHOLDER.captures_iter(address) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        parametrized = true;
        out.push_str(&address[last..whole.start()]);
        match parameters.get(name.as_str().trim()) {
            Some(value) => out.push_str(value),
            None => {
                tracing::debug!("Unresolved parameter '{}' in '{}'", name.as_str(), address);
                out.push_str(whole.as_str());
            }
        }
        last = whole.end();
    }
    out.push_str(&address[last..]);

    Substitution {
        address: out,
        parametrized,
    }
}
