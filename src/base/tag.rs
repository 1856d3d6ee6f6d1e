//! Namespace-agnostic tag matching.
//!
//! Flow documents declare arbitrary namespace prefixes (`bpmn2:messageFlow`,
//! `ifl:property`, ...) and some tools hand over Clark-notation names
//! (`{http://...}messageFlow`). Every tag comparison in the crate goes
//! through [`local_name`] so neither form leaks into traversal logic.

/// Return the local part of a qualified tag name.
///
/// Everything up to and including the last `:` or `}` is dropped. A tag
/// without a namespace separator is returned unchanged.
pub fn local_name(qualified: &str) -> &str {
    match qualified.rfind([':', '}']) {
        Some(pos) => &qualified[pos + 1..],
        None => qualified,
    }
}

/// Check whether a qualified tag has the given local name.
pub fn is_local(qualified: &str, expected: &str) -> bool {
    local_name(qualified) == expected
}
