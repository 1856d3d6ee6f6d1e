//! Foundation pieces for the iflowmap toolchain.
//!
//! This module provides the primitives used throughout the crate:
//! - [`local_name`] - Namespace-agnostic tag matching
//! - Domain constants (tag names, property keys, table columns)
//!
//! This module has NO dependencies on other iflowmap modules.

pub mod constants;
mod tag;

pub use tag::{is_local, local_name};
