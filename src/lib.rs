//! # iflowmap
//!
//! Adapter metadata extraction and call-graph linking for packaged
//! integration flows.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project      → Batch drivers (archive directories, table files)
//!   ↓
//! link         → Sender/receiver matching over adapter tables
//!   ↓
//! extract      → Adapter records from flow documents
//!   ↓
//! interchange  → Bundle archives, XML, manifest, parameters, CSV
//!   ↓
//! base         → Tag matching, domain constants
//! ```

// ============================================================================
// MODULES (dependency order: base → interchange → extract → link → project)
// ============================================================================

/// Foundation: namespace-agnostic tag matching, constants
pub mod base;

/// Flow bundle formats and adapter tables
pub mod interchange;

/// Extraction engine: properties, address resolution, substitution
pub mod extract;

/// Linking engine: sender → receiver call graph
pub mod link;

/// Batch runs over archives and table files
pub mod project;

// Re-export the pipeline entry points
pub use base::local_name;
pub use extract::{AddressKeyTable, ExtractOptions, Extractor, extract, substitute};
pub use interchange::{AdapterRecord, InterchangeError, Manifest, ParameterTable, RecordTable};
pub use link::{LinkOptions, LinkSummary, LinkedTable, link, normalize_address};
