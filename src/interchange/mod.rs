//! Interchange formats for integration flow bundles.
//!
//! This module reads the files that make up an exported flow bundle and
//! reads/writes the adapter tables the pipeline produces:
//!
//! - **Bundle** - ZIP archive unpacking and file location
//! - **XML** - Flow document tree (`*.iflw`)
//! - **Manifest** - `META-INF/MANIFEST.MF` headers
//! - **Parameters** - `parameters.prop` name/value pairs
//! - **Table** - CSV adapter tables
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  Bundle ZIP  │
//! └──────┬───────┘
//!        │ unpack_archive
//!        ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │                    FlowBundle::from_dir                   │
//! │  - document: XmlElement      (*.iflw)                    │
//! │  - parameters: ParameterTable (parameters.prop)          │
//! │  - manifest: Manifest        (META-INF/MANIFEST.MF)      │
//! └──────────────────────────────────────────────────────────┘
//!        │ extract
//!        ▼
//! ┌──────────────┐  write_adapter_records   ┌──────────────┐
//! │AdapterRecord │ ───────────────────────▶ │     CSV      │
//! └──────────────┘                          └──────────────┘
//! ```

mod bundle;
mod error;
mod manifest;
pub mod model;
mod parameters;
mod table;
mod xml;

pub use bundle::{BundleFiles, FlowBundle, unpack_archive};
pub use error::InterchangeError;
pub use manifest::Manifest;
pub use model::{AdapterRecord, RecordTable};
pub use parameters::ParameterTable;
pub use table::{
    read_table, read_table_from_path, write_adapter_records, write_adapter_records_to_path,
    write_table, write_table_to_path,
};
pub use xml::{Descendants, XmlElement, parse_document};
