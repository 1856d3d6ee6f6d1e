//! Batch drivers: extract a directory of flow archives, link table files.

mod batch;
mod linking;
mod workspace;

pub use batch::{
    ArchiveOutcome, BatchReport, ExtractionRun, extract_archives, find_archives, run_extraction,
};
pub use linking::{LinkRun, find_link_inputs, link_file, linked_output_path};
pub use workspace::ExtractionWorkspace;
