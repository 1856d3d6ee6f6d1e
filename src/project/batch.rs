use std::fs;
use std::path::{Path, PathBuf};

use crate::base::constants::files;
use crate::extract::Extractor;
use crate::interchange::{AdapterRecord, FlowBundle, InterchangeError, write_adapter_records_to_path};

use super::workspace::ExtractionWorkspace;

/// What happened to one archive of a batch.
#[derive(Debug)]
pub struct ArchiveOutcome {
    pub archive: PathBuf,
    /// Number of adapters extracted, or why the archive was skipped.
    pub result: Result<usize, InterchangeError>,
}

impl ArchiveOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a batch run plus the records of every successful archive.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<ArchiveOutcome>,
    records: Vec<AdapterRecord>,
}

impl BatchReport {
    /// Records in archive order, then document order.
    pub fn records(&self) -> &[AdapterRecord] {
        &self.records
    }

    pub fn total_records(&self) -> usize {
        self.records.len()
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &ArchiveOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &ArchiveOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }
}

/// Result of [`run_extraction`].
#[derive(Debug)]
pub struct ExtractionRun {
    pub report: BatchReport,
    /// Table written, or `None` when no adapters were found.
    pub output: Option<PathBuf>,
}

/// List the `*.zip` files directly inside `dir`, sorted by path.
pub fn find_archives(dir: &Path) -> Result<Vec<PathBuf>, InterchangeError> {
    let mut archives = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_archive = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(files::ARCHIVE_EXTENSION));
        if is_archive && path.is_file() {
            archives.push(path);
        }
    }
    archives.sort();
    Ok(archives)
}

/// Extract every archive in turn.
///
/// A failing archive is recorded in the report and skipped; it never stops
/// the batch. Only failing to set up the scratch workspace is an error.
pub fn extract_archives(
    archives: &[PathBuf],
    extractor: &Extractor,
) -> Result<BatchReport, InterchangeError> {
    let mut workspace = ExtractionWorkspace::new()?;
    let mut report = BatchReport::default();

    for archive in archives {
        let result = extract_archive(&mut workspace, archive, extractor);
        let result = match result {
            Ok(records) => {
                tracing::debug!("{}: {} adapter(s)", archive.display(), records.len());
                let count = records.len();
                report.records.extend(records);
                Ok(count)
            }
            Err(e) => {
                tracing::warn!("Skipping {}: {}", archive.display(), e);
                Err(e)
            }
        };
        report.outcomes.push(ArchiveOutcome {
            archive: archive.clone(),
            result,
        });
    }

    if let Err(e) = workspace.close() {
        tracing::warn!("Failed to remove extraction workspace: {}", e);
    }
    Ok(report)
}

fn extract_archive(
    workspace: &mut ExtractionWorkspace,
    archive: &Path,
    extractor: &Extractor,
) -> Result<Vec<AdapterRecord>, InterchangeError> {
    let root = workspace.unpack(archive)?;
    let bundle = FlowBundle::from_dir(&root)?;
    Ok(extractor.extract_bundle(&bundle))
}

/// Extract all archives in `dir` and write the combined table to `output`.
///
/// Nothing is written when no adapter was found in any archive.
pub fn run_extraction(
    dir: &Path,
    output: &Path,
    extractor: &Extractor,
) -> Result<ExtractionRun, InterchangeError> {
    let archives = find_archives(dir)?;
    tracing::info!("Found {} archive(s) in {}", archives.len(), dir.display());

    let report = extract_archives(&archives, extractor)?;
    if report.records().is_empty() {
        return Ok(ExtractionRun {
            report,
            output: None,
        });
    }

    write_adapter_records_to_path(output, report.records())?;
    Ok(ExtractionRun {
        report,
        output: Some(output.to_path_buf()),
    })
}
