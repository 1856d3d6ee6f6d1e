//! Flow bundle archives.
//!
//! A flow bundle is a ZIP archive exported by the integration designer.
//! Only three of its files matter here:
//!
//! ```text
//! Order_Flow.zip
//! ├── META-INF/
//! │   └── MANIFEST.MF                 # Bundle identity and version
//! └── src/main/resources/
//!     ├── parameters.prop             # Externalized parameters (optional)
//!     └── scenarioflows/integrationflow/
//!         └── Order_Flow.iflw         # BPMN flow document
//! ```
//!
//! Archives are unpacked to disk with [`unpack_archive`] and the files are
//! then located by walking the unpacked tree ([`FlowBundle::from_dir`]).

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use zip::ZipArchive;

use crate::base::constants::files;

use super::manifest::Manifest;
use super::parameters::ParameterTable;
use super::xml::{XmlElement, parse_document};
use super::InterchangeError;

/// Unpack a flow bundle archive into `dest`.
pub fn unpack_archive(archive: &Path, dest: &Path) -> Result<(), InterchangeError> {
    let file = File::open(archive)?;
    let mut zip = ZipArchive::new(BufReader::new(file)).map_err(|e| {
        InterchangeError::archive(format!("Failed to open {}: {e}", archive.display()))
    })?;

    fs::create_dir_all(dest)?;
    zip.extract(dest).map_err(|e| {
        InterchangeError::archive(format!("Failed to unpack {}: {e}", archive.display()))
    })?;

    tracing::debug!(
        "Unpacked {} ({} entries) into {}",
        archive.display(),
        zip.len(),
        dest.display()
    );
    Ok(())
}

/// Paths of the files that make up an unpacked flow bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleFiles {
    pub flow: Option<PathBuf>,
    pub parameters: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
}

impl BundleFiles {
    /// Walk `root` and record the first flow, parameter and manifest file.
    ///
    /// Entries are visited in file-name order so the choice is stable when a
    /// bundle carries more than one flow document.
    pub fn locate(root: &Path) -> Result<Self, InterchangeError> {
        let mut found = Self::default();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();

            if found.flow.is_none() && has_extension(path, files::FLOW_EXTENSION) {
                found.flow = Some(path.to_path_buf());
            } else if found.parameters.is_none() && entry.file_name() == files::PARAMETERS {
                found.parameters = Some(path.to_path_buf());
            } else if found.manifest.is_none() && is_manifest(path) {
                found.manifest = Some(path.to_path_buf());
            }
        }

        Ok(found)
    }
}

/// Everything the extractor needs from one flow bundle.
#[derive(Debug, Clone)]
pub struct FlowBundle {
    /// Location of the flow document.
    pub flow_path: PathBuf,
    /// Flow name, taken from the flow document's file stem.
    pub flow_name: String,
    /// Parsed flow document.
    pub document: XmlElement,
    /// Externalized parameters; empty when the bundle has none.
    pub parameters: ParameterTable,
    pub manifest: Manifest,
}

impl FlowBundle {
    /// Load a bundle from an unpacked directory.
    ///
    /// A missing flow document or manifest is an error. A missing parameter
    /// file yields an empty [`ParameterTable`].
    pub fn from_dir(root: &Path) -> Result<Self, InterchangeError> {
        let found = BundleFiles::locate(root)?;

        let flow_path = found.flow.ok_or_else(|| {
            InterchangeError::missing_file(format!("*.{} in {}", files::FLOW_EXTENSION, root.display()))
        })?;
        let manifest_path = found.manifest.ok_or_else(|| {
            InterchangeError::missing_file(format!(
                "{}/{} in {}",
                files::MANIFEST_DIR,
                files::MANIFEST,
                root.display()
            ))
        })?;

        let flow_name = flow_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let document = parse_document(&fs::read(&flow_path)?).map_err(|e| match e {
            InterchangeError::Xml(msg) => {
                InterchangeError::xml(format!("{}: {msg}", flow_path.display()))
            }
            other => other,
        })?;
        let manifest = Manifest::parse(&fs::read_to_string(&manifest_path)?);

        let parameters = match &found.parameters {
            Some(path) => ParameterTable::parse(&fs::read_to_string(path)?),
            None => {
                tracing::debug!("No {} in {}", files::PARAMETERS, root.display());
                ParameterTable::new()
            }
        };

        tracing::debug!(
            "Loaded flow '{}' from {} ({} parameters)",
            flow_name,
            flow_path.display(),
            parameters.len()
        );

        Ok(Self {
            flow_path,
            flow_name,
            document,
            parameters,
            manifest,
        })
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

fn is_manifest(path: &Path) -> bool {
    path.file_name().is_some_and(|n| n == files::MANIFEST)
        && path
            .parent()
            .and_then(Path::file_name)
            .is_some_and(|d| d == files::MANIFEST_DIR)
}
