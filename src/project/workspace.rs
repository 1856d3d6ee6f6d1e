use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::interchange::{InterchangeError, unpack_archive};

/// Scratch directory archives are unpacked into during a batch run.
///
/// Each archive gets its own numbered subdirectory. The whole directory is
/// removed when the workspace is dropped, including on early return or
/// unwinding.
pub struct ExtractionWorkspace {
    dir: TempDir,
    unpacked: usize,
}

impl ExtractionWorkspace {
    pub fn new() -> Result<Self, InterchangeError> {
        let dir = tempfile::Builder::new().prefix("iflowmap-").tempdir()?;
        tracing::debug!("Created extraction workspace {}", dir.path().display());
        Ok(Self { dir, unpacked: 0 })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Unpack an archive into a fresh subdirectory and return its path.
    pub fn unpack(&mut self, archive: &Path) -> Result<PathBuf, InterchangeError> {
        let stem = archive
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let dest = self.dir.path().join(format!("{:04}-{stem}", self.unpacked));
        self.unpacked += 1;

        unpack_archive(archive, &dest)?;
        Ok(dest)
    }

    /// Remove the workspace now, reporting any failure to do so.
    pub fn close(self) -> Result<(), InterchangeError> {
        let path = self.dir.path().to_path_buf();
        self.dir.close()?;
        tracing::debug!("Removed extraction workspace {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_removed_on_drop() {
        let path = {
            let workspace = ExtractionWorkspace::new().unwrap();
            workspace.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_workspace_close() {
        let workspace = ExtractionWorkspace::new().unwrap();
        let path = workspace.path().to_path_buf();
        assert!(path.is_dir());
        workspace.close().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_failed_unpack_still_advances() {
        let mut workspace = ExtractionWorkspace::new().unwrap();
        assert!(workspace.unpack(Path::new("/definitely/not/here.zip")).is_err());
        assert_eq!(workspace.unpacked, 1);
    }
}
