use std::fs;
use std::path::{Path, PathBuf};

use crate::base::constants::files;
use crate::interchange::{InterchangeError, read_table_from_path, write_table_to_path};
use crate::link::{LinkOptions, LinkSummary, link};

/// Result of linking one table file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRun {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    pub summary: LinkSummary,
}

/// Where the linked copy of `input` is written: `<stem>_with_links.csv`
/// beside it.
pub fn linked_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!(
        "{stem}{}.{}",
        files::LINKED_SUFFIX,
        files::TABLE_EXTENSION
    ))
}

/// List the `*.csv` files directly inside `dir` that are not themselves
/// linked output, sorted by path.
pub fn find_link_inputs(dir: &Path) -> Result<Vec<PathBuf>, InterchangeError> {
    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || !is_table(&path) || is_linked_output(&path) {
            continue;
        }
        inputs.push(path);
    }
    inputs.sort();
    Ok(inputs)
}

/// Read `input`, link it and write the result next to it.
///
/// A table with a bad header fails before anything is written.
pub fn link_file(input: &Path, options: &LinkOptions) -> Result<LinkRun, InterchangeError> {
    let table = read_table_from_path(input)?;
    let linked = link(&table, options)?;

    let output = linked_output_path(input);
    write_table_to_path(&output, &linked.table)?;
    tracing::debug!("Linked {} -> {}", input.display(), output.display());

    Ok(LinkRun {
        input: input.to_path_buf(),
        output,
        rows: linked.table.len(),
        summary: linked.summary,
    })
}

fn is_table(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(files::TABLE_EXTENSION))
}

fn is_linked_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|s| s.ends_with(files::LINKED_SUFFIX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_linked_output_path() {
        assert_eq!(
            linked_output_path(Path::new("/data/adapters.csv")),
            PathBuf::from("/data/adapters_with_links.csv")
        );
    }

    #[test]
    fn test_find_link_inputs_skips_outputs() {
        let dir = TempDir::new().unwrap();
        for name in ["b.csv", "a.CSV", "a_with_links.csv", "notes.txt"] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let inputs = find_link_inputs(dir.path()).unwrap();
        let names: Vec<_> = inputs
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.CSV", "b.csv"]);
    }
}
