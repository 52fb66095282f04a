//! Find the read files below a query path.

use crate::role::ReadRole;
use anyhow::{Context, Result};
use itertools::Itertools;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Reasons a query path cannot supply any input.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// The query path does not exist.
    #[error("The input path {path:?} does not exist.")]
    PathDoesntExist {
        /// The query path as given
        path: PathBuf,
    },

    /// The query path exists but holds no regular files.
    #[error("No input data: no files were found under {path:?}.")]
    NoInputData {
        /// The query path as given
        path: PathBuf,
    },
}

/// One read file together with the role inferred from its name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InputSpec {
    path: PathBuf,
    role: ReadRole,
}

impl InputSpec {
    /// Classify the file at `path`. The path is kept exactly as given.
    pub fn new(path: impl Into<PathBuf>) -> InputSpec {
        let path = path.into();
        let role = ReadRole::from_path(&path);
        InputSpec { path, role }
    }

    /// Path of the read file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Role inferred from the file name
    pub fn role(&self) -> ReadRole {
        self.role
    }

    /// The same file, passed as single-end reads.
    pub fn as_single(self) -> InputSpec {
        InputSpec {
            role: ReadRole::Single,
            ..self
        }
    }
}

/// Find every input below `query`.
///
/// A file is returned as the only input. A directory is walked recursively
/// and every regular file is returned; symlinks and directories are skipped.
/// Entries are visited in file-name order so the result is stable. Paths are
/// joined onto `query` as given, so a relative query yields relative paths.
///
/// The walk does not descend into `exclude`, which is matched after resolving
/// symlinks and `..`, so an output directory kept below the query is never
/// read back as input. An `exclude` that does not exist yet excludes nothing.
pub fn find_inputs(query: impl AsRef<Path>, exclude: Option<&Path>) -> Result<Vec<InputSpec>> {
    let query = query.as_ref();
    let meta = match std::fs::metadata(query) {
        Ok(meta) => meta,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(InputError::PathDoesntExist {
                path: query.to_path_buf(),
            }
            .into());
        }
        Err(err) => return Err(err).with_context(|| query.display().to_string()),
    };

    if meta.is_file() {
        log::debug!("query {} is a single file", query.display());
        return Ok(vec![InputSpec::new(query)]);
    }

    let exclude = exclude.and_then(|path| path.canonicalize().ok());
    let files: Vec<PathBuf> = WalkDir::new(query)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| match &exclude {
            Some(excluded) => !is_same_path(entry.path(), excluded),
            None => true,
        })
        .filter_ok(|entry| entry.file_type().is_file())
        .map_ok(walkdir::DirEntry::into_path)
        .try_collect()
        .with_context(|| format!("error listing files under {}", query.display()))?;

    if files.is_empty() {
        return Err(InputError::NoInputData {
            path: query.to_path_buf(),
        }
        .into());
    }

    log::debug!("found {} files under {}", files.len(), query.display());
    Ok(files.into_iter().map(InputSpec::new).collect())
}

/// True if `path` resolves to `canonical`. Only entries with the same file
/// name are resolved.
fn is_same_path(path: &Path, canonical: &Path) -> bool {
    path.file_name() == canonical.file_name()
        && path.canonicalize().map_or(false, |p| p == canonical)
}
