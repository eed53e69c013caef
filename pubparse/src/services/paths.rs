//! Input discovery and output location derivation

use crate::error::PathError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Resolved input location and the XML files found there
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSet {
    /// Absolute input path as given (file or directory)
    pub path: PathBuf,
    /// Directory the files are relative to
    pub root: PathBuf,
    pub is_dir: bool,
    /// Input files, sorted
    pub files: Vec<PathBuf>,
}

/// Make `path` absolute against the current directory
pub fn absolutize(path: &Path) -> Result<PathBuf, PathError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|source| PathError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(cwd.join(path))
}

/// Resolve the input argument to a list of XML files
///
/// A file is a single input. A directory is walked recursively for `.xml`
/// files (extension compared case-insensitively).
pub fn resolve_inputs(path: &Path) -> Result<InputSet, PathError> {
    let path = absolutize(path)?;
    if !path.exists() {
        return Err(PathError::NotFound(path));
    }

    if path.is_file() {
        let root = path
            .parent()
            .ok_or_else(|| PathError::NoParent(path.clone()))?
            .to_path_buf();
        return Ok(InputSet {
            files: vec![path.clone()],
            path,
            root,
            is_dir: false,
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(&path).follow_links(true) {
        let entry = entry?;
        if entry.file_type().is_file() && is_xml(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(PathError::NoInputs(path));
    }

    info!(input = %path.display(), count = files.len(), "Input files discovered");
    Ok(InputSet {
        root: path.clone(),
        path,
        is_dir: true,
        files,
    })
}

fn is_xml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("xml"))
        .unwrap_or(false)
}

/// Default output directory next to the input
///
/// `<parent>/processed_<name>` for a directory input and
/// `<grandparent>/processed_<parent name>` for a file input. Spaces in the
/// derived name become underscores.
pub fn default_output_dir(input: &Path, is_dir: bool) -> Result<PathBuf, PathError> {
    let dir = if is_dir {
        input
    } else {
        input
            .parent()
            .ok_or_else(|| PathError::NoParent(input.to_path_buf()))?
    };

    let name = dir
        .file_name()
        .ok_or_else(|| PathError::NoParent(input.to_path_buf()))?
        .to_string_lossy()
        .replace(' ', "_");
    let parent = dir
        .parent()
        .ok_or_else(|| PathError::NoParent(input.to_path_buf()))?;

    Ok(parent.join(format!("processed_{}", name)))
}

/// Output location for every input
///
/// Each input's path relative to `input_root` is mirrored under
/// `output_dir` with a `.json` extension.
pub fn output_paths(
    inputs: &[PathBuf],
    input_root: &Path,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, PathError> {
    inputs
        .iter()
        .map(|input| {
            let relative = input
                .strip_prefix(input_root)
                .map_err(|_| PathError::OutsideRoot {
                    path: input.clone(),
                    root: input_root.to_path_buf(),
                })?;
            Ok(output_dir.join(relative).with_extension("json"))
        })
        .collect()
}

/// Create the directory and any missing parents
pub fn ensure_dir(path: &Path) -> Result<(), PathError> {
    std::fs::create_dir_all(path).map_err(|source| PathError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Create (or truncate) every output file to confirm it is writable
pub fn prepare_outputs(paths: &[PathBuf]) -> Result<(), PathError> {
    for path in paths {
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        std::fs::File::create(path).map_err(|source| PathError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(output = %path.display(), "Output prepared");
    }
    Ok(())
}
