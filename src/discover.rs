//! Module-file discovery
//!
//! Lists the files in one directory level that look like documentable
//! modules and derives bare module names from their file names. No source
//! code is read; discovery is purely a filename affair.

use std::fs;
use std::io;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, ScaffoldError};

/// Filename shape of a documentable module: a leading lowercase letter or
/// digit (which skips `__init__.py`, `_private.py` and the like), ending in
/// `.py`.
static MODULE_FILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9].*\.py$").expect("module filename pattern is valid")
});

/// List matching file names directly under `dir`, in directory-listing
/// order (not sorted).
///
/// A missing directory is not an error: it yields an empty list, and the
/// caller produces a well-formed but empty document tree.
pub fn module_files(dir: &Path) -> Result<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(ScaffoldError::io(dir, e)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ScaffoldError::io(dir, e))?;
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };
        if MODULE_FILE.is_match(file_name) {
            names.push(file_name.to_string());
        }
    }
    Ok(names)
}

/// Module name for the flat layout: the file name truncated at its first
/// dot, so `markov.py` becomes `markov` and `a.b.py` becomes `a`.
pub fn flat_name(file_name: &str) -> &str {
    match file_name.find('.') {
        Some(i) => &file_name[..i],
        None => file_name,
    }
}

/// Module name for the split layout: the file name with its `.py` suffix
/// stripped, so `a.b.py` becomes `a.b`.
pub fn module_name(file_name: &str) -> &str {
    file_name.strip_suffix(".py").unwrap_or(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn lists_lowercase_and_digit_leading_python_files() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "kalman.py");
        touch(dir.path(), "9sector.py");
        touch(dir.path(), "__init__.py");
        touch(dir.path(), "_private.py");
        touch(dir.path(), "Makefile");
        touch(dir.path(), "README.txt");

        let mut files = module_files(dir.path()).unwrap();
        files.sort();
        assert_eq!(files, vec!["9sector.py", "kalman.py"]);
    }

    #[test]
    fn missing_directory_yields_empty_list() {
        let dir = tempdir().unwrap();
        let files = module_files(&dir.path().join("does_not_exist")).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn does_not_descend_into_subdirectories() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("markov")).unwrap();
        touch(&dir.path().join("markov"), "core.py");
        touch(dir.path(), "kalman.py");

        let files = module_files(dir.path()).unwrap();
        assert_eq!(files, vec!["kalman.py"]);
    }

    #[test]
    fn flat_name_truncates_at_first_dot() {
        assert_eq!(flat_name("kalman.py"), "kalman");
        assert_eq!(flat_name("a.b.py"), "a");
        assert_eq!(flat_name("nodots"), "nodots");
    }

    #[test]
    fn module_name_strips_only_the_py_suffix() {
        assert_eq!(module_name("kalman.py"), "kalman");
        assert_eq!(module_name("a.b.py"), "a.b");
    }
}
