//! The two layout generators
//!
//! Both operations share nothing and follow the same straight-line shape:
//! discover module files, render templates, write files. Every write is a
//! full overwrite; failures propagate and abort the run with no cleanup of
//! partial output.

use std::fs;
use std::path::{Path, PathBuf};

use crate::discover;
use crate::error::{Result, ScaffoldError};
use crate::groups::{Group, GROUPS};
use crate::templates;

/// Where to read the package from and where to put the generated tree.
///
/// Defaults to the fixed relative paths the tool is normally run with from
/// the docs directory: `../quantecon` and `source`.
#[derive(Debug, Clone)]
pub struct ScaffoldSpec {
    pub package_root: PathBuf,
    pub output_root: PathBuf,
}

impl ScaffoldSpec {
    pub fn new() -> Self {
        ScaffoldSpec {
            package_root: PathBuf::from("../quantecon"),
            output_root: PathBuf::from("source"),
        }
    }

    pub fn with_package_root(mut self, path: impl AsRef<Path>) -> Self {
        self.package_root = path.as_ref().to_path_buf();
        self
    }

    pub fn with_output_root(mut self, path: impl AsRef<Path>) -> Self {
        self.output_root = path.as_ref().to_path_buf();
        self
    }
}

impl Default for ScaffoldSpec {
    fn default() -> Self {
        Self::new()
    }
}

/// Flat layout: one stub per base-level module under `<output>/modules/`,
/// plus a single `index.rst` toctree over all of them.
///
/// Module order follows the directory listing and is not sorted.
pub fn flat_layout(spec: &ScaffoldSpec) -> Result<()> {
    let files = discover::module_files(&spec.package_root)?;

    let modules_dir = spec.output_root.join("modules");
    fs::create_dir_all(&modules_dir).map_err(|e| ScaffoldError::io(&modules_dir, e))?;

    for file in &files {
        let name = discover::flat_name(file);
        let path = modules_dir.join(format!("{}.rst", name));
        write_doc(&path, &templates::module_stub("quantecon", name))?;
    }

    let entries: Vec<String> = files
        .iter()
        .map(|file| format!("modules/{}", discover::flat_name(file)))
        .collect();
    let index = templates::flat_index(&entries.join("\n   "));
    write_doc(&spec.output_root.join("index.rst"), &index)
}

/// Split layout: per-group stub directories, per-group indexes, and the
/// static top-level index listing the five groups.
pub fn split_layout(spec: &ScaffoldSpec) -> Result<()> {
    let mut listings: Vec<(&Group, Vec<String>)> = Vec::with_capacity(GROUPS.len());
    for group in GROUPS.iter() {
        listings.push((group, group_members(group, &spec.package_root)?));
    }

    for (group, members) in &listings {
        let dir = spec.output_root.join(group.label);
        fs::create_dir_all(&dir).map_err(|e| ScaffoldError::io(&dir, e))?;
        for name in members {
            let path = dir.join(format!("{}.rst", name));
            write_doc(&path, &templates::module_stub(group.module_path, name))?;
        }
    }

    write_doc(&spec.output_root.join("index.rst"), templates::SPLIT_INDEX)?;

    for (group, members) in &listings {
        let files = templates::toctree_entries(group.label, members);
        let index = templates::group_index(&group.title(), &files);
        write_doc(&spec.output_root.join(format!("{}.rst", group.label)), &index)?;
    }

    Ok(())
}

/// Discover one group's member names: glob, strip the extension, drop the
/// excluded entry if the group has one, then alphabetize.
fn group_members(group: &Group, package_root: &Path) -> Result<Vec<String>> {
    let dir = group.source_dir(package_root);
    let mut members: Vec<String> = discover::module_files(&dir)?
        .iter()
        .map(|file| discover::module_name(file).to_string())
        .collect();

    if let Some(excluded) = group.exclude {
        let position = members.iter().position(|m| m == excluded).ok_or(
            ScaffoldError::MissingModule {
                group: group.label,
                module: excluded,
            },
        )?;
        members.remove(position);
    }

    members.sort();
    Ok(members)
}

fn write_doc(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| ScaffoldError::io(path, e))
}
