//! Locating contract files on disk.
//!
//! Contract folders typically hold several drafts of the same award. These
//! helpers find candidate files by extension and pick the authoritative one.

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Recursively collect files under `dir` whose extension contains `ext`.
///
/// Matching is case-insensitive and an empty `ext` matches nothing.
/// Symlinked directories are not followed. Results are sorted by path.
pub fn search_files(dir: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    if ext.is_empty() {
        return Ok(found);
    }
    let ext = ext.to_lowercase();

    let mut stack = vec![dir.to_path_buf()];
    while let Some(current) = stack.pop() {
        for entry in fs::read_dir(&current)? {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type()?.is_dir() {
                stack.push(path);
            } else if path.is_file() && extension_matches(&path, &ext) {
                found.push(path);
            }
        }
    }

    found.sort();
    log::debug!("found {} '{}' files under {}", found.len(), ext, dir.display());
    Ok(found)
}

fn extension_matches(path: &Path, ext: &str) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase().contains(ext))
        .unwrap_or(false)
}

/// First file whose stem mentions "executed" or "signed".
pub fn find_authoritative_version(dir: &Path, ext: &str) -> Result<Option<PathBuf>> {
    let files = search_files(dir, ext)?;
    Ok(files.into_iter().find(|f| {
        f.file_stem()
            .map(|s| {
                let stem = s.to_string_lossy().to_lowercase();
                stem.contains("executed") || stem.contains("signed")
            })
            .unwrap_or(false)
    }))
}

/// All matching files that share the latest modification time.
///
/// Returns an empty list when nothing matches.
pub fn most_recently_modified(dir: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    let mut stamped: Vec<(PathBuf, SystemTime)> = Vec::new();
    for path in search_files(dir, ext)? {
        let modified = fs::symlink_metadata(&path)?.modified()?;
        stamped.push((path, modified));
    }

    let latest = match stamped.iter().map(|(_, t)| *t).max() {
        Some(t) => t,
        None => return Ok(Vec::new()),
    };
    Ok(stamped
        .into_iter()
        .filter(|(_, t)| *t == latest)
        .map(|(p, _)| p)
        .collect())
}
