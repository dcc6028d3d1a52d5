use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use crate::config::Config;

fn build_include_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob =
            Glob::new(pattern).with_context(|| format!("invalid include pattern: {}", pattern))?;
        builder.add(glob);
    }
    builder.build().context("cannot build include patterns")
}

/// Expand command-line paths into the source files to process.
///
/// Files named explicitly are always kept. Directories are walked honoring
/// `.gitignore`, skipping `exclude_dirs`, and keeping file names matching
/// `include`. The result is sorted and free of duplicates.
pub fn collect_files(paths: &[PathBuf], config: &Config) -> Result<Vec<PathBuf>> {
    let include = build_include_set(&config.include)?;
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }
        if !path.is_dir() {
            anyhow::bail!("no such file or directory: {}", path.display());
        }

        for entry in WalkBuilder::new(path).build() {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    log::warn!("skipping unreadable entry: {}", err);
                    continue;
                }
            };
            let file = entry.path();
            if !file.is_file() || is_excluded(file, path, &config.exclude_dirs) {
                continue;
            }
            let matches = file
                .file_name()
                .map(|name| include.is_match(Path::new(name)))
                .unwrap_or(false);
            if matches {
                files.push(file.to_path_buf());
            }
        }
    }

    files.sort();
    files.dedup();
    log::debug!("{} source files collected", files.len());
    Ok(files)
}

/// Does `file` live under a directory named in `exclude_dirs` below `root`?
fn is_excluded(file: &Path, root: &Path, exclude_dirs: &[String]) -> bool {
    let relative = file.strip_prefix(root).unwrap_or(file);
    relative.parent().is_some_and(|parent| {
        parent.components().any(|c| {
            c.as_os_str()
                .to_str()
                .map(|s| exclude_dirs.iter().any(|dir| dir == s))
                .unwrap_or(false)
        })
    })
}
