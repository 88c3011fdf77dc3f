use std::path::PathBuf;

use anyhow::bail;

use crate::config::WatchSet;

/// Walk the watched root and collect every file eligible for fingerprinting.
///
/// Respects `.gitignore` rules and skips hidden files, then applies the
/// WatchSet's extension filter, ignore-name set, and exclude patterns.
/// Returned paths are relative to the watched root.
///
/// When `verbose` is true, each collected path is printed to stderr.
///
/// Fails only when the root itself is not a directory; unreadable entries
/// inside the tree produce a warning and are skipped.
pub fn collect_watched_files(watch: &WatchSet, verbose: bool) -> anyhow::Result<Vec<PathBuf>> {
    if !watch.root.is_dir() {
        bail!("watch root {} is not a directory", watch.root.display());
    }

    let walker = ignore::WalkBuilder::new(&watch.root)
        .standard_filters(true)
        // Read .gitignore files even when the directory is not inside a git
        // repository, so exclusions work for standalone extension checkouts.
        .require_git(false)
        .build();

    let mut files = Vec::new();

    for result in walker {
        let entry = match result {
            Ok(e) => e,
            Err(err) => {
                eprintln!("warning: {err}");
                continue;
            }
        };

        let path = entry.path();

        if entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false) {
            continue;
        }

        if !watch.matches_extension(path) {
            continue;
        }

        if watch.is_ignored(path) {
            continue;
        }

        if watch.is_excluded(path) {
            continue;
        }

        let rel = path.strip_prefix(&watch.root).unwrap_or(path).to_path_buf();

        if verbose {
            eprintln!("{}", rel.display());
        }

        files.push(rel);
    }

    Ok(files)
}
