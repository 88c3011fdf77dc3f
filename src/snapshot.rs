use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::config::WatchSet;
use crate::walker;

/// The complete mapping of watched file paths (relative to the watch root)
/// to content fingerprints, captured at one point in time.
///
/// A fingerprint is the blake3 digest of the file's raw bytes, hex-encoded.
/// `None` records a file that was enumerated but could not be read.
/// Snapshots are rebuilt wholesale every poll cycle and never mutated.
pub type Snapshot = HashMap<String, Option<String>>;

/// One reported difference between two snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    /// Path relative to the watch root.
    pub path: String,
    pub kind: ChangeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// The file is new or its content differs from the previous snapshot.
    /// New and changed files are deliberately reported identically: the
    /// downstream action (reload the extension) is the same for both.
    Modified,
    /// The file existed in the previous snapshot and is gone.
    Deleted,
}

/// Fingerprint a single file's raw bytes.
///
/// Read failures (deleted mid-scan, permission denied) map to `None` so one
/// unreadable file never aborts a whole scan. The next poll cycle naturally
/// re-attempts; no retry happens here.
pub fn fingerprint(path: &Path) -> Option<String> {
    fs::read(path)
        .ok()
        .map(|bytes| blake3::hash(&bytes).to_hex().to_string())
}

/// Build a full snapshot of the watched tree.
///
/// Fails only when the root itself cannot be enumerated.
pub fn build_snapshot(watch: &WatchSet, verbose: bool) -> anyhow::Result<Snapshot> {
    let files = walker::collect_watched_files(watch, verbose)?;

    let mut snapshot = Snapshot::with_capacity(files.len());
    for rel in files {
        let digest = fingerprint(&watch.root.join(&rel));
        snapshot.insert(rel.to_string_lossy().into_owned(), digest);
    }

    Ok(snapshot)
}

/// Compare two snapshots.
///
/// Emits `Modified` for every path in `current` that is absent from
/// `previous` or whose fingerprint differs, then `Deleted` for every path
/// in `previous` that is absent from `current`. A path that is unreadable
/// on both sides is unchanged; a readable-to-unreadable transition (or the
/// reverse) counts as a modification.
///
/// Modifications come before deletions; within each group the order follows
/// snapshot iteration and carries no meaning.
pub fn diff(previous: &Snapshot, current: &Snapshot) -> Vec<Change> {
    let mut changes = Vec::new();

    for (path, digest) in current {
        match previous.get(path) {
            Some(prev) if prev == digest => {}
            _ => changes.push(Change {
                path: path.clone(),
                kind: ChangeKind::Modified,
            }),
        }
    }

    for path in previous.keys() {
        if !current.contains_key(path) {
            changes.push(Change {
                path: path.clone(),
                kind: ChangeKind::Deleted,
            });
        }
    }

    changes
}
