use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use crate::config::WatchSet;
use crate::snapshot::{Change, ChangeKind, Snapshot};

const RULE: &str = "==================================================";
const THIN_RULE: &str = "--------------------------------------------------";

/// Machine-readable form of a one-shot scan, emitted by `scan --json`.
///
/// Files are keyed by path relative to the scanned root; an unreadable file
/// serializes as `null`.
#[derive(Debug, Serialize)]
pub struct ScanSummary {
    pub root: String,
    pub file_count: usize,
    pub unreadable: usize,
    pub files: BTreeMap<String, Option<String>>,
}

impl ScanSummary {
    pub fn new(watch: &WatchSet, snapshot: &Snapshot) -> Self {
        let files: BTreeMap<String, Option<String>> = snapshot
            .iter()
            .map(|(path, digest)| (path.clone(), digest.clone()))
            .collect();
        Self {
            root: watch.root.display().to_string(),
            file_count: files.len(),
            unreadable: files.values().filter(|d| d.is_none()).count(),
            files,
        }
    }
}

/// Print the result of a one-shot scan.
///
/// - `json = true`: emit a pretty-printed JSON object to stdout.
/// - `json = false`: emit a human-readable summary; with `verbose`, one line
///   per file with a truncated fingerprint.
///
/// Warnings always go to stderr so the stdout stream stays clean for
/// downstream JSON consumers.
pub fn print_scan_summary(watch: &WatchSet, snapshot: &Snapshot, verbose: bool, json: bool) {
    let summary = ScanSummary::new(watch, snapshot);

    if json {
        match serde_json::to_string_pretty(&summary) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("error serialising scan summary: {}", e),
        }
        return;
    }

    println!("Scanned {}", summary.root);
    println!("Found {} watched file(s).", summary.file_count);

    if verbose {
        for (path, digest) in &summary.files {
            match digest {
                Some(d) => println!("  {}  {}", &d[..12], path),
                None => println!("  {:12}  {}", "unreadable", path),
            }
        }
    }

    if summary.unreadable > 0 {
        eprintln!("  {} file(s) could not be read", summary.unreadable);
    }
}

/// Print the startup banner for the watch loop.
pub fn print_watch_banner(watch: &WatchSet, file_count: usize, interval: Duration) {
    println!("Watching {}", watch.root.display());
    println!(
        "{} file(s), polling every {}s",
        file_count,
        interval.as_secs(),
    );
    println!("Extensions: .{}", watch.extension_list().join(" ."));
    println!("Press Ctrl+C to stop.");
    println!("{THIN_RULE}");
}

/// Print one line per detected change, deletions annotated.
pub fn print_changes(changes: &[Change]) {
    println!("Detected changes in:");
    for change in changes {
        match change.kind {
            ChangeKind::Modified => println!("  {}", change.path),
            ChangeKind::Deleted => println!("  {} (deleted)", change.path),
        }
    }
}

/// Print the fixed manual-reload instructions.
///
/// There is no reload protocol behind this; the human performs the reload.
pub fn print_reload_instructions(name: &str) {
    println!();
    println!("{RULE}");
    println!("FILES CHANGED - RELOAD NEEDED");
    println!("{RULE}");
    println!();
    println!("To reload the extension:");
    println!("  1. Open chrome://extensions");
    println!("  2. Click the reload icon for '{name}'");
    println!();
    println!("Tip: keep the extensions page open in a pinned tab");
    println!("for quick reloading during development.");
    println!("{THIN_RULE}");
    println!();
}

/// Printed when the watch loop is cancelled.
pub fn print_farewell() {
    println!();
    println!("Watcher stopped.");
}
