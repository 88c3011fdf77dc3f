/// Integration test suite. Exercises the compiled `ext-dev` binary against
/// throwaway extension fixtures.
///
/// All tests invoke the binary via subprocess. The `CARGO_BIN_EXE_ext-dev`
/// environment variable is automatically set by Cargo during `cargo test` to
/// point to the compiled binary for the current profile.
///
/// The watch loop itself is not driven here, since that would require killing
/// a long-running child at the right moment. Its scan/diff cycle and its
/// cancellation path are covered by the unit tests in `src/watcher.rs`
/// (including paused-clock loop tests), and `scan` exercises the same
/// snapshot builder end to end.
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_ext-dev"))
}

/// A small extension checkout: four watched files, one unwatched file, one
/// ignored file, and a config naming the extension.
fn extension_fixture() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    let root = dir.path();
    std::fs::write(root.join("manifest.json"), r#"{"name": "Klue"}"#).unwrap();
    std::fs::write(root.join("popup.html"), "<html></html>").unwrap();
    std::fs::write(root.join("popup.js"), "document.title = 'Klue';").unwrap();
    std::fs::write(root.join("style.css"), "body { margin: 0 }").unwrap();
    std::fs::write(root.join("README.md"), "# Klue").unwrap();
    std::fs::write(root.join("generated.js"), "// built artifact").unwrap();
    std::fs::write(
        root.join("ext-dev.toml"),
        r#"
name = "Klue"
ignore = ["generated.js"]
"#,
    )
    .unwrap();
    dir
}

/// Run an ext-dev command and assert it exits successfully.
/// Returns stdout as a String.
fn run_success(args: &[&str], cwd: &Path) -> String {
    let out = Command::new(binary())
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to invoke ext-dev binary");
    let stdout = String::from_utf8_lossy(&out.stdout).to_string();
    let stderr = String::from_utf8_lossy(&out.stderr).to_string();
    assert!(
        out.status.success(),
        "command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
        args,
        out.status,
        stdout,
        stderr
    );
    stdout
}

/// Run an ext-dev command and assert it exits with a non-zero status.
/// Returns (stdout, stderr) as Strings.
fn run_failure(args: &[&str], cwd: &Path) -> (String, String) {
    let out = Command::new(binary())
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to invoke ext-dev binary");
    let stdout = String::from_utf8_lossy(&out.stdout).to_string();
    let stderr = String::from_utf8_lossy(&out.stderr).to_string();
    assert!(
        !out.status.success(),
        "command {:?} expected to fail but exited successfully\nstdout: {}\nstderr: {}",
        args,
        stdout,
        stderr
    );
    (stdout, stderr)
}

// ---------------------------------------------------------------------------
// scan
// ---------------------------------------------------------------------------

/// scan counts the watched files and nothing else: four source files, with
/// README.md unwatched and generated.js ignored via ext-dev.toml.
#[test]
fn test_scan_counts_watched_files() {
    let fixture = extension_fixture();
    let stdout = run_success(&["scan", "."], fixture.path());
    assert!(
        stdout.contains("Found 4 watched file(s)."),
        "unexpected scan output:\n{}",
        stdout
    );
}

#[test]
fn test_scan_verbose_lists_paths_with_fingerprints() {
    let fixture = extension_fixture();
    let stdout = run_success(&["scan", "--verbose", "."], fixture.path());
    assert!(stdout.contains("popup.js"), "stdout: {}", stdout);
    assert!(stdout.contains("style.css"), "stdout: {}", stdout);
    assert!(!stdout.contains("README.md"), "stdout: {}", stdout);
    assert!(!stdout.contains("generated.js"), "stdout: {}", stdout);
}

#[test]
fn test_scan_json_output() {
    let fixture = extension_fixture();
    let stdout = run_success(&["scan", "--json", "."], fixture.path());
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("scan --json output is not valid JSON");

    assert_eq!(parsed["file_count"], 4);
    assert_eq!(parsed["unreadable"], 0);
    let files = parsed["files"].as_object().expect("files object");
    assert!(files.contains_key("manifest.json"));
    assert!(files.contains_key("popup.js"));
    assert!(!files.contains_key("README.md"));
    assert!(!files.contains_key("generated.js"));

    // Fingerprints are hex blake3 digests.
    let digest = files["popup.js"].as_str().expect("digest string");
    assert_eq!(digest.len(), 64);
    assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_scan_is_deterministic() {
    let fixture = extension_fixture();
    let first = run_success(&["scan", "--json", "."], fixture.path());
    let second = run_success(&["scan", "--json", "."], fixture.path());
    assert_eq!(first, second);
}

#[test]
fn test_scan_missing_root_fails() {
    let fixture = extension_fixture();
    let (_stdout, stderr) = run_failure(&["scan", "no-such-dir"], fixture.path());
    assert!(
        stderr.contains("not a directory"),
        "stderr should explain the failure:\n{}",
        stderr
    );
}

// ---------------------------------------------------------------------------
// icons
// ---------------------------------------------------------------------------

#[test]
fn test_icons_writes_default_sizes() {
    let fixture = extension_fixture();
    run_success(&["icons", "out"], fixture.path());

    for size in [16, 32, 48, 128] {
        let path = fixture.path().join("out").join(format!("icon{size}.png"));
        assert!(path.exists(), "missing {}", path.display());
    }
}

#[test]
fn test_icons_honors_custom_sizes() {
    let fixture = extension_fixture();
    run_success(&["icons", "--sizes", "16,64", "out"], fixture.path());

    let out = fixture.path().join("out");
    assert!(out.join("icon16.png").exists());
    assert!(out.join("icon64.png").exists());
    assert!(!out.join("icon128.png").exists());
}

#[test]
fn test_icons_output_is_decodable_png() {
    let fixture = extension_fixture();
    run_success(&["icons", "--sizes", "32", "out"], fixture.path());

    let img = image::open(fixture.path().join("out").join("icon32.png"))
        .expect("generated icon should decode")
        .to_rgba8();
    assert_eq!(img.dimensions(), (32, 32));
}

// ---------------------------------------------------------------------------
// CLI surface
// ---------------------------------------------------------------------------

#[test]
fn test_help_lists_subcommands() {
    let fixture = extension_fixture();
    let stdout = run_success(&["--help"], fixture.path());
    assert!(stdout.contains("watch"));
    assert!(stdout.contains("scan"));
    assert!(stdout.contains("icons"));
}
