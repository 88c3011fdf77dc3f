use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration file name looked up at the watched root.
pub const CONFIG_FILE: &str = "ext-dev.toml";

/// Extensions watched when the config does not override them: the file
/// types a browser extension actually ships.
const DEFAULT_EXTENSIONS: &[&str] = &["js", "html", "css", "json"];

/// Configuration loaded from `ext-dev.toml` at the watched root.
#[derive(Debug, Deserialize, Default)]
pub struct WatchConfig {
    /// Extension display name, used in the reload instructions.
    pub name: Option<String>,
    /// File extensions to watch, without the leading dot.
    pub extensions: Option<Vec<String>>,
    /// File names to skip entirely, wherever they appear in the tree.
    pub ignore: Option<Vec<String>>,
    /// Additional glob patterns to exclude from scans.
    pub exclude: Option<Vec<String>>,
}

impl WatchConfig {
    /// Load configuration from `ext-dev.toml` in the given root directory.
    ///
    /// Returns a default (empty) configuration if the file does not exist or
    /// cannot be parsed.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str::<Self>(&contents) {
                Ok(config) => config,
                Err(err) => {
                    eprintln!("warning: failed to parse {CONFIG_FILE}: {err}. Using defaults.");
                    Self::default()
                }
            },
            Err(err) => {
                eprintln!("warning: failed to read {CONFIG_FILE}: {err}. Using defaults.");
                Self::default()
            }
        }
    }
}

/// The resolved, immutable description of what to watch: root directory,
/// extension filter, ignored file names, and exclude patterns.
#[derive(Debug, Clone)]
pub struct WatchSet {
    pub root: PathBuf,
    /// Extension display name shown in the reload instructions.
    pub name: String,
    extensions: HashSet<String>,
    ignored: HashSet<String>,
    exclude: Vec<String>,
}

impl WatchSet {
    /// Resolve a loaded config into a WatchSet rooted at `root`.
    ///
    /// The config file itself is always in the ignore set.
    pub fn new(root: PathBuf, config: WatchConfig) -> Self {
        let extensions: HashSet<String> = config
            .extensions
            .unwrap_or_else(|| DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect())
            .into_iter()
            .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
            .collect();

        let mut ignored: HashSet<String> = config.ignore.unwrap_or_default().into_iter().collect();
        ignored.insert(CONFIG_FILE.to_string());

        Self {
            root,
            name: config.name.unwrap_or_else(|| "extension".to_string()),
            extensions,
            ignored,
            exclude: config.exclude.unwrap_or_default(),
        }
    }

    /// Returns true if `path` has one of the watched extensions.
    pub fn matches_extension(&self, path: &Path) -> bool {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => self.extensions.contains(&ext.to_ascii_lowercase()),
            None => false,
        }
    }

    /// Returns true if `path`'s file name is in the ignore set.
    pub fn is_ignored(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|n| self.ignored.contains(n))
            .unwrap_or(false)
    }

    /// Returns true if `path` matches any exclude glob pattern, either
    /// against the full path or against a single component.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude {
            if let Ok(matcher) = glob::Pattern::new(pattern)
                && matcher.matches(&path_str)
            {
                return true;
            }
            for component in path.components() {
                if let Some(s) = component.as_os_str().to_str()
                    && let Ok(matcher) = glob::Pattern::new(pattern)
                    && matcher.matches(s)
                {
                    return true;
                }
            }
        }

        false
    }

    /// Watched extensions sorted for display.
    pub fn extension_list(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.extensions.iter().map(String::as_str).collect();
        exts.sort_unstable();
        exts
    }
}
