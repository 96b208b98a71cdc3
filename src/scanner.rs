//! Source tree scanner.
//!
//! Walks the source directory and collects the recordings eligible for
//! sorting: files whose name starts with a configured prefix and whose
//! extension is one of the configured file types.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Filter deciding which files are picked up.
#[derive(Debug, Clone)]
pub struct Eligibility {
    prefixes: Vec<String>,
    extensions: Vec<String>,
}

impl Eligibility {
    /// Build from configured prefixes and extensions. Extensions may be
    /// given with or without the leading dot and match case-insensitively.
    pub fn new(prefixes: &[String], extensions: &[String]) -> Self {
        Self {
            prefixes: prefixes.to_vec(),
            extensions: extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
        }
    }

    /// Whether `path` should be sorted.
    pub fn accepts(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };

        let prefix_ok = self.prefixes.is_empty()
            || self.prefixes.iter().any(|p| name.starts_with(p.as_str()));

        let extension_ok = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| self.extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
            .unwrap_or(false);

        prefix_ok && extension_ok
    }
}

/// Collect eligible files under `root`, sorted by path.
pub fn scan_source(root: &Path, eligibility: &Eligibility) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        anyhow::bail!("Source path does not exist or is not a directory: {:?}", root);
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            let accepted = eligibility.accepts(path);
            if !accepted {
                debug!("Ignoring {:?}", path);
            }
            accepted
        })
        .collect();

    files.sort();
    info!("Found {} files to process in {:?}", files.len(), root);

    Ok(files)
}
