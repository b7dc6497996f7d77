pub mod rewrite;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::CanonicalConfig;
use rewrite::LinkRewriter;

const HTML_SUFFIX: &str = ".html";

/// Outcome of one canonical link pass.
#[derive(Debug, Default)]
pub struct UpdateReport {
    pub scanned: usize,
    pub updated: Vec<PathBuf>,
}

impl UpdateReport {
    pub fn updated_count(&self) -> usize {
        self.updated.len()
    }

    pub fn summary(&self) -> String {
        if self.updated.is_empty() {
            "No files required updating.".to_string()
        } else {
            format!("Successfully updated {} files.", self.updated.len())
        }
    }
}

/// Recursively collect `*.html` files under each directory.
/// A missing or unreadable directory is an error. Symlinked files are
/// included (and their targets rewritten); symlinked dirs are not entered.
pub fn find_html_files(dirs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for dir in dirs {
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
            if entry.path().is_file() && is_html(entry.path()) {
                files.push(entry.into_path());
            }
        }
    }
    Ok(files)
}

fn is_html(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(HTML_SUFFIX))
        .unwrap_or(false)
}

/// Rewrite obsolete URLs in every HTML file under the configured directories.
///
/// Files are only written when their content changes. Each written file is
/// announced on stdout as `Updated: <path>`.
pub async fn update_canonical_links(config: &CanonicalConfig) -> Result<UpdateReport> {
    let rewriter = LinkRewriter::new(&config.canonical_url, config.obsolete_urls.clone());

    // walkdir is blocking
    let dirs = config.search_dirs.clone();
    let files = tokio::task::spawn_blocking(move || find_html_files(&dirs))
        .await
        .context("spawn_blocking join failed")??;
    info!(count = files.len(), "HTML files found");

    let mut report = UpdateReport {
        scanned: files.len(),
        updated: Vec::new(),
    };

    for path in files {
        let content = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {} as UTF-8", path.display()))?;

        let Some(rewritten) = rewriter.rewrite(&content) else {
            debug!(path = %path.display(), "no obsolete links");
            continue;
        };

        tokio::fs::write(&path, rewritten)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Updated: {}", path.display());
        report.updated.push(path);
    }

    Ok(report)
}
