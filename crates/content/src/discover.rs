// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Content discovery — glob-match question documents under the bank root
//! and parse each into a [`RawDocument`].
//!
//! Matches are sorted by path before parsing, so the document order handed
//! to the loader is deterministic across platforms and filesystems.

use serde_yaml::Mapping;
use std::path::{Path, PathBuf};
use wax::Glob;

use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::frontmatter;

/// One discovered markdown document, frontmatter already parsed and URL
/// already resolved. This is the input contract of the question-bank
/// loader: it trusts these values as given.
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// Canonical site URL (base_url-prefixed, `.md` → `.html`)
    pub url: String,
    /// Filesystem path to the source document
    pub path: PathBuf,
    /// Parsed frontmatter mapping (empty when the document has none)
    pub frontmatter: Mapping,
}

/// Discover all question documents for a site.
pub fn discover(config: &SiteConfig) -> Result<Vec<RawDocument>> {
    let root = &config.bank.root;
    if !root.is_dir() {
        return Err(Error::RootNotADirectory(root.clone()));
    }

    let glob = Glob::new(&config.bank.pattern).map_err(|e| Error::Pattern {
        pattern: config.bank.pattern.clone(),
        reason: e.to_string(),
    })?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in glob.walk(root) {
        let entry = entry.map_err(|e| Error::Walk(e.to_string()))?;
        if entry.file_type().is_file() {
            paths.push(entry.path().to_path_buf());
        }
    }
    paths.sort();

    log::info!(
        "content discovery: {} documents under {}",
        paths.len(),
        root.display()
    );

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let raw = std::fs::read_to_string(&path).map_err(|e| Error::Read {
            path: path.clone(),
            source: e,
        })?;
        let mapping = frontmatter::parse(&path, &raw)?;
        let url = url_for(root, &path, &config.site.base_url);
        log::debug!("discovered {} -> {}", path.display(), url);
        documents.push(RawDocument {
            url,
            path,
            frontmatter: mapping,
        });
    }
    Ok(documents)
}

/// Derive the canonical site URL for a document path.
///
/// The URL is the root-relative path with the `.md` suffix replaced by
/// `.html`; an `index.md` collapses to its directory root. Uniqueness is
/// inherited from path uniqueness under the root.
pub fn url_for(root: &Path, path: &Path, base_url: &str) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    let (dirs, file) = parts.split_at(parts.len().saturating_sub(1));

    let mut slug = dirs.join("/");
    let stem = file
        .first()
        .map(|name| name.strip_suffix(".md").unwrap_or(name))
        .unwrap_or("");

    if stem == "index" {
        if !slug.is_empty() {
            slug.push('/');
        }
    } else {
        if !slug.is_empty() {
            slug.push('/');
        }
        slug.push_str(stem);
        slug.push_str(".html");
    }

    prefix_base(base_url, &slug)
}

/// Join the site base URL and a root-relative slug.
fn prefix_base(base_url: &str, slug: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if slug.is_empty() {
        format!("{}/", base)
    } else {
        format!("{}/{}", base, slug)
    }
}
