// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Site configuration — parsed from `site.yaml` at the project root.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Top-level site configuration.
///
/// ```yaml
/// site:
///   title: "Documentation"
///   base_url: "/"
///
/// bank:
///   root: "resources/dsa-question-bank"
///   pattern: "questions/*.md"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteMeta,
    #[serde(default)]
    pub bank: BankConfig,
}

/// Site-wide metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMeta {
    pub title: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "/".to_string()
}

/// Where the question bank lives and which files belong to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankConfig {
    /// Directory the glob pattern is resolved against. A relative root is
    /// resolved against the config file's directory.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Glob pattern for question documents, relative to `root`
    #[serde(default = "default_pattern")]
    pub pattern: String,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_pattern() -> String {
    "questions/*.md".to_string()
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            pattern: default_pattern(),
        }
    }
}

impl SiteConfig {
    /// Load a config file and resolve its relative paths.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut config: SiteConfig =
            serde_yaml::from_str(&raw).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                source: e,
            })?;

        if config.bank.root.is_relative()
            && let Some(parent) = path.parent()
        {
            config.bank.root = parent.join(&config.bank.root);
        }
        Ok(config)
    }
}
