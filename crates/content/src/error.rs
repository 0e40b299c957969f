// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Errors raised by content discovery and frontmatter parsing.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Content root does not exist or is not a directory
    #[error("content root is not a directory: {0}")]
    RootNotADirectory(PathBuf),

    /// The configured glob pattern failed to compile
    #[error("invalid glob pattern '{pattern}': {reason}")]
    Pattern { pattern: String, reason: String },

    /// A step of the directory walk failed
    #[error("walking content root: {0}")]
    Walk(String),

    #[error("reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Frontmatter block is present but is not valid YAML
    #[error("bad frontmatter in {path}: {source}")]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("reading config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
