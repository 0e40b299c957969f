// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while loading the question bank.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Frontmatter did not match the question schema: unknown difficulty,
    /// out-of-vocabulary tag, or a wrongly typed field
    #[error("bad frontmatter in {url}: {source}")]
    Frontmatter {
        url: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unknown difficulty '{0}' (expected Easy, Medium, or Hard)")]
    UnknownDifficulty(String),

    #[error("unknown tag '{0}'")]
    UnknownTag(String),
}
