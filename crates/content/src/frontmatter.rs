// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Frontmatter extraction — the fenced YAML block at the top of a
//! markdown document:
//!
//! ```markdown
//! ---
//! title: Two Sum
//! difficulty: Easy
//! ---
//!
//! Body text...
//! ```

use serde_yaml::Mapping;
use std::path::Path;

use crate::error::{Error, Result};

/// Split a document into its frontmatter block and body.
///
/// The opening `---` must be the very first bytes of the document and the
/// closing `---` must start a line. Returns `(None, content)` when there
/// is no frontmatter. CRLF line endings are tolerated.
pub fn split(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content.strip_prefix("---") else {
        return (None, content);
    };
    let Some(rest) = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
    else {
        return (None, content);
    };

    match rest.find("\n---") {
        Some(end) => {
            let block = rest[..end].trim_end_matches('\r');
            let body = &rest[end + 4..];
            let body = body.strip_prefix('\r').unwrap_or(body);
            let body = body.strip_prefix('\n').unwrap_or(body);
            (Some(block), body)
        }
        None => (None, content),
    }
}

/// Parse a document's frontmatter into a YAML mapping.
///
/// A document with no frontmatter block (or an empty one) yields an empty
/// mapping; a block that is not valid YAML is a hard error naming the file.
pub fn parse(path: &Path, content: &str) -> Result<Mapping> {
    let (block, _body) = split(content);
    match block {
        Some(yaml) if !yaml.trim().is_empty() => {
            serde_yaml::from_str(yaml).map_err(|e| Error::Frontmatter {
                path: path.to_path_buf(),
                source: e,
            })
        }
        _ => Ok(Mapping::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    #[test]
    fn test_split() {
        let (block, body) = split("---\ntitle: Hi\n---\n\n# Body");
        assert_eq!(block, Some("title: Hi"));
        assert_eq!(body, "\n# Body");
    }

    #[test]
    fn test_split_none() {
        let (block, body) = split("# Just markdown");
        assert!(block.is_none());
        assert_eq!(body, "# Just markdown");
    }

    #[test]
    fn test_split_unterminated() {
        let (block, body) = split("---\ntitle: Hi\n\n# Body");
        assert!(block.is_none());
        assert_eq!(body, "---\ntitle: Hi\n\n# Body");
    }

    #[test]
    fn test_split_crlf() {
        let (block, body) = split("---\r\ntitle: Hi\r\n---\r\nBody");
        assert_eq!(block, Some("title: Hi"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_requires_leading_fence() {
        // A fence later in the document is not frontmatter
        let (block, _) = split("intro\n---\ntitle: Hi\n---\n");
        assert!(block.is_none());
    }

    #[test]
    fn test_parse_mapping() {
        let mapping = parse(
            Path::new("q.md"),
            "---\ntitle: Two Sum\ndifficulty: Easy\n---\nbody",
        )
        .expect("parse");
        assert_eq!(
            mapping.get(&Value::from("title")),
            Some(&Value::from("Two Sum"))
        );
        assert_eq!(
            mapping.get(&Value::from("difficulty")),
            Some(&Value::from("Easy"))
        );
    }

    #[test]
    fn test_parse_empty_block() {
        let mapping = parse(Path::new("q.md"), "---\n---\nbody").expect("parse");
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_parse_no_block() {
        let mapping = parse(Path::new("q.md"), "# heading only").expect("parse");
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = parse(Path::new("q.md"), "---\ntitle: [unclosed\n---\n");
        assert!(err.is_err());
    }
}
