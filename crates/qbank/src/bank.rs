// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! The question bank — typed records loaded from document frontmatter.
//!
//! [`load`] is the build-time transform: parse every document's
//! frontmatter once at the boundary, apply defaults, then stable-sort by
//! difficulty rank. [`lint`] is the authoring-time companion: it walks
//! the same documents but collects every defect instead of stopping at
//! the first.

use serde::{Deserialize, Serialize};

use content::RawDocument;

use crate::difficulty::Difficulty;
use crate::error::{Error, Result};
use crate::tags::Tag;

/// One practice question, ready for the rendering layer.
///
/// The field shape is the data contract consumed by the presentational
/// component and must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub title: String,
    pub url: String,
    pub difficulty: Difficulty,
    pub tags: Vec<Tag>,
}

/// Frontmatter schema for a question document.
///
/// Every field tolerates absence and explicit null; unknown difficulty or
/// tag values fail the parse rather than flowing downstream. Extra keys
/// (dates, descriptions) are ignored.
#[derive(Debug, Deserialize)]
struct QuestionFrontmatter {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    difficulty: Option<Difficulty>,
    #[serde(default)]
    tags: Option<Vec<Tag>>,
}

/// Transform discovered documents into the ordered question list.
///
/// Pure and run-to-completion: no I/O, no suspension points. The output
/// holds one question per input document, ordered Easy-first by
/// difficulty rank; equal-rank questions keep their input order.
pub fn load(documents: &[RawDocument]) -> Result<Vec<Question>> {
    let mut questions = Vec::with_capacity(documents.len());
    for doc in documents {
        let question = question_from(doc)?;
        if question.title.is_empty() {
            log::warn!("question {} has a missing or empty title", doc.url);
        }
        questions.push(question);
    }

    questions.sort_by_key(|q| q.difficulty.rank());

    log::info!("question bank loaded: {} questions", questions.len());
    Ok(questions)
}

fn question_from(doc: &RawDocument) -> Result<Question> {
    let value = serde_yaml::Value::Mapping(doc.frontmatter.clone());
    let fm: QuestionFrontmatter =
        serde_yaml::from_value(value).map_err(|e| Error::Frontmatter {
            url: doc.url.clone(),
            source: e,
        })?;

    Ok(Question {
        title: fm.title.unwrap_or_default(),
        url: doc.url.clone(),
        difficulty: fm.difficulty.unwrap_or_default(),
        tags: fm.tags.unwrap_or_default(),
    })
}

/// Severity of a [`Finding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Authoring defect the loader tolerates (e.g. missing title)
    Warning,
    /// Defect that fails [`load`] (e.g. unknown difficulty or tag)
    Error,
}

/// One validation finding for a single document.
#[derive(Debug, Clone)]
pub struct Finding {
    pub url: String,
    pub severity: Severity,
    pub message: String,
}

/// Validate every document independently.
///
/// Unlike [`load`], which fails on the first bad document, this collects
/// all findings so a content author sees the full picture in one pass.
pub fn lint(documents: &[RawDocument]) -> Vec<Finding> {
    let mut findings = Vec::new();
    for doc in documents {
        match question_from(doc) {
            Ok(question) => {
                if question.title.is_empty() {
                    findings.push(Finding {
                        url: doc.url.clone(),
                        severity: Severity::Warning,
                        message: "missing or empty title".to_string(),
                    });
                }
            }
            Err(Error::Frontmatter { source, .. }) => findings.push(Finding {
                url: doc.url.clone(),
                severity: Severity::Error,
                message: source.to_string(),
            }),
            Err(other) => findings.push(Finding {
                url: doc.url.clone(),
                severity: Severity::Error,
                message: other.to_string(),
            }),
        }
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Mapping;

    fn doc(url: &str, frontmatter_yaml: &str) -> RawDocument {
        let mapping: Mapping = if frontmatter_yaml.trim().is_empty() {
            Mapping::new()
        } else {
            serde_yaml::from_str(frontmatter_yaml).expect("test frontmatter")
        };
        RawDocument {
            url: url.to_string(),
            path: std::path::PathBuf::from(url.trim_start_matches('/')),
            frontmatter: mapping,
        }
    }

    #[test]
    fn test_load_preserves_length() {
        let docs = vec![
            doc("/q/a.html", "title: A"),
            doc("/q/b.html", "title: B\ndifficulty: Hard"),
            doc("/q/c.html", "title: C\ndifficulty: Easy"),
        ];
        let questions = load(&docs).expect("load");
        assert_eq!(questions.len(), docs.len());
    }

    #[test]
    fn test_load_sorts_by_rank() {
        let docs = vec![
            doc("/q/h.html", "title: H\ndifficulty: Hard"),
            doc("/q/e.html", "title: E\ndifficulty: Easy"),
            doc("/q/m.html", "title: M\ndifficulty: Medium"),
        ];
        let questions = load(&docs).expect("load");
        let order: Vec<_> = questions.iter().map(|q| q.difficulty).collect();
        assert_eq!(
            order,
            vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
        );
        for pair in questions.windows(2) {
            assert!(pair[0].difficulty.rank() <= pair[1].difficulty.rank());
        }
    }

    #[test]
    fn test_missing_difficulty_defaults_to_medium() {
        let questions = load(&[doc("/q/a.html", "title: A")]).expect("load");
        assert_eq!(questions[0].difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_null_difficulty_defaults_to_medium() {
        let questions = load(&[doc("/q/a.html", "title: A\ndifficulty:")]).expect("load");
        assert_eq!(questions[0].difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_missing_tags_default_to_empty() {
        let questions = load(&[doc("/q/a.html", "title: A")]).expect("load");
        assert!(questions[0].tags.is_empty());
    }

    #[test]
    fn test_tags_keep_authored_order_and_duplicates() {
        let questions = load(&[doc(
            "/q/a.html",
            "title: A\ntags:\n  - Graph\n  - Array\n  - Graph",
        )])
        .expect("load");
        assert_eq!(questions[0].tags, vec![Tag::Graph, Tag::Array, Tag::Graph]);
    }

    #[test]
    fn test_equal_rank_keeps_input_order() {
        let docs = vec![
            doc("/q/first.html", "title: First\ndifficulty: Easy"),
            doc("/q/hard.html", "title: Wall\ndifficulty: Hard"),
            doc("/q/second.html", "title: Second\ndifficulty: Easy"),
        ];
        let questions = load(&docs).expect("load");
        assert_eq!(questions[0].title, "First");
        assert_eq!(questions[1].title, "Second");
        assert_eq!(questions[2].title, "Wall");
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        let err = load(&[doc("/q/bad.html", "title: Bad\ndifficulty: Unknown")]);
        match err {
            Err(Error::Frontmatter { url, .. }) => assert_eq!(url, "/q/bad.html"),
            other => panic!("expected frontmatter error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let err = load(&[doc("/q/bad.html", "title: Bad\ntags: [Quantum Vibes]")]);
        assert!(err.is_err());
    }

    #[test]
    fn test_missing_title_is_not_fatal() {
        let questions = load(&[doc("/q/untitled.html", "difficulty: Easy")]).expect("load");
        assert_eq!(questions[0].title, "");
    }

    #[test]
    fn test_extra_frontmatter_keys_are_ignored() {
        let questions = load(&[doc(
            "/q/a.html",
            "title: A\ndate: 2025-01-01\ndescription: extra",
        )])
        .expect("load");
        assert_eq!(questions[0].title, "A");
    }

    #[test]
    fn test_json_shape_is_stable() {
        let questions = load(&[doc(
            "/q/two-sum.html",
            "title: Two Sum\ndifficulty: Easy\ntags: [Array, Hash Table]",
        )])
        .expect("load");
        let json = serde_json::to_value(&questions).expect("to json");
        assert_eq!(
            json,
            serde_json::json!([{
                "title": "Two Sum",
                "url": "/q/two-sum.html",
                "difficulty": "Easy",
                "tags": ["Array", "Hash Table"],
            }])
        );
    }

    #[test]
    fn test_lint_collects_all_findings() {
        let docs = vec![
            doc("/q/good.html", "title: Fine\ndifficulty: Easy"),
            doc("/q/untitled.html", "difficulty: Medium"),
            doc("/q/bad.html", "title: Bad\ndifficulty: Impossible"),
        ];
        let findings = lint(&docs);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].url, "/q/untitled.html");
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!(findings[1].url, "/q/bad.html");
        assert_eq!(findings[1].severity, Severity::Error);
    }

    #[test]
    fn test_lint_clean_bank_is_empty() {
        let docs = vec![doc("/q/a.html", "title: A\ntags: [Tree]")];
        assert!(lint(&docs).is_empty());
    }
}
