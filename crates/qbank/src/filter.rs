// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Consumer-side filtering over the ordered question list.
//!
//! The rendering layer narrows the bank by topic, difficulty, and search
//! text; this module is the data half of that contract. Filtering never
//! reorders — it yields the matching subsequence of the loaded bank.

use crate::bank::Question;
use crate::difficulty::Difficulty;
use crate::tags::Tag;

/// Filter criteria chosen by the viewer.
///
/// Criteria are conjunctive. Within the tag set, a question matches when
/// it carries at least one selected tag; an empty set matches everything.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    pub tags: Vec<Tag>,
    pub difficulty: Option<Difficulty>,
    pub query: Option<String>,
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.difficulty.is_none() && self.query.is_none()
    }

    pub fn matches(&self, question: &Question) -> bool {
        if let Some(difficulty) = self.difficulty
            && question.difficulty != difficulty
        {
            return false;
        }
        if !self.tags.is_empty() && !self.tags.iter().any(|t| question.tags.contains(t)) {
            return false;
        }
        if let Some(query) = &self.query {
            let query = query.to_lowercase();
            if !query.is_empty() && !question.title.to_lowercase().contains(&query) {
                return false;
            }
        }
        true
    }
}

/// Apply a filter, preserving bank order.
pub fn apply<'a>(questions: &'a [Question], filter: &Filter) -> Vec<&'a Question> {
    questions.iter().filter(|q| filter.matches(q)).collect()
}
