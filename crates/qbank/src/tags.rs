// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! The closed topic vocabulary for practice questions.
//!
//! Tags are reference data, not derived: the bank recognizes exactly the
//! labels below, and frontmatter carrying anything else fails to parse.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// One canonical topic label.
///
/// Serialized form is the display label (e.g. `"Dynamic Programming"`,
/// `"Heap (Priority Queue)"`), matching what question authors write in
/// frontmatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    Array,
    String,
    #[serde(rename = "Hash Table")]
    HashTable,
    #[serde(rename = "Dynamic Programming")]
    DynamicProgramming,
    Math,
    Sorting,
    Greedy,
    #[serde(rename = "Depth-First Search")]
    DepthFirstSearch,
    #[serde(rename = "Binary Search")]
    BinarySearch,
    Tree,
    Matrix,
    #[serde(rename = "Two Pointers")]
    TwoPointers,
    #[serde(rename = "Breadth-First Search")]
    BreadthFirstSearch,
    #[serde(rename = "Bit Manipulation")]
    BitManipulation,
    #[serde(rename = "Heap (Priority Queue)")]
    HeapPriorityQueue,
    Stack,
    Graph,
    #[serde(rename = "Linked List")]
    LinkedList,
    #[serde(rename = "Sliding Window")]
    SlidingWindow,
    Backtracking,
    #[serde(rename = "Union Find")]
    UnionFind,
    Recursion,
}

impl Tag {
    /// Every tag in the vocabulary, in canonical listing order.
    pub const ALL: [Tag; 22] = [
        Tag::Array,
        Tag::String,
        Tag::HashTable,
        Tag::DynamicProgramming,
        Tag::Math,
        Tag::Sorting,
        Tag::Greedy,
        Tag::DepthFirstSearch,
        Tag::BinarySearch,
        Tag::Tree,
        Tag::Matrix,
        Tag::TwoPointers,
        Tag::BreadthFirstSearch,
        Tag::BitManipulation,
        Tag::HeapPriorityQueue,
        Tag::Stack,
        Tag::Graph,
        Tag::LinkedList,
        Tag::SlidingWindow,
        Tag::Backtracking,
        Tag::UnionFind,
        Tag::Recursion,
    ];

    /// Display label, the exact form used in frontmatter.
    pub fn label(&self) -> &'static str {
        match self {
            Tag::Array => "Array",
            Tag::String => "String",
            Tag::HashTable => "Hash Table",
            Tag::DynamicProgramming => "Dynamic Programming",
            Tag::Math => "Math",
            Tag::Sorting => "Sorting",
            Tag::Greedy => "Greedy",
            Tag::DepthFirstSearch => "Depth-First Search",
            Tag::BinarySearch => "Binary Search",
            Tag::Tree => "Tree",
            Tag::Matrix => "Matrix",
            Tag::TwoPointers => "Two Pointers",
            Tag::BreadthFirstSearch => "Breadth-First Search",
            Tag::BitManipulation => "Bit Manipulation",
            Tag::HeapPriorityQueue => "Heap (Priority Queue)",
            Tag::Stack => "Stack",
            Tag::Graph => "Graph",
            Tag::LinkedList => "Linked List",
            Tag::SlidingWindow => "Sliding Window",
            Tag::Backtracking => "Backtracking",
            Tag::UnionFind => "Union Find",
            Tag::Recursion => "Recursion",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tag {
    type Err = Error;

    /// Parse a tag leniently for CLI use: case and punctuation are
    /// ignored, so `dynamic-programming` matches `Dynamic Programming`.
    fn from_str(s: &str) -> std::result::Result<Self, Error> {
        let want = normalize(s);
        Tag::ALL
            .iter()
            .copied()
            .find(|tag| normalize(tag.label()) == want)
            .ok_or_else(|| Error::UnknownTag(s.to_string()))
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
