// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! # Qbank — typed loader for the practice-question bank
//!
//! Turns discovered markdown documents into an ordered list of practice
//! questions. Frontmatter is validated once at the ingestion boundary:
//! the difficulty scale and the tag vocabulary are closed enums, so an
//! out-of-set value fails the load naming the offending document instead
//! of producing an undefined sort position downstream.
//!
//! The loader itself is a pure, synchronous transform — discovery and
//! frontmatter parsing belong to the `content` crate.

mod bank;
mod difficulty;
mod error;
mod filter;
mod tags;

pub use bank::{Finding, Question, Severity, lint, load};
pub use difficulty::Difficulty;
pub use error::{Error, Result};
pub use filter::{Filter, apply};
pub use tags::Tag;
