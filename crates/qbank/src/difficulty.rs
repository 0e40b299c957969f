// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! The closed difficulty scale for practice questions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Question difficulty — a closed, ordered set.
///
/// The derived ordering is the display order of the bank: `Easy` sorts
/// before `Medium` before `Hard`. A document that omits the field gets
/// `Medium`; serde rejects any value outside the set.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Sort rank: Easy=1, Medium=2, Hard=3.
    pub fn rank(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// All difficulties in rank order.
    pub fn all() -> [Difficulty; 3] {
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(Error::UnknownDifficulty(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_order() {
        assert!(Difficulty::Easy.rank() < Difficulty::Medium.rank());
        assert!(Difficulty::Medium.rank() < Difficulty::Hard.rank());
        assert_eq!(Difficulty::Easy.rank(), 1);
        assert_eq!(Difficulty::Hard.rank(), 3);
    }

    #[test]
    fn test_default_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Easy".parse::<Difficulty>().expect("parse"), Difficulty::Easy);
        assert_eq!("hard".parse::<Difficulty>().expect("parse"), Difficulty::Hard);
        assert!("Unknown".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_serde_rejects_unknown() {
        assert_eq!(
            serde_yaml::from_str::<Difficulty>("Easy").expect("parse"),
            Difficulty::Easy
        );
        assert!(serde_yaml::from_str::<Difficulty>("Impossible").is_err());
    }
}
