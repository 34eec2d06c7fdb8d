//! Matching strategy selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::normalize_name;
use crate::errors::ConfigError;

/// Order in which projection edges are offered to the greedy matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchingStrategy {
    /// Heavy-edge matching: descending weight.
    #[default]
    Hem,
    /// Light-edge matching: ascending weight.
    Lem,
    /// Random matching: seeded uniform permutation.
    Rm,
}

impl MatchingStrategy {
    pub const ALL: [MatchingStrategy; 3] = [Self::Hem, Self::Lem, Self::Rm];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hem => "hem",
            Self::Lem => "lem",
            Self::Rm => "rm",
        }
    }
}

impl FromStr for MatchingStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = normalize_name(s);
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == name)
            .ok_or_else(|| ConfigError::UnknownMatching(s.to_string()))
    }
}

impl fmt::Display for MatchingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
