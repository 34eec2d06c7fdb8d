//! Similarity measure selection for one-mode projection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::normalize_name;
use crate::errors::ConfigError;

/// Closed set of similarity formulas between two same-layer vertices.
///
/// Every formula is a function of the two neighbor sets and, for the
/// weighted variants, the edge weights towards shared neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityMeasure {
    Weight,
    #[default]
    CommonNeighbors,
    WeightedCommonNeighbors,
    Salton,
    PreferentialAttachment,
    Jaccard,
    AdamicAdar,
    ResourceAllocation,
    Sorensen,
    HubPromoted,
    HubDepressed,
    LeichtHolmeNewman,
}

impl SimilarityMeasure {
    pub const ALL: [SimilarityMeasure; 12] = [
        Self::Weight,
        Self::CommonNeighbors,
        Self::WeightedCommonNeighbors,
        Self::Salton,
        Self::PreferentialAttachment,
        Self::Jaccard,
        Self::AdamicAdar,
        Self::ResourceAllocation,
        Self::Sorensen,
        Self::HubPromoted,
        Self::HubDepressed,
        Self::LeichtHolmeNewman,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::CommonNeighbors => "common_neighbors",
            Self::WeightedCommonNeighbors => "weighted_common_neighbors",
            Self::Salton => "salton",
            Self::PreferentialAttachment => "preferential_attachment",
            Self::Jaccard => "jaccard",
            Self::AdamicAdar => "adamic_adar",
            Self::ResourceAllocation => "resource_allocation",
            Self::Sorensen => "sorensen",
            Self::HubPromoted => "hub_promoted",
            Self::HubDepressed => "hub_depressed",
            Self::LeichtHolmeNewman => "leicht_holme_newman",
        }
    }

    /// Comma-separated list of every accepted name.
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for SimilarityMeasure {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = normalize_name(s);
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == name)
            .ok_or_else(|| ConfigError::UnknownSimilarity {
                name: s.to_string(),
                expected: Self::names(),
            })
    }
}

impl fmt::Display for SimilarityMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_canonical_name() {
        for measure in SimilarityMeasure::ALL {
            assert_eq!(measure.as_str().parse::<SimilarityMeasure>().unwrap(), measure);
        }
    }

    #[test]
    fn parses_space_separated_and_mixed_case() {
        let m: SimilarityMeasure = "Common Neighbors".parse().unwrap();
        assert_eq!(m, SimilarityMeasure::CommonNeighbors);
        let m: SimilarityMeasure = "leicht holme newman".parse().unwrap();
        assert_eq!(m, SimilarityMeasure::LeichtHolmeNewman);
    }

    #[test]
    fn rejects_unknown_name() {
        let err = "cosine".parse::<SimilarityMeasure>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownSimilarity { .. }));
        assert!(err.to_string().contains("jaccard"));
    }
}
