//! Similarity formulas. Each is a pure function of [`PairEvidence`] and
//! returns 0 for pairs without a shared neighbor.

use super::PairEvidence;

pub fn weight(e: &PairEvidence) -> f64 {
    e.weight_sum
}

pub fn common_neighbors(e: &PairEvidence) -> f64 {
    e.common as f64
}

pub fn weighted_common_neighbors(e: &PairEvidence) -> f64 {
    e.min_weight_sum
}

pub fn salton(e: &PairEvidence) -> f64 {
    if !e.has_shared() {
        return 0.0;
    }
    e.common as f64 / ((e.degree_u * e.degree_v) as f64).sqrt()
}

pub fn preferential_attachment(e: &PairEvidence) -> f64 {
    if !e.has_shared() {
        return 0.0;
    }
    (e.degree_u * e.degree_v) as f64
}

pub fn jaccard(e: &PairEvidence) -> f64 {
    if !e.has_shared() {
        return 0.0;
    }
    e.common as f64 / e.union() as f64
}

pub fn adamic_adar(e: &PairEvidence) -> f64 {
    e.adamic_adar
}

pub fn resource_allocation(e: &PairEvidence) -> f64 {
    e.resource_allocation
}

pub fn sorensen(e: &PairEvidence) -> f64 {
    if !e.has_shared() {
        return 0.0;
    }
    2.0 * e.common as f64 / (e.degree_u + e.degree_v) as f64
}

pub fn hub_promoted(e: &PairEvidence) -> f64 {
    if !e.has_shared() {
        return 0.0;
    }
    e.common as f64 / e.degree_u.min(e.degree_v) as f64
}

pub fn hub_depressed(e: &PairEvidence) -> f64 {
    if !e.has_shared() {
        return 0.0;
    }
    e.common as f64 / e.degree_u.max(e.degree_v) as f64
}

pub fn leicht_holme_newman(e: &PairEvidence) -> f64 {
    if !e.has_shared() {
        return 0.0;
    }
    e.common as f64 / (e.degree_u * e.degree_v) as f64
}
