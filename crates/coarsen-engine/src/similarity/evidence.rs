//! Shared-neighborhood statistics of a vertex pair.

/// Everything any similarity formula needs about a pair `(u, v)`.
///
/// Filled in one shared neighbor at a time, so a projection can collect it
/// during a two-hop walk without materializing neighbor-set intersections.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PairEvidence {
    /// |N(u)|
    pub degree_u: usize,
    /// |N(v)|
    pub degree_v: usize,
    /// |N(u) ∩ N(v)|
    pub common: usize,
    /// Σ over shared `w` of `w(u,w) + w(v,w)`.
    pub weight_sum: f64,
    /// Σ over shared `w` of `min(w(u,w), w(v,w))`.
    pub min_weight_sum: f64,
    /// Σ over shared `w` of `1 / ln(degree(w))`.
    pub adamic_adar: f64,
    /// Σ over shared `w` of `1 / degree(w)`.
    pub resource_allocation: f64,
}

impl PairEvidence {
    pub fn new(degree_u: usize, degree_v: usize) -> Self {
        Self {
            degree_u,
            degree_v,
            ..Default::default()
        }
    }

    /// Record one shared neighbor reached with weights `weight_u` from `u`
    /// and `weight_v` from `v`. `shared_degree` is at least 2.
    pub fn add_shared(&mut self, weight_u: f64, weight_v: f64, shared_degree: usize) {
        self.common += 1;
        self.weight_sum += weight_u + weight_v;
        self.min_weight_sum += weight_u.min(weight_v);
        let degree = shared_degree as f64;
        self.adamic_adar += 1.0 / degree.ln();
        self.resource_allocation += 1.0 / degree;
    }

    /// |N(u) ∪ N(v)|
    pub fn union(&self) -> usize {
        self.degree_u + self.degree_v - self.common
    }

    pub fn has_shared(&self) -> bool {
        self.common > 0
    }
}
