//! Matching: layer-local pairing of vertices into groups of size 1 or 2.

use smallvec::{smallvec, SmallVec};

/// Members of one group, layer-local ids in ascending order.
pub type Group = SmallVec<[usize; 2]>;

/// Pairing of a layer's vertices. Index `i` is the layer-local vertex `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    partner: Vec<Option<usize>>,
}

impl Matching {
    /// All-singleton matching over `n` vertices.
    pub fn identity(n: usize) -> Self {
        Self {
            partner: vec![None; n],
        }
    }

    /// Pair `u` and `v` if both are unmatched. Returns whether the pair was taken.
    pub fn try_pair(&mut self, u: usize, v: usize) -> bool {
        if u == v || u >= self.len() || v >= self.len() {
            return false;
        }
        if self.partner[u].is_some() || self.partner[v].is_some() {
            return false;
        }
        self.partner[u] = Some(v);
        self.partner[v] = Some(u);
        true
    }

    pub fn len(&self) -> usize {
        self.partner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partner.is_empty()
    }

    pub fn partner(&self, u: usize) -> Option<usize> {
        self.partner.get(u).copied().flatten()
    }

    pub fn is_matched(&self, u: usize) -> bool {
        self.partner(u).is_some()
    }

    /// Smallest local id of `u`'s group.
    pub fn representative(&self, u: usize) -> usize {
        self.partner(u).map_or(u, |v| u.min(v))
    }

    pub fn pair_count(&self) -> usize {
        self.matched_count() / 2
    }

    pub fn matched_count(&self) -> usize {
        self.partner.iter().filter(|p| p.is_some()).count()
    }

    pub fn group_count(&self) -> usize {
        self.len() - self.pair_count()
    }

    /// Groups ordered by representative.
    pub fn groups(&self) -> Vec<Group> {
        let mut groups = Vec::with_capacity(self.group_count());
        for u in 0..self.len() {
            match self.partner[u] {
                None => groups.push(smallvec![u]),
                Some(v) if u < v => groups.push(smallvec![u, v]),
                Some(_) => {}
            }
        }
        groups
    }

    /// Matched pairs `(u, v)` with `u < v`, ordered by `u`.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.partner
            .iter()
            .enumerate()
            .filter_map(|(u, p)| p.filter(|&v| u < v).map(|v| (u, v)))
    }
}
