//! LevelState: per-layer round counters threaded through a pure step.

/// Immutable progress of a coarsening run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelState {
    levels: Vec<u32>,
    targets: Vec<u32>,
    contract: Vec<bool>,
    stalled: Vec<bool>,
}

impl LevelState {
    /// Fresh state: all levels zero, nothing stalled. Layer indices in
    /// `layers_to_contract` that do not exist are ignored.
    pub fn new(targets: Vec<u32>, layers_to_contract: &[usize]) -> Self {
        let levels = vec![0; targets.len()];
        Self::with_levels(targets, layers_to_contract, &levels)
    }

    /// State resuming from `levels` already reached, e.g. the levels stored on
    /// a graph that was coarsened before. Missing entries count as zero. A
    /// layer already at or past its target is never eligible.
    pub fn with_levels(targets: Vec<u32>, layers_to_contract: &[usize], levels: &[u32]) -> Self {
        let layers = targets.len();
        let mut contract = vec![false; layers];
        for &layer in layers_to_contract {
            if let Some(flag) = contract.get_mut(layer) {
                *flag = true;
            }
        }
        Self {
            levels: (0..layers)
                .map(|l| levels.get(l).copied().unwrap_or(0))
                .collect(),
            targets,
            contract,
            stalled: vec![false; layers],
        }
    }

    pub fn levels(&self) -> &[u32] {
        &self.levels
    }

    pub fn targets(&self) -> &[u32] {
        &self.targets
    }

    pub fn is_stalled(&self, layer: usize) -> bool {
        self.stalled.get(layer).copied().unwrap_or(false)
    }

    pub fn stalled_layers(&self) -> Vec<usize> {
        (0..self.stalled.len()).filter(|&l| self.stalled[l]).collect()
    }

    /// In the contraction set, not stalled, and below its target.
    pub fn is_eligible(&self, layer: usize) -> bool {
        layer < self.levels.len()
            && self.contract[layer]
            && !self.stalled[layer]
            && self.levels[layer] < self.targets[layer]
    }

    pub fn eligible_layers(&self) -> Vec<usize> {
        (0..self.levels.len()).filter(|&l| self.is_eligible(l)).collect()
    }

    pub fn is_terminal(&self) -> bool {
        !(0..self.levels.len()).any(|l| self.is_eligible(l))
    }

    /// State after a round in which `contracted` layers advanced one level and
    /// `stalled` layers produced no pair.
    pub fn advance(&self, contracted: &[usize], stalled: &[usize]) -> Self {
        let mut next = self.clone();
        for &layer in contracted {
            if let Some(level) = next.levels.get_mut(layer) {
                *level += 1;
            }
        }
        for &layer in stalled {
            if let Some(flag) = next.stalled.get_mut(layer) {
                *flag = true;
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eligibility_follows_contract_set_and_targets() {
        let s = LevelState::new(vec![2, 1, 0], &[0, 2, 9]);
        assert_eq!(s.eligible_layers(), vec![0]);
        assert!(!s.is_eligible(1));
        assert!(!s.is_eligible(2));
        assert!(!s.is_terminal());
    }

    #[test]
    fn advance_is_pure() {
        let s = LevelState::new(vec![2, 2], &[0, 1]);
        let t = s.advance(&[0], &[1]);
        assert_eq!(s.levels(), &[0, 0]);
        assert_eq!(t.levels(), &[1, 0]);
        assert!(t.is_stalled(1));
        assert_eq!(t.eligible_layers(), vec![0]);

        let u = t.advance(&[0], &[]);
        assert_eq!(u.levels(), &[2, 0]);
        assert!(u.is_terminal());
        assert_eq!(u.stalled_layers(), vec![1]);
    }

    #[test]
    fn resumed_levels_count_toward_targets() {
        let s = LevelState::with_levels(vec![1, 3, 2], &[0, 1, 2], &[1, 1, 5]);
        assert_eq!(s.levels(), &[1, 1, 5]);
        assert_eq!(s.eligible_layers(), vec![1]);

        let done = LevelState::with_levels(vec![1, 1], &[0, 1], &[1, 1]);
        assert!(done.is_terminal());
    }
}
