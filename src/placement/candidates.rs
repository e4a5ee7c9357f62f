use smallvec::SmallVec;

use crate::{
    foundation::core::approx_eq,
    placement::{result::PlacementResult, side::Side},
};

/// The sides still in the running during auto-selection.
///
/// Each entry is tagged by its own [`Side`], and at most one entry exists per side.
#[derive(Clone, Debug, Default)]
pub(crate) struct Candidates {
    items: SmallVec<[PlacementResult; 4]>,
}

impl Candidates {
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The only remaining candidate, if exactly one is left.
    pub(crate) fn single(&self) -> Option<PlacementResult> {
        match self.items.as_slice() {
            [one] => Some(*one),
            _ => None,
        }
    }

    pub(crate) fn get(&self, side: Side) -> Option<PlacementResult> {
        self.items.iter().find(|c| c.side == side).copied()
    }

    pub(crate) fn sides(&self) -> SmallVec<[Side; 4]> {
        self.items.iter().map(|c| c.side).collect()
    }

    pub(crate) fn filtered(&self, keep: impl Fn(&PlacementResult) -> bool) -> Self {
        Self {
            items: self.items.iter().filter(|c| keep(c)).copied().collect(),
        }
    }

    /// Keep only the candidates whose `key` is minimal (within tie tolerance).
    pub(crate) fn retain_min_by(&mut self, key: impl Fn(&PlacementResult) -> f64) {
        let Some(best) = self.items.iter().map(&key).reduce(f64::min) else {
            return;
        };
        self.items.retain(|c| {
            let k = key(&*c);
            k <= best || approx_eq(k, best)
        });
    }

    /// Keep only the candidates whose `key` is maximal (within tie tolerance).
    pub(crate) fn retain_max_by(&mut self, key: impl Fn(&PlacementResult) -> f64) {
        self.retain_min_by(|c| -key(c));
    }
}

impl FromIterator<PlacementResult> for Candidates {
    fn from_iter<I: IntoIterator<Item = PlacementResult>>(iter: I) -> Self {
        let mut items = SmallVec::<[PlacementResult; 4]>::new();
        for c in iter {
            if items.iter().all(|e: &PlacementResult| e.side != c.side) {
                items.push(c);
            }
        }
        Self { items }
    }
}
