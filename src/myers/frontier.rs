// Search frontier indexed by signed diagonal.
//
// Diagonal `k` is `b_index - a_index`. Within one search the edit budget `d`
// never exceeds `m + n`, so every diagonal that is read or written lies in
// `[-(m + n), m + n]`. The frontier is a flat vector biased by `m + n`.

use std::ops::{Index, IndexMut};

use super::trace::NodeId;

/// Furthest point reached on one diagonal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Reach {
    /// Index into A. May run one past `m` on diagonals that overshoot.
    pub x: usize,
    /// Trace node holding the path that got here.
    pub node: NodeId,
}

#[derive(Debug)]
pub(crate) struct Frontier {
    slots: Vec<Reach>,
    bias: isize,
}

impl Frontier {
    /// Frontier able to hold every diagonal for a budget of `max_d`.
    pub fn new(max_d: usize) -> Self {
        Self {
            slots: vec![Reach::default(); 2 * max_d + 1],
            bias: max_d as isize,
        }
    }

    #[inline(always)]
    fn slot(&self, k: isize) -> usize {
        let idx = self.bias + k;
        debug_assert!(
            idx >= 0 && (idx as usize) < self.slots.len(),
            "diagonal {k} outside frontier of bias {}",
            self.bias
        );
        idx as usize
    }
}

impl Index<isize> for Frontier {
    type Output = Reach;

    #[inline(always)]
    fn index(&self, k: isize) -> &Reach {
        &self.slots[self.slot(k)]
    }
}

impl IndexMut<isize> for Frontier {
    #[inline(always)]
    fn index_mut(&mut self, k: isize) -> &mut Reach {
        let idx = self.slot(k);
        &mut self.slots[idx]
    }
}
