//! Memoization table for resolved subtree sums
//!
//! One slot per non-final node, indexed by flat id. Non-final ids are
//! exactly `0..num_internal` because rows are stored in order and the
//! final row comes last. Adjacent parents share children, so a slot
//! written under one parent is read back under its neighbour.

use bitvec::prelude::*;

use super::Wide;

/// Best subtree sums keyed by flat id, with a presence bit per slot
#[derive(Debug)]
pub(crate) struct MemoTable {
    values: Vec<Wide>,

    /// Presence flags (1 bit per non-final node)
    resolved: BitVec,
}

impl MemoTable {
    /// Allocate a table for `num_internal` non-final nodes
    pub(crate) fn new(num_internal: usize) -> Self {
        Self {
            values: vec![0; num_internal],
            resolved: bitvec![0; num_internal],
        }
    }

    /// Table that never stores anything (memoization disabled)
    pub(crate) fn disabled() -> Self {
        Self::new(0)
    }

    /// Cached sum for `id`, if resolved
    #[inline]
    pub(crate) fn get(&self, id: usize) -> Option<Wide> {
        match self.resolved.get(id) {
            Some(bit) if *bit => Some(self.values[id]),
            _ => None,
        }
    }

    /// Record the resolved sum for `id`. Ids outside the table are ignored.
    ///
    /// Each slot is written once; a second write is a traversal bug.
    pub(crate) fn record(&mut self, id: usize, value: Wide) {
        if id >= self.values.len() {
            return;
        }
        debug_assert!(!self.resolved[id], "node #{id} resolved twice");
        self.values[id] = value;
        self.resolved.set(id, true);
    }

    /// Number of slots
    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.values.len()
    }

    /// Number of resolved slots
    pub(crate) fn resolved_count(&self) -> usize {
        self.resolved.count_ones()
    }

    /// True when every slot has been written
    pub(crate) fn is_complete(&self) -> bool {
        self.resolved.all()
    }
}
