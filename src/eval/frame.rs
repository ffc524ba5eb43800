//! Explicit traversal frames
//!
//! One frame per active ancestor: the node, the next untried child slot,
//! and the best subtree sum folded so far.

use super::Wide;
use crate::triangle::NodeRef;

/// Stack entry for a node whose children are being resolved
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame<'a> {
    pub(crate) node: NodeRef<'a>,

    /// Next child slot to try
    pub(crate) next_child: usize,

    /// Best child subtree sum folded so far
    pub(crate) best: Wide,
}

impl<'a> Frame<'a> {
    pub(crate) fn new(node: NodeRef<'a>) -> Self {
        Self {
            node,
            next_child: 0,
            best: 0,
        }
    }

    /// All children folded
    #[inline]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.next_child == self.node.num_children()
    }

    /// Claim the next child slot, advancing the cursor
    #[inline]
    pub(crate) fn advance(&mut self) -> usize {
        let slot = self.next_child;
        self.next_child += 1;
        slot
    }

    /// Fold a child result claimed from `slot`.
    ///
    /// Slot 0 always initializes `best`, so negative sums are kept.
    #[inline]
    pub(crate) fn fold(&mut self, slot: usize, value: Wide) {
        if slot == 0 || value > self.best {
            self.best = value;
        }
    }

    /// Resolved sum of the subtree rooted at this frame
    #[inline]
    pub(crate) fn resolved(&self) -> Wide {
        Wide::from(self.node.value()) + self.best
    }
}
