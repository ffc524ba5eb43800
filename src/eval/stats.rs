//! Traversal accounting
//!
//! Tracks explicit-stack depth and how each child was folded, to check the
//! O(height) stack bound and the memo behaviour.

/// Counters gathered during one evaluation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Frames pushed onto the explicit stack
    pub frames_pushed: usize,

    /// Maximum stack depth reached
    pub max_depth: usize,

    /// Leaf children folded without a frame
    pub leaves_folded: usize,

    /// Children folded from the memo table
    pub memo_hits: usize,

    /// Non-leaf nodes resolved in postorder (root included)
    pub nodes_resolved: usize,
}

impl TraversalStats {
    /// Generate report
    pub fn report(&self) -> String {
        format!(
            "Frames pushed: {}\nMax stack depth: {}\nLeaves folded: {}\nMemo hits: {}\nNodes resolved: {}",
            self.frames_pushed,
            self.max_depth,
            self.leaves_folded,
            self.memo_hits,
            self.nodes_resolved
        )
    }
}

/// Records counters only when enabled
#[derive(Debug)]
pub(crate) struct StatsTracker {
    stats: Option<TraversalStats>,
    depth: usize,
}

impl StatsTracker {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            stats: enabled.then(TraversalStats::default),
            depth: 0,
        }
    }

    pub(crate) fn push_frame(&mut self) {
        self.depth += 1;
        if let Some(ref mut s) = self.stats {
            s.frames_pushed += 1;
            s.max_depth = s.max_depth.max(self.depth);
        }
    }

    pub(crate) fn pop_frame(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        if let Some(ref mut s) = self.stats {
            s.nodes_resolved += 1;
        }
    }

    pub(crate) fn leaf_folded(&mut self) {
        if let Some(ref mut s) = self.stats {
            s.leaves_folded += 1;
        }
    }

    pub(crate) fn memo_hit(&mut self) {
        if let Some(ref mut s) = self.stats {
            s.memo_hits += 1;
        }
    }

    /// Take stats (consumes tracker)
    pub(crate) fn finish(self) -> Option<TraversalStats> {
        self.stats
    }
}
