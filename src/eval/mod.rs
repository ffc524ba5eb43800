//! Maximum path-sum evaluation
//!
//! Iterative postorder DFS over the implicit triangle tree:
//! - Explicit frame stack: O(height) frames, no recursion
//! - Leaf children folded directly, never pushed
//! - Resolved non-leaf subtrees cached by flat id
//! - Sums accumulated in 128 bits, narrowed once at the root
//!
//! Result: O(items) time, O(height) stack, O(items) memo

mod frame;
mod memo;
mod stats;

pub use stats::TraversalStats;

use frame::Frame;
use memo::MemoTable;
use stats::StatsTracker;

use crate::triangle::{Triangle, Value};
use crate::TriangleError;

/// Accumulator for path sums. A root-to-leaf path has at most one value per
/// row, so 128 bits cannot overflow for any triangle that fits in memory.
pub(crate) type Wide = i128;

/// Configuration parameters for path evaluation
#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    /// Cache resolved subtree sums by node id
    pub memoize: bool,

    /// Collect traversal statistics
    pub collect_stats: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            memoize: true,
            collect_stats: false,
        }
    }
}

impl EvaluatorConfig {
    /// Enable or disable memoization.
    pub fn with_memoization(mut self, enabled: bool) -> Self {
        self.memoize = enabled;
        self
    }

    /// Enable traversal statistics.
    pub fn with_statistics(mut self, enabled: bool) -> Self {
        self.collect_stats = enabled;
        self
    }
}

/// Result returned by the path evaluator.
#[derive(Debug, Clone)]
pub struct EvaluationResult {
    /// Maximum root-to-leaf path sum (0 for an empty triangle)
    pub max_sum: Value,

    /// Traversal counters, if enabled
    pub stats: Option<TraversalStats>,
}

/// Explicit-stack maximum path-sum evaluator
#[derive(Debug, Clone, Default)]
pub struct PathEvaluator {
    config: EvaluatorConfig,
}

impl PathEvaluator {
    /// Create a new evaluator with the provided configuration.
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    /// Access configuration.
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Compute the maximum root-to-leaf path sum of `triangle`.
    ///
    /// An empty triangle yields 0. Any addressing fault aborts the
    /// evaluation and is returned unchanged.
    pub fn evaluate(&self, triangle: &Triangle) -> Result<EvaluationResult, TriangleError> {
        let mut tracker = StatsTracker::new(self.config.collect_stats);

        if triangle.is_empty() {
            return Ok(EvaluationResult {
                max_sum: 0,
                stats: tracker.finish(),
            });
        }

        let mut memo = if self.config.memoize {
            MemoTable::new(triangle.num_internal())
        } else {
            MemoTable::disabled()
        };

        let wide = Self::evaluate_dfs(triangle, &mut memo, &mut tracker)?;
        let max_sum =
            Value::try_from(wide).map_err(|_| TriangleError::Overflow { sum: wide })?;

        if self.config.memoize {
            debug_assert!(memo.is_complete(), "unresolved nodes left in memo table");
        }

        let stats = tracker.finish();
        tracing::debug!(
            max_sum,
            height = triangle.height(),
            order = triangle.order(),
            memoized = memo.resolved_count(),
            "evaluation finished"
        );

        Ok(EvaluationResult { max_sum, stats })
    }

    fn evaluate_dfs(
        triangle: &Triangle,
        memo: &mut MemoTable,
        tracker: &mut StatsTracker,
    ) -> Result<Wide, TriangleError> {
        let mut stack: Vec<Frame<'_>> = Vec::with_capacity(triangle.height());
        stack.push(Frame::new(triangle.head()?));
        tracker.push_frame();

        let mut max_sum = 0;
        while let Some(top) = stack.last_mut() {
            if top.is_exhausted() {
                let resolved = top.resolved();
                if !top.node.is_final() {
                    memo.record(top.node.id(), resolved);
                }
                stack.pop();
                tracker.pop_frame();

                match stack.last_mut() {
                    Some(parent) => {
                        let slot = parent.next_child - 1;
                        parent.fold(slot, resolved);
                    }
                    // Root resolved
                    None => max_sum = resolved,
                }
                continue;
            }

            let slot = top.advance();
            let child = top.node.child(slot)?;

            if child.is_final() {
                top.fold(slot, Wide::from(child.value()));
                tracker.leaf_folded();
                continue;
            }

            if let Some(cached) = memo.get(child.id()) {
                tracing::trace!(node = %child, cached = %cached, "memo hit");
                top.fold(slot, cached);
                tracker.memo_hit();
                continue;
            }

            stack.push(Frame::new(child));
            tracker.push_frame();
        }

        Ok(max_sum)
    }
}
