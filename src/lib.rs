//! # Maximum Path Sum over Generalized Triangles
//!
//! A triangle is a layered structure where row `r` holds
//! `1 + r * (order - 1)` values and every non-final node has exactly
//! `order` children. This library finds the largest sum along any
//! root-to-leaf path.
//!
//! ## Core Algorithm
//!
//! 1. **Flat storage**: all values in one row-major vector, geometry is two integers
//! 2. **Arithmetic addressing**: n-th child of `id` on row `r` is `id + row_size(r) + n`
//! 3. **Explicit-stack DFS**: postorder resolution with O(height) frames, no recursion
//! 4. **Memoization**: resolved subtree sums cached by flat id
//!
//! ## Usage Example
//!
//! ```
//! use maxpath::{max_path_sum, Triangle};
//!
//! let triangle: Triangle = "3\n7 4\n2 4 6\n8 5 9 3\n".parse()?;
//! assert_eq!(max_path_sum(&triangle)?, 23);
//! # Ok::<(), maxpath::TriangleError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod eval;     // Explicit-stack path evaluator
pub mod triangle; // Flat triangle store and node references

// Re-exports for convenience
pub use eval::{EvaluationResult, EvaluatorConfig, PathEvaluator, TraversalStats};
pub use triangle::{NodeRef, Triangle, Value};

use thiserror::Error;

/// Errors raised while reading or traversing a triangle
#[derive(Error, Debug)]
pub enum TriangleError {
    /// Token is not an integer
    #[error("at line {line}: can't parse integer: {token}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// Offending token
        token: String,
    },

    /// Row length disagrees with the declared fan-out
    #[error("at line {line}: expected {expected} items, got {actual}")]
    Structure {
        /// 1-based line (row) number
        line: usize,
        /// Item count implied by the geometry
        expected: usize,
        /// Item count found
        actual: usize,
    },

    /// Row after the apex contains no items
    #[error("at line {line}: row has no items")]
    EmptyRow {
        /// 1-based line (row) number
        line: usize,
    },

    /// Root requested from a triangle without items
    #[error("triangle is empty")]
    Empty,

    /// Child slot past the node's fan-out
    #[error("node #{id} doesn't have child #{child}")]
    OutOfRange {
        /// Flat index of the parent
        id: usize,
        /// Requested child slot
        child: usize,
    },

    /// Path sum does not fit in a [`Value`]
    #[error("path sum {sum} does not fit in 64 bits")]
    Overflow {
        /// Exact sum that was out of range
        sum: i128,
    },

    /// Underlying reader failed
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Maximum root-to-leaf path sum with the default evaluator.
///
/// Returns 0 for an empty triangle.
pub fn max_path_sum(triangle: &Triangle) -> Result<Value, TriangleError> {
    PathEvaluator::default()
        .evaluate(triangle)
        .map(|result| result.max_sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_example() {
        let triangle: Triangle = "3\n7 4\n2 4 6\n8 5 9 3\n".parse().unwrap();
        assert_eq!(max_path_sum(&triangle).unwrap(), 23);
    }

    #[test]
    fn test_empty_is_additive_identity() {
        assert_eq!(max_path_sum(&Triangle::default()).unwrap(), 0);
    }
}
