//! Flat triangle store
//!
//! All node values live in one row-major `Vec`. Only `height` and `order`
//! are kept as geometry; row boundaries are recomputed on demand:
//!   row_size(r) = 1 + r * (order - 1)
//!   child(id, level, n) = id + row_size(level) + n
//!
//! No per-node allocation, no pointers between nodes.

mod node;
mod parse;

pub use node::NodeRef;

use std::fmt;

use crate::TriangleError;

/// Node value / path sum type
pub type Value = i64;

/// Immutable triangle of values with constant fan-out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Triangle {
    /// Row-major node values
    items: Vec<Value>,

    /// Number of rows
    height: usize,

    /// Children per non-final node (0 while fewer than two rows exist)
    order: usize,
}

impl Triangle {
    /// Build a triangle from explicit rows.
    ///
    /// Row 0 must hold exactly one item, row 1 declares the fan-out by its
    /// length, and every later row must match `row_size`. Line numbers in
    /// errors are 1-based, matching the textual format.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, TriangleError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[Value]>,
    {
        let mut triangle = Self::default();
        for row in rows {
            triangle.push_row(row.as_ref())?;
        }
        tracing::debug!(
            height = triangle.height,
            order = triangle.order,
            items = triangle.items.len(),
            "triangle built"
        );
        Ok(triangle)
    }

    /// Append one row, validating it against the geometry so far.
    pub(crate) fn push_row(&mut self, row: &[Value]) -> Result<(), TriangleError> {
        let line = self.height + 1;
        if line == 2 {
            if row.is_empty() {
                return Err(TriangleError::EmptyRow { line });
            }
            self.order = row.len();
        } else {
            let expected = self.expected_next_row();
            if row.len() != expected {
                if row.is_empty() {
                    return Err(TriangleError::EmptyRow { line });
                }
                return Err(TriangleError::Structure {
                    line,
                    expected,
                    actual: row.len(),
                });
            }
        }
        self.items.extend_from_slice(row);
        self.height += 1;
        Ok(())
    }

    /// Item count the next appended row must have (apex row: 1)
    fn expected_next_row(&self) -> usize {
        if self.height == 0 {
            1
        } else {
            self.row_size(self.height)
        }
    }

    /// True when no rows have been loaded
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of stored values
    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Fan-out of every non-final node
    pub fn order(&self) -> usize {
        self.order
    }

    /// Raw row-major storage
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Number of items in row `level`.
    ///
    /// Defined for any level, including levels past the last row. With
    /// `order == 0` (empty or apex-only triangle) this is 0.
    #[inline]
    pub fn row_size(&self, level: usize) -> usize {
        if self.order > 0 {
            1 + level * (self.order - 1)
        } else {
            0
        }
    }

    /// Flat index of the first item of row `level`
    pub fn row_offset(&self, level: usize) -> usize {
        // Arithmetic series: level * 1 + (order - 1) * level * (level - 1) / 2
        if self.order == 0 {
            return level.min(1);
        }
        level + (self.order - 1) * level * level.saturating_sub(1) / 2
    }

    /// Values of row `level`, or `None` past the last row
    pub fn row(&self, level: usize) -> Option<&[Value]> {
        if level >= self.height {
            return None;
        }
        if level == 0 {
            return self.items.get(..1);
        }
        let start = self.row_offset(level);
        self.items.get(start..start + self.row_size(level))
    }

    /// Number of non-final nodes (size of the evaluator's memo table)
    pub fn num_internal(&self) -> usize {
        match self.height {
            0 | 1 => 0,
            h => self.items.len() - self.row_size(h - 1),
        }
    }

    /// Reference to the apex
    pub fn head(&self) -> Result<NodeRef<'_>, TriangleError> {
        if self.is_empty() {
            return Err(TriangleError::Empty);
        }
        Ok(NodeRef::new(self, 0, 0))
    }

    /// Sum of the values along an explicit path.
    ///
    /// `slots[i]` picks the child taken when leaving row `i`, so a complete
    /// root-to-leaf path has exactly `height - 1` slots. Fails with
    /// `Overflow` when the total does not fit in a [`Value`].
    pub fn path_sum(&self, slots: &[usize]) -> Result<Value, TriangleError> {
        let mut node = self.head()?;
        let expected = self.height - 1;
        if slots.len() != expected {
            return Err(TriangleError::Structure {
                line: self.height,
                expected,
                actual: slots.len(),
            });
        }

        let mut sum = i128::from(node.value());
        for &slot in slots {
            node = node.child(slot)?;
            sum += i128::from(node.value());
        }
        Value::try_from(sum).map_err(|_| TriangleError::Overflow { sum })
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in 0..self.height {
            let Some(row) = self.row(level) else { break };
            for (i, value) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
