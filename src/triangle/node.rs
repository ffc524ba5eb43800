//! Node reference (implicit - just a flat index and a row)
//!
//! Node = (id, level) borrowed against its triangle
//! Children computed arithmetically: n-th child = id + row_size(level) + n

use std::fmt;

use super::{Triangle, Value};
use crate::TriangleError;

/// Copyable locator into a [`Triangle`]
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    triangle: &'a Triangle,

    /// Flat index into the triangle's items
    id: usize,

    /// Row index
    level: usize,
}

impl<'a> NodeRef<'a> {
    pub(super) fn new(triangle: &'a Triangle, id: usize, level: usize) -> Self {
        Self {
            triangle,
            id,
            level,
        }
    }

    /// Flat index
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Row index
    #[inline]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Stored value
    #[inline]
    pub fn value(&self) -> Value {
        self.triangle.items[self.id]
    }

    /// Check if leaf (last row)
    #[inline]
    pub fn is_final(&self) -> bool {
        self.level + 1 == self.triangle.height
    }

    /// Fan-out of this node; 0 for leaves
    #[inline]
    pub fn num_children(&self) -> usize {
        if self.is_final() {
            0
        } else {
            self.triangle.order
        }
    }

    /// Get the `n`-th child.
    ///
    /// Children of a node form a contiguous block in the next row, starting
    /// one row length past the parent.
    pub fn child(&self, n: usize) -> Result<NodeRef<'a>, TriangleError> {
        if n >= self.num_children() {
            return Err(TriangleError::OutOfRange {
                id: self.id,
                child: n,
            });
        }
        let child_id = self.id + self.triangle.row_size(self.level) + n;
        Ok(NodeRef::new(self.triangle, child_id, self.level + 1))
    }

    /// Iterate over all children in slot order
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let parent = *self;
        (0..parent.num_children()).map(move |n| {
            NodeRef::new(
                parent.triangle,
                parent.id + parent.triangle.row_size(parent.level) + n,
                parent.level + 1,
            )
        })
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.triangle, other.triangle) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}@{}", self.id, self.level)
    }
}
