//! Shared triangle generators and a brute-force oracle

#![allow(dead_code)]

use maxpath::{NodeRef, Triangle, Value};
use proptest::prelude::*;

/// Row lengths for a triangle of `height` rows with fan-out `order`
pub fn row_lengths(height: usize, order: usize) -> Vec<usize> {
    (0..height).map(|r| 1 + r * (order - 1)).collect()
}

/// Build a triangle whose values are produced by `value(level, index)`
pub fn build(height: usize, order: usize, value: impl Fn(usize, usize) -> Value) -> Triangle {
    let rows: Vec<Vec<Value>> = row_lengths(height, order)
        .into_iter()
        .enumerate()
        .map(|(level, len)| (0..len).map(|i| value(level, i)).collect())
        .collect();
    Triangle::from_rows(rows).expect("generated rows are well formed")
}

/// Strategy: triangles up to the given height and fan-out, values in `-100..100`
pub fn arb_triangle(max_height: usize, max_order: usize) -> impl Strategy<Value = Triangle> {
    (1..=max_height, 1..=max_order).prop_flat_map(|(height, order)| {
        let rows: Vec<_> = row_lengths(height, order)
            .into_iter()
            .map(|len| proptest::collection::vec(-100i64..100, len))
            .collect();
        rows.prop_map(|rows| Triangle::from_rows(rows).expect("generated rows are well formed"))
    })
}

/// Every root-to-leaf path as child slots
pub fn all_paths(triangle: &Triangle) -> Vec<Vec<usize>> {
    let mut paths = vec![Vec::new()];
    for _ in 1..triangle.height() {
        paths = paths
            .into_iter()
            .flat_map(|path| {
                (0..triangle.order()).map(move |slot| {
                    let mut next = path.clone();
                    next.push(slot);
                    next
                })
            })
            .collect();
    }
    paths
}

/// Recursive reference maximum (no memoization, no explicit stack)
pub fn naive_max(triangle: &Triangle) -> Value {
    fn best(node: NodeRef<'_>) -> Value {
        node.value() + node.children().map(best).max().unwrap_or(0)
    }
    match triangle.head() {
        Ok(head) => best(head),
        Err(_) => 0,
    }
}

/// All nodes on `level`, in id order
pub fn nodes_on_level(triangle: &Triangle, level: usize) -> Vec<NodeRef<'_>> {
    let mut frontier = vec![triangle.head().expect("non-empty triangle")];
    for _ in 0..level {
        let mut next: Vec<NodeRef<'_>> = Vec::new();
        for node in &frontier {
            // Child ids never decrease across parents; skip shared ones
            for child in node.children() {
                if next.last().map_or(true, |last| last.id() < child.id()) {
                    next.push(child);
                }
            }
        }
        frontier = next;
    }
    frontier
}
