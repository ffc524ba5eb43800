//! Textual triangle format
//!
//! One row per line, whitespace-separated integers. Input ends at the first
//! line without tokens or at end of input. Line 1 is the apex, line 2
//! declares the fan-out by its item count.

use std::io::BufRead;
use std::str::FromStr;

use super::{Triangle, Value};
use crate::TriangleError;

impl Triangle {
    /// Read a triangle from a line-oriented reader.
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self, TriangleError> {
        let mut triangle = Triangle::default();
        let mut row: Vec<Value> = Vec::new();

        for line in reader.lines() {
            let line = line?;
            row.clear();
            parse_row(&line, triangle.height() + 1, &mut row)?;
            if row.is_empty() {
                break;
            }
            triangle.push_row(&row)?;
        }

        tracing::debug!(
            height = triangle.height(),
            order = triangle.order(),
            items = triangle.num_items(),
            "triangle read"
        );
        Ok(triangle)
    }
}

impl FromStr for Triangle {
    type Err = TriangleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Triangle::read_from(s.as_bytes())
    }
}

/// Parse one line of integers into `out`
fn parse_row(line: &str, line_no: usize, out: &mut Vec<Value>) -> Result<(), TriangleError> {
    for token in line.split_whitespace() {
        let value = token.parse::<Value>().map_err(|_| TriangleError::Parse {
            line: line_no,
            token: token.to_string(),
        })?;
        out.push(value);
    }
    Ok(())
}
