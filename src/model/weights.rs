//! Dense node-by-node weight table

use super::NodeId;
use crate::{Error, Result};

/// Score type used throughout the recurrences
pub type Score = i64;

/// A row-major `rows × cols` table of scores
///
/// Rows are nodes of the first tree, columns nodes of the second.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightTable {
    rows: usize,
    cols: usize,
    cells: Vec<Score>,
}

impl WeightTable {
    /// Wrap row-major cells, checking that the count matches the shape
    pub fn new(rows: usize, cols: usize, cells: Vec<Score>) -> Result<Self> {
        if cells.len() != rows * cols {
            return Err(Error::CellCount {
                rows,
                cols,
                found: cells.len(),
            });
        }
        Ok(WeightTable { rows, cols, cells })
    }

    /// A table with every cell set to `value`
    pub fn filled(rows: usize, cols: usize, value: Score) -> Self {
        WeightTable {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }

    /// Build a table by evaluating `f(row, col)` for every cell
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(NodeId, NodeId) -> Score) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for x in 0..rows {
            for y in 0..cols {
                cells.push(f(x, y));
            }
        }
        WeightTable { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Score of pairing `x` (row) with `y` (column)
    #[inline]
    pub fn get(&self, x: NodeId, y: NodeId) -> Score {
        self.cells[x * self.cols + y]
    }

    /// Overwrite one cell
    pub fn set(&mut self, x: NodeId, y: NodeId, value: Score) {
        self.cells[x * self.cols + y] = value;
    }

    /// The `cols × rows` table with `t.get(y, x) == self.get(x, y)`
    pub fn transpose(&self) -> WeightTable {
        WeightTable::from_fn(self.cols, self.rows, |y, x| self.get(x, y))
    }
}
