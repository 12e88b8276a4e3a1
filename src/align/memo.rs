//! Memo storage for the alignment recurrences
//!
//! Cells carry an explicit presence flag (`Option<Score>`), so a computed
//! score can take any value, including `Score::MIN`.

use crate::model::{NodeId, Score};

/// Dense `rows × cols` cache of computed scores
#[derive(Clone, Debug)]
pub struct MemoTable {
    cols: usize,
    cells: Vec<Option<Score>>,
}

impl MemoTable {
    pub fn new(rows: usize, cols: usize) -> Self {
        MemoTable {
            cols,
            cells: vec![None; rows * cols],
        }
    }

    #[inline]
    pub fn get(&self, x: NodeId, y: NodeId) -> Option<Score> {
        self.cells[x * self.cols + y]
    }

    #[inline]
    pub fn set(&mut self, x: NodeId, y: NodeId, value: Score) {
        self.cells[x * self.cols + y] = Some(value);
    }

    /// Number of cells holding a value
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

/// One [`MemoTable`] per path anchor, allocated on first use
#[derive(Clone, Debug)]
pub struct AnchoredMemo {
    rows: usize,
    cols: usize,
    tables: Vec<Option<MemoTable>>,
}

impl AnchoredMemo {
    /// `anchors` tables of shape `rows × cols`, none allocated yet
    pub fn new(anchors: usize, rows: usize, cols: usize) -> Self {
        AnchoredMemo {
            rows,
            cols,
            tables: vec![None; anchors],
        }
    }

    /// Table scoped to `anchor`
    pub fn table(&mut self, anchor: NodeId) -> &mut MemoTable {
        let (rows, cols) = (self.rows, self.cols);
        self.tables[anchor].get_or_insert_with(|| {
            log::trace!("allocating {}x{} path memo for anchor {}", rows, cols, anchor);
            MemoTable::new(rows, cols)
        })
    }

    /// Number of anchors whose table has been allocated
    pub fn allocated(&self) -> usize {
        self.tables.iter().filter(|t| t.is_some()).count()
    }
}

/// Memo tables owned by one role orientation
///
/// `alignment` caches AlignmentScore keyed `(antichain node, path node)`;
/// `paths` caches PathScore per anchor in the path-role tree.
#[derive(Clone, Debug)]
pub struct MemoSet {
    pub alignment: MemoTable,
    pub paths: AnchoredMemo,
}

impl MemoSet {
    /// Storage for an orientation where the antichain tree has
    /// `antichain_len` nodes and the path tree `path_len` nodes
    pub fn new(antichain_len: usize, path_len: usize) -> Self {
        MemoSet {
            alignment: MemoTable::new(antichain_len, path_len),
            paths: AnchoredMemo::new(path_len, antichain_len, path_len),
        }
    }
}
