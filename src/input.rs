//! Readers for the tree and weight-matrix text formats
//!
//! Both formats are plain whitespace-separated integers:
//! - tree: `n` followed by `n - 1` undirected edges `p q`
//! - matrix: `rows cols` followed by `rows * cols` cells in row-major order

use crate::model::{NodeId, RootedTree, Score, WeightTable};
use crate::{Error, Result};
use std::io::Read;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

/// Path that selects standard input instead of a file
pub const STDIN_PATH: &str = "-";

/// Read and validate a tree file
pub fn read_tree(path: &Path) -> Result<RootedTree> {
    let text = read_source(path)?;
    let tree = parse_tree(&text, &path.display().to_string())?;
    log::info!("read tree with {} nodes from {}", tree.len(), path.display());
    Ok(tree)
}

/// Read a weight matrix from `path`, or from standard input for `-`
pub fn read_matrix(path: &Path) -> Result<WeightTable> {
    let text = read_source(path)?;
    let table = parse_matrix(&text, &path.display().to_string())?;
    log::info!(
        "read {}x{} weight matrix from {}",
        table.rows(),
        table.cols(),
        path.display()
    );
    Ok(table)
}

/// Parse tree text; `source_name` only labels errors
pub fn parse_tree(text: &str, source_name: &str) -> Result<RootedTree> {
    let mut tokens = Tokens::new(text, source_name);
    let n: usize = tokens.next("node count")?;

    let edge_count = n.saturating_sub(1);
    let mut edges: Vec<(NodeId, NodeId)> = Vec::with_capacity(edge_count);
    for i in 0..edge_count {
        let p = tokens.next(&format!("edge {} start", i + 1))?;
        let q = tokens.next(&format!("edge {} end", i + 1))?;
        edges.push((p, q));
    }
    tokens.finish()?;

    RootedTree::from_edges(n, &edges)
}

/// Parse matrix text; `source_name` only labels errors
pub fn parse_matrix(text: &str, source_name: &str) -> Result<WeightTable> {
    let mut tokens = Tokens::new(text, source_name);
    let rows: usize = tokens.next("row count")?;
    let cols: usize = tokens.next("column count")?;

    let mut cells: Vec<Score> = Vec::with_capacity(rows.saturating_mul(cols));
    for x in 0..rows {
        for y in 0..cols {
            cells.push(tokens.next(&format!("cell ({}, {})", x, y))?);
        }
    }
    tokens.finish()?;

    WeightTable::new(rows, cols, cells)
}

fn read_source(path: &Path) -> Result<String> {
    let unreadable = |source| Error::Unreadable {
        path: path.to_path_buf(),
        source,
    };

    if path.as_os_str() == STDIN_PATH {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(unreadable)?;
        return Ok(text);
    }
    std::fs::read_to_string(path).map_err(unreadable)
}

/// Whitespace tokenizer that reports what it expected on failure
struct Tokens<'t> {
    source_name: &'t str,
    words: SplitWhitespace<'t>,
}

impl<'t> Tokens<'t> {
    fn new(text: &'t str, source_name: &'t str) -> Self {
        Tokens {
            source_name,
            words: text.split_whitespace(),
        }
    }

    fn next<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let word = self
            .words
            .next()
            .ok_or_else(|| self.error(format!("unexpected end of input, expected {}", what)))?;
        word.parse()
            .map_err(|_| self.error(format!("invalid {} {:?}", what, word)))
    }

    fn finish(mut self) -> Result<()> {
        match self.words.next() {
            Some(word) => Err(self.error(format!("unexpected trailing token {:?}", word))),
            None => Ok(()),
        }
    }

    fn error(&self, message: String) -> Error {
        Error::Parse {
            source_name: self.source_name.to_string(),
            message,
        }
    }
}
