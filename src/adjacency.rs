//! 8-directional neighbor relation over a rectangular board.
//!
//! Cells are flat indices in row-major order (`index = row * width + col`).
//! Two strategies are supported: a table built once up front, or offset
//! arithmetic done per lookup. Both produce identical neighbor sequences;
//! the choice is a memory/speed trade-off made at construction time.

use smallvec::SmallVec;

/// Neighbor list for one cell. Never more than 8 entries, so it stays
/// inline and never touches the heap.
pub type Neighbors = SmallVec<[usize; 8]>;

#[derive(Debug, Clone)]
pub enum Adjacency {
    Precomputed { table: Vec<Neighbors> },
    OnDemand { width: usize, height: usize },
}

impl Adjacency {
    pub fn new(width: usize, height: usize, precompute: bool) -> Self {
        if precompute {
            let table = (0..width * height)
                .map(|cell| cell_neighbors(width, height, cell))
                .collect();
            Adjacency::Precomputed { table }
        } else {
            Adjacency::OnDemand { width, height }
        }
    }

    /// Neighbors of `cell`, in row-above / same-row / row-below scan order.
    /// Deterministic for a fixed (width, height) regardless of strategy.
    pub fn neighbors(&self, cell: usize) -> Neighbors {
        match self {
            Adjacency::Precomputed { table } => table[cell].clone(),
            Adjacency::OnDemand { width, height } => cell_neighbors(*width, *height, cell),
        }
    }
}

fn cell_neighbors(width: usize, height: usize, cell: usize) -> Neighbors {
    let row = cell / width;
    let col = cell % width;
    let mut out = Neighbors::new();
    for r in row.saturating_sub(1)..=(row + 1).min(height - 1) {
        for c in col.saturating_sub(1)..=(col + 1).min(width - 1) {
            if r == row && c == col {
                continue;
            }
            out.push(r * width + c);
        }
    }
    out
}
