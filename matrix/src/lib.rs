#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative snail matrix state.
//!
//! A [`SnailMatrix`] is filled in a single pass by the walker system and is
//! immutable afterwards. Adapters read it exclusively through the [`query`]
//! functions.

use snail_core::{CellCoord, Dimension};
use snail_system_walker::Snail;

/// Square grid holding the values 1..=n² along a clockwise spiral.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnailMatrix {
    dimension: Dimension,
    cells: Vec<u32>,
}

impl SnailMatrix {
    /// Builds and fills a matrix of the provided dimension.
    #[must_use]
    pub fn generate(dimension: Dimension) -> Self {
        let side = dimension.side() as usize;
        let mut cells = vec![0; side * side];

        for assignment in Snail::new(dimension) {
            if let Some(index) = index_of(dimension, assignment.cell) {
                cells[index] = assignment.value;
            }
        }

        tracing::debug!(
            side = dimension.side(),
            cells = cells.len(),
            "generated snail matrix"
        );

        Self { dimension, cells }
    }
}

/// Builds and fills a matrix of the provided dimension.
#[must_use]
pub fn generate(dimension: Dimension) -> SnailMatrix {
    SnailMatrix::generate(dimension)
}

fn index_of(dimension: Dimension, cell: CellCoord) -> Option<usize> {
    if !dimension.contains(cell) {
        return None;
    }
    let side = dimension.side() as usize;
    Some(cell.row() as usize * side + cell.column() as usize)
}

/// Query functions that provide read-only access to a matrix.
pub mod query {
    use serde::{Deserialize, Serialize};
    use snail_core::{CellCoord, Dimension};

    use super::{index_of, SnailMatrix};

    /// Side length of the matrix.
    #[must_use]
    pub fn dimension(matrix: &SnailMatrix) -> Dimension {
        matrix.dimension
    }

    /// Value stored at the provided cell, or `None` outside the bounds.
    #[must_use]
    pub fn value_at(matrix: &SnailMatrix, cell: CellCoord) -> Option<u32> {
        index_of(matrix.dimension, cell).map(|index| matrix.cells[index])
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(matrix: &SnailMatrix) -> impl Iterator<Item = &[u32]> {
        let side = (matrix.dimension.side() as usize).max(1);
        matrix.cells.chunks(side)
    }

    /// Iterates over the values of a single column from top to bottom.
    pub fn column(matrix: &SnailMatrix, column: u32) -> impl Iterator<Item = u32> + '_ {
        let side = matrix.dimension.side();
        (0..side).filter_map(move |row| value_at(matrix, CellCoord::new(column, row)))
    }

    /// Captures an owned, serialisable copy of the matrix contents.
    #[must_use]
    pub fn snapshot(matrix: &SnailMatrix) -> MatrixSnapshot {
        MatrixSnapshot {
            n: matrix.dimension,
            rows: rows(matrix).map(<[u32]>::to_vec).collect(),
        }
    }

    /// Owned representation of a matrix used by serialising adapters.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct MatrixSnapshot {
        /// Side length of the captured matrix.
        pub n: Dimension,
        /// Row-major values, top row first.
        pub rows: Vec<Vec<u32>>,
    }
}
