#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the snail matrix workspace.
//!
//! This crate defines the value types that connect the walker system, the
//! authoritative matrix and the adapters. The walker emits [`Assignment`]
//! values while travelling in a [`Direction`], the matrix stores them at
//! their [`CellCoord`], and every component agrees on the side length through
//! a validated [`Dimension`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest side length whose square still fits the value range of a cell.
pub const MAX_SIDE: u32 = 65_535;

/// Side length used when the caller does not request one.
pub const DEFAULT_SIDE: u32 = 5;

/// Heading of the walker while it traces the spiral.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward increasing column indices.
    Right,
    /// Movement toward increasing row indices.
    Down,
    /// Movement toward decreasing column indices.
    Left,
    /// Movement toward decreasing row indices.
    Up,
}

impl Direction {
    /// Heading the walker faces before its first step.
    pub const INITIAL: Self = Self::Right;

    /// Rotates the heading a quarter turn clockwise.
    #[must_use]
    pub const fn rotate_clockwise(self) -> Self {
        match self {
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
            Self::Up => Self::Right,
        }
    }

    /// Offset applied by a single step, expressed as `(row, column)`.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Up => (-1, 0),
        }
    }
}

/// Location of a single matrix cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Top-left cell where every spiral begins.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a new cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Returns the neighbouring cell in the provided direction.
    ///
    /// Stepping above row zero or left of column zero yields `None`; the upper
    /// bound is the caller's concern since a coordinate carries no dimension.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (row_delta, column_delta) = direction.delta();
        let row = self.row.checked_add_signed(row_delta)?;
        let column = self.column.checked_add_signed(column_delta)?;
        Some(Self::new(column, row))
    }

    /// Computes the Manhattan distance between two cell coordinates.
    #[must_use]
    pub fn manhattan_distance(self, other: CellCoord) -> u32 {
        self.column().abs_diff(other.column()) + self.row().abs_diff(other.row())
    }
}

/// A value placed at a cell by the walker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    /// Cell receiving the value.
    pub cell: CellCoord,
    /// Value written into the cell, starting at one.
    pub value: u32,
}

impl Assignment {
    /// Creates a new assignment.
    #[must_use]
    pub const fn new(cell: CellCoord, value: u32) -> Self {
        Self { cell, value }
    }
}

/// Validated side length of a square snail matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Dimension(u32);

impl Dimension {
    /// Creates a dimension, rejecting sides whose square overflows a cell value.
    pub const fn new(side: u32) -> Result<Self, DimensionError> {
        if side > MAX_SIDE {
            return Err(DimensionError::TooLarge {
                requested: side as i64,
                max: MAX_SIDE,
            });
        }
        Ok(Self(side))
    }

    /// Number of rows and columns.
    #[must_use]
    pub const fn side(&self) -> u32 {
        self.0
    }

    /// Number of cells, which is also the largest value in the matrix.
    #[must_use]
    pub const fn cell_count(&self) -> u32 {
        self.0 * self.0
    }

    /// Reports whether the matrix holds no cells at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Reports whether the cell lies inside the matrix bounds.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.column() < self.0 && cell.row() < self.0
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self(DEFAULT_SIDE)
    }
}

impl TryFrom<u32> for Dimension {
    type Error = DimensionError;

    fn try_from(side: u32) -> Result<Self, Self::Error> {
        Self::new(side)
    }
}

impl TryFrom<i64> for Dimension {
    type Error = DimensionError;

    fn try_from(side: i64) -> Result<Self, Self::Error> {
        if side < 0 {
            return Err(DimensionError::Negative { requested: side });
        }
        let side = u32::try_from(side).map_err(|_| DimensionError::TooLarge {
            requested: side,
            max: MAX_SIDE,
        })?;
        Self::new(side)
    }
}

impl From<Dimension> for u32 {
    fn from(dimension: Dimension) -> Self {
        dimension.0
    }
}

/// Reasons a requested side length cannot describe a matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DimensionError {
    /// The side length was below zero.
    #[error("negative matrix dimension {requested}")]
    Negative {
        /// Side length supplied by the caller.
        requested: i64,
    },
    /// The side length squared does not fit a cell value.
    #[error("matrix dimension {requested} exceeds the maximum of {max}")]
    TooLarge {
        /// Side length supplied by the caller.
        requested: i64,
        /// Largest accepted side length.
        max: u32,
    },
}
