#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Rendering backends that turn a snail matrix into printable text.

use std::fmt;

use anyhow::{Context, Result as AnyResult};
use snail_core::Dimension;
use snail_matrix::{query, SnailMatrix};

/// Field widths used when laying out the matrix as fixed-width text.
///
/// Every column shares the width of the largest value plus one space of
/// padding, except the leftmost column. That column never holds anything
/// larger than `4n - 4`, so it is narrowed to avoid a wide empty margin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnLayout {
    leading: usize,
    interior: usize,
}

impl ColumnLayout {
    /// Computes the layout for a matrix of the provided dimension.
    #[must_use]
    pub fn for_dimension(dimension: Dimension) -> Self {
        let interior = digit_width(dimension.cell_count().max(1));
        let gap = interior - digit_width(largest_left_value(dimension)) + 1;

        Self {
            leading: interior - gap,
            interior,
        }
    }

    /// Width of the leftmost column.
    #[must_use]
    pub const fn leading(&self) -> usize {
        self.leading
    }

    /// Width shared by every column after the first.
    #[must_use]
    pub const fn interior(&self) -> usize {
        self.interior
    }

    /// Field width applied to the provided zero-based column.
    #[must_use]
    pub const fn width_of(&self, column: usize) -> usize {
        if column == 0 {
            self.leading
        } else {
            self.interior
        }
    }
}

/// Decimal digits of `value` plus one space of padding.
fn digit_width(value: u32) -> usize {
    value.checked_ilog10().map_or(1, |log| log as usize + 1) + 1
}

fn largest_left_value(dimension: Dimension) -> u32 {
    match dimension.side() {
        0 | 1 => 1,
        side => 4 * side - 4,
    }
}

/// Display adapter that writes a matrix as right-aligned columns.
#[derive(Clone, Copy, Debug)]
pub struct TextMatrix<'a> {
    matrix: &'a SnailMatrix,
    layout: ColumnLayout,
}

impl<'a> TextMatrix<'a> {
    /// Wraps a matrix for display using its default column layout.
    #[must_use]
    pub fn new(matrix: &'a SnailMatrix) -> Self {
        Self {
            matrix,
            layout: ColumnLayout::for_dimension(query::dimension(matrix)),
        }
    }

    /// Layout used when formatting.
    #[must_use]
    pub const fn layout(&self) -> ColumnLayout {
        self.layout
    }
}

impl fmt::Display for TextMatrix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in query::rows(self.matrix) {
            for (column, value) in row.iter().enumerate() {
                write!(f, "{value:>width$}", width = self.layout.width_of(column))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Renders the matrix as aligned text, one line per row.
#[must_use]
pub fn render(matrix: &SnailMatrix) -> String {
    TextMatrix::new(matrix).to_string()
}

/// Output format capable of presenting a snail matrix.
pub trait RenderingBackend {
    /// Produces the complete output block for the matrix.
    fn render(&self, matrix: &SnailMatrix) -> AnyResult<String>;
}

/// Backend producing the aligned text block.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextBackend;

impl RenderingBackend for TextBackend {
    fn render(&self, matrix: &SnailMatrix) -> AnyResult<String> {
        Ok(render(matrix))
    }
}

/// Backend producing a single-line JSON document followed by a newline.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonBackend;

impl RenderingBackend for JsonBackend {
    fn render(&self, matrix: &SnailMatrix) -> AnyResult<String> {
        let snapshot = query::snapshot(matrix);
        let mut json =
            serde_json::to_string(&snapshot).context("failed to serialise matrix snapshot")?;
        json.push('\n');
        Ok(json)
    }
}
