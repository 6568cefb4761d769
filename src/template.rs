//! The grid-template matrix: construction, insertion, rendering.
//!
//! [`GridTemplate`] stores the template in standard CSS `grid-template` order:
//! content rows of area names each carrying a trailing row track size, plus
//! the column track sizes emitted on the final `/` line. The formatted
//! property value and the structured layout are both derived on demand.

use std::fmt;

use crate::index::{Axis, ColumnPosition, IndexError, RowPosition, resolve_item};

// ---------------------------------------------------------------------------
// GridOptions
// ---------------------------------------------------------------------------

/// Seed values for a new 1x1 grid.
///
/// Area names and track sizes are opaque CSS tokens; their content is never
/// validated.
#[derive(Debug, Clone)]
pub struct GridOptions {
    /// Area name of the single starting cell.
    pub area: String,
    /// Track size of the single starting column.
    pub column_size: String,
    /// Track size of the single starting row.
    pub row_size: String,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            area: ".".into(),
            column_size: "1fr".into(),
            row_size: "1fr".into(),
        }
    }
}

impl GridOptions {
    /// Create default options (`.` area, `1fr` tracks).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting area name (builder).
    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = area.into();
        self
    }

    /// Set the starting column track size (builder).
    pub fn with_column_size(mut self, size: impl Into<String>) -> Self {
        self.column_size = size.into();
        self
    }

    /// Set the starting row track size (builder).
    pub fn with_row_size(mut self, size: impl Into<String>) -> Self {
        self.row_size = size.into();
        self
    }
}

// ---------------------------------------------------------------------------
// GridTemplate
// ---------------------------------------------------------------------------

/// One content row: area names in column order plus the row's track size.
#[derive(Debug, Clone)]
struct TemplateRow {
    areas: Vec<String>,
    size: String,
}

/// A mutable CSS `grid-template` value.
///
/// Starts as a 1x1 grid and only ever grows: rows and columns are inserted at
/// arbitrary positions (including negative logical indexes and the
/// one-past-end append slot) and never removed. Every operation is a direct
/// synchronous mutation or a pure read.
#[derive(Debug, Clone)]
pub struct GridTemplate {
    /// Content rows, top to bottom. Always at least one.
    rows: Vec<TemplateRow>,
    /// Column track sizes, left to right. Always at least one; every content
    /// row has exactly this many areas.
    column_sizes: Vec<String>,
}

impl GridTemplate {
    /// Create a 1x1 grid from default options (`.` area, `1fr` tracks).
    pub fn new() -> Self {
        Self::with_options(GridOptions::default())
    }

    /// Create a 1x1 grid from the given seed values.
    pub fn with_options(options: GridOptions) -> Self {
        Self {
            rows: vec![TemplateRow {
                areas: vec![options.area],
                size: options.row_size,
            }],
            column_sizes: vec![options.column_size],
        }
    }

    /// Number of content columns.
    pub fn columns(&self) -> usize {
        self.column_sizes.len()
    }

    /// Number of content rows.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Insert a column: `size` into the column tracks and `area` into every
    /// content row, at the slot `position` resolves to.
    pub fn add_column(
        &mut self,
        area: impl Into<String>,
        size: impl Into<String>,
        position: ColumnPosition,
    ) -> Result<(), IndexError> {
        let slot = position.resolve(self.columns())?;
        let area = area.into();
        self.column_sizes.insert(slot, size.into());
        for row in &mut self.rows {
            row.areas.insert(slot, area.clone());
        }
        Ok(())
    }

    /// Insert a row of `columns()` copies of `area` with track size `size`,
    /// at the slot `position` resolves to.
    pub fn add_row(
        &mut self,
        area: impl Into<String>,
        size: impl Into<String>,
        position: RowPosition,
    ) -> Result<(), IndexError> {
        let slot = position.resolve(self.rows())?;
        let row = TemplateRow {
            areas: vec![area.into(); self.column_sizes.len()],
            size: size.into(),
        };
        self.rows.insert(slot, row);
        Ok(())
    }

    /// The area name at (`row`, `column`). Negative indexes count from the end.
    pub fn area(&self, row: isize, column: isize) -> Result<&str, IndexError> {
        let row_slot = resolve_item(row, self.rows.len(), Axis::Row)?;
        let column_slot = resolve_item(column, self.column_sizes.len(), Axis::Column)?;
        Ok(&self.rows[row_slot].areas[column_slot])
    }

    /// The track size of a row. Negative indexes count from the end.
    pub fn row_size(&self, row: isize) -> Result<&str, IndexError> {
        let slot = resolve_item(row, self.rows.len(), Axis::Row)?;
        Ok(&self.rows[slot].size)
    }

    /// The track size of a column. Negative indexes count from the end.
    pub fn column_size(&self, column: isize) -> Result<&str, IndexError> {
        let slot = resolve_item(column, self.column_sizes.len(), Axis::Column)?;
        Ok(&self.column_sizes[slot])
    }

    /// The formatted `grid-template` property value.
    ///
    /// Each line is newline-prefixed, so the string starts with a newline and
    /// drops straight into place after `grid-template:`. Content rows come
    /// first, quoted, with every area right-padded to its column's widest
    /// content value so the closing quotes align; the final line is `/`
    /// followed by the column track sizes.
    pub fn css(&self) -> String {
        self.to_string()
    }

    /// The matrix in standard CSS order, without alignment padding: one
    /// vector per content row (areas, then the row track size), then a final
    /// vector of the column track sizes and one empty string.
    pub fn layout(&self) -> Vec<Vec<String>> {
        let mut rows: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                let mut cells = row.areas.clone();
                cells.push(row.size.clone());
                cells
            })
            .collect();
        let mut sizes = self.column_sizes.clone();
        sizes.push(String::new());
        rows.push(sizes);
        rows
    }

    /// Per-column maximum area-name length. Track sizes do not participate.
    fn column_widths(&self) -> Vec<usize> {
        (0..self.column_sizes.len())
            .map(|column| {
                self.rows
                    .iter()
                    .map(|row| row.areas[column].len())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

impl Default for GridTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GridTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        for row in &self.rows {
            write!(f, "\n\"")?;
            for (column, area) in row.areas.iter().enumerate() {
                if column > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{area:<width$}", width = widths[column])?;
            }
            write!(f, "\" {}", row.size)?;
        }
        write!(f, "\n/ {}", self.column_sizes.join(" "))
    }
}
