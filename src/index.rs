//! Logical index resolution: axes, insertion positions, out-of-range errors.
//!
//! Grid rows and columns are addressed by zero-based logical indexes that may
//! be negative (`-1` is the last item, counting from the end). Resolution maps
//! a logical index onto a storage slot; insertions additionally accept the
//! one-past-end slot, which means "append after last".

use std::fmt;

// ---------------------------------------------------------------------------
// Axis
// ---------------------------------------------------------------------------

/// Which axis of the grid an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// A content row (top to bottom).
    Row,
    /// A content column (left to right).
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Errors from index resolution.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("{axis} index {index} is out of range")]
    OutOfRange { axis: Axis, index: isize },
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve a logical index to an insertion slot among `count` items.
///
/// Negative indexes count from the end, so `-1` resolves to the last item.
/// The valid resolved range is `[0, count]` inclusive: the `count` slot is one
/// past the last item and denotes appending after it.
pub fn resolve_insert(index: isize, count: usize, axis: Axis) -> Result<usize, IndexError> {
    let resolved = if index < 0 {
        index + count as isize
    } else {
        index
    };
    if resolved < 0 || resolved > count as isize {
        return Err(IndexError::OutOfRange { axis, index });
    }
    Ok(resolved as usize)
}

/// Resolve a logical index to an existing item among `count` items.
///
/// Same mapping as [`resolve_insert`], but the one-past-end slot is not a
/// readable item, so the valid resolved range is `[0, count - 1]`.
pub fn resolve_item(index: isize, count: usize, axis: Axis) -> Result<usize, IndexError> {
    let resolved = resolve_insert(index, count, axis)?;
    if resolved == count {
        return Err(IndexError::OutOfRange { axis, index });
    }
    Ok(resolved)
}

// ---------------------------------------------------------------------------
// ColumnPosition / RowPosition
// ---------------------------------------------------------------------------

/// Where to insert a new column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnPosition {
    /// Before the current first column.
    Left,
    /// After the current last column.
    #[default]
    Right,
    /// Before the column at this logical index; the one-past-end index appends.
    At(isize),
}

impl ColumnPosition {
    /// Resolve to an insertion slot among `count` existing columns.
    pub fn resolve(self, count: usize) -> Result<usize, IndexError> {
        match self {
            ColumnPosition::Left => resolve_insert(0, count, Axis::Column),
            ColumnPosition::Right => Ok(resolve_insert(-1, count, Axis::Column)? + 1),
            ColumnPosition::At(index) => resolve_insert(index, count, Axis::Column),
        }
    }
}

impl From<isize> for ColumnPosition {
    fn from(index: isize) -> Self {
        ColumnPosition::At(index)
    }
}

/// Where to insert a new row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowPosition {
    /// Before the current first row.
    Top,
    /// After the current last row.
    #[default]
    Bottom,
    /// Before the row at this logical index; the one-past-end index appends.
    At(isize),
}

impl RowPosition {
    /// Resolve to an insertion slot among `count` existing rows.
    pub fn resolve(self, count: usize) -> Result<usize, IndexError> {
        match self {
            RowPosition::Top => resolve_insert(0, count, Axis::Row),
            RowPosition::Bottom => Ok(resolve_insert(-1, count, Axis::Row)? + 1),
            RowPosition::At(index) => resolve_insert(index, count, Axis::Row),
        }
    }
}

impl From<isize> for RowPosition {
    fn from(index: isize) -> Self {
        RowPosition::At(index)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
