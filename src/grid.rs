// src/grid.rs

//! The growable, ragged 2-D cell buffer and its cursor.
//!
//! Rows are allocated on first touch and grow independently of one another,
//! so a document with one very long line does not pay for width anywhere
//! else. There is no scrolling: the grid simply grows to contain everything
//! ever written, and cursor movement past allocated storage triggers growth
//! on the next write rather than truncation or error.

use log::trace;

use crate::cell::{Attributes, Cell, BLANK_CELL};
use crate::config::Config;
use crate::error::DecodeError;

/// Minimum row-index allocation, in rows.
const MIN_ALLOC_ROWS: usize = 64;
/// Minimum per-row cell allocation, in columns.
const MIN_ALLOC_COLS: usize = 80;
/// Horizontal tab stops every 8 columns.
const TAB_INTERVAL: usize = 8;

/// Doubling growth: smallest power-of-two-ish target above `needed`,
/// starting from `max(current, min)`.
fn grown_len(current: usize, needed: usize, min: usize) -> usize {
    let mut target = current.max(min);
    while target <= needed {
        target *= 2;
    }
    target
}

/// One row of the grid: cell storage plus the written width.
///
/// `width` is the highest column ever written plus one; cells below it that
/// were never explicitly written read as [`BLANK_CELL`]. Allocated capacity
/// (the `Vec` length) is tracked separately and is always >= `width`.
#[derive(Debug, Default)]
pub struct Row {
    cells: Vec<Cell>,
    width: usize,
}

impl Row {
    /// Grows cell storage to cover `col`, filling new cells with blanks.
    fn ensure_col(&mut self, col: usize) -> Result<(), DecodeError> {
        if col < self.cells.len() {
            return Ok(());
        }
        let target = grown_len(self.cells.len(), col, MIN_ALLOC_COLS);
        trace!("growing row cells {} -> {}", self.cells.len(), target);
        self.cells
            .try_reserve(target - self.cells.len())
            .map_err(|source| DecodeError::Allocation {
                what: "row cells",
                source,
            })?;
        self.cells.resize(target, BLANK_CELL);
        Ok(())
    }

    fn write(&mut self, col: usize, code: u8, attr: Attributes) -> Result<(), DecodeError> {
        self.ensure_col(col)?;
        self.cells[col] = Cell { code, attr };
        if self.width <= col {
            self.width = col + 1;
        }
        Ok(())
    }

    /// Written width: highest column ever written plus one.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The written portion of the row. Never-written cells within it are
    /// blank with default attributes.
    pub fn cells(&self) -> &[Cell] {
        &self.cells[..self.width]
    }
}

/// The ragged grid of rows plus the logical cursor.
#[derive(Debug)]
pub struct Grid {
    rows: Vec<Option<Row>>,
    height: usize,
    cursor_col: usize,
    cursor_row: usize,
    /// Wrap column, 0 for unbounded.
    wrap_width: usize,
}

impl Grid {
    pub fn new(config: &Config) -> Self {
        Grid {
            rows: Vec::new(),
            height: 0,
            cursor_col: 0,
            cursor_row: 0,
            wrap_width: config.screen_width as usize,
        }
    }

    /// Grows the row index to cover `row`, filling with absent rows.
    fn ensure_row(&mut self, row: usize) -> Result<(), DecodeError> {
        if row < self.rows.len() {
            return Ok(());
        }
        let target = grown_len(self.rows.len(), row, MIN_ALLOC_ROWS);
        trace!("growing row index {} -> {}", self.rows.len(), target);
        self.rows
            .try_reserve(target - self.rows.len())
            .map_err(|source| DecodeError::Allocation {
                what: "row index",
                source,
            })?;
        self.rows.resize_with(target, || None);
        Ok(())
    }

    /// Writes `code` at the cursor with a snapshot of `attr`, growing storage
    /// as needed, then advances the cursor one column.
    ///
    /// With a fixed wrap width, reaching (or having been moved past) the
    /// width wraps to the start of the next row before the character lands.
    pub fn write_cell(&mut self, code: u8, attr: Attributes) -> Result<(), DecodeError> {
        if self.wrap_width > 0 && self.cursor_col >= self.wrap_width {
            self.cursor_col = 0;
            self.cursor_row += 1;
        }

        let row_idx = self.cursor_row;
        self.ensure_row(row_idx)?;
        if self.height <= row_idx {
            self.height = row_idx + 1;
        }

        let row = self.rows[row_idx].get_or_insert_with(Row::default);
        row.write(self.cursor_col, code, attr)?;
        self.cursor_col += 1;
        Ok(())
    }

    // --- Cursor movement ---
    //
    // Movement never allocates; rows materialize when something is written.
    // Upward/leftward movement clamps at zero, downward/rightward is
    // unbounded.

    pub fn cursor_up(&mut self, n: usize) {
        self.cursor_row = self.cursor_row.saturating_sub(n);
    }

    pub fn cursor_down(&mut self, n: usize) {
        self.cursor_row += n;
    }

    pub fn cursor_forward(&mut self, n: usize) {
        self.cursor_col += n;
    }

    /// Absolute move, 0-based.
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.cursor_row = row;
        self.cursor_col = col;
    }

    /// Absolute column, 0-based, row unchanged.
    pub fn set_column(&mut self, col: usize) {
        self.cursor_col = col;
    }

    pub fn backspace(&mut self) {
        self.cursor_col = self.cursor_col.saturating_sub(1);
    }

    pub fn carriage_return(&mut self) {
        self.cursor_col = 0;
    }

    /// Row down, column unchanged. No scrolling; the grid grows instead.
    pub fn line_feed(&mut self) {
        self.cursor_row += 1;
    }

    /// Advance to the next multiple-of-8 column. No cells are written; the
    /// skipped span stays blank.
    pub fn tab(&mut self) {
        self.cursor_col = (self.cursor_col / TAB_INTERVAL + 1) * TAB_INTERVAL;
    }

    // --- Read accessors ---

    /// Written height: highest row ever written plus one.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Written width of row `row`, 0 for rows never written.
    pub fn row_width(&self, row: usize) -> usize {
        self.row(row).map_or(0, Row::width)
    }

    /// The row at `row`, if anything was ever written to it.
    pub fn row(&self, row: usize) -> Option<&Row> {
        if row >= self.height {
            return None;
        }
        self.rows.get(row).and_then(Option::as_ref)
    }

    /// The cell at (`row`, `col`), if within the written extent of its row.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.row(row).and_then(|r| r.cells().get(col))
    }

    /// Current cursor position as (row, col), 0-based.
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unbounded() -> Grid {
        Grid::new(&Config {
            screen_width: 0,
            screen_lines: 0,
        })
    }

    #[test]
    fn write_grows_and_tracks_extent() {
        let mut grid = unbounded();
        grid.move_to(2, 1000);
        grid.write_cell(b'X', Attributes::default()).unwrap();

        assert_eq!(grid.height(), 3);
        assert_eq!(grid.row_width(2), 1001);
        assert_eq!(grid.cell(2, 1000).unwrap().code, b'X');
        // Intermediate untouched cells read as blank with default attributes.
        let mid = grid.cell(2, 500).unwrap();
        assert!(mid.is_blank());
        assert_eq!(mid.attr, Attributes::default());
        // Rows the cursor skipped over were never materialized.
        assert_eq!(grid.row_width(0), 0);
        assert!(grid.row(0).is_none());
    }

    #[test]
    fn wrap_at_screen_width() {
        let mut grid = Grid::new(&Config {
            screen_width: 4,
            screen_lines: 0,
        });
        for _ in 0..5 {
            grid.write_cell(b'a', Attributes::default()).unwrap();
        }
        assert_eq!(grid.row_width(0), 4);
        assert_eq!(grid.cell(1, 0).unwrap().code, b'a');
        assert_eq!(grid.cursor(), (1, 1));
    }

    #[test]
    fn wrap_after_explicit_move_past_width() {
        let mut grid = Grid::new(&Config {
            screen_width: 4,
            screen_lines: 0,
        });
        grid.set_column(9);
        grid.write_cell(b'z', Attributes::default()).unwrap();
        assert_eq!(grid.cell(1, 0).unwrap().code, b'z');
    }

    #[test]
    fn movement_clamps_at_zero() {
        let mut grid = unbounded();
        grid.cursor_up(5);
        grid.backspace();
        assert_eq!(grid.cursor(), (0, 0));
        grid.move_to(3, 2);
        grid.cursor_up(100);
        assert_eq!(grid.cursor(), (0, 2));
    }

    #[test]
    fn tab_advances_to_next_stop() {
        let mut grid = unbounded();
        grid.tab();
        assert_eq!(grid.cursor(), (0, 8));
        grid.set_column(15);
        grid.tab();
        assert_eq!(grid.cursor(), (0, 16));
        grid.tab();
        assert_eq!(grid.cursor(), (0, 24));
    }

    #[test]
    fn overwrite_replaces_cell_in_place() {
        let mut grid = unbounded();
        grid.write_cell(b'A', Attributes::default()).unwrap();
        grid.move_to(0, 0);
        grid.write_cell(b'B', Attributes::default()).unwrap();
        assert_eq!(grid.cell(0, 0).unwrap().code, b'B');
        assert_eq!(grid.row_width(0), 1);
    }

    #[test]
    fn line_feed_alone_does_not_create_rows() {
        let mut grid = unbounded();
        grid.line_feed();
        grid.line_feed();
        assert_eq!(grid.height(), 0);
        grid.write_cell(b'x', Attributes::default()).unwrap();
        assert_eq!(grid.height(), 3);
    }
}
