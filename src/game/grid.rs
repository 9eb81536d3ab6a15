use crate::error::MoveError;

use super::Player;

/// A single slot on the board: empty, or held by a player.
pub type Cell = Option<Player>;

/// Number of contiguous same-player cells that make a win.
pub const WIN_LENGTH: usize = 4;

/// Direction of a winning run, named by its step from the anchor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    /// All directions, in the order the win scan tries them.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// `(row, column)` step from one cell of a run to the next.
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

/// Four cells of one player forming a contiguous run, anchor first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinLine {
    pub cells: [(usize, usize); WIN_LENGTH],
    pub direction: Direction,
}

impl WinLine {
    /// Whether the run covers the given cell.
    pub fn contains(&self, row: usize, column: usize) -> bool {
        self.cells.iter().any(|&(r, c)| r == row && c == column)
    }
}

/// The board grid. Row 0 is the top; pieces stack upward from row `rows - 1`.
///
/// Dimensions are fixed at construction. A cell, once set, is never cleared;
/// starting over means building a new grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major cell storage (`row * cols + column`).
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid. Dimensions must be positive.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be positive");
        Grid {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, column: usize) -> Option<usize> {
        if row < self.rows && column < self.cols {
            Some(row * self.cols + column)
        } else {
            None
        }
    }

    /// Get the cell at a position. Row 0 is the top row.
    ///
    /// Panics if the position is outside the grid.
    pub fn get(&self, row: usize, column: usize) -> Cell {
        let i = self
            .index(row, column)
            .expect("cell position outside the grid");
        self.cells[i]
    }

    /// Largest open row index in `column`, scanning from the bottom row
    /// upward; `Ok(None)` when the column is full.
    pub fn lowest_open_row(&self, column: usize) -> Result<Option<usize>, MoveError> {
        if column >= self.cols {
            return Err(MoveError::ColumnOutOfRange { column });
        }
        Ok((0..self.rows).rev().find(|&row| self.get(row, column).is_none()))
    }

    /// Whether `column` has no open row left. Out-of-range columns count as
    /// full.
    pub fn is_column_full(&self, column: usize) -> bool {
        !matches!(self.lowest_open_row(column), Ok(Some(_)))
    }

    /// Set `(row, column)` to `player`.
    ///
    /// The target must be an empty in-bounds cell; an occupied target is
    /// reported, never overwritten.
    pub fn place(&mut self, row: usize, column: usize, player: Player) -> Result<(), MoveError> {
        let i = self
            .index(row, column)
            .ok_or(MoveError::OutOfBounds { row, column })?;
        if self.cells[i].is_some() {
            return Err(MoveError::CellOccupied { row, column });
        }
        self.cells[i] = Some(player);
        Ok(())
    }

    /// Drop a piece down `column`, returning the row where it landed.
    pub fn drop_piece(&mut self, column: usize, player: Player) -> Result<usize, MoveError> {
        let row = self
            .lowest_open_row(column)?
            .ok_or(MoveError::ColumnFull { column })?;
        self.place(row, column, player)?;
        Ok(row)
    }

    /// Whether every cell holds a piece.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Scan for a four-in-a-row belonging to `player`.
    ///
    /// Anchors are visited in row-major order (row ascending, then column
    /// ascending) and directions in [`Direction::ALL`] order; the first
    /// complete run found wins, which fixes the reported line when a board
    /// holds more than one run.
    pub fn detect_win(&self, player: Player) -> Option<WinLine> {
        for row in 0..self.rows {
            for column in 0..self.cols {
                for direction in Direction::ALL {
                    if let Some(line) = self.run_from(row, column, direction, player) {
                        return Some(line);
                    }
                }
            }
        }
        None
    }

    /// The `WIN_LENGTH`-cell run anchored at `(row, column)` stepping along
    /// `direction`, if every cell is in bounds and held by `player`.
    fn run_from(
        &self,
        row: usize,
        column: usize,
        direction: Direction,
        player: Player,
    ) -> Option<WinLine> {
        let (dr, dc) = direction.step();
        let mut cells = [(0, 0); WIN_LENGTH];
        for (i, slot) in cells.iter_mut().enumerate() {
            let r = row as isize + dr * i as isize;
            let c = column as isize + dc * i as isize;
            if r < 0 || c < 0 || r >= self.rows as isize || c >= self.cols as isize {
                return None;
            }
            let (r, c) = (r as usize, c as usize);
            if self.get(r, c) != Some(player) {
                return None;
            }
            *slot = (r, c);
        }
        Some(WinLine { cells, direction })
    }
}
