use std::fmt;

use super::player::Player;
use crate::error::MoveError;

pub const COLUMNS: usize = 6;
pub const ROWS: usize = 7;
pub const CELLS: usize = COLUMNS * ROWS;
/// Number of same-player cells in a line that wins the game
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Red,
    Blue,
}

impl Cell {
    /// The player occupying this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Blue => Some(Player::Blue),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Single-character symbol used by the plain-text board
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Blue => 'B',
        }
    }
}

/// A (column, row) coordinate. Row 0 is the top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct Position {
    pub column: usize,
    pub row: usize,
}

impl Position {
    pub const fn new(column: usize, row: usize) -> Self {
        Position { column, row }
    }

    /// The neighbouring position one step along `direction`, if it is on the board
    fn step(self, direction: Direction) -> Option<Position> {
        let (dc, dr) = direction.delta();
        let column = self.column.checked_add_signed(dc)?;
        let row = self.row.checked_add_signed(dr)?;
        (column < COLUMNS && row < ROWS).then_some(Position { column, row })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Orientation of a line of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Along a row, left to right
    Horizontal,
    /// Down a column, top to bottom
    Vertical,
    /// "/" diagonal, walked from bottom-left to top-right
    Rising,
    /// "\" diagonal, walked from top-left to bottom-right
    Falling,
}

impl Direction {
    /// Order in which [`Board::find_line`] scans the board. When a move
    /// completes several lines at once, the first one found in this order is
    /// the one reported.
    pub const SCAN_ORDER: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Rising,
        Direction::Falling,
    ];

    /// (column, row) offset of one step
    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
            Direction::Rising => (1, -1),
            Direction::Falling => (1, 1),
        }
    }

    /// First cell of every line in this direction, in scan order.
    ///
    /// Diagonals start on the left edge (top to bottom) and then continue
    /// along the bottom row for rising lines or the top row for falling ones,
    /// which together reach every diagonal on the board exactly once.
    fn line_starts(self) -> Vec<Position> {
        let left_edge = (0..ROWS).map(|row| Position::new(0, row));
        match self {
            Direction::Horizontal => left_edge.collect(),
            Direction::Vertical => (0..COLUMNS).map(|column| Position::new(column, 0)).collect(),
            Direction::Rising => left_edge
                .chain((1..COLUMNS).map(|column| Position::new(column, ROWS - 1)))
                .collect(),
            Direction::Falling => left_edge
                .chain((1..COLUMNS).map(|column| Position::new(column, 0)))
                .collect(),
        }
    }

    /// Walk from `start` to the edge of the board
    pub fn line_from(self, start: Position) -> impl Iterator<Item = Position> {
        std::iter::successors(Some(start), move |pos| pos.step(self))
    }

    /// Every line in this direction long enough to hold a win, in scan order
    pub fn lines(self) -> impl Iterator<Item = Vec<Position>> {
        self.line_starts()
            .into_iter()
            .map(move |start| self.line_from(start).collect::<Vec<_>>())
            .filter(|line| line.len() >= WIN_LENGTH)
    }
}

/// The cells of a completed four-in-a-row, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct WinningLine {
    direction: Direction,
    cells: [Position; WIN_LENGTH],
}

impl WinningLine {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn cells(&self) -> &[Position; WIN_LENGTH] {
        &self.cells
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; ROWS]; COLUMNS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; ROWS]; COLUMNS],
        }
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row 6 is the bottom. Panics when out of range.
    pub fn get(&self, column: usize, row: usize) -> Cell {
        self.cells[column][row]
    }

    /// Get the cell at `pos`, or `None` when it is off the board
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos.column)?.get(pos.row).copied()
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= COLUMNS {
            return true;
        }
        self.cells[column][0] != Cell::Empty
    }

    /// Row a coin dropped into `column` would land in
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        let stack = self.cells.get(column)?;
        (0..ROWS).rev().find(|&row| stack[row].is_empty())
    }

    /// Drop a coin in a column, returns the row where it landed
    pub fn drop_piece(&mut self, column: usize, player: Player) -> Result<usize, MoveError> {
        if column >= COLUMNS {
            return Err(MoveError::InvalidColumn { column });
        }

        let row = self
            .landing_row(column)
            .ok_or(MoveError::ColumnFull { column })?;
        self.cells[column][row] = player.to_cell();
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLUMNS).all(|column| self.is_column_full(column))
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Scan the whole board for four of `player`'s coins in a row.
    ///
    /// Each line is walked keeping the run of consecutive matching cells;
    /// any other cell clears the run. The first run to reach
    /// [`WIN_LENGTH`] is returned, searching directions in
    /// [`Direction::SCAN_ORDER`].
    pub fn find_line(&self, player: Player) -> Option<WinningLine> {
        let target = player.to_cell();

        for direction in Direction::SCAN_ORDER {
            for line in direction.lines() {
                let mut run = [Position::default(); WIN_LENGTH];
                let mut len = 0;

                for pos in line {
                    if self.get(pos.column, pos.row) != target {
                        len = 0;
                        continue;
                    }
                    run[len] = pos;
                    len += 1;
                    if len == WIN_LENGTH {
                        return Some(WinningLine { direction, cells: run });
                    }
                }
            }
        }

        None
    }

    /// Plain-text rendering: one line per row, top row first, followed by the
    /// column indices.
    pub fn render_with(&self, symbol: impl Fn(Cell) -> char) -> String {
        let mut out = String::with_capacity((COLUMNS * 2 + 1) * (ROWS + 1));
        for row in 0..ROWS {
            let line: Vec<String> = (0..COLUMNS)
                .map(|column| symbol(self.get(column, row)).to_string())
                .collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        let footer: Vec<String> = (0..COLUMNS).map(|column| column.to_string()).collect();
        out.push_str(&footer.join(" "));
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(Cell::symbol))
    }
}
