//! Fixed-size grid shared by every game.
//!
//! A [`Board`] is a flat, row-major sequence of cells paired with its
//! dimensions. Every access is bounds checked; coordinates that leave the
//! grid are reported as [`OutOfBounds`] rather than panicking.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// A cell value that knows how to draw itself.
pub trait Glyph: Copy + Eq + std::fmt::Debug {
    /// Fixed glyph used when rendering the board.
    fn glyph(self) -> &'static str;
}

/// A cell address on a board (zero-based).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_new::new,
)]
pub struct Coord {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A coordinate fell outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Cell ({row}, {col}) is outside the {rows}x{cols} board")]
pub struct OutOfBounds {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
    /// Board height.
    pub rows: usize,
    /// Board width.
    pub cols: usize,
}

/// One of the eight compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, strum::Display)]
pub enum Direction {
    /// Towards row 0.
    #[strum(serialize = "up")]
    Up,
    /// Towards the last row.
    #[strum(serialize = "down")]
    Down,
    /// Towards column 0.
    #[strum(serialize = "left")]
    Left,
    /// Towards the last column.
    #[strum(serialize = "right")]
    Right,
    /// Up and left.
    #[strum(serialize = "up-left")]
    UpLeft,
    /// Up and right.
    #[strum(serialize = "up-right")]
    UpRight,
    /// Down and left.
    #[strum(serialize = "down-left")]
    DownLeft,
    /// Down and right.
    #[strum(serialize = "down-right")]
    DownRight,
}

impl Direction {
    /// Row and column offsets of a single step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }

    /// True for the four diagonal directions.
    pub fn is_diagonal(self) -> bool {
        let (dr, dc) = self.delta();
        dr != 0 && dc != 0
    }

    /// Splits a diagonal into its vertical and horizontal components.
    ///
    /// Returns `None` for orthogonal directions.
    pub fn components(self) -> Option<(Direction, Direction)> {
        match self {
            Direction::UpLeft => Some((Direction::Up, Direction::Left)),
            Direction::UpRight => Some((Direction::Up, Direction::Right)),
            Direction::DownLeft => Some((Direction::Down, Direction::Left)),
            Direction::DownRight => Some((Direction::Down, Direction::Right)),
            _ => None,
        }
    }
}

/// Row-major grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Glyph> Board<T> {
    /// Creates a board with every cell set to `fill`.
    pub fn filled(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    /// Builds a board from row-major cells.
    ///
    /// Returns `None` when `cells.len() != rows * cols`.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<T>) -> Option<Self> {
        (cells.len() == rows * cols).then_some(Self { rows, cols, cells })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Whether `coord` lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, OutOfBounds> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Reads the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<T, OutOfBounds> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Overwrites the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, cell: T) -> Result<(), OutOfBounds> {
        let idx = self.index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Reads the cell at `coord`.
    pub fn get_at(&self, coord: Coord) -> Result<T, OutOfBounds> {
        self.get(coord.row, coord.col)
    }

    /// Overwrites the cell at `coord`.
    pub fn set_at(&mut self, coord: Coord, cell: T) -> Result<(), OutOfBounds> {
        self.set(coord.row, coord.col, cell)
    }

    /// The neighbouring coordinate one step in `direction`, if it is on the board.
    pub fn step(&self, from: Coord, direction: Direction) -> Option<Coord> {
        let (dr, dc) = direction.delta();
        let row = from.row.checked_add_signed(dr)?;
        let col = from.col.checked_add_signed(dc)?;
        let to = Coord::new(row, col);
        self.contains(to).then_some(to)
    }

    /// The neighbouring coordinate and its cell, if it is on the board.
    pub fn neighbor(&self, from: Coord, direction: Direction) -> Option<(Coord, T)> {
        let to = self.step(from, direction)?;
        self.get_at(to).ok().map(|cell| (to, cell))
    }

    /// Number of cells equal to `cell`.
    pub fn count(&self, cell: T) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// Coordinates of every cell equal to `cell`, in row-major order.
    pub fn positions(&self, cell: T) -> impl Iterator<Item = Coord> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, c)| **c == cell)
            .map(move |(i, _)| Coord::new(i / cols, i % cols))
    }

    /// Renders one glyph per cell, rows separated by newlines.
    pub fn render(&self) -> String {
        self.cells
            .chunks(self.cols.max(1))
            .map(|row| row.iter().map(|c| c.glyph()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Bit {
        Off,
        On,
    }

    impl Glyph for Bit {
        fn glyph(self) -> &'static str {
            match self {
                Bit::Off => ".",
                Bit::On => "#",
            }
        }
    }

    #[test]
    fn test_get_and_set_within_bounds() {
        let mut board = Board::filled(2, 3, Bit::Off);
        board.set(1, 2, Bit::On).unwrap();
        assert_eq!(board.get(1, 2), Ok(Bit::On));
        assert_eq!(board.get(0, 0), Ok(Bit::Off));
    }

    #[test]
    fn test_out_of_bounds_is_reported() {
        let mut board = Board::filled(2, 3, Bit::Off);
        let err = board.get(2, 0).unwrap_err();
        assert_eq!(err.rows, 2);
        assert_eq!(err.cols, 3);
        assert!(board.set(0, 3, Bit::On).is_err());
        assert_eq!(board.count(Bit::On), 0);
    }

    #[test]
    fn test_from_cells_checks_length() {
        assert!(Board::from_cells(2, 2, vec![Bit::Off; 3]).is_none());
        assert!(Board::from_cells(2, 2, vec![Bit::Off; 4]).is_some());
    }

    #[test]
    fn test_step_stays_on_board() {
        let board = Board::filled(3, 3, Bit::Off);
        let corner = Coord::new(0, 0);
        assert_eq!(board.step(corner, Direction::Up), None);
        assert_eq!(board.step(corner, Direction::UpLeft), None);
        assert_eq!(
            board.step(corner, Direction::DownRight),
            Some(Coord::new(1, 1))
        );
        assert_eq!(board.step(Coord::new(2, 2), Direction::Right), None);
    }

    #[test]
    fn test_render_rows() {
        let mut board = Board::filled(2, 3, Bit::Off);
        board.set(0, 1, Bit::On).unwrap();
        board.set(1, 2, Bit::On).unwrap();
        assert_eq!(board.render(), ".#.\n..#");
    }

    #[test]
    fn test_positions_row_major() {
        let mut board = Board::filled(2, 2, Bit::Off);
        board.set(1, 0, Bit::On).unwrap();
        board.set(0, 1, Bit::On).unwrap();
        let found: Vec<_> = board.positions(Bit::On).collect();
        assert_eq!(found, vec![Coord::new(0, 1), Coord::new(1, 0)]);
    }

    #[test]
    fn test_diagonal_components() {
        assert!(Direction::DownLeft.is_diagonal());
        assert!(!Direction::Left.is_diagonal());
        assert_eq!(
            Direction::DownLeft.components(),
            Some((Direction::Down, Direction::Left))
        );
        assert_eq!(Direction::Up.components(), None);
    }
}
