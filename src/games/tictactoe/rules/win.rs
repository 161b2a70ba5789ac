//! Win detection logic for tic-tac-toe.

use super::super::types::{Mark, Square, WinRule};
use crate::games::board::{Board, Coord, Direction};
use tracing::instrument;

/// Directions that cover every line exactly once when scanned from each cell.
const LINE_DIRECTIONS: [Direction; 4] = [
    Direction::Right,
    Direction::Down,
    Direction::DownRight,
    Direction::DownLeft,
];

/// Checks if there is a winner on the board under `rule`.
#[instrument(skip(board))]
pub fn check_winner(board: &Board<Square>, rule: WinRule) -> Option<Mark> {
    match rule {
        WinRule::Run(len) => run_winner(board, len),
        WinRule::LineSum(len) => line_sum_winner(board, len),
    }
}

/// Walks `len` cells from `start` in `direction`; `None` if the window leaves the board.
fn window(board: &Board<Square>, start: Coord, direction: Direction, len: usize) -> Option<Vec<Square>> {
    let mut cells = Vec::with_capacity(len);
    let mut at = start;
    cells.push(board.get_at(at).ok()?);
    for _ in 1..len {
        let (next, square) = board.neighbor(at, direction)?;
        cells.push(square);
        at = next;
    }
    Some(cells)
}

fn run_winner(board: &Board<Square>, len: usize) -> Option<Mark> {
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let start = Coord::new(row, col);
            let Ok(Square::Occupied(mark)) = board.get_at(start) else {
                continue;
            };
            for direction in LINE_DIRECTIONS {
                let complete = window(board, start, direction, len)
                    .is_some_and(|cells| cells.iter().all(|s| *s == Square::Occupied(mark)));
                if complete {
                    return Some(mark);
                }
            }
        }
    }
    None
}

fn judge(sum: i32, threshold: i32) -> Option<Mark> {
    if sum >= threshold {
        Some(Mark::O)
    } else if sum <= -threshold {
        Some(Mark::X)
    } else {
        None
    }
}

/// Sum-based detection: rows and columns are summed whole, diagonals in
/// windows of `len`. A row holding four O's and one X sums to 3 and does not
/// win; four O's with a gap anywhere in a row of five does.
fn line_sum_winner(board: &Board<Square>, len: usize) -> Option<Mark> {
    let threshold = len as i32;
    let value = |row: usize, col: usize| board.get(row, col).map(Square::value).unwrap_or(0);

    for row in 0..board.rows() {
        let sum: i32 = (0..board.cols()).map(|col| value(row, col)).sum();
        if let Some(mark) = judge(sum, threshold) {
            return Some(mark);
        }
    }

    for col in 0..board.cols() {
        let sum: i32 = (0..board.rows()).map(|row| value(row, col)).sum();
        if let Some(mark) = judge(sum, threshold) {
            return Some(mark);
        }
    }

    for direction in [Direction::DownRight, Direction::DownLeft] {
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                let Some(cells) = window(board, Coord::new(row, col), direction, len) else {
                    continue;
                };
                let sum: i32 = cells.iter().map(|s| s.value()).sum();
                if sum.abs() == threshold {
                    return judge(sum, threshold);
                }
            }
        }
    }

    None
}
