// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements a compact engine for solving classic 9x9 Sudoku.
//! It supports the following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Tracking the candidate digits of every cell and eliminating them as
//! digits are placed
//! * Solving Sudoku by propagating forced cells ("naked singles") and, where
//! propagation stalls, backtracking search over the most constrained cell
//!
//! # Parsing and printing Sudoku
//!
//! A grid is described by 81 cells in row-major order, where `.` stands for
//! an empty cell and `1` to `9` are given digits. All other characters are
//! filtered out before parsing, so puzzles may be formatted freely across
//! multiple lines. See [SudokuGrid::parse] for the exact rules.
//!
//! ```
//! use sudoku_propagate::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("
//!     ....1.8..
//!     52...3.7.
//!     618.72.4.
//!     471......
//!     ...3.7.1.
//!     8........
//!     ....3.426
//!     2.7...39.
//!     36.12..8.").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Solving Sudoku
//!
//! Solving is provided through the [Solver](solver::Solver) trait, whose
//! default implementation is the
//! [BacktrackingSolver](solver::BacktrackingSolver). It first assigns all
//! cells with a single remaining candidate and only searches when no forced
//! cell is left.
//!
//! ```
//! use sudoku_propagate::SudokuGrid;
//! use sudoku_propagate::solver::{BacktrackingSolver, Solution, Solver};
//!
//! let grid = SudokuGrid::parse("
//!     .....4.2.
//!     42.37.86.
//!     .675283..
//!     5.8...67.
//!     .71.5.24.
//!     .42...5.1
//!     ..916543.
//!     .34.89.56
//!     .5.7.....").unwrap();
//!
//! match BacktrackingSolver.solve(&grid) {
//!     Solution::Solved(solved) => {
//!         assert!(solved.is_solved());
//!         assert_eq!(Some(8), solved.get(0, 0));
//!     },
//!     Solution::Unsolvable => panic!("this puzzle has a solution")
//! }
//! ```
//!
//! A puzzle whose givens are consistent but which admits no completed grid
//! yields [Solution::Unsolvable](solver::Solution::Unsolvable), which is
//! distinct from the parse errors raised for malformed text.

pub mod cell;
pub mod error;
pub mod solver;


use cell::Cell;
use error::{SolveResult, SudokuParseError, SudokuParseResult};

use lazy_static::lazy_static;

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The width and height of the grid.
pub(crate) const SIZE: usize = 9;

/// The width and height of one box.
pub(crate) const BOX_SIZE: usize = 3;

/// The total number of cells in the grid.
pub(crate) const CELL_COUNT: usize = SIZE * SIZE;

/// The number of cells sharing a row, column, or box with any given cell.
pub(crate) const PEER_COUNT: usize = 20;

pub(crate) fn index(column: usize, row: usize) -> usize {
    column + row * SIZE
}

lazy_static! {

    /// For every cell index, the ascending indices of the 20 cells that
    /// share its row, column, or box. Computed once per process and shared
    /// read-only by all grids; it does not depend on grid content.
    static ref PEERS: [[usize; PEER_COUNT]; CELL_COUNT] = {
        let mut peers = [[0; PEER_COUNT]; CELL_COUNT];

        for cell in 0..CELL_COUNT {
            let (column, row) = (cell % SIZE, cell / SIZE);
            let mut next = 0;

            for other in 0..CELL_COUNT {
                if other == cell {
                    continue;
                }

                let (other_column, other_row) = (other % SIZE, other / SIZE);
                let same_row = other_row == row;
                let same_column = other_column == column;
                let same_box =
                    other_column / BOX_SIZE == column / BOX_SIZE &&
                    other_row / BOX_SIZE == row / BOX_SIZE;

                if same_row || same_column || same_box {
                    peers[cell][next] = other;
                    next += 1;
                }
            }

            debug_assert_eq!(PEER_COUNT, next);
        }

        peers
    };
}

/// A 9x9 Sudoku grid of 81 [Cell]s, addressed either by column and row or by
/// a flat index `column + 9 * row`. Each cell tracks the candidate digits
/// that its 20 peers still allow: [SudokuGrid::set] assigns a digit and
/// immediately removes it from every peer's candidates, so contradictions
/// between digits surface at the earliest possible point.
///
/// `SudokuGrid` implements `Display` for diagnostics, rendering empty cells
/// as blanks:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║   │   │   ║   │ 1 │   ║ 8 │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║ 5 │ 2 │   ║   │   │ 3 ║   │ 7 │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║ 6 │ 1 │ 8 ║   │ 7 │ 2 ║   │ 4 │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║ 4 │ 7 │ 1 ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║ 3 │   │ 7 ║   │ 1 │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║ 8 │   │   ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │ 3 │   ║ 4 │ 2 │ 6 ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║ 2 │   │ 7 ║   │   │   ║ 3 │ 9 │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║ 3 │ 6 │   ║ 1 │ 2 │   ║   │ 8 │   ║
/// ╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝
/// ```
///
/// The compact, re-parseable rendering of the same grid is provided by
/// [SudokuGrid::to_text].
///
/// Cloning a grid yields a deep, fully independent snapshot, and
/// [SudokuGrid::assign] overwrites a grid from such a snapshot. Together
/// they form the checkpoint/rollback mechanism of the solver.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct SudokuGrid {
    cells: Vec<Cell>
}

fn to_char(digit: Option<usize>) -> char {
    if let Some(n) = digit {
        (b'0' + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BOX_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.get(x, y)), ' ', '║', true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if y % BOX_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row().as_str())?;
        Ok(())
    }
}

impl SudokuGrid {

    /// Creates a new, empty Sudoku grid in which every cell is empty and has
    /// all nine candidates.
    pub fn new() -> SudokuGrid {
        SudokuGrid {
            cells: vec![Cell::default(); CELL_COUNT]
        }
    }

    /// Parses a grid from text. Only the characters `.` (empty cell) and `1`
    /// to `9` (given digit) are considered; everything else - whitespace,
    /// line breaks, separators, stray letters - is discarded beforehand.
    /// This is a deliberate tolerance for formatted or annotated puzzle
    /// text, not a validation step: only the count of relevant characters is
    /// checked, which must be exactly 81. Cells are assigned left-to-right,
    /// top-to-bottom.
    ///
    /// Every given digit is applied with full peer propagation, so a puzzle
    /// whose givens already contradict each other is rejected here rather
    /// than by the solver.
    ///
    /// # Errors
    ///
    /// * `SudokuParseError::WrongCellCount` if the number of relevant
    /// characters is not exactly 81.
    /// * `SudokuParseError::ContradictoryGivens` if applying a given digit
    /// raises a [Contradiction](error::Contradiction).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let relevant: Vec<char> = code.chars()
            .filter(|&c| c == '.' || ('1'..='9').contains(&c))
            .collect();

        if relevant.len() != CELL_COUNT {
            return Err(SudokuParseError::WrongCellCount);
        }

        let mut grid = SudokuGrid::new();

        for (cell, &c) in relevant.iter().enumerate() {
            grid.cells[cell].set_from_char(c)?;

            if let Some(digit) = grid.cells[cell].digit() {
                grid.eliminate_from_peers(cell, digit)?;
            }
        }

        Ok(grid)
    }

    /// Gets the digit of the cell in the given column and row, or `None` if
    /// that cell is empty.
    ///
    /// # Panics
    ///
    /// If `column` or `row` are not in the range `[0, 9[`.
    pub fn get(&self, column: usize, row: usize) -> Option<usize> {
        self.cells[index(column, row)].digit()
    }

    /// Gets a reference to the [Cell] at the given flat index.
    ///
    /// # Panics
    ///
    /// If `cell` is not in the range `[0, 81[`.
    pub fn cell(&self, cell: usize) -> &Cell {
        &self.cells[cell]
    }

    /// Assigns the given digit to the cell at the given flat index and
    /// removes it from the candidates of all 20 peer cells.
    ///
    /// # Errors
    ///
    /// Any [Contradiction](error::Contradiction) raised by the assignment or
    /// by the propagation, such as emptying a peer's candidates. The error
    /// surfaces to the caller unchanged; recovering from it by restoring a
    /// snapshot is the solver's business.
    ///
    /// # Panics
    ///
    /// If `cell` is not in the range `[0, 81[`.
    pub fn set(&mut self, cell: usize, digit: usize) -> SolveResult<()> {
        self.cells[cell].assign(digit)?;
        self.eliminate_from_peers(cell, digit)
    }

    fn eliminate_from_peers(&mut self, cell: usize, digit: usize)
            -> SolveResult<()> {
        for &peer in PEERS[cell].iter() {
            self.cells[peer].remove_candidate(digit)?;
        }

        Ok(())
    }

    /// Indicates whether any cell of this grid is still empty.
    pub fn is_open(&self) -> bool {
        self.cells.iter().any(Cell::is_empty)
    }

    fn group_is_complete(&self, cells: impl Iterator<Item = usize>) -> bool {
        let mut seen = [false; SIZE + 1];

        for cell in cells {
            match self.cells[cell].digit() {
                Some(digit) if !seen[digit] => seen[digit] = true,
                _ => return false
            }
        }

        true
    }

    /// Indicates whether this grid is completely filled and every row,
    /// column, and box contains each digit from 1 to 9 exactly once.
    pub fn is_solved(&self) -> bool {
        let rows_complete = (0..SIZE).all(|row|
            self.group_is_complete((0..SIZE).map(|column|
                index(column, row))));
        let columns_complete = (0..SIZE).all(|column|
            self.group_is_complete((0..SIZE).map(|row|
                index(column, row))));
        let boxes_complete = (0..SIZE).all(|box_index| {
            let start_column = (box_index % BOX_SIZE) * BOX_SIZE;
            let start_row = (box_index / BOX_SIZE) * BOX_SIZE;
            self.group_is_complete((0..SIZE).map(move |i|
                index(start_column + i % BOX_SIZE, start_row + i / BOX_SIZE)))
        });

        rows_complete && columns_complete && boxes_complete
    }

    /// Overwrites the state of this grid with the state of `other`, i.e.
    /// every cell's digit and candidates. This is the rollback half of the
    /// snapshot mechanism; the snapshot itself is an ordinary [Clone].
    pub fn assign(&mut self, other: &SudokuGrid) {
        for (cell, source) in self.cells.iter_mut().zip(other.cells.iter()) {
            cell.copy_from(source);
        }
    }

    /// Renders this grid as 9 lines of 9 characters, `.` for an empty cell
    /// and the digit otherwise. The result can be fed back to
    /// [SudokuGrid::parse].
    pub fn to_text(&self) -> String {
        let mut result = String::with_capacity(CELL_COUNT + SIZE);

        for row in 0..SIZE {
            if row > 0 {
                result.push('\n');
            }

            for column in 0..SIZE {
                match self.get(column, row) {
                    Some(digit) => result.push((b'0' + digit as u8) as char),
                    None => result.push('.')
                }
            }
        }

        result
    }
}

impl Default for SudokuGrid {
    fn default() -> SudokuGrid {
        SudokuGrid::new()
    }
}

impl From<SudokuGrid> for String {
    fn from(grid: SudokuGrid) -> String {
        grid.to_text()
    }
}

impl TryFrom<String> for SudokuGrid {
    type Error = SudokuParseError;

    fn try_from(code: String) -> SudokuParseResult<SudokuGrid> {
        SudokuGrid::parse(&code)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::error::Contradiction;

    const EXAMPLE: &str = "
        ....1.8..
        52...3.7.
        618.72.4.
        471......
        ...3.7.1.
        8........
        ....3.426
        2.7...39.
        36.12..8.";

    #[test]
    fn parse_accepts_formatted_text() {
        let grid = SudokuGrid::parse(EXAMPLE).unwrap();

        assert_eq!(None, grid.get(0, 0));
        assert_eq!(Some(1), grid.get(4, 0));
        assert_eq!(Some(8), grid.get(6, 0));
        assert_eq!(Some(5), grid.get(0, 1));
        assert_eq!(Some(8), grid.get(0, 5));
        assert_eq!(None, grid.get(8, 8));
    }

    #[test]
    fn parse_filters_unrelated_characters() {
        // same grid, annotated with pipes and letters
        let grid = SudokuGrid::parse(EXAMPLE).unwrap();
        let annotated = EXAMPLE.replace('.', " . ")
            .replace('\n', " |row| \n");

        assert_eq!(Ok(grid), SudokuGrid::parse(&annotated));
    }

    #[test]
    fn parse_rejects_too_few_cells() {
        let code: String = EXAMPLE.chars().take(EXAMPLE.len() - 1).collect();

        assert_eq!(Err(SudokuParseError::WrongCellCount),
            SudokuGrid::parse(&code));
    }

    #[test]
    fn parse_rejects_too_many_cells() {
        let mut code = String::from(EXAMPLE);
        code.push('.');

        assert_eq!(Err(SudokuParseError::WrongCellCount),
            SudokuGrid::parse(&code));
    }

    #[test]
    fn parse_rejects_contradictory_givens() {
        // two fives in the first row
        let mut code = String::from("55");
        code.push_str(".".repeat(CELL_COUNT - 2).as_str());

        assert_eq!(
            Err(SudokuParseError::ContradictoryGivens(
                Contradiction::NotACandidate)),
            SudokuGrid::parse(&code));
    }

    #[test]
    fn set_propagates_to_peers() {
        let mut grid = SudokuGrid::new();

        grid.set(index(0, 0), 5).unwrap();

        assert!(!grid.cell(index(4, 0)).contains_candidate(5));
        assert!(!grid.cell(index(0, 4)).contains_candidate(5));
        assert!(!grid.cell(index(1, 1)).contains_candidate(5));
        assert!(grid.cell(index(4, 4)).contains_candidate(5));
    }

    #[test]
    fn set_surfaces_propagation_contradiction() {
        let mut grid = SudokuGrid::new();

        for column in 0..8 {
            grid.set(index(column, 0), column + 1).unwrap();
        }

        // (8, 0) is now forced to 9, so a 9 elsewhere in column 8 must fail
        assert_eq!(1, grid.cell(index(8, 0)).candidate_count());
        assert_eq!(Err(Contradiction::NoCandidates),
            grid.set(index(8, 4), 9));
    }

    #[test]
    fn snapshot_is_independent_of_original() {
        let original = SudokuGrid::parse(EXAMPLE).unwrap();
        let mut snapshot = original.clone();

        snapshot.set(index(0, 0), 7).unwrap();

        assert_eq!(None, original.get(0, 0));
        assert!(original.cell(index(1, 0)).contains_candidate(7));
    }

    #[test]
    fn assign_restores_snapshot() {
        let mut grid = SudokuGrid::parse(EXAMPLE).unwrap();
        let snapshot = grid.clone();

        grid.set(index(0, 0), 7).unwrap();
        assert_ne!(snapshot, grid);

        grid.assign(&snapshot);
        assert_eq!(snapshot, grid);
    }

    #[test]
    fn text_round_trip() {
        let grid = SudokuGrid::parse(EXAMPLE).unwrap();
        let text = grid.to_text();

        assert_eq!(9, text.lines().count());
        assert!(text.lines().all(|line| line.chars().count() == 9));
        assert_eq!(Ok(grid), SudokuGrid::parse(&text));
    }

    #[test]
    fn serde_round_trip() {
        let grid = SudokuGrid::parse(EXAMPLE).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let deserialized: SudokuGrid = serde_json::from_str(&json).unwrap();

        assert_eq!(grid, deserialized);
    }

    #[test]
    fn empty_grid_is_open_and_unsolved() {
        let grid = SudokuGrid::new();

        assert!(grid.is_open());
        assert!(!grid.is_solved());
    }

    #[test]
    fn complete_valid_grid_is_solved() {
        let code = "813694725425371869967528314598412673371956248642837591\
            289165437734289156156743982";
        let grid = SudokuGrid::parse(code).unwrap();

        assert!(!grid.is_open());
        assert!(grid.is_solved());
    }

    #[test]
    fn peers_of_corner_cell() {
        let expected = vec![
            1, 2, 3, 4, 5, 6, 7, 8,
            9, 10, 11, 18, 19, 20,
            27, 36, 45, 54, 63, 72
        ];
        let mut actual: Vec<usize> = PEERS[0].to_vec();
        actual.sort();

        assert_eq!(expected, actual);
    }

    #[test]
    fn peer_relation_is_symmetric() {
        for cell in 0..CELL_COUNT {
            for &peer in PEERS[cell].iter() {
                assert_ne!(cell, peer);
                assert!(PEERS[peer].contains(&cell),
                    "cell {} is missing peer {}", peer, cell);
            }
        }
    }
}
