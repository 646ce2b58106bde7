//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};

/// A logical dead end reached while assigning digits or propagating their
/// consequences. This is the *expected*, *recoverable* signal that drives
/// backtracking: the solver catches it, restores the last snapshot and tries
/// the next candidate. It is only fatal when it escapes the outermost solve
/// call, in which case the puzzle has no solution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Contradiction {

    /// Indicates that a cell was left without any remaining candidate digit,
    /// either because the last candidate of an unassigned cell was about to
    /// be removed or because every candidate of a search cell has been tried
    /// without success.
    NoCandidates,

    /// Indicates that the digit assigned to a cell was about to be removed
    /// from that cell's own candidates.
    AssignedDigitRemoved,

    /// Indicates that a digit which is not among a cell's current candidates
    /// was assigned to it.
    NotACandidate
}

impl Display for Contradiction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Contradiction::NoCandidates =>
                write!(f, "a cell has no remaining candidates"),
            Contradiction::AssignedDigitRemoved =>
                write!(f, "an assigned digit was removed from its own cell"),
            Contradiction::NotACandidate =>
                write!(f, "an assigned digit is not a candidate of its cell")
        }
    }
}

/// Syntactic sugar for `Result<V, Contradiction>`.
pub type SolveResult<V> = Result<V, Contradiction>;

/// An enumeration of the errors that may occur when parsing a
/// [SudokuGrid](../struct.SudokuGrid.html) from text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the text does not describe exactly 81 cells. Only the
    /// characters `.` and `1` to `9` count towards cells, all others are
    /// filtered out before this is checked.
    WrongCellCount,

    /// Indicates that a character other than `.` or `1` to `9` was provided
    /// as the content of a single cell.
    InvalidCharacter,

    /// Indicates that the given digits already contradict each other, such
    /// as two equal digits in one row. The wrapped [Contradiction] states
    /// which rule was violated while the givens were applied.
    ContradictoryGivens(Contradiction)
}

impl Display for SudokuParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuParseError::WrongCellCount =>
                write!(f, "the text does not describe exactly 81 cells"),
            SudokuParseError::InvalidCharacter =>
                write!(f, "invalid cell character"),
            SudokuParseError::ContradictoryGivens(contradiction) =>
                write!(f, "the given digits contradict each other: {}",
                    contradiction)
        }
    }
}

impl From<Contradiction> for SudokuParseError {
    fn from(contradiction: Contradiction) -> Self {
        SudokuParseError::ContradictoryGivens(contradiction)
    }
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;
