//! This module contains the logic for solving Sudoku.
//!
//! Most importantly, this module contains the definition of the
//! [Solver](trait.Solver.html) trait and the
//! [BacktrackingSolver](struct.BacktrackingSolver.html) as a generally
//! usable implementation, which combines naked-single propagation with
//! backtracking search.

use crate::{CELL_COUNT, SudokuGrid};
use crate::error::{Contradiction, SolveResult};

/// An enumeration of the possible outcomes of solving a Sudoku. Since search
/// stops at the first completed grid, outcomes are either a full solution or
/// the proof that none exists.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// Indicates that the Sudoku is solvable. The first solution found by
    /// the deterministic search order is wrapped in this instance.
    Solved(SudokuGrid),

    /// Indicates that the Sudoku is not solvable at all, i.e. every branch
    /// of the search ended in a contradiction.
    Unsolvable
}

/// A trait for structs which have the ability to solve Sudoku. The input
/// grid is not modified; implementations work on their own copy.
pub trait Solver {

    /// Solves the provided Sudoku, returning the completed grid on success
    /// and [Solution::Unsolvable] if no assignment of the empty cells
    /// satisfies the rules.
    fn solve(&self, grid: &SudokuGrid) -> Solution;
}

/// A perfect [Solver](trait.Solver.html) which alternates two phases:
///
/// * *Propagation*: every empty cell with exactly one remaining candidate is
/// assigned, which in turn eliminates candidates from its peers. This
/// repeats until a full pass over the grid assigns nothing.
/// * *Search*: among the remaining empty cells, the one with the fewest
/// candidates is chosen (lowest index on ties). Its candidates are tried in
/// ascending order, each against a snapshot of the grid: if the trial or the
/// recursive solve below it reports a [Contradiction], the snapshot is
/// restored and the next candidate is tried. The first trial that completes
/// the grid wins; if all of them fail, the contradiction propagates to the
/// enclosing snapshot holder.
///
/// Both phases are deterministic, so the same puzzle always produces the
/// same solution and the same search trace.
pub struct BacktrackingSolver;

impl BacktrackingSolver {

    /// Assigns all cells whose candidates have been narrowed down to a
    /// single digit, repeating until a full pass over the grid makes no
    /// assignment. Each assignment propagates to the cell's peers and may
    /// thereby force further cells, which the next pass picks up.
    fn assign_naked_singles(grid: &mut SudokuGrid) -> SolveResult<()> {
        loop {
            let mut changed = false;

            for cell in 0..CELL_COUNT {
                if !grid.cell(cell).is_empty() ||
                        grid.cell(cell).candidate_count() != 1 {
                    continue;
                }

                let digit = grid.cell(cell).first_candidate().unwrap();
                grid.set(cell, digit)?;
                changed = true;
            }

            if !changed {
                return Ok(());
            }
        }
    }

    /// Finds the empty cell with the fewest remaining candidates, ties
    /// broken by the lowest index, or `None` if the grid is full.
    fn most_constrained_cell(grid: &SudokuGrid) -> Option<usize> {
        (0..CELL_COUNT)
            .filter(|&cell| grid.cell(cell).is_empty())
            .min_by_key(|&cell| grid.cell(cell).candidate_count())
    }

    fn solve_rec(grid: &mut SudokuGrid) -> SolveResult<()> {
        BacktrackingSolver::assign_naked_singles(grid)?;

        let cell = match BacktrackingSolver::most_constrained_cell(grid) {
            Some(cell) => cell,
            None => return Ok(())
        };

        // Propagation never leaves an empty cell without candidates, so an
        // empty candidate list here means the candidate bookkeeping itself
        // is broken.
        let candidates: Vec<usize> = grid.cell(cell).candidates().iter()
            .collect();

        if candidates.is_empty() {
            return Err(Contradiction::NoCandidates);
        }

        let snapshot = grid.clone();

        for digit in candidates {
            let attempt = grid.set(cell, digit)
                .and_then(|_| BacktrackingSolver::solve_rec(grid));

            match attempt {
                Ok(()) => return Ok(()),
                Err(_) => grid.assign(&snapshot)
            }
        }

        Err(Contradiction::NoCandidates)
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, grid: &SudokuGrid) -> Solution {
        let mut work = grid.clone();

        match BacktrackingSolver::solve_rec(&mut work) {
            Ok(()) => Solution::Solved(work),
            Err(_) => Solution::Unsolvable
        }
    }
}
