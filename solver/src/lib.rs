//! 9x9 Sudoku engine: grid representation, move validation, puzzle
//! generation and a backtracking solver with an observer seam for
//! step-by-step visualization.

pub mod generate;
pub mod grid;
pub mod rules;
pub mod solve;
