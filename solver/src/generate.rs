use rand::Rng;
use rand::seq::SliceRandom;

use crate::grid::{CELLS, Grid, SIZE};
use crate::rules::is_valid_move;

/// Produces a complete valid grid by randomized backtracking from an empty
/// board. The per-cell shuffle of candidate digits is what varies the
/// result between runs; the search itself always terminates with a full
/// grid because an empty 9x9 board is always completable.
pub fn generate_full_grid(rng: &mut impl Rng) -> Grid {
    let mut grid = Grid::empty();
    let filled = fill_first_empty(&mut grid, rng);
    debug_assert!(filled);
    grid
}

fn fill_first_empty(grid: &mut Grid, rng: &mut impl Rng) -> bool {
    let Some((row, col)) = first_empty(grid) else {
        return true;
    };

    let mut digits: [u8; SIZE] = std::array::from_fn(|i| i as u8 + 1);
    digits.shuffle(rng);

    for value in digits {
        if is_valid_move(grid, row, col, value) {
            grid.set(row, col, value);
            if fill_first_empty(grid, rng) {
                return true;
            }
            grid.set(row, col, 0);
        }
    }
    false
}

fn first_empty(grid: &Grid) -> Option<(usize, usize)> {
    for row in 0..SIZE {
        for col in 0..SIZE {
            if grid.get(row, col) == 0 {
                return Some((row, col));
            }
        }
    }
    None
}

/// Carves a puzzle out of a solved grid: keeps `num_clues` cells chosen by
/// a uniform shuffle of all 81 coordinates and blanks the rest. The result
/// is not guaranteed to have a unique solution.
///
/// `num_clues` must be at most 81; the input must be a complete grid.
pub fn generate_puzzle(solution: &Grid, num_clues: usize, rng: &mut impl Rng) -> Grid {
    debug_assert!(num_clues <= CELLS);
    debug_assert!(solution.is_complete());

    let mut coords: [(usize, usize); CELLS] = std::array::from_fn(|i| (i / SIZE, i % SIZE));
    coords.shuffle(rng);

    let mut puzzle = *solution;
    for &(row, col) in coords.iter().skip(num_clues) {
        puzzle.set(row, col, 0);
    }
    puzzle
}
