use crate::grid::{Grid, SIZE};
use crate::rules::{Mask, candidates};

/// One solver move, reported to the observer right after it happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Placed { row: usize, col: usize, value: u8 },
    Cleared { row: usize, col: usize },
}

/// Side channel for watching the search. Fired after every tentative
/// placement and after every backtrack; purely a notification, the solver
/// ignores the observer for every algorithmic decision and its outcome is
/// identical with or without one.
pub trait SolveObserver {
    fn on_step(&mut self, grid: &Grid, step: Step);
}

/// Observer that drops every notification.
pub struct Silent;

impl SolveObserver for Silent {
    fn on_step(&mut self, _grid: &Grid, _step: Step) {}
}

impl<F: FnMut(&Grid, Step)> SolveObserver for F {
    fn on_step(&mut self, grid: &Grid, step: Step) {
        self(grid, step)
    }
}

/// Fills the grid in place by backtracking, branching on the empty cell
/// with the fewest candidates. Returns false when no valid completion of
/// the given clues exists; in that case every originally non-zero cell is
/// left untouched, since the search only ever writes to cells it emptied
/// itself.
pub fn solve(grid: &mut Grid) -> bool {
    solve_with(grid, &mut Silent)
}

/// `solve` with step notifications, for visualization or pacing.
pub fn solve_with(grid: &mut Grid, observer: &mut impl SolveObserver) -> bool {
    let Some((row, col, cands)) = most_constrained(grid) else {
        // No empty cell left.
        return true;
    };

    // An empty candidate mask falls straight through the loop: the partial
    // assignment is a dead end and failure propagates immediately.
    let mut remaining = cands;
    while remaining != 0 {
        let bit = remaining & remaining.wrapping_neg();
        remaining ^= bit;
        let value = bit.trailing_zeros() as u8 + 1;

        grid.set(row, col, value);
        observer.on_step(grid, Step::Placed { row, col, value });

        if solve_with(grid, observer) {
            return true;
        }

        grid.set(row, col, 0);
        observer.on_step(grid, Step::Cleared { row, col });
    }
    false
}

/// Picks the empty cell with the smallest candidate set, first found wins
/// ties. None when the grid is full.
fn most_constrained(grid: &Grid) -> Option<(usize, usize, Mask)> {
    let mut best: Option<(usize, usize, Mask, u32)> = None;
    for row in 0..SIZE {
        for col in 0..SIZE {
            if grid.get(row, col) != 0 {
                continue;
            }
            let cands = candidates(grid, row, col);
            let count = cands.count_ones();
            match best {
                Some((_, _, _, best_count)) if count >= best_count => {}
                _ => best = Some((row, col, cands, count)),
            }
        }
    }
    best.map(|(row, col, cands, _)| (row, col, cands))
}
