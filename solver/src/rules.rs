use crate::grid::{BOX, Grid, SIZE};

pub type Mask = u16;

/// All nine digit bits set: 0b1_1111_1111.
pub const FULL_MASK: Mask = (1 << SIZE) - 1;

/// True when `value` does not already occur in the row, the column or the
/// 3x3 box containing (row, col). The cell itself may be empty or filled;
/// it is not excluded from the scan, so checking an already-placed digit
/// against its own cell returns false.
///
/// Callers guarantee in-range indices and 1..=9 values.
pub fn is_valid_move(grid: &Grid, row: usize, col: usize, value: u8) -> bool {
    debug_assert!(row < SIZE && col < SIZE);
    debug_assert!((1..=SIZE as u8).contains(&value));

    for i in 0..SIZE {
        if grid.get(row, i) == value || grid.get(i, col) == value {
            return false;
        }
    }
    let (br, bc) = (row / BOX * BOX, col / BOX * BOX);
    for r in br..br + BOX {
        for c in bc..bc + BOX {
            if grid.get(r, c) == value {
                return false;
            }
        }
    }
    true
}

/// Candidate mask for an empty cell: bit `v - 1` is set iff digit `v` is
/// absent from the cell's row, column and box.
pub fn candidates(grid: &Grid, row: usize, col: usize) -> Mask {
    debug_assert!(row < SIZE && col < SIZE);
    debug_assert_eq!(grid.get(row, col), 0);

    let mut taken: Mask = 0;
    for i in 0..SIZE {
        taken |= digit_bit(grid.get(row, i));
        taken |= digit_bit(grid.get(i, col));
    }
    let (br, bc) = (row / BOX * BOX, col / BOX * BOX);
    for r in br..br + BOX {
        for c in bc..bc + BOX {
            taken |= digit_bit(grid.get(r, c));
        }
    }
    FULL_MASK & !taken
}

#[inline]
fn digit_bit(value: u8) -> Mask {
    if value == 0 { 0 } else { 1 << (value - 1) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        let mut grid = Grid::empty();
        grid.set(0, 0, 5);
        grid.set(4, 4, 3);
        grid.set(8, 3, 9);
        grid
    }

    #[test]
    fn rejects_row_duplicate() {
        assert!(!is_valid_move(&sample(), 0, 7, 5));
    }

    #[test]
    fn rejects_column_duplicate() {
        assert!(!is_valid_move(&sample(), 6, 0, 5));
    }

    #[test]
    fn rejects_box_duplicate() {
        // (1, 1) shares the top-left box with (0, 0).
        assert!(!is_valid_move(&sample(), 1, 1, 5));
        // (3, 3) shares the center box with (4, 4).
        assert!(!is_valid_move(&sample(), 3, 3, 3));
    }

    #[test]
    fn accepts_unconstrained_value() {
        assert!(is_valid_move(&sample(), 0, 7, 4));
        assert!(is_valid_move(&sample(), 1, 1, 6));
    }

    #[test]
    fn candidates_on_empty_grid_are_full() {
        assert_eq!(candidates(&Grid::empty(), 4, 4), FULL_MASK);
    }

    #[test]
    fn candidates_drop_peer_digits() {
        let cands = candidates(&sample(), 0, 1);
        // 5 blocked by the row, everything else open.
        assert_eq!(cands, FULL_MASK & !(1 << 4));
        assert_eq!(cands.count_ones(), 8);
    }

    #[test]
    fn candidates_agree_with_is_valid_move() {
        let grid = sample();
        let cands = candidates(&grid, 3, 4);
        for value in 1..=9u8 {
            let legal = cands & (1 << (value - 1)) != 0;
            assert_eq!(legal, is_valid_move(&grid, 3, 4, value));
        }
    }
}
