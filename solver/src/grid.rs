use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const SIZE: usize = 9;
pub const BOX: usize = 3;
pub const CELLS: usize = SIZE * SIZE;

/// A 9x9 board. 0 means empty, 1..=9 is a placed digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [[u8; SIZE]; SIZE],
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseGridError {
    #[error("expected 81 cells, got {0}")]
    WrongLength(usize),
    #[error("invalid cell {found:?} at row {row} column {col}")]
    InvalidCell { found: char, row: usize, col: usize },
}

impl Grid {
    pub fn empty() -> Self {
        Self {
            cells: [[0; SIZE]; SIZE],
        }
    }

    pub fn from_cells(cells: [[u8; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        debug_assert!(row < SIZE && col < SIZE);
        self.cells[row][col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        debug_assert!(row < SIZE && col < SIZE);
        debug_assert!(value <= SIZE as u8);
        self.cells[row][col] = value;
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }

    /// True when no non-zero digit repeats within a row, column or 3x3 box.
    /// Empty cells are ignored, so a partial grid can pass.
    pub fn check(&self) -> bool {
        let mut rows = [0u16; SIZE];
        let mut cols = [0u16; SIZE];
        let mut boxes = [0u16; SIZE];
        for r in 0..SIZE {
            for c in 0..SIZE {
                let v = self.cells[r][c];
                if v == 0 {
                    continue;
                }
                let bit = 1u16 << (v - 1);
                let bix = r / BOX * BOX + c / BOX;
                if rows[r] & bit != 0 || cols[c] & bit != 0 || boxes[bix] & bit != 0 {
                    return false;
                }
                rows[r] |= bit;
                cols[c] |= bit;
                boxes[bix] |= bit;
            }
        }
        true
    }

    /// Compact 81-character form, one digit per cell, 0 for empty.
    pub fn to_line(&self) -> String {
        let mut out = String::with_capacity(CELLS);
        for row in &self.cells {
            for &v in row {
                out.push((b'0' + v) as char);
            }
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r % BOX == 0 {
                writeln!(f, "+-------+-------+-------+")?;
            }
            for (c, &v) in row.iter().enumerate() {
                if c % BOX == 0 {
                    write!(f, "| ")?;
                }
                if v == 0 {
                    write!(f, ". ")?;
                } else {
                    write!(f, "{v} ")?;
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "+-------+-------+-------+")
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses 81 cells; `0`, `.` and `-` all mean empty. Whitespace is
    /// ignored so multi-line input works as-is.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().filter(|ch| !ch.is_whitespace()).collect();
        if chars.len() != CELLS {
            return Err(ParseGridError::WrongLength(chars.len()));
        }
        let mut grid = Grid::empty();
        for (i, ch) in chars.into_iter().enumerate() {
            let (row, col) = (i / SIZE, i % SIZE);
            let value = match ch {
                '0' | '.' | '-' => 0,
                '1'..='9' => ch as u8 - b'0',
                _ => return Err(ParseGridError::InvalidCell { found: ch, row, col }),
            };
            grid.set(row, col, value);
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_serialize_round_trip() {
        let line = "700000600060001070804020005000470000089000340000039000600050709010300020003000004";
        let grid: Grid = line.parse().unwrap();
        assert_eq!(grid.to_line(), line);
        assert_eq!(grid.get(0, 0), 7);
        assert_eq!(grid.get(8, 8), 4);
        assert_eq!(grid.filled_count(), 26);
    }

    #[test]
    fn parse_accepts_dots_and_whitespace() {
        let text = "7........\n.6.......\n.........\n.........\n.........\n.........\n.........\n.........\n--------4\n";
        let grid: Grid = text.parse().unwrap();
        assert_eq!(grid.get(0, 0), 7);
        assert_eq!(grid.get(1, 1), 6);
        assert_eq!(grid.get(8, 8), 4);
        assert_eq!(grid.filled_count(), 3);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!("123".parse::<Grid>(), Err(ParseGridError::WrongLength(3)));
    }

    #[test]
    fn parse_rejects_bad_cell() {
        let mut line = "0".repeat(CELLS);
        line.replace_range(10..11, "x");
        assert_eq!(
            line.parse::<Grid>(),
            Err(ParseGridError::InvalidCell {
                found: 'x',
                row: 1,
                col: 1
            })
        );
    }

    #[test]
    fn check_accepts_consistent_partial_grid() {
        let mut grid = Grid::empty();
        grid.set(0, 0, 5);
        grid.set(1, 1, 5);
        assert!(!grid.check());

        grid.set(1, 1, 0);
        grid.set(8, 8, 5);
        assert!(grid.check());
    }

    #[test]
    fn check_rejects_duplicates_per_unit() {
        // Same row.
        let mut grid = Grid::empty();
        grid.set(3, 0, 7);
        grid.set(3, 8, 7);
        assert!(!grid.check());

        // Same column.
        let mut grid = Grid::empty();
        grid.set(0, 4, 2);
        grid.set(8, 4, 2);
        assert!(!grid.check());

        // Same box, different row and column.
        let mut grid = Grid::empty();
        grid.set(0, 0, 9);
        grid.set(2, 2, 9);
        assert!(!grid.check());
    }

    #[test]
    fn display_draws_box_borders() {
        let rendered = Grid::empty().to_string();
        assert_eq!(rendered.matches("+-------+-------+-------+").count(), 4);
        assert_eq!(rendered.matches('.').count(), CELLS);
    }
}
