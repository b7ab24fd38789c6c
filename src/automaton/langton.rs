//! Langton's Ant on an N×N torus.
//!
//! Each move flips the cell under the ant, turns based on the cell's new
//! color (clockwise if it is now black, counter-clockwise if it is now
//! white), then steps one cell forward. Deciding on the post-flip color is
//! the same as the usual "right on white, left on black" rule stated before
//! the flip.

use std::fmt;

use tracing::debug;

use super::torus::{index_of, wrap};
use crate::error::ConfigError;

/// Direction the ant faces. Discriminants follow clockwise order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Heading {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Heading {
    const CYCLE: [Heading; 4] = [Heading::Up, Heading::Right, Heading::Down, Heading::Left];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Self {
        Self::CYCLE[(index % 4) as usize]
    }

    /// 90° clockwise (+1 mod 4).
    pub fn clockwise(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// 90° counter-clockwise (+3 mod 4).
    pub fn counter_clockwise(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// (row, col) offset of one move. Rows grow downward.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Heading::Up => (-1, 0),
            Heading::Right => (0, 1),
            Heading::Down => (1, 0),
            Heading::Left => (0, -1),
        }
    }
}

/// The ant and the grid of cell colors it has painted.
#[derive(Debug, Clone)]
pub struct LangtonAnt {
    size: usize,
    cells: Vec<bool>, // row-major, false = white, true = black
    row: usize,
    col: usize,
    heading: Heading,
    generation: u64,
}

impl LangtonAnt {
    /// All-white N×N grid with the ant in the middle facing up.
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::EmptySize);
        }
        let area = size
            .checked_mul(size)
            .ok_or(ConfigError::SizeTooLarge(size))?;

        debug!(size, "created langton's ant");

        Ok(Self {
            size,
            cells: vec![false; area],
            row: size / 2,
            col: size / 2,
            heading: Heading::Up,
            generation: 0,
        })
    }

    /// Make one move.
    pub fn step(&mut self) {
        let n = self.size;
        let idx = index_of(self.row, self.col, n);

        self.cells[idx] = !self.cells[idx];

        self.heading = if self.cells[idx] {
            self.heading.clockwise()
        } else {
            self.heading.counter_clockwise()
        };

        let (dr, dc) = self.heading.offset();
        self.row = wrap(self.row, dr, n);
        self.col = wrap(self.col, dc, n);

        self.generation += 1;
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of moves made so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Ant position as (row, col).
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Color of (row, col); coordinates wrap around the torus.
    pub fn is_black(&self, row: usize, col: usize) -> bool {
        let n = self.size;
        self.cells[index_of(row % n, col % n, n)]
    }

    pub fn black_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// N lines of '0'/'1' with the ant's cell shown as 'A'.
    pub fn render(&self) -> String {
        let n = self.size;
        let mut out = String::with_capacity(n * (n + 1));
        for r in 0..n {
            for c in 0..n {
                let ch = if (r, c) == (self.row, self.col) {
                    'A'
                } else if self.cells[index_of(r, c, n)] {
                    '1'
                } else {
                    '0'
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for LangtonAnt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::Automaton;

    #[test]
    fn test_heading_rotation() {
        assert_eq!(Heading::Up.clockwise(), Heading::Right);
        assert_eq!(Heading::Left.clockwise(), Heading::Up);
        assert_eq!(Heading::Up.counter_clockwise(), Heading::Left);
        assert_eq!(Heading::Right.counter_clockwise(), Heading::Up);

        for h in Heading::CYCLE {
            assert_eq!(h.clockwise().counter_clockwise(), h);
            assert_eq!(h.clockwise().clockwise().clockwise().clockwise(), h);
        }
    }

    #[test]
    fn test_new_ant() {
        let ant = LangtonAnt::new(9).unwrap();
        assert_eq!(ant.position(), (4, 4));
        assert_eq!(ant.heading(), Heading::Up);
        assert_eq!(ant.black_count(), 0);
        assert_eq!(ant.generation(), 0);

        assert_eq!(LangtonAnt::new(0).unwrap_err(), ConfigError::EmptySize);
    }

    #[test]
    fn test_oversized_side_rejected() {
        let side = usize::MAX / 2;
        assert_eq!(
            LangtonAnt::new(side).unwrap_err(),
            ConfigError::SizeTooLarge(side)
        );
    }

    #[test]
    fn test_first_step() {
        let mut ant = LangtonAnt::new(11).unwrap();
        ant.step();

        // Start cell flipped to black, turned clockwise from Up, moved right
        assert!(ant.is_black(5, 5));
        assert_eq!(ant.heading(), Heading::Right);
        assert_eq!(ant.position(), (5, 6));
        assert_eq!(ant.black_count(), 1);
        assert_eq!(ant.generation(), 1);
    }

    #[test]
    fn test_first_five_moves() {
        let mut ant = LangtonAnt::new(11).unwrap();
        let c = 5;

        // Four right turns on fresh white cells trace a small square
        let expected = [
            ((c, c + 1), Heading::Right),
            ((c + 1, c + 1), Heading::Down),
            ((c + 1, c), Heading::Left),
            ((c, c), Heading::Up),
        ];
        for (pos, heading) in expected {
            ant.step();
            assert_eq!(ant.position(), pos);
            assert_eq!(ant.heading(), heading);
        }
        assert_eq!(ant.black_count(), 4);

        // Back on the black start cell: it turns white and the ant turns left
        ant.step();
        assert!(!ant.is_black(c, c));
        assert_eq!(ant.heading(), Heading::Left);
        assert_eq!(ant.position(), (c, c - 1));
        assert_eq!(ant.black_count(), 3);
    }

    #[test]
    fn test_wraps_at_edges() {
        // On a 2x2 grid the ant starts at (1,1) and its first move to the
        // right leaves the grid
        let mut ant = LangtonAnt::new(2).unwrap();
        ant.step();
        assert_eq!(ant.position(), (1, 0));

        ant.step();
        // (1,0) was white: turn clockwise to Down, wrap to row 0
        assert_eq!(ant.heading(), Heading::Down);
        assert_eq!(ant.position(), (0, 0));
    }

    #[test]
    fn test_single_cell_grid() {
        let mut ant = LangtonAnt::new(1).unwrap();
        ant.advance(7);
        assert_eq!(ant.position(), (0, 0));
        // Odd number of flips leaves the only cell black
        assert!(ant.is_black(0, 0));
    }

    #[test]
    fn test_long_run_invariants() {
        let mut ant = LangtonAnt::new(80).unwrap();

        for step in 1..=10_000u64 {
            ant.step();
            let (r, c) = ant.position();
            assert!(r < 80 && c < 80);

            if step % 500 == 0 {
                let black = ant.black_count() as u64;
                assert!(black <= step);
                assert_eq!(black % 2, step % 2);
            }
        }
        assert_eq!(ant.generation(), 10_000);
    }

    #[test]
    fn test_highway_after_transient() {
        // Large enough that neither the transient nor the first highway
        // periods touch the seam
        let mut ant = LangtonAnt::new(400).unwrap();
        ant.advance(11_000);

        for _ in 0..2 {
            let (r0, c0) = ant.position();
            let black0 = ant.black_count();

            ant.advance(104);

            let (r1, c1) = ant.position();
            assert_eq!(
                (r1 as isize - r0 as isize, c1 as isize - c0 as isize),
                (2, -2)
            );
            assert_eq!(ant.black_count(), black0 + 12);
        }
        assert_eq!(ant.generation(), 11_208);
    }

    #[test]
    fn test_identical_ants_stay_identical() {
        let mut a = LangtonAnt::new(25).unwrap();
        let mut b = LangtonAnt::new(25).unwrap();
        a.advance(3000);
        b.advance(3000);
        assert_eq!(a.render(), b.render());
        assert_eq!(a.heading(), b.heading());
    }

    #[test]
    fn test_render_marks_ant() {
        let mut ant = LangtonAnt::new(3).unwrap();
        assert_eq!(ant.render(), "000\n0A0\n000\n");

        ant.step();
        assert_eq!(ant.render(), "000\n01A\n000\n");
    }
}
