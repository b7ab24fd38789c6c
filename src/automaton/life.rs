//! Conway's Game of Life on an N×N torus.
//!
//! B3/S23 rules with the Moore neighborhood (8 neighbors), wrapping on both
//! axes. Each step evaluates the whole grid from the previous generation
//! into a scratch buffer; rows are independent, so they are filled in
//! parallel with rayon.

use std::fmt;

use rand::Rng;
use rayon::prelude::*;
use tracing::debug;

use super::torus::{count_neighbors, index_of};
use crate::error::ConfigError;

/// A square toroidal Life grid.
#[derive(Debug, Clone)]
pub struct LifeGrid {
    size: usize,
    cells: Vec<bool>, // row-major, true = alive
    next: Vec<bool>,
    generation: u64,
}

impl LifeGrid {
    /// Create an N×N grid where each cell is alive with probability 0.5.
    pub fn new<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, ConfigError> {
        let mut grid = Self::empty(size)?;
        for cell in grid.cells.iter_mut() {
            *cell = rng.gen_bool(0.5);
        }

        debug!(size, population = grid.population(), "seeded life grid");
        Ok(grid)
    }

    /// Create an all-dead N×N grid.
    pub fn empty(size: usize) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::EmptySize);
        }
        let area = size
            .checked_mul(size)
            .ok_or(ConfigError::SizeTooLarge(size))?;

        Ok(Self {
            size,
            cells: vec![false; area],
            next: vec![false; area],
            generation: 0,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Cell state at (row, col); coordinates wrap around the torus.
    pub fn get(&self, row: usize, col: usize) -> bool {
        let n = self.size;
        self.cells[index_of(row % n, col % n, n)]
    }

    /// Set a cell; coordinates wrap around the torus.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let n = self.size;
        self.cells[index_of(row % n, col % n, n)] = alive;
    }

    /// Live cells among the 8 toroidal neighbors of (row, col).
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let n = self.size;
        count_neighbors(&self.cells, n, row % n, col % n)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Step the grid forward by one generation.
    ///
    /// - Survival: an alive cell with 2 or 3 neighbors stays alive
    /// - Birth: a dead cell with exactly 3 neighbors becomes alive
    /// - Every other cell is dead in the next generation
    pub fn step(&mut self) {
        let n = self.size;
        let cells = &self.cells;

        self.next
            .par_chunks_mut(n)
            .enumerate()
            .for_each(|(row, out)| {
                for (col, slot) in out.iter_mut().enumerate() {
                    let neighbors = count_neighbors(cells, n, row, col);
                    let alive = cells[index_of(row, col, n)];
                    *slot = matches!((alive, neighbors), (true, 2) | (_, 3));
                }
            });

        std::mem::swap(&mut self.cells, &mut self.next);
        self.generation += 1;
    }

    /// N lines of '0'/'1', each terminated by a newline.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.size * (self.size + 1));
        for row in self.cells.chunks(self.size) {
            out.extend(row.iter().map(|&c| if c { '1' } else { '0' }));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for LifeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
