//! Core simulation logic.
//!
//! This module contains the three simulations and the wrap-around index
//! arithmetic they share. The FFI layer in `ffi/` and the driver binary call
//! into these types.

pub mod elementary;
pub mod langton;
pub mod life;
pub mod torus;

pub use elementary::{ElementaryAutomaton, RuleTable};
pub use langton::{Heading, LangtonAnt};
pub use life::LifeGrid;
pub use torus::{count_neighbors, index_of, wrap};

/// A discrete-step simulation a driver can advance and print.
pub trait Automaton {
    /// Advance by one generation.
    fn step(&mut self);

    /// Number of steps taken since construction.
    fn generation(&self) -> u64;

    /// Text rendering of the current state, one line per row.
    fn render(&self) -> String;

    /// Advance by `n` generations.
    fn advance(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }
}

impl Automaton for ElementaryAutomaton {
    fn step(&mut self) {
        ElementaryAutomaton::step(self);
    }

    fn generation(&self) -> u64 {
        ElementaryAutomaton::generation(self)
    }

    fn render(&self) -> String {
        let mut line = self.serialize();
        line.push('\n');
        line
    }
}

impl Automaton for LifeGrid {
    fn step(&mut self) {
        LifeGrid::step(self);
    }

    fn generation(&self) -> u64 {
        LifeGrid::generation(self)
    }

    fn render(&self) -> String {
        LifeGrid::render(self)
    }
}

impl Automaton for LangtonAnt {
    fn step(&mut self) {
        LangtonAnt::step(self);
    }

    fn generation(&self) -> u64 {
        LangtonAnt::generation(self)
    }

    fn render(&self) -> String {
        LangtonAnt::render(self)
    }
}
