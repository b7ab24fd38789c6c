//! One-dimensional elementary cellular automaton on a ring.

use std::fmt;

use tracing::debug;

use super::torus::wrap;
use crate::config::ElementaryParams;
use crate::error::ConfigError;

/// Lookup table for the 8 possible (left, self, right) neighborhoods.
///
/// Entry `i` is bit `i` of the Wolfram rule number, where `i` is the
/// neighborhood code `(left << 2) | (self << 1) | right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleTable([bool; 8]);

impl RuleTable {
    pub fn from_number(rule: u8) -> Self {
        let mut table = [false; 8];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = (rule >> i) & 1 == 1;
        }
        Self(table)
    }

    /// Next state of a cell given its neighborhood (each input 0 or 1).
    #[inline]
    pub fn apply(&self, left: u8, center: u8, right: u8) -> u8 {
        let code = (left << 2) | (center << 1) | right;
        self.0[code as usize] as u8
    }

    pub fn entries(&self) -> &[bool; 8] {
        &self.0
    }
}

/// A ring of N binary cells stepped by a rule table.
#[derive(Debug, Clone)]
pub struct ElementaryAutomaton {
    cells: Vec<u8>, // 0 = dead, 1 = alive
    next: Vec<u8>,
    rules: RuleTable,
    rule_number: u8,
    generation: u64,
}

impl ElementaryAutomaton {
    /// Create an automaton of `size` cells, all zero except the middle one.
    pub fn new(size: usize, rule_number: u8) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::EmptySize);
        }

        let mut cells = vec![0; size];
        cells[size / 2] = 1;

        debug!(size, rule_number, "created elementary automaton");

        Ok(Self {
            cells,
            next: vec![0; size],
            rules: RuleTable::from_number(rule_number),
            rule_number,
            generation: 0,
        })
    }

    pub fn from_params(params: &ElementaryParams) -> Result<Self, ConfigError> {
        Self::new(params.size, params.rule)
    }

    /// Replace the cells with a fresh zero ring, then copy the leading
    /// characters of `binary` over it. `'1'` is alive; any other character
    /// is dead. Input longer than the ring is truncated, shorter input leaves
    /// the tail zeroed.
    pub fn load_state(&mut self, binary: &str) {
        self.cells.fill(0);
        for (cell, ch) in self.cells.iter_mut().zip(binary.chars()) {
            *cell = (ch == '1') as u8;
        }
    }

    /// Step the automaton forward by one generation.
    ///
    /// Every cell is computed from the previous generation into the scratch
    /// buffer, which then becomes the current generation.
    pub fn step(&mut self) {
        let n = self.cells.len();

        for i in 0..n {
            let left = self.cells[wrap(i, -1, n)];
            let center = self.cells[i];
            let right = self.cells[wrap(i, 1, n)];

            self.next[i] = self.rules.apply(left, center, right);
        }

        std::mem::swap(&mut self.cells, &mut self.next);
        self.generation += 1;
    }

    /// The ring as '0'/'1' characters in index order.
    pub fn serialize(&self) -> String {
        self.cells
            .iter()
            .map(|&c| if c == 1 { '1' } else { '0' })
            .collect()
    }

    /// The ring read as an unsigned binary number (index 0 is the most
    /// significant bit), in base 10. Not limited to 64 or 128 cells.
    pub fn to_decimal(&self) -> String {
        // Little-endian base-10 digits
        let mut digits: Vec<u8> = vec![0];

        for &bit in &self.cells {
            let mut carry = bit;
            for d in digits.iter_mut() {
                let v = *d * 2 + carry;
                *d = v % 10;
                carry = v / 10;
            }
            if carry > 0 {
                digits.push(carry);
            }
        }

        digits.iter().rev().map(|&d| char::from(b'0' + d)).collect()
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn rule_number(&self) -> u8 {
        self.rule_number
    }

    pub fn rule_table(&self) -> &RuleTable {
        &self.rules
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Cell value at `index`, wrapping around the ring.
    pub fn get(&self, index: usize) -> u8 {
        self.cells[index % self.cells.len()]
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl fmt::Display for ElementaryAutomaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}
