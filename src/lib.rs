//! Toroidal Automata - 1D and 2D Wrap-Around Cellular Automata Library
//!
//! Three independent simulations, each stepped one generation at a time:
//! an elementary (Wolfram rule) automaton on a ring, Conway's Game of Life on
//! a torus, and Langton's Ant on a torus.
//!
//! This library can be used directly from Rust, or through the C ABI in
//! [`ffi`] from any host that can load a shared library.

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod logging;
pub mod persist;
pub mod rng;


pub use automaton::{Automaton, ElementaryAutomaton, Heading, LangtonAnt, LifeGrid, RuleTable};
pub use config::{ElementaryParams, GridParams, RuleChoice, RANDOM_RULE};
pub use error::{ConfigError, PersistError};
