//! Command-line driver: pick a simulation, run it for a number of
//! generations, and print every generation to stdout.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

use toroidal_automata::automaton::Automaton;
use toroidal_automata::config::{ElementaryParams, GridParams};
use toroidal_automata::rng::rng_from;
use toroidal_automata::persist::{self, LoadOutcome};
use toroidal_automata::{logging, ElementaryAutomaton, LangtonAnt, LifeGrid};

const DEFAULT_SAVE_PATH: &str = "finalState.txt";

#[derive(Parser)]
#[command(
    name = "automata",
    version,
    about = "Elementary automata, Game of Life and Langton's Ant on wrap-around grids"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 1-D elementary automaton driven by a Wolfram rule number.
    Elementary {
        /// Number of cells in the ring.
        #[arg(long, allow_negative_numbers = true)]
        size: i64,
        /// Rule number in 0..=255, or -1 for a random rule.
        #[arg(long, allow_negative_numbers = true, default_value_t = -1)]
        rule: i64,
        /// Seed for the random rule.
        #[arg(long)]
        seed: Option<u64>,
        /// Initial state as a string of 0/1 characters.
        #[arg(long, conflicts_with = "load")]
        state: Option<String>,
        /// Read the initial state from a file (first line).
        #[arg(long)]
        load: Option<PathBuf>,
        /// Number of generations to run.
        #[arg(long, default_value_t = 10)]
        generations: usize,
        /// Where to save the final state.
        #[arg(long, default_value = DEFAULT_SAVE_PATH)]
        save: PathBuf,
    },
    /// Conway's Game of Life on an N x N torus, randomly seeded.
    Life {
        /// Grid side length.
        #[arg(long, allow_negative_numbers = true)]
        size: i64,
        /// Number of generations to run.
        #[arg(long, default_value_t = 10)]
        generations: usize,
        /// Seed for the initial configuration.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Langton's Ant on an N x N torus.
    Ant {
        /// Grid side length.
        #[arg(long, allow_negative_numbers = true)]
        size: i64,
        /// Number of moves to make.
        #[arg(long, default_value_t = 10)]
        steps: usize,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(cli.command, &mut out)
}

fn execute(command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Elementary {
            size,
            rule,
            seed,
            state,
            load,
            generations,
            save,
        } => cmd_elementary(
            ElementaryRun {
                size,
                rule,
                seed,
                state,
                load,
                generations,
                save,
            },
            out,
        ),
        Command::Life {
            size,
            generations,
            seed,
        } => cmd_life(size, generations, seed, out),
        Command::Ant { size, steps } => cmd_ant(size, steps, out),
    }
}

struct ElementaryRun {
    size: i64,
    rule: i64,
    seed: Option<u64>,
    state: Option<String>,
    load: Option<PathBuf>,
    generations: usize,
    save: PathBuf,
}

fn cmd_elementary(run: ElementaryRun, out: &mut impl Write) -> Result<()> {
    let mut rng = rng_from(run.seed);
    let params =
        ElementaryParams::new(run.size, run.rule, &mut rng).context("elementary parameters")?;
    writeln!(out, "Using rule number: {}", params.rule)?;

    let mut automaton = ElementaryAutomaton::from_params(&params)?;

    if let Some(path) = &run.load {
        if persist::load_or_default(path, &mut automaton) == LoadOutcome::Failed {
            writeln!(
                out,
                "Could not load initial state from {}. Starting with default.",
                path.display()
            )?;
        }
    } else if let Some(bits) = &run.state {
        automaton.load_state(bits);
    }

    writeln!(out, "Initial Generation:")?;
    print_generations(&mut automaton, run.generations, "Generation", out)?;

    if let Err(err) = persist::save_state(&run.save, &automaton) {
        warn!(error = %err, "final state not saved");
        writeln!(out, "Could not save final state: {}", err)?;
    }

    writeln!(out, "Final state in binary: {}", automaton.serialize())?;
    writeln!(out, "Final state in decimal: {}", automaton.to_decimal())?;
    Ok(())
}

fn cmd_life(size: i64, generations: usize, seed: Option<u64>, out: &mut impl Write) -> Result<()> {
    let params = GridParams::new(size).context("life parameters")?;
    let mut grid = LifeGrid::new(params.size, &mut rng_from(seed))?;

    writeln!(out, "Initial Configuration:")?;
    print_generations(&mut grid, generations, "Generation", out)
}

fn cmd_ant(size: i64, steps: usize, out: &mut impl Write) -> Result<()> {
    let params = GridParams::new(size).context("ant parameters")?;
    let mut ant = LangtonAnt::new(params.size)?;

    writeln!(out, "Initial Configuration:")?;
    print_generations(&mut ant, steps, "Step", out)
}

/// Print the current state, then step `count` times printing each result
/// under a numbered heading.
fn print_generations(
    sim: &mut dyn Automaton,
    count: usize,
    label: &str,
    out: &mut impl Write,
) -> Result<()> {
    write!(out, "{}", sim.render())?;
    for i in 0..count {
        sim.step();
        writeln!(out, "{} {}:", label, i + 1)?;
        write!(out, "{}", sim.render())?;
    }
    Ok(())
}
