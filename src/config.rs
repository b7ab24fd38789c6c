//! Construction parameters, validated before any simulation is built.
//!
//! Callers hand in raw signed integers (as typed by a user or passed over
//! FFI). Invalid values fail fast here instead of being coerced.

use rand::Rng;
use tracing::debug;

use crate::error::ConfigError;

/// Rule value asking for a rule drawn uniformly from 0..=255.
pub const RANDOM_RULE: i64 = -1;

/// How the elementary rule number is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleChoice {
    Fixed(u8),
    Random,
}

impl RuleChoice {
    pub fn parse(rule: i64) -> Result<Self, ConfigError> {
        match rule {
            RANDOM_RULE => Ok(RuleChoice::Random),
            0..=255 => Ok(RuleChoice::Fixed(rule as u8)),
            _ => Err(ConfigError::RuleOutOfRange(rule)),
        }
    }

    pub fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> u8 {
        match self {
            RuleChoice::Fixed(rule) => rule,
            RuleChoice::Random => {
                let rule = rng.gen_range(0..=255u8);
                debug!(rule, "resolved random rule");
                rule
            }
        }
    }
}

/// Validated size for an N-cell ring or an N×N grid.
pub fn validate_size(size: i64) -> Result<usize, ConfigError> {
    if size <= 0 {
        return Err(ConfigError::NonPositiveSize(size));
    }
    usize::try_from(size).map_err(|_| ConfigError::NonPositiveSize(size))
}

/// Parameters for an elementary automaton, with the rule already resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementaryParams {
    pub size: usize,
    pub rule: u8,
}

impl ElementaryParams {
    /// Validate raw inputs. A rule of -1 is resolved from `rng`.
    pub fn new<R: Rng + ?Sized>(size: i64, rule: i64, rng: &mut R) -> Result<Self, ConfigError> {
        let size = validate_size(size)?;
        let rule = RuleChoice::parse(rule)?.resolve(rng);
        Ok(Self { size, rule })
    }
}

/// Parameters for the N×N grid simulations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridParams {
    pub size: usize,
}

impl GridParams {
    pub fn new(size: i64) -> Result<Self, ConfigError> {
        Ok(Self {
            size: validate_size(size)?,
        })
    }
}
