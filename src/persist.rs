//! Saving and loading an elementary automaton's state line.
//!
//! The file holds a single line of '0'/'1' characters. Loading never leaves
//! the automaton half-updated: either the whole line is applied through
//! `load_state` or the automaton is untouched.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::automaton::ElementaryAutomaton;
use crate::error::PersistError;

/// Write the serialized state to `path`, replacing any existing file.
pub fn save_state(path: &Path, automaton: &ElementaryAutomaton) -> Result<(), PersistError> {
    fs::write(path, automaton.serialize()).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), generation = automaton.generation(), "saved state");
    Ok(())
}

/// Read the first line of `path`. `None` for an empty file.
pub fn read_state(path: &Path) -> Result<Option<String>, PersistError> {
    let raw = fs::read_to_string(path).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(raw.lines().next().map(str::to_owned))
}

/// What `load_or_default` did with the state file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The first line was applied.
    Loaded,
    /// The file was readable but had no lines; the default state is kept.
    Empty,
    /// The file could not be read; the default state is kept.
    Failed,
}

/// Apply the state stored at `path`, or keep the current (default) state if
/// the file is empty or cannot be read.
pub fn load_or_default(path: &Path, automaton: &mut ElementaryAutomaton) -> LoadOutcome {
    match read_state(path) {
        Ok(Some(line)) => {
            automaton.load_state(&line);
            info!(path = %path.display(), "loaded state");
            LoadOutcome::Loaded
        }
        Ok(None) => {
            debug!(path = %path.display(), "state file is empty, keeping default state");
            LoadOutcome::Empty
        }
        Err(err) => {
            warn!(error = %err, "could not load state, keeping default state");
            LoadOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::Automaton;
    use tempfile::tempdir;

    #[test]
    fn test_save_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.txt");

        let mut ca = ElementaryAutomaton::new(8, 30).unwrap();
        ca.load_state("10110001");
        save_state(&path, &ca).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "10110001");
        assert_eq!(read_state(&path).unwrap().as_deref(), Some("10110001"));
    }

    #[test]
    fn test_read_takes_first_line_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.txt");
        fs::write(&path, "0110\n1111\n").unwrap();

        assert_eq!(read_state(&path).unwrap().as_deref(), Some("0110"));
    }

    #[test]
    fn test_read_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        assert_eq!(read_state(&path).unwrap(), None);
    }

    #[test]
    fn test_read_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read_state(&path).unwrap_err();
        assert!(matches!(err, PersistError::Io { .. }));
    }

    #[test]
    fn test_load_or_default_applies_and_pads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.txt");
        fs::write(&path, "11\n").unwrap();

        let mut ca = ElementaryAutomaton::new(5, 30).unwrap();
        assert_eq!(load_or_default(&path, &mut ca), LoadOutcome::Loaded);
        assert_eq!(ca.serialize(), "11000");
    }

    #[test]
    fn test_load_or_default_keeps_default_on_failure() {
        let dir = tempdir().unwrap();
        let mut ca = ElementaryAutomaton::new(5, 30).unwrap();

        assert_eq!(
            load_or_default(&dir.path().join("nope.txt"), &mut ca),
            LoadOutcome::Failed
        );
        assert_eq!(ca.serialize(), "00100");
    }

    #[test]
    fn test_load_or_default_empty_file_is_not_a_failure() {
        let dir = tempdir().unwrap();
        let empty = dir.path().join("empty.txt");
        fs::write(&empty, "").unwrap();

        let mut ca = ElementaryAutomaton::new(5, 30).unwrap();
        assert_eq!(load_or_default(&empty, &mut ca), LoadOutcome::Empty);
        assert_eq!(ca.serialize(), "00100");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("state.txt");
        let ca = ElementaryAutomaton::new(4, 30).unwrap();

        assert!(save_state(&path, &ca).is_err());
    }

    #[test]
    fn test_round_trip_after_stepping() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("final.txt");

        let mut a = ElementaryAutomaton::new(21, 110).unwrap();
        a.advance(15);
        save_state(&path, &a).unwrap();

        let mut b = ElementaryAutomaton::new(21, 110).unwrap();
        assert_eq!(load_or_default(&path, &mut b), LoadOutcome::Loaded);
        assert_eq!(a.serialize(), b.serialize());

        a.advance(5);
        b.advance(5);
        assert_eq!(a.serialize(), b.serialize());
    }
}
