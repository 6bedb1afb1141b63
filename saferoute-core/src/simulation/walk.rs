use serde::Serialize;

use crate::Error;

/// What a single [`WalkSimulator::step`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    /// Pointer moved to the next location
    Advanced,
    /// Pointer was already at the destination and stayed there
    Completed,
}

/// Observable state of a walkthrough
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "index", rename_all = "snake_case")]
pub enum WalkState {
    /// No path installed
    Idle,
    /// Path installed, walk not started
    NotStarted,
    /// Walking, at the given path index
    Active(usize),
    /// A step was attempted at the destination
    Completed(usize),
}

/// Pointer into a route that a user advances one location at a time.
///
/// Each user session owns its own simulator; nothing here is shared.
#[derive(Debug, Clone, Default)]
pub struct WalkSimulator {
    path: Option<Vec<String>>,
    pointer: Option<usize>,
    completed: bool,
}

impl WalkSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a new path and rewinds to "not started".
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `path` is empty; the previous path
    /// stays installed in that case.
    pub fn set_path(&mut self, path: Vec<String>) -> Result<(), Error> {
        if path.is_empty() {
            return Err(Error::InvalidPath);
        }
        self.path = Some(path);
        self.pointer = None;
        self.completed = false;
        Ok(())
    }

    /// Moves to the first location, restarting a walk in progress.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoPathInstalled`] if there is nothing to walk.
    pub fn start(&mut self) -> Result<(), Error> {
        if self.path.is_none() {
            return Err(Error::NoPathInstalled);
        }
        self.pointer = Some(0);
        self.completed = false;
        Ok(())
    }

    /// Advances one location, or reports completion at the destination.
    ///
    /// Stepping before [`start`](Self::start) moves to the first location.
    /// At the destination every further step reports
    /// [`StepOutcome::Completed`] and leaves the pointer where it is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoPathInstalled`] if there is nothing to walk.
    pub fn step(&mut self) -> Result<StepOutcome, Error> {
        let last = self.path.as_ref().ok_or(Error::NoPathInstalled)?.len() - 1;

        match self.pointer {
            Some(idx) if idx >= last => {
                self.completed = true;
                Ok(StepOutcome::Completed)
            }
            Some(idx) => {
                self.pointer = Some(idx + 1);
                Ok(StepOutcome::Advanced)
            }
            None => {
                self.pointer = Some(0);
                Ok(StepOutcome::Advanced)
            }
        }
    }

    /// The walker's location, or `fallback` when no walk is under way
    pub fn current_location<'a>(&'a self, fallback: &'a str) -> &'a str {
        match (&self.path, self.pointer) {
            (Some(path), Some(idx)) => path.get(idx).map_or(fallback, String::as_str),
            _ => fallback,
        }
    }

    pub fn state(&self) -> WalkState {
        match (&self.path, self.pointer) {
            (None, _) => WalkState::Idle,
            (Some(_), None) => WalkState::NotStarted,
            (Some(_), Some(idx)) if self.completed => WalkState::Completed(idx),
            (Some(_), Some(idx)) => WalkState::Active(idx),
        }
    }

    /// Pointer as an index, `-1` while not started
    #[allow(clippy::cast_possible_wrap)]
    pub fn pointer(&self) -> isize {
        self.pointer.map_or(-1, |idx| idx as isize)
    }

    pub fn position(&self) -> Option<usize> {
        self.pointer
    }

    pub fn path(&self) -> Option<&[String]> {
        self.path.as_deref()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Drops the path and returns to the initial state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| (*s).to_owned()).collect()
    }

    fn walker(ids: &[&str]) -> WalkSimulator {
        let mut walk = WalkSimulator::new();
        walk.set_path(path(ids)).unwrap();
        walk
    }

    #[test]
    fn starts_idle() {
        let walk = WalkSimulator::new();

        assert_eq!(walk.state(), WalkState::Idle);
        assert_eq!(walk.pointer(), -1);
        assert_eq!(walk.path(), None);
        assert_eq!(walk.current_location("home"), "home");
    }

    #[test]
    fn empty_path_is_rejected() {
        let mut walk = walker(&["A", "B"]);

        assert!(matches!(walk.set_path(Vec::new()), Err(Error::InvalidPath)));
        assert_eq!(walk.path(), Some(&path(&["A", "B"])[..]));
    }

    #[test]
    fn fallback_before_start() {
        let walk = walker(&["A", "B", "C"]);

        assert_eq!(walk.state(), WalkState::NotStarted);
        assert_eq!(walk.pointer(), -1);
        assert_eq!(walk.current_location("source"), "source");
    }

    #[test]
    fn walks_to_completion_and_stays_there() {
        let ids = ["A", "B", "C", "D"];
        let mut walk = walker(&ids);
        walk.start().unwrap();
        assert_eq!(walk.current_location("x"), "A");

        let outcomes: Vec<_> = (0..ids.len()).map(|_| walk.step().unwrap()).collect();
        assert_eq!(
            outcomes,
            vec![
                StepOutcome::Advanced,
                StepOutcome::Advanced,
                StepOutcome::Advanced,
                StepOutcome::Completed
            ]
        );
        assert_eq!(walk.state(), WalkState::Completed(ids.len() - 1));
        assert_eq!(walk.pointer(), 3);

        assert_eq!(walk.step().unwrap(), StepOutcome::Completed);
        assert_eq!(walk.position(), Some(ids.len() - 1));
        assert_eq!(walk.current_location("x"), "D");
    }

    #[test]
    fn single_location_completes_immediately() {
        let mut walk = walker(&["A"]);
        walk.start().unwrap();

        assert_eq!(walk.pointer(), 0);
        assert_eq!(walk.step().unwrap(), StepOutcome::Completed);
        assert_eq!(walk.pointer(), 0);
        assert!(walk.is_completed());
    }

    #[test]
    fn start_restarts_mid_walk() {
        let mut walk = walker(&["A", "B", "C"]);
        walk.start().unwrap();
        walk.step().unwrap();
        walk.step().unwrap();
        walk.step().unwrap();
        assert!(walk.is_completed());

        walk.start().unwrap();
        assert_eq!(walk.state(), WalkState::Active(0));
        assert_eq!(walk.current_location("x"), "A");
    }

    #[test]
    fn step_before_start_moves_to_first_location() {
        let mut walk = walker(&["A", "B"]);

        assert_eq!(walk.step().unwrap(), StepOutcome::Advanced);
        assert_eq!(walk.state(), WalkState::Active(0));
    }

    #[test]
    fn new_path_rewinds() {
        let mut walk = walker(&["A", "B"]);
        walk.start().unwrap();
        walk.step().unwrap();

        walk.set_path(path(&["X", "Y", "Z"])).unwrap();
        assert_eq!(walk.state(), WalkState::NotStarted);
        assert_eq!(walk.current_location("X0"), "X0");
    }

    #[test]
    fn operations_without_path_fail() {
        let mut walk = WalkSimulator::new();

        assert!(matches!(walk.start(), Err(Error::NoPathInstalled)));
        assert!(matches!(walk.step(), Err(Error::NoPathInstalled)));
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut walk = walker(&["A", "B"]);
        walk.start().unwrap();
        walk.reset();

        assert_eq!(walk.state(), WalkState::Idle);
        assert_eq!(walk.pointer(), -1);
    }
}
