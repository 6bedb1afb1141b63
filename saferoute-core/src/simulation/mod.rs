//! Stepwise walkthrough along a found route

mod walk;

pub use walk::{StepOutcome, WalkSimulator, WalkState};
