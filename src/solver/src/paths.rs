//! Solve paths and their steps.

use cube_core::Algorithm;
use recognition::phase::Phase;
use serde::Serialize;

/// One stage of a solve: which case was recognized and the algorithm
/// that advances past it.
#[derive(Clone, Debug, Serialize)]
pub struct SolveStep {
    pub algorithm_set: String,
    pub case_name: String,
    pub algorithm: Algorithm,
    pub move_count: usize,
    pub phase_before: Phase,
    pub phase_after: Phase,
}

/// A verified sequence of steps from the observed state to solved.
#[derive(Clone, Debug, Serialize)]
pub struct SolvePath {
    pub steps: Vec<SolveStep>,
    pub total_moves: usize,
    pub description: String,
}

impl SolvePath {
    #[must_use]
    pub fn new(steps: Vec<SolveStep>, description: String) -> SolvePath {
        let total_moves = steps.iter().map(|step| step.move_count).sum();
        SolvePath {
            steps,
            total_moves,
            description,
        }
    }
}
