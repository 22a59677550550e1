//! Solve-path search over recognized states.
//!
//! Given a classified observation, the path solver consults the lookup
//! tables for every strategy that applies in that phase, simulates each
//! candidate end to end, and returns only verified paths, deduplicated
//! and ranked by move count. The pipeline module wires observation
//! parsing, reconstruction, classification, and solving into one call.

pub mod paths;
pub mod pipeline;
pub mod solve;

pub use paths::{SolvePath, SolveStep};
pub use pipeline::{ObservationError, SolveResult, parse_stickers, run_pipeline};
pub use solve::PathSolver;
