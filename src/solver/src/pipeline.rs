//! Observation-to-answer pipeline.
//!
//! Takes the raw 27-sticker observation, reconstructs the full cube,
//! classifies its phase, and searches for solve paths, collecting every
//! problem along the way instead of stopping at the first.

use cube_core::{Color, Cube, Face};
use recognition::phase::{self, PhaseResult};
use recognition::reconstruct::{self, StateReconstructor};
use recognition::resolver::CombinedMatch;
use serde::Serialize;
use thiserror::Error;

use crate::paths::SolvePath;
use crate::solve::PathSolver;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObservationError {
    #[error("`{0}` is not a recognized sticker color")]
    BadColor(String),
    #[error("expected 27 observed stickers, got {0}")]
    WrongStickerCount(usize),
}

/// Parses a sticker observation written as color letters, with optional
/// whitespace and commas between faces.
pub fn parse_stickers(input: &str) -> Result<Vec<Color>, ObservationError> {
    let mut colors = Vec::new();
    for token in input.replace(',', " ").split_whitespace() {
        for c in token.chars() {
            colors.push(
                Color::from_char(c).ok_or_else(|| ObservationError::BadColor(c.to_string()))?,
            );
        }
    }
    Ok(colors)
}

/// One face per field, nine color letters each, for display and JSON
/// output.
#[derive(Clone, Debug, Serialize)]
pub struct FaceColors {
    pub u: String,
    pub d: String,
    pub f: String,
    pub b: String,
    pub l: String,
    pub r: String,
}

impl From<&Cube> for FaceColors {
    fn from(cube: &Cube) -> FaceColors {
        let face = |f: Face| cube[f].iter().map(|c| c.as_char()).collect();
        FaceColors {
            u: face(Face::U),
            d: face(Face::D),
            f: face(Face::F),
            b: face(Face::B),
            l: face(Face::L),
            r: face(Face::R),
        }
    }
}

/// A near-miss from the combined table, reported when no exact path
/// exists.
#[derive(Clone, Debug, Serialize)]
pub struct ClosestMatch {
    #[serde(flatten)]
    pub candidate: CombinedMatch,
    pub distance: usize,
}

/// Everything the pipeline learned about one observation.
#[derive(Clone, Debug, Serialize)]
pub struct SolveResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<FaceColors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<PhaseResult>,
    pub paths: Vec<SolvePath>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub closest_matches: Vec<ClosestMatch>,
}

impl SolveResult {
    fn failed(errors: Vec<String>) -> SolveResult {
        SolveResult {
            success: false,
            errors,
            state: None,
            phase: None,
            paths: Vec::new(),
            closest_matches: Vec::new(),
        }
    }
}

/// Runs the full pipeline on a 27-sticker observation.
pub fn run_pipeline(
    visible: &[Color],
    reconstructor: &StateReconstructor,
    solver: &PathSolver,
    max_paths: usize,
) -> SolveResult {
    if visible.len() != 27 {
        return SolveResult::failed(vec![
            ObservationError::WrongStickerCount(visible.len()).to_string(),
        ]);
    }
    let cube = match reconstructor.reconstruct(visible) {
        Ok(cube) => cube,
        Err(err) => return SolveResult::failed(vec![err.to_string()]),
    };
    let problems = reconstruct::validate(&cube);
    if !problems.is_empty() {
        let mut result = SolveResult::failed(problems);
        result.state = Some(FaceColors::from(&cube));
        return result;
    }
    let classified = phase::classify_full(&cube);
    let paths = match solver.solve_from_cube(&cube, max_paths) {
        Ok(paths) => paths,
        Err(err) => {
            let mut result = SolveResult::failed(vec![err.to_string()]);
            result.state = Some(FaceColors::from(&cube));
            result.phase = Some(classified);
            return result;
        }
    };
    let solved = classified.phase == phase::Phase::Solved;
    let closest_matches = if paths.is_empty() && !solved {
        solver
            .resolver()
            .find_closest_combined(&cube.visible_stickers_15(), 3)
            .map(|matches| {
                matches
                    .into_iter()
                    .map(|(candidate, distance)| ClosestMatch {
                        candidate,
                        distance,
                    })
                    .collect()
            })
            .unwrap_or_default()
    } else {
        Vec::new()
    };
    SolveResult {
        success: solved || !paths.is_empty(),
        errors: Vec::new(),
        state: Some(FaceColors::from(&cube)),
        phase: Some(classified),
        paths,
        closest_matches,
    }
}
