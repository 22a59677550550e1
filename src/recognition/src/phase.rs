//! Solve-phase classification.
//!
//! Two classifiers share one vocabulary: [`classify_partial`] works from
//! the fifteen stickers of a top-down photo and is a heuristic (hidden
//! stickers can lie), while [`classify_full`] inspects a complete cube
//! and is exact. Confidence is the classifier's own honesty about that
//! gap; only the full classifier reports 1.0.

use std::fmt;

use cube_core::{Color, Cube, Face, Slot};
use serde::{Serialize, Serializer};

/// Where a cube is in a CFOP-style solve.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Phase {
    Solved,
    Pll,
    OllEdgesOriented,
    Oll,
    Ell,
    F2lLastPair,
    F2lPartial,
    Unknown,
}

impl Phase {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Solved => "solved",
            Phase::Pll => "pll",
            Phase::OllEdgesOriented => "oll_edges_oriented",
            Phase::Oll => "oll",
            Phase::Ell => "ell",
            Phase::F2lLastPair => "f2l_last_pair",
            Phase::F2lPartial => "f2l_partial",
            Phase::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Phase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Evidence the classifier based its verdict on.
#[derive(Clone, Debug, Default, Serialize)]
pub struct PhaseDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_matching: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges_matching: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solved_pairs: Option<u8>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unsolved_slots: Vec<Slot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct PhaseResult {
    pub phase: Phase,
    pub confidence: f64,
    /// Algorithm sets worth consulting in this phase.
    pub applicable_sets: Vec<&'static str>,
    pub details: PhaseDetails,
}

impl PhaseResult {
    fn new(phase: Phase, confidence: f64, applicable_sets: Vec<&'static str>) -> PhaseResult {
        PhaseResult {
            phase,
            confidence,
            applicable_sets,
            details: PhaseDetails::default(),
        }
    }
}

/// Classifies a fifteen-sticker observation (U face plus the top rows of
/// F and R). Heuristic: the hidden lower layers are assumed solved
/// unless the bottom color leaks into view.
#[must_use]
pub fn classify_partial(visible: &[Color]) -> PhaseResult {
    if visible.len() != 15 {
        let mut result = PhaseResult::new(Phase::Unknown, 0.0, vec![]);
        result.details.note = Some(format!("expected 15 stickers, got {}", visible.len()));
        return result;
    }
    let top_center = visible[4];
    let bottom_color = top_center.opposite();
    if visible.contains(&bottom_color) {
        let mut result = PhaseResult::new(Phase::F2lPartial, 0.7, vec!["F2L"]);
        result.details.note = Some("bottom color visible from above".to_owned());
        return result;
    }

    let top_matching = visible[..9].iter().filter(|&&c| c == top_center).count() as u8;
    if top_matching == 9 {
        let front = &visible[9..12];
        let right = &visible[12..15];
        let rows_uniform = front.iter().all(|&c| c == front[0]) && right.iter().all(|&c| c == right[0]);
        let all_distinct = top_center != front[0] && top_center != right[0] && front[0] != right[0];
        let mut result = if rows_uniform && all_distinct {
            PhaseResult::new(Phase::Solved, 0.9, vec![])
        } else {
            PhaseResult::new(Phase::Pll, 0.95, vec!["PLL"])
        };
        result.details.top_matching = Some(top_matching);
        return result;
    }

    let edges_matching = [1, 3, 5, 7]
        .into_iter()
        .filter(|&i| visible[i] == top_center)
        .count() as u8;
    let mut result = if edges_matching == 4 {
        PhaseResult::new(Phase::OllEdgesOriented, 0.9, vec!["COLL", "ZBLL"])
    } else {
        PhaseResult::new(Phase::Oll, 0.9, vec!["OLL", "OLLCP"])
    };
    result.details.top_matching = Some(top_matching);
    result.details.edges_matching = Some(edges_matching);
    result
}

/// Classifies a complete cube state. Exact; always confidence 1.0 except
/// for the catch-all early-F2L verdict.
#[must_use]
pub fn classify_full(cube: &Cube) -> PhaseResult {
    if cube.is_solved() {
        return PhaseResult::new(Phase::Solved, 1.0, vec![]);
    }
    if cube.is_f2l_solved() {
        return classify_last_layer(cube);
    }
    if cube.is_cross_solved() {
        let solved_pairs = cube.count_solved_pairs();
        let mut result = if solved_pairs == 3 {
            PhaseResult::new(Phase::F2lLastPair, 1.0, vec!["F2L", "ZBLS"])
        } else {
            PhaseResult::new(Phase::F2lPartial, 1.0, vec!["F2L"])
        };
        result.details.solved_pairs = Some(solved_pairs as u8);
        result.details.unsolved_slots = cube.unsolved_slots();
        return result;
    }
    let mut result = PhaseResult::new(Phase::F2lPartial, 0.8, vec!["F2L"]);
    result.details.note = Some("cross not solved".to_owned());
    result
}

fn classify_last_layer(cube: &Cube) -> PhaseResult {
    let top_center = cube.center(Face::U);
    if cube.is_ll_edges_oriented() {
        let top_monochrome = cube[Face::U].iter().all(|&c| c == top_center);
        if top_monochrome {
            // corners already placed means only edges remain: EPLL, which
            // the ELL set also covers
            let sets = if cube.is_ll_corners_solved() {
                vec!["PLL", "ELL"]
            } else {
                vec!["PLL"]
            };
            return PhaseResult::new(Phase::Pll, 1.0, sets);
        }
        return PhaseResult::new(Phase::OllEdgesOriented, 1.0, vec!["COLL", "ZBLL"]);
    }
    if cube.is_ll_corners_solved() {
        return PhaseResult::new(Phase::Ell, 1.0, vec!["ELL"]);
    }
    PhaseResult::new(Phase::Oll, 1.0, vec!["OLL", "OLLCP"])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrambled(moves: &str) -> Cube {
        let mut cube = Cube::solved();
        cube.apply_str(moves).unwrap();
        cube
    }

    #[test]
    fn solved_cube_is_solved_in_both_views() {
        let cube = Cube::solved();
        assert_eq!(classify_full(&cube).phase, Phase::Solved);
        let partial = classify_partial(&cube.visible_stickers_15());
        assert_eq!(partial.phase, Phase::Solved);
        assert!(partial.confidence < 1.0);
    }

    #[test]
    fn wrong_observation_length_is_unknown() {
        let result = classify_partial(&[Color::White; 9]);
        assert_eq!(result.phase, Phase::Unknown);
        assert!(result.confidence == 0.0);
    }

    #[test]
    fn t_perm_state_is_pll() {
        let cube = scrambled("R U R' U' R' F R2 U' R' U' R U R' F'");
        let full = classify_full(&cube);
        assert_eq!(full.phase, Phase::Pll);
        assert_eq!(full.applicable_sets, vec!["PLL"]);
        assert_eq!(
            classify_partial(&cube.visible_stickers_15()).phase,
            Phase::Pll
        );
    }

    #[test]
    fn epll_state_lists_ell_as_applicable() {
        let cube = scrambled("R2 U R U R' U' R' U' R' U R'");
        let full = classify_full(&cube);
        assert_eq!(full.phase, Phase::Pll);
        assert_eq!(full.applicable_sets, vec!["PLL", "ELL"]);
    }

    #[test]
    fn oll_state_with_unoriented_edges() {
        let cube = scrambled("F R U R' U' F'");
        assert_eq!(classify_full(&cube).phase, Phase::Oll);
        let partial = classify_partial(&cube.visible_stickers_15());
        assert_eq!(partial.phase, Phase::Oll);
        assert_eq!(partial.applicable_sets, vec!["OLL", "OLLCP"]);
    }

    #[test]
    fn sune_state_has_oriented_edges() {
        let cube = scrambled("R U R' U R U2 R'");
        assert_eq!(classify_full(&cube).phase, Phase::OllEdgesOriented);
        let partial = classify_partial(&cube.visible_stickers_15());
        assert_eq!(partial.phase, Phase::OllEdgesOriented);
        assert_eq!(partial.applicable_sets, vec!["COLL", "ZBLL"]);
    }

    #[test]
    fn double_edge_flip_is_ell() {
        // UF and UB flipped in place, everything else solved
        let label = concat!(
            "WOWWWWWRW", // U
            "YYYYYYYYY", // D
            "RWRRRRRRR", // F
            "OWOOOOOOO", // B
            "GGGGGGGGG", // L
            "BBBBBBBBB", // R
        );
        let cube: Cube = label.parse().unwrap();
        let full = classify_full(&cube);
        assert_eq!(full.phase, Phase::Ell);
        assert_eq!(full.applicable_sets, vec!["ELL"]);
    }

    #[test]
    fn one_open_slot_is_f2l_last_pair() {
        let cube = scrambled("R U R'");
        let full = classify_full(&cube);
        assert_eq!(full.phase, Phase::F2lLastPair);
        assert_eq!(full.applicable_sets, vec!["F2L", "ZBLS"]);
        assert_eq!(full.details.unsolved_slots, vec![Slot::FR]);
    }

    #[test]
    fn broken_cross_is_early_f2l() {
        let cube = scrambled("F R U2");
        let full = classify_full(&cube);
        assert_eq!(full.phase, Phase::F2lPartial);
        assert!(full.confidence < 1.0);
    }

    #[test]
    fn bottom_color_leak_is_partial_f2l() {
        let mut visible = Cube::solved().visible_stickers_15();
        visible[10] = Color::Yellow;
        let partial = classify_partial(&visible);
        assert_eq!(partial.phase, Phase::F2lPartial);
        assert!((partial.confidence - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_view_can_misread_an_open_slot() {
        // R U R' hides its yellow sticker from the camera, so the partial
        // classifier sees a last-layer state while the full one does not
        let cube = scrambled("R U R'");
        assert_eq!(
            classify_partial(&cube.visible_stickers_15()).phase,
            Phase::Oll
        );
        assert_eq!(classify_full(&cube).phase, Phase::F2lLastPair);
    }

    #[test]
    fn auf_only_state_looks_solved_from_above() {
        let cube = scrambled("U");
        let partial = classify_partial(&cube.visible_stickers_15());
        assert_eq!(partial.phase, Phase::Solved);
        assert!(partial.confidence <= 0.95);
        assert_eq!(classify_full(&cube).phase, Phase::Pll);
    }
}
