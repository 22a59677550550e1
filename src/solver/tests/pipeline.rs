use std::sync::{Arc, OnceLock};

use cube_core::{Color, Cube};
use recognition::catalog::Catalog;
use recognition::phase::Phase;
use recognition::reconstruct::StateReconstructor;
use solver::pipeline::{ObservationError, parse_stickers, run_pipeline};
use solver::PathSolver;

static FIXTURE: OnceLock<(StateReconstructor, PathSolver)> = OnceLock::new();

fn fixture() -> &'static (StateReconstructor, PathSolver) {
    FIXTURE.get_or_init(|| {
        let catalog = Arc::new(Catalog::bundled().unwrap());
        let reconstructor = StateReconstructor::new(&catalog);
        let solver = PathSolver::new(Arc::clone(&catalog));
        (reconstructor, solver)
    })
}

#[test_log::test]
fn parses_letters_with_commas_and_whitespace() {
    let colors = parse_stickers("WWR, GOB\nYW").unwrap();
    assert_eq!(colors.len(), 8);
    assert_eq!(colors[0], Color::White);
    assert_eq!(colors[3], Color::Green);
    assert_eq!(colors[7], Color::White);
}

#[test_log::test]
fn rejects_unknown_color_letters() {
    assert_eq!(
        parse_stickers("WWQ").unwrap_err(),
        ObservationError::BadColor("Q".to_owned())
    );
}

#[test_log::test]
fn full_pipeline_solves_a_permutation_observation() {
    let (reconstructor, solver) = fixture();
    let mut cube = Cube::solved();
    cube.apply_str("R U R' U' R' F R2 U' R' U' R U R' F'").unwrap();
    let result = run_pipeline(&cube.visible_stickers_27(), reconstructor, solver, 5);
    assert!(result.success);
    assert!(result.errors.is_empty());
    assert_eq!(result.phase.as_ref().unwrap().phase, Phase::Pll);
    assert!(result.paths.iter().any(|p| p.description == "T-Perm"));
    assert!(result.closest_matches.is_empty());
    let state = result.state.unwrap();
    assert_eq!(state.d, "YYYYYYYYY");
}

#[test_log::test]
fn solved_observation_succeeds_with_no_paths() {
    let (reconstructor, solver) = fixture();
    let cube = Cube::solved();
    let result = run_pipeline(&cube.visible_stickers_27(), reconstructor, solver, 5);
    assert!(result.success);
    assert_eq!(result.phase.unwrap().phase, Phase::Solved);
    assert!(result.paths.is_empty());
}

#[test_log::test]
fn impossible_observation_reports_errors_instead_of_paths() {
    let (reconstructor, solver) = fixture();
    let mut cube = Cube::solved();
    cube.apply_str("R U R' U' R' F R2 U' R' U' R U R' F'").unwrap();
    let mut visible = cube.visible_stickers_27();
    visible[20] = Color::Yellow;
    let result = run_pipeline(&visible, reconstructor, solver, 5);
    assert!(!result.success);
    assert!(!result.errors.is_empty());
    assert!(result.paths.is_empty());
}

#[test_log::test]
fn wrong_sticker_count_fails_up_front() {
    let (reconstructor, solver) = fixture();
    let result = run_pipeline(&[Color::White; 15], reconstructor, solver, 5);
    assert!(!result.success);
    assert_eq!(
        result.errors,
        vec![ObservationError::WrongStickerCount(15).to_string()]
    );
}

#[test_log::test]
fn results_serialize_to_json() {
    let (reconstructor, solver) = fixture();
    let mut cube = Cube::solved();
    cube.apply_str("R U R' U' R' F R2 U' R' U' R U R' F'").unwrap();
    let result = run_pipeline(&cube.visible_stickers_27(), reconstructor, solver, 5);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["phase"]["phase"], "pll");
    assert!(json["paths"][0]["steps"][0]["algorithm"].is_string());
}