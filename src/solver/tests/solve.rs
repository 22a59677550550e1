use std::sync::{Arc, OnceLock};

use cube_core::Cube;
use recognition::catalog::Catalog;
use recognition::resolver::LookupError;
use solver::{PathSolver, SolvePath};

static SOLVER: OnceLock<PathSolver> = OnceLock::new();

fn solver() -> &'static PathSolver {
    SOLVER.get_or_init(|| PathSolver::new(Arc::new(Catalog::bundled().unwrap())))
}

fn replay_solves(cube: &Cube, path: &SolvePath) -> bool {
    let mut sim = *cube;
    for step in &path.steps {
        sim.apply(&step.algorithm);
    }
    sim.is_solved()
}

fn assert_ranked(paths: &[SolvePath]) {
    for pair in paths.windows(2) {
        assert!(pair[0].total_moves <= pair[1].total_moves);
    }
}

#[test_log::test]
fn permutation_state_gets_a_single_step_path() {
    let mut cube = Cube::solved();
    cube.apply_str("R U R' U' R' F R2 U' R' U' R U R' F'").unwrap();
    let paths = solver().solve(&cube.visible_stickers_15(), 5).unwrap();
    assert!(!paths.is_empty());
    assert_ranked(&paths);
    let t_perm = paths
        .iter()
        .find(|path| path.description == "T-Perm")
        .expect("the canonical T-Perm state resolves to its own case");
    assert_eq!(t_perm.steps.len(), 1);
    assert_eq!(t_perm.steps[0].algorithm_set, "PLL");
    assert_eq!(t_perm.total_moves, 14);
    assert!(replay_solves(&cube, t_perm));
}

#[test_log::test]
fn edge_only_permutation_offers_pll_and_ell_paths() {
    let mut cube = Cube::solved();
    cube.apply_str("R2 U R U R' U' R' U' R' U R'").unwrap();
    let paths = solver().solve(&cube.visible_stickers_15(), 5).unwrap();
    let descriptions: Vec<&str> = paths.iter().map(|p| p.description.as_str()).collect();
    assert!(descriptions.contains(&"U-Perm (a)"));
    assert!(descriptions.contains(&"ELL U a"));
    for path in &paths {
        if path.description == "U-Perm (a)" || path.description == "ELL U a" {
            assert!(replay_solves(&cube, path));
        }
    }
}

#[test_log::test]
fn orientation_state_offers_a_skip_and_multi_step_paths() {
    let mut cube = Cube::solved();
    cube.apply_str("F R U R' U' F'").unwrap();
    let paths = solver().solve(&cube.visible_stickers_15(), 10).unwrap();
    assert!(!paths.is_empty());
    assert_ranked(&paths);
    let skip = paths
        .iter()
        .find(|path| path.description == "OLL 45 → PLL Skip")
        .expect("undoing the orientation case already solves the cube");
    assert_eq!(skip.steps.len(), 1);
    assert!(replay_solves(&cube, skip));
}

#[test_log::test]
fn mixed_state_is_solved_through_the_combined_table() {
    let mut cube = Cube::solved();
    cube.apply_str("F R U R' U' F'").unwrap();
    cube.apply_str("R U R' U' R' F R2 U' R' U' R U R' F'").unwrap();
    let paths = solver().solve(&cube.visible_stickers_15(), 5).unwrap();
    assert!(!paths.is_empty());
    assert_ranked(&paths);
    assert!(paths.iter().any(|path| path.description.contains('→')));
}

#[test_log::test]
fn solved_cube_needs_no_path() {
    let paths = solver().solve_from_cube(&Cube::solved(), 5).unwrap();
    assert!(paths.is_empty());
}

#[test_log::test]
fn open_slot_is_closed_by_trial_application() {
    let mut cube = Cube::solved();
    cube.apply_str("R U R'").unwrap();
    let paths = solver().solve_from_cube(&cube, 5).unwrap();
    let descriptions: Vec<&str> = paths.iter().map(|p| p.description.as_str()).collect();
    assert!(descriptions.contains(&"F2L 4"));
    assert!(descriptions.contains(&"ZBLS 4"));
    for path in &paths {
        assert!(replay_solves(&cube, path), "{}", path.description);
    }
}

#[test_log::test]
fn open_slot_chains_into_the_last_layer() {
    let mut cube = Cube::solved();
    cube.apply_str("F R U R' U' F'").unwrap();
    cube.apply_str("R U R'").unwrap();
    let paths = solver().solve_from_cube(&cube, 10).unwrap();
    assert!(!paths.is_empty());
    let chained = paths
        .iter()
        .find(|path| path.description.starts_with("F2L 4 →"))
        .expect("closing the slot reveals the orientation case");
    assert!(chained.steps.len() >= 2);
    assert_eq!(chained.steps[0].algorithm_set, "F2L");
    for path in &paths {
        assert!(replay_solves(&cube, path), "{}", path.description);
    }
}

#[test_log::test]
fn max_paths_truncates_the_ranking() {
    let mut cube = Cube::solved();
    cube.apply_str("R U R' U' R' F R2 U' R' U' R U R' F'").unwrap();
    let paths = solver().solve(&cube.visible_stickers_15(), 1).unwrap();
    assert_eq!(paths.len(), 1);
}

#[test_log::test]
fn rejects_wrong_observation_lengths() {
    let err = solver()
        .solve(&Cube::solved().visible_stickers_27(), 5)
        .unwrap_err();
    assert_eq!(
        err,
        LookupError::InvalidObservation {
            expected: 15,
            actual: 27
        }
    );
}
