//! The path solver: phase-appropriate strategies over the lookup tables.

use std::sync::Arc;

use cube_core::{Algorithm, Color, Cube};
use fxhash::FxHashSet;
use log::debug;
use recognition::catalog::Catalog;
use recognition::phase::{self, Phase};
use recognition::resolver::{LookupError, StateResolver, VISIBLE_STICKER_COUNT};

use crate::paths::{SolvePath, SolveStep};

/// Sets that get orientation-invariant lookup tables.
const TABLE_SETS: [&str; 6] = ["OLL", "PLL", "OLLCP", "COLL", "ZBLL", "ELL"];

/// Sets searched by trial application when one F2L slot is open.
const TRIAL_SETS: [&str; 2] = ["F2L", "ZBLS"];

const AUF_PREMOVES: [&str; 4] = ["", "U", "U'", "U2"];

const PLL_SKIP: &str = "PLL Skip";

fn parsed(notation: &str) -> Algorithm {
    // only used on the static AUF sequences above
    notation.parse().expect("static AUF sequence parses")
}

/// Searches for verified solve paths from a recognized state.
///
/// Construction builds every lookup table once; afterwards the solver is
/// immutable and can be shared across threads.
pub struct PathSolver {
    catalog: Arc<Catalog>,
    resolver: StateResolver,
}

impl PathSolver {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> PathSolver {
        let resolver = StateResolver::build(&catalog, &TABLE_SETS);
        PathSolver { catalog, resolver }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn resolver(&self) -> &StateResolver {
        &self.resolver
    }

    /// Solves from a fifteen-sticker observation. Phases the tables
    /// cannot finish from (early F2L, unknown) yield an empty list.
    pub fn solve(
        &self,
        visible: &[Color],
        max_paths: usize,
    ) -> Result<Vec<SolvePath>, LookupError> {
        if visible.len() != VISIBLE_STICKER_COUNT {
            return Err(LookupError::InvalidObservation {
                expected: VISIBLE_STICKER_COUNT,
                actual: visible.len(),
            });
        }
        let classified = phase::classify_partial(visible);
        debug!(
            "solving from {} (confidence {:.2})",
            classified.phase, classified.confidence
        );
        let mut paths = Vec::new();
        match classified.phase {
            Phase::Pll => {
                self.direct(visible, "PLL", Phase::Pll, &mut paths)?;
                self.direct(visible, "ELL", Phase::Pll, &mut paths)?;
            }
            Phase::Oll => {
                self.two_step(visible, "OLL", Phase::Oll, &mut paths)?;
                self.two_step(visible, "OLLCP", Phase::Oll, &mut paths)?;
                self.combined(visible, Phase::Oll, &mut paths)?;
                self.direct(visible, "ELL", Phase::Oll, &mut paths)?;
            }
            Phase::OllEdgesOriented => {
                self.direct(visible, "ZBLL", Phase::OllEdgesOriented, &mut paths)?;
                self.two_step(visible, "COLL", Phase::OllEdgesOriented, &mut paths)?;
                self.two_step(visible, "OLL", Phase::OllEdgesOriented, &mut paths)?;
                self.combined(visible, Phase::OllEdgesOriented, &mut paths)?;
            }
            _ => {}
        }
        Ok(finish(paths, max_paths))
    }

    /// Solves from a complete cube state. Last-layer phases delegate to
    /// the fifteen-sticker strategies; an open F2L slot is closed by
    /// trial application first.
    pub fn solve_from_cube(
        &self,
        cube: &Cube,
        max_paths: usize,
    ) -> Result<Vec<SolvePath>, LookupError> {
        let classified = phase::classify_full(cube);
        match classified.phase {
            Phase::Solved => Ok(Vec::new()),
            Phase::Pll | Phase::Oll | Phase::OllEdgesOriented | Phase::Ell => {
                self.solve(&cube.visible_stickers_15(), max_paths)
            }
            Phase::F2lLastPair => self.close_last_slot(cube, max_paths),
            _ => Ok(Vec::new()),
        }
    }

    /// Direct strategy: the set's own algorithm finishes the solve.
    fn direct(
        &self,
        visible: &[Color],
        set_name: &str,
        phase_before: Phase,
        out: &mut Vec<SolvePath>,
    ) -> Result<(), LookupError> {
        if !self.resolver.has_table(set_name) {
            return Ok(());
        }
        for m in self.resolver.lookup(visible, set_name)? {
            if m.algorithm.is_empty() {
                continue;
            }
            let solution = m.algorithm.inverse();
            let mut sim = Cube::solved();
            sim.apply(&m.algorithm);
            sim.apply(&solution);
            if !sim.is_solved() {
                continue;
            }
            out.push(SolvePath::new(
                vec![SolveStep {
                    algorithm_set: set_name.to_owned(),
                    case_name: m.case_name.clone(),
                    move_count: solution.len(),
                    algorithm: solution,
                    phase_before,
                    phase_after: Phase::Solved,
                }],
                m.case_name,
            ));
        }
        Ok(())
    }

    /// Two-step strategy: undo the first set's case, re-classify, then
    /// permute whatever remains.
    fn two_step(
        &self,
        visible: &[Color],
        first_set: &str,
        phase_before: Phase,
        out: &mut Vec<SolvePath>,
    ) -> Result<(), LookupError> {
        if !self.resolver.has_table(first_set) {
            return Ok(());
        }
        for m in self.resolver.lookup(visible, first_set)? {
            if m.algorithm.is_empty() {
                continue;
            }
            let first_solution = m.algorithm.inverse();
            let mut sim = Cube::solved();
            sim.apply(&m.algorithm);
            sim.apply(&first_solution);
            let after = phase::classify_full(&sim);
            let first_step = SolveStep {
                algorithm_set: first_set.to_owned(),
                case_name: m.case_name.clone(),
                move_count: first_solution.len(),
                algorithm: first_solution.clone(),
                phase_before,
                phase_after: after.phase,
            };
            match after.phase {
                Phase::Solved => {
                    out.push(SolvePath::new(
                        vec![first_step],
                        format!("{} → {PLL_SKIP}", m.case_name),
                    ));
                }
                Phase::Pll => {
                    for pm in self.resolver.lookup(&sim.visible_stickers_15(), "PLL")? {
                        if pm.algorithm.is_empty() {
                            out.push(SolvePath::new(
                                vec![first_step.clone()],
                                format!("{} → {PLL_SKIP}", m.case_name),
                            ));
                            continue;
                        }
                        let second_solution = pm.algorithm.inverse();
                        let mut check = Cube::solved();
                        check.apply(&m.algorithm);
                        check.apply(&first_solution);
                        check.apply(&second_solution);
                        if !check.is_solved() {
                            continue;
                        }
                        let mut steps = vec![first_step.clone()];
                        steps.push(SolveStep {
                            algorithm_set: "PLL".to_owned(),
                            case_name: pm.case_name.clone(),
                            move_count: second_solution.len(),
                            algorithm: second_solution,
                            phase_before: Phase::Pll,
                            phase_after: Phase::Solved,
                        });
                        out.push(SolvePath::new(
                            steps,
                            format!("{} → {}", m.case_name, pm.case_name),
                        ));
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Combined strategy: one lookup resolves orientation and permutation
    /// together.
    fn combined(
        &self,
        visible: &[Color],
        phase_before: Phase,
        out: &mut Vec<SolvePath>,
    ) -> Result<(), LookupError> {
        for cm in self.resolver.lookup_combined(visible)? {
            let pll_solution = cm.pll_algorithm.inverse();
            let oll_solution = cm.oll_algorithm.inverse();
            if pll_solution.is_empty() && oll_solution.is_empty() {
                continue;
            }
            let mut sim = Cube::solved();
            sim.apply(&cm.oll_algorithm);
            sim.apply(&cm.pll_algorithm);
            sim.apply(&pll_solution);
            sim.apply(&oll_solution);
            if !sim.is_solved() {
                continue;
            }
            let mut steps = Vec::new();
            if !pll_solution.is_empty() {
                steps.push(SolveStep {
                    algorithm_set: "PLL".to_owned(),
                    case_name: cm.pll_case.clone(),
                    move_count: pll_solution.len(),
                    algorithm: pll_solution.clone(),
                    phase_before,
                    phase_after: if oll_solution.is_empty() {
                        Phase::Solved
                    } else {
                        Phase::Oll
                    },
                });
            }
            if !oll_solution.is_empty() {
                steps.push(SolveStep {
                    algorithm_set: "OLL".to_owned(),
                    case_name: cm.oll_case.clone(),
                    move_count: oll_solution.len(),
                    algorithm: oll_solution,
                    phase_before: if pll_solution.is_empty() {
                        phase_before
                    } else {
                        Phase::Oll
                    },
                    phase_after: Phase::Solved,
                });
            }
            let pll_part = if cm.pll_algorithm.is_empty() {
                PLL_SKIP
            } else {
                &cm.pll_case
            };
            out.push(SolvePath::new(
                steps,
                format!("{} → {pll_part}", cm.oll_case),
            ));
        }
        Ok(())
    }

    /// Closes the one open F2L slot by trial application, then solves the
    /// resulting last layer and re-verifies the whole chain.
    fn close_last_slot(
        &self,
        cube: &Cube,
        max_paths: usize,
    ) -> Result<Vec<SolvePath>, LookupError> {
        let mut paths = Vec::new();
        for set_name in TRIAL_SETS {
            let Some(set) = self.catalog.get_set(set_name) else {
                continue;
            };
            for case in set.cases() {
                if case.algorithm.is_empty() {
                    continue;
                }
                for auf in AUF_PREMOVES {
                    let candidate = parsed(auf).then(&case.algorithm.inverse());
                    let mut sim = *cube;
                    sim.apply(&candidate);
                    let postcondition_holds = match set_name {
                        "ZBLS" => sim.is_f2l_solved() && sim.is_ll_edges_oriented(),
                        _ => sim.is_f2l_solved(),
                    };
                    if !postcondition_holds {
                        continue;
                    }
                    let step = SolveStep {
                        algorithm_set: set_name.to_owned(),
                        case_name: case.name.clone(),
                        move_count: candidate.len(),
                        algorithm: candidate,
                        phase_before: Phase::F2lLastPair,
                        phase_after: phase::classify_full(&sim).phase,
                    };
                    if sim.is_solved() {
                        paths.push(SolvePath::new(vec![step], case.name.clone()));
                        continue;
                    }
                    for sub in self.solve_from_cube(&sim, max_paths)? {
                        let mut steps = vec![step.clone()];
                        steps.extend(sub.steps.iter().cloned());
                        let mut check = *cube;
                        for s in &steps {
                            check.apply(&s.algorithm);
                        }
                        if !check.is_solved() {
                            continue;
                        }
                        paths.push(SolvePath::new(
                            steps,
                            format!("{} → {}", case.name, sub.description),
                        ));
                    }
                }
            }
        }
        Ok(finish(paths, max_paths))
    }
}

/// Deduplicates by description, ranks by total move count, truncates.
fn finish(paths: Vec<SolvePath>, max_paths: usize) -> Vec<SolvePath> {
    let mut seen = FxHashSet::default();
    let mut unique: Vec<SolvePath> = paths
        .into_iter()
        .filter(|path| seen.insert(path.description.clone()))
        .collect();
    unique.sort_by_key(|path| path.total_moves);
    unique.truncate(max_paths);
    unique
}
