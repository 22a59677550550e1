//! Orientation-invariant lookup tables for last-layer states.
//!
//! A state is keyed by the fifteen stickers visible in a top-down photo.
//! Tables enumerate every rigid orientation of the cube, every case of a
//! set, and four in-place rotations of the result, so a photographed cube
//! matches no matter how it is held. When two generated states share a
//! key the first writer wins; the enumeration order is fixed, so builds
//! are reproducible even though construction is parallel.

use cube_core::{Algorithm, Color, Cube};
use fxhash::FxHashMap;
use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;

use crate::catalog::{AlgorithmSet, Catalog};
use crate::{start, success};

/// The number of stickers in a lookup key: the U face plus the top rows
/// of F and R.
pub const VISIBLE_STICKER_COUNT: usize = 15;

/// The 24 rigid orientations, as rotation sequences from the canonical
/// orientation. The identity comes first so that canonical states claim
/// their keys before any reoriented duplicate.
const ORIENTATIONS: [&str; 24] = [
    "", "y", "y2", "y'", "x2", "x2 y", "x2 y2", "x2 y'", "x'", "x' y", "x' y2", "x' y'", "x",
    "x y", "x y2", "x y'", "z'", "z' y", "z' y2", "z' y'", "z", "z y", "z y2", "z y'",
];

/// In-place rotations applied after each generated state.
const POST_ROTATIONS: [&str; 4] = ["", "y", "y2", "y'"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("expected {expected} visible stickers, got {actual}")]
    InvalidObservation { expected: usize, actual: usize },
    #[error("no lookup table was built for algorithm set `{0}`")]
    UnknownSet(String),
}

/// An exact table hit for a single algorithm set.
#[derive(Clone, Debug, Serialize)]
pub struct CaseMatch {
    pub case_name: String,
    pub algorithm: Algorithm,
    /// The in-place rotation between the case state and the observation.
    pub rotation: Algorithm,
}

/// An exact hit in the combined OLL x PLL table.
#[derive(Clone, Debug, Serialize)]
pub struct CombinedMatch {
    pub oll_case: String,
    pub pll_case: String,
    pub oll_algorithm: Algorithm,
    pub pll_algorithm: Algorithm,
    pub rotation: Algorithm,
}

/// A hash lookup plus the keys in insertion order, so closest-match ties
/// break deterministically.
struct Table<T> {
    index: FxHashMap<String, usize>,
    entries: Vec<(String, T)>,
}

impl<T> Table<T> {
    fn new() -> Table<T> {
        Table {
            index: FxHashMap::default(),
            entries: Vec::new(),
        }
    }

    fn insert_first(&mut self, key: String, value: T) {
        if !self.index.contains_key(&key) {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, value));
        }
    }

    fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn closest(&self, key: &str, n: usize) -> Vec<(&T, usize)> {
        let mut ranked: Vec<(&T, usize)> = self
            .entries
            .iter()
            .map(|(stored, value)| (value, hamming(stored, key)))
            .collect();
        ranked.sort_by_key(|&(_, distance)| distance);
        ranked.truncate(n);
        ranked
    }
}

fn hamming(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).filter(|(x, y)| x != y).count()
}

fn parsed(notation: &str) -> Algorithm {
    // only used on the static rotation sequences above
    notation.parse().expect("static rotation sequence parses")
}

fn key_of(cube: &Cube) -> String {
    cube.visible_stickers_15()
        .into_iter()
        .map(Color::as_char)
        .collect()
}

fn observation_key(visible: &[Color]) -> Result<String, LookupError> {
    if visible.len() != VISIBLE_STICKER_COUNT {
        return Err(LookupError::InvalidObservation {
            expected: VISIBLE_STICKER_COUNT,
            actual: visible.len(),
        });
    }
    Ok(visible.iter().map(|c| c.as_char()).collect())
}

/// Lookup tables mapping visible-sticker keys back to the cases that
/// produce them.
pub struct StateResolver {
    tables: Vec<(String, Table<CaseMatch>)>,
    combined: Table<CombinedMatch>,
}

impl StateResolver {
    /// Builds tables for every named set present in the catalog, plus the
    /// combined OLL x PLL table.
    #[must_use]
    pub fn build(catalog: &Catalog, set_names: &[&str]) -> StateResolver {
        info!(start!("building orientation-invariant lookup tables"));
        let tables: Vec<(String, Table<CaseMatch>)> = set_names
            .iter()
            .filter_map(|&name| catalog.get_set(name))
            .filter(|set| !set.is_empty())
            .map(|set| {
                let table = build_set_table(set);
                debug!("{}: {} unique states", set.name, table.len());
                (set.name.clone(), table)
            })
            .collect();
        let combined = match (catalog.get_set("OLL"), catalog.get_set("PLL")) {
            (Some(oll), Some(pll)) => build_combined_table(oll, pll),
            _ => Table::new(),
        };
        info!(
            success!("built {} set tables and {} combined states"),
            tables.len(),
            combined.len()
        );
        StateResolver { tables, combined }
    }

    fn table(&self, set_name: &str) -> Result<&Table<CaseMatch>, LookupError> {
        self.tables
            .iter()
            .find(|(name, _)| name == set_name)
            .map(|(_, table)| table)
            .ok_or_else(|| LookupError::UnknownSet(set_name.to_owned()))
    }

    #[must_use]
    pub fn has_table(&self, set_name: &str) -> bool {
        self.tables.iter().any(|(name, _)| name == set_name)
    }

    /// The number of unique keys stored for a set.
    #[must_use]
    pub fn table_len(&self, set_name: &str) -> Option<usize> {
        self.tables
            .iter()
            .find(|(name, _)| name == set_name)
            .map(|(_, table)| table.len())
    }

    #[must_use]
    pub fn combined_len(&self) -> usize {
        self.combined.len()
    }

    /// Exact lookup in one set's table. An unmatched key is an empty
    /// result, not an error.
    pub fn lookup(
        &self,
        visible: &[Color],
        set_name: &str,
    ) -> Result<Vec<CaseMatch>, LookupError> {
        let key = observation_key(visible)?;
        Ok(self.table(set_name)?.get(&key).cloned().into_iter().collect())
    }

    /// The `n` stored states closest to the observation by sticker
    /// Hamming distance, ascending.
    pub fn find_closest(
        &self,
        visible: &[Color],
        set_name: &str,
        n: usize,
    ) -> Result<Vec<(CaseMatch, usize)>, LookupError> {
        let key = observation_key(visible)?;
        Ok(self
            .table(set_name)?
            .closest(&key, n)
            .into_iter()
            .map(|(value, distance)| (value.clone(), distance))
            .collect())
    }

    /// Exact lookup in the combined OLL x PLL table.
    pub fn lookup_combined(&self, visible: &[Color]) -> Result<Vec<CombinedMatch>, LookupError> {
        let key = observation_key(visible)?;
        Ok(self.combined.get(&key).cloned().into_iter().collect())
    }

    pub fn find_closest_combined(
        &self,
        visible: &[Color],
        n: usize,
    ) -> Result<Vec<(CombinedMatch, usize)>, LookupError> {
        let key = observation_key(visible)?;
        Ok(self
            .combined
            .closest(&key, n)
            .into_iter()
            .map(|(value, distance)| (value.clone(), distance))
            .collect())
    }
}

fn merge<T>(partials: Vec<Vec<(String, T)>>) -> Table<T> {
    let mut table = Table::new();
    for partial in partials {
        for (key, value) in partial {
            table.insert_first(key, value);
        }
    }
    table
}

fn build_set_table(set: &AlgorithmSet) -> Table<CaseMatch> {
    let partials: Vec<Vec<(String, CaseMatch)>> = ORIENTATIONS
        .par_iter()
        .map(|orientation| {
            let orientation = parsed(orientation);
            let mut local = Vec::new();
            for case in set.cases() {
                let mut state = Cube::solved();
                state.apply(&orientation);
                state.apply(&case.algorithm);
                for rotation in POST_ROTATIONS {
                    let rotation = parsed(rotation);
                    let mut rotated = state;
                    rotated.apply(&rotation);
                    local.push((
                        key_of(&rotated),
                        CaseMatch {
                            case_name: case.name.clone(),
                            algorithm: case.algorithm.clone(),
                            rotation,
                        },
                    ));
                }
            }
            local
        })
        .collect();
    merge(partials)
}

fn build_combined_table(oll: &AlgorithmSet, pll: &AlgorithmSet) -> Table<CombinedMatch> {
    let partials: Vec<Vec<(String, CombinedMatch)>> = ORIENTATIONS
        .par_iter()
        .map(|orientation| {
            let orientation = parsed(orientation);
            let mut local = Vec::new();
            // PLL-only states first, so a bare permutation case never
            // hides behind some OLL x PLL product
            for pll_case in pll.cases() {
                let mut state = Cube::solved();
                state.apply(&orientation);
                state.apply(&pll_case.algorithm);
                push_rotations(
                    &mut local,
                    state,
                    "OLL Skip",
                    &Algorithm::default(),
                    &pll_case.name,
                    &pll_case.algorithm,
                );
            }
            for oll_case in oll.cases() {
                for pll_case in pll.cases() {
                    let mut state = Cube::solved();
                    state.apply(&orientation);
                    state.apply(&oll_case.algorithm);
                    state.apply(&pll_case.algorithm);
                    push_rotations(
                        &mut local,
                        state,
                        &oll_case.name,
                        &oll_case.algorithm,
                        &pll_case.name,
                        &pll_case.algorithm,
                    );
                }
            }
            local
        })
        .collect();
    merge(partials)
}

fn push_rotations(
    local: &mut Vec<(String, CombinedMatch)>,
    state: Cube,
    oll_case: &str,
    oll_algorithm: &Algorithm,
    pll_case: &str,
    pll_algorithm: &Algorithm,
) {
    for rotation in POST_ROTATIONS {
        let rotation = parsed(rotation);
        let mut rotated = state;
        rotated.apply(&rotation);
        local.push((
            key_of(&rotated),
            CombinedMatch {
                oll_case: oll_case.to_owned(),
                pll_case: pll_case.to_owned(),
                oll_algorithm: oll_algorithm.clone(),
                pll_algorithm: pll_algorithm.clone(),
                rotation,
            },
        ));
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn orientation_list_covers_the_rotation_group() {
        let states: Vec<Cube> = ORIENTATIONS
            .iter()
            .map(|o| {
                let mut cube = Cube::solved();
                cube.apply(&parsed(o));
                cube
            })
            .collect();
        assert_eq!(states.iter().unique().count(), 24);
    }

    #[test]
    fn hamming_counts_positionwise_differences() {
        assert_eq!(hamming("WWWW", "WWWW"), 0);
        assert_eq!(hamming("WWWW", "WWGB"), 2);
    }
}
