//! The algorithm catalog: named cases grouped into sets.
//!
//! OLL and PLL are compiled in and always present. Extended sets (COLL,
//! ZBLL, OLLCP, ELL, F2L, WV, ZBLS, ...) come from a JSON catalog; a copy
//! is embedded in the binary, and a caller-supplied file can replace it.
//! Every algorithm string is parsed at load time, so a malformed entry is
//! caught before any table is built.

mod builtin;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use cube_core::{Algorithm, InvalidMoveError};
use log::warn;
use serde::Deserialize;
use thiserror::Error;

const BUNDLED_DB: &str = include_str!("../../../../data/algorithm_db.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read algorithm catalog `{path}`")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("algorithm catalog is not valid JSON")]
    Json(#[from] serde_json::Error),
    #[error("case `{case}` in set `{set}` has an unparseable algorithm")]
    BadAlgorithm {
        set: String,
        case: String,
        #[source]
        source: InvalidMoveError,
    },
}

/// A named case and the algorithm that solves it.
#[derive(Clone, Debug)]
pub struct Case {
    pub name: String,
    pub algorithm: Algorithm,
}

/// An ordered collection of cases sharing a precondition and a
/// postcondition.
#[derive(Clone, Debug)]
pub struct AlgorithmSet {
    pub name: String,
    pub phase: String,
    pub precondition: String,
    pub postcondition: String,
    cases: Vec<Case>,
}

impl AlgorithmSet {
    fn from_entries<'a>(
        name: &str,
        phase: &str,
        precondition: &str,
        postcondition: &str,
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<AlgorithmSet, CatalogError> {
        let cases = entries
            .into_iter()
            .map(|(case, alg)| {
                let algorithm = alg.parse().map_err(|source| CatalogError::BadAlgorithm {
                    set: name.to_owned(),
                    case: case.to_owned(),
                    source,
                })?;
                Ok(Case {
                    name: case.to_owned(),
                    algorithm,
                })
            })
            .collect::<Result<_, CatalogError>>()?;
        Ok(AlgorithmSet {
            name: name.to_owned(),
            phase: phase.to_owned(),
            precondition: precondition.to_owned(),
            postcondition: postcondition.to_owned(),
            cases,
        })
    }

    #[must_use]
    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    #[must_use]
    pub fn get(&self, case: &str) -> Option<&Case> {
        self.cases.iter().find(|c| c.name == case)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

#[derive(Deserialize)]
struct RawDb {
    #[serde(default)]
    algorithm_sets: BTreeMap<String, RawSet>,
}

#[derive(Deserialize)]
struct RawSet {
    #[serde(default)]
    phase: String,
    #[serde(default)]
    precondition: String,
    #[serde(default)]
    postcondition: String,
    #[serde(default)]
    cases: BTreeMap<String, RawCase>,
}

#[derive(Deserialize)]
struct RawCase {
    algorithm: String,
}

/// Every algorithm set known to the system, in load order.
#[derive(Clone, Debug)]
pub struct Catalog {
    sets: Vec<AlgorithmSet>,
}

impl Catalog {
    /// The compiled-in catalog: OLL and PLL only.
    pub fn builtin() -> Result<Catalog, CatalogError> {
        let oll = AlgorithmSet::from_entries(
            "OLL",
            "last_layer",
            "f2l_solved",
            "ll_oriented",
            builtin::OLL_CASES.entries().map(|(&k, &v)| (k, v)),
        )?;
        let pll = AlgorithmSet::from_entries(
            "PLL",
            "last_layer",
            "ll_oriented",
            "solved",
            builtin::PLL_CASES.entries().map(|(&k, &v)| (k, v)),
        )?;
        Ok(Catalog {
            sets: vec![oll, pll],
        })
    }

    /// The built-in sets plus the extended sets embedded in the binary.
    pub fn bundled() -> Result<Catalog, CatalogError> {
        let raw: RawDb = serde_json::from_str(BUNDLED_DB)?;
        Self::builtin()?.with_external(raw)
    }

    /// The built-in sets plus extended sets from a JSON file. A missing
    /// file degrades to the built-in catalog; a malformed one is fatal.
    pub fn from_path(path: &Path) -> Result<Catalog, CatalogError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                warn!(
                    "algorithm catalog `{}` not found, using built-in sets only",
                    path.display()
                );
                return Self::builtin();
            }
            Err(source) => {
                return Err(CatalogError::Io {
                    path: path.display().to_string(),
                    source,
                });
            }
        };
        let raw: RawDb = serde_json::from_str(&text)?;
        Self::builtin()?.with_external(raw)
    }

    /// Loads from `path` when given, otherwise the embedded catalog.
    pub fn load(path: Option<&Path>) -> Result<Catalog, CatalogError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::bundled(),
        }
    }

    fn with_external(mut self, raw: RawDb) -> Result<Catalog, CatalogError> {
        for (name, set) in raw.algorithm_sets {
            // the built-in sets are canonical
            if self.get_set(&name).is_some() {
                continue;
            }
            self.sets.push(AlgorithmSet::from_entries(
                &name,
                &set.phase,
                &set.precondition,
                &set.postcondition,
                set.cases
                    .iter()
                    .map(|(case, raw_case)| (case.as_str(), raw_case.algorithm.as_str())),
            )?);
        }
        Ok(self)
    }

    #[must_use]
    pub fn sets(&self) -> &[AlgorithmSet] {
        &self.sets
    }

    #[must_use]
    pub fn get_set(&self, name: &str) -> Option<&AlgorithmSet> {
        self.sets.iter().find(|set| set.name == name)
    }

    /// Finds a case by name, scanning sets in load order. If two sets
    /// both define the name, the earlier set wins.
    #[must_use]
    pub fn algorithm_by_name(&self, case: &str) -> Option<(&AlgorithmSet, &Case)> {
        self.sets
            .iter()
            .find_map(|set| set.get(case).map(|c| (set, c)))
    }
}
