//! Move sequences in standard notation.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Serialize, Serializer};

use crate::moves::{InvalidMoveError, Move};

/// A sequence of moves. Parsed from whitespace-separated notation; the
/// empty string parses to the empty algorithm, which is a no-op.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Algorithm {
    moves: Vec<Move>,
}

impl Algorithm {
    #[must_use]
    pub fn new(moves: Vec<Move>) -> Algorithm {
        Algorithm { moves }
    }

    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The algorithm that undoes this one: reversed order, each move
    /// inverted.
    #[must_use]
    pub fn inverse(&self) -> Algorithm {
        self.moves.iter().rev().map(|mv| mv.inverse()).collect()
    }

    /// This algorithm followed by `other`.
    #[must_use]
    pub fn then(&self, other: &Algorithm) -> Algorithm {
        self.moves
            .iter()
            .chain(other.moves.iter())
            .copied()
            .collect()
    }
}

impl FromIterator<Move> for Algorithm {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Algorithm {
        Algorithm {
            moves: iter.into_iter().collect(),
        }
    }
}

impl FromStr for Algorithm {
    type Err = InvalidMoveError;

    fn from_str(s: &str) -> Result<Algorithm, InvalidMoveError> {
        s.split_whitespace().map(Move::from_str).collect()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.moves.iter().join(" "))
    }
}

impl Serialize for Algorithm {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_str(self)
    }
}
