//! Move notation: the eighteen generators and their `'`/`2` modifiers.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The eighteen move generators: the six face turns, the three slices
/// (M follows L, S follows F, E follows D), the six wide turns, and the
/// three whole-cube rotations.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BaseMove {
    R,
    L,
    U,
    D,
    F,
    B,
    M,
    S,
    E,
    Rw,
    Lw,
    Uw,
    Dw,
    Fw,
    Bw,
    X,
    Y,
    Z,
}

impl BaseMove {
    pub const ALL: [BaseMove; 18] = [
        BaseMove::R,
        BaseMove::L,
        BaseMove::U,
        BaseMove::D,
        BaseMove::F,
        BaseMove::B,
        BaseMove::M,
        BaseMove::S,
        BaseMove::E,
        BaseMove::Rw,
        BaseMove::Lw,
        BaseMove::Uw,
        BaseMove::Dw,
        BaseMove::Fw,
        BaseMove::Bw,
        BaseMove::X,
        BaseMove::Y,
        BaseMove::Z,
    ];

    fn token(self) -> &'static str {
        match self {
            BaseMove::R => "R",
            BaseMove::L => "L",
            BaseMove::U => "U",
            BaseMove::D => "D",
            BaseMove::F => "F",
            BaseMove::B => "B",
            BaseMove::M => "M",
            BaseMove::S => "S",
            BaseMove::E => "E",
            BaseMove::Rw => "r",
            BaseMove::Lw => "l",
            BaseMove::Uw => "u",
            BaseMove::Dw => "d",
            BaseMove::Fw => "f",
            BaseMove::Bw => "b",
            BaseMove::X => "x",
            BaseMove::Y => "y",
            BaseMove::Z => "z",
        }
    }

    fn from_token(token: &str) -> Option<BaseMove> {
        Some(match token {
            "R" => BaseMove::R,
            "L" => BaseMove::L,
            "U" => BaseMove::U,
            "D" => BaseMove::D,
            "F" => BaseMove::F,
            "B" => BaseMove::B,
            "M" => BaseMove::M,
            "S" => BaseMove::S,
            "E" => BaseMove::E,
            "r" => BaseMove::Rw,
            "l" => BaseMove::Lw,
            "u" => BaseMove::Uw,
            "d" => BaseMove::Dw,
            "f" => BaseMove::Fw,
            "b" => BaseMove::Bw,
            "x" => BaseMove::X,
            "y" => BaseMove::Y,
            "z" => BaseMove::Z,
            _ => return None,
        })
    }
}

/// How far a generator is turned. `Counter` is three clockwise quarter
/// turns, `Double` is two.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Turn {
    Clockwise,
    Double,
    Counter,
}

impl Turn {
    #[must_use]
    pub fn inverse(self) -> Turn {
        match self {
            Turn::Clockwise => Turn::Counter,
            Turn::Double => Turn::Double,
            Turn::Counter => Turn::Clockwise,
        }
    }

    pub(crate) fn quarter_turns(self) -> u8 {
        match self {
            Turn::Clockwise => 1,
            Turn::Double => 2,
            Turn::Counter => 3,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::Double => "2",
            Turn::Counter => "'",
        }
    }
}

/// The move token could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("`{0}` is not a recognized move")]
pub struct InvalidMoveError(pub String);

/// A single move: a generator plus its modifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub base: BaseMove,
    pub turn: Turn,
}

impl Move {
    #[must_use]
    pub fn new(base: BaseMove, turn: Turn) -> Move {
        Move { base, turn }
    }

    #[must_use]
    pub fn inverse(self) -> Move {
        Move {
            base: self.base,
            turn: self.turn.inverse(),
        }
    }
}

impl FromStr for Move {
    type Err = InvalidMoveError;

    fn from_str(s: &str) -> Result<Move, InvalidMoveError> {
        let (base, turn) = if let Some(rest) = s.strip_suffix('\'') {
            (rest, Turn::Counter)
        } else if let Some(rest) = s.strip_suffix('2') {
            (rest, Turn::Double)
        } else {
            (s, Turn::Clockwise)
        };
        BaseMove::from_token(base)
            .map(|base| Move { base, turn })
            .ok_or_else(|| InvalidMoveError(s.to_owned()))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base.token(), self.turn.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip() {
        for base in BaseMove::ALL {
            for turn in [Turn::Clockwise, Turn::Double, Turn::Counter] {
                let mv = Move::new(base, turn);
                assert_eq!(mv.to_string().parse::<Move>().unwrap(), mv);
            }
        }
    }

    #[test]
    fn rejects_unknown_tokens() {
        for bad in ["Q", "R3", "", "2", "'", "Rw", "x2'"] {
            assert!(bad.parse::<Move>().is_err(), "{bad:?} parsed");
        }
    }

    #[test]
    fn inverse_flips_direction_and_keeps_half_turns() {
        let r: Move = "R".parse().unwrap();
        let r_prime: Move = "R'".parse().unwrap();
        let u2: Move = "U2".parse().unwrap();
        assert_eq!(r.inverse(), r_prime);
        assert_eq!(r_prime.inverse(), r);
        assert_eq!(u2.inverse(), u2);
    }
}
