//! The sticker grid and the move permutations that act on it.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use thiserror::Error;

use crate::algorithm::Algorithm;
use crate::moves::{BaseMove, InvalidMoveError, Move};

/// The six sticker colors of the canonical scheme (white top, red front).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Green,
    Blue,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Red,
        Color::Orange,
        Color::Green,
        Color::Blue,
    ];

    #[must_use]
    pub fn from_char(c: char) -> Option<Color> {
        Some(match c {
            'W' => Color::White,
            'Y' => Color::Yellow,
            'R' => Color::Red,
            'O' => Color::Orange,
            'G' => Color::Green,
            'B' => Color::Blue,
            _ => return None,
        })
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }

    /// The color on the opposite face in the canonical scheme.
    #[must_use]
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Yellow,
            Color::Yellow => Color::White,
            Color::Red => Color::Orange,
            Color::Orange => Color::Red,
            Color::Green => Color::Blue,
            Color::Blue => Color::Green,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A face of the cube. The discriminant order is also the storage and
/// label order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Face {
    U,
    D,
    F,
    B,
    L,
    R,
}

impl Face {
    pub const ALL: [Face; 6] = [Face::U, Face::D, Face::F, Face::B, Face::L, Face::R];

    /// The center color of this face on a solved cube.
    #[must_use]
    pub fn solved_color(self) -> Color {
        match self {
            Face::U => Color::White,
            Face::D => Color::Yellow,
            Face::F => Color::Red,
            Face::B => Color::Orange,
            Face::L => Color::Green,
            Face::R => Color::Blue,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// One of the four F2L corner/edge slots.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Slot {
    FR,
    FL,
    BR,
    BL,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::FR, Slot::FL, Slot::BR, Slot::BL];
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl serde::Serialize for Slot {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A cube label could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelParseError {
    #[error("a cube label must contain 54 color characters, got {0}")]
    WrongLength(usize),
    #[error("`{0}` is not a color code (expected one of W, Y, R, O, G, B)")]
    BadColor(char),
}

const UI: usize = 0;
const DI: usize = 1;
const FI: usize = 2;
const BI: usize = 3;
const LI: usize = 4;
const RI: usize = 5;

/// The full sticker state of a 3x3 cube.
///
/// Stickers are indexed row-major per face, 0 at the top-left when the face
/// is viewed head-on with the cube in canonical orientation. A `Cube` is a
/// plain value: `clone` yields an independent copy, so simulations never
/// disturb the original.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cube {
    faces: [[Color; 9]; 6],
}

impl Default for Cube {
    fn default() -> Cube {
        Cube::solved()
    }
}

impl Index<Face> for Cube {
    type Output = [Color; 9];

    fn index(&self, face: Face) -> &[Color; 9] {
        &self.faces[face as usize]
    }
}

impl Cube {
    #[must_use]
    pub fn solved() -> Cube {
        let mut faces = [[Color::White; 9]; 6];
        for face in Face::ALL {
            faces[face as usize] = [face.solved_color(); 9];
        }
        Cube { faces }
    }

    /// Builds a cube directly from per-face sticker arrays, in U, D, F,
    /// B, L, R order. The caller is responsible for the state being
    /// reachable.
    #[must_use]
    pub fn from_faces(faces: [[Color; 9]; 6]) -> Cube {
        Cube { faces }
    }

    /// The center sticker of a face, the fixed reference for that face's
    /// color.
    #[must_use]
    pub fn center(&self, face: Face) -> Color {
        self.faces[face as usize][4]
    }

    // ---- move application ----

    /// Applies a single move.
    pub fn apply_move(&mut self, mv: Move) {
        for _ in 0..mv.turn.quarter_turns() {
            self.base_turn(mv.base);
        }
    }

    /// Applies every move of an algorithm in order.
    pub fn apply(&mut self, alg: &Algorithm) {
        for &mv in alg.moves() {
            self.apply_move(mv);
        }
    }

    /// Parses and applies a move sequence token by token.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMoveError`] on the first unrecognized token. Moves
    /// before the bad token have already been applied; there is no rollback.
    pub fn apply_str(&mut self, s: &str) -> Result<(), InvalidMoveError> {
        for token in s.split_whitespace() {
            self.apply_move(token.parse()?);
        }
        Ok(())
    }

    fn base_turn(&mut self, base: BaseMove) {
        match base {
            BaseMove::R => self.turn_r(),
            BaseMove::L => self.turn_l(),
            BaseMove::U => self.turn_u(),
            BaseMove::D => self.turn_d(),
            BaseMove::F => self.turn_f(),
            BaseMove::B => self.turn_b(),
            BaseMove::M => self.turn_m(),
            BaseMove::S => self.turn_s(),
            BaseMove::E => self.turn_e(),
            BaseMove::Rw => self.compose(&[(BaseMove::R, 1), (BaseMove::M, 3)]),
            BaseMove::Lw => self.compose(&[(BaseMove::L, 1), (BaseMove::M, 1)]),
            BaseMove::Uw => self.compose(&[(BaseMove::U, 1), (BaseMove::E, 3)]),
            BaseMove::Dw => self.compose(&[(BaseMove::D, 1), (BaseMove::E, 1)]),
            BaseMove::Fw => self.compose(&[(BaseMove::F, 1), (BaseMove::S, 1)]),
            BaseMove::Bw => self.compose(&[(BaseMove::B, 1), (BaseMove::S, 3)]),
            BaseMove::X => {
                self.compose(&[(BaseMove::R, 1), (BaseMove::M, 3), (BaseMove::L, 3)]);
            }
            BaseMove::Y => {
                self.compose(&[(BaseMove::U, 1), (BaseMove::E, 3), (BaseMove::D, 3)]);
            }
            BaseMove::Z => {
                self.compose(&[(BaseMove::F, 1), (BaseMove::S, 1), (BaseMove::B, 3)]);
            }
        }
    }

    fn compose(&mut self, parts: &[(BaseMove, u8)]) {
        for &(base, times) in parts {
            for _ in 0..times {
                self.base_turn(base);
            }
        }
    }

    fn rotate_face_cw(&mut self, face: Face) {
        let old = self.faces[face as usize];
        self.faces[face as usize] = [
            old[6], old[3], old[0], old[7], old[4], old[1], old[8], old[5], old[2],
        ];
    }

    fn turn_r(&mut self) {
        self.rotate_face_cw(Face::R);
        let s = self.faces;
        let m = &mut self.faces;
        for i in [2, 5, 8] {
            m[UI][i] = s[FI][i];
            m[FI][i] = s[DI][i];
        }
        m[DI][2] = s[BI][6];
        m[DI][5] = s[BI][3];
        m[DI][8] = s[BI][0];
        m[BI][6] = s[UI][2];
        m[BI][3] = s[UI][5];
        m[BI][0] = s[UI][8];
    }

    fn turn_l(&mut self) {
        self.rotate_face_cw(Face::L);
        let s = self.faces;
        let m = &mut self.faces;
        m[UI][0] = s[BI][8];
        m[UI][3] = s[BI][5];
        m[UI][6] = s[BI][2];
        m[BI][8] = s[DI][0];
        m[BI][5] = s[DI][3];
        m[BI][2] = s[DI][6];
        for i in [0, 3, 6] {
            m[DI][i] = s[FI][i];
            m[FI][i] = s[UI][i];
        }
    }

    fn turn_u(&mut self) {
        self.rotate_face_cw(Face::U);
        let s = self.faces;
        let m = &mut self.faces;
        for i in 0..3 {
            m[FI][i] = s[RI][i];
            m[RI][i] = s[BI][i];
            m[BI][i] = s[LI][i];
            m[LI][i] = s[FI][i];
        }
    }

    fn turn_d(&mut self) {
        self.rotate_face_cw(Face::D);
        let s = self.faces;
        let m = &mut self.faces;
        for i in 6..9 {
            m[FI][i] = s[LI][i];
            m[LI][i] = s[BI][i];
            m[BI][i] = s[RI][i];
            m[RI][i] = s[FI][i];
        }
    }

    fn turn_f(&mut self) {
        self.rotate_face_cw(Face::F);
        let s = self.faces;
        let m = &mut self.faces;
        m[UI][6] = s[LI][8];
        m[UI][7] = s[LI][5];
        m[UI][8] = s[LI][2];
        m[LI][2] = s[DI][0];
        m[LI][5] = s[DI][1];
        m[LI][8] = s[DI][2];
        m[DI][0] = s[RI][6];
        m[DI][1] = s[RI][3];
        m[DI][2] = s[RI][0];
        m[RI][0] = s[UI][6];
        m[RI][3] = s[UI][7];
        m[RI][6] = s[UI][8];
    }

    fn turn_b(&mut self) {
        self.rotate_face_cw(Face::B);
        let s = self.faces;
        let m = &mut self.faces;
        m[UI][0] = s[RI][2];
        m[UI][1] = s[RI][5];
        m[UI][2] = s[RI][8];
        m[RI][2] = s[DI][8];
        m[RI][5] = s[DI][7];
        m[RI][8] = s[DI][6];
        m[DI][6] = s[LI][0];
        m[DI][7] = s[LI][3];
        m[DI][8] = s[LI][6];
        m[LI][0] = s[UI][2];
        m[LI][3] = s[UI][1];
        m[LI][6] = s[UI][0];
    }

    // M follows the direction of L.
    fn turn_m(&mut self) {
        let s = self.faces;
        let m = &mut self.faces;
        m[UI][1] = s[BI][7];
        m[UI][4] = s[BI][4];
        m[UI][7] = s[BI][1];
        m[BI][7] = s[DI][1];
        m[BI][4] = s[DI][4];
        m[BI][1] = s[DI][7];
        for i in [1, 4, 7] {
            m[DI][i] = s[FI][i];
            m[FI][i] = s[UI][i];
        }
    }

    // S follows the direction of F.
    fn turn_s(&mut self) {
        let s = self.faces;
        let m = &mut self.faces;
        m[UI][3] = s[LI][7];
        m[UI][4] = s[LI][4];
        m[UI][5] = s[LI][1];
        m[LI][1] = s[DI][3];
        m[LI][4] = s[DI][4];
        m[LI][7] = s[DI][5];
        m[DI][3] = s[RI][7];
        m[DI][4] = s[RI][4];
        m[DI][5] = s[RI][1];
        m[RI][1] = s[UI][3];
        m[RI][4] = s[UI][4];
        m[RI][7] = s[UI][5];
    }

    // E follows the direction of D.
    fn turn_e(&mut self) {
        let s = self.faces;
        let m = &mut self.faces;
        for i in 3..6 {
            m[FI][i] = s[LI][i];
            m[LI][i] = s[BI][i];
            m[BI][i] = s[RI][i];
            m[RI][i] = s[FI][i];
        }
    }

    // ---- inspection predicates ----

    /// Whether every face is monochrome.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces
            .iter()
            .all(|face| face.iter().all(|&c| c == face[4]))
    }

    /// Whether the four bottom-layer edges are placed and the adjacent
    /// side-face stickers match their centers.
    #[must_use]
    pub fn is_cross_solved(&self) -> bool {
        let d = &self[Face::D];
        if [1, 3, 5, 7].into_iter().any(|i| d[i] != d[4]) {
            return false;
        }
        [Face::F, Face::R, Face::B, Face::L]
            .into_iter()
            .all(|f| self[f][7] == self.center(f))
    }

    /// Whether a slot's corner/edge pair sits solved in place.
    #[must_use]
    pub fn is_pair_solved(&self, slot: Slot) -> bool {
        let stickers: [(Face, usize); 5] = match slot {
            Slot::FR => [(Face::F, 5), (Face::F, 8), (Face::R, 3), (Face::R, 6), (Face::D, 2)],
            Slot::FL => [(Face::F, 3), (Face::F, 6), (Face::L, 5), (Face::L, 8), (Face::D, 0)],
            Slot::BR => [(Face::R, 5), (Face::R, 8), (Face::B, 3), (Face::B, 6), (Face::D, 8)],
            Slot::BL => [(Face::L, 3), (Face::L, 6), (Face::B, 5), (Face::B, 8), (Face::D, 6)],
        };
        stickers
            .into_iter()
            .all(|(face, i)| self[face][i] == self.center(face))
    }

    #[must_use]
    pub fn count_solved_pairs(&self) -> usize {
        Slot::ALL
            .into_iter()
            .filter(|&slot| self.is_pair_solved(slot))
            .count()
    }

    #[must_use]
    pub fn unsolved_slots(&self) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|&slot| !self.is_pair_solved(slot))
            .collect()
    }

    /// Whether the first two layers are fully solved.
    #[must_use]
    pub fn is_f2l_solved(&self) -> bool {
        self.is_cross_solved() && Slot::ALL.into_iter().all(|slot| self.is_pair_solved(slot))
    }

    /// Whether the four last-layer edges show the top color on top.
    #[must_use]
    pub fn is_ll_edges_oriented(&self) -> bool {
        let u = &self[Face::U];
        [1, 3, 5, 7].into_iter().all(|i| u[i] == u[4])
    }

    /// Whether the four last-layer corners are fully solved in place.
    #[must_use]
    pub fn is_ll_corners_solved(&self) -> bool {
        let u = &self[Face::U];
        if [0, 2, 6, 8].into_iter().any(|i| u[i] != u[4]) {
            return false;
        }
        [Face::F, Face::R, Face::B, Face::L]
            .into_iter()
            .all(|f| self[f][0] == self.center(f) && self[f][2] == self.center(f))
    }

    // ---- observation extraction ----

    /// The fifteen stickers visible in a top-down photo: the full U face
    /// plus the top rows of F and R.
    #[must_use]
    pub fn visible_stickers_15(&self) -> [Color; 15] {
        let mut out = [Color::White; 15];
        out[..9].copy_from_slice(&self[Face::U]);
        out[9..12].copy_from_slice(&self[Face::F][..3]);
        out[12..15].copy_from_slice(&self[Face::R][..3]);
        out
    }

    /// The twenty-seven stickers of the three visible faces in U, F, R
    /// order.
    #[must_use]
    pub fn visible_stickers_27(&self) -> [Color; 27] {
        let mut out = [Color::White; 27];
        out[..9].copy_from_slice(&self[Face::U]);
        out[9..18].copy_from_slice(&self[Face::F]);
        out[18..27].copy_from_slice(&self[Face::R]);
        out
    }

    /// The URFDLB facelet encoding consumed by external two-phase solvers.
    #[must_use]
    pub fn facelet_string(&self) -> String {
        let letter = |c: Color| match c {
            Color::White => 'U',
            Color::Blue => 'R',
            Color::Red => 'F',
            Color::Yellow => 'D',
            Color::Green => 'L',
            Color::Orange => 'B',
        };
        [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B]
            .into_iter()
            .flat_map(|f| self[f].into_iter().map(letter))
            .collect()
    }
}

impl FromStr for Cube {
    type Err = LabelParseError;

    /// Parses a 54-character label in U, D, F, B, L, R face order.
    fn from_str(s: &str) -> Result<Cube, LabelParseError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 54 {
            return Err(LabelParseError::WrongLength(chars.len()));
        }
        let mut faces = [[Color::White; 9]; 6];
        for (i, &c) in chars.iter().enumerate() {
            faces[i / 9][i % 9] = Color::from_char(c).ok_or(LabelParseError::BadColor(c))?;
        }
        Ok(Cube { faces })
    }
}

impl fmt::Display for Cube {
    /// Renders the 54-character label in U, D, F, B, L, R face order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in &self.faces {
            for &c in face {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Turn;

    fn scrambled(moves: &str) -> Cube {
        let mut cube = Cube::solved();
        cube.apply_str(moves).unwrap();
        cube
    }

    #[test]
    fn every_generator_has_order_four() {
        for base in BaseMove::ALL {
            let mut cube = Cube::solved();
            for _ in 0..4 {
                cube.apply_move(Move::new(base, Turn::Clockwise));
            }
            assert!(cube.is_solved(), "{base:?} does not have order 4");
        }
    }

    #[test]
    fn modifiers_match_repeated_quarter_turns() {
        for base in BaseMove::ALL {
            let mut double = Cube::solved();
            double.apply_move(Move::new(base, Turn::Double));
            let mut twice = Cube::solved();
            twice.apply_move(Move::new(base, Turn::Clockwise));
            twice.apply_move(Move::new(base, Turn::Clockwise));
            assert_eq!(double, twice, "{base:?}2");

            let mut counter = Cube::solved();
            counter.apply_move(Move::new(base, Turn::Counter));
            counter.apply_move(Move::new(base, Turn::Clockwise));
            assert!(counter.is_solved(), "{base:?}' {base:?}");
        }
    }

    #[test]
    fn generators_close_from_scrambled_states_too() {
        // a solved cube hides miswirings that only swap same-colored
        // stickers, so check closure from a scrambled one
        let start = scrambled("R U' F2 L D");
        for base in BaseMove::ALL {
            let mut cube = start;
            for _ in 0..4 {
                cube.apply_move(Move::new(base, Turn::Clockwise));
            }
            assert_eq!(cube, start, "{base:?} four times");

            let mut cube = start;
            cube.apply_move(Move::new(base, Turn::Clockwise));
            cube.apply_move(Move::new(base, Turn::Counter));
            assert_eq!(cube, start, "{base:?} then its inverse");
        }
    }

    #[test]
    fn r_turn_moves_the_expected_stickers() {
        let cube = scrambled("R");
        assert_eq!(cube[Face::U][2], Color::Red);
        assert_eq!(cube[Face::F][2], Color::Yellow);
        assert_eq!(cube[Face::D][2], Color::Orange);
        assert_eq!(cube[Face::B][6], Color::White);
        // the left layer is untouched
        assert!(cube[Face::L].iter().all(|&c| c == Color::Green));
    }

    #[test]
    fn b_turn_moves_the_expected_stickers() {
        let cube = scrambled("B");
        assert_eq!(cube[Face::U][0], Color::Blue);
        assert_eq!(cube[Face::L][0], Color::White);
        assert_eq!(cube[Face::D][6], Color::Green);
        assert_eq!(cube[Face::R][2], Color::Yellow);
        // the front layer is untouched
        assert!(cube[Face::F].iter().all(|&c| c == Color::Red));
    }

    #[test]
    fn m_slice_follows_l() {
        let cube = scrambled("M");
        assert_eq!(cube[Face::U][1], Color::Orange);
        assert_eq!(cube[Face::U][4], Color::Orange);
        assert_eq!(cube[Face::F][1], Color::White);
        assert_eq!(cube[Face::D][1], Color::Red);
        assert_eq!(cube[Face::B][7], Color::Yellow);
    }

    #[test]
    fn wide_turns_match_their_compositions() {
        assert_eq!(scrambled("r"), scrambled("R M'"));
        assert_eq!(scrambled("u"), scrambled("U E'"));
        assert_eq!(scrambled("x"), scrambled("R M' L'"));
        assert_eq!(scrambled("y"), scrambled("U E' D'"));
        assert_eq!(scrambled("z"), scrambled("F S B'"));
    }

    #[test]
    fn rotations_permute_centers() {
        let cube = scrambled("y");
        assert_eq!(cube.center(Face::F), Color::Blue);
        assert_eq!(cube.center(Face::R), Color::Orange);
        assert_eq!(cube.center(Face::U), Color::White);
    }

    #[test]
    fn color_counts_are_conserved() {
        let cube = scrambled("R U2 f' M S E2 b l d' x y' z2 B L D F r u");
        for color in Color::ALL {
            let count = Face::ALL
                .into_iter()
                .flat_map(|f| cube[f])
                .filter(|&c| c == color)
                .count();
            assert_eq!(count, 9, "{color:?}");
        }
    }

    #[test]
    fn algorithm_inverse_restores_the_cube() {
        let alg: Algorithm = "R U R' U' F2 M S' E2 r b' d2 x y z'".parse().unwrap();
        let mut cube = Cube::solved();
        cube.apply(&alg);
        assert!(!cube.is_solved());
        cube.apply(&alg.inverse());
        assert!(cube.is_solved());
    }

    #[test]
    fn involutions_square_to_identity() {
        // T-Perm and H-Perm both swap two pairs of pieces
        let t_perm = "R U R' U' R' F R2 U' R' U' R U R' F'";
        let h_perm = "M2 U M2 U2 M2 U M2";
        for alg in [t_perm, h_perm] {
            let mut cube = Cube::solved();
            cube.apply_str(alg).unwrap();
            cube.apply_str(alg).unwrap();
            assert!(cube.is_solved(), "{alg}");
        }
    }

    #[test]
    fn empty_algorithm_is_a_no_op() {
        let alg: Algorithm = "".parse().unwrap();
        assert!(alg.is_empty());
        let mut cube = Cube::solved();
        cube.apply(&alg);
        assert!(cube.is_solved());
    }

    #[test]
    fn apply_str_stops_at_the_first_bad_token() {
        let mut cube = Cube::solved();
        let err = cube.apply_str("R Q U").unwrap_err();
        assert_eq!(err, InvalidMoveError("Q".to_owned()));
        assert_eq!(cube, scrambled("R"));
    }

    #[test]
    fn last_layer_predicates_after_a_t_perm() {
        let cube = scrambled("R U R' U' R' F R2 U' R' U' R U R' F'");
        assert!(cube.is_f2l_solved());
        assert!(cube.is_ll_edges_oriented());
        assert!(!cube.is_ll_corners_solved());
        assert!(!cube.is_solved());
    }

    #[test]
    fn oll_state_leaves_edges_unoriented() {
        let cube = scrambled("F R U R' U' F'");
        assert!(cube.is_f2l_solved());
        assert!(!cube.is_ll_edges_oriented());
    }

    #[test]
    fn pulling_a_pair_leaves_three_slots_solved() {
        let cube = scrambled("R U R'");
        assert!(cube.is_cross_solved());
        assert!(!cube.is_f2l_solved());
        assert_eq!(cube.count_solved_pairs(), 3);
        assert_eq!(cube.unsolved_slots(), vec![Slot::FR]);
    }

    #[test]
    fn a_front_turn_breaks_the_cross() {
        assert!(!scrambled("F").is_cross_solved());
    }

    #[test]
    fn visible_sticker_windows() {
        let cube = Cube::solved();
        let fifteen = cube.visible_stickers_15();
        assert!(fifteen[..9].iter().all(|&c| c == Color::White));
        assert!(fifteen[9..12].iter().all(|&c| c == Color::Red));
        assert!(fifteen[12..].iter().all(|&c| c == Color::Blue));
        assert_eq!(cube.visible_stickers_27().len(), 27);
    }

    #[test]
    fn label_round_trips() {
        let cube = scrambled("R U R' F2 L D'");
        let label = cube.to_string();
        assert_eq!(label.len(), 54);
        assert_eq!(label.parse::<Cube>().unwrap(), cube);
    }

    #[test]
    fn label_parse_errors() {
        assert_eq!(
            "WWW".parse::<Cube>().unwrap_err(),
            LabelParseError::WrongLength(3)
        );
        let mut bad = Cube::solved().to_string();
        bad.replace_range(0..1, "Q");
        assert_eq!(bad.parse::<Cube>().unwrap_err(), LabelParseError::BadColor('Q'));
    }

    #[test]
    fn facelet_string_of_solved_cube() {
        assert_eq!(
            Cube::solved().facelet_string(),
            "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB"
        );
    }
}
