//! Full-state reconstruction from a three-face observation.
//!
//! A top-down photo shows 27 stickers: the U face and the full F and R
//! faces. With the first two layers solved, the hidden D, B, and L
//! stickers are forced: the lower two rows are center-colored, and the
//! seven hidden last-layer facets follow from corner twist tables and a
//! permutation parity argument. The tables are generated once by
//! enumerating every OLL x PLL x AUF state reachable from a solved F2L.

use cube_core::{Algorithm, Color, Cube, Face};
use fxhash::FxHashMap;
use log::info;
use rayon::prelude::*;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::{start, success};

const AUF: [&str; 4] = ["", "U", "U'", "U2"];

/// A cubie identity: the set of its sticker colors, order-free.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
struct ColorSet(u8);

impl ColorSet {
    fn of(colors: impl IntoIterator<Item = Color>) -> ColorSet {
        ColorSet(
            colors
                .into_iter()
                .fold(0, |mask, color| mask | (1 << color as u8)),
        )
    }
}

/// Home pieces of the four top corners, slot order UFR, UFL, UBR, UBL.
fn corner_homes() -> [ColorSet; 4] {
    [
        ColorSet::of([Color::White, Color::Red, Color::Blue]),
        ColorSet::of([Color::White, Color::Red, Color::Green]),
        ColorSet::of([Color::White, Color::Orange, Color::Blue]),
        ColorSet::of([Color::White, Color::Orange, Color::Green]),
    ]
}

/// The colored (non-white) sticker of each top edge, slot order UF, UR,
/// UB, UL.
const EDGE_COLORS: [Color; 4] = [Color::Red, Color::Blue, Color::Orange, Color::Green];

fn edge_home_index(colored: Color) -> Option<usize> {
    EDGE_COLORS.iter().position(|&c| c == colored)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconstructError {
    #[error("expected 27 observed stickers, got {0}")]
    WrongStickerCount(usize),
    #[error("the {slot} corner stickers {top}/{side} do not match any reachable last-layer state")]
    UnknownCorner { slot: &'static str, top: Color, side: Color },
    #[error("the {slot} corner colors do not form a top-layer corner piece")]
    InvalidCorner { slot: &'static str },
    #[error("the visible corners leave no single piece for the UBL corner")]
    AmbiguousUblCorner,
    #[error("the UBL corner twist is not reachable from a solved F2L")]
    UnknownUblTwist,
    #[error("the {slot} edge stickers {top}/{side} do not form a top-layer edge")]
    InvalidEdge { slot: &'static str, top: Color, side: Color },
    #[error("edge color {0} is already placed elsewhere")]
    DuplicateEdge(Color),
}

/// Corner twist tables keyed by the visible stickers of each partially
/// hidden top corner.
pub struct StateReconstructor {
    // (U6, F0) -> L2
    ufl: FxHashMap<(Color, Color), Color>,
    // (U2, R2) -> B0
    ubr: FxHashMap<(Color, Color), Color>,
    // (piece, U0) -> (B2, L0)
    ubl: FxHashMap<(ColorSet, Color), (Color, Color)>,
}

impl StateReconstructor {
    /// Builds the corner tables from the catalog's OLL and PLL sets.
    #[must_use]
    pub fn new(catalog: &Catalog) -> StateReconstructor {
        info!(start!("building corner twist tables"));
        let mut reconstructor = StateReconstructor {
            ufl: FxHashMap::default(),
            ubr: FxHashMap::default(),
            ubl: FxHashMap::default(),
        };
        let (Some(oll), Some(pll)) = (catalog.get_set("OLL"), catalog.get_set("PLL")) else {
            return reconstructor;
        };
        let aufs: Vec<Algorithm> = AUF
            .iter()
            .map(|s| s.parse().expect("static AUF sequence parses"))
            .collect();

        type Partial = (
            Vec<((Color, Color), Color)>,
            Vec<((Color, Color), Color)>,
            Vec<((ColorSet, Color), (Color, Color))>,
        );
        let partials: Vec<Partial> = oll
            .cases()
            .par_iter()
            .map(|oll_case| {
                let mut partial: Partial = (Vec::new(), Vec::new(), Vec::new());
                for pll_case in pll.cases() {
                    for auf in &aufs {
                        let mut cube = Cube::solved();
                        cube.apply(&oll_case.algorithm);
                        cube.apply(&pll_case.algorithm);
                        cube.apply(auf);
                        let (u, f, b, l, r) = (
                            &cube[Face::U],
                            &cube[Face::F],
                            &cube[Face::B],
                            &cube[Face::L],
                            &cube[Face::R],
                        );
                        partial.0.push(((u[6], f[0]), l[2]));
                        partial.1.push(((u[2], r[2]), b[0]));
                        partial.2.push((
                            (ColorSet::of([u[0], b[2], l[0]]), u[0]),
                            (b[2], l[0]),
                        ));
                    }
                }
                partial
            })
            .collect();
        for (ufl, ubr, ubl) in partials {
            for (key, value) in ufl {
                reconstructor.ufl.entry(key).or_insert(value);
            }
            for (key, value) in ubr {
                reconstructor.ubr.entry(key).or_insert(value);
            }
            for (key, value) in ubl {
                reconstructor.ubl.entry(key).or_insert(value);
            }
        }
        info!(
            success!("corner tables ready ({} UFL, {} UBR, {} UBL keys)"),
            reconstructor.ufl.len(),
            reconstructor.ubr.len(),
            reconstructor.ubl.len()
        );
        reconstructor
    }

    /// Rebuilds the full 54-sticker state from a 27-sticker observation
    /// (U, F, R faces in row-major order).
    pub fn reconstruct(&self, visible: &[Color]) -> Result<Cube, ReconstructError> {
        if visible.len() != 27 {
            return Err(ReconstructError::WrongStickerCount(visible.len()));
        }
        let mut u = [Color::White; 9];
        let mut f = [Color::White; 9];
        let mut r = [Color::White; 9];
        u.copy_from_slice(&visible[..9]);
        f.copy_from_slice(&visible[9..18]);
        r.copy_from_slice(&visible[18..27]);

        // hidden corner facets from the twist tables
        let l2 = *self
            .ufl
            .get(&(u[6], f[0]))
            .ok_or(ReconstructError::UnknownCorner {
                slot: "UFL",
                top: u[6],
                side: f[0],
            })?;
        let b0 = *self
            .ubr
            .get(&(u[2], r[2]))
            .ok_or(ReconstructError::UnknownCorner {
                slot: "UBR",
                top: u[2],
                side: r[2],
            })?;

        let homes = corner_homes();
        let ufr_piece = ColorSet::of([u[8], f[2], r[0]]);
        let ufl_piece = ColorSet::of([u[6], f[0], l2]);
        let ubr_piece = ColorSet::of([u[2], r[2], b0]);
        let ufr_home = homes
            .iter()
            .position(|&h| h == ufr_piece)
            .ok_or(ReconstructError::InvalidCorner { slot: "UFR" })?;
        let ufl_home = homes
            .iter()
            .position(|&h| h == ufl_piece)
            .ok_or(ReconstructError::InvalidCorner { slot: "UFL" })?;
        let ubr_home = homes
            .iter()
            .position(|&h| h == ubr_piece)
            .ok_or(ReconstructError::InvalidCorner { slot: "UBR" })?;
        if ufr_home == ufl_home || ufr_home == ubr_home || ufl_home == ubr_home {
            return Err(ReconstructError::AmbiguousUblCorner);
        }
        let ubl_home = (0..4)
            .find(|i| ![ufr_home, ufl_home, ubr_home].contains(i))
            .ok_or(ReconstructError::AmbiguousUblCorner)?;
        let (b2, l0) = *self
            .ubl
            .get(&(homes[ubl_home], u[0]))
            .ok_or(ReconstructError::UnknownUblTwist)?;
        let corner_perm = [ufr_home, ufl_home, ubr_home, ubl_home];

        // visible edges identify their pieces directly
        let uf = edge_colored("UF", u[7], f[1])?;
        let ur = edge_colored("UR", u[5], r[1])?;
        let uf_home = edge_home_index(uf).ok_or(ReconstructError::InvalidEdge {
            slot: "UF",
            top: u[7],
            side: f[1],
        })?;
        let ur_home = edge_home_index(ur).ok_or(ReconstructError::InvalidEdge {
            slot: "UR",
            top: u[5],
            side: r[1],
        })?;
        if uf == ur {
            return Err(ReconstructError::DuplicateEdge(uf));
        }
        let remaining: Vec<Color> = EDGE_COLORS
            .into_iter()
            .filter(|&c| c != uf && c != ur)
            .collect();
        let (b1, l1) = match (u[1] == Color::White, u[3] == Color::White) {
            (false, false) => {
                let ub = require_remaining(&remaining, u[1])?;
                let ul = require_remaining(&remaining, u[3])?;
                if ub == ul {
                    return Err(ReconstructError::DuplicateEdge(ub));
                }
                (Color::White, Color::White)
            }
            (false, true) => {
                let ub = require_remaining(&remaining, u[1])?;
                (Color::White, other_of(&remaining, ub))
            }
            (true, false) => {
                let ul = require_remaining(&remaining, u[3])?;
                (other_of(&remaining, ul), Color::White)
            }
            (true, true) => {
                // both hidden edges oriented: the permutation parity of
                // the top edges must match that of the top corners
                let (a, b) = (remaining[0], remaining[1]);
                let edge_perm = |ub: Color, ul: Color| {
                    [
                        uf_home,
                        ur_home,
                        edge_home_index(ub).unwrap_or(2),
                        edge_home_index(ul).unwrap_or(3),
                    ]
                };
                if is_even(edge_perm(a, b)) == is_even(corner_perm) {
                    (a, b)
                } else {
                    (b, a)
                }
            }
        };

        let mut faces = [[Color::White; 9]; 6];
        faces[Face::U as usize] = u;
        faces[Face::F as usize] = f;
        faces[Face::R as usize] = r;
        faces[Face::D as usize] = [Color::Yellow; 9];
        faces[Face::B as usize] = [
            b0,
            b1,
            b2,
            Color::Orange,
            Color::Orange,
            Color::Orange,
            Color::Orange,
            Color::Orange,
            Color::Orange,
        ];
        faces[Face::L as usize] = [
            l0,
            l1,
            l2,
            Color::Green,
            Color::Green,
            Color::Green,
            Color::Green,
            Color::Green,
            Color::Green,
        ];
        Ok(Cube::from_faces(faces))
    }
}

fn edge_colored(slot: &'static str, top: Color, side: Color) -> Result<Color, ReconstructError> {
    match (top == Color::White, side == Color::White) {
        (true, false) => Ok(side),
        (false, true) => Ok(top),
        _ => Err(ReconstructError::InvalidEdge { slot, top, side }),
    }
}

fn require_remaining(remaining: &[Color], color: Color) -> Result<Color, ReconstructError> {
    if remaining.contains(&color) {
        Ok(color)
    } else {
        Err(ReconstructError::DuplicateEdge(color))
    }
}

fn other_of(remaining: &[Color], taken: Color) -> Color {
    if remaining[0] == taken {
        remaining[1]
    } else {
        remaining[0]
    }
}

fn is_even(perm: [usize; 4]) -> bool {
    let mut visited = [false; 4];
    let mut transpositions = 0;
    for start in 0..4 {
        if visited[start] {
            continue;
        }
        let mut i = start;
        let mut len = 0;
        while !visited[i] {
            visited[i] = true;
            i = perm[i];
            len += 1;
        }
        transpositions += len - 1;
    }
    transpositions % 2 == 0
}

/// An independent sanity pass over a reconstructed state.
#[must_use]
pub fn validate(cube: &Cube) -> Vec<String> {
    let mut problems = Vec::new();
    for color in Color::ALL {
        let count = Face::ALL
            .into_iter()
            .flat_map(|face| cube[face])
            .filter(|&c| c == color)
            .count();
        if count != 9 {
            problems.push(format!("expected 9 {color} stickers, found {count}"));
        }
    }
    for face in Face::ALL {
        if cube.center(face) != face.solved_color() {
            problems.push(format!(
                "center of {face} is {}, expected {}",
                cube.center(face),
                face.solved_color()
            ));
        }
    }
    if !cube.is_f2l_solved() {
        problems.push("first two layers are not solved".to_owned());
    }
    problems
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_sets_are_order_free() {
        let a = ColorSet::of([Color::White, Color::Red, Color::Blue]);
        let b = ColorSet::of([Color::Blue, Color::White, Color::Red]);
        assert_eq!(a, b);
        assert_ne!(a, ColorSet::of([Color::White, Color::Red, Color::Green]));
    }

    #[test]
    fn parity_of_small_permutations() {
        assert!(is_even([0, 1, 2, 3]));
        assert!(!is_even([1, 0, 2, 3]));
        assert!(is_even([1, 0, 3, 2]));
        assert!(is_even([1, 2, 0, 3]));
    }
}
