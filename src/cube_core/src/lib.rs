//! Sticker-level 3x3 cube engine.
//!
//! The cube is modeled as six faces of nine stickers each, indexed row-major
//! from the top-left. All eighteen generators of the face-turn metric plus
//! slices, wide moves, and whole-cube rotations are supported, along with
//! algorithm parsing/inversion and the inspection predicates that the
//! recognition and solving layers are built on.

pub mod algorithm;
pub mod cube;
pub mod moves;

pub use algorithm::Algorithm;
pub use cube::{Color, Cube, Face, LabelParseError, Slot};
pub use moves::{BaseMove, InvalidMoveError, Move, Turn};
