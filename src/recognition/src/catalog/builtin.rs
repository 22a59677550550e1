//! The built-in OLL and PLL case tables.
//!
//! These are the canonical source for the two core sets; an external
//! catalog can add sets but never replaces them. Declaration order is
//! load order, which in turn fixes which case wins a first-writer-wins
//! collision in the lookup tables.

use phf::OrderedMap;
use phf::phf_ordered_map;

/// Orientation of the last layer: the 57 numbered cases plus the two
/// named triggers.
pub static OLL_CASES: OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "OLL 1" => "R U2 R2 F R F' U2 R' F R F'",
    "OLL 2" => "F R U R' U' F' f R U R' U' f'",
    "OLL 3" => "f R U R' U' f' U' F R U R' U' F'",
    "OLL 4" => "f R U R' U' f' U F R U R' U' F'",
    "OLL 5" => "r' U2 R U R' U r",
    "OLL 6" => "r U2 R' U' R U' r'",
    "OLL 7" => "r U R' U R U2 r'",
    "OLL 8" => "r' U' R U' R' U2 r",
    "OLL 9" => "R U R' U' R' F R2 U R' U' F'",
    "OLL 10" => "R U R' U R' F R F' R U2 R'",
    "OLL 11" => "r U R' U R' F R F' R U2 r'",
    "OLL 12" => "M' R' U' R U' R' U2 R U' R r'",
    "OLL 13" => "F U R U' R2 F' R U R U' R'",
    "OLL 14" => "R' F R U R' F' R F U' F'",
    "OLL 15" => "r' U' r R' U' R U r' U r",
    "OLL 16" => "r U r' R U R' U' r U' r'",
    "OLL 17" => "R U R' U R' F R F' U2 R' F R F'",
    "OLL 18" => "r U R' U R U2 r2 U' R U' R' U2 r",
    "OLL 19" => "M U R U R' U' M' R' F R F'",
    "OLL 20" => "M U R U R' U' M2 U R U' r'",
    "OLL 21" => "R U2 R' U' R U R' U' R U' R'",
    "OLL 22" => "R U2 R2 U' R2 U' R2 U2 R",
    "OLL 23" => "R2 D' R U2 R' D R U2 R",
    "OLL 24" => "r U R' U' r' F R F'",
    "OLL 25" => "F' r U R' U' r' F R",
    "OLL 26" => "R U2 R' U' R U' R'",
    "OLL 27" => "R U R' U R U2 R'",
    "OLL 28" => "r U R' U' r' R U R U' R'",
    "OLL 29" => "R U R' U' R U' R' F' U' F R U R'",
    "OLL 30" => "F R' F R2 U' R' U' R U R' F2",
    "OLL 31" => "R' U' F U R U' R' F' R",
    "OLL 32" => "L U F' U' L' U L F L'",
    "OLL 33" => "R U R' U' R' F R F'",
    "OLL 34" => "R U R2 U' R' F R U R U' F'",
    "OLL 35" => "R U2 R2 F R F' R U2 R'",
    "OLL 36" => "L' U' L U' L' U L U L F' L' F",
    "OLL 37" => "F R U' R' U' R U R' F'",
    "OLL 38" => "R U R' U R U' R' U' R' F R F'",
    "OLL 39" => "L F' L' U' L U F U' L'",
    "OLL 40" => "R' F R U R' U' F' U R",
    "OLL 41" => "R U R' U R U2 R' F R U R' U' F'",
    "OLL 42" => "R' U' R U' R' U2 R F R U R' U' F'",
    "OLL 43" => "F' U' L' U L F",
    "OLL 44" => "F U R U' R' F'",
    "OLL 45" => "F R U R' U' F'",
    "OLL 46" => "R' U' R' F R F' U R",
    "OLL 47" => "R' U' R' F R F' R' F R F' U R",
    "OLL 48" => "F R U R' U' R U R' U' F'",
    "OLL 49" => "r U' r2 U r2 U r2 U' r",
    "OLL 50" => "r' U r2 U' r2 U' r2 U r'",
    "OLL 51" => "f R U R' U' R U R' U' f'",
    "OLL 52" => "R' F' U' F U' R U R' U R",
    "OLL 53" => "r' U' R U' R' U R U' R' U2 r",
    "OLL 54" => "r U R' U R U' R' U R U2 r'",
    "OLL 55" => "R U2 R2 U' R U' R' U2 F R F'",
    "OLL 56" => "r U r' U R U' R' U R U' R' r U' r'",
    "OLL 57" => "R U R' U' M' U R U' r'",
    "Sune" => "R U R' U R U2 R'",
    "Anti-Sune" => "R U2 R' U' R U' R'",
};

/// Permutation of the last layer: the 21 named permutations plus the
/// empty "Solved" case, which lets the lookup tables recognize an
/// already-permuted layer.
pub static PLL_CASES: OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "T-Perm" => "R U R' U' R' F R2 U' R' U' R U R' F'",
    "J-Perm (a)" => "x R2 F R F' R U2 r' U r U2 x'",
    "J-Perm (b)" => "R U R' F' R U R' U' R' F R2 U' R'",
    "F-Perm" => "R' U' F' R U R' U' R' F R2 U' R' U' R U R' U R",
    "R-Perm (a)" => "R U' R' U' R U R D R' U' R D' R' U2 R'",
    "R-Perm (b)" => "R' U2 R U2 R' F R U R' U' R' F' R2",
    "Y-Perm" => "F R U' R' U' R U R' F' R U R' U' R' F R F'",
    // the trailing y' rebalances the mid-algorithm rotation so the cube
    // ends in the canonical orientation
    "V-Perm" => "R' U R' U' y R' F' R2 U' R' U R' F R F y'",
    "E-Perm" => "x' R U' R' D R U R' D' R U R' D R U' R' D' x",
    "N-Perm (a)" => "R U R' U R U R' F' R U R' U' R' F R2 U' R' U2 R U' R'",
    "N-Perm (b)" => "R' U R U' R' F' U' F R U R' F R' F' R U' R",
    "U-Perm (a)" => "R2 U R U R' U' R' U' R' U R'",
    "U-Perm (b)" => "R' U R' U' R' U' R' U R U R2",
    "Z-Perm" => "M2 U M2 U M' U2 M2 U2 M' U2",
    "H-Perm" => "M2 U M2 U2 M2 U M2",
    "A-Perm (a)" => "x R' U R' D2 R U' R' D2 R2 x'",
    "A-Perm (b)" => "x R2 D2 R U R' D2 R U' R x'",
    "G-Perm (a)" => "R2 U R' U R' U' R U' R2 D U' R' U R D'",
    "G-Perm (b)" => "R' U' R U D' R2 U R' U R U' R U' R2 D",
    "G-Perm (c)" => "R2 U' R U' R U R' U R2 D' U R U' R' D",
    "G-Perm (d)" => "R U R' U' D R2 U' R U' R' U R' U R2 D'",
    "Solved" => "",
};
