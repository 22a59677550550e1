//! State recognition for last-layer solving.
//!
//! This crate owns everything between a raw sticker observation and a
//! solvable cube state: the algorithm catalog (built-in OLL/PLL plus
//! JSON-loaded extended sets), the orientation-invariant lookup tables,
//! the solve-phase classifier, and full-state reconstruction from the
//! three faces visible in a top-down photo.

pub mod catalog;
pub mod phase;
pub mod reconstruct;
pub mod resolver;

#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}
