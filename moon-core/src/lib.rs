//! Numeric building blocks for the moontool Sun/Moon engine.
//!
//! `moon-core` holds the pieces every other crate in the workspace leans on:
//! the fixed orbital elements of the 1980.0-epoch model, degree-based
//! trigonometry with angle fixing, and an iterative Kepler solver.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constants`] | Epoch 1980.0 elements for the Sun and Moon, synodic month, lunation base |
//! | [`math`] | `fix_angle`, `dsin`, `dcos`, degree/radian conversion |
//! | [`kepler`] | Newton-Raphson solution of Kepler's equation |
//! | [`test_helpers`] | Tolerance and ULP float assertions |
//!
//! # Design Notes
//!
//! - **Total functions**: nothing here can fail. Out-of-range inputs produce
//!   out-of-range numbers, never errors.
//! - **Degrees at the surface**: the model is published in degrees, so the
//!   helpers accept degrees and convert internally.
//! - **No state**: constants are `const` items; every function is pure and
//!   safe to call from any thread.

pub mod constants;
pub mod kepler;
pub mod math;

pub mod test_helpers;

pub use kepler::solve_kepler;
pub use math::{dcos, dsin, fix_angle};
