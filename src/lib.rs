//! Clarke and Park coordinate transforms for three-phase motor control
//!
//! Six stateless operations, each on its own small record of `f32` fields:
//!
//! | Record | Operation |
//! |--------|-----------|
//! | [`ForwardClarke`] | abc → αβ |
//! | [`ForwardClarkeReduced`] | ab → αβ (A + B + C = 0) |
//! | [`InverseClarke`] | αβ → abc |
//! | [`InverseClarkeReduced`] | αβ → ab |
//! | [`ForwardPark`] | αβ → dq |
//! | [`InversePark`] | dq → αβ |
//!
//! Fill the inputs, call `update()`, read the outputs. The same math is
//! available as tuple-returning free functions for call sites that don't keep
//! a record around.
//!
//! The sine and cosine of the electrical angle are supplied by the caller.

#![cfg_attr(not(test), no_std)]

mod fmt;

pub mod clarke;
pub mod params;
pub mod park;

// Re-export main types for easier access
pub use clarke::{
    clarke, clarke_reduced, inverse_clarke, inverse_clarke_reduced, ForwardClarke,
    ForwardClarkeReduced, InverseClarke, InverseClarkeReduced,
};
pub use park::{inverse_park, park, ForwardPark, InversePark};
