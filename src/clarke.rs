// Clarke transformations (ABC ⇄ αβ)
// Full forms take all three phases; reduced forms take two and rely on A + B + C = 0

use crate::fmt::*;
use crate::params::{FRAC_1_SQRT_3, ONE_THIRD, SQRT_3, TWO_THIRDS};

/// Forward full Clarke transformation (abc → αβ)
///
/// Amplitude-invariant form. Valid for unbalanced input: the zero-sequence
/// component (A + B + C) / 3 does not appear in the result.
///
/// # Arguments
/// * `a` - Phase A quantity
/// * `b` - Phase B quantity
/// * `c` - Phase C quantity
///
/// # Returns
/// Tuple of (alpha, beta) in the stationary frame
#[inline]
pub fn clarke(a: f32, b: f32, c: f32) -> (f32, f32) {
    let alpha = TWO_THIRDS * a - ONE_THIRD * (b + c);
    let beta = FRAC_1_SQRT_3 * (b - c);

    (alpha, beta)
}

/// Forward reduced Clarke transformation (ab → αβ)
///
/// Phase C is implied as -(A + B). The caller is responsible for the
/// balance; it is not checked.
///
/// # Arguments
/// * `a` - Phase A quantity
/// * `b` - Phase B quantity
///
/// # Returns
/// Tuple of (alpha, beta) in the stationary frame
#[inline]
pub fn clarke_reduced(a: f32, b: f32) -> (f32, f32) {
    let alpha = a;
    let beta = FRAC_1_SQRT_3 * (a + 2.0 * b);

    (alpha, beta)
}

/// Inverse full Clarke transformation (αβ → abc)
///
/// The result is always balanced (A + B + C = 0).
///
/// # Arguments
/// * `alpha` - Alpha-axis component
/// * `beta` - Beta-axis component
///
/// # Returns
/// Tuple of (a, b, c) three-phase quantities
#[inline]
pub fn inverse_clarke(alpha: f32, beta: f32) -> (f32, f32, f32) {
    let a = alpha;
    let b = 0.5 * (-alpha + SQRT_3 * beta);
    let c = 0.5 * (-alpha - SQRT_3 * beta);

    (a, b, c)
}

/// Inverse reduced Clarke transformation (αβ → ab)
///
/// Phase C is omitted; the caller recovers it as -(A + B) when needed.
///
/// # Returns
/// Tuple of (a, b)
#[inline]
pub fn inverse_clarke_reduced(alpha: f32, beta: f32) -> (f32, f32) {
    let a = alpha;
    let b = 0.5 * (SQRT_3 * beta - alpha);

    (a, b)
}

/// Forward full Clarke record: abc → αβ
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ForwardClarke {
    /// Phase A input
    pub a: f32,
    /// Phase B input
    pub b: f32,
    /// Phase C input
    pub c: f32,
    /// Alpha output
    pub alpha: f32,
    /// Beta output
    pub beta: f32,
}

impl ForwardClarke {
    /// All fields zero
    pub const fn new() -> Self {
        Self {
            a: 0.0,
            b: 0.0,
            c: 0.0,
            alpha: 0.0,
            beta: 0.0,
        }
    }

    /// Compute `alpha`/`beta` from `a`, `b`, `c`
    pub fn update(&mut self) {
        (self.alpha, self.beta) = clarke(self.a, self.b, self.c);
        trace!("clarke: alpha={} beta={}", self.alpha, self.beta);
    }
}

/// Forward reduced Clarke record: ab → αβ (assumes A + B + C = 0)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ForwardClarkeReduced {
    /// Phase A input
    pub a: f32,
    /// Phase B input
    pub b: f32,
    /// Alpha output
    pub alpha: f32,
    /// Beta output
    pub beta: f32,
}

impl ForwardClarkeReduced {
    /// All fields zero
    pub const fn new() -> Self {
        Self {
            a: 0.0,
            b: 0.0,
            alpha: 0.0,
            beta: 0.0,
        }
    }

    /// Compute `alpha`/`beta` from `a`, `b`
    pub fn update(&mut self) {
        (self.alpha, self.beta) = clarke_reduced(self.a, self.b);
        trace!("clarke_reduced: alpha={} beta={}", self.alpha, self.beta);
    }
}

/// Inverse full Clarke record: αβ → abc
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InverseClarke {
    /// Alpha input
    pub alpha: f32,
    /// Beta input
    pub beta: f32,
    /// Phase A output
    pub a: f32,
    /// Phase B output
    pub b: f32,
    /// Phase C output
    pub c: f32,
}

impl InverseClarke {
    pub const fn new() -> Self {
        Self {
            alpha: 0.0,
            beta: 0.0,
            a: 0.0,
            b: 0.0,
            c: 0.0,
        }
    }

    /// Compute `a`, `b`, `c` from `alpha`/`beta`
    pub fn update(&mut self) {
        (self.a, self.b, self.c) = inverse_clarke(self.alpha, self.beta);
        trace!("inverse_clarke: a={} b={} c={}", self.a, self.b, self.c);
    }
}

/// Inverse reduced Clarke record: αβ → ab
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InverseClarkeReduced {
    pub alpha: f32,
    pub beta: f32,
    pub a: f32,
    pub b: f32,
}

impl InverseClarkeReduced {
    pub const fn new() -> Self {
        Self {
            alpha: 0.0,
            beta: 0.0,
            a: 0.0,
            b: 0.0,
        }
    }

    /// Compute `a`, `b` from `alpha`/`beta`
    pub fn update(&mut self) {
        (self.a, self.b) = inverse_clarke_reduced(self.alpha, self.beta);
        trace!("inverse_clarke_reduced: a={} b={}", self.a, self.b);
    }
}
