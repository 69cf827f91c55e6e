// Park transformations (αβ ⇄ dq)
// sin/cos of the electrical angle are supplied by the caller and are not checked for consistency

use crate::fmt::*;

/// Forward Park transformation (αβ → dq)
///
/// Rotates the stationary frame into the rotor-synchronous frame
///
/// # Arguments
/// * `alpha` - Alpha-axis component
/// * `beta` - Beta-axis component
/// * `sin_angle` - sin(θ) of the electrical angle
/// * `cos_angle` - cos(θ) of the electrical angle
///
/// # Returns
/// Tuple of (d, q) in the rotating frame
#[inline]
pub fn park(alpha: f32, beta: f32, sin_angle: f32, cos_angle: f32) -> (f32, f32) {
    let d = alpha * cos_angle + beta * sin_angle;
    let q = beta * cos_angle - alpha * sin_angle;

    (d, q)
}

/// Inverse Park transformation (dq → αβ)
///
/// Transforms from the rotating dq reference frame to the stationary αβ frame
///
/// # Arguments
/// * `d` - d-axis component (aligned with rotor flux)
/// * `q` - q-axis component (perpendicular to rotor flux, produces torque)
/// * `sin_angle` - sin(θ) of the electrical angle
/// * `cos_angle` - cos(θ) of the electrical angle
///
/// # Returns
/// Tuple of (alpha, beta) in the stationary frame
#[inline]
pub fn inverse_park(d: f32, q: f32, sin_angle: f32, cos_angle: f32) -> (f32, f32) {
    let alpha = d * cos_angle - q * sin_angle;
    let beta = q * cos_angle + d * sin_angle;

    (alpha, beta)
}

/// Forward Park record: αβ → dq
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ForwardPark {
    /// Alpha input
    pub alpha: f32,
    /// Beta input
    pub beta: f32,
    /// sin(θ) input
    pub sin_angle: f32,
    /// cos(θ) input
    pub cos_angle: f32,
    /// d-axis output
    pub d: f32,
    /// q-axis output
    pub q: f32,
}

impl ForwardPark {
    /// All fields zero, including `cos_angle`
    pub const fn new() -> Self {
        Self {
            alpha: 0.0,
            beta: 0.0,
            sin_angle: 0.0,
            cos_angle: 0.0,
            d: 0.0,
            q: 0.0,
        }
    }

    /// Compute `d`/`q` from `alpha`, `beta` and the angle
    pub fn update(&mut self) {
        (self.d, self.q) = park(self.alpha, self.beta, self.sin_angle, self.cos_angle);
        trace!("park: d={} q={}", self.d, self.q);
    }
}

/// Inverse Park record: dq → αβ
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InversePark {
    /// d-axis input
    pub d: f32,
    /// q-axis input
    pub q: f32,
    /// sin(θ) input
    pub sin_angle: f32,
    /// cos(θ) input
    pub cos_angle: f32,
    /// Alpha output
    pub alpha: f32,
    /// Beta output
    pub beta: f32,
}

impl InversePark {
    pub const fn new() -> Self {
        Self {
            d: 0.0,
            q: 0.0,
            sin_angle: 0.0,
            cos_angle: 0.0,
            alpha: 0.0,
            beta: 0.0,
        }
    }

    /// Compute `alpha`/`beta` from `d`, `q` and the angle
    pub fn update(&mut self) {
        (self.alpha, self.beta) = inverse_park(self.d, self.q, self.sin_angle, self.cos_angle);
        trace!("inverse_park: alpha={} beta={}", self.alpha, self.beta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::{FRAC_PI_2, TAU};
    use libm::{cosf, sinf};

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_park_zero_angle() {
        let (d, q) = park(1.0, 0.0, 0.0, 1.0);
        assert!(approx_eq(d, 1.0));
        assert!(approx_eq(q, 0.0));
    }

    #[test]
    fn test_park_quarter_turn() {
        let (d, q) = park(1.0, 0.0, 1.0, 0.0);
        assert!(approx_eq(d, 0.0));
        assert!(approx_eq(q, -1.0));
    }

    #[test]
    fn test_park_from_libm_angle() {
        let (d, q) = park(1.0, 0.0, sinf(FRAC_PI_2), cosf(FRAC_PI_2));
        assert!(approx_eq(d, 0.0));
        assert!(approx_eq(q, -1.0));
    }

    #[test]
    fn test_inverse_park_zero_angle() {
        let (alpha, beta) = inverse_park(1.0, 0.0, 0.0, 1.0);
        assert!(approx_eq(alpha, 1.0));
        assert!(approx_eq(beta, 0.0));
    }

    #[test]
    fn test_inverse_park_quarter_turn() {
        // q-axis current at 90° lands on -alpha
        let (alpha, beta) = inverse_park(0.0, 1.0, 1.0, 0.0);
        assert!(approx_eq(alpha, -1.0));
        assert!(approx_eq(beta, 0.0));
    }

    #[test]
    fn test_zero_in_zero_out() {
        assert_eq!(park(0.0, 0.0, 0.0, 0.0), (0.0, 0.0));
        assert_eq!(inverse_park(0.0, 0.0, 0.0, 0.0), (0.0, 0.0));

        let mut fp = ForwardPark::new();
        fp.update();
        assert_eq!(fp, ForwardPark::default());

        let mut ip = InversePark::new();
        ip.update();
        assert_eq!(ip, InversePark::default());
    }

    #[test]
    fn test_round_trip_over_angles() {
        let inputs: [(f32, f32); 4] = [(2.0, 3.0), (1.0, 0.0), (-0.4, 0.9), (12.0, -8.0)];
        for step in 0..64 {
            let theta = step as f32 * TAU / 64.0;
            let (sin_angle, cos_angle) = (sinf(theta), cosf(theta));

            for &(alpha, beta) in &inputs {
                let (d, q) = park(alpha, beta, sin_angle, cos_angle);
                let (alpha2, beta2) = inverse_park(d, q, sin_angle, cos_angle);
                let scale = 1.0_f32.max(alpha.abs()).max(beta.abs());
                assert!(approx_eq(alpha2 / scale, alpha / scale), "alpha at θ={theta}");
                assert!(approx_eq(beta2 / scale, beta / scale), "beta at θ={theta}");

                let (alpha3, beta3) = inverse_park(alpha, beta, sin_angle, cos_angle);
                let (d3, q3) = park(alpha3, beta3, sin_angle, cos_angle);
                assert!(approx_eq(d3 / scale, alpha / scale));
                assert!(approx_eq(q3 / scale, beta / scale));
            }
        }
    }

    #[test]
    fn test_records_match_free_functions() {
        let (sin_angle, cos_angle) = (sinf(0.82), cosf(0.82));

        let mut fp = ForwardPark { alpha: 2.0, beta: 3.0, sin_angle, cos_angle, ..ForwardPark::new() };
        fp.update();
        assert_eq!((fp.d, fp.q), park(2.0, 3.0, sin_angle, cos_angle));

        let mut ip = InversePark { d: fp.d, q: fp.q, sin_angle, cos_angle, ..InversePark::new() };
        ip.update();
        assert_eq!((ip.alpha, ip.beta), inverse_park(fp.d, fp.q, sin_angle, cos_angle));
        assert!(approx_eq(ip.alpha, 2.0));
        assert!(approx_eq(ip.beta, 3.0));
    }

    #[test]
    fn test_update_leaves_inputs_untouched() {
        let mut fp = ForwardPark { alpha: 0.5, beta: -0.5, sin_angle: 0.6, cos_angle: 0.8, ..ForwardPark::new() };
        fp.update();
        assert_eq!((fp.alpha, fp.beta, fp.sin_angle, fp.cos_angle), (0.5, -0.5, 0.6, 0.8));

        let mut ip = InversePark { d: 0.5, q: -0.5, sin_angle: 0.6, cos_angle: 0.8, ..InversePark::new() };
        ip.update();
        assert_eq!((ip.d, ip.q, ip.sin_angle, ip.cos_angle), (0.5, -0.5, 0.6, 0.8));
    }

    #[test]
    fn test_inconsistent_sincos_not_normalized() {
        // sin²+cos² != 1 is the caller's problem; the result simply scales
        let (d, q) = park(1.0, 0.0, 0.0, 2.0);
        assert!(approx_eq(d, 2.0));
        assert!(approx_eq(q, 0.0));
    }

    #[test]
    fn test_nan_propagates() {
        let (d, q) = park(1.0, 0.0, f32::NAN, 1.0);
        // 0 * NaN is NaN, so both outputs are poisoned
        assert!(d.is_nan());
        assert!(q.is_nan());
    }
}
