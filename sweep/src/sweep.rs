//! Numeric sweep over the electrical angle
//!
//! Drives every transform with a balanced three-phase set rotating through
//! one electrical revolution and records the worst error seen for each
//! round trip.

use std::f32::consts::TAU;

use tracing::debug;
use vector_transforms::{
    clarke, clarke_reduced, inverse_clarke, inverse_clarke_reduced, inverse_park, park,
};

/// 120° phase displacement
const PHASE_SHIFT: f32 = TAU / 3.0;

/// Worst-case errors from one sweep, relative to the sweep amplitude
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SweepReport {
    /// Number of angles visited
    pub steps: u32,
    /// αβ → dq → αβ
    pub park_round_trip: f32,
    /// ab → αβ → ab
    pub clarke_reduced_round_trip: f32,
    /// abc → αβ → abc with balanced input
    pub clarke_full_round_trip: f32,
    /// Full vs reduced forward Clarke on the same balanced input
    pub clarke_agreement: f32,
    /// |dq| vs |αβ| after the forward Park
    pub park_magnitude_drift: f32,
}

impl SweepReport {
    /// Largest of all recorded errors
    pub fn worst(&self) -> f32 {
        self.park_round_trip
            .max(self.clarke_reduced_round_trip)
            .max(self.clarke_full_round_trip)
            .max(self.clarke_agreement)
            .max(self.park_magnitude_drift)
    }
}

/// Run the sweep
///
/// # Arguments
/// * `steps` - Number of evenly spaced angles in [0, 2π)
/// * `amplitude` - Peak phase amplitude; errors are reported relative to it
pub fn run_sweep(steps: u32, amplitude: f32) -> SweepReport {
    debug!(steps, amplitude, "starting sweep");

    let mut report = SweepReport {
        steps,
        ..Default::default()
    };
    let scale = amplitude.abs();

    for step in 0..steps {
        let theta = step as f32 * TAU / steps as f32;
        let (sin_angle, cos_angle) = theta.sin_cos();

        // Balanced phase set at θ
        let a = amplitude * cos_angle;
        let b = amplitude * (theta - PHASE_SHIFT).cos();
        let c = amplitude * (theta + PHASE_SHIFT).cos();

        let (alpha_red, beta_red) = clarke_reduced(a, b);
        let (a_red, b_red) = inverse_clarke_reduced(alpha_red, beta_red);
        report.clarke_reduced_round_trip = report
            .clarke_reduced_round_trip
            .max(relative_error(a_red, a, scale))
            .max(relative_error(b_red, b, scale));

        let (alpha, beta) = clarke(a, b, c);
        let (a_full, b_full, c_full) = inverse_clarke(alpha, beta);
        report.clarke_full_round_trip = report
            .clarke_full_round_trip
            .max(relative_error(a_full, a, scale))
            .max(relative_error(b_full, b, scale))
            .max(relative_error(c_full, c, scale));

        report.clarke_agreement = report
            .clarke_agreement
            .max(relative_error(alpha, alpha_red, scale))
            .max(relative_error(beta, beta_red, scale));

        // Fixed stationary vector seen from a rotating frame
        let (alpha_in, beta_in) = (0.8 * amplitude, -0.6 * amplitude);
        let (d, q) = park(alpha_in, beta_in, sin_angle, cos_angle);
        let (alpha_out, beta_out) = inverse_park(d, q, sin_angle, cos_angle);
        report.park_round_trip = report
            .park_round_trip
            .max(relative_error(alpha_out, alpha_in, scale))
            .max(relative_error(beta_out, beta_in, scale));

        let drift = relative_error(d.hypot(q), alpha_in.hypot(beta_in), scale);
        report.park_magnitude_drift = report.park_magnitude_drift.max(drift);
    }

    debug!(?report, "sweep finished");
    report
}

#[inline]
fn relative_error(measured: f32, expected: f32, scale: f32) -> f32 {
    (measured - expected).abs() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-5;

    #[test]
    fn test_unit_amplitude_within_tolerance() {
        let report = run_sweep(360, 1.0);
        assert_eq!(report.steps, 360);
        assert!(report.worst() < TOLERANCE, "{report:?}");
    }

    #[test]
    fn test_errors_scale_with_amplitude() {
        let report = run_sweep(72, 400.0);
        assert!(report.worst() < TOLERANCE, "{report:?}");

        let report = run_sweep(72, -0.01);
        assert!(report.worst() < TOLERANCE, "{report:?}");
    }

    #[test]
    fn test_zero_steps_is_empty_report() {
        let report = run_sweep(0, 1.0);
        assert_eq!(report, SweepReport::default());
    }

    #[test]
    fn test_worst_picks_largest() {
        let report = SweepReport {
            steps: 1,
            clarke_agreement: 0.5,
            park_round_trip: 0.1,
            ..Default::default()
        };
        assert_eq!(report.worst(), 0.5);
    }
}
