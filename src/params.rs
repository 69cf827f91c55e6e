//! Numeric constants shared by the Clarke and Park transforms
//!
//! All values are single precision to match the rest of the control pipeline.

/// √3
pub const SQRT_3: f32 = 1.732_050_8;

/// 1/√3
pub const FRAC_1_SQRT_3: f32 = 0.577_350_26;

/// 1/3
pub const ONE_THIRD: f32 = 1.0 / 3.0;

/// 2/3
pub const TWO_THIRDS: f32 = 2.0 / 3.0;
