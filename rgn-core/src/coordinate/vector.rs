use nalgebra::Vector3;

use crate::angle::rad_to_deg;
use crate::error::{CoordinateError, Result};

/// Dot product of two 3-vectors
pub fn dot_product(v1: &Vector3<f64>, v2: &Vector3<f64>) -> f64 {
    v1.dot(v2)
}

/// Euclidean length of a 3-vector
pub fn vec_mag(v: &Vector3<f64>) -> f64 {
    dot_product(v, v).sqrt()
}

/// Angle AOB in radians between the rays origin->A and origin->B.
///
/// Returns NaN when either ray has zero length. The cosine is clamped to
/// [-1, 1] before `acos` so nearly collinear rays give 0 or π instead of NaN.
pub fn calc_angle(
    origin: &Vector3<f64>,
    point_a: &Vector3<f64>,
    point_b: &Vector3<f64>,
) -> f64 {
    let oa = point_a - origin;
    let ob = point_b - origin;

    let cos_angle = dot_product(&oa, &ob) / (vec_mag(&oa) * vec_mag(&ob));
    if !cos_angle.is_finite() {
        tracing::trace!("calc_angle on a zero-length ray");
        return f64::NAN;
    }

    let clamped = cos_angle.clamp(-1.0, 1.0);
    if clamped != cos_angle {
        tracing::trace!(cos_angle, "clamped acos argument");
    }

    clamped.acos()
}

/// [`calc_angle`] in degrees
pub fn calc_angle_deg(
    origin: &Vector3<f64>,
    point_a: &Vector3<f64>,
    point_b: &Vector3<f64>,
) -> f64 {
    rad_to_deg(calc_angle(origin, point_a, point_b))
}

/// [`calc_angle`] that reports a zero-length ray as an error instead of NaN
pub fn try_calc_angle(
    origin: &Vector3<f64>,
    point_a: &Vector3<f64>,
    point_b: &Vector3<f64>,
) -> Result<f64> {
    if vec_mag(&(point_a - origin)) == 0.0 || vec_mag(&(point_b - origin)) == 0.0 {
        return Err(CoordinateError::DegenerateVector.into());
    }

    Ok(calc_angle(origin, point_a, point_b))
}
