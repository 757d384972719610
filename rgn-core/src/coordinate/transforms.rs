use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use super::ellipsoid::Ellipsoid;
use super::vector::vec_mag;
use crate::error::{CoordinateError, Result, RgnError};

/// ECEF coordinates (Earth-Centered, Earth-Fixed), meters
pub type EcefCoord = Vector3<f64>;

/// ENU coordinates (East, North, Up) relative to a reference LLA, meters
pub type EnuCoord = Vector3<f64>;

/// LLA coordinates (Latitude, Longitude, Altitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LlaCoord {
    pub lat: f64, // degrees
    pub lon: f64, // degrees
    pub alt: f64, // meters above WGS84 ellipsoid
}

impl LlaCoord {
    pub const fn new(lat: f64, lon: f64, alt: f64) -> Self {
        Self { lat, lon, alt }
    }

    /// Checked constructor: latitude within [-90, 90], longitude and altitude finite
    pub fn try_new(lat: f64, lon: f64, alt: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::InvalidLatitude(lat).into());
        }
        if !lon.is_finite() {
            return Err(CoordinateError::InvalidLongitude(lon).into());
        }
        if !alt.is_finite() {
            return Err(CoordinateError::InvalidHeight(alt).into());
        }

        Ok(Self { lat, lon, alt })
    }
}

// Bounds for the iterative ECEF -> LLA solution
const MAX_ITERATIONS: usize = 20;
const LAT_TOLERANCE_RAD: f64 = 1e-12;

/// Rotation taking ECEF offsets into the local East-North-Up frame
fn enu_rotation(lat_deg: f64, lon_deg: f64) -> Matrix3<f64> {
    let (sin_lat, cos_lat) = lat_deg.to_radians().sin_cos();
    let (sin_lon, cos_lon) = lon_deg.to_radians().sin_cos();

    Matrix3::new(
        -sin_lon,
        cos_lon,
        0.0,
        -sin_lat * cos_lon,
        -sin_lat * sin_lon,
        cos_lat,
        cos_lat * cos_lon,
        cos_lat * sin_lon,
        sin_lat,
    )
}

impl Ellipsoid {
    /// Convert geodetic LLA to ECEF on this ellipsoid.
    ///
    /// Altitude is taken as height above the ellipsoid; no geoid correction
    /// is applied.
    pub fn lla_to_ecef(&self, lla: &LlaCoord) -> EcefCoord {
        let lat_rad = lla.lat.to_radians();
        let lon_rad = lla.lon.to_radians();

        let (sin_lat, cos_lat) = lat_rad.sin_cos();
        let (sin_lon, cos_lon) = lon_rad.sin_cos();

        let n = self.prime_vertical_radius(lat_rad);

        let x = (n + lla.alt) * cos_lat * cos_lon;
        let y = (n + lla.alt) * cos_lat * sin_lon;
        let z = (self.axis_ratio_squared() * n + lla.alt) * sin_lat;

        Vector3::new(x, y, z)
    }

    /// Convert ECEF to geodetic LLA by fixed-point iteration on latitude
    pub fn ecef_to_lla(&self, ecef: &EcefCoord) -> Result<LlaCoord> {
        if !ecef.iter().all(|c| c.is_finite()) {
            return Err(CoordinateError::TransformFailed(format!(
                "non-finite ECEF input ({}, {}, {})",
                ecef.x, ecef.y, ecef.z
            ))
            .into());
        }

        let x = ecef.x;
        let y = ecef.y;
        let z = ecef.z;
        let p = (x * x + y * y).sqrt();

        if p == 0.0 && z == 0.0 {
            return Err(CoordinateError::TransformFailed(
                "geodetic latitude is undefined at the Earth's center".to_string(),
            )
            .into());
        }

        let e2 = self.eccentricity_squared();
        let lon = y.atan2(x).to_degrees();

        // Height from whichever of cos/sin is better conditioned
        let height = |lat: f64| {
            let (sin_lat, cos_lat) = lat.sin_cos();
            let n = self.prime_vertical_radius(lat);
            if cos_lat.abs() > std::f64::consts::FRAC_1_SQRT_2 {
                p / cos_lat - n
            } else {
                z / sin_lat - n * (1.0 - e2)
            }
        };

        let mut lat = (z / (p * (1.0 - e2))).atan();
        let mut converged = false;

        for iteration in 0..MAX_ITERATIONS {
            let n = self.prime_vertical_radius(lat);
            let alt = height(lat);
            let next = (z / (p * (1.0 - e2 * n / (n + alt)))).atan();
            let delta = (next - lat).abs();
            lat = next;

            if delta < LAT_TOLERANCE_RAD {
                tracing::trace!(iteration, "ecef_to_lla converged");
                converged = true;
                break;
            }
        }

        if !converged {
            tracing::debug!(
                x,
                y,
                z,
                "ecef_to_lla stopped after {MAX_ITERATIONS} iterations without converging"
            );
        }

        let alt = height(lat);
        let lat_deg = lat.to_degrees();

        if !lat_deg.is_finite() || !alt.is_finite() {
            return Err(RgnError::Numerical(format!(
                "ECEF to LLA produced lat={lat_deg}, alt={alt}"
            )));
        }

        Ok(LlaCoord {
            lat: lat_deg,
            lon,
            alt,
        })
    }

    /// Express an ECEF point in the ENU frame anchored at `reference`
    pub fn ecef_to_enu(&self, reference: &LlaCoord, ecef: &EcefCoord) -> EnuCoord {
        let origin = self.lla_to_ecef(reference);
        enu_rotation(reference.lat, reference.lon) * (ecef - origin)
    }

    /// Inverse of [`Ellipsoid::ecef_to_enu`]
    pub fn enu_to_ecef(&self, reference: &LlaCoord, enu: &EnuCoord) -> EcefCoord {
        let origin = self.lla_to_ecef(reference);
        enu_rotation(reference.lat, reference.lon).transpose() * enu + origin
    }
}

/// Convert LLA to ECEF on WGS84
pub fn lla_to_ecef(lla: &LlaCoord) -> EcefCoord {
    Ellipsoid::WGS84.lla_to_ecef(lla)
}

/// Convert ECEF to LLA (Latitude, Longitude, Altitude) on WGS84
pub fn ecef_to_lla(ecef: &EcefCoord) -> Result<LlaCoord> {
    Ellipsoid::WGS84.ecef_to_lla(ecef)
}

/// Convert ECEF to the local ENU plane at `reference` on WGS84
pub fn ecef_to_enu(reference: &LlaCoord, ecef: &EcefCoord) -> EnuCoord {
    Ellipsoid::WGS84.ecef_to_enu(reference, ecef)
}

/// Convert a local ENU offset at `reference` back to ECEF on WGS84
pub fn enu_to_ecef(reference: &LlaCoord, enu: &EnuCoord) -> EcefCoord {
    Ellipsoid::WGS84.enu_to_ecef(reference, enu)
}

/// Convert LLA to the local ENU plane at `reference` on WGS84
pub fn lla_to_enu(reference: &LlaCoord, lla: &LlaCoord) -> EnuCoord {
    ecef_to_enu(reference, &lla_to_ecef(lla))
}

/// Straight-line distance between two ECEF points
pub fn ecef_distance(p1: &EcefCoord, p2: &EcefCoord) -> f64 {
    vec_mag(&(p2 - p1))
}

/// Straight-line distance between two ENU points sharing a reference
pub fn enu_distance(p1: &EnuCoord, p2: &EnuCoord) -> f64 {
    ecef_distance(p1, p2)
}
