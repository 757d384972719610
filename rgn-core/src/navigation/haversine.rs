use serde::{Deserialize, Serialize};

use super::sphere::Sphere;
use crate::angle::{deg_to_rad, fmod, rad_to_deg};
use crate::coordinate::LlaCoord;
use crate::error::{CoordinateError, Result};

/// Latitude/longitude pair in degrees on a spherical Earth
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Checked constructor: latitude within [-90, 90], longitude finite
    pub fn try_new(lat: f64, lon: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::InvalidLatitude(lat).into());
        }
        if !lon.is_finite() {
            return Err(CoordinateError::InvalidLongitude(lon).into());
        }

        Ok(Self { lat, lon })
    }
}

impl From<LlaCoord> for GeoPoint {
    fn from(lla: LlaCoord) -> Self {
        Self {
            lat: lla.lat,
            lon: lla.lon,
        }
    }
}

/// Wrap a longitude in degrees onto [-180, 180) with truncating modulo
fn wrap_lon(lon_deg: f64) -> f64 {
    fmod(lon_deg + 540.0, 360.0) - 180.0
}

impl Sphere {
    /// Great-circle distance in meters (haversine formula)
    pub fn haversine_distance(&self, pt1: &GeoPoint, pt2: &GeoPoint) -> f64 {
        let lat1 = deg_to_rad(pt1.lat);
        let lat2 = deg_to_rad(pt2.lat);
        let delta_lat = deg_to_rad(pt2.lat - pt1.lat);
        let delta_lon = deg_to_rad(pt2.lon - pt1.lon);

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        self.radius * c
    }

    /// Point reached from `start` after `distance` meters on an initial
    /// `bearing` in degrees
    pub fn destination(&self, start: &GeoPoint, bearing: f64, distance: f64) -> GeoPoint {
        let lat1 = deg_to_rad(start.lat);
        let lon1 = deg_to_rad(start.lon);
        let theta = deg_to_rad(bearing);
        let delta = distance / self.radius;

        let (sin_lat1, cos_lat1) = lat1.sin_cos();
        let (sin_delta, cos_delta) = delta.sin_cos();

        let lat2 = (sin_lat1 * cos_delta + cos_lat1 * sin_delta * theta.cos()).asin();
        let lon2 = lon1
            + (theta.sin() * sin_delta * cos_lat1).atan2(cos_delta - sin_lat1 * lat2.sin());

        GeoPoint {
            lat: rad_to_deg(lat2),
            lon: wrap_lon(rad_to_deg(lon2)),
        }
    }
}

/// Great-circle distance in meters on the mean Earth sphere
pub fn haversine_distance(pt1: &GeoPoint, pt2: &GeoPoint) -> f64 {
    Sphere::MEAN_EARTH.haversine_distance(pt1, pt2)
}

/// Initial bearing in degrees [0, 360) from `pt1` towards `pt2`.
///
/// Meaningless when the points coincide.
pub fn initial_bearing(pt1: &GeoPoint, pt2: &GeoPoint) -> f64 {
    let lat1 = deg_to_rad(pt1.lat);
    let lat2 = deg_to_rad(pt2.lat);
    let delta_lon = deg_to_rad(pt2.lon - pt1.lon);

    let y = delta_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

    let bearing = rad_to_deg(y.atan2(x));
    if bearing >= 0.0 {
        return bearing;
    }

    // A tiny negative angle plus 360 rounds to exactly 360
    let wrapped = bearing + 360.0;
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Bearing in degrees [0, 360) on arrival at `pt2`
pub fn final_bearing(pt1: &GeoPoint, pt2: &GeoPoint) -> f64 {
    fmod(initial_bearing(pt2, pt1) + 180.0, 360.0)
}

/// Destination on the mean Earth sphere, see [`Sphere::destination`]
pub fn destination(start: &GeoPoint, bearing: f64, distance: f64) -> GeoPoint {
    Sphere::MEAN_EARTH.destination(start, bearing, distance)
}

/// Halfway point along the great circle between two points
pub fn midpoint(pt1: &GeoPoint, pt2: &GeoPoint) -> GeoPoint {
    let lat1 = deg_to_rad(pt1.lat);
    let lon1 = deg_to_rad(pt1.lon);
    let lat2 = deg_to_rad(pt2.lat);
    let delta_lon = deg_to_rad(pt2.lon - pt1.lon);

    let bx = lat2.cos() * delta_lon.cos();
    let by = lat2.cos() * delta_lon.sin();

    let lat_m = (lat1.sin() + lat2.sin()).atan2(((lat1.cos() + bx).powi(2) + by * by).sqrt());
    let lon_m = lon1 + by.atan2(lat1.cos() + bx);

    GeoPoint {
        lat: rad_to_deg(lat_m),
        lon: wrap_lon(rad_to_deg(lon_m)),
    }
}
