use serde::{Deserialize, Serialize};

use crate::error::{Result, RgnError};

/// Reference ellipsoid of revolution, axes in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    pub semi_major_axis: f64,
    pub semi_minor_axis: f64,
}

impl Ellipsoid {
    /// World Geodetic System 1984
    pub const WGS84: Self = Self {
        semi_major_axis: 6378137.0,
        semi_minor_axis: 6356752.31424518,
    };

    /// Build an ellipsoid from its two semi-axes.
    ///
    /// Both axes must be finite and positive, and the polar axis may not be
    /// longer than the equatorial one.
    pub fn try_new(semi_major_axis: f64, semi_minor_axis: f64) -> Result<Self> {
        let valid = |axis: f64| axis.is_finite() && axis > 0.0;
        if !valid(semi_major_axis) || !valid(semi_minor_axis) {
            return Err(RgnError::InvalidInput(format!(
                "ellipsoid axes must be positive, got a={semi_major_axis}, b={semi_minor_axis}"
            )));
        }
        if semi_minor_axis > semi_major_axis {
            return Err(RgnError::InvalidInput(format!(
                "semi-minor axis {semi_minor_axis} exceeds semi-major axis {semi_major_axis}"
            )));
        }

        Ok(Self {
            semi_major_axis,
            semi_minor_axis,
        })
    }

    /// First eccentricity squared, (a² - b²) / a²
    pub fn eccentricity_squared(&self) -> f64 {
        let a2 = self.semi_major_axis * self.semi_major_axis;
        let b2 = self.semi_minor_axis * self.semi_minor_axis;
        (a2 - b2) / a2
    }

    /// b² / a²
    pub fn axis_ratio_squared(&self) -> f64 {
        let a2 = self.semi_major_axis * self.semi_major_axis;
        let b2 = self.semi_minor_axis * self.semi_minor_axis;
        b2 / a2
    }

    /// Radius of curvature in the prime vertical at a geodetic latitude (radians)
    pub fn prime_vertical_radius(&self, lat_rad: f64) -> f64 {
        let sin_lat = lat_rad.sin();
        self.semi_major_axis / (1.0 - self.eccentricity_squared() * sin_lat * sin_lat).sqrt()
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}
