use serde::{Deserialize, Serialize};

use crate::error::{Result, RgnError};

/// Spherical Earth model used by the great-circle formulas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Radius in meters
    pub radius: f64,
}

impl Sphere {
    /// Mean Earth radius, 6371 km
    pub const MEAN_EARTH: Self = Self { radius: 6371000.0 };

    pub fn try_new(radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(RgnError::InvalidInput(format!(
                "sphere radius must be positive, got {radius}"
            )));
        }

        Ok(Self { radius })
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::MEAN_EARTH
    }
}
