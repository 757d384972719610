//! Angle and unit utilities
//!
//! Degree/radian conversion, longitude normalization, truncating modulo and
//! decimal-degree / degrees-minutes-seconds conversion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DmsError;

type Result<T> = std::result::Result<T, DmsError>;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}

/// Map a longitude given in [0, 360) onto the signed [-180, 180] range.
///
/// Values at or below 180 are returned unchanged, negative inputs included.
pub fn signed_lon(lon: f64) -> f64 {
    if lon > 180.0 { lon - 360.0 } else { lon }
}

/// Floating-point remainder with truncating division.
///
/// The result takes the sign of `x`: `fmod(-1.0, 360.0) == -1.0`, not `359.0`.
pub fn fmod(x: f64, y: f64) -> f64 {
    x - (x / y).trunc() * y
}

/// Angle in degrees, minutes and seconds
///
/// The sign lives on `degrees` alone. `degrees` is whole-valued but kept as
/// `f64` so that angles between -1° and 0° carry `-0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    pub degrees: f64,
    pub minutes: u32,
    pub seconds: f64,
}

impl Dms {
    /// Build a DMS value, rejecting out-of-range minutes or seconds
    pub fn try_new(degrees: f64, minutes: u32, seconds: f64) -> Result<Self> {
        if !degrees.is_finite() || degrees.fract() != 0.0 {
            return Err(DmsError::Parse(format!(
                "degrees must be a whole number, got {degrees}"
            )));
        }
        if minutes >= 60 {
            return Err(DmsError::MinutesOutOfRange(minutes));
        }
        if !(0.0..60.0).contains(&seconds) {
            return Err(DmsError::SecondsOutOfRange(seconds));
        }

        Ok(Self {
            degrees,
            minutes,
            seconds,
        })
    }

    /// True for angles south of the equator / west of the prime meridian
    pub fn is_negative(&self) -> bool {
        self.degrees.is_sign_negative()
    }

    /// Decimal degrees
    pub fn to_decimal(&self) -> f64 {
        dms_to_dec(self.degrees, f64::from(self.minutes), self.seconds)
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };

        // Round to the printed precision first so 59.9996" carries into the minutes
        let mut millis = (self.seconds * 1000.0).round();
        let mut minutes = self.minutes;
        let mut degrees = self.degrees.abs();
        if millis >= 60_000.0 {
            millis -= 60_000.0;
            minutes += 1;
        }
        if minutes >= 60 {
            minutes -= 60;
            degrees += 1.0;
        }

        write!(f, "{sign}{degrees}°{minutes}'{:.3}\"", millis / 1000.0)
    }
}

impl FromStr for Dms {
    type Err = DmsError;

    /// Accepts `55°59'55.3"`, `55 59 55.3`, `55:59:55.3` and a bare decimal
    /// `55.9987`, with a leading `-` or a trailing N/S/E/W hemisphere.
    fn from_str(s: &str) -> Result<Self> {
        let mut text = s.trim();
        let mut hemisphere = None;

        if let Some(last) = text.chars().last() {
            match last.to_ascii_uppercase() {
                'N' | 'E' => hemisphere = Some(false),
                'S' | 'W' => hemisphere = Some(true),
                _ => {}
            }
            if hemisphere.is_some() {
                text = text[..text.len() - 1].trim_end();
            }
        }

        let mut negative = hemisphere.unwrap_or(false);
        if let Some(rest) = text.strip_prefix('-') {
            // A minus sign and a hemisphere letter would state the sign twice
            if hemisphere.is_some() {
                return Err(DmsError::Parse(s.to_string()));
            }
            negative = true;
            text = rest;
        }

        let fields: Vec<&str> = text
            .split(|c: char| {
                c.is_whitespace() || matches!(c, '°' | '\'' | '"' | ':' | '′' | '″')
            })
            .filter(|field| !field.is_empty())
            .collect();

        if fields.is_empty() || fields.len() > 3 {
            return Err(DmsError::Parse(s.to_string()));
        }

        let degrees: f64 = fields[0]
            .parse()
            .map_err(|_| DmsError::Parse(s.to_string()))?;
        if !degrees.is_finite() || degrees < 0.0 {
            return Err(DmsError::Parse(s.to_string()));
        }

        if fields.len() == 1 {
            let dms = dec_to_dms(degrees);
            return Ok(Self {
                degrees: if negative { -dms.degrees } else { dms.degrees },
                ..dms
            });
        }

        let minutes: u32 = fields[1]
            .parse()
            .map_err(|_| DmsError::Parse(s.to_string()))?;
        let seconds: f64 = match fields.get(2) {
            Some(field) => field.parse().map_err(|_| DmsError::Parse(s.to_string()))?,
            None => 0.0,
        };

        Self::try_new(if negative { -degrees } else { degrees }, minutes, seconds)
    }
}

/// Split decimal degrees into degrees, minutes and seconds.
///
/// Degrees are truncated toward zero; minutes and seconds come from the
/// magnitude of the fractional part.
pub fn dec_to_dms(decimal: f64) -> Dms {
    let degrees = decimal.trunc();
    let minutes_full = (decimal - degrees).abs() * 60.0;
    let minutes = minutes_full.trunc();
    let seconds = (minutes_full - minutes) * 60.0;

    Dms {
        degrees,
        minutes: minutes as u32,
        seconds,
    }
}

/// Combine degrees, minutes and seconds into decimal degrees.
///
/// The sign is taken from `deg` only, so `-0.0` degrees yields a negative
/// result.
pub fn dms_to_dec(deg: f64, min: f64, sec: f64) -> f64 {
    let magnitude = deg.abs() + min / 60.0 + sec / 3600.0;
    if deg.is_sign_negative() { -magnitude } else { magnitude }
}
