//! Command-line arguments

use clap::{Parser, Subcommand};
use rgn_core::Sphere;

/// Geodetic conversions and great-circle navigation.
#[derive(Parser, Debug)]
#[command(name = "rgn", version)]
pub struct Cli {
    /// Sphere radius in meters for the great-circle commands.
    #[arg(long, global = true, default_value_t = Sphere::MEAN_EARTH.radius)]
    pub radius: f64,

    /// Log at debug level (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Great-circle distance in meters between two points.
    #[command(allow_negative_numbers = true)]
    Distance {
        lat1: f64,
        lon1: f64,
        lat2: f64,
        lon2: f64,
    },

    /// Initial and final bearing in degrees from the first point to the second.
    #[command(allow_negative_numbers = true)]
    Bearing {
        lat1: f64,
        lon1: f64,
        lat2: f64,
        lon2: f64,
    },

    /// Point reached after travelling a distance (m) on an initial bearing (deg).
    #[command(allow_negative_numbers = true)]
    Destination {
        lat: f64,
        lon: f64,
        bearing: f64,
        distance: f64,
    },

    /// WGS84 ECEF coordinates of a geodetic point.
    #[command(allow_negative_numbers = true)]
    Ecef { lat: f64, lon: f64, alt: f64 },

    /// East-North-Up offset of a point from a reference point.
    #[command(allow_negative_numbers = true)]
    Enu {
        ref_lat: f64,
        ref_lon: f64,
        ref_alt: f64,
        lat: f64,
        lon: f64,
        alt: f64,
    },

    /// Decimal degrees to degrees-minutes-seconds.
    #[command(allow_negative_numbers = true)]
    Dms { decimal: f64 },

    /// Degrees-minutes-seconds (e.g. "2 42 36 W") to decimal degrees.
    Dec {
        #[arg(allow_hyphen_values = true)]
        dms: String,
    },
}
