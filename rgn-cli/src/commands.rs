//! Subcommand dispatch

use rgn_core::angle::dec_to_dms;
use rgn_core::coordinate::{lla_to_ecef, lla_to_enu};
use rgn_core::navigation::{final_bearing, initial_bearing};
use rgn_core::{Dms, GeoPoint, LlaCoord, Result, Sphere};

use crate::args::{Cli, Command};

/// Run the parsed command and return the text to print
pub fn run(cli: &Cli) -> Result<String> {
    tracing::debug!(command = ?cli.command, radius = cli.radius, "running");

    let output = match &cli.command {
        Command::Distance {
            lat1,
            lon1,
            lat2,
            lon2,
        } => {
            let sphere = Sphere::try_new(cli.radius)?;
            let from = GeoPoint::try_new(*lat1, *lon1)?;
            let to = GeoPoint::try_new(*lat2, *lon2)?;
            format!("{:.3} m", sphere.haversine_distance(&from, &to))
        }

        Command::Bearing {
            lat1,
            lon1,
            lat2,
            lon2,
        } => {
            let from = GeoPoint::try_new(*lat1, *lon1)?;
            let to = GeoPoint::try_new(*lat2, *lon2)?;
            if from == to {
                tracing::warn!("bearing between identical points is undefined");
            }
            format!(
                "initial {:.6}\nfinal {:.6}",
                initial_bearing(&from, &to),
                final_bearing(&from, &to)
            )
        }

        Command::Destination {
            lat,
            lon,
            bearing,
            distance,
        } => {
            let sphere = Sphere::try_new(cli.radius)?;
            let start = GeoPoint::try_new(*lat, *lon)?;
            let end = sphere.destination(&start, *bearing, *distance);
            format!("{:.8} {:.8}", end.lat, end.lon)
        }

        Command::Ecef { lat, lon, alt } => {
            let ecef = lla_to_ecef(&LlaCoord::try_new(*lat, *lon, *alt)?);
            format!("{:.3} {:.3} {:.3}", ecef.x, ecef.y, ecef.z)
        }

        Command::Enu {
            ref_lat,
            ref_lon,
            ref_alt,
            lat,
            lon,
            alt,
        } => {
            let reference = LlaCoord::try_new(*ref_lat, *ref_lon, *ref_alt)?;
            let point = LlaCoord::try_new(*lat, *lon, *alt)?;
            let enu = lla_to_enu(&reference, &point);
            format!("{:.3} {:.3} {:.3}", enu.x, enu.y, enu.z)
        }

        Command::Dms { decimal } => dec_to_dms(*decimal).to_string(),

        Command::Dec { dms } => {
            let dms: Dms = dms.parse()?;
            format!("{:.8}", dms.to_decimal())
        }
    };

    Ok(output)
}
