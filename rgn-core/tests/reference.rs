//! End-to-end checks against known survey values

use rgn_core::angle::{dec_to_dms, signed_lon};
use rgn_core::coordinate::{
    calc_angle_deg, ecef_distance, ecef_to_enu, enu_distance, lla_to_ecef, lla_to_enu, LlaCoord,
};
use rgn_core::navigation::{destination, haversine_distance, initial_bearing, GeoPoint};

#[test]
fn test_short_hop_distance_bearing_and_destination() {
    let start = GeoPoint::new(55.9987, -2.71);
    let end = GeoPoint::new(56.001, -2.734);

    let dist = haversine_distance(&start, &end);
    let bearing = initial_bearing(&start, &end);
    assert!((dist - 1514.0).abs() < 1.0);
    assert!((bearing - 279.735).abs() < 0.001);

    let reached = destination(&start, 279.735, 1514.0);
    assert!((reached.lat - 56.001).abs() < 0.001);
    assert!((reached.lon + 2.734).abs() < 0.001);
}

#[test]
fn test_short_hop_agrees_with_enu_distance() {
    // Ellipsoid vs mean sphere: about 5 m apart over 1.5 km
    let start = LlaCoord::new(55.9987, -2.71, 0.0);
    let end = LlaCoord::new(56.001, -2.734, 0.0);

    let enu = lla_to_enu(&start, &end);
    let chord = enu_distance(&enu, &nalgebra::Vector3::zeros());
    let arc = haversine_distance(&start.into(), &end.into());

    assert!((chord - arc).abs() < 10.0);
    // The end point lies to the north-west
    assert!(enu.x < 0.0);
    assert!(enu.y > 0.0);
}

#[test]
fn test_ecef_and_enu_distances_match_for_same_points() {
    let reference = LlaCoord::new(38.8977, -77.0365, 100.0);
    let a = lla_to_ecef(&LlaCoord::new(38.90, -77.03, 120.0));
    let b = lla_to_ecef(&LlaCoord::new(38.88, -77.05, 80.0));

    let in_ecef = ecef_distance(&a, &b);
    let in_enu = enu_distance(&ecef_to_enu(&reference, &a), &ecef_to_enu(&reference, &b));
    assert!((in_ecef - in_enu).abs() < 1e-6);
}

#[test]
fn test_angle_between_points_seen_from_earth_center() {
    // Two equatorial points 90 degrees of longitude apart
    let center = nalgebra::Vector3::zeros();
    let a = lla_to_ecef(&LlaCoord::new(0.0, 0.0, 0.0));
    let b = lla_to_ecef(&LlaCoord::new(0.0, 90.0, 0.0));

    assert!((calc_angle_deg(&center, &a, &b) - 90.0).abs() < 1e-9);
}

#[test]
fn test_unsigned_longitude_and_dms() {
    let lon = signed_lon(357.29);
    assert!((lon + 2.71).abs() < 1e-9);

    let dms = dec_to_dms(lon);
    assert_eq!(dms.degrees, -2.0);
    assert_eq!(dms.minutes, 42);
    assert!((dms.seconds - 36.0).abs() < 1e-6);
}
