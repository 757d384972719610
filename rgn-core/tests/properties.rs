use proptest::prelude::*;

use rgn_core::angle::{dec_to_dms, dms_to_dec, fmod};
use rgn_core::coordinate::{
    calc_angle, ecef_to_enu, ecef_to_lla, enu_to_ecef, lla_to_ecef, EcefCoord, LlaCoord,
};
use rgn_core::navigation::{destination, haversine_distance, initial_bearing, GeoPoint};

fn lla() -> impl Strategy<Value = LlaCoord> {
    (-90.0..=90.0f64, -180.0..180.0f64, -1000.0..100_000.0f64)
        .prop_map(|(lat, lon, alt)| LlaCoord::new(lat, lon, alt))
}

fn geo_point() -> impl Strategy<Value = GeoPoint> {
    (-90.0..=90.0f64, -180.0..180.0f64).prop_map(|(lat, lon)| GeoPoint::new(lat, lon))
}

fn angular_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(360.0);
    diff.min(360.0 - diff)
}

proptest! {
    #[test]
    fn dms_round_trip(x in -180.0..180.0f64) {
        let dms = dec_to_dms(x);
        prop_assert!(dms.minutes < 60);
        prop_assert!((0.0..60.0).contains(&dms.seconds));
        let back = dms_to_dec(dms.degrees, f64::from(dms.minutes), dms.seconds);
        prop_assert!((back - x).abs() < 1e-9);
    }

    #[test]
    fn fmod_follows_sign_of_dividend(x in -1e6..1e6f64, y in 1.0..1000.0f64) {
        let r = fmod(x, y);
        prop_assert!(r.abs() < y);
        prop_assert!(r == 0.0 || r.signum() == x.signum());
    }

    #[test]
    fn reference_point_is_enu_origin(reference in lla()) {
        let enu = ecef_to_enu(&reference, &lla_to_ecef(&reference));
        prop_assert!(enu.norm() < 1e-6);
    }

    #[test]
    fn enu_ecef_round_trip(
        reference in lla(),
        e in -50_000.0..50_000.0f64,
        n in -50_000.0..50_000.0f64,
        u in -1000.0..1000.0f64,
    ) {
        let enu = EcefCoord::new(e, n, u);
        let back = ecef_to_enu(&reference, &enu_to_ecef(&reference, &enu));
        prop_assert!((back - enu).norm() < 1e-6);
    }

    #[test]
    fn lla_ecef_round_trip(
        lat in -89.9..89.9f64,
        lon in -179.9..179.9f64,
        alt in -1000.0..1_000_000.0f64,
    ) {
        let lla = LlaCoord::new(lat, lon, alt);
        let back = ecef_to_lla(&lla_to_ecef(&lla)).unwrap();
        prop_assert!((back.lat - lat).abs() < 1e-8);
        prop_assert!((back.lon - lon).abs() < 1e-8);
        prop_assert!((back.alt - alt).abs() < 1e-3);
    }

    #[test]
    fn haversine_is_symmetric(a in geo_point(), b in geo_point()) {
        prop_assert_eq!(haversine_distance(&a, &b), haversine_distance(&b, &a));
    }

    #[test]
    fn destination_inverts_distance_and_bearing(
        lat in -80.0..80.0f64,
        lon in -180.0..180.0f64,
        bearing in 0.0..360.0f64,
        dist in 10.0..100_000.0f64,
    ) {
        let start = GeoPoint::new(lat, lon);
        let end = destination(&start, bearing, dist);

        prop_assert!((-180.0..180.0).contains(&end.lon));
        prop_assert!((haversine_distance(&start, &end) - dist).abs() < 1e-3);
        prop_assert!(angular_difference(initial_bearing(&start, &end), bearing) < 1e-4);
    }

    #[test]
    fn calc_angle_stays_in_range(
        o in prop::array::uniform3(-1e7..1e7f64),
        a in prop::array::uniform3(-1e7..1e7f64),
        b in prop::array::uniform3(-1e7..1e7f64),
    ) {
        let angle = calc_angle(&EcefCoord::from(o), &EcefCoord::from(a), &EcefCoord::from(b));
        prop_assert!(angle.is_nan() || (0.0..=std::f64::consts::PI).contains(&angle));
    }
}
