//! Coordinate system transformations

mod ellipsoid;
mod transforms;
mod vector;

pub use ellipsoid::Ellipsoid;
pub use transforms::{
    ecef_distance, ecef_to_enu, ecef_to_lla, enu_distance, enu_to_ecef, lla_to_ecef, lla_to_enu,
    EcefCoord, EnuCoord, LlaCoord,
};
pub use vector::{calc_angle, calc_angle_deg, dot_product, try_calc_angle, vec_mag};
