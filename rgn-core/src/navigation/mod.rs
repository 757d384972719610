//! Great-circle navigation on a spherical Earth

mod haversine;
mod sphere;

pub use haversine::{
    destination, final_bearing, haversine_distance, initial_bearing, midpoint, GeoPoint,
};
pub use sphere::Sphere;
