pub mod angle;
pub mod coordinate;
pub mod error;
pub mod navigation;

pub use angle::{deg_to_rad, dec_to_dms, dms_to_dec, fmod, rad_to_deg, signed_lon, Dms};
pub use coordinate::{EcefCoord, Ellipsoid, EnuCoord, LlaCoord};
pub use error::{CoordinateError, DmsError, Result, RgnError};
pub use navigation::{GeoPoint, Sphere};
