use thiserror::Error;

/// Common errors across the geodesy toolkit
#[derive(Error, Debug)]
pub enum RgnError {
    #[error("Coordinate error: {0}")]
    Coordinate(#[from] CoordinateError),

    #[error("DMS error: {0}")]
    Dms(#[from] DmsError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Numerical error: {0}")]
    Numerical(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("Invalid latitude: {0} (must be -90 to 90)")]
    InvalidLatitude(f64),

    #[error("Invalid longitude: {0} (must be finite)")]
    InvalidLongitude(f64),

    #[error("Invalid height: {0}")]
    InvalidHeight(f64),

    #[error("Zero-length vector has no direction")]
    DegenerateVector,

    #[error("Coordinate transform failed: {0}")]
    TransformFailed(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DmsError {
    #[error("Minutes out of range: {0} (must be 0 to 59)")]
    MinutesOutOfRange(u32),

    #[error("Seconds out of range: {0} (must be in [0, 60))")]
    SecondsOutOfRange(f64),

    #[error("Cannot parse DMS value: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, RgnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_error_display() {
        let err = CoordinateError::InvalidLatitude(95.0);
        assert_eq!(err.to_string(), "Invalid latitude: 95 (must be -90 to 90)");

        let err = CoordinateError::InvalidLongitude(f64::INFINITY);
        assert_eq!(err.to_string(), "Invalid longitude: inf (must be finite)");

        let err = CoordinateError::InvalidHeight(f64::NAN);
        assert_eq!(err.to_string(), "Invalid height: NaN");

        let err = CoordinateError::DegenerateVector;
        assert_eq!(err.to_string(), "Zero-length vector has no direction");
    }

    #[test]
    fn test_dms_error_display() {
        let err = DmsError::MinutesOutOfRange(61);
        assert_eq!(err.to_string(), "Minutes out of range: 61 (must be 0 to 59)");

        let err = DmsError::SecondsOutOfRange(60.5);
        assert_eq!(err.to_string(), "Seconds out of range: 60.5 (must be in [0, 60))");

        let err = DmsError::Parse("abc".to_string());
        assert_eq!(err.to_string(), "Cannot parse DMS value: abc");
    }

    #[test]
    fn test_rgn_error_from_coordinate_error() {
        let coord_err = CoordinateError::InvalidLatitude(95.0);
        let rgn_err: RgnError = coord_err.into();
        assert!(matches!(rgn_err, RgnError::Coordinate(_)));
        assert_eq!(
            rgn_err.to_string(),
            "Coordinate error: Invalid latitude: 95 (must be -90 to 90)"
        );
    }

    #[test]
    fn test_rgn_error_from_dms_error() {
        let dms_err = DmsError::MinutesOutOfRange(75);
        let rgn_err: RgnError = dms_err.into();
        assert!(matches!(rgn_err, RgnError::Dms(_)));
    }

    #[test]
    fn test_rgn_error_invalid_input() {
        let err = RgnError::InvalidInput("radius must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid input: radius must be positive");
    }

    #[test]
    fn test_rgn_error_numerical() {
        let err = RgnError::Numerical("latitude iteration diverged".to_string());
        assert_eq!(err.to_string(), "Numerical error: latitude iteration diverged");
    }
}
