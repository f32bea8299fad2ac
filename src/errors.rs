//! Geometry and crossing errors

use crate::float_types::Real;

/// All the ways a layer construction or a crossing query can be rejected.
///
/// A helix that simply misses a layer is *not* an error; crossing queries report
/// that as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// (InvalidTrajectory) The helix has no usable transverse circle
    #[error("(InvalidTrajectory) helix transverse radius {radius} cannot describe a circle")]
    InvalidTrajectory { radius: Real },
    /// (DegenerateLayer) The layer geometry cannot define a plane
    #[error("(DegenerateLayer) {0}")]
    DegenerateLayer(String),
    /// (InvalidTolerance) The crossing tolerance must be finite and positive
    #[error("(InvalidTolerance) crossing tolerance must be finite and positive, got {0}")]
    InvalidTolerance(Real),
    /// (InvalidMode) Only -1, 0 and +1 select a crossing mode
    #[error("(InvalidMode) crossing mode must be -1, 0 or 1, got {0}")]
    InvalidMode(i32),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages_name_the_variant() {
        let err = GeometryError::InvalidTrajectory { radius: 0.0 };
        assert!(err.to_string().starts_with("(InvalidTrajectory)"));
        let err = GeometryError::DegenerateLayer("radius must be positive".into());
        assert_eq!(err.to_string(), "(DegenerateLayer) radius must be positive");
        assert!(GeometryError::InvalidMode(3).to_string().contains('3'));
    }
}
