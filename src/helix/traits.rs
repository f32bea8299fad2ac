//! Trait describing the helix queries the crossing algorithms rely on

use crate::float_types::Real;
use nalgebra::{Point2, Point3, Unit, Vector3};

/// Read-only view of a helical trajectory: a circle in the transverse (x, y) plane plus
/// linear motion along z, parameterized by a turn angle `phi` measured from the
/// helix reference point.
///
/// Implementations must be side-effect free; crossing solvers may call any of these
/// methods several times per query.
pub trait HelixTrajectory {
    /// Centre of the transverse circle
    fn circle_center(&self) -> Point2<Real>;

    /// Signed radius of the transverse circle. The sign encodes the sense of rotation
    /// and flips the relation between turn angle and path length.
    fn signed_radius(&self) -> Real;

    /// dz/ds, the slope along the axis
    fn tan_lambda(&self) -> Real;

    /// Position at turn angle `phi`
    fn point_at(&self, phi: Real) -> Point3<Real>;

    /// Unit direction of travel at turn angle `phi`
    fn direction_at(&self, phi: Real) -> Unit<Vector3<Real>>;

    /// Turn angle, in `(-π, π]`, of a point lying on the transverse circle.
    fn phi_at(&self, transverse: &Point2<Real>) -> Real;

    /// Transverse path length travelled from the reference point to turn angle `phi`.
    /// Positive values lie ahead along the direction of travel.
    fn arc_length(&self, phi: Real) -> Real {
        -self.signed_radius() * phi
    }
}
