//! Closed-form intersection of a helix with a plane parallel to the z axis.
//!
//! Such a plane cuts the transverse plane in a straight line `n · p = w`, so the
//! problem reduces to a circle / line intersection:
//!
//! - `d = n · c - w` is the signed distance of the circle centre `c` from the line,
//! - `|d| > R + eps` misses,
//! - `||d| - R| <= eps` touches at the foot of the perpendicular `c - d n`,
//! - otherwise the two points `foot ± sqrt(R² - d²) t` with `t = ẑ × n`.
//!
//! The axial coordinate of each solution is then read off the helix at the turn
//! angle of the transverse point.

use crate::crossing::{Candidate, Candidates};
use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::helix::HelixTrajectory;
use nalgebra::{Unit, Vector2};

/// Reject tolerances that would make the tangent band meaningless.
pub fn check_tolerance(eps: Real) -> Result<(), GeometryError> {
    if eps.is_finite() && eps > 0.0 {
        Ok(())
    } else {
        log::debug!("rejecting crossing query with tolerance {}", eps);
        Err(GeometryError::InvalidTolerance(eps))
    }
}

/// All intersections of `helix` with the axis-parallel plane whose transverse trace is
/// the line `normal · p = distance`.
pub fn axial_plane_candidates<H: HelixTrajectory + ?Sized>(
    normal: &Unit<Vector2<Real>>,
    distance: Real,
    helix: &H,
    eps: Real,
) -> Result<Candidates, GeometryError> {
    check_tolerance(eps)?;

    let signed_radius = helix.signed_radius();
    let radius = signed_radius.abs();
    if !radius.is_finite() || radius <= eps {
        log::debug!("helix with transverse radius {} has no usable circle", signed_radius);
        return Err(GeometryError::InvalidTrajectory {
            radius: signed_radius,
        });
    }

    let center = helix.circle_center();
    let d = normal.dot(&center.coords) - distance;
    if !d.is_finite() {
        log::debug!("helix circle centre {} is not finite", center);
        return Err(GeometryError::InvalidTrajectory {
            radius: signed_radius,
        });
    }

    if d.abs() > radius + eps {
        return Ok(Candidates::None);
    }

    let foot = center - normal.into_inner() * d;
    if (d.abs() - radius).abs() <= eps {
        let phi = helix.phi_at(&foot);
        return Ok(Candidates::Tangent(Candidate::on_helix(foot, phi, helix)));
    }

    let half_chord = (radius * radius - d * d).sqrt();
    let along = Vector2::new(-normal.y, normal.x) * half_chord;
    let first = foot + along;
    let second = foot - along;

    Ok(Candidates::Pair(
        Candidate::on_helix(first, helix.phi_at(&first), helix),
        Candidate::on_helix(second, helix.phi_at(&second), helix),
    ))
}
