//! Charged-particle helix in the pivot representation used by Kalman-filter track fits.
//!
//! A helix is described by five parameters relative to a pivot point:
//!
//! | parameter    | meaning                                                        |
//! |--------------|----------------------------------------------------------------|
//! | `d_rho`      | signed transverse distance from the pivot to the helix         |
//! | `phi0`       | azimuth of the pivot as seen from the helix at closest approach|
//! | `kappa`      | charge / transverse momentum (1/GeV)                           |
//! | `d_z`        | axial distance from the pivot to the helix                     |
//! | `tan_lambda` | dip angle slope, dz/ds                                         |
//!
//! Positions along the track are parameterized by the turn angle `phi`:
//!
//! ```text
//! x(phi) = x_p + d_rho cos(phi0) + rho (cos(phi0) - cos(phi0 + phi))
//! y(phi) = y_p + d_rho sin(phi0) + rho (sin(phi0) - sin(phi0 + phi))
//! z(phi) = z_p + d_z - rho tan_lambda phi
//! ```
//!
//! with `rho = alpha / kappa` and `alpha = 1 / (c Bz)`.

pub mod traits;

pub use traits::HelixTrajectory;

use crate::errors::GeometryError;
use crate::float_types::{C_LIGHT, Real, wrap_angle};
use nalgebra::{Point2, Point3, Unit, Vector3};

/// The five track parameters of a [`Helix`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HelixParameters {
    pub d_rho: Real,
    pub phi0: Real,
    pub kappa: Real,
    pub d_z: Real,
    pub tan_lambda: Real,
}

impl HelixParameters {
    pub const fn new(d_rho: Real, phi0: Real, kappa: Real, d_z: Real, tan_lambda: Real) -> Self {
        Self {
            d_rho,
            phi0,
            kappa,
            d_z,
            tan_lambda,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Helix {
    pub params: HelixParameters,
    pub pivot: Point3<Real>,
    /// 1 / (c Bz), converts `1/kappa` into a radius in mm
    alpha: Real,
}

impl Helix {
    /// Build a helix from its parameters about `pivot` in a solenoidal field `bz` (Tesla).
    ///
    /// A vanishing field or curvature is representable; such a helix has an infinite
    /// radius and is rejected by crossing queries.
    pub fn new(params: HelixParameters, pivot: Point3<Real>, bz: Real) -> Self {
        Self {
            params,
            pivot,
            alpha: 1.0 / (C_LIGHT * bz),
        }
    }

    /// Build the helix passing through `position` with `momentum` (GeV) for a particle
    /// of `charge` (units of e). `position` becomes the pivot.
    pub fn from_momentum(
        position: Point3<Real>,
        momentum: Vector3<Real>,
        charge: Real,
        bz: Real,
    ) -> Result<Self, GeometryError> {
        let pt = momentum.xy().norm();
        if !pt.is_finite() || pt <= 0.0 {
            return Err(GeometryError::InvalidTrajectory { radius: 0.0 });
        }

        let params = HelixParameters {
            d_rho: 0.0,
            phi0: (-momentum.x).atan2(momentum.y),
            kappa: charge / pt,
            d_z: 0.0,
            tan_lambda: momentum.z / pt,
        };

        Ok(Self::new(params, position, bz))
    }

    /// Build the helix whose transverse projection is the circle around `center` with
    /// `signed_radius`, referenced at the point where the helix azimuth is `phi0` and
    /// the height is `z0`.
    pub fn from_circle(
        center: Point2<Real>,
        signed_radius: Real,
        phi0: Real,
        z0: Real,
        tan_lambda: Real,
        bz: Real,
    ) -> Self {
        let alpha = 1.0 / (C_LIGHT * bz);
        let (sin0, cos0) = phi0.sin_cos();
        let params = HelixParameters {
            d_rho: 0.0,
            phi0,
            kappa: alpha / signed_radius,
            d_z: 0.0,
            tan_lambda,
        };
        let pivot = Point3::new(
            center.x - signed_radius * cos0,
            center.y - signed_radius * sin0,
            z0,
        );

        Self { params, pivot, alpha }
    }

    pub const fn alpha(&self) -> Real {
        self.alpha
    }

    /// Signed transverse radius `alpha / kappa` (mm)
    pub fn rho(&self) -> Real {
        self.alpha / self.params.kappa
    }

    pub fn charge(&self) -> Real {
        self.params.kappa.signum()
    }

    /// Transverse momentum (GeV)
    pub fn pt(&self) -> Real {
        1.0 / self.params.kappa.abs()
    }

    /// Momentum vector (GeV) at turn angle `phi`
    pub fn momentum_at(&self, phi: Real) -> Vector3<Real> {
        let pt = self.pt();
        let angle = self.params.phi0 + phi;
        Vector3::new(-pt * angle.sin(), pt * angle.cos(), pt * self.params.tan_lambda)
    }
}

impl HelixTrajectory for Helix {
    fn circle_center(&self) -> Point2<Real> {
        let HelixParameters { d_rho, phi0, .. } = self.params;
        let reach = d_rho + self.rho();
        Point2::new(
            self.pivot.x + reach * phi0.cos(),
            self.pivot.y + reach * phi0.sin(),
        )
    }

    fn signed_radius(&self) -> Real {
        self.rho()
    }

    fn tan_lambda(&self) -> Real {
        self.params.tan_lambda
    }

    fn point_at(&self, phi: Real) -> Point3<Real> {
        let HelixParameters {
            d_rho,
            phi0,
            d_z,
            tan_lambda,
            ..
        } = self.params;
        let rho = self.rho();
        let (sin0, cos0) = phi0.sin_cos();
        let (sin1, cos1) = (phi0 + phi).sin_cos();

        Point3::new(
            self.pivot.x + d_rho * cos0 + rho * (cos0 - cos1),
            self.pivot.y + d_rho * sin0 + rho * (sin0 - sin1),
            self.pivot.z + d_z - rho * tan_lambda * phi,
        )
    }

    fn direction_at(&self, phi: Real) -> Unit<Vector3<Real>> {
        let (sin1, cos1) = (self.params.phi0 + phi).sin_cos();
        Unit::new_normalize(Vector3::new(-sin1, cos1, self.params.tan_lambda))
    }

    fn phi_at(&self, transverse: &Point2<Real>) -> Real {
        let rho = self.rho();
        let v = *transverse - self.circle_center();
        // p - c = -rho (cos(phi0 + phi), sin(phi0 + phi))
        let angle = (-v.y * rho.signum()).atan2(-v.x * rho.signum());
        wrap_angle(angle - self.params.phi0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    fn positive_track() -> Helix {
        // 1 GeV along +y from the origin in 3.5 T
        Helix::from_momentum(Point3::origin(), Vector3::new(0.0, 1.0, 0.5), 1.0, 3.5).unwrap()
    }

    #[test]
    fn radius_matches_momentum() {
        let helix = positive_track();
        assert_relative_eq!(helix.rho(), 1.0 / (C_LIGHT * 3.5), max_relative = 1e-12);
        assert_relative_eq!(helix.pt(), 1.0, max_relative = 1e-12);
        assert_eq!(helix.charge(), 1.0);
    }

    #[test]
    fn positive_charge_bends_clockwise() {
        // moving along +y, a positive track in +Bz curves towards +x
        let helix = positive_track();
        assert!(helix.circle_center().x > 0.0);
        assert_relative_eq!(helix.circle_center().y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn reference_point_is_phi_zero() {
        let helix = positive_track();
        let p = helix.point_at(0.0);
        assert_relative_eq!(p, Point3::origin(), epsilon = 1e-9);
        assert_relative_eq!(helix.phi_at(&p.xy()), 0.0, epsilon = 1e-12);
        assert_relative_eq!(
            helix.momentum_at(0.0),
            Vector3::new(0.0, 1.0, 0.5),
            epsilon = 1e-12
        );
    }

    #[test]
    fn phi_at_inverts_point_at() {
        let helix = positive_track();
        for phi in [-2.5, -0.7, -0.01, 0.2, 1.3, 3.0] {
            let p = helix.point_at(phi);
            assert_relative_eq!(helix.phi_at(&p.xy()), phi, epsilon = 1e-9);
            let r = (p.xy() - helix.circle_center()).norm();
            assert_relative_eq!(r, helix.rho().abs(), max_relative = 1e-12);
        }
    }

    #[test]
    fn forward_motion_has_positive_arc_length() {
        let helix = positive_track();
        let dir = helix.direction_at(0.0);
        // a small step ahead along the direction of travel
        let ahead = helix.point_at(-1e-4 * helix.rho().signum());
        assert!((ahead - helix.point_at(0.0)).dot(&dir) > 0.0);
        assert!(helix.arc_length(-1e-4 * helix.rho().signum()) > 0.0);
    }

    #[test]
    fn from_circle_places_the_centre() {
        let helix = Helix::from_circle(Point2::new(50.0, 0.0), -60.0, 0.4, 12.0, 0.1, 3.5);
        assert_relative_eq!(helix.circle_center(), Point2::new(50.0, 0.0), epsilon = 1e-9);
        assert_relative_eq!(helix.rho(), -60.0, max_relative = 1e-12);
        assert_relative_eq!(helix.point_at(0.0).z, 12.0);
    }

    #[test]
    fn zero_transverse_momentum_is_rejected() {
        let err = Helix::from_momentum(Point3::origin(), Vector3::z(), 1.0, 3.5).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidTrajectory { .. }));
    }
}
