//! Test support library
//! Provides helpers for building layers and helices with known geometry.

#![allow(dead_code)]

use nalgebra::{Point2, Point3};
use trackplane::{Helix, HelixTrajectory, ParallelPlanarLayer, float_types::Real};

/// Solenoid field used throughout the tests (Tesla)
pub const BZ: Real = 3.5;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// An unbounded layer at `r`, `phi`.
pub fn layer(r: Real, phi: Real) -> ParallelPlanarLayer {
    ParallelPlanarLayer::builder(r, phi).bz(BZ).build().unwrap()
}

/// Helix whose transverse circle is centred at `(cx, cy)` with `signed_radius`,
/// referenced at helix azimuth `phi0`.
pub fn circle_helix(cx: Real, cy: Real, signed_radius: Real, phi0: Real) -> Helix {
    Helix::from_circle(Point2::new(cx, cy), signed_radius, phi0, 0.0, 0.0, BZ)
}

/// Whether `point` lies on the transverse circle of `helix` within `eps`.
pub fn on_circle(helix: &impl HelixTrajectory, point: &Point3<Real>, eps: Real) -> bool {
    let r = (point.xy() - helix.circle_center()).norm();
    approx_eq(r, helix.signed_radius().abs(), eps)
}

/// Whether `point` lies on the transverse trace of `layer` within `eps`.
pub fn on_line(layer: &ParallelPlanarLayer, point: &Point3<Real>, eps: Real) -> bool {
    approx_eq(
        point.x * layer.cos_azimuth() + point.y * layer.sin_azimuth(),
        layer.radius(),
        eps,
    )
}
