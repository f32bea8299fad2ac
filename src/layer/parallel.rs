//! **Axis-parallel planar layers**
//!
//! A [`ParallelPlanarLayer`] is a planar layer parallel to the z axis whose point of
//! closest approach to the axis sits at distance `r` and azimuth `phi`:
//!
//! ```text
//! origin = r (cos phi, sin phi, 0)
//! normal =   (cos phi, sin phi, 0)
//! ```
//!
//! Its transverse trace is the line `x cos phi + y sin phi = r`, which lets a helix
//! crossing be solved in closed form (see [`crate::crossing::solver`]). The
//! trigonometry of `phi` is evaluated once at construction.

use crate::crossing::{Candidates, solver::axial_plane_candidates};
use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::helix::HelixTrajectory;
use crate::layer::PlanarLayer;
use crate::material::Material;
use crate::traits::SurfaceWithCrossing;
use nalgebra::{Point3, Unit, Vector2, Vector3};
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct ParallelPlanarLayer {
    layer: PlanarLayer,
    r: Real,
    phi: Real,
    cos_phi: Real,
    sin_phi: Real,
    /// Transverse trace normal, `(cos phi, sin phi)`
    trace_normal: Unit<Vector2<Real>>,
}

impl ParallelPlanarLayer {
    pub const DEFAULT_NAME: &'static str = "ParallelPlanarLayer";

    /// Layer at distance `r > 0` and azimuth `phi` (radians) from the z axis.
    ///
    /// `xi_width` and `zeta_width` are the full extents across and along z; `xi_offset`
    /// shifts the rectangle sideways from the point of closest approach.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        material_inner: Arc<Material>,
        material_outer: Arc<Material>,
        r: Real,
        phi: Real,
        bz: Real,
        sorting_policy: Real,
        xi_width: Real,
        zeta_width: Real,
        xi_offset: Real,
        is_sensitive: bool,
        cell_id: i32,
        name: impl Into<String>,
    ) -> Result<Self, GeometryError> {
        if !r.is_finite() || r <= 0.0 {
            return Err(GeometryError::DegenerateLayer(format!(
                "parallel planar layer needs a positive radius, got {}",
                r
            )));
        }
        if !phi.is_finite() {
            return Err(GeometryError::DegenerateLayer(format!(
                "parallel planar layer needs a finite azimuth, got {}",
                phi
            )));
        }

        let (sin_phi, cos_phi) = phi.sin_cos();
        let layer = PlanarLayer::new(
            material_inner,
            material_outer,
            Point3::new(r * cos_phi, r * sin_phi, 0.0),
            Vector3::new(cos_phi, sin_phi, 0.0),
            bz,
            sorting_policy,
            xi_width,
            zeta_width,
            xi_offset,
            is_sensitive,
            cell_id,
            name,
        )?;

        Ok(Self {
            layer,
            r,
            phi,
            cos_phi,
            sin_phi,
            trace_normal: Unit::new_unchecked(Vector2::new(cos_phi, sin_phi)),
        })
    }

    /// Start a builder for a layer at `r`, `phi` with vacuum on both sides, no
    /// extent, cell id `-1` and the default name.
    pub fn builder(r: Real, phi: Real) -> ParallelPlanarLayerBuilder {
        ParallelPlanarLayerBuilder::new(r, phi)
    }

    pub const fn radius(&self) -> Real {
        self.r
    }

    pub const fn azimuth(&self) -> Real {
        self.phi
    }

    pub const fn cos_azimuth(&self) -> Real {
        self.cos_phi
    }

    pub const fn sin_azimuth(&self) -> Real {
        self.sin_phi
    }
}

impl Deref for ParallelPlanarLayer {
    type Target = PlanarLayer;

    fn deref(&self) -> &PlanarLayer {
        &self.layer
    }
}

impl SurfaceWithCrossing for ParallelPlanarLayer {
    fn layer(&self) -> &PlanarLayer {
        &self.layer
    }

    fn candidates(
        &self,
        helix: &dyn HelixTrajectory,
        eps: Real,
    ) -> Result<Candidates, GeometryError> {
        axial_plane_candidates(&self.trace_normal, self.r, helix, eps)
    }
}

/// Builder for [`ParallelPlanarLayer`] covering the optional constructor arguments.
#[derive(Debug, Clone)]
pub struct ParallelPlanarLayerBuilder {
    material_inner: Arc<Material>,
    material_outer: Arc<Material>,
    r: Real,
    phi: Real,
    bz: Real,
    sorting_policy: Option<Real>,
    xi_width: Real,
    zeta_width: Real,
    xi_offset: Real,
    is_sensitive: bool,
    cell_id: i32,
    name: String,
}

impl ParallelPlanarLayerBuilder {
    pub fn new(r: Real, phi: Real) -> Self {
        let vacuum = Arc::new(Material::vacuum());
        Self {
            material_inner: vacuum.clone(),
            material_outer: vacuum,
            r,
            phi,
            bz: 0.0,
            sorting_policy: None,
            xi_width: 0.0,
            zeta_width: 0.0,
            xi_offset: 0.0,
            is_sensitive: false,
            cell_id: -1,
            name: ParallelPlanarLayer::DEFAULT_NAME.to_string(),
        }
    }

    pub fn materials(mut self, inner: Arc<Material>, outer: Arc<Material>) -> Self {
        self.material_inner = inner;
        self.material_outer = outer;
        self
    }

    pub const fn bz(mut self, bz: Real) -> Self {
        self.bz = bz;
        self
    }

    /// Sorting key; defaults to the layer radius.
    pub const fn sorting_policy(mut self, sorting_policy: Real) -> Self {
        self.sorting_policy = Some(sorting_policy);
        self
    }

    pub const fn extent(mut self, xi_width: Real, zeta_width: Real, xi_offset: Real) -> Self {
        self.xi_width = xi_width;
        self.zeta_width = zeta_width;
        self.xi_offset = xi_offset;
        self
    }

    pub const fn sensitive(mut self, is_sensitive: bool) -> Self {
        self.is_sensitive = is_sensitive;
        self
    }

    pub const fn cell_id(mut self, cell_id: i32) -> Self {
        self.cell_id = cell_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn build(self) -> Result<ParallelPlanarLayer, GeometryError> {
        ParallelPlanarLayer::new(
            self.material_inner,
            self.material_outer,
            self.r,
            self.phi,
            self.bz,
            self.sorting_policy.unwrap_or(self.r),
            self.xi_width,
            self.zeta_width,
            self.xi_offset,
            self.is_sensitive,
            self.cell_id,
            self.name,
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::float_types::PI;
    use approx::assert_relative_eq;

    #[test]
    fn origin_lies_along_normal() {
        for (r, phi) in [(1.0, 0.0), (35.5, 0.3), (100.0, -2.9), (12.0, 7.5), (0.5, PI)] {
            let layer = ParallelPlanarLayer::builder(r, phi).build().unwrap();
            let origin = layer.origin().coords;
            assert_relative_eq!(origin.norm(), r, max_relative = 1e-12);
            assert_relative_eq!(origin.dot(layer.normal().as_ref()), r, max_relative = 1e-12);
            assert_relative_eq!(
                layer.cos_azimuth().powi(2) + layer.sin_azimuth().powi(2),
                1.0,
                epsilon = 1e-12
            );
            assert_eq!(layer.cos_azimuth(), phi.cos());
            assert_eq!(layer.sin_azimuth(), phi.sin());
            assert_eq!(layer.azimuth(), phi);
            assert_eq!(layer.radius(), r);
        }
    }

    #[test]
    fn builder_defaults() {
        let layer = ParallelPlanarLayer::builder(20.0, 0.1).build().unwrap();
        assert_eq!(layer.cell_id(), -1);
        assert_eq!(layer.name(), ParallelPlanarLayer::DEFAULT_NAME);
        assert_eq!(layer.sorting_policy(), 20.0);
        assert!(!layer.is_sensitive());
        assert_eq!(layer.material_inner().name(), "vacuum");
    }

    #[test]
    fn rejects_non_positive_radius() {
        for r in [0.0, -3.0, Real::NAN, Real::INFINITY] {
            let err = ParallelPlanarLayer::builder(r, 0.0).build().unwrap_err();
            assert!(matches!(err, GeometryError::DegenerateLayer(_)), "{:?}", err);
        }
        assert!(ParallelPlanarLayer::builder(1.0, Real::NAN).build().is_err());
    }
}
